use chrono::NaiveDate;
use clap::Args;
use household_eligibility::eligibility::{
    ClaimedPerson, DecisionEngine, DecisionResult, Household, HouseholdRecord,
};
use household_eligibility::error::AppError;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct CheckArgs {
    /// JSON file holding one stored household
    #[arg(long)]
    pub(crate) household: PathBuf,
    /// JSON file holding the claimed person
    #[arg(long)]
    pub(crate) person: PathBuf,
    /// Evaluation date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

pub(crate) fn run_check(args: CheckArgs) -> Result<(), AppError> {
    let CheckArgs {
        household,
        person,
        today,
    } = args;

    let household = std::fs::read_to_string(household)?;
    let person = std::fs::read_to_string(person)?;
    let engine = match today {
        Some(date) => DecisionEngine::fixed(date),
        None => DecisionEngine::default(),
    };

    let result = evaluate_payloads(&engine, &household, &person)?;

    println!("Eligibility check (evaluated {})", engine.today());
    println!("{}", result.summary());
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

pub(crate) fn evaluate_payloads(
    engine: &DecisionEngine,
    household: &str,
    person: &str,
) -> Result<DecisionResult, AppError> {
    let record: HouseholdRecord = serde_json::from_str(household)?;
    let claimed: ClaimedPerson = serde_json::from_str(person)?;
    let household = Household::try_from(record)?;
    Ok(engine.evaluate(&household, &claimed))
}
