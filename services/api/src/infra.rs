use chrono::NaiveDate;
use household_eligibility::eligibility::{HouseholdRecord, InMemoryHouseholdRepository};
use household_eligibility::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Build an in-memory household store, seeded from a JSON array of households when given.
pub(crate) fn load_household_store(
    label: &str,
    seed: Option<&Path>,
) -> Result<InMemoryHouseholdRepository, AppError> {
    let Some(path) = seed else {
        info!(store = label, "household store starts empty");
        return Ok(InMemoryHouseholdRepository::default());
    };

    let raw = std::fs::read_to_string(path)?;
    let records = parse_household_records(&raw)?;
    info!(
        store = label,
        households = records.len(),
        path = %path.display(),
        "household store seeded"
    );
    Ok(InMemoryHouseholdRepository::from_records(records))
}

pub(crate) fn parse_household_records(raw: &str) -> Result<Vec<HouseholdRecord>, AppError> {
    Ok(serde_json::from_str(raw)?)
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
