mod clock;
mod identity;
mod policy;
mod verification;

pub use clock::{Clock, FixedClock, SystemClock};
pub use identity::{match_identity, IdentityMatch};
pub use policy::decide_eligibility;
pub use verification::{build_verification, children_under_four, Verification};

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::{
    ClaimedPerson, DeathVerificationFlag, EligibilityOutcome, Household, IdentityOutcome,
    QualifyingBenefits, VerificationOutcome,
};

/// Stateless engine turning a household and a claim into a decision.
#[derive(Clone)]
pub struct DecisionEngine {
    clock: Arc<dyn Clock>,
}

impl Default for DecisionEngine {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

impl DecisionEngine {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    pub fn fixed(today: NaiveDate) -> Self {
        Self::new(Arc::new(FixedClock(today)))
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn evaluate(&self, household: &Household, claimed: &ClaimedPerson) -> DecisionResult {
        let identity = match_identity(household, claimed);
        let identity_status = identity.outcome();
        let eligibility_status = decide_eligibility(identity_status, household);

        let adult = match (identity, eligibility_status) {
            (IdentityMatch::Matched(adult), EligibilityOutcome::Confirmed) => adult,
            _ => {
                return DecisionResult {
                    identity_status,
                    eligibility_status,
                    ..DecisionResult::default()
                }
            }
        };

        let Verification {
            address_line1_match,
            postcode_match,
            email_address_match,
            mobile_phone_match,
            pregnant_child_dob_match,
            dob_of_children_under4,
        } = build_verification(adult, claimed, household, self.clock.today());

        DecisionResult {
            identity_status,
            eligibility_status,
            address_line1_match,
            postcode_match,
            email_address_match,
            mobile_phone_match,
            pregnant_child_dob_match,
            qualifying_benefits: QualifyingBenefits::UniversalCredit,
            dob_of_children_under4,
            household_identifier: household.household_identifier().to_string(),
            death_verification_flag: DeathVerificationFlag::NA,
        }
    }
}

impl std::fmt::Debug for DecisionEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecisionEngine").finish_non_exhaustive()
    }
}

/// Identity, eligibility, and verification outcome for one check.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DecisionResult {
    pub identity_status: IdentityOutcome,
    pub eligibility_status: EligibilityOutcome,
    pub address_line1_match: VerificationOutcome,
    pub postcode_match: VerificationOutcome,
    pub email_address_match: VerificationOutcome,
    pub mobile_phone_match: VerificationOutcome,
    pub pregnant_child_dob_match: VerificationOutcome,
    pub qualifying_benefits: QualifyingBenefits,
    pub dob_of_children_under4: Vec<NaiveDate>,
    /// Identifier of the stored household, set only when eligibility is confirmed. Left empty
    /// otherwise, and empty in answers relayed from the benefits authority.
    pub household_identifier: String,
    pub death_verification_flag: DeathVerificationFlag,
}

impl DecisionResult {
    pub fn summary(&self) -> String {
        match (self.identity_status, self.eligibility_status) {
            (IdentityOutcome::NotMatched, _) => "identity not matched".to_string(),
            (IdentityOutcome::Matched, EligibilityOutcome::NotConfirmed) => {
                "identity matched, earnings threshold exceeded".to_string()
            }
            (IdentityOutcome::Matched, EligibilityOutcome::Confirmed) => format!(
                "identity matched, eligibility confirmed for household {} ({} child(ren) under four)",
                self.household_identifier,
                self.dob_of_children_under4.len()
            ),
            (IdentityOutcome::Matched, EligibilityOutcome::NotSet) => {
                "identity matched, eligibility not set".to_string()
            }
        }
    }
}
