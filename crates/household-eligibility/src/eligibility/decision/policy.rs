use super::super::domain::{EligibilityOutcome, Household, IdentityOutcome};

/// Identity dominates: an unmatched claim leaves eligibility unset rather than denied.
pub fn decide_eligibility(identity: IdentityOutcome, household: &Household) -> EligibilityOutcome {
    if identity == IdentityOutcome::NotMatched {
        return EligibilityOutcome::NotSet;
    }

    if household.earnings_threshold_exceeded() {
        return EligibilityOutcome::NotConfirmed;
    }

    EligibilityOutcome::Confirmed
}
