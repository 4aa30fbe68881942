use super::domain::{Household, HouseholdRecord};

/// Reasons a stored household cannot be handed to the decision engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HouseholdValidationError {
    #[error("household {household_identifier} has no adults")]
    NoAdults { household_identifier: String },
    #[error("household {household_identifier} has an adult without a national insurance number")]
    BlankNino { household_identifier: String },
}

impl TryFrom<HouseholdRecord> for Household {
    type Error = HouseholdValidationError;

    fn try_from(record: HouseholdRecord) -> Result<Self, Self::Error> {
        let HouseholdRecord {
            household_identifier,
            earnings_threshold_exceeded,
            adults,
            children,
            ..
        } = record;

        if adults.is_empty() {
            return Err(HouseholdValidationError::NoAdults {
                household_identifier,
            });
        }

        if adults.iter().any(|adult| adult.nino.trim().is_empty()) {
            return Err(HouseholdValidationError::BlankNino {
                household_identifier,
            });
        }

        Ok(Household {
            household_identifier,
            earnings_threshold_exceeded,
            adults,
            children,
        })
    }
}
