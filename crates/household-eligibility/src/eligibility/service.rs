use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use super::decision::{DecisionEngine, DecisionResult};
use super::domain::{BenefitSource, ClaimedPerson, Household, HouseholdRecord};
use super::repository::{AuthorityError, BenefitsAuthority, HouseholdRepository, RepositoryError};
use super::validation::HouseholdValidationError;

/// Decision together with the lookup tier that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EligibilityCheck {
    pub source: BenefitSource,
    pub result: DecisionResult,
}

/// Resolves the claimant's household across stores and runs the decision engine.
///
/// Universal Credit is consulted first because it holds most households, then the legacy
/// benefits store, then the remote authority.
pub struct EligibilityService<U, L, A> {
    universal_credit: Arc<U>,
    legacy: Arc<L>,
    authority: Arc<A>,
    engine: DecisionEngine,
}

impl<U, L, A> EligibilityService<U, L, A>
where
    U: HouseholdRepository + 'static,
    L: HouseholdRepository + 'static,
    A: BenefitsAuthority + 'static,
{
    pub fn new(
        universal_credit: Arc<U>,
        legacy: Arc<L>,
        authority: Arc<A>,
        engine: DecisionEngine,
    ) -> Self {
        Self {
            universal_credit,
            legacy,
            authority,
            engine,
        }
    }

    pub fn check(
        &self,
        claimed: &ClaimedPerson,
    ) -> Result<EligibilityCheck, EligibilityServiceError> {
        let nino = claimed.nino.as_str();

        if let Some(record) = self.universal_credit.find_by_adult_nino(nino)? {
            debug!(household = %record.household_identifier, "matched universal credit household");
            return self.decide(BenefitSource::UniversalCredit, record, claimed);
        }

        if let Some(record) = self.legacy.find_by_adult_nino(nino)? {
            debug!(household = %record.household_identifier, "matched legacy household");
            return self.decide(BenefitSource::Legacy, record, claimed);
        }

        debug!("no household found in stores, calling benefits authority");
        let result = self.authority.check(claimed)?;
        Ok(EligibilityCheck {
            source: BenefitSource::Authority,
            result,
        })
    }

    fn decide(
        &self,
        source: BenefitSource,
        record: HouseholdRecord,
        claimed: &ClaimedPerson,
    ) -> Result<EligibilityCheck, EligibilityServiceError> {
        let household = Household::try_from(record)?;
        let result = self.engine.evaluate(&household, claimed);
        debug!(
            source = source.label(),
            identity = ?result.identity_status,
            eligibility = ?result.eligibility_status,
            "eligibility decided"
        );
        Ok(EligibilityCheck { source, result })
    }
}

/// Error raised by the eligibility service.
#[derive(Debug, thiserror::Error)]
pub enum EligibilityServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Authority(#[from] AuthorityError),
    #[error(transparent)]
    Household(#[from] HouseholdValidationError),
}
