use std::sync::{Arc, Mutex, PoisonError};

use super::decision::DecisionResult;
use super::domain::{ClaimedPerson, HouseholdRecord};

/// Household store keyed by the national insurance numbers of its adults.
pub trait HouseholdRepository: Send + Sync {
    /// Most recent import (highest `file_import_number`) of the household containing `nino`.
    fn find_by_adult_nino(&self, nino: &str) -> Result<Option<HouseholdRecord>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("household store unavailable: {0}")]
    Unavailable(String),
}

/// Remote benefits authority consulted when no local store knows the claimant.
pub trait BenefitsAuthority: Send + Sync {
    fn check(&self, claimed: &ClaimedPerson) -> Result<DecisionResult, AuthorityError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AuthorityError {
    #[error("benefits authority unavailable: {0}")]
    Unavailable(String),
}

/// Authority stand-in for deployments without an upstream connection.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoMatchAuthority;

impl BenefitsAuthority for NoMatchAuthority {
    fn check(&self, _claimed: &ClaimedPerson) -> Result<DecisionResult, AuthorityError> {
        Ok(DecisionResult::default())
    }
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryHouseholdRepository {
    records: Arc<Mutex<Vec<HouseholdRecord>>>,
}

impl InMemoryHouseholdRepository {
    pub fn from_records(records: Vec<HouseholdRecord>) -> Self {
        Self {
            records: Arc::new(Mutex::new(records)),
        }
    }

    pub fn insert(&self, record: HouseholdRecord) -> Result<(), RepositoryError> {
        self.records.lock().map_err(poisoned)?.push(record);
        Ok(())
    }

    pub fn len(&self) -> Result<usize, RepositoryError> {
        Ok(self.records.lock().map_err(poisoned)?.len())
    }

    pub fn is_empty(&self) -> Result<bool, RepositoryError> {
        Ok(self.len()? == 0)
    }
}

impl HouseholdRepository for InMemoryHouseholdRepository {
    fn find_by_adult_nino(&self, nino: &str) -> Result<Option<HouseholdRecord>, RepositoryError> {
        let records = self.records.lock().map_err(poisoned)?;
        Ok(records
            .iter()
            .filter(|record| record.has_adult_with_nino(nino))
            .max_by_key(|record| record.file_import_number)
            .cloned())
    }
}

fn poisoned<T>(_: PoisonError<T>) -> RepositoryError {
    RepositoryError::Unavailable("household store lock poisoned".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poisoned_store_reports_unavailable_for_every_access() {
        let store = InMemoryHouseholdRepository::default();
        let shared = store.clone();
        let _ = std::thread::spawn(move || {
            let _guard = shared.records.lock().expect("first lock");
            panic!("writer crashed while holding the household store");
        })
        .join();

        assert!(matches!(store.len(), Err(RepositoryError::Unavailable(_))));
        assert!(matches!(
            store.is_empty(),
            Err(RepositoryError::Unavailable(_))
        ));
        assert!(matches!(
            store.find_by_adult_nino("QQ123456A"),
            Err(RepositoryError::Unavailable(_))
        ));
    }
}
