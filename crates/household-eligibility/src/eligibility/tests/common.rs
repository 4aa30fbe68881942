use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::eligibility::decision::{DecisionEngine, DecisionResult};
use crate::eligibility::domain::{
    Adult, Child, ClaimedPerson, Household, HouseholdRecord, IdentityOutcome,
};
use crate::eligibility::repository::{
    AuthorityError, BenefitsAuthority, HouseholdRepository, InMemoryHouseholdRepository,
    RepositoryError,
};
use crate::eligibility::service::EligibilityService;

pub(super) const HOMER_NINO: &str = "QQ123456A";
pub(super) const MARGE_NINO: &str = "QQ123456B";
pub(super) const SIMPSON_UC_HOUSEHOLD: &str = "simpson-uc-001";
pub(super) const SIMPSON_LEGACY_HOUSEHOLD: &str = "simpson-legacy-001";

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date")
}

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn engine() -> DecisionEngine {
    DecisionEngine::fixed(today())
}

pub(super) fn homer() -> Adult {
    Adult {
        nino: HOMER_NINO.to_string(),
        forename: "Homer".to_string(),
        surname: "Simpson".to_string(),
        date_of_birth: Some(date(1985, 12, 31)),
        address_line1: Some("742 Evergreen Terrace".to_string()),
        postcode: Some("AA1 1AA".to_string()),
        email_address: Some("homer@example.com".to_string()),
        mobile_phone_number: Some("07700900000".to_string()),
    }
}

pub(super) fn marge() -> Adult {
    Adult {
        nino: MARGE_NINO.to_string(),
        forename: "Marge".to_string(),
        surname: "Simpson".to_string(),
        date_of_birth: Some(date(1987, 3, 19)),
        address_line1: Some("742 Evergreen Terrace".to_string()),
        postcode: Some("AA1 1AA".to_string()),
        email_address: Some("marge@example.com".to_string()),
        mobile_phone_number: Some("07700900001".to_string()),
    }
}

/// Three years old, five years old, and one day short of four on `today()`.
pub(super) fn children() -> Vec<Child> {
    vec![
        Child {
            date_of_birth: date(2022, 6, 1),
        },
        Child {
            date_of_birth: date(2020, 6, 1),
        },
        Child {
            date_of_birth: date(2021, 6, 2),
        },
    ]
}

pub(super) fn household_record() -> HouseholdRecord {
    HouseholdRecord {
        household_identifier: SIMPSON_UC_HOUSEHOLD.to_string(),
        file_import_number: 1,
        earnings_threshold_exceeded: false,
        adults: vec![homer(), marge()],
        children: children(),
    }
}

pub(super) fn household() -> Household {
    Household::try_from(household_record()).expect("valid household")
}

pub(super) fn household_over_threshold() -> Household {
    let mut record = household_record();
    record.earnings_threshold_exceeded = true;
    Household::try_from(record).expect("valid household")
}

pub(super) fn claimed_homer() -> ClaimedPerson {
    let adult = homer();
    ClaimedPerson {
        nino: adult.nino,
        forename: adult.forename,
        surname: adult.surname,
        date_of_birth: adult.date_of_birth,
        address_line1: adult.address_line1,
        postcode: adult.postcode,
        email_address: adult.email_address,
        mobile_phone_number: adult.mobile_phone_number,
        pregnant_dependant_dob: None,
    }
}

pub(super) fn claimed_stranger() -> ClaimedPerson {
    ClaimedPerson {
        nino: "QQ999999Z".to_string(),
        forename: "Ned".to_string(),
        surname: "Flanders".to_string(),
        ..claimed_homer()
    }
}

pub(super) fn uc_store() -> Arc<InMemoryHouseholdRepository> {
    Arc::new(InMemoryHouseholdRepository::from_records(vec![household_record()]))
}

pub(super) fn legacy_store() -> Arc<InMemoryHouseholdRepository> {
    let mut record = household_record();
    record.household_identifier = SIMPSON_LEGACY_HOUSEHOLD.to_string();
    record.adults = vec![marge()];
    Arc::new(InMemoryHouseholdRepository::from_records(vec![record]))
}

pub(super) type MemoryService = EligibilityService<
    InMemoryHouseholdRepository,
    InMemoryHouseholdRepository,
    RecordingAuthority,
>;

pub(super) fn build_service() -> (MemoryService, Arc<RecordingAuthority>) {
    let authority = Arc::new(RecordingAuthority::default());
    let service =
        EligibilityService::new(uc_store(), legacy_store(), authority.clone(), engine());
    (service, authority)
}

/// Authority double that answers with a fixed match and counts calls.
#[derive(Default)]
pub(super) struct RecordingAuthority {
    calls: AtomicUsize,
}

impl RecordingAuthority {
    pub(super) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl BenefitsAuthority for RecordingAuthority {
    fn check(&self, _claimed: &ClaimedPerson) -> Result<DecisionResult, AuthorityError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(DecisionResult {
            identity_status: IdentityOutcome::Matched,
            ..DecisionResult::default()
        })
    }
}

pub(super) struct OfflineAuthority;

impl BenefitsAuthority for OfflineAuthority {
    fn check(&self, _claimed: &ClaimedPerson) -> Result<DecisionResult, AuthorityError> {
        Err(AuthorityError::Unavailable("connection refused".to_string()))
    }
}

pub(super) struct UnavailableRepository;

impl HouseholdRepository for UnavailableRepository {
    fn find_by_adult_nino(&self, _nino: &str) -> Result<Option<HouseholdRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
