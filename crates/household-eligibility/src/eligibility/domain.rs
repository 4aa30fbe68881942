use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Adult member of a stored benefits household.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adult {
    pub nino: String,
    pub forename: String,
    pub surname: String,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub address_line1: Option<String>,
    #[serde(default)]
    pub postcode: Option<String>,
    #[serde(default)]
    pub email_address: Option<String>,
    #[serde(default)]
    pub mobile_phone_number: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Child {
    pub date_of_birth: NaiveDate,
}

/// Identity and contact details submitted with an eligibility check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimedPerson {
    pub nino: String,
    pub forename: String,
    pub surname: String,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub address_line1: Option<String>,
    #[serde(default)]
    pub postcode: Option<String>,
    #[serde(default)]
    pub email_address: Option<String>,
    #[serde(default)]
    pub mobile_phone_number: Option<String>,
    #[serde(default)]
    pub pregnant_dependant_dob: Option<NaiveDate>,
}

/// Household as it is held by a benefits store, prior to validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseholdRecord {
    pub household_identifier: String,
    /// Import batch that produced this version of the household; higher is newer.
    #[serde(default)]
    pub file_import_number: u32,
    #[serde(default)]
    pub earnings_threshold_exceeded: bool,
    pub adults: Vec<Adult>,
    #[serde(default)]
    pub children: Vec<Child>,
}

impl HouseholdRecord {
    pub fn has_adult_with_nino(&self, nino: &str) -> bool {
        self.adults.iter().any(|adult| adult.nino == nino)
    }
}

/// Validated household with at least one adult. Built via `Household::try_from`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Household {
    pub(crate) household_identifier: String,
    pub(crate) earnings_threshold_exceeded: bool,
    pub(crate) adults: Vec<Adult>,
    pub(crate) children: Vec<Child>,
}

impl Household {
    pub fn household_identifier(&self) -> &str {
        &self.household_identifier
    }

    pub fn earnings_threshold_exceeded(&self) -> bool {
        self.earnings_threshold_exceeded
    }

    pub fn adults(&self) -> &[Adult] {
        &self.adults
    }

    pub fn children(&self) -> &[Child] {
        &self.children
    }
}

/// Whether the claimed person matched a stored adult.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IdentityOutcome {
    Matched,
    #[default]
    NotMatched,
}

/// Eligibility of a household once identity is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EligibilityOutcome {
    #[default]
    NotSet,
    NotConfirmed,
    Confirmed,
}

/// Outcome shared by every per-field corroboration check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationOutcome {
    #[default]
    NotSet,
    NotSupplied,
    Matched,
    NotMatched,
}

impl VerificationOutcome {
    pub(crate) fn from_match(matched: bool) -> Self {
        if matched {
            Self::Matched
        } else {
            Self::NotMatched
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QualifyingBenefits {
    #[default]
    NotSet,
    UniversalCredit,
}

/// Death verification is not performed by the household stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DeathVerificationFlag {
    #[default]
    #[serde(rename = "n/a")]
    NA,
}

/// Lookup tier that answered an eligibility check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenefitSource {
    UniversalCredit,
    Legacy,
    Authority,
}

impl BenefitSource {
    pub const fn label(self) -> &'static str {
        match self {
            BenefitSource::UniversalCredit => "universal_credit",
            BenefitSource::Legacy => "legacy",
            BenefitSource::Authority => "authority",
        }
    }
}
