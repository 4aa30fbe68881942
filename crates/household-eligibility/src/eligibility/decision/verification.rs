use chrono::{Months, NaiveDate};

use super::super::domain::{Adult, Child, ClaimedPerson, Household, VerificationOutcome};

const ADDRESS_PREFIX_LEN: usize = 6;
const CHILD_AGE_LIMIT: Months = Months::new(4 * 12);

/// Per-field corroboration of a matched adult against the claim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verification {
    pub address_line1_match: VerificationOutcome,
    pub postcode_match: VerificationOutcome,
    pub email_address_match: VerificationOutcome,
    pub mobile_phone_match: VerificationOutcome,
    pub pregnant_child_dob_match: VerificationOutcome,
    pub dob_of_children_under4: Vec<NaiveDate>,
}

pub fn build_verification(
    adult: &Adult,
    claimed: &ClaimedPerson,
    household: &Household,
    today: NaiveDate,
) -> Verification {
    Verification {
        address_line1_match: VerificationOutcome::from_match(first_six_character_match(
            adult.address_line1.as_deref(),
            claimed.address_line1.as_deref(),
        )),
        postcode_match: VerificationOutcome::from_match(equal_ignoring_whitespace(
            adult.postcode.as_deref(),
            claimed.postcode.as_deref(),
        )),
        email_address_match: determine_outcome(
            adult.email_address.as_deref(),
            claimed.email_address.as_deref(),
            are_equal,
        ),
        mobile_phone_match: determine_outcome(
            adult.mobile_phone_number.as_deref(),
            claimed.mobile_phone_number.as_deref(),
            are_equal,
        ),
        pregnant_child_dob_match: pregnant_dependant_outcome(claimed),
        dob_of_children_under4: children_under_four(household.children(), today),
    }
}

/// Dates of birth strictly after `today` minus four calendar years, in stored order.
pub fn children_under_four(children: &[Child], today: NaiveDate) -> Vec<NaiveDate> {
    let four_years_ago = today
        .checked_sub_months(CHILD_AGE_LIMIT)
        .unwrap_or(NaiveDate::MIN);

    children
        .iter()
        .map(|child| child.date_of_birth)
        .filter(|dob| *dob > four_years_ago)
        .collect()
}

fn determine_outcome(
    stored: Option<&str>,
    supplied: Option<&str>,
    comparator: fn(&str, &str) -> bool,
) -> VerificationOutcome {
    match (stored, supplied) {
        (Some(stored), Some(supplied)) => {
            VerificationOutcome::from_match(comparator(stored, supplied))
        }
        _ => VerificationOutcome::NotMatched,
    }
}

// Acknowledgment only: a supplied date is left for the caller's policy to resolve.
fn pregnant_dependant_outcome(claimed: &ClaimedPerson) -> VerificationOutcome {
    match claimed.pregnant_dependant_dob {
        Some(_) => VerificationOutcome::NotSet,
        None => VerificationOutcome::NotSupplied,
    }
}

pub(crate) fn are_equal(stored: &str, supplied: &str) -> bool {
    stored == supplied
}

pub(crate) fn equal_ignoring_whitespace(stored: Option<&str>, supplied: Option<&str>) -> bool {
    match (stored, supplied) {
        (Some(stored), Some(supplied)) => strip_whitespace(stored).eq(strip_whitespace(supplied)),
        _ => false,
    }
}

pub(crate) fn first_six_character_match(stored: Option<&str>, supplied: Option<&str>) -> bool {
    match (stored, supplied) {
        (Some(stored), Some(supplied)) => {
            normalized_prefix(stored) == normalized_prefix(supplied)
        }
        _ => false,
    }
}

fn strip_whitespace(value: &str) -> impl Iterator<Item = char> + '_ {
    value.chars().filter(|c| !c.is_whitespace())
}

fn normalized_prefix(value: &str) -> String {
    strip_whitespace(value)
        .flat_map(char::to_lowercase)
        .take(ADDRESS_PREFIX_LEN)
        .collect()
}
