use super::super::domain::{Adult, ClaimedPerson, Household, IdentityOutcome};

/// Result of matching a claimed person against a household's adults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityMatch<'a> {
    Matched(&'a Adult),
    NotMatched,
}

impl<'a> IdentityMatch<'a> {
    pub fn outcome(&self) -> IdentityOutcome {
        match *self {
            IdentityMatch::Matched(_) => IdentityOutcome::Matched,
            IdentityMatch::NotMatched => IdentityOutcome::NotMatched,
        }
    }

    pub fn adult(&self) -> Option<&'a Adult> {
        match *self {
            IdentityMatch::Matched(adult) => Some(adult),
            IdentityMatch::NotMatched => None,
        }
    }
}

/// First adult, in stored order, whose identity fields equal the claim.
pub fn match_identity<'a>(household: &'a Household, claimed: &ClaimedPerson) -> IdentityMatch<'a> {
    household
        .adults()
        .iter()
        .find(|adult| is_matching_adult(adult, claimed))
        .map_or(IdentityMatch::NotMatched, IdentityMatch::Matched)
}

// Exact comparison; a missing date of birth on either side never matches.
pub(crate) fn is_matching_adult(adult: &Adult, claimed: &ClaimedPerson) -> bool {
    adult.nino == claimed.nino
        && adult.surname == claimed.surname
        && matches!(
            (adult.date_of_birth, claimed.date_of_birth),
            (Some(stored), Some(supplied)) if stored == supplied
        )
}
