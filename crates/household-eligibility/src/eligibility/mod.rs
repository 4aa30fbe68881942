//! Identity and eligibility decisions for benefit household checks.
//!
//! A claimed person is matched against the adults of a stored household; a match on a
//! household under the earnings threshold is then corroborated field by field. The decision
//! engine is pure and takes its evaluation date from an injected [`Clock`]. Household lookup
//! across stores and the HTTP surface sit around it.

pub mod decision;
pub mod domain;
pub mod repository;
pub mod router;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use decision::{
    build_verification, children_under_four, decide_eligibility, match_identity, Clock,
    DecisionEngine, DecisionResult, FixedClock, IdentityMatch, SystemClock, Verification,
};
pub use domain::{
    Adult, BenefitSource, Child, ClaimedPerson, DeathVerificationFlag, EligibilityOutcome,
    Household, HouseholdRecord, IdentityOutcome, QualifyingBenefits, VerificationOutcome,
};
pub use repository::{
    AuthorityError, BenefitsAuthority, HouseholdRepository, InMemoryHouseholdRepository,
    NoMatchAuthority, RepositoryError,
};
pub use router::{eligibility_router, EligibilityRequest, BENEFIT_SOURCE_HEADER};
pub use service::{EligibilityCheck, EligibilityService, EligibilityServiceError};
pub use validation::HouseholdValidationError;
