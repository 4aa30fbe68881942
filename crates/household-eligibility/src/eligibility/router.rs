use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;

use super::domain::ClaimedPerson;
use super::repository::{BenefitsAuthority, HouseholdRepository};
use super::service::{EligibilityService, EligibilityServiceError};

pub const BENEFIT_SOURCE_HEADER: &str = "x-benefit-source";

/// Inbound eligibility check payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityRequest {
    pub person: ClaimedPerson,
}

/// Router exposing the identity and eligibility check.
pub fn eligibility_router<U, L, A>(service: Arc<EligibilityService<U, L, A>>) -> Router
where
    U: HouseholdRepository + 'static,
    L: HouseholdRepository + 'static,
    A: BenefitsAuthority + 'static,
{
    Router::new()
        .route("/v2/dwp/eligibility", post(check_handler::<U, L, A>))
        .with_state(service)
}

pub(crate) async fn check_handler<U, L, A>(
    State(service): State<Arc<EligibilityService<U, L, A>>>,
    axum::Json(request): axum::Json<EligibilityRequest>,
) -> Response
where
    U: HouseholdRepository + 'static,
    L: HouseholdRepository + 'static,
    A: BenefitsAuthority + 'static,
{
    match service.check(&request.person) {
        Ok(check) => (
            StatusCode::OK,
            [(BENEFIT_SOURCE_HEADER, check.source.label())],
            axum::Json(check.result),
        )
            .into_response(),
        Err(EligibilityServiceError::Household(error)) => {
            warn!(%error, "stored household failed validation");
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => {
            warn!(error = %other, "eligibility check could not be completed");
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::SERVICE_UNAVAILABLE, axum::Json(payload)).into_response()
        }
    }
}
