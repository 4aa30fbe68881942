use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use household_eligibility::eligibility::{
    eligibility_router, BenefitsAuthority, EligibilityService, HouseholdRepository,
};
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_eligibility_routes<U, L, A>(
    service: Arc<EligibilityService<U, L, A>>,
) -> axum::Router
where
    U: HouseholdRepository + 'static,
    L: HouseholdRepository + 'static,
    A: BenefitsAuthority + 'static,
{
    eligibility_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use chrono::NaiveDate;
    use household_eligibility::eligibility::{
        DecisionEngine, InMemoryHouseholdRepository, NoMatchAuthority,
    };
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::AtomicBool;
    use tower::ServiceExt;

    fn app(ready: bool) -> axum::Router {
        let service = Arc::new(EligibilityService::new(
            Arc::new(InMemoryHouseholdRepository::default()),
            Arc::new(InMemoryHouseholdRepository::default()),
            Arc::new(NoMatchAuthority),
            DecisionEngine::fixed(NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid")),
        ));
        let state = AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        };
        with_eligibility_routes(service).layer(Extension(state))
    }

    async fn get(app: axum::Router, uri: &str) -> axum::response::Response {
        app.oneshot(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("response")
    }

    #[tokio::test]
    async fn health_is_always_ok() {
        let response = get(app(false), "/health").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn readiness_reflects_flag() {
        assert_eq!(
            get(app(false), "/ready").await.status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(get(app(true), "/ready").await.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_claimant_gets_authority_answer() {
        let response = app(true)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/v2/dwp/eligibility")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        json!({
                            "person": {
                                "nino": "QQ123456C",
                                "forename": "Bart",
                                "surname": "Simpson"
                            }
                        })
                        .to_string(),
                    ))
                    .expect("request builds"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get("x-benefit-source")
                .and_then(|value| value.to_str().ok()),
            Some("authority")
        );
        let body = axum::body::to_bytes(response.into_body(), 4096)
            .await
            .expect("read body");
        let body: serde_json::Value = serde_json::from_slice(&body).expect("json payload");
        assert_eq!(body["identity_status"], "NOT_MATCHED");
        assert_eq!(body["eligibility_status"], "NOT_SET");
    }
}
