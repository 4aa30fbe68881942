use crate::cli::ServeArgs;
use crate::infra::{load_household_store, AppState};
use crate::routes::with_eligibility_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use household_eligibility::config::AppConfig;
use household_eligibility::eligibility::{DecisionEngine, EligibilityService, NoMatchAuthority};
use household_eligibility::error::AppError;
use household_eligibility::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{info, warn};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let universal_credit = Arc::new(load_household_store(
        "universal_credit",
        config.stores.universal_credit_seed.as_deref(),
    )?);
    let legacy = Arc::new(load_household_store(
        "legacy",
        config.stores.legacy_seed.as_deref(),
    )?);
    warn!("no benefits authority configured; unknown claimants will not be matched");
    let service = Arc::new(EligibilityService::new(
        universal_credit,
        legacy,
        Arc::new(NoMatchAuthority),
        DecisionEngine::default(),
    ));

    let app = with_eligibility_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "household eligibility service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
