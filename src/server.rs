use crate::cli::ServeArgs;
use crate::config::AppConfig;
use crate::error::AppError;
use crate::scoring;
use crate::scoring::domain::AnswerSheet;
use crate::scoring::views::Assessment;
use crate::telemetry;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use chrono::{Local, NaiveDate};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use serde_json::json;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: Arc<PrometheusHandle>,
}

#[derive(Debug, Serialize)]
struct AssessmentResponse {
    evaluated_on: NaiveDate,
    #[serde(flatten)]
    assessment: Assessment,
}

/// All routes of the advisor API. Operational state (readiness flag,
/// Prometheus handle) arrives through an Extension layer added by [`run`].
pub fn routes() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/assessment", post(assessment_endpoint))
}

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
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let app = routes().layer(Extension(state)).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "concurso advisor ready");

    axum::serve(listener, app).await?;
    Ok(())
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
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

async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

async fn assessment_endpoint(
    Json(payload): Json<AnswerSheet>,
) -> Result<Json<AssessmentResponse>, AppError> {
    let answers = payload.validate()?;
    let assessment = scoring::compute(&answers);

    Ok(Json(AssessmentResponse {
        evaluated_on: Local::now().date_naive(),
        assessment,
    }))
}
