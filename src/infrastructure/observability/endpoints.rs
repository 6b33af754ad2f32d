//! Health and metrics handlers.
//!
//! Readiness and `/health` probe the roster on every call: the sheet is
//! edited externally, so a cached answer would go stale.

use super::health::HealthDetails;
use crate::domain::admission::RecordStore;
use crate::infrastructure::http::AppState;
use crate::shared::metrics::METRICS;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::warn;

/// Prometheus metrics端点
pub async fn metrics() -> Response {
    (StatusCode::OK, METRICS.export()).into_response()
}

/// 健康检查端点，降级时仍返回 200，由 `status` 字段区分
pub async fn health<S: RecordStore + 'static>(State(state): State<AppState<S>>) -> Response {
    let details = probe_store(&state).await;
    let response = state.health.check_health_detailed(details);

    (StatusCode::OK, Json(response)).into_response()
}

/// 就绪检查端点（Kubernetes readiness probe）
pub async fn readiness<S: RecordStore + 'static>(State(state): State<AppState<S>>) -> Response {
    probe_store(&state).await;

    if state.health.check_readiness() {
        StatusCode::OK.into_response()
    } else {
        StatusCode::SERVICE_UNAVAILABLE.into_response()
    }
}

/// 存活检查端点（Kubernetes liveness probe）
pub async fn liveness<S: RecordStore + 'static>(State(state): State<AppState<S>>) -> Response {
    if state.health.check_liveness() {
        StatusCode::OK.into_response()
    } else {
        StatusCode::SERVICE_UNAVAILABLE.into_response()
    }
}

async fn probe_store<S: RecordStore + 'static>(state: &AppState<S>) -> HealthDetails {
    let service = state.use_case.service();
    let sheet = service.store().sheet_name().to_string();

    match service.inspect().await {
        Ok(structure) => {
            state.health.record_store_probe(true);
            HealthDetails {
                sheet,
                store_reachable: true,
                row_count: structure.row_count,
            }
        }
        Err(e) => {
            warn!(error = %e, "store probe failed");
            state.health.record_store_probe(false);
            HealthDetails {
                sheet,
                store_reachable: false,
                row_count: 0,
            }
        }
    }
}
