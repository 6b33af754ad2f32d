//! HTTP routes.
//!
//! ## 端点
//! - `GET /?campfireId=...` - 查询入场权利（查询参数）
//! - `POST /` - 查询入场权利（JSON body）
//! - `OPTIONS /` - CORS 预检，由 `CorsLayer` 直接应答
//! - `GET /health`, `/health/ready`, `/health/live` - 健康检查
//! - `GET /metrics` - Prometheus 指标
//!
//! Access checks always answer `200 OK`; the envelope's `success` field
//! carries the outcome.

use super::state::AppState;
use crate::application::{JsonBodyExtractor, QueryParamExtractor};
use crate::domain::admission::RecordStore;
use crate::infrastructure::observability::endpoints;
use crate::shared::protocol::{messages, AccessEnvelope};
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, rejection::QueryRejection, Query, State},
    http::{header, Method},
    routing::get,
    Json, Router,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::warn;

/// Permissive CORS: the static front end is served from another origin.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

/// Builds the full router with CORS applied to every route.
pub fn create_router<S: RecordStore + 'static>(state: AppState<S>) -> Router {
    Router::new()
        .route("/", get(check_via_query::<S>).post(check_via_body::<S>))
        .route("/health", get(endpoints::health::<S>))
        .route("/health/ready", get(endpoints::readiness::<S>))
        .route("/health/live", get(endpoints::liveness::<S>))
        .route("/metrics", get(endpoints::metrics))
        .layer(cors_layer())
        .with_state(state)
}

/// GET 入口
async fn check_via_query<S: RecordStore + 'static>(
    State(state): State<AppState<S>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Json<AccessEnvelope> {
    let params = match query {
        Ok(Query(params)) => Some(params),
        Err(rejection) => {
            warn!(error = %rejection, "query string rejected");
            None
        }
    };

    Json(state.use_case.execute(&QueryParamExtractor, &params).await)
}

/// POST 入口
async fn check_via_body<S: RecordStore + 'static>(
    State(state): State<AppState<S>>,
    body: Result<Bytes, BytesRejection>,
) -> Json<AccessEnvelope> {
    match body {
        Ok(body) => Json(state.use_case.execute(&JsonBodyExtractor, &body[..]).await),
        Err(rejection) => {
            warn!(error = %rejection, "request body rejected");
            Json(AccessEnvelope::rejected(messages::MALFORMED_REQUEST))
        }
    }
}
