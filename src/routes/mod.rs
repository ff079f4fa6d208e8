//! Router assembly: resource routes, common routes and the HTTP middleware stack.

pub mod api;
pub mod common;

pub use api::api_routes;
pub use common::common_routes;

use crate::config::AppConfig;
use crate::state::AppState;
use axum::Router;
use tower_http::{limit::RequestBodyLimitLayer, timeout::TimeoutLayer, trace::TraceLayer};

/// The full application: `/api/...` resources plus `/health`, `/ready`, `/version`,
/// traced, with a request timeout (408) and a body-size limit (413).
pub fn app(state: AppState, config: &AppConfig) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(api_routes(state))
        .layer(RequestBodyLimitLayer::new(config.max_body_bytes))
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}
