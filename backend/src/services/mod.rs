//! HTTP surface of the service.
//!
//! - `feedbacks`: submission, listing, dashboard, status updates and deletion under `/api/feedbacks`.
//! - `health`: store liveness check under `/api/health`.

pub mod feedbacks;
pub mod health;

use crate::error::ApiError;
use crate::store::FeedbackStore;
use actix_web::web;

/// Registers shared state, extractor configuration and every route. Used by `main.rs`
/// and by the endpoint tests, so both serve exactly the same application.
pub fn configure_app(
    store: web::Data<FeedbackStore>,
    json_limit: usize,
) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(json_config(json_limit))
            .app_data(query_config())
            .app_data(store)
            .service(feedbacks::configure_routes())
            .service(health::configure_routes());
    }
}

/// Body extraction failures answer in the same `{ success: false, error }` shape
/// as validation failures.
fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| ApiError::MalformedRequest(err.to_string()).into())
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| ApiError::MalformedRequest(err.to_string()).into())
}
