//! # Dashboard Service
//!
//! Backend logic for the `GET /api/feedbacks/dashboard` endpoint.
//!
//! ## Workflow
//!
//! 1.  **Snapshot**: `feedbacks::dashboard` reads totals, per-status counts, the average
//!     rating, the category breakdown and the five newest records in one read transaction.
//!
//! 2.  **HTTP Response**: the figures are returned under `stats`. Nothing is cached.

use crate::error::ApiError;
use crate::store::{feedbacks, FeedbackStore};
use actix_web::{web, HttpResponse};
use common::responses::StatsResponse;

/// Actix web handler for `GET /api/feedbacks/dashboard`.
///
/// # Arguments
/// * `store` - Shared handle on the feedback collection.
///
/// # Returns
/// - `200 OK` with `{ success, stats }`, zeroed on an empty collection.
/// - `500 Internal Server Error` if the snapshot cannot be read.
pub(crate) async fn process(store: web::Data<FeedbackStore>) -> Result<HttpResponse, ApiError> {
    let stats = store.run(feedbacks::dashboard).await?;

    Ok(HttpResponse::Ok().json(StatsResponse {
        success: true,
        stats,
    }))
}
