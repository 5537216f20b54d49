//! # Feedback Removal Service
//!
//! Backend logic for the `DELETE /api/feedbacks/{id}` endpoint.
//!
//! ## Workflow
//!
//! 1.  **HTTP Request**: `process` takes the record id from the URL path.
//!
//! 2.  **Removal**: the row is deleted; the FTS triggers drop it from the text index too.
//!     Removal is immediate and permanent.
//!
//! 3.  **HTTP Response**: an empty `data` object, or `404` when nothing was removed.

use crate::error::ApiError;
use crate::store::{feedbacks, FeedbackStore};
use actix_web::{web, HttpResponse};
use common::responses::{DataResponse, Empty};
use log::info;

/// Actix web handler for `DELETE /api/feedbacks/{id}`.
///
/// # Arguments
/// * `store` - Shared handle on the feedback collection.
/// * `id` - The record id, extracted from the URL path.
///
/// # Returns
/// - `200 OK` with `{ success: true, data: {} }`.
/// - `404 Not Found` when no record has this id, including a second delete.
pub(crate) async fn process(
    store: web::Data<FeedbackStore>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    let target = id.clone();

    let removed = store
        .run(move |conn| feedbacks::delete(conn, &target))
        .await?;
    if !removed {
        return Err(ApiError::NotFound);
    }
    info!("Deleted feedback {}", id);

    Ok(HttpResponse::Ok().json(DataResponse::ok(Empty {})))
}
