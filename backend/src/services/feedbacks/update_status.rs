//! # Status Update Service
//!
//! Backend logic for the `PATCH /api/feedbacks/{id}` endpoint.
//!
//! ## Workflow
//!
//! 1.  **HTTP Request**: `process` takes the record id from the path and reads only `status`
//!     from the body; any other field is ignored.
//!
//! 2.  **Validation**: the status must be one of `New`, `Read` or `Resolved`.
//!
//! 3.  **Update**: the store sets the status and refreshes `updatedAt` in one transaction,
//!     never moving it before `createdAt`. Concurrent updates resolve as last write wins.
//!
//! 4.  **HTTP Response**: the updated record, or `404` when no record has that id.

use crate::error::ApiError;
use crate::store::{feedbacks, FeedbackStore};
use crate::validation::validate_status;
use actix_web::{web, HttpResponse};
use common::requests::StatusUpdate;
use common::responses::DataResponse;
use log::info;

/// Actix web handler for `PATCH /api/feedbacks/{id}`.
///
/// # Arguments
/// * `store` - Shared handle on the feedback collection.
/// * `id` - The record id, extracted from the URL path.
/// * `payload` - The body; only `status` is read.
///
/// # Returns
/// - `200 OK` with `{ success, data }` holding the updated record.
/// - `400 Bad Request` for a missing or unknown status.
/// - `404 Not Found` when no record has this id.
pub(crate) async fn process(
    store: web::Data<FeedbackStore>,
    id: web::Path<String>,
    payload: web::Json<StatusUpdate>,
) -> Result<HttpResponse, ApiError> {
    let status =
        validate_status(payload.status.as_deref()).map_err(|e| ApiError::Validation(vec![e]))?;
    let id = id.into_inner();

    let feedback = store
        .run(move |conn| feedbacks::update_status(conn, &id, status))
        .await?
        .ok_or(ApiError::NotFound)?;
    info!("Feedback {} marked {}", feedback.id, feedback.status);

    Ok(HttpResponse::Ok().json(DataResponse::ok(feedback)))
}
