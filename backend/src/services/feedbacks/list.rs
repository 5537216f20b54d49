//! # Feedback Listing Service
//!
//! Backend logic for the `GET /api/feedbacks` endpoint.
//!
//! ## Workflow
//!
//! 1.  **HTTP Request**: `process` receives the raw query string as ordered key/value pairs.
//!
//! 2.  **Query Building**: `ListQuery::from_params` turns `field[op]=value` pairs into typed
//!     conditions, parses `search` into words, phrases and exclusions, and reads `sort`.
//!     `select`, `page` and `limit` are dropped.
//!
//! 3.  **Lookup**: `feedbacks::find` translates the query into one parameterized statement.
//!
//! 4.  **HTTP Response**: every matching record is returned with its `count`.

use crate::error::ApiError;
use crate::query::ListQuery;
use crate::store::{feedbacks, FeedbackStore};
use actix_web::{web, HttpResponse};
use common::responses::ListResponse;

/// Actix web handler for `GET /api/feedbacks`.
///
/// Parameters are taken in the order they were sent; a malformed filter rejects the
/// request, an unknown field simply matches nothing.
///
/// # Arguments
/// * `store` - Shared handle on the feedback collection.
/// * `params` - The query string as ordered pairs.
///
/// # Returns
/// - `200 OK` with `{ success, count, data }`.
/// - `400 Bad Request` for a malformed filter key or operand.
pub(crate) async fn process(
    store: web::Data<FeedbackStore>,
    params: web::Query<Vec<(String, String)>>,
) -> Result<HttpResponse, ApiError> {
    let query = ListQuery::from_params(&params)?;
    let feedbacks = store
        .run(move |conn| feedbacks::find(conn, &query))
        .await?;

    Ok(HttpResponse::Ok().json(ListResponse::ok(feedbacks)))
}
