//! # Feedback Service Module
//!
//! Routes every request under `/api/feedbacks` to its handler. The service owns the
//! feedback collection; clients only ever see copies.
//!
//! ## Registered Routes
//!
//! *   **`POST /`** (`create`): validates a submission, reports every violated field
//!     at once, and stores it as a `New` record with server-assigned id and timestamps.
//! *   **`GET /`** (`list`): field filters (`rating[gte]=4`, `category=Product`, ...),
//!     `search` over name/email/message, and `sort`; newest first by default.
//! *   **`GET /dashboard`** (`dashboard`): total, average rating, per-category counts
//!     and the five newest records.
//! *   **`PATCH /{id}`** (`update_status`): changes `status` only.
//! *   **`DELETE /{id}`** (`delete`): permanent removal.
//!
//! `/dashboard` is registered before `/{id}`, although the two never compete for the
//! same method.

mod create;
mod dashboard;
mod delete;
mod list;
mod update_status;

use actix_web::web::{self, get, patch, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/feedbacks";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", post().to(create::process))
        .route("", get().to(list::process))
        .route("/dashboard", get().to(dashboard::process))
        .route("/{id}", patch().to(update_status::process))
        .route("/{id}", web::delete().to(delete::process))
}
