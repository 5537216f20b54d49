use crate::error::ApiError;
use crate::store::FeedbackStore;
use actix_web::web::{get, scope};
use actix_web::{web, HttpResponse, Scope};
use serde_json::json;

const API_PATH: &str = "/api/health";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", get().to(process))
}

/// `200 { success: true }` while the store answers, `500` otherwise.
async fn process(store: web::Data<FeedbackStore>) -> Result<HttpResponse, ApiError> {
    store.ping().await?;
    Ok(HttpResponse::Ok().json(json!({ "success": true })))
}
