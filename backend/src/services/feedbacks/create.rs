//! # Feedback Submission Service
//!
//! Backend logic for the `POST /api/feedbacks` endpoint.
//!
//! ## Workflow
//!
//! 1.  **HTTP Request**: `process` receives the JSON body as a `NewFeedback`, where every
//!     field is optional so that missing values are reported rather than rejected by serde.
//!
//! 2.  **Validation**: `validate_new_feedback` checks every field and collects all failures.
//!     Nothing is written unless the whole submission is valid.
//!
//! 3.  **Insert**: the store assigns a fresh UUID, status `New` and equal `createdAt` /
//!     `updatedAt` timestamps. Identical payloads become separate records.
//!
//! 4.  **HTTP Response**: the stored record is returned in a `201 Created` envelope.

use crate::error::ApiError;
use crate::store::{feedbacks, FeedbackStore};
use crate::validation::validate_new_feedback;
use actix_web::{web, HttpResponse};
use common::requests::NewFeedback;
use common::responses::DataResponse;
use log::info;

/// Actix web handler for `POST /api/feedbacks`.
///
/// # Arguments
/// * `store` - Shared handle on the feedback collection.
/// * `payload` - The submitted feedback, not yet validated.
///
/// # Returns
/// - `201 Created` with `{ success, data }` holding the stored record.
/// - `400 Bad Request` listing every invalid field.
/// - `500 Internal Server Error` if the insert fails.
pub(crate) async fn process(
    store: web::Data<FeedbackStore>,
    payload: web::Json<NewFeedback>,
) -> Result<HttpResponse, ApiError> {
    let candidate = validate_new_feedback(payload.into_inner()).map_err(ApiError::Validation)?;

    let feedback = store
        .run(move |conn| feedbacks::insert(conn, &candidate))
        .await?;
    info!("Created feedback {}", feedback.id);

    Ok(HttpResponse::Created().json(DataResponse::ok(feedback)))
}

#[cfg(test)]
mod tests {
    use crate::services::configure_app;
    use crate::test_support::{stored_count, test_store, TEST_JSON_LIMIT};
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn valid_submission_is_stored_as_new_with_server_fields() {
        let app =
            test::init_service(App::new().configure(configure_app(test_store(), TEST_JSON_LIMIT)))
                .await;

        let req = test::TestRequest::post()
            .uri("/api/feedbacks")
            .set_json(json!({
                "name": "  Ana  ",
                "email": "ana@example.com",
                "rating": 5,
                "category": "Product",
                "message": "Excellent build quality",
                "status": "Resolved",
                "_id": "client-chosen",
                "createdAt": "2000-01-01T00:00:00Z"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        let data = &body["data"];
        assert_eq!(data["name"], "Ana");
        assert_eq!(data["status"], "New");
        assert_ne!(data["_id"], "client-chosen");
        assert_ne!(data["createdAt"], "2000-01-01T00:00:00Z");
        assert_eq!(data["createdAt"], data["updatedAt"]);
    }

    #[actix_web::test]
    async fn invalid_submissions_are_rejected_without_writes() {
        let store = test_store();
        let app = test::init_service(
            App::new().configure(configure_app(store.clone(), TEST_JSON_LIMIT)),
        )
        .await;
        let base = json!({
            "name": "Ana",
            "email": "ana@example.com",
            "rating": 3,
            "category": "Service",
            "message": "ok"
        });

        let cases = [
            ("rating", json!(0)),
            ("rating", json!(6)),
            ("category", json!("Other")),
            ("name", json!("")),
            ("message", json!("m".repeat(501))),
            ("email", json!("not-an-email")),
        ];
        for (field, value) in cases {
            let mut payload = base.clone();
            payload[field] = value;
            let req = test::TestRequest::post()
                .uri("/api/feedbacks")
                .set_json(&payload)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{field}");

            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["success"], false);
            assert_eq!(body["error"].as_array().map(Vec::len), Some(1), "{field}");
        }

        assert_eq!(stored_count(&store).await, 0);
    }

    #[actix_web::test]
    async fn all_violations_are_reported_together() {
        let app =
            test::init_service(App::new().configure(configure_app(test_store(), TEST_JSON_LIMIT)))
                .await;
        let req = test::TestRequest::post()
            .uri("/api/feedbacks")
            .set_json(json!({ "rating": 9, "category": "Other" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body["error"],
            json!([
                "Please provide a name",
                "Please provide an email",
                "Rating must be between 1 and 5",
                "Category must be one of Product, Service, Support",
                "Please provide your feedback message"
            ])
        );
    }

    #[actix_web::test]
    async fn malformed_json_uses_the_error_envelope() {
        let app =
            test::init_service(App::new().configure(configure_app(test_store(), TEST_JSON_LIMIT)))
                .await;
        let req = test::TestRequest::post()
            .uri("/api/feedbacks")
            .insert_header(("content-type", "application/json"))
            .set_payload("{ not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert!(body["error"].is_array());
    }

    #[actix_web::test]
    async fn duplicate_submissions_create_distinct_records() {
        let store = test_store();
        let app = test::init_service(
            App::new().configure(configure_app(store.clone(), TEST_JSON_LIMIT)),
        )
        .await;
        let payload = json!({
            "name": "Ana",
            "email": "ana@example.com",
            "rating": 4,
            "category": "Support",
            "message": "Same again"
        });

        let mut ids = Vec::new();
        for _ in 0..2 {
            let req = test::TestRequest::post()
                .uri("/api/feedbacks")
                .set_json(&payload)
                .to_request();
            let body: Value = test::call_and_read_body_json(&app, req).await;
            ids.push(body["data"]["_id"].as_str().unwrap().to_string());
        }

        assert_ne!(ids[0], ids[1]);
        assert_eq!(stored_count(&store).await, 2);
    }
}
