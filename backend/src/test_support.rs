//! Fixtures shared by the unit and endpoint tests.

use crate::store::FeedbackStore;
use crate::validation::ValidFeedback;
use actix_web::web;
use common::model::category::Category;

pub const TEST_JSON_LIMIT: usize = 64 * 1024;

pub fn test_store() -> web::Data<FeedbackStore> {
    web::Data::new(FeedbackStore::open_in_memory().expect("in-memory store opens"))
}

pub fn sample(name: &str, rating: u8, category: Category, message: &str) -> ValidFeedback {
    ValidFeedback {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        rating,
        category,
        message: message.to_string(),
    }
}

/// Inserts records one after another, oldest first.
pub async fn seed(store: &FeedbackStore, records: Vec<ValidFeedback>) {
    store
        .run(move |conn| {
            for record in &records {
                crate::store::feedbacks::insert(conn, record)?;
            }
            Ok(())
        })
        .await
        .expect("seeding succeeds");
}

pub async fn stored_count(store: &FeedbackStore) -> usize {
    store
        .run(|conn| crate::store::feedbacks::find(conn, &crate::query::ListQuery::default()))
        .await
        .expect("listing succeeds")
        .len()
}
