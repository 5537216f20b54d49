use crate::model::category::Category;
use crate::model::status::Status;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored piece of user feedback.
///
/// `id`, `status` and both timestamps are always assigned by the service; whatever a
/// client sends for them on submission is ignored. After creation only `status` (and
/// with it `updated_at`) ever changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    /// Always within `1..=5`.
    pub rating: u8,
    pub category: Category,
    pub message: String,
    pub status: Status,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
