use crate::model::category::Category;
use crate::model::feedback::Feedback;
use serde::{Deserialize, Serialize};

/// Read-only summary of the whole collection, served by `GET /api/feedbacks/dashboard`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_count: u64,
    /// Mean rating rounded to one decimal, `0` for an empty collection.
    pub avg_rating: f64,
    /// One entry per category present in the data, ordered by category name.
    pub category_breakdown: Vec<CategoryCount>,
    /// Up to five records, newest first.
    pub recent_feedbacks: Vec<Feedback>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    #[serde(rename = "_id")]
    pub category: Category,
    pub count: u64,
}
