use serde::{Deserialize, Serialize};

/// Candidate record posted to `POST /api/feedbacks`.
///
/// Every field is optional at this level so the service can report all missing or
/// invalid fields together instead of failing on the first one. Client-supplied
/// `_id`, `status` or timestamps are not part of the payload and are dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewFeedback {
    pub name: Option<String>,
    pub email: Option<String>,
    pub rating: Option<RatingInput>,
    pub category: Option<String>,
    pub message: Option<String>,
}

/// A rating as it may arrive on the wire: a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RatingInput {
    Integer(i64),
    Float(f64),
    Text(String),
}

/// Body of `PATCH /api/feedbacks/{id}`. Any other field in the body is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_accepts_numbers_and_strings() {
        let parsed: NewFeedback = serde_json::from_str(r#"{"rating": 4}"#).unwrap();
        assert_eq!(parsed.rating, Some(RatingInput::Integer(4)));

        let parsed: NewFeedback = serde_json::from_str(r#"{"rating": 4.5}"#).unwrap();
        assert_eq!(parsed.rating, Some(RatingInput::Float(4.5)));

        let parsed: NewFeedback = serde_json::from_str(r#"{"rating": "3"}"#).unwrap();
        assert_eq!(parsed.rating, Some(RatingInput::Text("3".into())));
    }

    #[test]
    fn server_owned_fields_are_dropped() {
        let parsed: NewFeedback =
            serde_json::from_str(r#"{"name": "Ana", "status": "Resolved", "_id": "x"}"#).unwrap();
        assert_eq!(parsed.name.as_deref(), Some("Ana"));
        assert_eq!(parsed.email, None);
    }
}
