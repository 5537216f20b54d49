//! Boundary validation for feedback payloads.
//!
//! Nothing reaches the store unless it passed through here. Submission checks every
//! field and reports all violations at once.

use common::model::category::Category;
use common::model::status::Status;
use common::requests::{NewFeedback, RatingInput};
use once_cell::sync::Lazy;
use regex::Regex;

pub const NAME_MAX_CHARS: usize = 50;
pub const MESSAGE_MAX_CHARS: usize = 500;

// `\w` is restricted to ASCII word characters.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\w+([.-]?\w+)*@\w+([.-]?\w+)*(\.\w{2,3})+$".replace(r"\w", "[A-Za-z0-9_]").as_str())
        .expect("email pattern compiles")
});

/// A submission that satisfied every constraint, ready to be persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidFeedback {
    /// Already trimmed.
    pub name: String,
    pub email: String,
    pub rating: u8,
    pub category: Category,
    pub message: String,
}

pub fn validate_new_feedback(input: NewFeedback) -> Result<ValidFeedback, Vec<String>> {
    let mut errors = Vec::new();

    let name = input.name.as_deref().map(str::trim).unwrap_or_default();
    if name.is_empty() {
        errors.push("Please provide a name".to_string());
    } else if name.chars().count() > NAME_MAX_CHARS {
        errors.push(format!("Name cannot be more than {NAME_MAX_CHARS} characters"));
    }

    let email = input.email.unwrap_or_default();
    if email.is_empty() {
        errors.push("Please provide an email".to_string());
    } else if !EMAIL_RE.is_match(&email) {
        errors.push("Please add a valid email".to_string());
    }

    let rating = match validate_rating(input.rating.as_ref()) {
        Ok(rating) => Some(rating),
        Err(message) => {
            errors.push(message);
            None
        }
    };

    let category = match input.category.as_deref().unwrap_or_default() {
        "" => {
            errors.push("Please select a category".to_string());
            None
        }
        raw => match raw.parse::<Category>() {
            Ok(category) => Some(category),
            Err(_) => {
                errors.push(format!("Category must be one of {}", join(&Category::ALL)));
                None
            }
        },
    };

    let message = input.message.unwrap_or_default();
    if message.trim().is_empty() {
        errors.push("Please provide your feedback message".to_string());
    } else if message.chars().count() > MESSAGE_MAX_CHARS {
        errors.push(format!(
            "Message cannot be more than {MESSAGE_MAX_CHARS} characters"
        ));
    }

    match (rating, category) {
        (Some(rating), Some(category)) if errors.is_empty() => Ok(ValidFeedback {
            name: name.to_string(),
            email,
            rating,
            category,
            message,
        }),
        _ => Err(errors),
    }
}

fn validate_rating(input: Option<&RatingInput>) -> Result<u8, String> {
    let whole = match input {
        None => return Err("Please provide a rating".to_string()),
        Some(RatingInput::Integer(n)) => Some(*n),
        Some(RatingInput::Float(f)) => whole_number(*f),
        Some(RatingInput::Text(s)) => {
            let s = s.trim();
            if s.is_empty() {
                return Err("Please provide a rating".to_string());
            }
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(whole_number))
        }
    };

    let value = whole.ok_or_else(|| "Rating must be a whole number".to_string())?;
    match u8::try_from(value) {
        Ok(rating @ 1..=5) => Ok(rating),
        _ => Err("Rating must be between 1 and 5".to_string()),
    }
}

fn whole_number(value: f64) -> Option<i64> {
    (value.is_finite() && value.fract() == 0.0).then_some(value as i64)
}

/// Parses the status of a status-update request against the closed set.
pub fn validate_status(input: Option<&str>) -> Result<Status, String> {
    match input {
        None | Some("") => Err("Please provide a status".to_string()),
        Some(raw) => raw
            .parse()
            .map_err(|_| format!("Status must be one of {}", join(&Status::ALL))),
    }
}

fn join<T: ToString>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
