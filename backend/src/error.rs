use crate::query::error::QueryError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use common::responses::{ErrorBody, ErrorResponse};
use log::error;
use thiserror::Error;

/// Every way a request can fail. Each variant maps to one HTTP status; storage
/// failures are logged in full and answered with a generic message.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("{0}")]
    InvalidQuery(#[from] QueryError),

    #[error("Invalid request: {0}")]
    MalformedRequest(String),

    #[error("Feedback not found")]
    NotFound,

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Storage task failed: {0}")]
    Blocking(#[from] tokio::task::JoinError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::InvalidQuery(_) | ApiError::MalformedRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Storage(_) | ApiError::Blocking(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ApiError::Validation(messages) => ErrorBody::Messages(messages.clone()),
            ApiError::MalformedRequest(_) => ErrorBody::Messages(vec![self.to_string()]),
            ApiError::InvalidQuery(_) | ApiError::NotFound => ErrorBody::Message(self.to_string()),
            ApiError::Storage(_) | ApiError::Blocking(_) => {
                error!("{}", self);
                ErrorBody::Message("Server Error".to_string())
            }
        };
        HttpResponse::build(self.status_code()).json(ErrorResponse::new(body))
    }
}
