use thiserror::Error;

/// Rejections raised while turning listing parameters into a `ListQuery`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Malformed query parameter '{0}'")]
    MalformedKey(String),

    #[error("Unsupported operator '{op}' in query parameter '{param}'")]
    UnknownOperator { param: String, op: String },

    #[error("Invalid value '{value}' for query parameter '{param}': expected {expected}")]
    InvalidValue {
        param: String,
        value: String,
        expected: &'static str,
    },
}
