use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Triage state of a feedback record. Every record starts as `New`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[default]
    New,
    Read,
    Resolved,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::New, Status::Read, Status::Resolved];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::New => "New",
            Status::Read => "Read",
            Status::Resolved => "Resolved",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown status '{}'", self.0)
    }
}

impl std::error::Error for UnknownStatus {}

impl FromStr for Status {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::ALL
            .into_iter()
            .find(|st| st.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_new() {
        assert_eq!(Status::default(), Status::New);
    }

    #[test]
    fn rejects_values_outside_the_enum() {
        assert_eq!("Resolved".parse::<Status>(), Ok(Status::Resolved));
        assert!("Archived".parse::<Status>().is_err());
    }
}
