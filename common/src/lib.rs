//! Types shared between the feedback service and any Rust client of its JSON API.
//!
//! - `model`: the stored feedback record, its closed enumerations and the dashboard snapshot.
//! - `requests`: loosely typed request payloads, validated by the service before persistence.
//! - `responses`: the `{ success, ... }` envelopes every endpoint answers with.

pub mod model;
pub mod requests;
pub mod responses;
