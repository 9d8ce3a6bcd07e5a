//! Successful (2xx) reply bodies
//!
//! The employee service signals "not found" on some routes with HTTP 200 and a
//! bare JSON string instead of the record. [`Reply`] captures both shapes; the
//! string variant is listed first so it is matched before the structured
//! payload is attempted.

use serde::{Deserialize, Serialize};

/// A 2xx body that is either a bare notice string or the expected record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reply<T> {
    /// Bare JSON string, e.g. `"No such employee"`
    Notice(String),
    /// Structured payload
    Record(T),
}
