//! Department Model

use serde::{Deserialize, Serialize};

/// Department as listed by the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    /// Department code, e.g. "d005"
    pub dept_no: String,
    pub dept_name: String,
}

impl Department {
    pub fn new(dept_no: impl Into<String>, dept_name: impl Into<String>) -> Self {
        Self {
            dept_no: dept_no.into(),
            dept_name: dept_name.into(),
        }
    }
}
