//! Roster Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Abbreviated employee row of a department roster page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    pub emp_no: i32,
    pub first_name: String,
    pub last_name: String,
    pub hire_date: NaiveDate,
}
