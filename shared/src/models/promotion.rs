//! Promotion Model

use serde::{Deserialize, Serialize};

/// Promotion payload
///
/// `promotion_date` is always serialized; `None` goes out as `null` so the
/// service applies its own effective date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotionRequest {
    pub emp_no: i32,
    pub new_salary: i32,
    pub new_title: String,
    pub new_dept_no: String,
    pub promotion_date: Option<String>,
}
