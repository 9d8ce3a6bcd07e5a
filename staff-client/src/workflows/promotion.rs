//! Promotion submission
//!
//! Validation is local and deterministic: presence of the four required
//! fields, then the two numbers, then (once the directory is loaded) the
//! department code. Only a request that passes all of it is sent.

use shared::PromotionRequest;

use super::directory::DepartmentDirectory;
use crate::input::PromotionForm;
use crate::state::ViewState;
use crate::{ClientError, ClientResult};

pub const MISSING_FIELDS: &str = "Please provide all 4 required fields: Employee No, New Salary, New Title, and New Department No";
pub const INVALID_EMP_NO: &str = "Employee No must be a valid positive number";
pub const INVALID_SALARY: &str = "New Salary must be a valid positive number";
pub const UNKNOWN_DEPARTMENT: &str = "New Department No must be one of the listed departments";
const TRANSPORT_PREFIX: &str = "Error promoting employee: ";

fn positive(raw: &str, message: &str) -> Result<i32, ClientError> {
    match raw.parse::<i32>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(ClientError::Validation(message.to_string())),
    }
}

/// Builds the request for `form`, or the validation message
pub fn validate(
    form: &PromotionForm,
    directory: &DepartmentDirectory,
) -> Result<PromotionRequest, ClientError> {
    let emp_no = form.emp_no.trim();
    let new_salary = form.new_salary.trim();
    let new_title = form.new_title.trim();
    let new_dept_no = form.new_dept_no.trim();

    if emp_no.is_empty() || new_salary.is_empty() || new_title.is_empty() || new_dept_no.is_empty()
    {
        return Err(ClientError::Validation(MISSING_FIELDS.to_string()));
    }

    let emp_no = positive(emp_no, INVALID_EMP_NO)?;
    let new_salary = positive(new_salary, INVALID_SALARY)?;

    // a loaded directory supplies the canonical code
    let new_dept_no = if directory.is_loaded() {
        match directory.resolve(new_dept_no) {
            Some(dept) => dept.dept_no.as_str(),
            None => return Err(ClientError::Validation(UNKNOWN_DEPARTMENT.to_string())),
        }
    } else {
        new_dept_no
    };

    let promotion_date = match form.promotion_date.trim() {
        "" => None,
        date => Some(date.to_string()),
    };

    Ok(PromotionRequest {
        emp_no,
        new_salary,
        new_title: new_title.to_string(),
        new_dept_no: new_dept_no.to_string(),
        promotion_date,
    })
}

/// Classifies the outcome of one submission
///
/// The service's text is shown verbatim either way; the variant records
/// whether it came back with a success status.
pub fn settle(result: ClientResult<String>) -> ViewState<String> {
    match result {
        Ok(text) => ViewState::Success(text),
        Err(ClientError::Backend { message, .. })
        | Err(ClientError::Validation(message))
        | Err(ClientError::NotFound(message)) => ViewState::Error(message),
        Err(other) => ViewState::Error(format!("{}{}", TRANSPORT_PREFIX, other.diagnostic())),
    }
}
