//! Employee lookup

use shared::{Employee, Reply};

use crate::state::ViewState;
use crate::{ClientError, ClientResult};

pub const MISSING_EMP_NO: &str = "Please enter an employee number";
pub const NOT_FOUND: &str = "Employee does not exist";
const TRANSPORT_PREFIX: &str = "Error fetching employee: ";

/// Returns the employee number to request, or the message to show instead
pub fn prepare(emp_no: &str) -> Result<&str, ClientError> {
    let emp_no = emp_no.trim();
    if emp_no.is_empty() {
        return Err(ClientError::Validation(MISSING_EMP_NO.to_string()));
    }
    Ok(emp_no)
}

/// Classifies the outcome of one lookup request
pub fn settle(result: ClientResult<Reply<Employee>>) -> ViewState<Employee> {
    match result {
        Ok(Reply::Record(employee)) => ViewState::Success(employee),
        Ok(Reply::Notice(notice)) => ViewState::Error(notice),
        Err(err) => ViewState::Error(failure_message(err)),
    }
}

fn failure_message(err: ClientError) -> String {
    match err {
        ClientError::Backend { message, .. } if message.is_empty() => NOT_FOUND.to_string(),
        ClientError::Backend { message, .. }
        | ClientError::Validation(message)
        | ClientError::NotFound(message) => message,
        other => format!("{}{}", TRANSPORT_PREFIX, other.diagnostic()),
    }
}
