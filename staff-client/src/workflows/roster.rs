//! Department roster paging

use shared::api::FIRST_PAGE;
use shared::{Reply, RosterEntry};

use crate::state::ViewState;
use crate::{ClientError, ClientResult};

pub const MISSING_DEPT_NO: &str = "Please provide Department No.";
pub const END_OF_RECORDS: &str = "Page not available. End of records.";
pub const FETCH_FAILED: &str = "Error fetching employees";

/// Page actually requested for the operator's page input
///
/// Empty, zero, negative or unparsable input falls back to the first page.
/// Positive values are sent as given, without an upper bound.
pub fn effective_page(raw: &str) -> String {
    let raw = raw.trim();
    match raw.parse::<i64>() {
        Ok(page) if page > 0 => page.to_string(),
        Ok(_) => FIRST_PAGE.to_string(),
        // digits too large for i64 are still a positive page
        Err(_) if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) => {
            raw.trim_start_matches('0').to_string()
        }
        Err(_) => FIRST_PAGE.to_string(),
    }
}

/// Returns `(dept_no, page)` to request, or the message to show instead
pub fn prepare(dept_no: &str, page: &str) -> Result<(String, String), ClientError> {
    let dept_no = dept_no.trim();
    if dept_no.is_empty() {
        return Err(ClientError::Validation(MISSING_DEPT_NO.to_string()));
    }
    Ok((dept_no.to_string(), effective_page(page)))
}

/// Classifies the outcome of one roster request
pub fn settle(result: ClientResult<Reply<Vec<RosterEntry>>>) -> ViewState<Vec<RosterEntry>> {
    match result {
        Ok(Reply::Record(entries)) if entries.is_empty() => {
            ViewState::Empty(END_OF_RECORDS.to_string())
        }
        Ok(Reply::Record(entries)) => ViewState::Success(entries),
        Ok(Reply::Notice(notice)) => ViewState::Error(notice),
        Err(err) => ViewState::Error(failure_message(err)),
    }
}

fn failure_message(err: ClientError) -> String {
    match err {
        ClientError::Backend { message, .. } if message.is_empty() => FETCH_FAILED.to_string(),
        ClientError::Backend { message, .. }
        | ClientError::Validation(message)
        | ClientError::NotFound(message) => message,
        other => format!("{}: {}", FETCH_FAILED, other.diagnostic()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry(emp_no: i32) -> RosterEntry {
        RosterEntry {
            emp_no,
            first_name: "Bezalel".into(),
            last_name: "Simmel".into(),
            hire_date: NaiveDate::from_ymd_opt(1985, 11, 21).unwrap(),
        }
    }

    #[test]
    fn test_page_fallback() {
        assert_eq!(effective_page(""), "1");
        assert_eq!(effective_page("0"), "1");
        assert_eq!(effective_page("-4"), "1");
        assert_eq!(effective_page("abc"), "1");
        assert_eq!(effective_page("3"), "3");
        assert_eq!(effective_page(" 12 "), "12");
        assert_eq!(effective_page("007"), "7");
    }

    #[test]
    fn test_page_has_no_upper_bound() {
        let huge = "123456789012345678901234567890";
        assert_eq!(effective_page(huge), huge);
    }

    #[test]
    fn test_prepare_requires_department() {
        let err = prepare("  ", "2").unwrap_err();
        assert_eq!(err.diagnostic(), MISSING_DEPT_NO);
        assert_eq!(prepare("d005", "").unwrap(), ("d005".to_string(), "1".to_string()));
    }

    #[test]
    fn test_empty_page_is_end_of_records() {
        let state = settle(Ok(Reply::Record(Vec::new())));
        assert_eq!(state, ViewState::Empty(END_OF_RECORDS.to_string()));
        assert!(state.payload().is_none());
    }

    #[test]
    fn test_non_empty_page_is_success() {
        let state = settle(Ok(Reply::Record(vec![entry(10002), entry(10003)])));
        assert_eq!(state.payload().map(Vec::len), Some(2));
    }

    #[test]
    fn test_notice_and_backend_text() {
        let state = settle(Ok(Reply::Notice(
            "Page index contains no employee records!".into(),
        )));
        assert_eq!(
            state,
            ViewState::Error("Page index contains no employee records!".into())
        );

        let state = settle(Err(ClientError::Backend {
            status: 404,
            message: "Department d999 does not exist.".into(),
        }));
        assert_eq!(state.message(), Some("Department d999 does not exist."));

        let state = settle(Err(ClientError::Backend {
            status: 502,
            message: String::new(),
        }));
        assert_eq!(state.message(), Some(FETCH_FAILED));
    }

    #[test]
    fn test_transport_failure_carries_diagnostic() {
        let state = settle(Err(ClientError::InvalidResponse("eof".into())));
        assert_eq!(state.message(), Some("Error fetching employees: eof"));
    }
}
