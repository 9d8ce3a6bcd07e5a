//! Employee service routes
//!
//! Paths are relative to the service base address
//! (e.g. `http://localhost:8080/employees`).

/// GET, lists every department
pub const LIST_DEPARTMENTS: &str = "/getAllDepartments";

/// GET, `?empNo=<n>`
pub const GET_EMPLOYEE: &str = "/getEmployeeRecord";

/// GET, `?departmentNo=<d>&page=<p>`
pub const LIST_ROSTER: &str = "/getAllEmployeeRecords";

/// POST, JSON [`PromotionRequest`](crate::PromotionRequest) body, plain text reply
pub const PROMOTE: &str = "/promote";

/// Query parameter names
pub mod params {
    pub const EMP_NO: &str = "empNo";
    pub const DEPARTMENT_NO: &str = "departmentNo";
    pub const PAGE: &str = "page";
}

/// Records per roster page
pub const ROSTER_PAGE_SIZE: usize = 20;

/// First roster page (pages are 1-indexed)
pub const FIRST_PAGE: u32 = 1;
