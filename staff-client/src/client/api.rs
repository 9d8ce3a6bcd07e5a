// staff-client/src/client/api.rs
// Typed calls against the employee service routes

use shared::api::{self, params};
use shared::{Department, Employee, PromotionRequest, Reply, RosterEntry};

use super::http::HttpClient;
use crate::ClientResult;

/// Employee service API over any [`HttpClient`]
///
/// Non-2xx replies surface as [`ClientError::Backend`](crate::ClientError::Backend)
/// carrying the raw body text; 2xx bodies are decoded but not interpreted.
#[derive(Debug, Clone)]
pub struct EmployeeApi<C> {
    http: C,
}

impl<C: HttpClient> EmployeeApi<C> {
    pub fn new(http: C) -> Self {
        Self { http }
    }

    /// GET /getAllDepartments, in service order
    pub async fn departments(&self) -> ClientResult<Vec<Department>> {
        self.http.get(api::LIST_DEPARTMENTS, &[]).await?.json()
    }

    /// GET /getEmployeeRecord?empNo=
    pub async fn employee(&self, emp_no: &str) -> ClientResult<Reply<Employee>> {
        self.http
            .get(api::GET_EMPLOYEE, &[(params::EMP_NO, emp_no.to_string())])
            .await?
            .reply()
    }

    /// GET /getAllEmployeeRecords?departmentNo=&page=
    pub async fn roster(&self, dept_no: &str, page: &str) -> ClientResult<Reply<Vec<RosterEntry>>> {
        self.http
            .get(
                api::LIST_ROSTER,
                &[
                    (params::DEPARTMENT_NO, dept_no.to_string()),
                    (params::PAGE, page.to_string()),
                ],
            )
            .await?
            .reply()
    }

    /// POST /promote, returns the plain-text reply
    pub async fn promote(&self, request: &PromotionRequest) -> ClientResult<String> {
        self.http.post(api::PROMOTE, request).await?.text()
    }
}
