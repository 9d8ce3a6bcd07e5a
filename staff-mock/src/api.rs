use crate::state::AppState;
use axum::{
    Json, Router,
    extract::{Query, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::NaiveDate;
use serde::Deserialize;
use shared::api::{self, ROSTER_PAGE_SIZE};
use shared::models::open_ended;
use shared::{DepartmentRecord, ManagerRecord, SalaryRecord, TitleRecord};
use std::sync::Arc;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

const MANAGER: &str = "Manager";

fn text(status: StatusCode, body: impl Into<String>) -> Response {
    (status, body.into()).into_response()
}

/// Rejection of a well-formed promotion by the employee's data
fn promotion_failed(status: StatusCode, reason: impl std::fmt::Display) -> Response {
    text(status, format!("Promotion failed: {}", reason))
}

async fn count_requests(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    state.record_request();
    next.run(request).await
}

async fn list_departments(State(state): State<Arc<AppState>>) -> Response {
    let store = state.store.read().await;
    Json(store.departments().to_vec()).into_response()
}

#[derive(Deserialize)]
pub struct EmployeeQuery {
    #[serde(rename = "empNo")]
    emp_no: Option<String>,
}

async fn get_employee(
    State(state): State<Arc<AppState>>,
    Query(query): Query<EmployeeQuery>,
) -> Response {
    let Some(raw) = query.emp_no else {
        return text(StatusCode::BAD_REQUEST, "Required parameter 'empNo' is not present.");
    };
    let Ok(emp_no) = raw.trim().parse::<i32>() else {
        return text(StatusCode::BAD_REQUEST, "Invalid employee number");
    };

    let store = state.store.read().await;
    match store.employee(emp_no) {
        Some(employee) => Json(employee.clone()).into_response(),
        None => text(StatusCode::NOT_FOUND, "Requested Employee Record not found"),
    }
}

#[derive(Deserialize)]
pub struct RosterQuery {
    #[serde(rename = "departmentNo")]
    department_no: Option<String>,
    page: Option<String>,
}

async fn list_roster(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RosterQuery>,
) -> Response {
    let Some(dept_no) = query.department_no else {
        return text(
            StatusCode::BAD_REQUEST,
            "Required parameter 'departmentNo' is not present.",
        );
    };
    let page = match query.page.as_deref().map(str::trim) {
        None | Some("") => 1,
        Some(raw) => match raw.parse::<i64>() {
            Ok(page) => page,
            Err(_) => return text(StatusCode::BAD_REQUEST, "Page number must be an integer"),
        },
    };
    if page < 1 {
        return text(
            StatusCode::BAD_REQUEST,
            "Page number must be greater than or equal to 1!",
        );
    }

    let store = state.store.read().await;
    if !store.department_exists(&dept_no) {
        return text(
            StatusCode::NOT_FOUND,
            format!("Department {} does not exist.", dept_no),
        );
    }

    let skip = usize::try_from(page - 1)
        .ok()
        .and_then(|p| p.checked_mul(ROSTER_PAGE_SIZE))
        .unwrap_or(usize::MAX);
    let entries: Vec<_> = store
        .members(&dept_no)
        .into_iter()
        .skip(skip)
        .take(ROSTER_PAGE_SIZE)
        .collect();
    Json(entries).into_response()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromoteBody {
    emp_no: Option<i32>,
    new_title: Option<String>,
    new_salary: Option<i32>,
    new_dept_no: Option<String>,
    promotion_date: Option<String>,
}

fn title_case(input: &str) -> String {
    input
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

async fn promote(State(state): State<Arc<AppState>>, Json(req): Json<PromoteBody>) -> Response {
    let (Some(emp_no), Some(new_title), Some(new_salary), Some(new_dept_no)) =
        (req.emp_no, req.new_title, req.new_salary, req.new_dept_no)
    else {
        return text(
            StatusCode::BAD_REQUEST,
            "Please provide all 4: empNo, newSalary, newTitle, newDeptNo",
        );
    };
    if new_salary < 1 {
        return text(StatusCode::BAD_REQUEST, "Salary must be positive");
    }
    if new_title.is_empty() || new_title.chars().count() > 50 {
        return text(StatusCode::BAD_REQUEST, "New Title length invalid");
    }
    let promotion_date = match req.promotion_date.as_deref() {
        None => None,
        Some(raw) => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                return text(StatusCode::BAD_REQUEST, "Date must be in YYYY-MM-DD format.");
            }
        },
    };

    let mut store = state.store.write().await;
    let dept_known = store.department_exists(&new_dept_no);
    let Some(emp) = store.employee_mut(emp_no) else {
        return promotion_failed(StatusCode::NOT_FOUND, "Employee does not exist");
    };

    let latest_salary_date = emp.salary_history.iter().map(|s| s.from_date).max();
    if let (Some(date), Some(earliest)) = (promotion_date, latest_salary_date)
        && date < earliest
    {
        return promotion_failed(
            StatusCode::BAD_REQUEST,
            format!(
                "Promotion date cannot be earlier than employee's start date: {}",
                earliest
            ),
        );
    }

    let (Some(current_title), Some(current_salary), Some(current_dept)) = (
        emp.current_title().cloned(),
        emp.current_salary().cloned(),
        emp.current_department().cloned(),
    ) else {
        return promotion_failed(StatusCode::BAD_REQUEST, "Employee record is incomplete");
    };

    if current_salary.to_date != open_ended() {
        return promotion_failed(StatusCode::BAD_REQUEST, "Employee is no longer with the company");
    }

    let salary_changed = new_salary != current_salary.salary;
    let dept_changed = !new_dept_no.eq_ignore_ascii_case(&current_dept.dept_no);
    let title_changed = !new_title.eq_ignore_ascii_case(&current_title.title);

    if !salary_changed && !dept_changed && !title_changed {
        return promotion_failed(
            StatusCode::BAD_REQUEST,
            "Provided data matches existing data, no changes requested",
        );
    }
    if dept_changed && !dept_known {
        return promotion_failed(
            StatusCode::NOT_FOUND,
            format!("Department {} does not exist.", new_dept_no),
        );
    }

    let effective = promotion_date.unwrap_or_else(|| chrono::Local::now().date_naive());
    let already_promoted = emp.salary_history.iter().any(|s| s.from_date == effective)
        || emp.title_history.iter().any(|t| t.from_date == effective)
        || emp.department_history.iter().any(|d| d.from_date == effective);
    if already_promoted {
        return promotion_failed(
            StatusCode::BAD_REQUEST,
            format!(
                "Employee has already been promoted on {} and cannot be promoted again on the same date",
                effective
            ),
        );
    }
    if dept_changed
        && emp
            .department_history
            .iter()
            .any(|d| d.dept_no.eq_ignore_ascii_case(&new_dept_no))
    {
        return promotion_failed(
            StatusCode::BAD_REQUEST,
            "Employee cannot return to their previous department",
        );
    }

    if salary_changed {
        if let Some(last) = emp.salary_history.last_mut() {
            last.to_date = effective;
        }
        emp.salary_history.push(SalaryRecord {
            salary: new_salary,
            from_date: effective,
            to_date: open_ended(),
        });
    }

    if dept_changed {
        if let Some(last) = emp.department_history.last_mut() {
            last.to_date = effective;
        }
        emp.department_history.push(DepartmentRecord {
            dept_no: new_dept_no.to_lowercase(),
            from_date: effective,
            to_date: open_ended(),
        });
    }

    if title_changed {
        let title = title_case(&new_title);
        if let Some(last) = emp.title_history.last_mut() {
            last.to_date = effective;
        }
        emp.title_history.push(TitleRecord {
            title: title.clone(),
            from_date: effective,
            to_date: open_ended(),
        });

        if current_title.title == MANAGER && title != MANAGER {
            if let Some(last) = emp.manager_history.last_mut()
                && last.to_date == open_ended()
            {
                last.to_date = effective;
            }
        }
        if title == MANAGER {
            emp.manager_history.push(ManagerRecord {
                dept_no: new_dept_no.to_lowercase(),
                from_date: effective,
                to_date: open_ended(),
            });
        }
    }

    info!(emp_no, %effective, "employee promoted");
    text(StatusCode::CREATED, "Employee promoted successfully")
}

/// Routes of the employee service, rooted at `/`
pub fn router(state: Arc<AppState>) -> Router {
    // at most 100 concurrent requests
    let concurrency_limit = ConcurrencyLimitLayer::new(100);

    Router::new()
        .route(api::LIST_DEPARTMENTS, get(list_departments))
        .route(api::GET_EMPLOYEE, get(get_employee))
        .route(api::LIST_ROSTER, get(list_roster))
        .route(api::PROMOTE, post(promote))
        .layer(middleware::from_fn_with_state(state.clone(), count_requests))
        .layer(concurrency_limit)
        .with_state(state)
}

/// The service as deployed: routes under `/employees`, traced, CORS open
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/employees", router(state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
