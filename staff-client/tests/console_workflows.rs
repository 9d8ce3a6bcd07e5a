// staff-client/tests/console_workflows.rs
// Console workflows against in-process services

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::NaiveDate;
use serde_json::Value;
use staff_client::workflows::{lookup, promotion, roster};
use staff_client::{
    ArrivalPolicy, Console, Department, Employee, ErrorKind, OneshotHttpClient, PromotionForm,
    RosterEntry, ViewState,
};
use staff_mock::AppState;

fn mock_console() -> (Console<OneshotHttpClient>, Arc<AppState>) {
    let state = Arc::new(AppState::seeded());
    let http = OneshotHttpClient::new(staff_mock::router(state.clone()));
    (Console::new(http), state)
}

fn console_over(router: Router) -> Console<OneshotHttpClient> {
    Console::new(OneshotHttpClient::new(router))
}

fn employee(emp_no: i32, first_name: &str) -> Employee {
    Employee {
        emp_no,
        first_name: first_name.to_string(),
        last_name: "Facello".to_string(),
        birth_date: NaiveDate::from_ymd_opt(1953, 9, 2).unwrap(),
        gender: "M".to_string(),
        hire_date: NaiveDate::from_ymd_opt(1986, 6, 26).unwrap(),
        title_history: Vec::new(),
        department_history: Vec::new(),
        salary_history: Vec::new(),
        manager_history: Vec::new(),
    }
}

// ========== Department Directory ==========

#[tokio::test]
async fn test_departments_sorted_by_code() {
    let (console, _) = mock_console();
    console.initialize().await.unwrap();

    let codes: Vec<String> = console
        .departments()
        .await
        .into_iter()
        .map(|d| d.dept_no)
        .collect();
    assert_eq!(
        codes,
        ["d001", "d002", "d003", "d004", "d005", "d006", "d007", "d008", "d009"]
    );
}

#[tokio::test]
async fn test_initialize_loads_once() {
    let (console, state) = mock_console();
    console.initialize().await.unwrap();
    console.initialize().await.unwrap();
    assert_eq!(state.requests(), 1);
    assert_eq!(console.directory().await.version(), 1);
}

#[tokio::test]
async fn test_duplicate_codes_keep_last() {
    let router = Router::new().route(
        "/getAllDepartments",
        get(|| async {
            Json(vec![
                Department::new("d002", "Finance"),
                Department::new("d001", "Marketing"),
                Department::new("d002", "Finance & Accounting"),
            ])
        }),
    );
    let console = console_over(router);

    let loaded = console.load_departments().await.unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].dept_no, "d001");
    assert_eq!(loaded[1].dept_name, "Finance & Accounting");
}

#[tokio::test]
async fn test_failed_reload_keeps_previous_list() {
    let calls = Arc::new(Mutex::new(0usize));
    let router = Router::new()
        .route(
            "/getAllDepartments",
            get(|State(calls): State<Arc<Mutex<usize>>>| async move {
                let mut calls = calls.lock().unwrap();
                *calls += 1;
                if *calls == 1 {
                    Ok(Json(vec![Department::new("d001", "Marketing")]))
                } else {
                    Err((StatusCode::INTERNAL_SERVER_ERROR, "database unavailable"))
                }
            }),
        )
        .with_state(calls);
    let console = console_over(router);

    console.load_departments().await.unwrap();
    assert!(console.load_departments().await.is_err());

    let directory = console.directory().await;
    assert_eq!(directory.version(), 1);
    assert_eq!(directory.departments()[0].dept_name, "Marketing");
}

#[tokio::test]
async fn test_load_failure_is_returned_to_caller() {
    let router = Router::new().route(
        "/getAllDepartments",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "maintenance window") }),
    );
    let console = console_over(router);

    let err = console.load_departments().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Backend);
    assert_eq!(err.diagnostic(), "maintenance window");
}

#[tokio::test]
async fn test_failed_first_load_leaves_directory_empty() {
    let console = console_over(Router::new());
    assert!(console.initialize().await.is_err());
    assert!(console.departments().await.is_empty());
    assert!(!console.directory().await.is_loaded());
}

// ========== Employee Lookup ==========

#[tokio::test]
async fn test_lookup_shows_record() {
    let (console, _) = mock_console();

    let view = console.lookup_employee("10001").await;
    let employee = view.payload().unwrap();
    assert_eq!(employee.full_name(), "Georgi Facello");
    assert_eq!(employee.salary_history.len(), 2);
    assert_eq!(employee.current_salary().unwrap().salary, 62102);
    assert!(view.message().is_none());
}

#[tokio::test]
async fn test_empty_lookup_sends_nothing() {
    let (console, state) = mock_console();

    let view = console.lookup_employee("   ").await;
    assert_eq!(view, ViewState::Error(lookup::MISSING_EMP_NO.to_string()));
    assert_eq!(state.requests(), 0);
}

#[tokio::test]
async fn test_missing_employee_shows_service_text() {
    let (console, _) = mock_console();

    console.lookup_employee("10001").await;
    let view = console.lookup_employee("99999").await;
    assert_eq!(
        view,
        ViewState::Error("Requested Employee Record not found".to_string())
    );
    assert!(console.employee_view().await.payload().is_none());
}

#[tokio::test]
async fn test_bare_string_clears_previous_employee() {
    let router = Router::new().route(
        "/getEmployeeRecord",
        get(|Query(query): Query<HashMap<String, String>>| async move {
            match query.get("empNo").map(String::as_str) {
                Some("10001") => Json(serde_json::to_value(employee(10001, "Georgi")).unwrap()),
                _ => Json(Value::String("No such employee".to_string())),
            }
        }),
    );
    let console = console_over(router);

    assert!(console.lookup_employee("10001").await.is_success());
    let view = console.lookup_employee("42").await;
    assert_eq!(view, ViewState::Error("No such employee".to_string()));
    assert_eq!(console.employee_view().await, view);
}

#[tokio::test]
async fn test_repeated_lookup_is_idempotent() {
    let (console, _) = mock_console();

    let first = console.lookup_employee("10002").await;
    let second = console.lookup_employee("10002").await;
    assert_eq!(first, second);
}

// ========== Department Roster ==========

fn page_echo() -> Router {
    Router::new().route(
        "/getAllEmployeeRecords",
        get(|Query(query): Query<HashMap<String, String>>| async move {
            let page: i32 = query["page"].parse().unwrap();
            Json(vec![RosterEntry {
                emp_no: page,
                first_name: query["departmentNo"].clone(),
                last_name: String::new(),
                hire_date: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            }])
        }),
    )
}

#[tokio::test]
async fn test_roster_page_fallback() {
    let console = console_over(page_echo());

    for (input, expected) in [("", 1), ("0", 1), ("3", 3)] {
        let view = console.list_roster("d005", input).await;
        assert_eq!(view.payload().unwrap()[0].emp_no, expected, "page {:?}", input);
    }
}

#[tokio::test]
async fn test_roster_pages_through_department() {
    let (console, _) = mock_console();

    let first = console.list_roster("d005", "1").await;
    assert_eq!(first.payload().map(Vec::len), Some(20));

    let second = console.list_roster("d005", "2").await;
    let entries = second.payload().unwrap();
    assert_eq!(entries.len(), 5);
    assert_eq!(entries[0].emp_no, 10021);
}

#[tokio::test]
async fn test_roster_past_last_page_is_end_of_records() {
    let (console, _) = mock_console();

    let view = console.list_roster("d005", "3").await;
    assert_eq!(view, ViewState::Empty(roster::END_OF_RECORDS.to_string()));
}

#[tokio::test]
async fn test_roster_unknown_department() {
    let (console, _) = mock_console();

    let view = console.list_roster("d999", "1").await;
    assert_eq!(
        view,
        ViewState::Error("Department d999 does not exist.".to_string())
    );
}

#[tokio::test]
async fn test_roster_plain_text_notice() {
    let router = Router::new().route(
        "/getAllEmployeeRecords",
        get(|| async { "Page index contains no employee records!" }),
    );
    let console = console_over(router);

    let view = console.list_roster("d005", "9").await;
    assert_eq!(
        view,
        ViewState::Error("Page index contains no employee records!".to_string())
    );
    assert!(console.roster_view().await.payload().is_none());
}

#[tokio::test]
async fn test_roster_without_department_sends_nothing() {
    let (console, state) = mock_console();

    let view = console.list_roster("", "2").await;
    assert_eq!(view, ViewState::Error(roster::MISSING_DEPT_NO.to_string()));
    assert_eq!(state.requests(), 0);
}

// ========== Promotion Submission ==========

#[tokio::test]
async fn test_promotion_validation_sends_nothing() {
    let (console, state) = mock_console();
    console.initialize().await.unwrap();
    let before = state.requests();

    let cases = [
        (PromotionForm::new("", "5000", "Lead", "d001"), promotion::MISSING_FIELDS),
        (PromotionForm::new("12a", "abc", "Lead", "d001"), promotion::INVALID_EMP_NO),
        (PromotionForm::new("10001", "0", "Lead", "d001"), promotion::INVALID_SALARY),
        (PromotionForm::new("10001", "5000", "Lead", "d099"), promotion::UNKNOWN_DEPARTMENT),
    ];
    for (form, expected) in cases {
        let view = console.submit_promotion(&form).await;
        assert_eq!(view, ViewState::Error(expected.to_string()));
    }
    assert_eq!(state.requests(), before);
}

#[tokio::test]
async fn test_promotion_success_text() {
    let (console, state) = mock_console();
    console.initialize().await.unwrap();

    let form = PromotionForm::new("10003", "75000", "Staff Engineer", "d008")
        .with_date("2024-12-17");
    let view = console.submit_promotion(&form).await;
    assert_eq!(
        view,
        ViewState::Success("Employee promoted successfully".to_string())
    );

    let store = state.store.read().await;
    let promoted = store.employee(10003).unwrap();
    assert_eq!(promoted.current_department().unwrap().dept_no, "d008");
}

#[tokio::test]
async fn test_promotion_department_code_any_case() {
    let (console, state) = mock_console();
    console.initialize().await.unwrap();

    let form = PromotionForm::new("10006", "80000", "Engineer", "D008").with_date("2024-02-01");
    let view = console.submit_promotion(&form).await;
    assert!(view.is_success(), "{:?}", view);

    let store = state.store.read().await;
    let promoted = store.employee(10006).unwrap();
    assert_eq!(promoted.current_department().unwrap().dept_no, "d008");
}

#[tokio::test]
async fn test_promotion_rejection_text_is_verbatim() {
    let (console, _) = mock_console();

    let form = PromotionForm::new("10001", "62102", "Senior Engineer", "d005");
    let view = console.submit_promotion(&form).await;
    assert_eq!(
        view,
        ViewState::Error(
            "Promotion failed: Provided data matches existing data, no changes requested"
                .to_string()
        )
    );
}

#[tokio::test]
async fn test_blank_date_sent_as_null() {
    let captured: Arc<Mutex<Option<Value>>> = Arc::new(Mutex::new(None));
    let router = Router::new()
        .route(
            "/promote",
            post(
                |State(captured): State<Arc<Mutex<Option<Value>>>>, Json(body): Json<Value>| async move {
                    *captured.lock().unwrap() = Some(body);
                    (StatusCode::CREATED, "Employee promoted successfully")
                },
            ),
        )
        .with_state(captured.clone());
    let console = console_over(router);

    let form = PromotionForm::new(" 10001 ", "65000", " Staff ", "d007").with_date("  ");
    assert!(console.submit_promotion(&form).await.is_success());

    let body = captured.lock().unwrap().take().unwrap();
    assert_eq!(body["empNo"], 10001);
    assert_eq!(body["newSalary"], 65000);
    assert_eq!(body["newTitle"], "Staff");
    assert_eq!(body["newDeptNo"], "d007");
    assert!(body["promotionDate"].is_null());
}

// ========== Isolation and arrival order ==========

#[tokio::test]
async fn test_failure_stays_in_its_workflow() {
    let (console, _) = mock_console();

    console.lookup_employee("10001").await;
    console.list_roster("d999", "1").await;

    assert!(console.employee_view().await.is_success());
    assert!(console.roster_view().await.is_error());
    assert!(console.promotion_view().await.is_idle());
}

fn slow_first_lookup() -> Router {
    Router::new().route(
        "/getEmployeeRecord",
        get(|Query(query): Query<HashMap<String, String>>| async move {
            let emp_no: i32 = query["empNo"].parse().unwrap();
            if emp_no == 1 {
                tokio::time::sleep(Duration::from_millis(200)).await;
                Json(employee(1, "Slow"))
            } else {
                Json(employee(emp_no, "Fast"))
            }
        }),
    )
}

#[tokio::test]
async fn test_last_arrival_wins_by_default() {
    let console = console_over(slow_first_lookup());

    tokio::join!(console.lookup_employee("1"), async {
        tokio::time::sleep(Duration::from_millis(20)).await;
        console.lookup_employee("2").await
    });

    let view = console.employee_view().await;
    assert_eq!(view.payload().unwrap().first_name, "Slow");
}

#[tokio::test]
async fn test_latest_issued_discards_stale_response() {
    let console = Console::with_policy(
        OneshotHttpClient::new(slow_first_lookup()),
        ArrivalPolicy::LatestIssued,
    );

    tokio::join!(console.lookup_employee("1"), async {
        tokio::time::sleep(Duration::from_millis(20)).await;
        console.lookup_employee("2").await
    });

    let view = console.employee_view().await;
    assert_eq!(view.payload().unwrap().first_name, "Fast");
}
