//! The console: department directory plus the three user-triggered workflows.
//!
//! Every action takes `&self` and performs at most one round trip. Locks are
//! only held to begin and to settle an action, never across the request, so
//! overlapping actions of one workflow race and the slot's
//! [`ArrivalPolicy`] decides which response is shown. Workflows share nothing
//! but the department directory.

use shared::{Department, Employee, RosterEntry};
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

use crate::client::{EmployeeApi, HttpClient, NetworkHttpClient};
use crate::input::PromotionForm;
use crate::state::{ArrivalPolicy, Slot, Ticket, ViewState};
use crate::workflows::{DepartmentDirectory, lookup, promotion, roster};
use crate::{ClientResult, ConsoleConfig};

pub struct Console<C> {
    api: EmployeeApi<C>,
    directory: RwLock<DepartmentDirectory>,
    employee: Mutex<Slot<Employee>>,
    roster: Mutex<Slot<Vec<RosterEntry>>>,
    promotion: Mutex<Slot<String>>,
}

impl Console<NetworkHttpClient> {
    /// Console over the network client described by `config`
    pub fn connect(config: &ConsoleConfig) -> ClientResult<Self> {
        let http = config.build_http_client()?;
        info!(base_url = %http.base_url(), "console ready");
        Ok(Self::with_policy(http, config.arrival))
    }
}

impl<C: HttpClient> Console<C> {
    pub fn new(http: C) -> Self {
        Self::with_policy(http, ArrivalPolicy::default())
    }

    pub fn with_policy(http: C, policy: ArrivalPolicy) -> Self {
        Self {
            api: EmployeeApi::new(http),
            directory: RwLock::new(DepartmentDirectory::new()),
            employee: Mutex::new(Slot::new(policy)),
            roster: Mutex::new(Slot::new(policy)),
            promotion: Mutex::new(Slot::new(policy)),
        }
    }

    // ========== Department Directory ==========

    /// Loads the directory unless a load already succeeded
    pub async fn initialize(&self) -> ClientResult<()> {
        if self.directory.read().await.is_loaded() {
            return Ok(());
        }
        self.load_departments().await.map(|_| ())
    }

    /// Fetches, sorts and replaces the department list
    ///
    /// On failure the current list is kept and the error returned.
    pub async fn load_departments(&self) -> ClientResult<Vec<Department>> {
        match self.api.departments().await {
            Ok(departments) => {
                let mut directory = self.directory.write().await;
                directory.replace(departments);
                info!(
                    count = directory.len(),
                    version = directory.version(),
                    "departments loaded"
                );
                Ok(directory.departments().to_vec())
            }
            Err(e) => {
                warn!("Failed to load departments: {}", e);
                Err(e)
            }
        }
    }

    /// Snapshot of the current department list
    pub async fn departments(&self) -> Vec<Department> {
        self.directory.read().await.departments().to_vec()
    }

    /// Snapshot of the directory, including its version
    pub async fn directory(&self) -> DepartmentDirectory {
        self.directory.read().await.clone()
    }

    // ========== Employee Lookup ==========

    pub async fn lookup_employee(&self, emp_no: &str) -> ViewState<Employee> {
        let ticket = self.employee.lock().await.begin();
        let next = match lookup::prepare(emp_no) {
            Ok(emp_no) => lookup::settle(self.api.employee(emp_no).await),
            Err(e) => ViewState::Error(e.diagnostic()),
        };
        Self::settle(&self.employee, ticket, next).await
    }

    pub async fn employee_view(&self) -> ViewState<Employee> {
        self.employee.lock().await.state().clone()
    }

    // ========== Department Roster ==========

    pub async fn list_roster(&self, dept_no: &str, page: &str) -> ViewState<Vec<RosterEntry>> {
        let ticket = self.roster.lock().await.begin();
        let next = match roster::prepare(dept_no, page) {
            Ok((dept_no, page)) => {
                debug!(%dept_no, %page, "requesting roster page");
                roster::settle(self.api.roster(&dept_no, &page).await)
            }
            Err(e) => ViewState::Error(e.diagnostic()),
        };
        Self::settle(&self.roster, ticket, next).await
    }

    pub async fn roster_view(&self) -> ViewState<Vec<RosterEntry>> {
        self.roster.lock().await.state().clone()
    }

    // ========== Promotion Submission ==========

    /// Validates `form` and, if it passes, submits it
    ///
    /// `Success` carries the text of a 2xx reply, `Error` anything else.
    pub async fn submit_promotion(&self, form: &PromotionForm) -> ViewState<String> {
        let ticket = self.promotion.lock().await.begin();
        let validated = {
            let directory = self.directory.read().await;
            promotion::validate(form, &directory)
        };
        let next = match validated {
            Ok(request) => {
                debug!(emp_no = request.emp_no, "submitting promotion");
                promotion::settle(self.api.promote(&request).await)
            }
            Err(e) => ViewState::Error(e.diagnostic()),
        };
        Self::settle(&self.promotion, ticket, next).await
    }

    pub async fn promotion_view(&self) -> ViewState<String> {
        self.promotion.lock().await.state().clone()
    }

    async fn settle<T: Clone>(slot: &Mutex<Slot<T>>, ticket: Ticket, next: ViewState<T>) -> ViewState<T> {
        let mut slot = slot.lock().await;
        slot.settle(ticket, next);
        slot.state().clone()
    }
}
