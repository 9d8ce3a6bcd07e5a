use chrono::NaiveDate;
use shared::models::open_ended;
use shared::{
    Department, DepartmentRecord, Employee, ManagerRecord, RosterEntry, SalaryRecord, TitleRecord,
};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;

pub struct AppState {
    pub store: RwLock<Store>,
    requests: AtomicUsize,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        Self {
            store: RwLock::new(store),
            requests: AtomicUsize::new(0),
        }
    }

    /// State over the built-in sample data
    pub fn seeded() -> Self {
        Self::new(Store::seeded())
    }

    /// Requests served so far
    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    pub(crate) fn record_request(&self) {
        self.requests.fetch_add(1, Ordering::SeqCst);
    }
}

/// In-memory employee data
#[derive(Debug, Clone, Default)]
pub struct Store {
    /// Kept in insertion order; the service does not sort departments
    departments: Vec<Department>,
    employees: BTreeMap<i32, Employee>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_department(&mut self, dept: Department) {
        self.departments.push(dept);
    }

    pub fn add_employee(&mut self, employee: Employee) {
        self.employees.insert(employee.emp_no, employee);
    }

    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    /// Department codes match regardless of case
    pub fn department_exists(&self, dept_no: &str) -> bool {
        self.departments
            .iter()
            .any(|d| d.dept_no.eq_ignore_ascii_case(dept_no))
    }

    pub fn employee(&self, emp_no: i32) -> Option<&Employee> {
        self.employees.get(&emp_no)
    }

    pub fn employee_mut(&mut self, emp_no: i32) -> Option<&mut Employee> {
        self.employees.get_mut(&emp_no)
    }

    /// Employees currently in `dept_no`, by employee number
    pub fn members(&self, dept_no: &str) -> Vec<RosterEntry> {
        self.employees
            .values()
            .filter(|emp| {
                emp.current_department()
                    .is_some_and(|d| d.dept_no.eq_ignore_ascii_case(dept_no))
            })
            .map(|emp| RosterEntry {
                emp_no: emp.emp_no,
                first_name: emp.first_name.clone(),
                last_name: emp.last_name.clone(),
                hire_date: emp.hire_date,
            })
            .collect()
    }

    /// Sample data
    ///
    /// - d005 has 25 current members (two roster pages)
    /// - 10001 is Georgi Facello, Senior Engineer in d005
    /// - 10040 manages d007
    /// - 10050 left the company in 2000
    pub fn seeded() -> Self {
        let mut store = Store::new();
        for (code, name) in [
            ("d009", "Customer Service"),
            ("d005", "Development"),
            ("d002", "Finance"),
            ("d003", "Human Resources"),
            ("d001", "Marketing"),
            ("d004", "Production"),
            ("d006", "Quality Management"),
            ("d008", "Research"),
            ("d007", "Sales"),
        ] {
            store.add_department(Department::new(code, name));
        }

        const FIRST: [&str; 10] = [
            "Georgi", "Bezalel", "Parto", "Chirstian", "Kyoichi", "Anneke", "Tzvetan", "Saniya",
            "Sumant", "Duangkaew",
        ];
        const LAST: [&str; 10] = [
            "Facello", "Simmel", "Bamford", "Koblick", "Maliniak", "Preusig", "Zielinski",
            "Kalloufi", "Peac", "Piveteau",
        ];

        for i in 0..50 {
            let emp_no = 10001 + i;
            let idx = i as usize;
            let hire = date(1985 + i % 10, 1 + (i % 12) as u32, 1 + (i % 28) as u32);
            let raise = date(1995 + i % 5, 6, 1);
            let dept_no = match i {
                0..25 => "d005",
                25..35 => "d004",
                35..45 => "d007",
                _ => "d001",
            };
            let title = match i {
                39 => "Manager",
                _ if i % 3 == 0 => "Senior Engineer",
                _ => "Engineer",
            };
            let base = 40000 + i * 731;

            let mut employee = Employee {
                emp_no,
                first_name: FIRST[idx % FIRST.len()].to_string(),
                last_name: LAST[(idx / FIRST.len() + idx) % LAST.len()].to_string(),
                birth_date: date(1952 + i % 12, 1 + (i % 12) as u32, 2 + (i % 26) as u32),
                gender: if i % 2 == 0 { "M" } else { "F" }.to_string(),
                hire_date: hire,
                title_history: vec![TitleRecord {
                    title: title.to_string(),
                    from_date: hire,
                    to_date: open_ended(),
                }],
                department_history: vec![DepartmentRecord {
                    dept_no: dept_no.to_string(),
                    from_date: hire,
                    to_date: open_ended(),
                }],
                salary_history: vec![
                    SalaryRecord {
                        salary: base,
                        from_date: hire,
                        to_date: raise,
                    },
                    SalaryRecord {
                        salary: base + 2000,
                        from_date: raise,
                        to_date: open_ended(),
                    },
                ],
                manager_history: Vec::new(),
            };

            if title == "Manager" {
                employee.manager_history.push(ManagerRecord {
                    dept_no: dept_no.to_string(),
                    from_date: hire,
                    to_date: open_ended(),
                });
            }

            if emp_no == 10050 {
                let left = date(2000, 1, 1);
                employee.title_history[0].to_date = left;
                employee.department_history[0].to_date = left;
                employee.salary_history[1].to_date = left;
            }

            store.add_employee(employee);
        }

        if let Some(georgi) = store.employee_mut(10001) {
            georgi.birth_date = date(1953, 9, 2);
            georgi.hire_date = date(1986, 6, 26);
            georgi.title_history = vec![TitleRecord {
                title: "Senior Engineer".to_string(),
                from_date: date(1986, 6, 26),
                to_date: open_ended(),
            }];
            georgi.department_history[0].from_date = date(1986, 6, 26);
            georgi.salary_history = vec![
                SalaryRecord {
                    salary: 60117,
                    from_date: date(1986, 6, 26),
                    to_date: date(1987, 6, 26),
                },
                SalaryRecord {
                    salary: 62102,
                    from_date: date(1987, 6, 26),
                    to_date: open_ended(),
                },
            ];
        }

        store
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}
