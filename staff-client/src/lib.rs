//! Staff Client - employee service console
//!
//! Turns operator input into calls against the employee service and derives
//! the per-workflow view-state a presentation layer renders:
//!
//! - **Department directory**: sorted, duplicate-free list shared by the other workflows
//! - **Employee lookup**: one employee's full record
//! - **Department roster**: one page of a department's employees
//! - **Promotion submission**: validated department/title/salary change

pub mod client;
pub mod config;
pub mod console;
pub mod error;
pub mod input;
pub mod logger;
pub mod state;
pub mod workflows;

pub use client::{EmployeeApi, HttpClient, NetworkHttpClient, OneshotHttpClient, RawResponse};
pub use config::ConsoleConfig;
pub use console::Console;
pub use error::{ClientError, ClientResult, ErrorKind};
pub use input::{DigitField, PromotionForm};
pub use logger::init_logger;
pub use state::{ArrivalPolicy, ViewState};
pub use workflows::DepartmentDirectory;

// Re-export shared types for convenience
pub use shared::{Department, Employee, PromotionRequest, RosterEntry};
