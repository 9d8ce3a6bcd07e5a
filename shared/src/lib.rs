//! Shared types for the staff console
//!
//! Wire models exchanged with the employee service. These types are shared
//! between staff-client and staff-mock.

pub mod api;
pub mod models;
pub mod reply;

// Re-exports
pub use models::{
    Department, DepartmentRecord, Employee, ManagerRecord, PromotionRequest, RosterEntry,
    SalaryRecord, TitleRecord,
};
pub use reply::Reply;
