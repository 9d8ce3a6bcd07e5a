//! Employee Model
//!
//! Histories are ordered oldest to newest by the service; the current entry
//! is always the last one. Nothing here re-sorts them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// `toDate` of a record that is still in effect
pub const OPEN_ENDED: &str = "9999-01-01";

/// Full employee record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub emp_no: i32,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub gender: String,
    pub hire_date: NaiveDate,
    #[serde(rename = "titleList", default)]
    pub title_history: Vec<TitleRecord>,
    #[serde(rename = "deptEmpList", default)]
    pub department_history: Vec<DepartmentRecord>,
    #[serde(rename = "salaryList", default)]
    pub salary_history: Vec<SalaryRecord>,
    #[serde(rename = "deptManagerList", default)]
    pub manager_history: Vec<ManagerRecord>,
}

/// Job title held over a period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleRecord {
    pub title: String,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
}

/// Department membership over a period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentRecord {
    pub dept_no: String,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
}

/// Salary paid over a period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryRecord {
    pub salary: i32,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
}

/// Department management over a period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagerRecord {
    pub dept_no: String,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn current_title(&self) -> Option<&TitleRecord> {
        self.title_history.last()
    }

    pub fn current_department(&self) -> Option<&DepartmentRecord> {
        self.department_history.last()
    }

    pub fn current_salary(&self) -> Option<&SalaryRecord> {
        self.salary_history.last()
    }
}

/// The open-ended `toDate` as a date
pub fn open_ended() -> NaiveDate {
    NaiveDate::from_ymd_opt(9999, 1, 1).unwrap_or(NaiveDate::MAX)
}
