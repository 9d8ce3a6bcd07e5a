//! Department directory
//!
//! Owned cache of the department list, ordered by `dept_no` and
//! duplicate-free. Every successful load replaces it wholesale and bumps the
//! version; failed loads never touch it.

use std::collections::BTreeMap;

use shared::Department;

#[derive(Debug, Clone, Default)]
pub struct DepartmentDirectory {
    entries: Vec<Department>,
    version: u64,
}

impl DepartmentDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the list with `departments`, sorted by code
    ///
    /// When a code appears more than once the last occurrence is kept.
    pub fn replace(&mut self, departments: Vec<Department>) {
        let by_code: BTreeMap<String, Department> = departments
            .into_iter()
            .map(|dept| (dept.dept_no.clone(), dept))
            .collect();
        self.entries = by_code.into_values().collect();
        self.version += 1;
    }

    /// False until the first successful load
    pub fn is_loaded(&self) -> bool {
        self.version > 0
    }

    /// Number of successful loads so far
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn departments(&self) -> &[Department] {
        &self.entries
    }

    pub fn get(&self, dept_no: &str) -> Option<&Department> {
        self.entries
            .binary_search_by(|dept| dept.dept_no.as_str().cmp(dept_no))
            .ok()
            .map(|idx| &self.entries[idx])
    }

    /// Department whose code matches `dept_no`, exactly or ignoring case
    pub fn resolve(&self, dept_no: &str) -> Option<&Department> {
        self.get(dept_no).or_else(|| {
            self.entries
                .iter()
                .find(|dept| dept.dept_no.eq_ignore_ascii_case(dept_no))
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
