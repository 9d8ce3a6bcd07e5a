//! Raw operator input.
//!
//! Numeric inputs go through [`DigitField`], whose setter rejects any
//! candidate that is not entirely decimal digits instead of sanitising it.
//! Everything else is kept as typed; trimming and parsing happen in the
//! workflows.

use std::fmt;
use std::str::FromStr;

/// True for the empty string or a string of ASCII digits only
pub fn is_digits(candidate: &str) -> bool {
    candidate.bytes().all(|b| b.is_ascii_digit())
}

/// Text field that only ever holds digits (or nothing)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DigitField(String);

impl DigitField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the value if `candidate` is digits-only; returns whether it was accepted
    pub fn set(&mut self, candidate: &str) -> bool {
        if !is_digits(candidate) {
            return false;
        }
        self.0.clear();
        self.0.push_str(candidate);
        true
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for DigitField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut field = DigitField::new();
        if field.set(s) {
            Ok(field)
        } else {
            Err(format!("'{}' must contain digits only", s))
        }
    }
}

impl fmt::Display for DigitField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Promotion form as typed by the operator
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromotionForm {
    pub emp_no: String,
    pub new_dept_no: String,
    pub new_salary: String,
    pub new_title: String,
    pub promotion_date: String,
}

impl PromotionForm {
    pub fn new(
        emp_no: impl Into<String>,
        new_salary: impl Into<String>,
        new_title: impl Into<String>,
        new_dept_no: impl Into<String>,
    ) -> Self {
        Self {
            emp_no: emp_no.into(),
            new_dept_no: new_dept_no.into(),
            new_salary: new_salary.into(),
            new_title: new_title.into(),
            promotion_date: String::new(),
        }
    }

    pub fn with_date(mut self, promotion_date: impl Into<String>) -> Self {
        self.promotion_date = promotion_date.into();
        self
    }
}
