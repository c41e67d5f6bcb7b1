use serde::{Deserialize, Serialize};
use std::fmt;

/// One `coefficient * variable` pair of a constraint row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Term {
    pub variable_name: String,
    pub coefficient: f64,
}

impl Term {
    pub fn new(variable_name: impl Into<String>, coefficient: f64) -> Self {
        Self {
            variable_name: variable_name.into(),
            coefficient,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} * {}", self.coefficient, self.variable_name)
    }
}
