use crate::errors::Result;
use crate::model::{Bound, Constraint};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A parsed LP file: variable-kind lists, bounds and constraint rows, each in
/// file order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Model {
    pub generals: Vec<String>,
    pub binaries: Vec<String>,
    pub sos_variables: Vec<String>,
    pub bounds: Vec<Bound>,
    pub constraints: Vec<Constraint>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> ModelStats {
        ModelStats {
            generals: self.generals.len(),
            binaries: self.binaries.len(),
            sos_variables: self.sos_variables.len(),
            bounds: self.bounds.len(),
            constraints: self.constraints.len(),
        }
    }
}

/// Entity counts of a [`Model`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelStats {
    pub generals: usize,
    pub binaries: usize,
    pub sos_variables: usize,
    pub bounds: usize,
    pub constraints: usize,
}

impl ModelStats {
    /// Pretty-printed JSON form.
    ///
    /// # Errors
    ///
    /// `Serialization` when rendering fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for ModelStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Binaries: {}", self.binaries)?;
        writeln!(f, "Bounds: {}", self.bounds)?;
        writeln!(f, "Constraints: {}", self.constraints)?;
        writeln!(f, "Generals: {}", self.generals)?;
        writeln!(f, "SosVars: {}", self.sos_variables)
    }
}
