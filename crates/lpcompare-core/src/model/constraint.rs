//! Linear constraint row entity.

use crate::model::operator::ConstraintOperator;
use crate::model::term::Term;
use crate::ordering::sort_canonical;
use serde::Serialize;
use std::fmt;

/// A linear row `sum(terms) sign rhs`, optionally named.
///
/// Terms are kept sorted by term order (variable name, then coefficient) for
/// the whole lifetime of the value; construction sorts them and there is no
/// mutable access afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Constraint {
    name: Option<String>,
    terms: Vec<Term>,
    sign: ConstraintOperator,
    rhs: f64,
}

impl Constraint {
    pub fn new(
        name: Option<String>,
        mut terms: Vec<Term>,
        sign: ConstraintOperator,
        rhs: f64,
    ) -> Self {
        sort_canonical(&mut terms);
        Self {
            name,
            terms,
            sign,
            rhs,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Terms in canonical order.
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn sign(&self) -> ConstraintOperator {
        self.sign
    }

    pub fn rhs(&self) -> f64 {
        self.rhs
    }
}

/// Dump form used in difference reports:
///
/// ```text
/// Name: c1
///   5 =
///   2 * x1
///   -1 * x2
/// ```
impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name.as_deref().unwrap_or(""))?;
        writeln!(f, "  {} {}", self.rhs, self.sign)?;
        for term in &self.terms {
            writeln!(f, "  {}", term)?;
        }
        Ok(())
    }
}
