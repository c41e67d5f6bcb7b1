//! Variable bound entity.

use crate::model::operator::BoundOperator;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel used for an absent upper bound.
pub const UNBOUNDED: f32 = 1e21;

/// A declared bound on a single variable.
///
/// Read left to right as `lower_bound lower_operator variable upper_operator' upper_bound`,
/// where `upper_operator` is stored inverted (an upper limit written as
/// `x <= 10` is recorded as `10 >= x`). The default is the implicit LP bound
/// `0 <= x <= +inf`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bound {
    pub variable_name: String,
    pub lower_bound: f32,
    pub lower_operator: BoundOperator,
    pub upper_bound: f32,
    pub upper_operator: BoundOperator,
}

impl Bound {
    pub fn new(
        variable_name: impl Into<String>,
        lower_bound: f32,
        lower_operator: BoundOperator,
        upper_bound: f32,
        upper_operator: BoundOperator,
    ) -> Self {
        Self {
            variable_name: variable_name.into(),
            lower_bound,
            lower_operator,
            upper_bound,
            upper_operator,
        }
    }

    /// Default `0 <= name <= +inf` bound for a variable.
    pub fn unbounded(variable_name: impl Into<String>) -> Self {
        Self {
            variable_name: variable_name.into(),
            ..Self::default()
        }
    }

    pub fn has_upper_bound(&self) -> bool {
        self.upper_bound != UNBOUNDED
    }
}

impl Default for Bound {
    fn default() -> Self {
        Self {
            variable_name: String::new(),
            lower_bound: 0.0,
            lower_operator: BoundOperator::LessOrEqual,
            upper_bound: UNBOUNDED,
            upper_operator: BoundOperator::LessOrEqual,
        }
    }
}

/// Canonical text form: `<lower> <op> <name>[ <op> <upper>]`.
///
/// The upper side is omitted while it is the `UNBOUNDED` sentinel. The text is
/// itself a valid value-first bound line.
impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.lower_bound, self.lower_operator, self.variable_name
        )?;
        if self.has_upper_bound() {
            write!(f, " {} {}", self.upper_operator.invert(), self.upper_bound)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zero_to_infinity() {
        let b = Bound::default();
        assert_eq!(b.lower_bound, 0.0);
        assert_eq!(b.lower_operator, BoundOperator::LessOrEqual);
        assert_eq!(b.upper_bound, UNBOUNDED);
        assert_eq!(b.upper_operator, BoundOperator::LessOrEqual);
        assert!(!b.has_upper_bound());
    }

    #[test]
    fn test_display_double_sided() {
        let b = Bound::new(
            "x",
            0.0,
            BoundOperator::LessOrEqual,
            10.0,
            BoundOperator::GreaterOrEqual,
        );
        assert_eq!(b.to_string(), "0 <= x <= 10");
    }

    #[test]
    fn test_display_omits_unbounded_upper() {
        assert_eq!(Bound::unbounded("y").to_string(), "0 <= y");
    }
}
