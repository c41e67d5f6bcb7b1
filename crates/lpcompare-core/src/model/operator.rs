//! Relational operators for bounds and constraint rows.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Comparator attached to one side of a [`crate::model::Bound`].
///
/// Variant order is the canonical rank used by bound ordering
/// (`Free=0, Equal=1, GreaterThan=2, LessThan=3, GreaterOrEqual=4, LessOrEqual=5`),
/// so the derived `Ord` is the rank order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BoundOperator {
    Free,
    Equal,
    GreaterThan,
    LessThan,
    GreaterOrEqual,
    LessOrEqual,
}

impl BoundOperator {
    /// Map an operator token to a bound operator.
    ///
    /// Unknown tokens, including the `free` keyword in any case, map to
    /// [`BoundOperator::Free`], which the bound parser treats as a no-op.
    pub fn from_token(token: &str) -> Self {
        match token {
            "=" => BoundOperator::Equal,
            ">=" | "=>" => BoundOperator::GreaterOrEqual,
            ">" => BoundOperator::GreaterThan,
            "<=" | "=<" => BoundOperator::LessOrEqual,
            "<" => BoundOperator::LessThan,
            _ => BoundOperator::Free,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BoundOperator::Free => "Free",
            BoundOperator::Equal => "=",
            BoundOperator::GreaterThan => ">",
            BoundOperator::LessThan => "<",
            BoundOperator::GreaterOrEqual => ">=",
            BoundOperator::LessOrEqual => "<=",
        }
    }

    /// Mirror the operator so `x op v` can be recorded as `v op' x`.
    ///
    /// Strictness is collapsed: both `>` and `>=` become `<=`, both `<` and
    /// `<=` become `>=`. `Free` and `Equal` are fixed points.
    pub fn invert(self) -> Self {
        match self {
            BoundOperator::GreaterThan | BoundOperator::GreaterOrEqual => {
                BoundOperator::LessOrEqual
            }
            BoundOperator::LessThan | BoundOperator::LessOrEqual => BoundOperator::GreaterOrEqual,
            BoundOperator::Equal => BoundOperator::Equal,
            BoundOperator::Free => BoundOperator::Free,
        }
    }

    /// Canonical rank, see the type docs.
    pub fn rank(self) -> u8 {
        self as u8
    }

    pub(crate) fn is_greater(self) -> bool {
        matches!(
            self,
            BoundOperator::GreaterThan | BoundOperator::GreaterOrEqual
        )
    }

    pub(crate) fn is_less(self) -> bool {
        matches!(self, BoundOperator::LessThan | BoundOperator::LessOrEqual)
    }
}

impl fmt::Display for BoundOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Relational sign of a constraint row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConstraintOperator {
    Equal,
    GreaterThan,
    LessThan,
    GreaterOrEqual,
    LessOrEqual,
}

impl ConstraintOperator {
    /// Map an operator token to a constraint sign. Unknown tokens map to `Equal`.
    pub fn from_token(token: &str) -> Self {
        match token {
            ">=" | "=>" => ConstraintOperator::GreaterOrEqual,
            ">" => ConstraintOperator::GreaterThan,
            "<=" | "=<" => ConstraintOperator::LessOrEqual,
            "<" => ConstraintOperator::LessThan,
            _ => ConstraintOperator::Equal,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConstraintOperator::Equal => "=",
            ConstraintOperator::GreaterThan => ">",
            ConstraintOperator::LessThan => "<",
            ConstraintOperator::GreaterOrEqual => ">=",
            ConstraintOperator::LessOrEqual => "<=",
        }
    }

    /// Sign class used by constraint ordering: `=` is 0, `>`/`>=` are 1,
    /// `<`/`<=` are 2. Strict and non-strict signs share a class.
    pub fn sign_rank(self) -> u8 {
        match self {
            ConstraintOperator::Equal => 0,
            ConstraintOperator::GreaterThan | ConstraintOperator::GreaterOrEqual => 1,
            ConstraintOperator::LessThan | ConstraintOperator::LessOrEqual => 2,
        }
    }
}

impl fmt::Display for ConstraintOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
