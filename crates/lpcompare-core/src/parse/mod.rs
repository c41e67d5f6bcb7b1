//! CPLEX LP format parsing.
//!
//! ## Entry points
//!
//! ```
//! use lpcompare_core::parse::parse_model_str;
//!
//! let model = parse_model_str("Subject To\n c1: x + y >= 2\nBounds\n x <= 4\nEnd\n").unwrap();
//! assert_eq!(model.constraints.len(), 1);
//! assert_eq!(model.bounds.len(), 1);
//! ```
//!
//! Only numeric literals that fail to parse are reported as errors. A line
//! that does not look like a bound or a constraint row is skipped.

pub mod bound;
pub mod builder;
pub mod constraint;
pub mod section;
pub mod tokenizer;

pub use bound::parse_bound;
pub use builder::{parse_model_str, read_model, read_model_file, ModelBuilder};
pub use constraint::parse_constraint;
pub use section::Section;
pub use tokenizer::{is_identifier, tokenize, BOUND_DELIMITERS, CONSTRAINT_DELIMITERS};

use crate::errors::{LpCompareError, Result};

pub(crate) fn parse_f32(token: &str, field: &str) -> Result<f32> {
    token
        .parse::<f32>()
        .map_err(|_| LpCompareError::invalid_number(token, field))
}

pub(crate) fn parse_f64(token: &str, field: &str) -> Result<f64> {
    token
        .parse::<f64>()
        .map_err(|_| LpCompareError::invalid_number(token, field))
}
