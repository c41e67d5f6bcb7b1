//! CPLEX LP format parser and model comparison.
//!
//! Two LP files are parsed into [`Model`]s, every collection is sorted under
//! a canonical order, and a single merge pass per category reports what one
//! model has and the other lacks.
//!
//! ```
//! use lpcompare_core::{diff_models, parse_model_str};
//!
//! let a = parse_model_str("Subject To\n c1: 2 x1 - x2 = 5\nEnd\n").unwrap();
//! let b = parse_model_str("Subject To\n r: - x2 + 2 x1 = 5\nEnd\n").unwrap();
//! assert!(diff_models(&a, &b).is_equivalent());
//! ```

pub mod compare;
pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ordering;
pub mod parse;

pub use compare::{compare_files, CompareOptions, CompareOutcome};
pub use diff::{diff_models, render_summary, DiffCategory, DiffSink, ModelDiff};
pub use errors::{LpCompareError, LpError, LpErrorKind, Result};
pub use model::{Bound, BoundOperator, Constraint, ConstraintOperator, Model, ModelStats, Term};
pub use ordering::{sort_canonical, CanonicalOrder};
pub use parse::{parse_bound, parse_constraint, parse_model_str, read_model, read_model_file};
