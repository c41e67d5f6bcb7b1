//! In-memory representation of a parsed LP model.
//!
//! Every entity is an owned value; the [`Model`] holds them in plain vectors
//! in file order. Ordering for comparison lives in [`crate::ordering`].

pub mod bound;
pub mod constraint;
pub mod lp_model;
pub mod operator;
pub mod term;

pub use bound::Bound;
pub use constraint::Constraint;
pub use lp_model::{Model, ModelStats};
pub use operator::{BoundOperator, ConstraintOperator};
pub use term::Term;
