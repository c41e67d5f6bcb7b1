//! Model diff engine.
//!
//! ## Entry point
//!
//! ```
//! use lpcompare_core::diff::{diff_models, render_summary};
//! use lpcompare_core::parse::parse_model_str;
//!
//! let first = parse_model_str("Bounds\n x <= 4\n y <= 1\n").unwrap();
//! let second = parse_model_str("Bounds\n x <= 4\n").unwrap();
//! let diff = diff_models(&first, &second);
//! assert_eq!(diff.bounds.only_in_first().len(), 1);
//! assert!(render_summary(&diff).contains("Bounds First except Second: 1"));
//! ```
//!
//! Equality is canonical equality (see [`crate::ordering`]), never hashing.

pub mod engine;
pub mod human_summary;
pub mod model;
pub mod sink;

pub use engine::{diff_models, sorted_diff};
pub use human_summary::render_summary;
pub use model::{CategoryDiff, DiffCategory, EntityDiff, ModelDiff};
pub use sink::{DiffSink, FileDumpSink, MemorySink, RenderedCategory};
