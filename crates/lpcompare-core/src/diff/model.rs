//! Diff result types.

use crate::model::{Bound, Constraint};
use serde::Serialize;
use std::fmt;

/// Entity categories compared between two models, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DiffCategory {
    Generals,
    Binaries,
    SosVars,
    Bounds,
    Constraints,
}

impl DiffCategory {
    pub const ALL: [DiffCategory; 5] = [
        DiffCategory::Generals,
        DiffCategory::Binaries,
        DiffCategory::SosVars,
        DiffCategory::Bounds,
        DiffCategory::Constraints,
    ];

    /// Name used in summaries and dump file names.
    pub fn name(&self) -> &'static str {
        match self {
            DiffCategory::Generals => "Generals",
            DiffCategory::Binaries => "Binaries",
            DiffCategory::SosVars => "SosVars",
            DiffCategory::Bounds => "Bounds",
            DiffCategory::Constraints => "Constraints",
        }
    }
}

impl fmt::Display for DiffCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Symmetric difference of two sorted sequences.
///
/// Both sides preserve the order of their input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityDiff<T> {
    pub only_in_first: Vec<T>,
    pub only_in_second: Vec<T>,
}

impl<T> EntityDiff<T> {
    pub fn is_empty(&self) -> bool {
        self.only_in_first.is_empty() && self.only_in_second.is_empty()
    }
}

impl<T> Default for EntityDiff<T> {
    fn default() -> Self {
        Self {
            only_in_first: Vec::new(),
            only_in_second: Vec::new(),
        }
    }
}

/// One category of a [`ModelDiff`] together with the input sizes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryDiff<T> {
    pub category: DiffCategory,
    pub first_count: usize,
    pub second_count: usize,
    #[serde(flatten)]
    pub entities: EntityDiff<T>,
}

impl<T> CategoryDiff<T> {
    pub fn only_in_first(&self) -> &[T] {
        &self.entities.only_in_first
    }

    pub fn only_in_second(&self) -> &[T] {
        &self.entities.only_in_second
    }

    /// True when neither side has entities missing from the other.
    pub fn is_equivalent(&self) -> bool {
        self.entities.is_empty()
    }
}

/// Per-category differences between a first and a second model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelDiff {
    pub generals: CategoryDiff<String>,
    pub binaries: CategoryDiff<String>,
    pub sos_variables: CategoryDiff<String>,
    pub bounds: CategoryDiff<Bound>,
    pub constraints: CategoryDiff<Constraint>,
}

impl ModelDiff {
    pub fn is_equivalent(&self) -> bool {
        self.generals.is_equivalent()
            && self.binaries.is_equivalent()
            && self.sos_variables.is_equivalent()
            && self.bounds.is_equivalent()
            && self.constraints.is_equivalent()
    }

    /// Counts per category as `(category, first_count, second_count,
    /// only_in_first, only_in_second)`, in report order.
    pub fn counts(&self) -> Vec<(DiffCategory, usize, usize, usize, usize)> {
        fn row<T>(c: &CategoryDiff<T>) -> (DiffCategory, usize, usize, usize, usize) {
            (
                c.category,
                c.first_count,
                c.second_count,
                c.only_in_first().len(),
                c.only_in_second().len(),
            )
        }

        vec![
            row(&self.generals),
            row(&self.binaries),
            row(&self.sos_variables),
            row(&self.bounds),
            row(&self.constraints),
        ]
    }
}
