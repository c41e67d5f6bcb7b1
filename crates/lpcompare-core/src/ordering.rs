//! Canonical ordering of parsed entities.
//!
//! The diff engine never hashes: floats only support ordering, so equality
//! and set difference are both decided by [`CanonicalOrder`]. Sorting a
//! collection with [`sort_canonical`] and then merging two sorted
//! collections is how models are compared.
//!
//! | entity | key (ascending, lexicographic) |
//! |---|---|
//! | `String` | byte-wise string order |
//! | [`Term`] | variable name, coefficient |
//! | [`Bound`] | variable name, lower bound, lower operator rank, upper bound, upper operator rank |
//! | [`Constraint`] | sign class, rhs, term count, terms |
//!
//! Constraint order compares the sign *class* (`>` and `>=` share one, `<`
//! and `<=` share another) and ignores the row name, so two rows that differ
//! only in strictness or name are canonically equal.

use crate::model::{Bound, Constraint, Term};
use std::cmp::Ordering;

/// Total order used for sorting and equality in the diff engine.
pub trait CanonicalOrder {
    fn canonical_cmp(&self, other: &Self) -> Ordering;

    fn canonical_eq(&self, other: &Self) -> bool {
        self.canonical_cmp(other) == Ordering::Equal
    }
}

/// IEEE order where it is defined, `total_cmp` for NaN. `-0.0 == 0.0`.
pub fn cmp_f32(a: f32, b: f32) -> Ordering {
    a.partial_cmp(&b).unwrap_or_else(|| a.total_cmp(&b))
}

/// See [`cmp_f32`].
pub fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or_else(|| a.total_cmp(&b))
}

/// Sort a slice in canonical order (stable).
pub fn sort_canonical<T: CanonicalOrder>(items: &mut [T]) {
    items.sort_by(|a, b| a.canonical_cmp(b));
}

pub fn is_canonically_sorted<T: CanonicalOrder>(items: &[T]) -> bool {
    items
        .windows(2)
        .all(|pair| pair[0].canonical_cmp(&pair[1]) != Ordering::Greater)
}

impl CanonicalOrder for String {
    fn canonical_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl CanonicalOrder for Term {
    fn canonical_cmp(&self, other: &Self) -> Ordering {
        self.variable_name
            .cmp(&other.variable_name)
            .then_with(|| cmp_f64(self.coefficient, other.coefficient))
    }
}

impl CanonicalOrder for Bound {
    fn canonical_cmp(&self, other: &Self) -> Ordering {
        self.variable_name
            .cmp(&other.variable_name)
            .then_with(|| cmp_f32(self.lower_bound, other.lower_bound))
            .then_with(|| self.lower_operator.cmp(&other.lower_operator))
            .then_with(|| cmp_f32(self.upper_bound, other.upper_bound))
            .then_with(|| self.upper_operator.cmp(&other.upper_operator))
    }
}

impl CanonicalOrder for Constraint {
    fn canonical_cmp(&self, other: &Self) -> Ordering {
        self.sign()
            .sign_rank()
            .cmp(&other.sign().sign_rank())
            .then_with(|| cmp_f64(self.rhs(), other.rhs()))
            .then_with(|| self.terms().len().cmp(&other.terms().len()))
            .then_with(|| {
                // Equal lengths here; terms are pre-sorted.
                self.terms()
                    .iter()
                    .zip(other.terms())
                    .map(|(a, b)| a.canonical_cmp(b))
                    .find(|ord| *ord != Ordering::Equal)
                    .unwrap_or(Ordering::Equal)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BoundOperator, ConstraintOperator};

    #[test]
    fn test_float_cmp_treats_signed_zero_as_equal() {
        assert_eq!(cmp_f32(-0.0, 0.0), Ordering::Equal);
        assert_eq!(cmp_f64(-0.0, 0.0), Ordering::Equal);
    }

    #[test]
    fn test_float_cmp_orders_nan_totally() {
        assert_eq!(cmp_f64(f64::NAN, f64::NAN), Ordering::Equal);
        assert_eq!(cmp_f64(1.0, f64::NAN), Ordering::Less);
        assert_eq!(cmp_f32(f32::NAN, f32::INFINITY), Ordering::Greater);
    }

    #[test]
    fn test_bound_operator_rank_breaks_ties() {
        let a = Bound::new("x", 0.0, BoundOperator::Equal, 1.0, BoundOperator::Equal);
        let b = Bound::new("x", 0.0, BoundOperator::LessOrEqual, 1.0, BoundOperator::Equal);
        assert_eq!(a.canonical_cmp(&b), Ordering::Less);
    }

    #[test]
    fn test_constraint_terms_compare_lexicographically() {
        let a = Constraint::new(
            None,
            vec![Term::new("a", 1.0), Term::new("z", 5.0)],
            ConstraintOperator::Equal,
            1.0,
        );
        let b = Constraint::new(
            None,
            vec![Term::new("b", 1.0), Term::new("c", 1.0)],
            ConstraintOperator::Equal,
            1.0,
        );
        assert_eq!(a.canonical_cmp(&b), Ordering::Less);
        assert_eq!(b.canonical_cmp(&a), Ordering::Greater);
    }
}
