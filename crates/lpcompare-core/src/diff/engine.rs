//! Sorted-merge symmetric difference.
//!
//! [`sorted_diff`] is the primitive: both inputs must already be sorted with
//! [`crate::ordering::sort_canonical`]. [`diff_models`] sorts copies of every
//! collection of two models and merges them per category.

use crate::diff::model::{CategoryDiff, DiffCategory, EntityDiff, ModelDiff};
use crate::model::Model;
use crate::ordering::{is_canonically_sorted, sort_canonical, CanonicalOrder};
use crate::{log_op_end, log_op_start};
use std::cmp::Ordering;
use std::time::Instant;

/// Symmetric difference of two canonically sorted slices in one linear pass.
///
/// Equal elements (under [`CanonicalOrder`]) are matched pairwise and emitted
/// on neither side, so duplicates are matched one-for-one.
///
/// ```
/// use lpcompare_core::diff::sorted_diff;
///
/// let a = vec!["x".to_string(), "y".to_string()];
/// let b = vec!["y".to_string(), "z".to_string()];
/// let diff = sorted_diff(&a, &b);
/// assert_eq!(diff.only_in_first, vec!["x"]);
/// assert_eq!(diff.only_in_second, vec!["z"]);
/// ```
pub fn sorted_diff<T: CanonicalOrder + Clone>(first: &[T], second: &[T]) -> EntityDiff<T> {
    debug_assert!(is_canonically_sorted(first));
    debug_assert!(is_canonically_sorted(second));

    let mut diff = EntityDiff::default();
    let (mut i, mut j) = (0, 0);

    while i < first.len() && j < second.len() {
        match first[i].canonical_cmp(&second[j]) {
            Ordering::Equal => {
                i += 1;
                j += 1;
            }
            Ordering::Less => {
                diff.only_in_first.push(first[i].clone());
                i += 1;
            }
            Ordering::Greater => {
                diff.only_in_second.push(second[j].clone());
                j += 1;
            }
        }
    }

    diff.only_in_first.extend_from_slice(&first[i..]);
    diff.only_in_second.extend_from_slice(&second[j..]);
    diff
}

fn diff_category<T: CanonicalOrder + Clone>(
    category: DiffCategory,
    first: &[T],
    second: &[T],
) -> CategoryDiff<T> {
    let mut a = first.to_vec();
    let mut b = second.to_vec();
    sort_canonical(&mut a);
    sort_canonical(&mut b);

    CategoryDiff {
        category,
        first_count: first.len(),
        second_count: second.len(),
        entities: sorted_diff(&a, &b),
    }
}

/// Compare two models category by category.
///
/// The inputs are left untouched; every collection is copied and sorted
/// before merging.
pub fn diff_models(first: &Model, second: &Model) -> ModelDiff {
    let start = Instant::now();
    log_op_start!("diff_models");

    let diff = ModelDiff {
        generals: diff_category(DiffCategory::Generals, &first.generals, &second.generals),
        binaries: diff_category(DiffCategory::Binaries, &first.binaries, &second.binaries),
        sos_variables: diff_category(
            DiffCategory::SosVars,
            &first.sos_variables,
            &second.sos_variables,
        ),
        bounds: diff_category(DiffCategory::Bounds, &first.bounds, &second.bounds),
        constraints: diff_category(
            DiffCategory::Constraints,
            &first.constraints,
            &second.constraints,
        ),
    };

    let (only_in_first, only_in_second) = diff
        .counts()
        .iter()
        .fold((0, 0), |(a, b), row| (a + row.3, b + row.4));
    log_op_end!(
        "diff_models",
        duration_ms = start.elapsed().as_millis() as u64,
        only_in_first = only_in_first,
        only_in_second = only_in_second
    );

    diff
}
