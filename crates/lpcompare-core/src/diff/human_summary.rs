//! Console summary of a [`ModelDiff`].

use crate::diff::model::{CategoryDiff, ModelDiff};

/// Render the per-category comparison summary.
///
/// For every category:
///
/// ```text
/// Bounds First Model: 3
/// Bounds Second Model: 2
/// Bounds First except Second: 1
/// Bounds Second except First: 0
/// ```
///
/// or, when nothing differs, `Bounds are equivalent.` after the two counts.
pub fn render_summary(diff: &ModelDiff) -> String {
    let mut out = String::new();
    push_category(&mut out, &diff.generals);
    push_category(&mut out, &diff.binaries);
    push_category(&mut out, &diff.sos_variables);
    push_category(&mut out, &diff.bounds);
    push_category(&mut out, &diff.constraints);
    out
}

fn push_category<T>(out: &mut String, category: &CategoryDiff<T>) {
    let name = category.category.name();
    out.push_str(&format!("{name} First Model: {}\n", category.first_count));
    out.push_str(&format!("{name} Second Model: {}\n", category.second_count));

    if category.is_equivalent() {
        out.push_str(&format!("{name} are equivalent.\n"));
    } else {
        out.push_str(&format!(
            "{name} First except Second: {}\n",
            category.only_in_first().len()
        ));
        out.push_str(&format!(
            "{name} Second except First: {}\n",
            category.only_in_second().len()
        ));
    }
}
