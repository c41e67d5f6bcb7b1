use lpcompare_core::{Bound, BoundOperator, Constraint, ConstraintOperator, Term};
use std::path::PathBuf;

/// Small LP file exercising every recognised section.
#[allow(dead_code)]
pub const SAMPLE_LP: &str = "\\ sample model
Minimize
 obj: x + 2 y
Subject To
 c1: 2 x1 - x2 = 5
 c2: x + y
   + z >= 1
 c3: - x <= 4
Bounds
 0 <= x <= 10
 y >= 1
 z free
 w = 3
Generals
 x y
Binaries
 b1 b2
SOS
 s1 s2
End
";

/// Write `contents` to `name` inside `dir` and return the path.
#[allow(dead_code)]
pub fn write_lp(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[allow(dead_code)]
pub fn double_sided(name: &str, lower: f32, upper: f32) -> Bound {
    Bound::new(
        name,
        lower,
        BoundOperator::LessOrEqual,
        upper,
        BoundOperator::GreaterOrEqual,
    )
}

#[allow(dead_code)]
pub fn row(name: &str, terms: &[(&str, f64)], sign: ConstraintOperator, rhs: f64) -> Constraint {
    Constraint::new(
        Some(name.to_string()),
        terms.iter().map(|(v, c)| Term::new(*v, *c)).collect(),
        sign,
        rhs,
    )
}
