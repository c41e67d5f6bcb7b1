//! Difference sinks.
//!
//! A sink receives, per category, the entities found only in the first model
//! and those found only in the second, and renders each with its `Display`
//! dump form.

use crate::diff::model::{DiffCategory, ModelDiff};
use crate::errors::{LpCompareError, Result};
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};

/// Side label used in dump headers and file names.
pub const FIRST_EXCEPT_SECOND: &str = "firstEXCEPTsecond";
/// See [`FIRST_EXCEPT_SECOND`].
pub const SECOND_EXCEPT_FIRST: &str = "secondEXCEPTfirst";

pub trait DiffSink {
    /// Accept one category of differences.
    ///
    /// # Errors
    ///
    /// Implementations that write to storage return `DumpWrite`.
    fn write_category<T: Display>(
        &mut self,
        category: DiffCategory,
        only_in_first: &[T],
        only_in_second: &[T],
    ) -> Result<()>;

    /// Feed every category of `diff` in report order.
    ///
    /// # Errors
    ///
    /// Propagates the first failing [`DiffSink::write_category`].
    fn write_model_diff(&mut self, diff: &ModelDiff) -> Result<()> {
        self.write_category(
            diff.generals.category,
            diff.generals.only_in_first(),
            diff.generals.only_in_second(),
        )?;
        self.write_category(
            diff.binaries.category,
            diff.binaries.only_in_first(),
            diff.binaries.only_in_second(),
        )?;
        self.write_category(
            diff.sos_variables.category,
            diff.sos_variables.only_in_first(),
            diff.sos_variables.only_in_second(),
        )?;
        self.write_category(
            diff.bounds.category,
            diff.bounds.only_in_first(),
            diff.bounds.only_in_second(),
        )?;
        self.write_category(
            diff.constraints.category,
            diff.constraints.only_in_first(),
            diff.constraints.only_in_second(),
        )
    }
}

/// Header line followed by one rendered entity per item, each newline
/// terminated.
pub fn render_dump<T: Display>(side: &str, category: DiffCategory, items: &[T]) -> String {
    let mut out = format!("{side} {category}\n");
    for item in items {
        out.push_str(&format!("{item}\n"));
    }
    out
}

/// Writes `<prefix>-<side>-<Category>.log` files into a directory.
///
/// Files are only created for non-empty sides.
#[derive(Debug)]
pub struct FileDumpSink {
    dir: PathBuf,
    prefix: String,
    written: Vec<PathBuf>,
}

impl FileDumpSink {
    pub fn new(dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            prefix: prefix.into(),
            written: Vec::new(),
        }
    }

    /// Path of the dump file for one side of one category.
    pub fn dump_path(&self, side: &str, category: DiffCategory) -> PathBuf {
        self.dir
            .join(format!("{}-{}-{}.log", self.prefix, side, category.name()))
    }

    /// Files written so far, in write order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    pub fn into_written(self) -> Vec<PathBuf> {
        self.written
    }

    fn write_side<T: Display>(
        &mut self,
        side: &str,
        category: DiffCategory,
        items: &[T],
    ) -> Result<()> {
        if items.is_empty() {
            return Ok(());
        }

        let path = self.dump_path(side, category);
        write_file(&path, &render_dump(side, category, items))?;
        tracing::debug!(path = %path.display(), items = items.len(), "wrote difference dump");
        self.written.push(path);
        Ok(())
    }
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|e| LpCompareError::DumpWrite {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

impl DiffSink for FileDumpSink {
    fn write_category<T: Display>(
        &mut self,
        category: DiffCategory,
        only_in_first: &[T],
        only_in_second: &[T],
    ) -> Result<()> {
        self.write_side(FIRST_EXCEPT_SECOND, category, only_in_first)?;
        self.write_side(SECOND_EXCEPT_FIRST, category, only_in_second)
    }
}

/// One captured category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCategory {
    pub category: DiffCategory,
    pub only_in_first: Vec<String>,
    pub only_in_second: Vec<String>,
}

/// Collects rendered entities in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    categories: Vec<RenderedCategory>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn categories(&self) -> &[RenderedCategory] {
        &self.categories
    }

    pub fn get(&self, category: DiffCategory) -> Option<&RenderedCategory> {
        self.categories.iter().find(|c| c.category == category)
    }
}

impl DiffSink for MemorySink {
    fn write_category<T: Display>(
        &mut self,
        category: DiffCategory,
        only_in_first: &[T],
        only_in_second: &[T],
    ) -> Result<()> {
        self.categories.push(RenderedCategory {
            category,
            only_in_first: only_in_first.iter().map(ToString::to_string).collect(),
            only_in_second: only_in_second.iter().map(ToString::to_string).collect(),
        });
        Ok(())
    }
}
