//! Load two model files, diff them and optionally dump the differences.

use crate::diff::{diff_models, DiffSink, FileDumpSink, ModelDiff};
use crate::errors::Result;
use crate::model::ModelStats;
use crate::parse::read_model_file;
use crate::{log_op_end, log_op_error, log_op_start};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;

pub const DEFAULT_DUMP_PREFIX: &str = "diffdump";

/// Options for [`compare_files`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareOptions {
    /// File name prefix of difference dumps.
    pub dump_prefix: String,
    /// Write difference dump files at all.
    pub dump_diffs: bool,
    /// Directory receiving the dumps.
    pub dump_dir: PathBuf,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            dump_prefix: DEFAULT_DUMP_PREFIX.to_string(),
            dump_diffs: true,
            dump_dir: PathBuf::from("."),
        }
    }
}

/// Everything a comparison produced.
#[derive(Debug, Clone, Serialize)]
pub struct CompareOutcome {
    pub first_stats: ModelStats,
    pub second_stats: ModelStats,
    pub diff: ModelDiff,
    /// Dump files written, empty when dumping was disabled.
    pub dump_files: Vec<PathBuf>,
}

impl CompareOutcome {
    /// Pretty-printed JSON report.
    ///
    /// # Errors
    ///
    /// `Serialization` when the report cannot be rendered.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Compare two LP files.
///
/// # Errors
///
/// Any load error of either file (`FileNotFound`, `Io`, `InvalidNumber`),
/// or `DumpWrite` when a dump file cannot be written.
pub fn compare_files(
    first: impl AsRef<Path>,
    second: impl AsRef<Path>,
    options: &CompareOptions,
) -> Result<CompareOutcome> {
    let start = Instant::now();
    log_op_start!("compare_files");

    let result = compare_files_impl(first.as_ref(), second.as_ref(), options);
    let duration_ms = start.elapsed().as_millis() as u64;

    match &result {
        Ok(outcome) => {
            log_op_end!(
                "compare_files",
                duration_ms = duration_ms,
                equivalent = outcome.diff.is_equivalent(),
                dump_files = outcome.dump_files.len()
            );
        }
        Err(err) => log_op_error!("compare_files", err.clone(), duration_ms = duration_ms),
    }

    result
}

fn compare_files_impl(
    first: &Path,
    second: &Path,
    options: &CompareOptions,
) -> Result<CompareOutcome> {
    let first_model = read_model_file(first)?;
    let second_model = read_model_file(second)?;

    let diff = diff_models(&first_model, &second_model);

    let dump_files = if options.dump_diffs {
        write_dumps(&diff, options)?
    } else {
        Vec::new()
    };

    Ok(CompareOutcome {
        first_stats: first_model.stats(),
        second_stats: second_model.stats(),
        diff,
        dump_files,
    })
}

fn write_dumps(diff: &ModelDiff, options: &CompareOptions) -> Result<Vec<PathBuf>> {
    let dir_text = options.dump_dir.display().to_string();
    let start = Instant::now();
    log_op_start!("write_dumps", path = %dir_text);

    let mut sink = FileDumpSink::new(&options.dump_dir, &options.dump_prefix);
    let result = sink.write_model_diff(diff);
    let duration_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok(()) => {
            log_op_end!(
                "write_dumps",
                duration_ms = duration_ms,
                path = %dir_text,
                dump_files = sink.written().len()
            );
            Ok(sink.into_written())
        }
        Err(err) => {
            log_op_error!(
                "write_dumps",
                err.clone(),
                duration_ms = duration_ms,
                path = %dir_text
            );
            Err(err)
        }
    }
}
