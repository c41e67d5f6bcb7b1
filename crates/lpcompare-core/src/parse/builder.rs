//! Section-driven model builder and the line-source entry points.

use crate::errors::{LpCompareError, Result};
use crate::model::Model;
use crate::parse::bound::parse_bound;
use crate::parse::constraint::parse_constraint;
use crate::parse::section::Section;
use crate::parse::tokenizer::{tokenize, BOUND_DELIMITERS};
use crate::{log_op_end, log_op_error, log_op_start};
use lpcompare_core_types::schema::EVENT_PROGRESS;
use std::io::BufRead;
use std::path::Path;
use std::time::Instant;

/// Physical lines between two progress events.
pub const PROGRESS_INTERVAL: u64 = 1_000_000;

/// Incremental LP model builder.
///
/// Lines are pushed in file order. Outside a section every line is a header
/// candidate; inside one, indented lines belong to the section and the first
/// non-indented, non-blank, non-comment line closes it and is examined again
/// as a header.
///
/// ```
/// use lpcompare_core::parse::ModelBuilder;
///
/// let mut builder = ModelBuilder::new();
/// for line in ["Generals", " x y", "End"] {
///     builder.push_line(line).unwrap();
/// }
/// let model = builder.finish().unwrap();
/// assert_eq!(model.generals, vec!["x", "y"]);
/// ```
#[derive(Debug, Default)]
pub struct ModelBuilder {
    model: Model,
    section: Option<Section>,
    row_buffer: Vec<String>,
    row_start_line: usize,
    lines_read: u64,
}

impl ModelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Physical lines consumed so far.
    pub fn lines_read(&self) -> u64 {
        self.lines_read
    }

    /// Feed the next physical line (without its terminator).
    ///
    /// # Errors
    ///
    /// `InvalidNumber` (with the physical line number) when a bound line or
    /// a completed constraint row carries an unparsable numeric literal.
    pub fn push_line(&mut self, line: &str) -> Result<()> {
        self.lines_read += 1;
        if self.lines_read % PROGRESS_INTERVAL == 0 {
            tracing::info!(
                component = module_path!(),
                op = "read_model",
                event = EVENT_PROGRESS,
                lines_read = self.lines_read,
            );
        }
        let line_no = self.lines_read as usize;

        if let Some(section) = self.section {
            if line.trim().is_empty() || line.starts_with('\\') {
                return Ok(());
            }
            if line.starts_with(' ') {
                return self.consume(section, line, line_no);
            }
            // Not part of the section: close it and reconsider as a header.
            self.flush_row()?;
            self.section = None;
        } else if line.starts_with([' ', '\\']) {
            // Indented text outside a section (objective rows and their
            // continuations) is never a header.
            return Ok(());
        }

        self.section = Section::from_header(line);
        Ok(())
    }

    /// Flush any pending constraint row and return the model.
    ///
    /// # Errors
    ///
    /// `InvalidNumber` when the final buffered row does not parse.
    pub fn finish(mut self) -> Result<Model> {
        self.flush_row()?;
        Ok(self.model)
    }

    fn consume(&mut self, section: Section, line: &str, line_no: usize) -> Result<()> {
        match section {
            Section::Generals => self.model.generals.extend(variable_tokens(line)),
            Section::Binaries => self.model.binaries.extend(variable_tokens(line)),
            Section::Sos => self.model.sos_variables.extend(variable_tokens(line)),
            Section::Bounds => {
                if let Some(bound) = parse_bound(line).map_err(|e| e.at_line(line_no))? {
                    self.model.bounds.push(bound);
                }
            }
            Section::Constraints => {
                let starts_row = line.as_bytes().get(1) != Some(&b' ');
                if starts_row && !self.row_buffer.is_empty() {
                    self.flush_row()?;
                }
                if self.row_buffer.is_empty() {
                    self.row_start_line = line_no;
                }
                self.row_buffer.push(line.to_string());
            }
        }
        Ok(())
    }

    fn flush_row(&mut self) -> Result<()> {
        if self.row_buffer.is_empty() {
            return Ok(());
        }

        let mut joined = String::new();
        for part in self.row_buffer.drain(..) {
            joined.push_str(&part);
            joined.push(' ');
        }

        let row_start = self.row_start_line;
        if let Some(constraint) = parse_constraint(&joined).map_err(|e| e.at_line(row_start))? {
            self.model.constraints.push(constraint);
        }
        Ok(())
    }
}

fn variable_tokens(line: &str) -> impl Iterator<Item = String> + '_ {
    tokenize(line, BOUND_DELIMITERS)
        .into_iter()
        .filter(|token| !token.starts_with(['\r', '\n']))
        .map(str::to_string)
}

/// Build a model from any buffered line source.
///
/// Lines are split on `\n`; a trailing `\r` is removed and invalid UTF-8 is
/// replaced rather than rejected.
///
/// # Errors
///
/// `Io` when the reader fails, `InvalidNumber` for malformed numeric
/// literals.
pub fn read_model<R: BufRead>(reader: R) -> Result<Model> {
    read_model_from(reader, "<reader>")
}

/// Build a model from an in-memory LP text.
///
/// # Errors
///
/// `InvalidNumber` for malformed numeric literals.
pub fn parse_model_str(text: &str) -> Result<Model> {
    let mut builder = ModelBuilder::new();
    for line in text.lines() {
        builder.push_line(line)?;
    }
    builder.finish()
}

/// Load a model from a file on disk.
///
/// # Errors
///
/// `FileNotFound` when `path` does not exist, `Io` when it cannot be read,
/// `InvalidNumber` for malformed numeric literals.
pub fn read_model_file(path: impl AsRef<Path>) -> Result<Model> {
    let path = path.as_ref();
    let path_text = path.display().to_string();
    let start = Instant::now();
    log_op_start!("read_model_file", path = %path_text);

    let result = read_model_file_impl(path, &path_text);
    let duration_ms = start.elapsed().as_millis() as u64;

    match &result {
        Ok(model) => {
            log_op_end!(
                "read_model_file",
                duration_ms = duration_ms,
                path = %path_text,
                bounds_len = model.bounds.len(),
                constraints_len = model.constraints.len()
            );
        }
        Err(err) => {
            log_op_error!(
                "read_model_file",
                err.clone(),
                duration_ms = duration_ms,
                path = %path_text
            );
        }
    }

    result
}

fn read_model_file_impl(path: &Path, path_text: &str) -> Result<Model> {
    if !path.exists() {
        return Err(LpCompareError::FileNotFound {
            path: path_text.to_string(),
        });
    }

    let file = std::fs::File::open(path).map_err(|e| LpCompareError::Io {
        path: path_text.to_string(),
        message: e.to_string(),
    })?;

    read_model_from(std::io::BufReader::new(file), path_text)
}

fn read_model_from<R: BufRead>(reader: R, source: &str) -> Result<Model> {
    let mut builder = ModelBuilder::new();

    for chunk in reader.split(b'\n') {
        let bytes = chunk.map_err(|e| LpCompareError::Io {
            path: source.to_string(),
            message: e.to_string(),
        })?;
        let text = String::from_utf8_lossy(&bytes);
        builder.push_line(text.strip_suffix('\r').unwrap_or(&*text))?;
    }

    builder.finish()
}
