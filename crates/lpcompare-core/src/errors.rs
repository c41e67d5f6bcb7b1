use thiserror::Error;

/// Result type alias using LpCompareError
pub type Result<T> = std::result::Result<T, LpCompareError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and machine-readable CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LpErrorKind {
    // Parsing
    /// A numeric token (bound value, coefficient, right-hand side) did not parse
    InvalidNumber,

    // Line source / sinks
    NotFound,
    Io,
    DumpWrite,
    Serialization,
}

impl LpErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            LpErrorKind::InvalidNumber => "ERR_INVALID_NUMBER",
            LpErrorKind::NotFound => "ERR_NOT_FOUND",
            LpErrorKind::Io => "ERR_IO",
            LpErrorKind::DumpWrite => "ERR_DUMP_WRITE",
            LpErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification plus the context needed to point a user at the
/// offending input: the operation, the file, the physical line and the token.
#[derive(Debug, Clone)]
pub struct LpError {
    kind: LpErrorKind,
    op: Option<String>,
    path: Option<String>,
    line: Option<usize>,
    token: Option<String>,
    message: String,
}

impl LpError {
    /// Create a new error with the specified kind
    pub fn new(kind: LpErrorKind) -> Self {
        Self {
            kind,
            op: None,
            path: None,
            line: None,
            token: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add file path context
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add physical line number context (1-based)
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Add offending token context
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> LpErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn line(&self) -> Option<usize> {
        self.line
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for LpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        if let Some(line) = self.line {
            write!(f, " (line: {})", line)?;
        }
        if let Some(token) = &self.token {
            write!(f, " (token: {:?})", token)?;
        }
        Ok(())
    }
}

impl std::error::Error for LpError {}

// ========== End Error Facility ==========

/// Error taxonomy for lpcompare operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LpCompareError {
    /// A numeric literal in a bound or constraint row could not be parsed.
    ///
    /// `line` is filled in by the model builder once the physical line is known.
    #[error("Invalid {field} '{token}'{}", .line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    InvalidNumber {
        token: String,
        field: String,
        line: Option<usize>,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("I/O error reading {path}: {message}")]
    Io { path: String, message: String },

    #[error("Cannot write difference dump {path}: {message}")]
    DumpWrite { path: String, message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl LpCompareError {
    pub(crate) fn invalid_number(token: &str, field: &str) -> Self {
        LpCompareError::InvalidNumber {
            token: token.to_string(),
            field: field.to_string(),
            line: None,
        }
    }

    /// Attach a physical line number to errors that carry one.
    pub fn at_line(self, line_no: usize) -> Self {
        match self {
            LpCompareError::InvalidNumber { token, field, .. } => LpCompareError::InvalidNumber {
                token,
                field,
                line: Some(line_no),
            },
            other => other,
        }
    }
}

impl From<serde_json::Error> for LpCompareError {
    fn from(err: serde_json::Error) -> Self {
        LpCompareError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<LpCompareError> for LpError {
    fn from(err: LpCompareError) -> Self {
        match err {
            LpCompareError::InvalidNumber { token, field, line } => {
                let ex = LpError::new(LpErrorKind::InvalidNumber)
                    .with_op("parse_number")
                    .with_token(token)
                    .with_message(format!("Invalid {}", field));
                match line {
                    Some(line) => ex.with_line(line),
                    None => ex,
                }
            }

            LpCompareError::FileNotFound { path } => LpError::new(LpErrorKind::NotFound)
                .with_op("read_model_file")
                .with_path(path)
                .with_message("File not found"),

            LpCompareError::Io { path, message } => LpError::new(LpErrorKind::Io)
                .with_op("read_model")
                .with_path(path)
                .with_message(message),

            LpCompareError::DumpWrite { path, message } => LpError::new(LpErrorKind::DumpWrite)
                .with_op("write_dump")
                .with_path(path)
                .with_message(message),

            LpCompareError::Serialization { message } => {
                LpError::new(LpErrorKind::Serialization).with_message(message)
            }
        }
    }
}
