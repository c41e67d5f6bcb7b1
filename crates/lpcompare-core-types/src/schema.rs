//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Model loading
pub const FIELD_PATH: &str = "path";
pub const FIELD_LINES_READ: &str = "lines_read";
pub const FIELD_LINE: &str = "line";

// Collection sizes
pub const FIELD_BOUNDS_LEN: &str = "bounds_len";
pub const FIELD_CONSTRAINTS_LEN: &str = "constraints_len";
pub const FIELD_ONLY_IN_FIRST: &str = "only_in_first";
pub const FIELD_ONLY_IN_SECOND: &str = "only_in_second";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
pub const EVENT_PROGRESS: &str = "progress";
