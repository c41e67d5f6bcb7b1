//! Canonical logging macros
//!
//! These macros provide a structured, consistent way to log operations.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use lpcompare_core::log_op_start;
/// log_op_start!("read_model");
/// log_op_start!("read_model", path = "model.lp");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = lpcompare_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = lpcompare_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use lpcompare_core::log_op_end;
/// log_op_end!("read_model", duration_ms = 42);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = lpcompare_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = lpcompare_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// The error is converted into [`crate::errors::LpError`] so the event always
/// carries the stable kind and code.
///
/// # Example
///
/// ```
/// # use lpcompare_core::log_op_error;
/// # use lpcompare_core::errors::LpCompareError;
/// let err = LpCompareError::FileNotFound { path: "a.lp".to_string() };
/// log_op_error!("read_model", err, duration_ms = 10);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        use $crate::errors::LpError;
        let lp_err: LpError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = lpcompare_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?lp_err.kind(),
            err_code = lp_err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        use $crate::errors::LpError;
        let lp_err: LpError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = lpcompare_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?lp_err.kind(),
            err_code = lp_err.code(),
            $($field)*
        );
    }};
}
