//! Canonical logging macros
//!
//! These macros provide a structured, consistent way to log comparison
//! outcomes and rejected operations.

/// Log the comparator that decided two values are not equal
///
/// Emitted at `debug` level so production filters drop it.
///
/// # Example
///
/// ```
/// # use structeq_core::log_mismatch;
/// # use structeq_core_types::ValueKind;
/// log_mismatch!(ValueKind::Array, "length");
/// ```
#[macro_export]
macro_rules! log_mismatch {
    ($kind:expr, $reason:expr) => {
        tracing::debug!(
            component = module_path!(),
            op = structeq_core_types::schema::OP_DEEP_EQUAL,
            event = structeq_core_types::schema::EVENT_MISMATCH,
            kind = $kind.as_str(),
            reason = $reason,
        );
    };
}

/// Log a rejected construction or mutation
///
/// # Example
///
/// ```
/// # use structeq_core::{log_op_error, errors::StructEqError};
/// # use structeq_core_types::ValueKind;
/// let err = StructEqError::KindMismatch {
///     op: "push".to_string(),
///     expected: ValueKind::Array,
///     found: ValueKind::Null,
/// };
/// log_op_error!("push", &err);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = structeq_core_types::schema::EVENT_END_ERROR,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code(),
        );
    }};
}
