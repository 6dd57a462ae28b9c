/// Pagination Kernel — Error Types
///
/// Validation happens once at the entry point. A rejected request
/// never yields a partial sequence.

use thiserror::Error;

/// Errors surfaced by `builder::build`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    /// A request parameter is outside its domain, or large enough that
    /// the derived layout quantities overflow i64.
    #[error("InvalidArgument: {field} = {value} ({reason})")]
    InvalidArgument {
        field: &'static str,
        value: i64,
        reason: &'static str,
    },
}

impl PaginationError {
    pub(crate) fn invalid(field: &'static str, value: i64, reason: &'static str) -> Self {
        PaginationError::InvalidArgument {
            field,
            value,
            reason,
        }
    }

    /// Name of the offending request field.
    pub fn field(&self) -> &'static str {
        match self {
            PaginationError::InvalidArgument { field, .. } => *field,
        }
    }
}
