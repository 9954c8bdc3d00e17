//! C-compatible status codes.

use tagval_core::{ConfigError, ValueError};

/// Status returned by every `tv_*` function.
///
/// `Ok` = 0, all errors are negative. Values are ABI-stable.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TvStatus {
    /// Success.
    Ok = 0,
    /// Handle is unknown or was already destroyed.
    InvalidHandle = -1,
    /// A pointer is null, a string is not UTF-8, or a value is out of range.
    InvalidArgument = -2,
    /// Caller-provided buffer is too small; output was truncated.
    BufferTooSmall = -3,
    /// The allocator could not satisfy a request.
    AllocationFailed = -4,
    /// Internal error (e.g. poisoned lock after a prior panic).
    InternalError = -5,
    /// A Rust panic was caught at the FFI boundary.
    Panicked = -128,
}

impl From<&ValueError> for TvStatus {
    fn from(e: &ValueError) -> Self {
        match e {
            ValueError::AllocationFailed { .. } => TvStatus::AllocationFailed,
            ValueError::InvalidKind { .. } => TvStatus::InvalidArgument,
        }
    }
}

impl From<&ConfigError> for TvStatus {
    fn from(_e: &ConfigError) -> Self {
        TvStatus::InvalidArgument
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_code_values_are_stable() {
        assert_eq!(TvStatus::Ok as i32, 0);
        assert_eq!(TvStatus::InvalidHandle as i32, -1);
        assert_eq!(TvStatus::InvalidArgument as i32, -2);
        assert_eq!(TvStatus::BufferTooSmall as i32, -3);
        assert_eq!(TvStatus::AllocationFailed as i32, -4);
        assert_eq!(TvStatus::InternalError as i32, -5);
        assert_eq!(TvStatus::Panicked as i32, -128);
    }

    #[test]
    fn value_errors_map() {
        assert_eq!(
            TvStatus::from(&ValueError::AllocationFailed { bytes: 1 }),
            TvStatus::AllocationFailed
        );
        assert_eq!(
            TvStatus::from(&ValueError::InvalidKind { raw: 9 }),
            TvStatus::InvalidArgument
        );
        assert_eq!(
            TvStatus::from(&ConfigError::EmptyRecordLabel),
            TvStatus::InvalidArgument
        );
    }
}
