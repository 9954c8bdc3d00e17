//! Error types for tagged value construction and configuration.

use std::error::Error;
use std::fmt;

/// Errors from constructing or decoding a [`TaggedValue`](crate::TaggedValue).
///
/// The infallible `create_*` constructors never return these: they abort
/// on allocation exhaustion like any other Rust allocation. The `try_*`
/// constructors report exhaustion as [`AllocationFailed`](Self::AllocationFailed)
/// and never hand back a partially built value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueError {
    /// The allocator could not provide storage for the name or text payload.
    AllocationFailed {
        /// Size of the allocation that failed, in bytes.
        bytes: usize,
    },
    /// A raw discriminant does not name any [`ValueKind`](crate::ValueKind).
    ///
    /// Not reachable through the typed constructors; only raw conversions
    /// (e.g. across the C boundary) can produce it.
    InvalidKind {
        /// The rejected discriminant.
        raw: u8,
    },
}

impl fmt::Display for ValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed { bytes } => {
                write!(f, "allocation of {bytes} bytes failed")
            }
            Self::InvalidKind { raw } => write!(f, "invalid value kind discriminant {raw}"),
        }
    }
}

impl Error for ValueError {}

/// Errors detected by [`FormatConfig::validate()`](crate::FormatConfig::validate).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `float_precision` is above the supported maximum.
    FloatPrecisionTooLarge {
        /// The configured precision.
        configured: usize,
        /// The largest accepted precision.
        max: usize,
    },
    /// `record_label` is empty.
    EmptyRecordLabel,
    /// `record_label` contains a character that would make the output
    /// ambiguous to read back.
    InvalidRecordLabel {
        /// The rejected label.
        label: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FloatPrecisionTooLarge { configured, max } => {
                write!(f, "float precision {configured} exceeds maximum {max}")
            }
            Self::EmptyRecordLabel => write!(f, "record label must not be empty"),
            Self::InvalidRecordLabel { label } => {
                write!(f, "record label '{label}' must not contain '(' or ')'")
            }
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            ValueError::AllocationFailed { bytes: 16 }.to_string(),
            "allocation of 16 bytes failed"
        );
        assert_eq!(
            ValueError::InvalidKind { raw: 7 }.to_string(),
            "invalid value kind discriminant 7"
        );
        assert_eq!(
            ConfigError::FloatPrecisionTooLarge {
                configured: 40,
                max: 17
            }
            .to_string(),
            "float precision 40 exceeds maximum 17"
        );
    }
}
