//! Formatting configuration and validation.
//!
//! [`FormatConfig`] is the input to
//! [`DefaultFormatter::with_config`](crate::DefaultFormatter::with_config).
//! The defaults reproduce the classic C `printf` rendering exactly; the
//! knobs exist for callers that want a different label or precision
//! without writing their own formatter.

use crate::error::ConfigError;

/// Largest accepted [`FormatConfig::float_precision`].
///
/// 17 fractional digits is enough to round-trip any `f64` in `[0, 1)`.
pub const MAX_FLOAT_PRECISION: usize = 17;

/// Options for the default formatter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormatConfig {
    /// Digits after the decimal point for `Float` values. Default: 6,
    /// matching C's `%f`.
    pub float_precision: usize,
    /// Leading record label. Default: `"TaggedValue"`.
    pub record_label: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            float_precision: 6,
            record_label: "TaggedValue".to_string(),
        }
    }
}

impl FormatConfig {
    /// Check structural invariants.
    ///
    /// Rejects precisions above [`MAX_FLOAT_PRECISION`] and labels that
    /// are empty or contain parentheses.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.float_precision > MAX_FLOAT_PRECISION {
            return Err(ConfigError::FloatPrecisionTooLarge {
                configured: self.float_precision,
                max: MAX_FLOAT_PRECISION,
            });
        }
        if self.record_label.is_empty() {
            return Err(ConfigError::EmptyRecordLabel);
        }
        if self.record_label.contains(['(', ')']) {
            return Err(ConfigError::InvalidRecordLabel {
                label: self.record_label.clone(),
            });
        }
        Ok(())
    }
}
