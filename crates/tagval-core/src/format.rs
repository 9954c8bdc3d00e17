//! The formatter hook and its default implementation.

use std::fmt::{self, Write};
use std::sync::{Arc, OnceLock};

use crate::config::FormatConfig;
use crate::error::ConfigError;
use crate::value::{TaggedValue, Variant};

/// Renders a [`TaggedValue`] as human-readable text.
///
/// Every value carries one of these. Formatting must be a pure read: it
/// may not observe anything that changes between calls, so two calls on
/// the same value produce identical text.
///
/// Any `Fn(&TaggedValue) -> String` that is `Send + Sync` is a formatter.
pub trait ValueFormatter: Send + Sync {
    /// Produce a newly allocated text representation of `value`.
    fn format(&self, value: &TaggedValue) -> String;
}

impl<F> ValueFormatter for F
where
    F: Fn(&TaggedValue) -> String + Send + Sync,
{
    fn format(&self, value: &TaggedValue) -> String {
        self(value)
    }
}

/// The formatter attached to every newly constructed value.
///
/// With the default [`FormatConfig`] the output is
///
/// ```text
/// TaggedValue(type = size_t, name = 'tag0', index = 0, value = 5)
/// TaggedValue(type = double, name = 'tag1', index = 1, value = 0.500000)
/// TaggedValue(type = string, name = 'tag0', index = 2, value = 'mystring')
/// ```
#[derive(Clone, Debug, Default)]
pub struct DefaultFormatter {
    config: FormatConfig,
}

impl DefaultFormatter {
    /// Build a formatter from a validated configuration.
    pub fn with_config(config: FormatConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this formatter renders with.
    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    /// Write the rendering of `value` into `out`.
    pub fn write_to<W: Write>(&self, out: &mut W, value: &TaggedValue) -> fmt::Result {
        write!(
            out,
            "{}(type = {}, name = '{}', index = {}, value = ",
            self.config.record_label,
            value.kind().type_name(),
            value.name(),
            value.index(),
        )?;
        match value.variant() {
            Variant::Unsigned(v) => write!(out, "{v}")?,
            Variant::Float(v) => write_fixed(out, *v, self.config.float_precision)?,
            Variant::Text(s) => write!(out, "'{s}'")?,
        }
        out.write_char(')')
    }
}

impl ValueFormatter for DefaultFormatter {
    fn format(&self, value: &TaggedValue) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_to(&mut out, value);
        out
    }
}

/// Shared instance handed to every value built without an explicit formatter.
pub(crate) fn default_formatter() -> Arc<dyn ValueFormatter> {
    static DEFAULT: OnceLock<Arc<DefaultFormatter>> = OnceLock::new();
    DEFAULT
        .get_or_init(|| Arc::new(DefaultFormatter::default()))
        .clone()
}

/// Fixed-point rendering with C `%f` spelling for non-finite values.
fn write_fixed<W: Write>(out: &mut W, v: f64, precision: usize) -> fmt::Result {
    if v.is_nan() {
        out.write_str(if v.is_sign_negative() { "-nan" } else { "nan" })
    } else if v.is_infinite() {
        out.write_str(if v < 0.0 { "-inf" } else { "inf" })
    } else {
        write!(out, "{v:.precision$}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::IndexCounter;

    fn fixed(v: f64, precision: usize) -> String {
        let mut s = String::new();
        write_fixed(&mut s, v, precision).unwrap();
        s
    }

    #[test]
    fn fixed_matches_printf_f() {
        assert_eq!(fixed(0.5, 6), "0.500000");
        assert_eq!(fixed(1.0, 6), "1.000000");
        assert_eq!(fixed(-2.25, 6), "-2.250000");
        assert_eq!(fixed(1e20, 6), "100000000000000000000.000000");
        assert_eq!(fixed(0.1234567, 6), "0.123457");
        assert_eq!(fixed(-0.0, 6), "-0.000000");
        assert_eq!(fixed(3.0, 0), "3");
    }

    #[test]
    fn fixed_non_finite() {
        assert_eq!(fixed(f64::INFINITY, 6), "inf");
        assert_eq!(fixed(f64::NEG_INFINITY, 6), "-inf");
        assert_eq!(fixed(f64::NAN, 6), "nan");
    }

    #[test]
    fn config_changes_label_and_precision() {
        let formatter = DefaultFormatter::with_config(FormatConfig {
            float_precision: 2,
            record_label: "Tagged".to_string(),
        })
        .unwrap();
        let counter = IndexCounter::starting_at(9);
        let v = TaggedValue::new_in(&counter, Variant::Float(0.126), "x");
        assert_eq!(
            formatter.format(&v),
            "Tagged(type = double, name = 'x', index = 9, value = 0.13)"
        );
    }

    #[test]
    fn invalid_config_rejected() {
        let err = DefaultFormatter::with_config(FormatConfig {
            float_precision: 99,
            ..FormatConfig::default()
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::FloatPrecisionTooLarge { .. }));
    }

    #[test]
    fn closures_are_formatters() {
        let counter = IndexCounter::new();
        let v = TaggedValue::new_in(&counter, Variant::Unsigned(3), "n");
        let f = |v: &TaggedValue| format!("{}#{}", v.name(), v.index());
        assert_eq!(ValueFormatter::format(&f, &v), "n#0");
    }

    #[test]
    fn default_formatter_is_shared() {
        let a = default_formatter();
        let b = default_formatter();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
