//! Core types for tagval.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! [`TaggedValue`], a named value holding one of an unsigned integer, a
//! float or a string, together with the identity counters that number
//! values, the [`ValueFormatter`] hook that renders them, and a
//! [`ValueRegistry`] that owns a numbered collection of them.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod format;
pub mod id;
pub mod registry;
pub mod value;

pub use config::{FormatConfig, MAX_FLOAT_PRECISION};
pub use error::{ConfigError, ValueError};
pub use format::{DefaultFormatter, ValueFormatter};
pub use id::{IndexCounter, ValueIndex};
pub use registry::ValueRegistry;
pub use value::{TaggedValue, ValueKind, Variant};
