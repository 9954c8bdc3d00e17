//! tagval: named, numbered tagged values with per-instance formatting.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the tagval sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use tagval::prelude::*;
//!
//! let counter = IndexCounter::new();
//! let v = TaggedValue::new_in(&counter, Variant::Float(0.5), "tag1");
//! assert_eq!(
//!     v.format(),
//!     "TaggedValue(type = double, name = 'tag1', index = 0, value = 0.500000)"
//! );
//!
//! let loud = TaggedValue::new_in(&counter, Variant::Unsigned(5), "tag0")
//!     .with_formatter(|v: &TaggedValue| format!("{}!", v.name()));
//! assert_eq!(loud.format(), "tag0!");
//! assert_eq!(loud.index(), ValueIndex(1));
//!
//! let mut buf = BoundedBuf::<8>::new();
//! buf.write_twice("hello");
//! assert_eq!(buf.as_str(), Some("hellohe"));
//!
//! assert_eq!(tagval::add_ints!(1, 2, 3, 4, 5, 0), 15);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tagval-core` | Tagged values, index counters, formatters, registry |
//! | [`util`] | `tagval-util` | Bounded-buffer duplication and sentinel sums |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Tagged values, identity counters and formatting (`tagval-core`).
///
/// Contains [`types::TaggedValue`], [`types::IndexCounter`], the
/// [`types::ValueFormatter`] hook and [`types::ValueRegistry`].
pub use tagval_core as types;

/// Buffer and arithmetic helpers (`tagval-util`).
///
/// [`util::write_twice`] and [`util::BoundedBuf`] duplicate a string into a
/// fixed-capacity buffer; [`fn@util::add_ints`] sums up to a 0 sentinel.
pub use tagval_util as util;

pub use tagval_util::add_ints;

/// Common imports for typical tagval usage.
///
/// ```rust
/// use tagval::prelude::*;
/// ```
pub mod prelude {
    // Values
    pub use tagval_core::{IndexCounter, TaggedValue, ValueIndex, ValueKind, ValueRegistry, Variant};

    // Formatting
    pub use tagval_core::{DefaultFormatter, FormatConfig, ValueFormatter};

    // Errors
    pub use tagval_core::{ConfigError, ValueError};

    // Helpers
    pub use tagval_util::{add_ints_slice, print_twice, write_twice, BoundedBuf};
}
