//! Small helpers that accompany tagged values in the demo: writing a
//! string twice into a fixed-capacity buffer, and summing a
//! zero-terminated run of integers.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bounded;
pub mod sum;

pub use bounded::{print_twice, write_twice, BoundedBuf};
pub use sum::{add_ints, add_ints_slice};
