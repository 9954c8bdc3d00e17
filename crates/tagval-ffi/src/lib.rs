//! C FFI bindings for tagval.
//!
//! Values live in a process-wide handle table and are addressed by opaque
//! `u64` handles. Every function returns a [`TvStatus`] code as `i32`;
//! results come back through out-pointers. Destroying a handle twice, or
//! using it after destruction, yields `TvStatus::InvalidHandle` rather
//! than undefined behavior.
//!
//! This is the only crate in the workspace that contains `unsafe` code.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

/// Run an FFI body, converting a panic into `TvStatus::Panicked`.
macro_rules! ffi_guard {
    ($body:block) => {
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $body)) {
            Ok(code) => code,
            Err(_) => $crate::status::TvStatus::Panicked as i32,
        }
    };
}

/// Lock a mutex, returning `TvStatus::InternalError` from the enclosing
/// function if it is poisoned.
macro_rules! ffi_lock {
    ($mutex:expr) => {
        match $mutex.lock() {
            Ok(guard) => guard,
            Err(_) => return $crate::status::TvStatus::InternalError as i32,
        }
    };
}

mod handle;
pub mod status;
pub mod text;
pub mod value;

pub use status::TvStatus;
