//! Tagged value lifecycle over the C ABI.
//!
//! C callers create a value, query or format it through its handle, and
//! destroy it exactly once. The handle table owns the value in between.

use std::ffi::c_char;
use std::sync::Mutex;

use tagval_core::{DefaultFormatter, FormatConfig, TaggedValue, ValueFormatter, ValueKind};
use tracing::warn;

use crate::handle::HandleTable;
use crate::status::TvStatus;
use crate::text::{copy_out, read_utf8};

static VALUES: Mutex<HandleTable<TaggedValue>> = Mutex::new(HandleTable::new());

/// Store a freshly built value and publish its handle.
///
/// # Safety
/// `out` must be non-null and valid for a write.
#[allow(unsafe_code)]
unsafe fn publish(value: TaggedValue, out: *mut u64) -> i32 {
    let handle = ffi_lock!(VALUES).insert(value);
    // SAFETY: valid per caller contract.
    unsafe { *out = handle };
    TvStatus::Ok as i32
}

/// Run `f` on the value behind `handle` with the table locked.
fn with_value<R>(handle: u64, f: impl FnOnce(&TaggedValue) -> R) -> Result<R, TvStatus> {
    let table = VALUES.lock().map_err(|_| TvStatus::InternalError)?;
    match table.get(handle) {
        Some(value) => Ok(f(value)),
        None => {
            warn!(handle, "lookup through invalid tagged value handle");
            Err(TvStatus::InvalidHandle)
        }
    }
}

/// Create an unsigned value. `name` must be a NUL-terminated UTF-8
/// string; it is copied. Returns the handle via `out`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tv_value_create_unsigned(value: u64, name: *const c_char, out: *mut u64) -> i32 {
    ffi_guard!({
        if out.is_null() {
            return TvStatus::InvalidArgument as i32;
        }
        // SAFETY: caller guarantees name is null or a valid C string.
        let Some(name) = (unsafe { read_utf8(name) }) else {
            return TvStatus::InvalidArgument as i32;
        };
        match TaggedValue::try_create_unsigned(value, name) {
            // SAFETY: out checked non-null above.
            Ok(v) => unsafe { publish(v, out) },
            Err(e) => TvStatus::from(&e) as i32,
        }
    })
}

/// Create a float value. `name` is copied. Returns the handle via `out`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tv_value_create_float(value: f64, name: *const c_char, out: *mut u64) -> i32 {
    ffi_guard!({
        if out.is_null() {
            return TvStatus::InvalidArgument as i32;
        }
        // SAFETY: caller guarantees name is null or a valid C string.
        let Some(name) = (unsafe { read_utf8(name) }) else {
            return TvStatus::InvalidArgument as i32;
        };
        match TaggedValue::try_create_float(value, name) {
            // SAFETY: out checked non-null above.
            Ok(v) => unsafe { publish(v, out) },
            Err(e) => TvStatus::from(&e) as i32,
        }
    })
}

/// Create a text value. Both `value` and `name` are copied, so the caller
/// may free or reuse them as soon as this returns.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tv_value_create_text(
    value: *const c_char,
    name: *const c_char,
    out: *mut u64,
) -> i32 {
    ffi_guard!({
        if out.is_null() {
            return TvStatus::InvalidArgument as i32;
        }
        // SAFETY: caller guarantees both are null or valid C strings.
        let (Some(value), Some(name)) = (unsafe { read_utf8(value) }, unsafe { read_utf8(name) })
        else {
            return TvStatus::InvalidArgument as i32;
        };
        match TaggedValue::try_create_text(value, name) {
            // SAFETY: out checked non-null above.
            Ok(v) => unsafe { publish(v, out) },
            Err(e) => TvStatus::from(&e) as i32,
        }
    })
}

/// Destroy a value, releasing everything it owns.
///
/// A second destroy through the same handle returns `InvalidHandle`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tv_value_destroy(handle: u64) -> i32 {
    ffi_guard!({
        let removed = ffi_lock!(VALUES).remove(handle);
        match removed {
            Some(value) => {
                value.release();
                TvStatus::Ok as i32
            }
            None => {
                warn!(handle, "destroy through invalid tagged value handle");
                TvStatus::InvalidHandle as i32
            }
        }
    })
}

/// Number of values currently alive across all handles.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tv_value_count(out: *mut usize) -> i32 {
    ffi_guard!({
        if out.is_null() {
            return TvStatus::InvalidArgument as i32;
        }
        let count = ffi_lock!(VALUES).len();
        // SAFETY: out checked non-null above.
        unsafe { *out = count };
        TvStatus::Ok as i32
    })
}

/// Write the value's identity index into `out`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tv_value_index(handle: u64, out: *mut u64) -> i32 {
    ffi_guard!({
        if out.is_null() {
            return TvStatus::InvalidArgument as i32;
        }
        match with_value(handle, |v| v.index().0) {
            Ok(index) => {
                // SAFETY: out checked non-null above.
                unsafe { *out = index };
                TvStatus::Ok as i32
            }
            Err(status) => status as i32,
        }
    })
}

/// Write the value's kind discriminant into `out`: 0 = unsigned,
/// 1 = float, 2 = text.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tv_value_kind(handle: u64, out: *mut u8) -> i32 {
    ffi_guard!({
        if out.is_null() {
            return TvStatus::InvalidArgument as i32;
        }
        match with_value(handle, |v| v.kind() as u8) {
            Ok(kind) => {
                // SAFETY: out checked non-null above.
                unsafe { *out = kind };
                TvStatus::Ok as i32
            }
            Err(status) => status as i32,
        }
    })
}

/// Write the C type label of a kind discriminant (`size_t`, `double`,
/// `string`) into `buf`. Unknown discriminants yield `InvalidArgument`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tv_kind_name(kind: u8, buf: *mut c_char, cap: usize, len_out: *mut usize) -> i32 {
    ffi_guard!({
        match ValueKind::try_from(kind) {
            // SAFETY: caller guarantees buf/cap and len_out per copy_out contract.
            Ok(kind) => unsafe { copy_out(kind.type_name(), buf, cap, len_out) },
            Err(e) => TvStatus::from(&e) as i32,
        }
    })
}

/// Copy the value's name into `buf`. See `tv_value_format` for the
/// buffer protocol.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tv_value_name(
    handle: u64,
    buf: *mut c_char,
    cap: usize,
    len_out: *mut usize,
) -> i32 {
    ffi_guard!({
        match with_value(handle, |v| v.name().to_owned()) {
            // SAFETY: caller guarantees buf/cap and len_out per copy_out contract.
            Ok(name) => unsafe { copy_out(&name, buf, cap, len_out) },
            Err(status) => status as i32,
        }
    })
}

/// Format the value through its attached formatter into `buf`.
///
/// `len_out`, when non-null, receives the full formatted length
/// (terminator excluded). Pass a null `buf` to query the length only.
/// If `cap` is too small the output is truncated, NUL-terminated, and
/// `BufferTooSmall` is returned.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tv_value_format(
    handle: u64,
    buf: *mut c_char,
    cap: usize,
    len_out: *mut usize,
) -> i32 {
    ffi_guard!({
        match with_value(handle, TaggedValue::format) {
            // SAFETY: caller guarantees buf/cap and len_out per copy_out contract.
            Ok(text) => unsafe { copy_out(&text, buf, cap, len_out) },
            Err(status) => status as i32,
        }
    })
}

/// Format the value with the default layout but `float_precision`
/// fractional digits, ignoring any attached formatter.
///
/// Precisions above 17 yield `InvalidArgument`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tv_value_format_precision(
    handle: u64,
    float_precision: u32,
    buf: *mut c_char,
    cap: usize,
    len_out: *mut usize,
) -> i32 {
    ffi_guard!({
        let formatter = match DefaultFormatter::with_config(FormatConfig {
            float_precision: float_precision as usize,
            ..FormatConfig::default()
        }) {
            Ok(f) => f,
            Err(e) => return TvStatus::from(&e) as i32,
        };
        match with_value(handle, |v| formatter.format(v)) {
            // SAFETY: caller guarantees buf/cap and len_out per copy_out contract.
            Ok(text) => unsafe { copy_out(&text, buf, cap, len_out) },
            Err(status) => status as i32,
        }
    })
}
