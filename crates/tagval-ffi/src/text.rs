//! C string plumbing and the buffer/sum helpers.
//!
//! `tv_write_twice` and `tv_add_ints` expose the `tagval-util` helpers.
//! C's `add_ints(int, ...)` is variadic, which Rust cannot define, so the
//! C entry point takes a counted array instead: `values[0]` is the first
//! argument and the rest are scanned for the 0 sentinel.

use std::ffi::{c_char, CStr};

use tagval_util::{add_ints_slice, write_twice};

use crate::status::TvStatus;

/// Borrow a NUL-terminated C string as UTF-8.
///
/// Returns `None` for a null pointer or invalid UTF-8.
///
/// # Safety
/// `ptr` must be null or point to a NUL-terminated string that stays
/// valid and unmodified for `'a`.
#[allow(unsafe_code)]
pub(crate) unsafe fn read_utf8<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    // SAFETY: non-null and NUL-terminated per caller contract.
    unsafe { CStr::from_ptr(ptr) }.to_str().ok()
}

/// Copy `text` into a caller buffer as a NUL-terminated string.
///
/// `len_out`, when non-null, always receives the full length of `text`
/// (terminator excluded), so a caller can pass a null `buf` to size a
/// buffer first. Output that does not fit is truncated, still terminated,
/// and reported as `BufferTooSmall`.
///
/// # Safety
/// `buf` must be null or point to `cap` writable bytes; `len_out` must be
/// null or valid for a write.
#[allow(unsafe_code)]
pub(crate) unsafe fn copy_out(
    text: &str,
    buf: *mut c_char,
    cap: usize,
    len_out: *mut usize,
) -> i32 {
    if !len_out.is_null() {
        // SAFETY: valid per caller contract.
        unsafe { *len_out = text.len() };
    }
    if buf.is_null() {
        return if len_out.is_null() {
            TvStatus::InvalidArgument as i32
        } else {
            TvStatus::Ok as i32
        };
    }
    if cap == 0 {
        return TvStatus::BufferTooSmall as i32;
    }
    let bytes = text.as_bytes();
    let n = bytes.len().min(cap - 1);
    // SAFETY: buf points to cap >= n + 1 writable bytes.
    unsafe {
        std::ptr::copy_nonoverlapping(bytes.as_ptr(), buf as *mut u8, n);
        *buf.add(n) = 0;
    }
    if n < bytes.len() {
        TvStatus::BufferTooSmall as i32
    } else {
        TvStatus::Ok as i32
    }
}

/// Write `src` into `out` twice with `snprintf` truncation rules.
///
/// `out` must point to `cap` writable bytes (or be null with `cap == 0`).
/// `written`, when non-null, receives the content bytes written,
/// terminator excluded. `src` is treated as raw bytes, not UTF-8.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tv_write_twice(
    src: *const c_char,
    out: *mut c_char,
    cap: usize,
    written: *mut usize,
) -> i32 {
    ffi_guard!({
        if src.is_null() || (out.is_null() && cap > 0) {
            return TvStatus::InvalidArgument as i32;
        }
        // SAFETY: src is a valid NUL-terminated string per caller contract.
        let src = unsafe { CStr::from_ptr(src) }.to_bytes();
        let n = if cap == 0 {
            0
        } else {
            // SAFETY: out points to cap writable bytes per caller contract.
            let out = unsafe { std::slice::from_raw_parts_mut(out as *mut u8, cap) };
            write_twice(src, out)
        };
        if !written.is_null() {
            // SAFETY: valid per caller contract.
            unsafe { *written = n };
        }
        TvStatus::Ok as i32
    })
}

/// Sum `values[0..len]` up to the first 0 after `values[0]`.
///
/// `values` may be null only when `len == 0`, in which case the sum is 0.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tv_add_ints(values: *const i32, len: usize, out: *mut i32) -> i32 {
    ffi_guard!({
        if out.is_null() || (values.is_null() && len > 0) {
            return TvStatus::InvalidArgument as i32;
        }
        let values: &[i32] = if len == 0 {
            &[]
        } else {
            // SAFETY: values points to len readable i32s per caller contract.
            unsafe { std::slice::from_raw_parts(values, len) }
        };
        // SAFETY: out is valid per caller contract.
        unsafe { *out = add_ints_slice(values) };
        TvStatus::Ok as i32
    })
}
