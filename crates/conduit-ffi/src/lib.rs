//! C ABI over the conduit façade.
//!
//! Calling convention: inputs are NUL-terminated strings and raw byte
//! buffers. Every function returns `NULL` on success or a freshly allocated
//! error message; buffers returned through out-parameters are freshly
//! allocated as well. Anything handed across the boundary is exclusively
//! owned by the receiver from that point on and must be released with the
//! matching free function ([`conduit_free_string`] / [`conduit_free_bytes`]);
//! this library keeps no reference after returning.
//!
//! Panics never cross the boundary: every entry point catches them and
//! converts them to the error-message convention.

use std::ffi::{CStr, CString};
use std::os::raw::{c_char, c_int};
use std::panic::{self, AssertUnwindSafe};
use std::ptr;
use std::sync::OnceLock;

use conduit::Conduit;

/// Registries are populated once per process; the instance is immutable
/// afterwards, so concurrent calls need no locking.
static CONDUIT: OnceLock<Conduit> = OnceLock::new();

fn conduit() -> &'static Conduit {
    CONDUIT.get_or_init(Conduit::new)
}

/// Allocate a C string the caller owns. Interior NULs are replaced so the
/// conversion cannot fail on real error messages.
fn export_string(message: &str) -> *mut c_char {
    let sanitized = message.replace('\0', " ");
    match CString::new(sanitized) {
        Ok(s) => s.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

fn catch<F: FnOnce() -> *mut c_char>(f: F) -> *mut c_char {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(result) => result,
        Err(_) => export_string("internal error: operation panicked"),
    }
}

/// Borrow a NUL-terminated string argument, or produce the error to return.
unsafe fn import_str<'a>(ptr: *const c_char, what: &str) -> Result<&'a str, *mut c_char> {
    if ptr.is_null() {
        return Err(export_string(&format!("{what} must not be NULL")));
    }
    match unsafe { CStr::from_ptr(ptr) }.to_str() {
        Ok(s) => Ok(s),
        Err(_) => Err(export_string(&format!("{what} is not valid UTF-8"))),
    }
}

/// Read the entire resource at `uri` through `algorithm`.
///
/// On success returns `NULL` and stores a caller-owned buffer in
/// `*out_data`/`*out_len` (release with [`conduit_free_bytes`]). On failure
/// returns a caller-owned error message and leaves the out-parameters
/// untouched.
///
/// # Safety
///
/// `uri` and `algorithm` must be NUL-terminated strings and
/// `out_data`/`out_len` must be valid for writes.
#[no_mangle]
pub unsafe extern "C" fn conduit_read_all(
    uri: *const c_char,
    algorithm: *const c_char,
    out_data: *mut *mut u8,
    out_len: *mut usize,
) -> *mut c_char {
    catch(|| {
        if out_data.is_null() || out_len.is_null() {
            return export_string("out_data and out_len must not be NULL");
        }
        let uri = match unsafe { import_str(uri, "uri") } {
            Ok(s) => s,
            Err(e) => return e,
        };
        let algorithm = match unsafe { import_str(algorithm, "algorithm") } {
            Ok(s) => s,
            Err(e) => return e,
        };
        match conduit().read_all(uri, algorithm) {
            Ok(data) => {
                let mut data = data.into_boxed_slice();
                unsafe {
                    *out_len = data.len();
                    *out_data = data.as_mut_ptr();
                }
                std::mem::forget(data);
                ptr::null_mut()
            }
            Err(err) => export_string(&err.to_string()),
        }
    })
}

/// Write `len` bytes from `data` to the resource at `uri` through
/// `algorithm`. A negative `level` means unspecified; `append` is treated as
/// a boolean.
///
/// Returns `NULL` on success or a caller-owned error message.
///
/// # Safety
///
/// `uri` and `algorithm` must be NUL-terminated strings and `data` must be
/// valid for reads of `len` bytes (it may be `NULL` when `len` is zero).
#[no_mangle]
pub unsafe extern "C" fn conduit_write_all(
    uri: *const c_char,
    algorithm: *const c_char,
    level: c_int,
    data: *const u8,
    len: usize,
    append: c_int,
) -> *mut c_char {
    catch(|| {
        let uri = match unsafe { import_str(uri, "uri") } {
            Ok(s) => s,
            Err(e) => return e,
        };
        let algorithm = match unsafe { import_str(algorithm, "algorithm") } {
            Ok(s) => s,
            Err(e) => return e,
        };
        if data.is_null() && len > 0 {
            return export_string("data must not be NULL when len is non-zero");
        }
        let payload: &[u8] = if len == 0 {
            &[]
        } else {
            unsafe { std::slice::from_raw_parts(data, len) }
        };
        let level = if level < 0 { None } else { Some(level) };
        match conduit().write_all(uri, algorithm, level, payload, append != 0) {
            Ok(()) => ptr::null_mut(),
            Err(err) => export_string(&err.to_string()),
        }
    })
}

/// Comma-joined algorithm names. The caller owns the returned string.
#[no_mangle]
pub extern "C" fn conduit_algorithms() -> *mut c_char {
    catch(|| export_string(&conduit().algorithms()))
}

/// Comma-joined scheme names. The caller owns the returned string.
#[no_mangle]
pub extern "C" fn conduit_schemes() -> *mut c_char {
    catch(|| export_string(&conduit().schemes()))
}

/// Library version. The caller owns the returned string.
#[no_mangle]
pub extern "C" fn conduit_version() -> *mut c_char {
    catch(|| export_string(conduit::version()))
}

/// Release a string returned by any function in this library. `NULL` is
/// accepted and ignored.
///
/// # Safety
///
/// `ptr` must have been returned by this library and not freed already.
#[no_mangle]
pub unsafe extern "C" fn conduit_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(unsafe { CString::from_raw(ptr) });
    }
}

/// Release a buffer returned through `conduit_read_all`. `NULL` is accepted
/// and ignored.
///
/// # Safety
///
/// `ptr`/`len` must be exactly the pair produced by `conduit_read_all` and
/// not freed already.
#[no_mangle]
pub unsafe extern "C" fn conduit_free_bytes(ptr: *mut u8, len: usize) {
    if !ptr.is_null() {
        drop(unsafe { Vec::from_raw_parts(ptr, len, len) });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cstring(s: &str) -> CString {
        CString::new(s).unwrap()
    }

    unsafe fn error_text(ptr: *mut c_char) -> String {
        let text = CStr::from_ptr(ptr).to_string_lossy().into_owned();
        conduit_free_string(ptr);
        text
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("payload.gz");
        let uri = cstring(&path.to_string_lossy());
        let algorithm = cstring("gzip");
        let payload = b"hello across the boundary";

        unsafe {
            let err = conduit_write_all(
                uri.as_ptr(),
                algorithm.as_ptr(),
                -1,
                payload.as_ptr(),
                payload.len(),
                0,
            );
            assert!(err.is_null());

            let mut data: *mut u8 = ptr::null_mut();
            let mut len: usize = 0;
            let err = conduit_read_all(uri.as_ptr(), algorithm.as_ptr(), &mut data, &mut len);
            assert!(err.is_null());
            assert_eq!(std::slice::from_raw_parts(data, len), payload);
            conduit_free_bytes(data, len);
        }
    }

    #[test]
    fn test_unknown_algorithm_returns_message() {
        let uri = cstring("/tmp/whatever");
        let algorithm = cstring("not-a-real-algorithm");

        unsafe {
            let mut data: *mut u8 = ptr::null_mut();
            let mut len: usize = 0;
            let err = conduit_read_all(uri.as_ptr(), algorithm.as_ptr(), &mut data, &mut len);
            assert!(!err.is_null());
            let text = error_text(err);
            assert!(text.contains("Unsupported algorithm"), "got: {text}");
        }
    }

    #[test]
    fn test_null_arguments_are_rejected() {
        unsafe {
            let mut data: *mut u8 = ptr::null_mut();
            let mut len: usize = 0;
            let err = conduit_read_all(
                ptr::null(),
                cstring("none").as_ptr(),
                &mut data,
                &mut len,
            );
            assert!(!err.is_null());
            let text = error_text(err);
            assert!(text.contains("uri"), "got: {text}");
        }
    }

    #[test]
    fn test_introspection_strings() {
        unsafe {
            let algorithms = error_text(conduit_algorithms());
            assert!(algorithms.split(',').any(|a| a == "none"));

            let schemes = error_text(conduit_schemes());
            assert!(schemes.split(',').any(|s| s == "file"));

            let version = error_text(conduit_version());
            assert!(!version.is_empty());
        }
    }
}
