//! C-ABI exports for the VulnScout host.
//!
//! # The boundary contract
//!
//! The host loads the compiled `cdylib` with `dlopen`/`ctypes` and calls
//! these symbols directly, so everything here follows C conventions:
//!
//! - `move_pointer(int x, int y)` — returns nothing, never fails from
//!   the caller's perspective.
//! - `char* summarize(const char* json)` — null-terminated UTF-8 in,
//!   null-terminated UTF-8 out.
//! - `summarize_free(char* reply)` — releases a `summarize` reply.
//!
//! # Buffer ownership (read this before binding)
//!
//! Every pointer returned by `summarize` — the success payload *and*
//! the `{"error": "Invalid JSON"}` payload — is freshly heap-allocated
//! and owned by the caller, who must release it with [`summarize_free`]
//! exactly once. There is no static-string case: one uniform convention
//! for both outcomes, so bindings never need to branch on the content
//! before freeing.
//!
//! # Panics
//!
//! No panic may unwind across an `extern "C"` boundary (that is
//! undefined behavior), so each export wraps its body in
//! `catch_unwind`. A caught panic degrades to the silent no-op /
//! error-payload behavior the contract already allows.
//!
//! # Logging
//!
//! The first call into the library installs a process-global `tracing`
//! subscriber filtered by `RUST_LOG` (default `info`). If the host
//! process already installed one, `try_init` loses the race and the
//! existing subscriber keeps working.

use std::ffi::{c_char, c_int, CStr, CString};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;

use tracing_subscriber::EnvFilter;

use vulnscout_core::{summarize as summarize_document, INVALID_JSON};

static TELEMETRY: Once = Once::new();

/// Installs the tracing subscriber once per process.
fn init_telemetry() {
    TELEMETRY.call_once(|| {
        // try_init instead of init: the host may have installed its own
        // subscriber before loading this library, and that must win.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .try_init();
    });
}

/// Allocates the C string handed across the boundary.
fn into_c_reply(reply: String) -> *mut c_char {
    // The reply strings are rendered from fixed templates and never
    // contain interior NUL bytes, so CString::new cannot fail here.
    CString::new(reply).unwrap().into_raw()
}

/// Moves the desktop pointer to absolute screen coordinates `(x, y)`.
///
/// Opens its own connection to the X11 display named by the ambient
/// `DISPLAY` variable, warps the pointer relative to the default
/// screen's root window, flushes, and closes the connection. If the
/// display is unavailable the call returns with no effect: there is no
/// error channel, and the caller cannot distinguish "moved" from
/// "display unavailable". On non-Linux targets the call is always a
/// no-op.
///
/// Concurrent calls are safe; each opens its own connection and the
/// last request the server observes wins.
#[no_mangle]
pub extern "C" fn move_pointer(x: c_int, y: c_int) {
    init_telemetry();

    let _ = panic::catch_unwind(|| {
        #[cfg(target_os = "linux")]
        {
            use std::sync::Arc;

            use crate::application::move_pointer::MovePointerUseCase;
            use crate::infrastructure::pointer::linux::X11Pointer;

            MovePointerUseCase::new(Arc::new(X11Pointer::new())).move_to(x, y);
        }
        #[cfg(not(target_os = "linux"))]
        {
            tracing::debug!(x, y, "pointer warp ignored: no display backend on this target");
        }
    });
}

/// Summarizes a scanner JSON document.
///
/// Counts the top-level array elements whose `info.severity` is the
/// exact string `critical` and returns `{"critical_findings": N}`. If
/// `input` is null or not valid JSON, returns `{"error": "Invalid JSON"}`
/// instead. Either way the returned buffer is heap-allocated,
/// null-terminated UTF-8 owned by the caller; release it with
/// [`summarize_free`].
///
/// # Safety
///
/// `input` must be null or a valid pointer to a null-terminated byte
/// string that stays alive for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn summarize(input: *const c_char) -> *mut c_char {
    init_telemetry();

    let reply = panic::catch_unwind(AssertUnwindSafe(|| {
        if input.is_null() {
            return INVALID_JSON.to_string();
        }
        // SAFETY: per the function contract, `input` is non-null here
        // and points to a null-terminated string valid for this call.
        let bytes = unsafe { CStr::from_ptr(input) }.to_bytes();
        summarize_document(bytes)
    }))
    .unwrap_or_else(|_| INVALID_JSON.to_string());

    into_c_reply(reply)
}

/// Releases a buffer previously returned by [`summarize`].
///
/// Null is ignored, so bindings may free unconditionally.
///
/// # Safety
///
/// `reply` must be null or a pointer obtained from [`summarize`] that
/// has not been freed yet. Passing any other pointer, or the same
/// pointer twice, is undefined behavior.
#[no_mangle]
pub unsafe extern "C" fn summarize_free(reply: *mut c_char) {
    if reply.is_null() {
        return;
    }
    // SAFETY: per the function contract, `reply` came from
    // CString::into_raw in this library and is released exactly once.
    drop(unsafe { CString::from_raw(reply) });
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    /// Calls the exported `summarize` the way a C host would and copies
    /// the reply into an owned String, freeing the C buffer.
    fn call_summarize(input: &str) -> String {
        let input = CString::new(input).unwrap();
        // SAFETY: `input` is a valid null-terminated string and the
        // reply is freed exactly once below.
        unsafe {
            let reply = summarize(input.as_ptr());
            assert!(!reply.is_null());
            let owned = CStr::from_ptr(reply).to_str().unwrap().to_string();
            summarize_free(reply);
            owned
        }
    }

    #[test]
    fn test_summarize_success_payload_over_c_abi() {
        let reply = call_summarize(r#"[{"info":{"severity":"critical"}}]"#);

        assert_eq!(reply, "{\"critical_findings\": 1}");
    }

    #[test]
    fn test_summarize_error_payload_over_c_abi() {
        assert_eq!(call_summarize("not json"), "{\"error\": \"Invalid JSON\"}");
    }

    #[test]
    fn test_summarize_null_input_yields_error_payload() {
        // SAFETY: null is explicitly allowed by the contract.
        unsafe {
            let reply = summarize(std::ptr::null());
            assert!(!reply.is_null());
            assert_eq!(
                CStr::from_ptr(reply).to_str().unwrap(),
                "{\"error\": \"Invalid JSON\"}"
            );
            summarize_free(reply);
        }
    }

    #[test]
    fn test_summarize_free_ignores_null() {
        // SAFETY: null is explicitly allowed by the contract.
        unsafe { summarize_free(std::ptr::null_mut()) };
    }

    #[test]
    fn test_move_pointer_never_panics_without_display() {
        // With or without a DISPLAY this must return normally; failures
        // are absorbed inside the use case.
        move_pointer(100, 200);
        move_pointer(-1, -1);
    }
}
