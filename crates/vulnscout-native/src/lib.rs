//! vulnscout-native library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the `cdylib` build share the same module tree.
//!
//! # What does vulnscout-native do? (for beginners)
//!
//! The VulnScout host is a higher-level program (it drives scanners and
//! desktop automation) that loads this crate as a shared library and
//! calls two unrelated helpers through the C ABI:
//!
//! 1. **Pointer warp** — move the desktop mouse pointer to an absolute
//!    screen coordinate on the local X11 display. Used by the host's
//!    screen-automation flow.
//! 2. **Finding summarization** — parse a scanner's JSON output and
//!    report how many findings are `critical`. The counting logic lives
//!    in `vulnscout-core`; this crate only adds the C string boundary.
//!
//! The two helpers share no state and no lifecycle. Each call is
//! synchronous, blocking, and self-contained.
//!
//! # Layering
//!
//! - [`application`] — use cases and the platform trait seam. The
//!   pointer use case enforces the silent-failure contract: display
//!   problems never escape to the caller.
//! - [`infrastructure`] — OS adapters: the real X11 display backend
//!   (Linux only) and a recording mock for tests.
//! - [`ffi`] — the `#[no_mangle] extern "C"` exports and the ownership
//!   conventions at the C string boundary.

/// Application layer: use cases and platform traits.
pub mod application;

/// C-ABI boundary: exported symbols and buffer ownership.
pub mod ffi;

/// Infrastructure layer: OS adapters.
pub mod infrastructure;
