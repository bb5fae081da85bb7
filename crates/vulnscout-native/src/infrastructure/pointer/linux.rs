//! Linux pointer backend over the X11 Xlib API.
//!
//! Warps the pointer with `XWarpPointer` against the default screen's
//! root window and reads it back with `XQueryPointer`. If the `DISPLAY`
//! environment variable is not set or the X server is unreachable,
//! `XOpenDisplay` returns null and the operation fails with a
//! `PointerError::Platform` (which the use case above then absorbs).
//!
//! # What is a warp? (for beginners)
//!
//! A *warp* is an unconditional, non-animated relocation of the pointer:
//! the server simply sets the cursor position to the requested pixel.
//! `XWarpPointer` has two modes selected by its source-window argument:
//!
//! - source = `None` (0): the destination coordinates are *absolute*,
//!   relative to the destination window. That is the mode used here,
//!   with the root window as destination, so `(x, y)` are plain screen
//!   pixels.
//! - source = some window: relative-motion semantics, which this helper
//!   deliberately does not offer.
//!
//! # Connection lifetime
//!
//! Every operation opens its own display connection and closes it
//! before returning. That is wasteful for tight call loops but keeps
//! concurrent callers trivially safe: nothing is shared, each request
//! stands alone, and the server serializes the warps in arrival order.
//! The [`DisplayGuard`] RAII wrapper guarantees `XCloseDisplay` runs on
//! every exit path, including errors.

use x11::xlib;

use crate::application::move_pointer::{PlatformPointer, PointerError};

/// RAII guard around an open Xlib display connection.
///
/// Closing in `Drop` means no exit path can leak the connection.
struct DisplayGuard(*mut xlib::Display);

impl DisplayGuard {
    /// Opens a connection to the display named by `DISPLAY`.
    ///
    /// # Errors
    ///
    /// Returns [`PointerError::Platform`] if `XOpenDisplay` returns
    /// null (no X server, or `DISPLAY` unset).
    fn open() -> Result<Self, PointerError> {
        // SAFETY: XOpenDisplay accepts a null pointer, meaning "use the
        // DISPLAY environment variable". The returned pointer must be
        // released with XCloseDisplay, which Drop does.
        let display = unsafe { xlib::XOpenDisplay(std::ptr::null()) };

        if display.is_null() {
            let display_env = std::env::var("DISPLAY").unwrap_or_else(|_| "<unset>".to_string());
            return Err(PointerError::Platform(format!(
                "XOpenDisplay failed; DISPLAY={display_env}"
            )));
        }

        Ok(Self(display))
    }
}

impl Drop for DisplayGuard {
    fn drop(&mut self) {
        // SAFETY: self.0 was returned non-null by XOpenDisplay and is
        // not used after this.
        unsafe { xlib::XCloseDisplay(self.0) };
    }
}

/// Linux X11 implementation of [`PlatformPointer`].
///
/// Stateless: the display connection lives only for the duration of
/// each call (see the module docs for why).
pub struct X11Pointer;

impl X11Pointer {
    /// Creates a new `X11Pointer`.
    pub fn new() -> Self {
        Self
    }
}

impl Default for X11Pointer {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformPointer for X11Pointer {
    fn warp_to(&self, x: i32, y: i32) -> Result<(), PointerError> {
        let display = DisplayGuard::open()?;

        // SAFETY: display.0 is a valid non-null connection. A source
        // window of 0 (None) selects absolute-coordinate mode, and the
        // root window of the default screen is a valid destination.
        // Out-of-range coordinates are the server's to clamp.
        unsafe {
            let root = xlib::XDefaultRootWindow(display.0);
            xlib::XWarpPointer(display.0, 0, root, 0, 0, 0, 0, x, y);
            // Flush so the motion is observable by the time we return;
            // without this the request could sit in Xlib's output buffer
            // until the connection closes.
            xlib::XFlush(display.0);
        }

        Ok(())
    }

    fn position(&self) -> Result<(i32, i32), PointerError> {
        let display = DisplayGuard::open()?;

        let mut root_return: xlib::Window = 0;
        let mut child_return: xlib::Window = 0;
        let mut root_x: i32 = 0;
        let mut root_y: i32 = 0;
        let mut win_x: i32 = 0;
        let mut win_y: i32 = 0;
        let mut mask: u32 = 0;

        // SAFETY: display.0 is valid and all out-parameters point to
        // live stack locations.
        let on_screen = unsafe {
            let root = xlib::XDefaultRootWindow(display.0);
            xlib::XQueryPointer(
                display.0,
                root,
                &mut root_return,
                &mut child_return,
                &mut root_x,
                &mut root_y,
                &mut win_x,
                &mut win_y,
                &mut mask,
            )
        };

        if on_screen == 0 {
            // The pointer is on a different screen than the default one.
            return Err(PointerError::Platform(
                "pointer is not on the default screen".to_string(),
            ));
        }

        Ok((root_x, root_y))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    /// Smoke-test: with a DISPLAY available both operations must succeed;
    /// without one, both must fail (and the use case above turns that
    /// failure into a silent no-op).
    #[test]
    fn test_x11_pointer_smoke() {
        let pointer = X11Pointer::new();

        if std::env::var("DISPLAY").is_ok() {
            assert!(
                pointer.warp_to(10, 10).is_ok(),
                "warp must succeed when DISPLAY is set"
            );
            assert!(
                pointer.position().is_ok(),
                "position query must succeed when DISPLAY is set"
            );
        } else {
            assert!(pointer.warp_to(10, 10).is_err());
            assert!(pointer.position().is_err());
        }
    }

    #[test]
    fn test_x11_pointer_warp_lands_on_requested_coordinates() {
        let pointer = X11Pointer::new();
        if std::env::var("DISPLAY").is_err() {
            return; // headless environment; covered by the smoke test
        }

        pointer.warp_to(100, 200).unwrap();

        assert_eq!(pointer.position().unwrap(), (100, 200));
    }

    #[test]
    fn test_x11_pointer_warp_is_idempotent() {
        let pointer = X11Pointer::new();
        if std::env::var("DISPLAY").is_err() {
            return;
        }

        pointer.warp_to(64, 64).unwrap();
        pointer.warp_to(64, 64).unwrap();

        assert_eq!(pointer.position().unwrap(), (64, 64));
    }

    #[test]
    fn test_x11_pointer_out_of_range_coordinates_are_clamped_by_server() {
        let pointer = X11Pointer::new();
        if std::env::var("DISPLAY").is_err() {
            return;
        }

        // The backend passes oversized coordinates through; the server
        // clamps them to the screen, so the call itself must not fail.
        pointer.warp_to(1_000_000, 1_000_000).unwrap();

        let (x, y) = pointer.position().unwrap();
        assert!(x < 1_000_000 && y < 1_000_000);
    }
}
