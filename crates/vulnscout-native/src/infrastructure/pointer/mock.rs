//! Mock pointer backend for unit testing.
//!
//! # Why a mock backend?
//!
//! The real backend (`X11Pointer`) talks to a live display server. Under
//! test that is a problem twice over: CI machines are headless, and on a
//! developer machine the tests would actually move the cursor. The
//! `MockPointer` replaces the display call with in-memory recording so
//! assertions can inspect exactly which warps were requested and in
//! what order.
//!
//! # `should_fail` flag
//!
//! Construct with [`MockPointer::failing`] to make every call return
//! `PointerError::Platform`. This is how the use-case tests exercise
//! the silent-absorption path without an actual broken display.

use std::sync::Mutex;

use crate::application::move_pointer::{PlatformPointer, PointerError};

/// A pointer backend that records warps instead of performing them.
///
/// Records live in `Mutex<Vec<_>>` fields so tests can share the mock
/// across threads behind an `Arc`.
#[derive(Default)]
pub struct MockPointer {
    /// Every `(x, y)` pair passed to `warp_to`, in call order.
    pub warps: Mutex<Vec<(i32, i32)>>,
    /// When `true`, every method returns `PointerError::Platform`.
    pub should_fail: bool,
}

impl MockPointer {
    /// Creates a mock that accepts and records every warp.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mock whose every call fails, simulating an unreachable
    /// display server.
    pub fn failing() -> Self {
        Self {
            warps: Mutex::new(Vec::new()),
            should_fail: true,
        }
    }
}

impl PlatformPointer for MockPointer {
    /// Records the warp, or fails if `should_fail` is set.
    fn warp_to(&self, x: i32, y: i32) -> Result<(), PointerError> {
        if self.should_fail {
            return Err(PointerError::Platform("mock failure".into()));
        }
        self.warps.lock().unwrap().push((x, y));
        Ok(())
    }

    /// Returns the destination of the most recent warp, or `(0, 0)` if
    /// no warp has been recorded (a fresh X session parks the pointer
    /// at the origin too).
    fn position(&self) -> Result<(i32, i32), PointerError> {
        if self.should_fail {
            return Err(PointerError::Platform("mock failure".into()));
        }
        Ok(self
            .warps
            .lock()
            .unwrap()
            .last()
            .copied()
            .unwrap_or((0, 0)))
    }
}
