//! MovePointerUseCase: absolute pointer warps with the silent-failure contract.
//!
//! This use case sits at the application layer and delegates to a
//! [`PlatformPointer`] trait object for the actual display-server call.
//! The platform-specific implementations are in the infrastructure layer.
//!
//! # The silent-failure contract
//!
//! The host calls `move_pointer` fire-and-forget: there is no return
//! value and no error channel, and a machine without a reachable X11
//! display (headless CI, a dropped SSH session without forwarding) must
//! not make the call blow up. The use case therefore absorbs every
//! backend error after logging it — the caller cannot distinguish
//! "moved" from "display unavailable", and that is deliberate.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};

/// Error type for pointer-warp operations.
///
/// Only ever observed inside this crate: [`MovePointerUseCase::move_to`]
/// swallows it before it can reach the host.
#[derive(Debug, Error)]
pub enum PointerError {
    #[error("platform error: {0}")]
    Platform(String),
}

/// Platform-agnostic pointer control trait.
///
/// The OS backend implements this in the infrastructure layer. Both
/// operations talk to the display the ambient environment names (the
/// `DISPLAY` variable on X11).
pub trait PlatformPointer: Send + Sync {
    /// Warps the pointer to absolute coordinates `(x, y)` in the default
    /// screen's root-window coordinate space, flushing the request so
    /// the motion is observable when the call returns.
    ///
    /// Coordinates outside the root window are passed through; the
    /// display server decides what to do with them (typically clamping
    /// to the screen edge).
    fn warp_to(&self, x: i32, y: i32) -> Result<(), PointerError>;

    /// Returns the pointer's current position in root-window coordinates.
    ///
    /// Not part of the C ABI — exists so tests can verify where a warp
    /// actually left the pointer.
    fn position(&self) -> Result<(i32, i32), PointerError>;
}

/// The Move Pointer use case.
///
/// Dispatches warp requests to the platform backend and enforces the
/// no-throw contract at this layer, so every caller above it (including
/// the C ABI) is a plain infallible call.
pub struct MovePointerUseCase {
    pointer: Arc<dyn PlatformPointer>,
}

impl MovePointerUseCase {
    /// Creates a new use case with the given platform backend.
    pub fn new(pointer: Arc<dyn PlatformPointer>) -> Self {
        Self { pointer }
    }

    /// Warps the pointer to `(x, y)`, absorbing any backend failure.
    ///
    /// Failures are logged at `warn` level and otherwise dropped. Two
    /// consecutive calls with the same coordinates are idempotent: the
    /// second warp re-asserts the same position.
    pub fn move_to(&self, x: i32, y: i32) {
        match self.pointer.warp_to(x, y) {
            Ok(()) => debug!(x, y, "pointer warped"),
            Err(e) => warn!(x, y, "pointer warp failed: {e}"),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
