//! Platform-specific pointer backends.
//!
//! The real backend is selected at compile time via `#[cfg(target_os = ...)]`.
//! Only X11 on Linux is implemented; on other targets the C ABI exposes
//! the warp as a no-op, which the silent-failure contract already allows.

pub mod mock;

#[cfg(target_os = "linux")]
pub mod linux;
