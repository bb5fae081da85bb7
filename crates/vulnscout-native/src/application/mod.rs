//! Application-layer use cases for the native helpers.

pub mod move_pointer;

pub use move_pointer::{MovePointerUseCase, PlatformPointer, PointerError};
