//! Infrastructure layer: OS adapters for the native helpers.

pub mod pointer;
