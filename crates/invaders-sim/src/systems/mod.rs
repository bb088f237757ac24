//! ECS systems that operate on the scene world each frame.
//!
//! Systems are plain functions that take `&mut World` (or `&World` for
//! read-only). Shared state is passed in by the engine that owns it.

pub mod cleanup;
pub mod scripts;
pub mod snapshot;
