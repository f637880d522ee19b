//! Filesystem primitives for the CodeGuard rule cache sync
//!
//! Provides atomic file writes, sorted directory listings and a
//! stage-then-swap directory replacement.

pub mod dir;
pub mod error;
pub mod io;

pub use error::{Error, Result};
