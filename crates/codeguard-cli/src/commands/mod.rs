//! Command implementations for the CodeGuard CLI

pub mod cache;
pub mod validate;

pub use cache::run_update_cache;
pub use validate::run_validate;
