//! Aahar Shared Library
//!
//! This crate contains the health metrics calculator and the types shared by
//! the backend and WASM callers.

pub mod errors;
pub mod health_metrics;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use health_metrics::*;
pub use types::*;
