//! Utility modules for anngate
//!
//! Currently only structured logging setup for embedding binaries.

pub mod logging;

// Re-export commonly used items
pub use logging::{init_default, init_from_env, init_logging, LoggingConfig};
