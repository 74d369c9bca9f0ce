//! Utility modules.

/// Log sanitization helpers that keep response bodies out of logs in full.
pub mod log_sanitizer;
