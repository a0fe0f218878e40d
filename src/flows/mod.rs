//! Flows module - End-to-end commands
//!
//! Provides:
//! - count: Scan a source tree and write its word frequency table

pub mod count;
