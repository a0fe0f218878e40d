//! Core module - The word counting pipeline
//!
//! This module provides:
//! - Token and WordCount model
//! - Run configuration
//! - Word normalizer stages
//! - File and corpus aggregation
//! - Artifact rendering
//! - Error types and path helpers

pub mod aggregate;
pub mod config;
pub mod error;
pub mod model;
pub mod normalize;
pub mod paths;
pub mod render;
