//! Backends module - Collaborators around the counting core
//!
//! Provides:
//! - scan: Source file discovery with walkdir
//! - file_reader: Whole-file reads
//! - tokenizer: JavaScript tokenization with tree-sitter

pub mod file_reader;
pub mod scan;
pub mod tokenizer;
