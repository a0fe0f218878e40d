//! Error types
//!
//! `ConfigError` covers everything that can go wrong before the first file is
//! touched. `ScanError` covers the run itself: `Read` and `Tokenize` only
//! cost the run one file, `Traversal` and `Write` abort it.

use std::path::PathBuf;
use thiserror::Error;

/// Startup and configuration failures. Always fatal.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing project root")]
    MissingRoot,

    #[error("project root does not exist: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("project root is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("invalid split pattern `{pattern}`")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("unknown token type: {0}")]
    UnknownTokenType(String),
}

/// Why a source text could not be turned into tokens
#[derive(Debug, Error)]
pub enum TokenizeError {
    #[error("failed to load JavaScript grammar: {0}")]
    Language(String),

    #[error("parser produced no tree")]
    NoTree,

    #[error("invalid token at line {line}, column {column}")]
    Lexical { line: usize, column: usize },
}

/// Failures while scanning, reading, tokenizing or writing.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to read directory {}", .path.display())]
    Traversal {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to tokenize {}", .path.display())]
    Tokenize {
        path: PathBuf,
        #[source]
        source: TokenizeError,
    },

    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
