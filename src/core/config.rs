//! Run configuration
//!
//! Resolved once from the CLI and never mutated afterwards.

use regex::Regex;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::core::error::ConfigError;
use crate::core::model::TokenType;

/// Folder names skipped during traversal unless overridden
pub const DEFAULT_EXCLUDED_FOLDERS: &[&str] = &["node_modules", "coverage", "tests"];

/// File extensions scanned unless overridden
pub const DEFAULT_EXTENSIONS: &[&str] = &["js"];

/// Token type list value meaning "accept every type"
pub const ALL_TOKEN_TYPES: &str = "all";

#[derive(Debug, Clone)]
pub struct Config {
    /// Accepted token types; empty accepts everything
    pub token_types: HashSet<TokenType>,
    pub decamelize: bool,
    pub split_on_whitespace: bool,
    pub split_pattern: Option<Regex>,
    /// Exact words to discard. The empty word is always discarded.
    pub drop_words: HashSet<String>,
    pub excluded_folders: HashSet<String>,
    pub excluded_files: HashSet<String>,
    /// File extensions without the leading dot
    pub extensions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            token_types: HashSet::from([TokenType::Identifier]),
            decamelize: true,
            split_on_whitespace: true,
            split_pattern: None,
            drop_words: HashSet::new(),
            excluded_folders: DEFAULT_EXCLUDED_FOLDERS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            excluded_files: HashSet::new(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Config {
    pub fn with_token_types(mut self, types: impl IntoIterator<Item = TokenType>) -> Self {
        self.token_types = types.into_iter().collect();
        self
    }

    pub fn with_decamelize(mut self, decamelize: bool) -> Self {
        self.decamelize = decamelize;
        self
    }

    pub fn with_split_on_whitespace(mut self, split: bool) -> Self {
        self.split_on_whitespace = split;
        self
    }

    pub fn with_split_pattern(mut self, pattern: Option<&str>) -> Result<Self, ConfigError> {
        self.split_pattern = pattern.map(compile_pattern).transpose()?;
        Ok(self)
    }

    pub fn with_drop_words<S: AsRef<str>>(mut self, words: impl IntoIterator<Item = S>) -> Self {
        self.drop_words = clean_list(words).into_iter().collect();
        self
    }

    pub fn with_excluded_folders<S: AsRef<str>>(
        mut self,
        names: impl IntoIterator<Item = S>,
    ) -> Self {
        self.excluded_folders = clean_list(names).into_iter().collect();
        self
    }

    pub fn with_excluded_files<S: AsRef<str>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.excluded_files = clean_list(names).into_iter().collect();
        self
    }

    pub fn with_extensions<S: AsRef<str>>(mut self, exts: impl IntoIterator<Item = S>) -> Self {
        let exts: Vec<String> = clean_list(exts)
            .into_iter()
            .map(|e| e.trim_start_matches('.').to_string())
            .filter(|e| !e.is_empty())
            .collect();
        if !exts.is_empty() {
            self.extensions = exts;
        }
        self
    }

    /// Whether a file name carries one of the configured extensions
    pub fn matches_extension(&self, file_name: &str) -> bool {
        self.extensions.iter().any(|ext| {
            file_name
                .strip_suffix(ext.as_str())
                .map(|stem| stem.ends_with('.'))
                .unwrap_or(false)
        })
    }
}

/// Parse a list of token type names. `all` or an empty list accepts every type.
pub fn parse_token_types<S: AsRef<str>>(
    names: impl IntoIterator<Item = S>,
) -> Result<HashSet<TokenType>, ConfigError> {
    let names = clean_list(names);
    if names.iter().any(|n| n.eq_ignore_ascii_case(ALL_TOKEN_TYPES)) {
        return Ok(HashSet::new());
    }
    names
        .iter()
        .map(|n| {
            n.parse::<TokenType>()
                .map_err(|_| ConfigError::UnknownTokenType(n.clone()))
        })
        .collect()
}

/// Compile a custom split pattern
pub fn compile_pattern(pattern: &str) -> Result<Regex, ConfigError> {
    Regex::new(pattern).map_err(|source| ConfigError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Check the project root before anything else runs
pub fn resolve_root(root: Option<&Path>) -> Result<PathBuf, ConfigError> {
    let root = root.ok_or(ConfigError::MissingRoot)?;
    if root.as_os_str().is_empty() {
        return Err(ConfigError::MissingRoot);
    }
    if !root.exists() {
        return Err(ConfigError::RootNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(ConfigError::NotADirectory(root.to_path_buf()));
    }
    Ok(root.to_path_buf())
}

/// Trim list items and drop blanks (`--drop ""` means no drop words)
fn clean_list<S: AsRef<str>>(items: impl IntoIterator<Item = S>) -> Vec<String> {
    items
        .into_iter()
        .map(|s| s.as_ref().trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
