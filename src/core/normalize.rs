//! Word normalizer
//!
//! Turns one token value into zero or more words by running it through an
//! ordered list of stages. Each stage maps a single word to any number of
//! words; the pipeline flat-maps stage after stage:
//!
//! 1. decamelize (`fooBar` -> `foo`, `bar`)
//! 2. whitespace split
//! 3. custom pattern split
//! 4. drop (empty word, then the configured drop list)
//!
//! Token type filtering happens before the first stage, see [`Normalizer::words`].

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use crate::core::config::Config;
use crate::core::model::{Token, TokenType};

/// Separator placed between decamelized fragments
pub const DECAMEL_SEPARATOR: char = '_';

/// Lowercase letter or digit followed by an uppercase letter: `fooBar`, `v2Api`
static LOWER_UPPER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-z\d])([A-Z])").expect("Invalid LOWER_UPPER_RE regex"));

/// Uppercase run followed by a capitalized word: `HTTPServer`
static ACRONYM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Z]+)([A-Z][a-z\d]+)").expect("Invalid ACRONYM_RE regex"));

/// Lay out `value` as lowercase fragments joined by [`DECAMEL_SEPARATOR`].
///
/// Existing `_` and `-` characters stay where they are and become split
/// points in [`Stage::Decamelize`].
pub fn decamelize(value: &str) -> String {
    let replacement = format!("${{1}}{}${{2}}", DECAMEL_SEPARATOR);
    let spaced = LOWER_UPPER_RE.replace_all(value, replacement.as_str());
    let spaced = ACRONYM_RE.replace_all(&spaced, replacement.as_str());
    spaced.to_lowercase()
}

/// One transformation step
#[derive(Debug, Clone)]
pub enum Stage {
    Decamelize,
    SplitWhitespace,
    SplitPattern(Regex),
    Drop(HashSet<String>),
}

impl Stage {
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Decamelize => "decamelize",
            Stage::SplitWhitespace => "split-whitespace",
            Stage::SplitPattern(_) => "split-pattern",
            Stage::Drop(_) => "drop",
        }
    }

    pub fn apply(&self, word: String) -> Vec<String> {
        match self {
            Stage::Decamelize => decamelize(&word)
                .split([DECAMEL_SEPARATOR, '-'])
                .map(str::to_string)
                .collect(),
            Stage::SplitWhitespace => word.split_whitespace().map(str::to_string).collect(),
            Stage::SplitPattern(re) => re
                .split(&word)
                .filter(|piece| !piece.is_empty())
                .map(str::to_string)
                .collect(),
            Stage::Drop(words) => {
                if word.is_empty() || words.contains(&word) {
                    Vec::new()
                } else {
                    vec![word]
                }
            }
        }
    }
}

/// Ordered stage chain plus the token type filter
#[derive(Debug, Clone)]
pub struct Normalizer {
    token_types: HashSet<TokenType>,
    stages: Vec<Stage>,
}

impl Normalizer {
    pub fn from_config(config: &Config) -> Self {
        let mut stages = Vec::new();
        if config.decamelize {
            stages.push(Stage::Decamelize);
        }
        if config.split_on_whitespace {
            stages.push(Stage::SplitWhitespace);
        }
        if let Some(re) = &config.split_pattern {
            stages.push(Stage::SplitPattern(re.clone()));
        }
        // Always last and always present so the empty word never escapes.
        stages.push(Stage::Drop(config.drop_words.clone()));

        Self {
            token_types: config.token_types.clone(),
            stages,
        }
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Whether tokens of this type are normalized at all
    pub fn accepts(&self, kind: TokenType) -> bool {
        self.token_types.is_empty() || self.token_types.contains(&kind)
    }

    /// Run a raw value through every stage
    pub fn normalize(&self, value: &str) -> Vec<String> {
        self.stages
            .iter()
            .fold(vec![value.to_string()], |words, stage| {
                words
                    .into_iter()
                    .flat_map(|word| stage.apply(word))
                    .collect()
            })
    }

    /// Words contributed by a token, empty when its type is filtered out
    pub fn words(&self, token: &Token) -> Vec<String> {
        if !self.accepts(token.kind) {
            return Vec::new();
        }
        self.normalize(&token.value)
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
