//! Word count model
//!
//! Tokens come in from the tokenizer, `WordCount`s come out of the
//! aggregators, and `Entry` is what ends up in the artifact.

use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Lexical category of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    Boolean,
    Identifier,
    Keyword,
    Null,
    Numeric,
    Punctuator,
    String,
    RegularExpression,
    Template,
}

impl TokenType {
    /// All token types, in display order
    pub fn all() -> &'static [TokenType] {
        &[
            TokenType::Boolean,
            TokenType::Identifier,
            TokenType::Keyword,
            TokenType::Null,
            TokenType::Numeric,
            TokenType::Punctuator,
            TokenType::String,
            TokenType::RegularExpression,
            TokenType::Template,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::Boolean => "Boolean",
            TokenType::Identifier => "Identifier",
            TokenType::Keyword => "Keyword",
            TokenType::Null => "Null",
            TokenType::Numeric => "Numeric",
            TokenType::Punctuator => "Punctuator",
            TokenType::String => "String",
            TokenType::RegularExpression => "RegularExpression",
            TokenType::Template => "Template",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        TokenType::all()
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                let names: Vec<_> = TokenType::all().iter().map(|t| t.as_str()).collect();
                format!(
                    "Unknown token type: {}. Available: {}",
                    s,
                    names.join(", ")
                )
            })
    }
}

/// A classified lexeme
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenType,
    pub value: String,
}

impl Token {
    pub fn new(kind: TokenType, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// One externalized word count
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub text: String,
    pub count: u64,
}

/// Word to count mapping that remembers first-seen order.
///
/// Equality compares the mapping only; two counts built from the same files
/// in a different order are equal even though their entry order differs.
#[derive(Debug, Clone, Default)]
pub struct WordCount {
    entries: Vec<Entry>,
    index: HashMap<String, usize>,
}

impl WordCount {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` occurrences of `word`. Empty words and zero counts are ignored.
    pub fn add(&mut self, word: &str, count: u64) {
        if word.is_empty() || count == 0 {
            return;
        }
        match self.index.get(word) {
            Some(&i) => self.entries[i].count += count,
            None => {
                self.index.insert(word.to_string(), self.entries.len());
                self.entries.push(Entry {
                    text: word.to_string(),
                    count,
                });
            }
        }
    }

    /// Fold another count into this one
    pub fn merge(&mut self, other: &WordCount) {
        for entry in &other.entries {
            self.add(&entry.text, entry.count);
        }
    }

    pub fn get(&self, word: &str) -> Option<u64> {
        self.index.get(word).map(|&i| self.entries[i].count)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Entries in first-seen order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|e| (e.text.as_str(), e.count))
    }
}

impl PartialEq for WordCount {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(word, count)| other.get(word) == Some(count))
    }
}

impl Eq for WordCount {}

impl<S: AsRef<str>> FromIterator<S> for WordCount {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut counts = WordCount::new();
        for word in iter {
            counts.add(word.as_ref(), 1);
        }
        counts
    }
}

impl Serialize for WordCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_type_from_str() {
        assert_eq!(
            "Identifier".parse::<TokenType>().unwrap(),
            TokenType::Identifier
        );
        assert_eq!("keyword".parse::<TokenType>().unwrap(), TokenType::Keyword);
        assert_eq!(
            " RegularExpression ".parse::<TokenType>().unwrap(),
            TokenType::RegularExpression
        );
        assert!("Comment".parse::<TokenType>().is_err());
    }

    #[test]
    fn test_token_type_display_roundtrip() {
        for t in TokenType::all() {
            assert_eq!(t.to_string().parse::<TokenType>().unwrap(), *t);
        }
    }

    #[test]
    fn test_word_count_keeps_first_seen_order() {
        let counts: WordCount = ["b", "a", "b", "c", "a", "b"].into_iter().collect();
        let texts: Vec<_> = counts.entries().iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["b", "a", "c"]);
        assert_eq!(counts.get("b"), Some(3));
        assert_eq!(counts.get("a"), Some(2));
        assert_eq!(counts.total(), 6);
    }

    #[test]
    fn test_word_count_ignores_empty_word() {
        let mut counts = WordCount::new();
        counts.add("", 4);
        counts.add("x", 0);
        assert!(counts.is_empty());
    }

    #[test]
    fn test_equality_ignores_order() {
        let a: WordCount = ["x", "y", "y"].into_iter().collect();
        let b: WordCount = ["y", "x", "y"].into_iter().collect();
        let c: WordCount = ["y", "x"].into_iter().collect();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_serializes_as_entry_list() {
        let counts: WordCount = ["foo", "bar", "foo"].into_iter().collect();
        let json = serde_json::to_string(&counts).unwrap();
        assert_eq!(
            json,
            r#"[{"text":"foo","count":2},{"text":"bar","count":1}]"#
        );
    }
}
