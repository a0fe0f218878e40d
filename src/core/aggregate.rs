//! File and corpus aggregation
//!
//! `aggregate_file` counts the words of one token stream; `aggregate` folds
//! per-file counts into the corpus count. Both are pure. The fold is
//! associative and commutative on the mapping, so files may be counted in any
//! order (or in parallel) as long as the partial results are merged.

use crate::core::model::{Token, WordCount};
use crate::core::normalize::Normalizer;

/// Count the normalized words of one file's tokens
pub fn aggregate_file<'a, I>(tokens: I, normalizer: &Normalizer) -> WordCount
where
    I: IntoIterator<Item = &'a Token>,
{
    tokens
        .into_iter()
        .flat_map(|token| normalizer.words(token))
        .collect()
}

/// Fold `next` into `acc`
pub fn merge(mut acc: WordCount, next: &WordCount) -> WordCount {
    acc.merge(next);
    acc
}

/// Merge per-file counts into one corpus count, in iteration order
pub fn aggregate<I>(counts: I) -> WordCount
where
    I: IntoIterator<Item = WordCount>,
{
    counts
        .into_iter()
        .fold(WordCount::new(), |acc, next| merge(acc, &next))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use crate::core::model::TokenType;

    fn ident(value: &str) -> Token {
        Token::new(TokenType::Identifier, value)
    }

    fn count_of(values: &[&str]) -> WordCount {
        let tokens: Vec<_> = values.iter().map(|v| ident(v)).collect();
        aggregate_file(&tokens, &Normalizer::default())
    }

    #[test]
    fn test_const_declaration() {
        // const fooBar = 1;
        let tokens = vec![
            Token::new(TokenType::Keyword, "const"),
            ident("fooBar"),
            Token::new(TokenType::Punctuator, "="),
            Token::new(TokenType::Numeric, "1"),
            Token::new(TokenType::Punctuator, ";"),
        ];
        let counts = aggregate_file(&tokens, &Normalizer::default());
        assert_eq!(counts.len(), 2);
        assert_eq!(counts.get("foo"), Some(1));
        assert_eq!(counts.get("bar"), Some(1));
    }

    #[test]
    fn test_no_empty_word_and_positive_counts() {
        let counts = count_of(&["_", "__proto__", "a_b", "", "-", "fooBar", "foo"]);
        assert_eq!(counts.get(""), None);
        assert!(counts.iter().all(|(word, n)| !word.is_empty() && n >= 1));
        assert_eq!(counts.get("foo"), Some(2));
        assert_eq!(counts.get("proto"), Some(1));
    }

    #[test]
    fn test_keyword_filtered_even_if_word_allowed() {
        let tokens = vec![Token::new(TokenType::Keyword, "foo"), ident("foo")];
        let counts = aggregate_file(&tokens, &Normalizer::default());
        assert_eq!(counts.get("foo"), Some(1));
    }

    #[test]
    fn test_empty_token_stream() {
        let tokens: Vec<Token> = Vec::new();
        assert!(aggregate_file(&tokens, &Normalizer::default()).is_empty());
    }

    #[test]
    fn test_token_order_does_not_change_mapping() {
        let a = count_of(&["fooBar", "bazQux", "foo"]);
        let b = count_of(&["foo", "bazQux", "fooBar"]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_all_types_accepted_when_filter_empty() {
        let config = Config::default().with_token_types(Vec::<TokenType>::new());
        let tokens = vec![
            Token::new(TokenType::Keyword, "return"),
            Token::new(TokenType::Boolean, "true"),
            ident("value"),
        ];
        let counts = aggregate_file(&tokens, &Normalizer::from_config(&config));
        assert_eq!(counts.len(), 3);
    }

    #[test]
    fn test_aggregate_empty_corpus() {
        assert!(aggregate(Vec::new()).is_empty());
    }

    #[test]
    fn test_aggregate_is_additive() {
        let a = count_of(&["fooBar", "foo", "only"]);
        let b = count_of(&["foo", "barBaz"]);
        let both = aggregate(vec![a.clone(), b.clone()]);

        for (word, _) in both.iter() {
            let expected = a.get(word).unwrap_or(0) + b.get(word).unwrap_or(0);
            assert_eq!(both.get(word), Some(expected), "word {}", word);
        }
        assert_eq!(both.total(), a.total() + b.total());
        assert_eq!(both.get("foo"), Some(2));
        assert_eq!(both.get("bar"), Some(2));
    }

    #[test]
    fn test_aggregate_is_commutative() {
        let files = vec![
            count_of(&["alpha", "betaGamma"]),
            count_of(&["gamma", "alpha"]),
            count_of(&[]),
            count_of(&["deltaAlpha"]),
        ];

        let forward = aggregate(files.clone());
        let reversed = aggregate(files.iter().rev().cloned());
        let rotated = aggregate(files[2..].iter().chain(&files[..2]).cloned());

        assert_eq!(forward, reversed);
        assert_eq!(forward, rotated);
        assert_eq!(forward.get("alpha"), Some(3));
    }

    #[test]
    fn test_aggregate_is_associative() {
        let a = count_of(&["x", "y"]);
        let b = count_of(&["y", "z"]);
        let c = count_of(&["z", "x"]);

        let left = merge(merge(a.clone(), &b), &c);
        let right = merge(a, &merge(b, &c));
        assert_eq!(left, right);
    }

    #[test]
    fn test_entry_order_is_first_seen() {
        let merged = aggregate(vec![count_of(&["b", "a"]), count_of(&["c", "a"])]);
        let texts: Vec<_> = merged.entries().iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["b", "a", "c"]);
    }
}
