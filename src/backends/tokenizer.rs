//! JavaScript tokenizer
//!
//! Parses source text with tree-sitter-javascript and flattens the tree into
//! the ordered leaf tokens, classified with the usual ECMAScript token
//! categories (Identifier, Keyword, Punctuator, ...).
//!
//! Only the lexical grammar matters here. A file that does not parse (Flow
//! annotations, a half-written statement) still yields its tokens, including
//! the ones tree-sitter wraps in ERROR nodes. A file fails only when some
//! text cannot be a token at all: a character no token starts with, or a
//! string, template, regex or block comment left open.
//!
//! String, number and regex literals are emitted whole. A template literal
//! yields one Template token per literal run, delimiters included
//! (`` `a ${ ``, `` } b` ``), with the tokens of each substitution in between.
//! Comments are skipped.

use tree_sitter::{Node, Parser};

use crate::core::error::TokenizeError;
use crate::core::model::{Token, TokenType};

/// Reserved words reported as Keyword. Contextual words such as `async`,
/// `of`, `get` or `static` stay Identifier.
const KEYWORDS: &[&str] = &[
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "else",
    "enum",
    "export",
    "extends",
    "finally",
    "for",
    "function",
    "if",
    "import",
    "in",
    "instanceof",
    "let",
    "new",
    "return",
    "super",
    "switch",
    "this",
    "throw",
    "try",
    "typeof",
    "var",
    "void",
    "while",
    "with",
    "yield",
];

/// Named node kinds that are identifiers
const IDENTIFIER_KINDS: &[&str] = &[
    "identifier",
    "property_identifier",
    "shorthand_property_identifier",
    "shorthand_property_identifier_pattern",
    "statement_identifier",
    "private_property_identifier",
    "undefined",
];

/// Node kinds dropped together with their subtree
const SKIPPED_KINDS: &[&str] = &["comment", "html_comment", "hash_bang_line", "jsx_text"];

/// Delimiters that open a literal; one standing alone in an ERROR node was
/// never closed.
const LITERAL_OPENERS: &[&str] = &["\"", "'", "`"];

/// Tokenize JavaScript source text.
///
/// Fails when the grammar cannot be loaded or the text contains something
/// that is not a token; the error carries the position of the first such
/// text.
pub fn tokenize(source: &str) -> Result<Vec<Token>, TokenizeError> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);

    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_javascript::LANGUAGE.into())
        .map_err(|e| TokenizeError::Language(e.to_string()))?;

    let tree = parser.parse(source, None).ok_or(TokenizeError::NoTree)?;
    collect_tokens(tree.root_node(), source.as_bytes())
}

/// Pending work while walking the tree
enum Item<'tree> {
    Node(Node<'tree>),
    /// Literal text of a template string, as byte offsets
    TemplateText(usize, usize),
}

/// Walk the tree in source order and classify every token-level node
fn collect_tokens(root: Node, source: &[u8]) -> Result<Vec<Token>, TokenizeError> {
    let mut tokens = Vec::new();
    let mut stack = vec![Item::Node(root)];

    while let Some(item) = stack.pop() {
        let node = match item {
            Item::Node(node) => node,
            Item::TemplateText(start, end) => {
                let text = std::str::from_utf8(&source[start..end]).unwrap_or("");
                if !text.is_empty() {
                    tokens.push(Token::new(TokenType::Template, text));
                }
                continue;
            }
        };

        let kind = node.kind();
        if SKIPPED_KINDS.contains(&kind) {
            continue;
        }

        if is_lexical_error(node, source) {
            return Err(lexical_error(node));
        }

        if node.is_named() {
            let atomic = match kind {
                "string" => Some(TokenType::String),
                "number" => Some(TokenType::Numeric),
                "regex" => Some(TokenType::RegularExpression),
                "true" | "false" => Some(TokenType::Boolean),
                "null" => Some(TokenType::Null),
                "this" | "super" => Some(TokenType::Keyword),
                k if IDENTIFIER_KINDS.contains(&k) => Some(TokenType::Identifier),
                _ => None,
            };
            if let Some(token_type) = atomic {
                // A literal holding an error lost its closing delimiter.
                let literal = matches!(
                    token_type,
                    TokenType::String | TokenType::RegularExpression
                );
                if literal && node.has_error() {
                    return Err(lexical_error(node));
                }
                push_token(&mut tokens, token_type, node, source);
                continue;
            }
        }

        if kind == "template_string" {
            stack.extend(template_items(node)?.into_iter().rev());
            continue;
        }

        if node.child_count() == 0 {
            push_token(&mut tokens, classify_leaf(node_text(node, source)), node, source);
            continue;
        }

        let mut cursor = node.walk();
        let children: Vec<Node> = node.children(&mut cursor).collect();
        stack.extend(children.into_iter().rev().map(Item::Node));
    }

    Ok(tokens)
}

/// Whether `node` covers text that no JavaScript token accounts for
fn is_lexical_error(node: Node, source: &[u8]) -> bool {
    // Bytes the lexer had to skip.
    if node.is_error() && node.child_count() == 0 && node.end_byte() > node.start_byte() {
        return true;
    }
    if node.is_missing() {
        return LITERAL_OPENERS.contains(&node.kind()) || node.kind() == "/";
    }
    if node.is_named() {
        return false;
    }
    let kind = node.kind();
    if LITERAL_OPENERS.contains(&kind) && node.parent().is_some_and(|p| p.is_error()) {
        return true;
    }
    // `/*` outside a comment node is a comment that never ends.
    kind == "/" && source.get(node.start_byte() + 1) == Some(&b'*')
}

fn lexical_error(node: Node) -> TokenizeError {
    let pos = node.start_position();
    TokenizeError::Lexical {
        line: pos.row + 1,
        column: pos.column + 1,
    }
}

/// Split a template string into literal text runs and substitution contents.
///
/// `` `a ${b} c` `` becomes the text `` `a ${ ``, the node `b`, and the text
/// `` } c` ``.
fn template_items(node: Node) -> Result<Vec<Item>, TokenizeError> {
    let mut items = Vec::new();
    let mut text_start = node.start_byte();

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.is_missing() {
            return Err(lexical_error(node));
        }
        if child.kind() != "template_substitution" {
            continue;
        }
        let mut inner = child.walk();
        let parts: Vec<Node> = child.children(&mut inner).collect();
        let closed = parts
            .last()
            .is_some_and(|last| last.kind() == "}" && !last.is_missing());
        if !closed {
            return Err(lexical_error(child));
        }
        // `${` closes the run before the substitution, `}` opens the next.
        items.push(Item::TemplateText(text_start, child.start_byte() + 2));
        items.extend(parts.into_iter().filter(|n| n.is_named()).map(Item::Node));
        text_start = child.end_byte() - 1;
    }
    items.push(Item::TemplateText(text_start, node.end_byte()));

    Ok(items)
}

/// Classify an anonymous leaf by its text
fn classify_leaf(text: &str) -> TokenType {
    if is_word(text) {
        if KEYWORDS.iter().any(|k| *k == text) {
            TokenType::Keyword
        } else {
            TokenType::Identifier
        }
    } else {
        TokenType::Punctuator
    }
}

fn is_word(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {
            chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}

fn push_token(tokens: &mut Vec<Token>, token_type: TokenType, node: Node, source: &[u8]) {
    let text = node_text(node, source);
    // Zero-width nodes (inserted by error recovery) carry no lexeme.
    if !text.is_empty() {
        tokens.push(Token::new(token_type, text));
    }
}

fn node_text<'a>(node: Node, source: &'a [u8]) -> &'a str {
    node.utf8_text(source).unwrap_or("")
}
