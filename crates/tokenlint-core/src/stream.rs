//! Indexed token stream with directional search.
//!
//! Replaces the ambient file/position pair of host-dispatched linters with an
//! explicit abstraction passed into each rule: bounded indexed access plus
//! forward/backward search by kind.

use crate::token::{Token, TokenKind};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Errors produced while loading a token stream.
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    /// IO error reading the stream file.
    #[error("Failed to read token stream {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Malformed JSON in the stream file.
    #[error("Failed to parse token stream {path}: {message}")]
    Parse {
        /// Path that failed to parse.
        path: PathBuf,
        /// Decode error message.
        message: String,
    },
}

/// An ordered, randomly-indexable sequence of tokens for one source file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenStream {
    /// Path of the source file the tokens were produced from.
    pub path: PathBuf,
    tokens: Vec<Token>,
}

impl TokenStream {
    /// Creates a stream from already-produced tokens.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, tokens: Vec<Token>) -> Self {
        Self {
            path: path.into(),
            tokens,
        }
    }

    /// Loads a stream from a tokenizer JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or decoded.
    pub fn from_file(path: &Path) -> Result<Self, StreamError> {
        let content = std::fs::read_to_string(path).map_err(|e| StreamError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&content).map_err(|e| StreamError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Decodes a stream from tokenizer JSON.
    ///
    /// # Errors
    ///
    /// Returns the underlying decode error on malformed input.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Returns the token at `position`, if in bounds.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Token> {
        self.tokens.get(position)
    }

    /// Returns the number of tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if the stream holds no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns all tokens in order.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Finds the next token at or after `from` whose kind is in `kinds`.
    #[must_use]
    pub fn find_next(&self, kinds: &[TokenKind], from: usize) -> Option<usize> {
        (from..self.tokens.len()).find(|&i| kinds.contains(&self.tokens[i].kind))
    }

    /// Finds the nearest token strictly before `before` whose kind is in
    /// `kinds`, searching backward.
    #[must_use]
    pub fn find_previous(&self, kinds: &[TokenKind], before: usize) -> Option<usize> {
        (0..before.min(self.tokens.len())).rev().find(|&i| kinds.contains(&self.tokens[i].kind))
    }

    /// Finds the innermost scope-owning token whose kind is in `kinds` and
    /// whose scope contains `position`.
    ///
    /// Scopes nest properly, so the first backward match containing
    /// `position` is the innermost enclosing owner.
    #[must_use]
    pub fn enclosing(&self, kinds: &[TokenKind], position: usize) -> Option<usize> {
        (0..position.min(self.tokens.len())).rev().find(|&i| {
            let token = &self.tokens[i];
            kinds.contains(&token.kind)
                && token.scope.is_some_and(|scope| scope.contains(position))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream() -> TokenStream {
        // class Widget { public $label; function render() { $x } }
        TokenStream::new(
            "widget.php",
            vec![
                Token::new(TokenKind::Class, "class").scope(2, 12),
                Token::new(TokenKind::Identifier, "Widget"),
                Token::new(TokenKind::Other, "{"),
                Token::new(TokenKind::Public, "public").level(1),
                Token::new(TokenKind::Variable, "label").level(1),
                Token::new(TokenKind::Function, "render").level(1).scope(7, 11),
                Token::new(TokenKind::Identifier, "render").level(1),
                Token::new(TokenKind::Other, "{").level(1),
                Token::new(TokenKind::Variable, "x").level(2),
                Token::new(TokenKind::Other, ";").level(2),
                Token::new(TokenKind::Other, "").level(2),
                Token::new(TokenKind::Other, "}").level(1),
                Token::new(TokenKind::Other, "}"),
            ],
        )
    }

    #[test]
    fn find_next_scans_forward_inclusive() {
        let s = stream();
        assert_eq!(s.find_next(&[TokenKind::Variable], 0), Some(4));
        assert_eq!(s.find_next(&[TokenKind::Variable], 4), Some(4));
        assert_eq!(s.find_next(&[TokenKind::Variable], 5), Some(8));
        assert_eq!(s.find_next(&[TokenKind::Switch], 0), None);
    }

    #[test]
    fn find_previous_scans_backward_exclusive() {
        let s = stream();
        assert_eq!(s.find_previous(&[TokenKind::Public], 4), Some(3));
        assert_eq!(s.find_previous(&[TokenKind::Public], 3), None);
        assert_eq!(
            s.find_previous(&[TokenKind::Class, TokenKind::Trait], 8),
            Some(0)
        );
    }

    #[test]
    fn enclosing_returns_innermost_owner() {
        let s = stream();
        let owners = &[TokenKind::Class, TokenKind::Function];
        // $x at index 8 sits inside render(), not directly in the class.
        assert_eq!(s.enclosing(owners, 8), Some(5));
        // $label at index 4 sits directly in the class body.
        assert_eq!(s.enclosing(owners, 4), Some(0));
        // The class token itself has no enclosing owner.
        assert_eq!(s.enclosing(owners, 0), None);
    }

    #[test]
    fn enclosing_ignores_closed_scopes() {
        let s = stream();
        // Index 12 is past render()'s closer but inside the class.
        assert_eq!(
            s.enclosing(&[TokenKind::Class, TokenKind::Function], 12),
            Some(0)
        );
    }

    #[test]
    fn from_json_decodes_stream() {
        let json = r#"{
            "path": "src/a.php",
            "tokens": [
                {"kind": "function", "text": "go", "line": 3, "column": 1, "level": 0,
                 "scope": {"opener": 1, "closer": 2}},
                {"kind": "other", "text": "{", "line": 3, "column": 15},
                {"kind": "other", "text": "}", "line": 4, "column": 1}
            ]
        }"#;
        let s = TokenStream::from_json(json).expect("stream should decode");
        assert_eq!(s.len(), 3);
        assert_eq!(s.path, PathBuf::from("src/a.php"));
        assert_eq!(s.get(0).map(|t| t.kind), Some(TokenKind::Function));
    }

    #[test]
    fn from_file_reports_missing_path() {
        let err = TokenStream::from_file(Path::new("/nonexistent.tokens.json"))
            .expect_err("missing file should error");
        assert!(matches!(err, StreamError::Io { .. }));
    }

    #[test]
    fn from_file_reports_malformed_json() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("bad.tokens.json");
        std::fs::write(&path, "{not json").expect("write");
        let err = TokenStream::from_file(&path).expect_err("malformed file should error");
        assert!(matches!(err, StreamError::Parse { .. }));
    }
}
