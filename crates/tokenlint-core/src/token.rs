//! Token data model for externally tokenized source.
//!
//! Tokens are produced by an external tokenizer and consumed as-is. Each
//! token carries a structural nesting [`level`](Token::level): the number of
//! enclosing blocks (function bodies, conditional/loop bodies, switch-branch
//! bodies) the token sits inside. Scope-opening tokens additionally carry a
//! [`Scope`] naming the index range of their own body.

use serde::{Deserialize, Serialize};

/// Lexical category of a token.
///
/// Only categories that at least one rule inspects are distinguished;
/// everything else arrives as [`TokenKind::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// A named function or method declaration.
    Function,
    /// An anonymous function. Analyzed as its own unit by nesting rules.
    Closure,
    /// A `case` label inside a switch. Opens an ignored scope.
    Case,
    /// A `default` label inside a switch. Opens an ignored scope.
    Default,
    /// A switch statement keyword.
    Switch,
    /// An `if` keyword.
    If,
    /// An `else` keyword.
    Else,
    /// A `for` loop keyword.
    For,
    /// A `foreach` loop keyword.
    Foreach,
    /// A `while` loop keyword.
    While,
    /// A `do` loop keyword.
    Do,
    /// A `try` block keyword.
    Try,
    /// A class declaration keyword.
    Class,
    /// A trait declaration keyword.
    Trait,
    /// An interface declaration keyword.
    Interface,
    /// A constant declaration.
    Const,
    /// A variable or property name.
    Variable,
    /// A `public` access modifier.
    Public,
    /// A `private` access modifier.
    Private,
    /// A `protected` access modifier.
    Protected,
    /// A bare identifier (e.g., the name following `class`).
    Identifier,
    /// Any token no rule cares about.
    Other,
}

impl TokenKind {
    /// Returns `true` for kinds that own an independently analyzed body.
    #[must_use]
    pub fn is_function_like(self) -> bool {
        matches!(self, Self::Function | Self::Closure)
    }
}

/// Index range of a scope-opening token's own body.
///
/// Every token physically inside the scope has an index `i` with
/// `opener < i <= closer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scope {
    /// Index of the first token of the scope (the opening boundary).
    pub opener: usize,
    /// Index of the last token of the scope (the closing boundary).
    pub closer: usize,
}

impl Scope {
    /// Returns `true` if the token at `position` lies inside this scope.
    #[must_use]
    pub fn contains(&self, position: usize) -> bool {
        self.opener < position && position <= self.closer
    }
}

/// One positioned unit of tokenized source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Lexical category.
    pub kind: TokenKind,
    /// The lexeme. For declarations this is the identifier being declared.
    #[serde(default)]
    pub text: String,
    /// Line number in the original source (1-indexed).
    #[serde(default = "default_one")]
    pub line: usize,
    /// Column number in the original source (1-indexed).
    #[serde(default = "default_one")]
    pub column: usize,
    /// Structural nesting depth assigned by the tokenizer.
    ///
    /// Counts enclosing blocks: function bodies, conditional and loop
    /// bodies, and switch-branch bodies. A scope's closing boundary token
    /// carries the scope owner's level, not the body level.
    #[serde(default)]
    pub level: usize,
    /// Body range, present only for scope-opening kinds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<Scope>,
}

fn default_one() -> usize {
    1
}

impl Token {
    /// Creates a token with the given kind and lexeme at line 1, column 1,
    /// level 0. Intended for tokenizer adapters and tests; adjust with the
    /// builder methods.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            line: 1,
            column: 1,
            level: 0,
            scope: None,
        }
    }

    /// Sets the source position.
    #[must_use]
    pub fn at(mut self, line: usize, column: usize) -> Self {
        self.line = line;
        self.column = column;
        self
    }

    /// Sets the structural nesting level.
    #[must_use]
    pub fn level(mut self, level: usize) -> Self {
        self.level = level;
        self
    }

    /// Sets the body range for a scope-opening token.
    #[must_use]
    pub fn scope(mut self, opener: usize, closer: usize) -> Self {
        self.scope = Some(Scope { opener, closer });
        self
    }
}
