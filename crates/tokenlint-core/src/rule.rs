//! Rule trait for defining token-stream lint rules.

use crate::stream::TokenStream;
use crate::token::TokenKind;
use crate::types::{Severity, Violation};

/// A lint rule dispatched per token of interest.
///
/// A rule declares the token kinds it wants to see via [`Rule::registers`];
/// the [`Analyzer`](crate::Analyzer) presents every token of a registered
/// kind to the rule exactly once. Rules hold only static configuration: all
/// traversal state lives in locals of a single `check` call, so unrelated
/// invocations cannot leak state into each other.
///
/// # Example
///
/// ```ignore
/// use tokenlint_core::{Rule, Severity, TokenKind, TokenStream, Violation};
///
/// pub struct NoLongLines;
///
/// impl Rule for NoLongLines {
///     fn name(&self) -> &'static str { "no-long-lines" }
///     fn code(&self) -> &'static str { "TL999" }
///     fn registers(&self) -> &'static [TokenKind] { &[TokenKind::Other] }
///
///     fn check(&self, stream: &TokenStream, position: usize) -> Vec<Violation> {
///         Vec::new()
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "max-nesting-level").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "TL001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Returns the token kinds this rule wants to be invoked for.
    fn registers(&self) -> &'static [TokenKind];

    /// Checks one registered token and returns any violations found.
    ///
    /// # Arguments
    ///
    /// * `stream` - The token stream the token belongs to
    /// * `position` - Index of the registered token within the stream
    ///
    /// # Returns
    ///
    /// Zero or more violations attributed to this token.
    fn check(&self, stream: &TokenStream, position: usize) -> Vec<Violation>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;
