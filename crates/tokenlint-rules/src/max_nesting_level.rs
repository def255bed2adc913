//! Rule to limit lexical nesting depth inside function bodies.
//!
//! # Rationale
//!
//! Deeply nested control flow is hard to read and usually hides extractable
//! logic. This rule measures the maximum effective nesting depth of each
//! function, method, and closure body and flags bodies that exceed the limit.
//!
//! Two constructs that visually nest are not counted as true nesting:
//!
//! - Switch branches (`case`/`default` scopes): all branches are siblings,
//!   not a deeper path, so their level contribution is discounted while they
//!   are open. A switch-heavy but otherwise flat function reports depth 0.
//! - Nested closures: each closure is an independent unit of complexity and
//!   is dispatched to this rule on its own, so its body is skipped when
//!   measuring the enclosing function.
//!
//! # Configuration
//!
//! - `max_nesting_level`: Maximum allowed depth (default: 2)

use tokenlint_core::{Location, Rule, Scope, Severity, TokenKind, TokenStream, Violation};

/// Rule code for max-nesting-level.
pub const CODE: &str = "TL001";

/// Rule name for max-nesting-level.
pub const NAME: &str = "max-nesting-level";

/// Limits the effective nesting depth of function-like bodies.
#[derive(Debug, Clone)]
pub struct MaxNestingLevel {
    /// Maximum allowed nesting depth.
    pub max_nesting_level: usize,
    /// Custom severity.
    pub severity: Severity,
}

impl Default for MaxNestingLevel {
    fn default() -> Self {
        Self::new()
    }
}

impl MaxNestingLevel {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_nesting_level: 2,
            severity: Severity::Error,
        }
    }

    /// Sets the maximum allowed nesting depth.
    #[must_use]
    pub fn max_nesting_level(mut self, max: usize) -> Self {
        self.max_nesting_level = max;
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for MaxNestingLevel {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Limits nesting depth inside function and closure bodies"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn registers(&self) -> &'static [TokenKind] {
        &[TokenKind::Function, TokenKind::Closure]
    }

    fn check(&self, stream: &TokenStream, position: usize) -> Vec<Violation> {
        let Some(token) = stream.get(position) else {
            return Vec::new();
        };

        // Abstract methods and interface signatures carry no body scope.
        let Some(body) = token.scope else {
            return Vec::new();
        };

        let max_level = max_effective_level(stream, body);

        // The tokenizer assigns the body block exactly one level above the
        // function token itself; normalizing both away makes a branchless
        // body report depth 0.
        let depth = max_level.saturating_sub(token.level + 1);

        if depth <= self.max_nesting_level {
            return Vec::new();
        }

        tracing::debug!(
            "Nesting depth {} exceeds limit {} at {}:{}",
            depth,
            self.max_nesting_level,
            stream.path.display(),
            token.line
        );

        let plural = if self.max_nesting_level > 1 { "s" } else { "" };
        vec![Violation::new(
            CODE,
            NAME,
            self.severity,
            Location::new(stream.path.clone(), token.line, token.column),
            position,
            format!(
                "Only {} indentation level{} per function/method. Found {} levels.",
                self.max_nesting_level, plural, depth
            ),
        )]
    }
}

/// Walks the tokens strictly between the body boundaries and returns the
/// maximum effective level found: the token's structural level minus the
/// number of switch-branch scopes open at that point.
fn max_effective_level(stream: &TokenStream, body: Scope) -> usize {
    let mut max_level = 0;
    // Closer positions of case/default scopes still open at the cursor.
    let mut ignored_scopes: Vec<usize> = Vec::new();

    let mut cur = body.opener + 1;
    while cur < body.closer {
        let Some(token) = stream.get(cur) else {
            break;
        };

        let mut next = cur + 1;
        let mut boundary = cur;

        match token.kind {
            TokenKind::Closure => {
                // A nested closure is measured on its own when the
                // dispatcher reaches it; resume past its body.
                if let Some(inner) = token.scope {
                    next = inner.closer + 1;
                    boundary = inner.closer;
                }
            }
            TokenKind::Case | TokenKind::Default => {
                if let Some(inner) = token.scope {
                    ignored_scopes.push(inner.closer);
                }
            }
            _ => {}
        }

        // A branch scope stops being discounted at its closing boundary,
        // before the boundary token itself is measured.
        ignored_scopes.retain(|closer| *closer != boundary);

        let effective = token.level.saturating_sub(ignored_scopes.len());
        max_level = max_level.max(effective);

        cur = next;
    }

    max_level
}
