//! Rule to forbid public property declarations.
//!
//! # Rationale
//!
//! Public properties expose representation and bypass any invariants the
//! owning class maintains. This rule flags properties declared `public`,
//! with one exemption: classes following the rule-definition naming
//! convention (identifier ending in a configurable suffix) conventionally
//! expose public configuration fields and are skipped.
//!
//! # Configuration
//!
//! - `exempt_class_suffix`: Class-name suffix that marks rule-definition
//!   classes (default: `"Sniff"`)

use tokenlint_core::{Location, Rule, Severity, TokenKind, TokenStream, Violation};

/// Rule code for forbidden-public-property.
pub const CODE: &str = "TL003";

/// Rule name for forbidden-public-property.
pub const NAME: &str = "forbidden-public-property";

/// Scope owners considered when deciding whether a variable is a property.
const SCOPE_OWNERS: &[TokenKind] = &[
    TokenKind::Function,
    TokenKind::Closure,
    TokenKind::Class,
    TokenKind::Trait,
    TokenKind::Interface,
];

/// Access modifier kinds.
const MODIFIERS: &[TokenKind] = &[
    TokenKind::Public,
    TokenKind::Private,
    TokenKind::Protected,
];

/// Forbids public property declarations outside rule-definition classes.
#[derive(Debug, Clone)]
pub struct ForbiddenPublicProperty {
    /// Class-name suffix exempting a class from this rule.
    pub exempt_class_suffix: String,
    /// Custom severity.
    pub severity: Severity,
}

impl Default for ForbiddenPublicProperty {
    fn default() -> Self {
        Self::new()
    }
}

impl ForbiddenPublicProperty {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            exempt_class_suffix: "Sniff".to_string(),
            severity: Severity::Error,
        }
    }

    /// Sets the exempting class-name suffix.
    #[must_use]
    pub fn exempt_class_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.exempt_class_suffix = suffix.into();
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Returns the name of the class-like scope owner, read from the
    /// identifier between the owner token and its body opener.
    fn owner_name<'a>(stream: &'a TokenStream, owner_position: usize) -> Option<&'a str> {
        let owner = stream.get(owner_position)?;
        let body = owner.scope?;
        let name_position = stream.find_next(&[TokenKind::Identifier], owner_position + 1)?;
        if name_position >= body.opener {
            // Anonymous class: the identifier found belongs to the body.
            return None;
        }
        Some(stream.get(name_position)?.text.as_str())
    }
}

impl Rule for ForbiddenPublicProperty {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids public properties; use method access instead"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn registers(&self) -> &'static [TokenKind] {
        &[TokenKind::Variable]
    }

    fn check(&self, stream: &TokenStream, position: usize) -> Vec<Violation> {
        let Some(token) = stream.get(position) else {
            return Vec::new();
        };

        // A property is a variable whose innermost enclosing scope is a
        // class or trait body. Variables inside functions, and free
        // variables, are not properties.
        let Some(owner_position) = stream.enclosing(SCOPE_OWNERS, position) else {
            return Vec::new();
        };
        let Some(owner) = stream.get(owner_position) else {
            return Vec::new();
        };
        if !matches!(owner.kind, TokenKind::Class | TokenKind::Trait) {
            return Vec::new();
        }

        // Rule-definition classes expose public configuration fields.
        if let Some(name) = Self::owner_name(stream, owner_position) {
            if !self.exempt_class_suffix.is_empty() && name.ends_with(&self.exempt_class_suffix) {
                return Vec::new();
            }
        }

        let Some(modifier_position) = stream.find_previous(MODIFIERS, position) else {
            return Vec::new();
        };
        let Some(modifier) = stream.get(modifier_position) else {
            return Vec::new();
        };
        if modifier.kind != TokenKind::Public {
            return Vec::new();
        }

        vec![Violation::new(
            CODE,
            NAME,
            self.severity,
            Location::new(stream.path.clone(), token.line, token.column),
            position,
            "Do not use public properties. Use method access instead.",
        )]
    }
}
