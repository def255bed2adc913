//! Rule to enforce a minimum length for element names.
//!
//! # Rationale
//!
//! One- and two-letter names carry almost no meaning outside a handful of
//! entrenched conventions. This rule flags declarations whose identifier is
//! shorter than the minimum, with an allow-list for the conventional short
//! names.
//!
//! # Configuration
//!
//! - `min_length`: Minimum identifier length in characters (default: 3)
//! - `allowed_short_names`: Names exempt from the minimum (default:
//!   `i`, `id`, `to`, `up`, `ok`, `no`, `go`, `it`)

use tokenlint_core::{Location, Rule, Severity, TokenKind, TokenStream, Violation};

/// Rule code for element-name-min-length.
pub const CODE: &str = "TL002";

/// Rule name for element-name-min-length.
pub const NAME: &str = "element-name-min-length";

/// Default set of conventional short names.
pub const DEFAULT_ALLOWED: &[&str] = &["i", "id", "to", "up", "ok", "no", "go", "it"];

/// Enforces a minimum length for declared element names.
#[derive(Debug, Clone)]
pub struct ElementNameMinLength {
    /// Minimum identifier length in characters.
    pub min_length: usize,
    /// Names exempt from the minimum.
    pub allowed_short_names: Vec<String>,
    /// Custom severity.
    pub severity: Severity,
}

impl Default for ElementNameMinLength {
    fn default() -> Self {
        Self::new()
    }
}

impl ElementNameMinLength {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            min_length: 3,
            allowed_short_names: DEFAULT_ALLOWED.iter().map(ToString::to_string).collect(),
            severity: Severity::Error,
        }
    }

    /// Sets the minimum identifier length.
    #[must_use]
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = min;
        self
    }

    /// Replaces the allow-list of short names.
    #[must_use]
    pub fn allowed_short_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_short_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    fn should_be_skipped(&self, name: &str, length: usize) -> bool {
        length >= self.min_length || self.allowed_short_names.iter().any(|n| n == name)
    }
}

impl Rule for ElementNameMinLength {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Enforces a minimum length for class, function, constant and variable names"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn registers(&self) -> &'static [TokenKind] {
        &[
            TokenKind::Class,
            TokenKind::Trait,
            TokenKind::Interface,
            TokenKind::Const,
            TokenKind::Function,
            TokenKind::Variable,
        ]
    }

    fn check(&self, stream: &TokenStream, position: usize) -> Vec<Violation> {
        let Some(token) = stream.get(position) else {
            return Vec::new();
        };

        let Some((type_name, element_name)) = element_name(stream, position, token.kind) else {
            return Vec::new();
        };

        // Count Unicode scalar values, not bytes.
        let length = element_name.chars().count();
        if self.should_be_skipped(element_name, length) {
            return Vec::new();
        }

        vec![Violation::new(
            CODE,
            NAME,
            self.severity,
            Location::new(stream.path.clone(), token.line, token.column),
            position,
            format!(
                "{type_name} name \"{element_name}\" is only {length} chars long. Must be at least {}.",
                self.min_length
            ),
        )]
    }
}

/// Resolves the declared identifier for a registered token.
///
/// Variable tokens carry their own name; keyword declarations are followed
/// by an identifier token holding the name.
fn element_name(
    stream: &TokenStream,
    position: usize,
    kind: TokenKind,
) -> Option<(&'static str, &str)> {
    let type_name = match kind {
        TokenKind::Class => "Class",
        TokenKind::Trait => "Trait",
        TokenKind::Interface => "Interface",
        TokenKind::Const => "Constant",
        TokenKind::Function => "Function",
        TokenKind::Variable => {
            return Some(("Variable", stream.get(position)?.text.as_str()));
        }
        _ => return None,
    };

    let name_position = stream.find_next(&[TokenKind::Identifier], position + 1)?;
    Some((type_name, stream.get(name_position)?.text.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokenlint_core::Token;

    fn variable_stream(name: &str) -> TokenStream {
        TokenStream::new(
            "names.php",
            vec![Token::new(TokenKind::Variable, name).at(5, 9)],
        )
    }

    #[test]
    fn allow_listed_name_passes() {
        let violations = ElementNameMinLength::new().check(&variable_stream("id"), 0);
        assert!(violations.is_empty());
    }

    #[test]
    fn short_name_fails_with_length_and_minimum() {
        let violations = ElementNameMinLength::new().check(&variable_stream("db"), 0);
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].message,
            "Variable name \"db\" is only 2 chars long. Must be at least 3."
        );
        assert_eq!(violations[0].location.line, 5);
        assert_eq!(violations[0].code, CODE);
    }

    #[test]
    fn name_at_minimum_passes() {
        let violations = ElementNameMinLength::new().check(&variable_stream("sum"), 0);
        assert!(violations.is_empty());
    }

    #[test]
    fn length_counts_scalar_values_not_bytes() {
        // Two characters, six bytes in UTF-8.
        let violations = ElementNameMinLength::new().check(&variable_stream("日本"), 0);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("only 2 chars long"));
    }

    #[test]
    fn class_name_read_from_following_identifier() {
        let stream = TokenStream::new(
            "names.php",
            vec![
                Token::new(TokenKind::Class, "class"),
                Token::new(TokenKind::Identifier, "Db"),
            ],
        );
        let violations = ElementNameMinLength::new().check(&stream, 0);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.starts_with("Class name \"Db\""));
    }

    #[test]
    fn constant_uses_constant_type_label() {
        let stream = TokenStream::new(
            "names.php",
            vec![
                Token::new(TokenKind::Const, "const"),
                Token::new(TokenKind::Identifier, "X"),
            ],
        );
        let violations = ElementNameMinLength::new().check(&stream, 0);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.starts_with("Constant name \"X\""));
    }

    #[test]
    fn declaration_without_identifier_is_skipped() {
        let stream = TokenStream::new(
            "names.php",
            vec![Token::new(TokenKind::Function, "function")],
        );
        assert!(ElementNameMinLength::new().check(&stream, 0).is_empty());
    }

    #[test]
    fn custom_minimum_and_allow_list() {
        let rule = ElementNameMinLength::new()
            .min_length(5)
            .allowed_short_names(["db"]);
        assert!(rule.check(&variable_stream("db"), 0).is_empty());

        let violations = rule.check(&variable_stream("name"), 0);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("Must be at least 5."));
    }

    #[test]
    fn single_letter_i_is_conventional() {
        assert!(ElementNameMinLength::new()
            .check(&variable_stream("i"), 0)
            .is_empty());
    }
}
