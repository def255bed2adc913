//! Rule presets for common configurations.

use crate::{ElementNameMinLength, ForbiddenPublicProperty, MaxNestingLevel};
use tokenlint_core::RuleBox;

/// Returns the recommended set of rules with default settings.
///
/// Includes:
/// - `max-nesting-level` (TL001) - Limits nesting depth in function bodies
/// - `element-name-min-length` (TL002) - Enforces minimum name length
/// - `forbidden-public-property` (TL003) - Forbids public properties
#[must_use]
pub fn recommended_rules() -> Vec<RuleBox> {
    vec![
        Box::new(MaxNestingLevel::new()),
        Box::new(ElementNameMinLength::new()),
        Box::new(ForbiddenPublicProperty::new()),
    ]
}

/// Returns all available rules.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    recommended_rules()
}
