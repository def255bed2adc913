//! # tokenlint-rules
//!
//! Built-in lint rules for tokenlint.
//!
//! This crate provides the code-quality rules shipped with tokenlint. Each
//! rule inspects a token stream produced by an external tokenizer and
//! reports violations through the shared diagnostic types.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | TL001 | `max-nesting-level` | Limits nesting depth inside function and closure bodies |
//! | TL002 | `element-name-min-length` | Enforces a minimum length for element names |
//! | TL003 | `forbidden-public-property` | Forbids public property declarations |
//!
//! ## Usage
//!
//! ```ignore
//! use tokenlint_core::Analyzer;
//! use tokenlint_rules::{ElementNameMinLength, MaxNestingLevel};
//!
//! let analyzer = Analyzer::builder()
//!     .root("./build/tokens")
//!     .rule(MaxNestingLevel::new())
//!     .rule(ElementNameMinLength::new())
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod element_name_min_length;
mod forbidden_public_property;
mod max_nesting_level;
mod presets;

pub use element_name_min_length::ElementNameMinLength;
pub use forbidden_public_property::ForbiddenPublicProperty;
pub use max_nesting_level::MaxNestingLevel;
pub use presets::{all_rules, recommended_rules};

/// Re-export core types for convenience.
pub use tokenlint_core::{Rule, Severity, Violation};
