//! # tokenlint-core
//!
//! Core framework for lint rules over externally tokenized source code.
//!
//! This crate provides the foundational traits and types for building
//! token-stream linters. It includes:
//!
//! - [`Token`] / [`TokenStream`] for the tokenizer-produced input
//! - [`Rule`] trait for per-token lint rules
//! - [`Analyzer`] for dispatching registered tokens to rules
//! - [`Violation`] for representing lint findings
//!
//! ## Example
//!
//! ```ignore
//! use tokenlint_core::Analyzer;
//!
//! let analyzer = Analyzer::builder()
//!     .root("./build/tokens")
//!     .rule(MyRule::new())
//!     .build()?;
//!
//! let result = analyzer.analyze()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod config;
mod rule;
mod stream;
mod token;
mod types;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use config::{AnalyzerConfig, Config, ConfigError, RuleConfig};
pub use rule::{Rule, RuleBox};
pub use stream::{StreamError, TokenStream};
pub use token::{Scope, Token, TokenKind};
pub use types::{LintResult, Location, Severity, Violation};
