//! Check command implementation.

use anyhow::{Context, Result};
use std::path::Path;
use tokenlint_core::{Analyzer, Config, RuleBox, Severity};
use tokenlint_rules::{ElementNameMinLength, ForbiddenPublicProperty, MaxNestingLevel};

use crate::OutputFormat;

/// Runs the check command.
pub fn run(
    path: &Path,
    format: OutputFormat,
    rules_filter: Option<&str>,
    exclude: Vec<String>,
    source: &crate::config_resolver::ConfigSource,
) -> Result<()> {
    let config = match source {
        crate::config_resolver::ConfigSource::Default => Config::default(),
        other => {
            // Invariant: non-Default variants always have a path
            let p = other.path().context("resolved config has no path")?;
            if source.is_global() {
                tracing::info!("Using global config: {}", p.display());
            }
            Config::from_file(p)
                .with_context(|| format!("Failed to load config: {}", p.display()))?
        }
    };

    let fail_on = fail_on_severity(&config);

    // Build analyzer
    let mut builder = Analyzer::builder().root(path).config(config.clone());

    for pattern in exclude {
        builder = builder.exclude(pattern);
    }

    for rule in build_rules(&config, rules_filter) {
        builder = builder.rule_box(rule);
    }

    let analyzer = builder.build().context("Failed to build analyzer")?;

    tracing::info!("Analyzing {:?} with {} rules", path, analyzer.rule_count());

    let result = analyzer.analyze().context("Analysis failed")?;

    // Output results
    super::output::print(&result, format)?;

    // Exit with error code if violations reach the failure threshold
    if result.has_violations_at(fail_on) {
        std::process::exit(1);
    }

    Ok(())
}

/// Severity threshold for a failing exit code, from `fail_on` in config.
fn fail_on_severity(config: &Config) -> Severity {
    match config.fail_on.as_deref() {
        Some("info") => Severity::Info,
        Some("warning") => Severity::Warning,
        Some(other) if other != "error" => {
            tracing::warn!("Unknown fail_on value '{}', using 'error'", other);
            Severity::Error
        }
        _ => Severity::Error,
    }
}

/// Builds the rule set, applying per-rule options from config and the
/// `--rules` filter (names or codes, comma-separated).
fn build_rules(config: &Config, filter: Option<&str>) -> Vec<RuleBox> {
    let names: Vec<&str> = match filter {
        Some(f) => f.split(',').map(str::trim).collect(),
        None => vec![
            "max-nesting-level",
            "element-name-min-length",
            "forbidden-public-property",
        ],
    };

    let mut rules: Vec<RuleBox> = Vec::new();

    for name in names {
        match name {
            "max-nesting-level" | "TL001" => rules.push(Box::new(nesting_rule(config))),
            "element-name-min-length" | "TL002" => rules.push(Box::new(name_length_rule(config))),
            "forbidden-public-property" | "TL003" => {
                rules.push(Box::new(public_property_rule(config)));
            }
            _ => tracing::warn!("Unknown rule: {}", name),
        }
    }

    rules
}

fn nesting_rule(config: &Config) -> MaxNestingLevel {
    let mut rule = MaxNestingLevel::new();
    if let Some(rc) = config.rules.get("max-nesting-level") {
        let max = rc.get_int("max_nesting_level", 2);
        rule = rule.max_nesting_level(usize::try_from(max).unwrap_or(2));
    }
    rule
}

fn name_length_rule(config: &Config) -> ElementNameMinLength {
    let mut rule = ElementNameMinLength::new();
    if let Some(rc) = config.rules.get("element-name-min-length") {
        let min = rc.get_int("min_length", 3);
        rule = rule.min_length(usize::try_from(min).unwrap_or(3));
        if let Some(names) = rc.get_str_array("allowed_short_names") {
            rule = rule.allowed_short_names(names);
        }
    }
    rule
}

fn public_property_rule(config: &Config) -> ForbiddenPublicProperty {
    let mut rule = ForbiddenPublicProperty::new();
    if let Some(rc) = config.rules.get("forbidden-public-property") {
        rule = rule.exempt_class_suffix(rc.get_str("exempt_class_suffix", "Sniff"));
    }
    rule
}
