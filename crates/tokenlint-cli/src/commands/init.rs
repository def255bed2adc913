//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# tokenlint configuration
# See https://github.com/tokenlint/tokenlint for documentation

# Severity level that causes a non-zero exit code: "error", "warning", "info"
# fail_on = "error"

[analyzer]
# Root directory to search for *.tokens.json files (default: current directory)
# root = "./build/tokens"

# Glob patterns to exclude from analysis
exclude = [
    "**/vendor/**",
    "**/node_modules/**",
]

# Rule configurations
# Each rule can be enabled/disabled and have its severity overridden

[rules.max-nesting-level]
enabled = true
# severity = "warning"  # Override default severity
max_nesting_level = 2

[rules.element-name-min-length]
enabled = true
min_length = 3
# allowed_short_names = ["i", "id", "to", "up", "ok", "no", "go", "it"]

[rules.forbidden-public-property]
enabled = true
# exempt_class_suffix = "Sniff"
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("tokenlint.toml");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;

    println!("Created tokenlint.toml");
    println!("\nNext steps:");
    println!("  1. Edit tokenlint.toml to configure rules");
    println!("  2. Run: tokenlint check");

    Ok(())
}
