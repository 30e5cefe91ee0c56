//! Clause type rule files

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;

static BUILTIN_RULES: OnceLock<RuleSet> = OnceLock::new();

const BUILTIN_RULES_TOML: &str = include_str!("../../configs/clause_types.toml");

/// A complete rule file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleSet {
    pub metadata: RuleSetMetadata,
    #[serde(default)]
    pub rules: Vec<LabelRule>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleSetMetadata {
    pub name: String,
    pub default_label: String,
}

/// Keywords that signal one label
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelRule {
    pub label: String,
    pub keywords: Vec<String>,
}

impl RuleSet {
    /// Parse and validate a rule file.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let rules: RuleSet = toml::from_str(content)
            .map_err(|e| Error::Configuration(format!("Failed to parse rule file: {e}")))?;
        rules.validate()?;
        Ok(rules)
    }

    /// Read, parse and validate a rule file from disk.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Infrastructure(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// The rule set compiled into the crate.
    pub fn builtin() -> &'static RuleSet {
        BUILTIN_RULES.get_or_init(|| {
            RuleSet::from_toml_str(BUILTIN_RULES_TOML)
                .expect("Failed to load embedded clause type rules")
        })
    }

    /// Rule labels in file order, followed by the default label if distinct.
    pub fn labels(&self) -> Vec<String> {
        let mut labels: Vec<String> = self.rules.iter().map(|r| r.label.clone()).collect();
        if !labels.contains(&self.metadata.default_label) {
            labels.push(self.metadata.default_label.clone());
        }
        labels
    }

    fn validate(&self) -> Result<()> {
        if self.metadata.default_label.trim().is_empty() {
            return Err(Error::Configuration(
                "default_label must not be empty".into(),
            ));
        }

        let mut seen = HashSet::new();
        for rule in &self.rules {
            if rule.label.trim().is_empty() {
                return Err(Error::Configuration("rule label must not be empty".into()));
            }
            if !seen.insert(rule.label.as_str()) {
                return Err(Error::Configuration(format!(
                    "duplicate rule label: {}",
                    rule.label
                )));
            }
            if rule.keywords.iter().all(|k| k.trim().is_empty()) {
                return Err(Error::Configuration(format!(
                    "rule '{}' has no keywords",
                    rule.label
                )));
            }
        }

        Ok(())
    }
}
