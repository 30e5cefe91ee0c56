//! Keyword-count clause classifier

use super::rules::RuleSet;
use super::ClauseClassifier;
use crate::error::{ClassifyError, Error, Result};
use regex::{Regex, RegexBuilder};
use std::path::Path;

#[derive(Debug)]
struct CompiledRule {
    label: String,
    pattern: Regex,
}

/// Labels a clause with the rule whose keywords occur most often
#[derive(Debug)]
pub struct KeywordClassifier {
    rules: Vec<CompiledRule>,
    default_label: String,
    labels: Vec<String>,
}

impl KeywordClassifier {
    /// Compile a validated rule set.
    pub fn new(rule_set: &RuleSet) -> Result<Self> {
        let rules = rule_set
            .rules
            .iter()
            .map(|rule| {
                let alternatives = rule
                    .keywords
                    .iter()
                    .map(|k| k.trim())
                    .filter(|k| !k.is_empty())
                    .map(regex::escape)
                    .collect::<Vec<_>>()
                    .join("|");

                let pattern = RegexBuilder::new(&format!(r"\b(?:{alternatives})\b"))
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| {
                        Error::Configuration(format!(
                            "Invalid keywords for rule '{}': {e}",
                            rule.label
                        ))
                    })?;

                Ok(CompiledRule {
                    label: rule.label.clone(),
                    pattern,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            rules,
            default_label: rule_set.metadata.default_label.clone(),
            labels: rule_set.labels(),
        })
    }

    /// Classifier over the embedded rule set.
    pub fn builtin() -> Result<Self> {
        Self::new(RuleSet::builtin())
    }

    /// Classifier over a TOML rule file.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::new(&RuleSet::from_toml_str(content)?)
    }

    /// Classifier over a TOML rule file on disk.
    pub fn from_file(path: &Path) -> Result<Self> {
        Self::new(&RuleSet::from_file(path)?)
    }

    /// Keyword hits per label, in rule order.
    pub fn scores(&self, text: &str) -> Vec<(&str, usize)> {
        self.rules
            .iter()
            .map(|rule| (rule.label.as_str(), rule.pattern.find_iter(text).count()))
            .collect()
    }
}

impl ClauseClassifier for KeywordClassifier {
    fn classify(&self, text: &str) -> std::result::Result<String, ClassifyError> {
        let mut best: Option<(&str, usize)> = None;
        for (label, hits) in self.scores(text) {
            if hits > best.map_or(0, |(_, h)| h) {
                best = Some((label, hits));
            }
        }

        Ok(best
            .map(|(label, _)| label)
            .unwrap_or(&self.default_label)
            .to_string())
    }

    fn labels(&self) -> Vec<String> {
        self.labels.clone()
    }
}
