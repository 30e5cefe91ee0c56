//! Validate command implementation

use anyhow::Result;
use clap::Args;
use clausa_core::{KeywordClassifier, RuleSet};
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the clause type rule file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub rules: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating clause type rules: {}", self.rules.display());

        // compiling catches keyword patterns the parser accepts
        let checked = RuleSet::from_file(&self.rules)
            .and_then(|rules| KeywordClassifier::new(&rules).map(|_| rules));

        match checked {
            Ok(rules) => {
                println!("✓ Rule file is valid!");
                println!("  Name: {}", rules.metadata.name);
                println!("  Rules: {}", rules.rules.len());
                println!("  Default label: {}", rules.metadata.default_label);
                Ok(())
            }
            Err(e) => {
                println!("✗ Rule file is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
