//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Name recorded in the rule file metadata
    #[arg(short, long, value_name = "NAME", default_value = "Custom clause types")]
    pub name: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating clause type rule template...");
        println!("  Name: {}", self.name);
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Rule template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the rule file to describe your clause types");
        println!("2. Validate your rules:");
        println!("   clausa validate --rules {}", self.output.display());
        println!("3. Use them for processing:");
        println!(
            "   clausa process -i contract.txt --rules {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template rule file content
    fn generate_template(&self) -> String {
        format!(
            r#"# Clause type rules
#
# A clause takes the label whose keywords occur most often in its text.
# Matching ignores case and respects word boundaries; multi-word keywords
# match as phrases. Earlier rules win ties.

[metadata]
name = "{}"

# Label for clauses that match no keyword
default_label = "general"

[[rules]]
label = "payment"
keywords = ["rent", "payment", "payable", "fee", "invoice"]

[[rules]]
label = "termination"
keywords = ["terminate", "termination", "breach", "notice period"]

[[rules]]
label = "confidentiality"
keywords = ["confidential", "disclose", "disclosure"]

# Add more rules:
# [[rules]]
# label = "governing_law"
# keywords = ["governed by", "jurisdiction"]
"#,
            self.name.replace('\\', "\\\\").replace('"', "\\\"")
        )
    }
}
