//! CLI command implementations

use clap::Subcommand;

pub mod generate_config;
pub mod inspect;
pub mod list;
pub mod process;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Segment contract documents into clauses
    Process(process::ProcessArgs),

    /// Show how each normalized line of a document is read
    Inspect(inspect::InspectArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Validate a clause type rule file
    Validate(validate::ValidateArgs),

    /// Generate a clause type rule template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List clause type labels
    Labels {
        /// Rule file to list instead of the built-in clause types
        #[arg(short, long, value_name = "FILE")]
        rules: Option<std::path::PathBuf>,
    },

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Process(args) => args.execute(),
            Commands::Inspect(args) => args.execute(),
            Commands::List { subcommand } => match subcommand {
                ListCommands::Labels { rules } => list::list_labels(rules.as_deref()),
                ListCommands::Formats => list::list_formats(),
            },
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}
