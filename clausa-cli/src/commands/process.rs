//! Process command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader, InputSource};
use crate::output::{create_formatter, OutputFormat};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use clausa_core::{classify_clauses, Clause, ClauseProcessor, Config, KeywordClassifier};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob, `-` for stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else json)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Join line-wrapped paragraphs before segmenting
    #[arg(short, long)]
    pub merge_paragraphs: bool,

    /// Clause type rule file (default: built-in rules)
    #[arg(short, long, value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// Skip clause type classification
    #[arg(long)]
    pub no_classify: bool,

    /// Number of worker threads
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// What one input document produced
#[derive(Debug)]
enum Document {
    /// No text after trimming
    Empty,
    /// Clauses in id order
    Segmented(Vec<Clause>),
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        log::info!("Starting clause segmentation");
        log::debug!("Arguments: {:?}", self);

        let cli_config = CliConfig::load_or_default(self.config.as_deref())?;
        let format = self.resolve_format(&cli_config)?;
        let config = self.build_config(&cli_config)?;
        let classifier = self.build_classifier(&cli_config)?;
        let processor = ClauseProcessor::with_config(config).map_err(CliError::from)?;

        let sources = resolve_patterns(&self.input)?;
        log::info!("Found {} document(s) to process", sources.len());

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(sources.len() as u64);

        let run = || {
            sources
                .par_iter()
                .map(|source| {
                    let document = process_document(source, &processor, classifier.as_ref());
                    progress.file_completed(&source.to_string());
                    document
                })
                .collect::<Vec<_>>()
        };

        let documents = match self.worker_threads(&cli_config) {
            Some(threads) => rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .map_err(|e| CliError::ConfigError(format!("Failed to build thread pool: {e}")))?
                .install(run),
            None => run(),
        };

        progress.finish();

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };
        let mut formatter = create_formatter(format, writer, cli_config.output.pretty_json);

        for (source, document) in sources.iter().zip(documents) {
            let name = source.to_string();
            match document? {
                Document::Empty => formatter.format_empty(&name)?,
                Document::Segmented(clauses) => formatter.format_document(&name, &clauses)?,
            }
        }

        formatter.finish()?;
        log::info!("Processing complete");

        Ok(())
    }

    /// Command-line format, then config file
    fn resolve_format(&self, cli_config: &CliConfig) -> Result<OutputFormat> {
        if let Some(format) = self.format {
            return Ok(format);
        }

        let name = &cli_config.output.default_format;
        OutputFormat::from_name(name)
            .ok_or_else(|| CliError::ConfigError(format!("Unknown output format: {name}")).into())
    }

    fn worker_threads(&self, cli_config: &CliConfig) -> Option<usize> {
        self.threads
            .or(Some(cli_config.classification.worker_threads))
            .filter(|&n| n > 0)
    }

    fn build_config(&self, cli_config: &CliConfig) -> Result<Config> {
        let classification = &cli_config.classification;

        // the document-level pool installed in execute carries the thread count
        Config::builder()
            .merge_paragraphs(self.merge_paragraphs || cli_config.processing.merge_paragraphs)
            .parallel(classification.parallel)
            .fallback_label(classification.fallback_label.clone())
            .max_classifier_chars(classification.max_input_chars)
            .build()
            .map_err(|e| CliError::from(e).into())
    }

    fn build_classifier(&self, cli_config: &CliConfig) -> Result<Option<KeywordClassifier>> {
        if self.no_classify || !cli_config.classification.enabled {
            log::debug!("Classification disabled");
            return Ok(None);
        }

        let rules = self
            .rules
            .as_deref()
            .or(cli_config.classification.rules.as_deref());

        let classifier = match rules {
            Some(path) => {
                log::info!("Loading clause type rules from {}", path.display());
                KeywordClassifier::from_file(path)
            }
            None => KeywordClassifier::builtin(),
        }
        .map_err(CliError::from)?;

        Ok(Some(classifier))
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // a logger may already be installed when run in-process
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }
}

fn process_document(
    source: &InputSource,
    processor: &ClauseProcessor,
    classifier: Option<&KeywordClassifier>,
) -> Result<Document> {
    let raw = match source {
        InputSource::Stdin => FileReader::read_stdin()?,
        InputSource::File(path) => FileReader::read_text(path)?,
    };

    if raw.trim().is_empty() {
        log::warn!("{source}: no text received");
        return Ok(Document::Empty);
    }

    let output = processor.process_text(&raw);
    let stats = &output.metadata.stats;
    log::info!(
        "{source}: {} clauses from {} lines in {:?} (avg {:.1} chars)",
        stats.clause_count,
        stats.line_count,
        output.metadata.duration,
        output.avg_clause_chars()
    );
    if stats.dropped_fragments > 0 {
        log::debug!("{source}: dropped {} short fragments", stats.dropped_fragments);
    }

    let clauses = match classifier {
        Some(classifier) => classify_clauses(output.clauses, classifier, processor.config())
            .map_err(CliError::from)?,
        None => output.clauses,
    };

    Ok(Document::Segmented(clauses))
}
