//! Pipeline API
//!
//! [`ClauseProcessor`] ties the text passes together behind one entry
//! point for the CLI and other callers.

mod config;
mod input;
mod output;
mod processor;

pub use config::{defaults, Config, ConfigBuilder};
pub use input::Input;
pub use output::{Output, ProcessingMetadata, ProcessingStats};
pub use processor::ClauseProcessor;
