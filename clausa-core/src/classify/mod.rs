//! Clause type classification
//!
//! Segmentation never depends on a classifier. Callers hand each finished
//! clause's text to a [`ClauseClassifier`] and attach the returned label;
//! when the classifier fails the clause keeps its place with the
//! configured fallback label.

mod keyword;
mod rules;

pub use keyword::KeywordClassifier;
pub use rules::{LabelRule, RuleSet, RuleSetMetadata};

use crate::api::Config;
use crate::clause::Clause;
use crate::error::{ClassifyError, Result};

/// Sentinel label for clauses the classifier could not label.
pub const UNCLASSIFIED: &str = "unclassified";

/// Assigns a label from a closed vocabulary to a clause text
pub trait ClauseClassifier: Send + Sync {
    /// Label for `text`.
    fn classify(&self, text: &str) -> std::result::Result<String, ClassifyError>;

    /// The vocabulary labels are drawn from.
    fn labels(&self) -> Vec<String>;
}

impl<T: ClauseClassifier + ?Sized> ClauseClassifier for &T {
    fn classify(&self, text: &str) -> std::result::Result<String, ClassifyError> {
        (**self).classify(text)
    }

    fn labels(&self) -> Vec<String> {
        (**self).labels()
    }
}

impl<T: ClauseClassifier + ?Sized> ClauseClassifier for Box<T> {
    fn classify(&self, text: &str) -> std::result::Result<String, ClassifyError> {
        (**self).classify(text)
    }

    fn labels(&self) -> Vec<String> {
        (**self).labels()
    }
}

/// Label every clause, keeping id order.
///
/// Classifier failures are logged and replaced by `config.fallback_label`.
/// Only thread pool construction can fail.
pub fn classify_clauses<C>(clauses: Vec<Clause>, classifier: &C, config: &Config) -> Result<Vec<Clause>>
where
    C: ClauseClassifier + ?Sized,
{
    #[cfg(feature = "parallel")]
    if config.parallel && clauses.len() > 1 {
        return classify_parallel(clauses, classifier, config);
    }

    Ok(clauses
        .into_iter()
        .map(|clause| label_clause(clause, classifier, config))
        .collect())
}

#[cfg(feature = "parallel")]
fn classify_parallel<C>(clauses: Vec<Clause>, classifier: &C, config: &Config) -> Result<Vec<Clause>>
where
    C: ClauseClassifier + ?Sized,
{
    use crate::error::Error;
    use rayon::prelude::*;

    // indexed collect keeps input order
    let run = || {
        clauses
            .into_par_iter()
            .map(|clause| label_clause(clause, classifier, config))
            .collect::<Vec<_>>()
    };

    match config.threads {
        Some(threads) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .map_err(|e| Error::Configuration(format!("Failed to build thread pool: {e}")))?;
            Ok(pool.install(run))
        }
        None => Ok(run()),
    }
}

fn label_clause<C>(clause: Clause, classifier: &C, config: &Config) -> Clause
where
    C: ClauseClassifier + ?Sized,
{
    let input = truncate_for_classifier(&clause.text, config.max_classifier_chars);
    let label = match classifier.classify(input) {
        Ok(label) => label,
        Err(e) => {
            log::warn!(
                "classifier failed for clause {}: {e}; using '{}'",
                clause.id,
                config.fallback_label
            );
            config.fallback_label.clone()
        }
    };
    clause.with_type(label)
}

fn truncate_for_classifier(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
