// ABOUTME: Main library entry point for the docstats metrics engine.
// ABOUTME: Re-exports the tokenizers, syllable estimator, readability formula and compute_metrics.

//! docstats-metrics - readability and word-frequency metrics for plain text.
//!
//! The engine is a pure function from text to a [`MetricsRecord`]. It never
//! fails: empty or malformed input produces zeroed metrics.
//!
//! # Example
//!
//! ```
//! use docstats_metrics::compute_metrics;
//!
//! let metrics = compute_metrics("Hello hello world. This is a test!");
//! assert_eq!(metrics.total_word_count, 7);
//! assert_eq!(metrics.average_sentence_length, 3.5);
//! ```

pub mod metrics;
pub mod rank;
pub mod readability;
pub mod stopwords;
pub mod syllables;
pub mod tokenize;

pub use crate::metrics::{
    analyze, compute_metrics, round2, Analysis, MetricsRecord, TOP_WORDS_LIMIT,
};
pub use crate::rank::{WordCount, WordCounter};
pub use crate::readability::flesch_kincaid_grade_level;
pub use crate::stopwords::{is_stopword, STOPWORD_LIST};
pub use crate::syllables::count_syllables;
pub use crate::tokenize::{tokenize_sentences, tokenize_words};
