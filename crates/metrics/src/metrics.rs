// ABOUTME: Aggregates tokenizer, syllable and readability output into a MetricsRecord.
// ABOUTME: compute_metrics is the engine's single entry point and is total over all input.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::rank::{WordCount, WordCounter};
use crate::readability::flesch_kincaid_grade_level;
use crate::stopwords::is_stopword;
use crate::syllables::count_syllables;
use crate::tokenize::{tokenize_sentences, tokenize_words};

/// Maximum number of entries in [`MetricsRecord::top_10_words`].
pub const TOP_WORDS_LIMIT: usize = 10;

/// Metrics computed for one document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MetricsRecord {
    pub total_word_count: u64,
    pub unique_word_count: u64,
    /// Words per sentence, rounded to 2 decimals. 0 when there are no sentences.
    pub average_sentence_length: f64,
    /// Rounded to 2 decimals. 0 when there are no sentences or no words.
    pub flesch_kincaid_grade_level: f64,
    /// Most frequent non-stopwords, at most [`TOP_WORDS_LIMIT`].
    pub top_10_words: Vec<WordCount>,
}

/// Unrounded counts behind a [`MetricsRecord`].
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Analysis {
    pub total_words: u64,
    pub unique_words: u64,
    pub total_sentences: u64,
    pub total_syllables: u64,
    pub average_sentence_length: f64,
    pub grade_level: f64,
    /// Every distinct non-stopword, most frequent first.
    pub ranked_words: Vec<WordCount>,
}

impl Analysis {
    /// Rounds the ratios and keeps the top [`TOP_WORDS_LIMIT`] words.
    pub fn into_record(self) -> MetricsRecord {
        let mut top = self.ranked_words;
        top.truncate(TOP_WORDS_LIMIT);
        MetricsRecord {
            total_word_count: self.total_words,
            unique_word_count: self.unique_words,
            average_sentence_length: round2(self.average_sentence_length),
            flesch_kincaid_grade_level: round2(self.grade_level),
            top_10_words: top,
        }
    }
}

/// Runs every stage of the engine and returns the unrounded results.
pub fn analyze(text: &str) -> Analysis {
    let sentences = tokenize_sentences(text);
    let words = tokenize_words(text);

    let total_words = words.len() as u64;
    let total_sentences = sentences.len() as u64;

    let all_words: WordCounter = words.iter().map(String::as_str).collect();
    let unique_words = all_words.len() as u64;

    let average_sentence_length = if total_sentences == 0 {
        0.0
    } else {
        total_words as f64 / total_sentences as f64
    };

    let total_syllables: u64 = words.iter().map(|w| u64::from(count_syllables(w))).sum();
    let grade_level = flesch_kincaid_grade_level(total_sentences, total_words, total_syllables);

    let content_words: WordCounter = words
        .iter()
        .map(String::as_str)
        .filter(|w| !is_stopword(w))
        .collect();

    debug!(
        total_words,
        unique_words,
        total_sentences,
        total_syllables,
        content_words = content_words.len(),
        "analyzed text"
    );

    Analysis {
        total_words,
        unique_words,
        total_sentences,
        total_syllables,
        average_sentence_length,
        grade_level,
        ranked_words: content_words.ranked(),
    }
}

/// Computes the metrics record for a document.
#[tracing::instrument(level = "debug", skip(text), fields(text_len = text.len()))]
pub fn compute_metrics(text: &str) -> MetricsRecord {
    analyze(text).into_record()
}

/// Rounds to 2 decimal places, ties to even on the exact binary value.
///
/// Goes through decimal formatting, which is exact, so values such as
/// 1.125 become 1.12 and 2.675 (stored as 2.67499...) becomes 2.67.
pub fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_round2() {
        assert_eq!(round2(3.5), 3.5);
        assert_eq!(round2(0.0), 0.0);
        assert_eq!(round2(1.0 / 3.0), 0.33);
        assert_eq!(round2(2.0 / 3.0), 0.67);
        assert_eq!(round2(1.125), 1.12);
        assert_eq!(round2(1.375), 1.38);
        assert_eq!(round2(2.675), 2.67);
        assert_eq!(round2(-4.256), -4.26);
    }

    #[test]
    fn test_analysis_counts() {
        let analysis = analyze("Hello hello world. This is a test!");
        assert_eq!(analysis.total_words, 7);
        assert_eq!(analysis.unique_words, 6);
        assert_eq!(analysis.total_sentences, 2);
        assert_eq!(analysis.total_syllables, 9);
        assert_eq!(analysis.average_sentence_length, 3.5);
        assert_eq!(
            analysis.ranked_words,
            vec![
                WordCount::new("hello", 2),
                WordCount::new("world", 1),
                WordCount::new("test", 1)
            ]
        );
    }

    #[test]
    fn test_into_record_rounds() {
        let record = analyze("Hello hello world. This is a test!").into_record();
        assert_eq!(record.flesch_kincaid_grade_level, 0.95);
        assert_eq!(record.average_sentence_length, 3.5);
    }

    #[test]
    fn test_into_record_truncates_ranking() {
        let analysis = Analysis {
            ranked_words: (0..12).map(|i| WordCount::new(format!("w{i}"), 1)).collect(),
            ..Default::default()
        };
        assert_eq!(analysis.into_record().top_10_words.len(), TOP_WORDS_LIMIT);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(compute_metrics(""), MetricsRecord::default());
    }
}
