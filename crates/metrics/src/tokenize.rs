// ABOUTME: Word and sentence tokenizers used by the metrics engine.
// ABOUTME: Words are lowercase [A-Za-z']+ runs; sentences are trimmed spans between [.!?]+ runs.

use once_cell::sync::Lazy;
use regex::Regex;

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z']+").unwrap());
static SENTENCE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

/// Splits text into lowercase word tokens in reading order.
///
/// The whole text is lowercased before matching, so a character whose
/// lowercase form is an ASCII letter (the Kelvin sign, for instance) is
/// picked up as that letter. Apostrophes belong to the token they touch, and
/// a run of apostrophes on its own is still a token.
pub fn tokenize_words(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_RE
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Splits text into sentence spans.
///
/// Any run of `.`, `!` or `?` ends a sentence. Spans keep their original
/// casing, are trimmed, and are dropped when nothing is left after trimming.
pub fn tokenize_sentences(text: &str) -> Vec<String> {
    SENTENCE_RE
        .split(text)
        .map(trim_span)
        .filter(|span| !span.is_empty())
        .map(str::to_string)
        .collect()
}

fn trim_span(span: &str) -> &str {
    span.trim_matches(is_strip_char)
}

// Unicode whitespace plus the ASCII file/group/record/unit separators.
fn is_strip_char(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\u{1c}'..='\u{1f}')
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_words_lowercased_and_split_on_punctuation() {
        assert_eq!(tokenize_words("Hello, world!"), vec!["hello", "world"]);
    }

    #[test]
    fn test_words_keep_apostrophes() {
        assert_eq!(tokenize_words("It's a test."), vec!["it's", "a", "test"]);
        assert_eq!(tokenize_words("'quoted'"), vec!["'quoted'"]);
    }

    #[test]
    fn test_words_bare_apostrophes_are_tokens() {
        assert_eq!(tokenize_words("rock ' n '' roll"), vec!["rock", "'", "n", "''", "roll"]);
    }

    #[test]
    fn test_words_digits_and_non_ascii_are_delimiters() {
        assert_eq!(tokenize_words("abc123def"), vec!["abc", "def"]);
        assert_eq!(tokenize_words("café"), vec!["caf"]);
        assert_eq!(tokenize_words("naïve"), vec!["na", "ve"]);
    }

    #[test]
    fn test_words_lowercasing_happens_before_matching() {
        // U+212A KELVIN SIGN lowercases to ASCII 'k'.
        assert_eq!(tokenize_words("\u{212A}ilo"), vec!["kilo"]);
    }

    #[test]
    fn test_words_empty() {
        assert!(tokenize_words("").is_empty());
        assert!(tokenize_words("123 ... !!!").is_empty());
    }

    #[test]
    fn test_sentences_basic() {
        assert_eq!(
            tokenize_sentences("Hello world. This is a test!"),
            vec!["Hello world", "This is a test"]
        );
        assert_eq!(tokenize_sentences("One? Two! Three."), vec!["One", "Two", "Three"]);
    }

    #[test]
    fn test_sentences_punctuation_runs_collapse() {
        assert_eq!(tokenize_sentences("Wait... What?!  Really"), vec!["Wait", "What", "Really"]);
    }

    #[test]
    fn test_sentences_without_terminal_punctuation() {
        assert_eq!(tokenize_sentences("No punctuation"), vec!["No punctuation"]);
        assert_eq!(tokenize_sentences("  padded  \n"), vec!["padded"]);
    }

    #[test]
    fn test_sentences_empty_spans_discarded() {
        assert!(tokenize_sentences("").is_empty());
        assert!(tokenize_sentences("   ").is_empty());
        assert!(tokenize_sentences("?!. \t ...").is_empty());
    }

    #[test]
    fn test_sentences_trim_information_separators() {
        assert_eq!(tokenize_sentences("\u{1f}One.\u{1c}"), vec!["One"]);
    }
}
