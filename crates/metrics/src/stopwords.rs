// ABOUTME: Fixed English stopword table excluded from word-frequency ranking.
// ABOUTME: Lookups are exact; tokens reaching the table are already lowercase.

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Words left out of the top-words ranking.
///
/// `"I"` is stored capitalised. Tokens are lowercased before lookup, so it
/// never matches and `"i"` is ranked like any other word.
pub const STOPWORD_LIST: [&str; 46] = [
    "a", "an", "the", "and", "or", "but", "if", "in", "on", "with", "to", "of", "for", "at", "by",
    "from", "up", "down", "is", "are", "was", "were", "be", "been", "being", "he", "she", "it",
    "they", "them", "his", "her", "their", "that", "this", "these", "those", "you", "your",
    "yours", "I", "we", "us", "me", "my", "mine",
];

static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| STOPWORD_LIST.into_iter().collect());

/// Returns true if the token is in the stopword table.
pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_no_duplicates() {
        assert_eq!(STOPWORDS.len(), STOPWORD_LIST.len());
    }

    #[test]
    fn test_common_words() {
        for word in ["a", "the", "and", "is", "this", "mine"] {
            assert!(is_stopword(word), "{word} should be a stopword");
        }
    }

    #[test]
    fn test_content_words_pass() {
        for word in ["hello", "test", "document", "it's", "'"] {
            assert!(!is_stopword(word), "{word} should not be a stopword");
        }
    }

    #[test]
    fn test_lookup_is_exact() {
        assert!(!is_stopword("The"));
        assert!(is_stopword("I"));
        assert!(!is_stopword("i"));
    }
}
