// ABOUTME: Insertion-ordered word counter and the (word, count) pair type.
// ABOUTME: Ranking is a stable sort by count, so ties keep first-occurrence order.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A word and the number of times it occurred.
///
/// Serializes as a two-element `[word, count]` array.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(String, u64)", into = "(String, u64)")]
pub struct WordCount {
    pub word: String,
    pub count: u64,
}

impl WordCount {
    pub fn new(word: impl Into<String>, count: u64) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

impl From<(String, u64)> for WordCount {
    fn from((word, count): (String, u64)) -> Self {
        Self { word, count }
    }
}

impl From<WordCount> for (String, u64) {
    fn from(wc: WordCount) -> Self {
        (wc.word, wc.count)
    }
}

/// Counts words while remembering the order in which each was first seen.
#[derive(Debug, Clone, Default)]
pub struct WordCounter<'a> {
    slots: HashMap<&'a str, usize>,
    entries: Vec<(&'a str, u64)>,
}

impl<'a> WordCounter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one occurrence of `word`.
    pub fn add(&mut self, word: &'a str) {
        match self.slots.get(word) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.slots.insert(word, self.entries.len());
                self.entries.push((word, 1));
            }
        }
    }

    /// Returns the count for `word`, 0 if it was never added.
    pub fn get(&self, word: &str) -> u64 {
        self.slots
            .get(word)
            .map_or(0, |&slot| self.entries[slot].1)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every distinct word, most frequent first.
    pub fn ranked(&self) -> Vec<WordCount> {
        let mut ranked = self.entries.clone();
        // `sort_by` is stable: equal counts stay in first-seen order.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
            .into_iter()
            .map(|(word, count)| WordCount::new(word, count))
            .collect()
    }

    /// The `n` most frequent words.
    pub fn most_common(&self, n: usize) -> Vec<WordCount> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }
}

impl<'a> FromIterator<&'a str> for WordCounter<'a> {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut counter = WordCounter::new();
        for word in iter {
            counter.add(word);
        }
        counter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_counts_and_order() {
        let counter: WordCounter = ["b", "a", "b", "c", "a", "b"].into_iter().collect();
        assert_eq!(counter.len(), 3);
        assert_eq!(counter.get("b"), 3);
        assert_eq!(counter.get("zzz"), 0);
        assert_eq!(
            counter.ranked(),
            vec![
                WordCount::new("b", 3),
                WordCount::new("a", 2),
                WordCount::new("c", 1)
            ]
        );
    }

    #[test]
    fn test_ties_keep_first_occurrence_order() {
        let counter: WordCounter = ["zeta", "alpha", "mid", "alpha", "zeta", "omega"]
            .into_iter()
            .collect();
        assert_eq!(
            counter.most_common(10),
            vec![
                WordCount::new("zeta", 2),
                WordCount::new("alpha", 2),
                WordCount::new("mid", 1),
                WordCount::new("omega", 1)
            ]
        );
    }

    #[test]
    fn test_most_common_truncates() {
        let words: Vec<String> = (0..15).map(|i| format!("w{i}")).collect();
        let counter: WordCounter = words.iter().map(String::as_str).collect();
        let top = counter.most_common(10);
        assert_eq!(top.len(), 10);
        assert_eq!(top[0].word, "w0");
        assert_eq!(top[9].word, "w9");
    }

    #[test]
    fn test_empty_counter() {
        let counter = WordCounter::new();
        assert!(counter.is_empty());
        assert!(counter.most_common(10).is_empty());
    }

    #[test]
    fn test_word_count_serializes_as_pair() {
        let json = serde_json::to_string(&WordCount::new("hello", 2)).unwrap();
        assert_eq!(json, r#"["hello",2]"#);
        let back: WordCount = serde_json::from_str(&json).unwrap();
        assert_eq!(back, WordCount::new("hello", 2));
    }
}
