// ABOUTME: Heuristic English syllable estimator.
// ABOUTME: Counts vowel groups with a silent-e adjustment; never returns less than 1.

const VOWELS: &str = "aeiouy";

/// Estimates the number of syllables in a word.
///
/// Every transition into a vowel (`a e i o u y`) starts a syllable. A
/// trailing `e` removes one when more than one was counted. The result is
/// at least 1, including for the empty string.
///
/// This is an approximation ("queue" counts as 1) and is kept that way so
/// scores stay comparable with previously stored results.
pub fn count_syllables(word: &str) -> u32 {
    let word = word.to_lowercase();
    let mut syllables = 0u32;
    let mut prev_was_vowel = false;

    for c in word.chars() {
        let is_vowel = VOWELS.contains(c);
        if is_vowel && !prev_was_vowel {
            syllables += 1;
        }
        prev_was_vowel = is_vowel;
    }

    if word.ends_with('e') && syllables > 1 {
        syllables -= 1;
    }

    syllables.max(1)
}
