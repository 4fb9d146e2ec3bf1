// ABOUTME: Flesch-Kincaid grade level formula.
// ABOUTME: Returns 0.0 when there are no sentences or no words.

/// Computes the Flesch-Kincaid grade level.
///
/// `0.39 * (words / sentences) + 11.8 * (syllables / words) - 15.59`
///
/// Returns 0.0 when `total_sentences` or `total_words` is zero.
pub fn flesch_kincaid_grade_level(
    total_sentences: u64,
    total_words: u64,
    total_syllables: u64,
) -> f64 {
    if total_sentences == 0 || total_words == 0 {
        return 0.0;
    }
    let sentences = total_sentences as f64;
    let words = total_words as f64;
    let syllables = total_syllables as f64;
    0.39 * (words / sentences) + 11.8 * (syllables / words) - 15.59
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_single_sentence() {
        let grade = flesch_kincaid_grade_level(1, 10, 10);
        assert!(approx(grade, 0.39 * 10.0 + 11.8 - 15.59));
    }

    #[test]
    fn test_multiple_sentences() {
        let grade = flesch_kincaid_grade_level(2, 20, 30);
        assert!(approx(grade, 0.39 * 10.0 + 11.8 * 1.5 - 15.59));
    }

    #[test]
    fn test_zero_guards() {
        assert_eq!(flesch_kincaid_grade_level(0, 10, 10), 0.0);
        assert_eq!(flesch_kincaid_grade_level(1, 0, 0), 0.0);
        assert_eq!(flesch_kincaid_grade_level(0, 0, 0), 0.0);
    }

    #[test]
    fn test_can_be_negative() {
        assert!(flesch_kincaid_grade_level(1, 1, 1) < 0.0);
    }
}
