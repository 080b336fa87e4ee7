use crate::core::tokenizer;
use crate::domain::model::ReadabilityScores;
use crate::domain::ports::TextStatistics;

/// Tokens with more syllables than this are complex words.
pub const COMPLEX_SYLLABLE_THRESHOLD: usize = 2;

pub fn count_complex_words(text: &str, stats: &dyn TextStatistics) -> usize {
    tokenizer::tokens(text)
        .filter(|word| stats.syllable_count(word) > COMPLEX_SYLLABLE_THRESHOLD)
        .count()
}

pub fn syllables_per_word(text: &str, stats: &dyn TextStatistics) -> f64 {
    let (syllables, words) = tokenizer::tokens(text)
        .fold((0usize, 0usize), |(syllables, words), word| {
            (syllables + stats.syllable_count(word), words + 1)
        });
    if words == 0 {
        return 0.0;
    }
    syllables as f64 / words as f64
}

pub fn avg_word_length(text: &str) -> f64 {
    let (chars, words) = tokenizer::tokens(text)
        .fold((0usize, 0usize), |(chars, words), word| {
            (chars + word.chars().count(), words + 1)
        });
    if words == 0 {
        return 0.0;
    }
    chars as f64 / words as f64
}

/// Scores already stopword-filtered text. When it holds no tokens the five
/// ratio metrics stay at zero.
pub fn score(text: &str, stats: &dyn TextStatistics) -> ReadabilityScores {
    let word_count = tokenizer::word_count(text);
    let complex_word_count = count_complex_words(text, stats);

    let mut scores = ReadabilityScores {
        complex_word_count,
        word_count,
        ..Default::default()
    };

    if word_count > 0 {
        scores.percentage_complex_words = complex_word_count as f64 / word_count as f64 * 100.0;
        scores.fog_index = stats.gunning_fog(text);
        scores.avg_sentence_length = stats.avg_sentence_length(text);
        scores.syllables_per_word = syllables_per_word(text, stats);
        scores.avg_word_length = avg_word_length(text);
    }

    scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::text_stats::HeuristicTextStats;

    #[test]
    fn test_avg_word_length() {
        assert_eq!(avg_word_length("ab abc"), 2.5);
        assert_eq!(avg_word_length(""), 0.0);
    }

    #[test]
    fn test_complex_words() {
        let stats = HeuristicTextStats::new();
        // beautiful(3) education(4) table(2) cat(1)
        assert_eq!(count_complex_words("beautiful education table cat", &stats), 2);
    }

    #[test]
    fn test_syllables_per_word() {
        let stats = HeuristicTextStats::new();
        // cat(1) + table(2) + beautiful(3) = 6 / 3
        assert_eq!(syllables_per_word("cat table beautiful", &stats), 2.0);
        assert_eq!(syllables_per_word("", &stats), 0.0);
    }

    #[test]
    fn test_zero_tokens_scores_zero() {
        let stats = HeuristicTextStats::new();
        let scores = score("", &stats);
        assert_eq!(scores, ReadabilityScores::default());
        assert_eq!(scores.avg_sentence_length, 0.0);
        assert_eq!(scores.percentage_complex_words, 0.0);
        assert_eq!(scores.fog_index, 0.0);
        assert_eq!(scores.syllables_per_word, 0.0);
        assert_eq!(scores.avg_word_length, 0.0);
    }

    #[test]
    fn test_score_filtered_stream() {
        let stats = HeuristicTextStats::new();
        let scores = score("beautiful education table cat", &stats);
        assert_eq!(scores.word_count, 4);
        assert_eq!(scores.complex_word_count, 2);
        assert_eq!(scores.percentage_complex_words, 50.0);
        // 沒有標點，整段視為一句
        assert_eq!(scores.avg_sentence_length, 4.0);
        assert!((scores.fog_index - 21.6).abs() < 1e-9);
        assert_eq!(scores.syllables_per_word, 2.5);
        assert_eq!(scores.avg_word_length, 6.5);
    }
}
