//! Default [`TextStatistics`] implementation.
//!
//! Syllables are estimated from vowel groups with a silent-`e` adjustment;
//! any non-empty token has at least one.
//! Sentence handling follows the usual readability-tool conventions: text is
//! split on runs of terminal punctuation, fragments of two words or fewer are
//! not counted, and there is always at least one sentence.

use crate::core::tokenizer;
use crate::domain::ports::TextStatistics;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static SENTENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[^.!?]+[.!?]*").expect("valid sentence pattern"));

/// Words at or above this many syllables are "difficult" for the fog index.
pub const FOG_SYLLABLE_THRESHOLD: usize = 3;

#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicTextStats;

impl HeuristicTextStats {
    pub fn new() -> Self {
        Self
    }
}

impl TextStatistics for HeuristicTextStats {
    fn syllable_count(&self, word: &str) -> usize {
        let lowered = word.to_lowercase();
        if lowered.is_empty() {
            return 0;
        }

        let mut count = 0;
        let mut prev_was_vowel = false;
        for ch in lowered.chars() {
            let is_vowel = matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
            if is_vowel && !prev_was_vowel {
                count += 1;
            }
            prev_was_vowel = is_vowel;
        }

        // 字尾不發音的 e，但 -le 仍自成音節
        if count > 1 && lowered.ends_with('e') && !lowered.ends_with("le") {
            count -= 1;
        }

        count.max(1)
    }

    fn sentence_count(&self, text: &str) -> usize {
        let sentences: Vec<&str> = SENTENCE_RE.find_iter(text).map(|m| m.as_str()).collect();
        let ignored = sentences
            .iter()
            .filter(|sentence| tokenizer::word_count(sentence) <= 2)
            .count();
        (sentences.len() - ignored).max(1)
    }

    fn avg_sentence_length(&self, text: &str) -> f64 {
        let words = tokenizer::word_count(text);
        if words == 0 {
            return 0.0;
        }
        round_to(words as f64 / self.sentence_count(text) as f64, 1)
    }

    fn gunning_fog(&self, text: &str) -> f64 {
        let words: Vec<&str> = tokenizer::tokens(text).collect();
        if words.is_empty() {
            return 0.0;
        }

        // 重複出現的難字只算一次
        let difficult: HashSet<String> = words
            .iter()
            .map(|word| word.to_lowercase())
            .filter(|word| self.syllable_count(word) >= FOG_SYLLABLE_THRESHOLD)
            .collect();
        let per_difficult = difficult.len() as f64 / words.len() as f64 * 100.0;
        round_to(0.4 * (self.avg_sentence_length(text) + per_difficult), 2)
    }
}

fn round_to(value: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    (value * factor).round() / factor
}
