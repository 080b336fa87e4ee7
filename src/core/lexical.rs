use crate::core::tokenizer;
use crate::domain::model::LexicalScores;
use std::collections::HashSet;

pub const EPSILON: f64 = 0.000001;

pub fn positive_score(text: &str, positive_words: &HashSet<String>) -> usize {
    count_matches(text, positive_words)
}

pub fn negative_score(text: &str, negative_words: &HashSet<String>) -> usize {
    count_matches(text, negative_words)
}

pub fn polarity_score(positive: usize, negative: usize) -> f64 {
    (positive as f64 - negative as f64) / ((positive + negative) as f64 + EPSILON)
}

pub fn subjectivity_score(text: &str, positive: usize, negative: usize) -> f64 {
    let words = tokenizer::word_count(text);
    (positive + negative) as f64 / (words as f64 + EPSILON)
}

pub fn score(text: &str, positive_words: &HashSet<String>, negative_words: &HashSet<String>) -> LexicalScores {
    let positive = positive_score(text, positive_words);
    let negative = negative_score(text, negative_words);

    LexicalScores {
        positive,
        negative,
        polarity: polarity_score(positive, negative),
        subjectivity: subjectivity_score(text, positive, negative),
    }
}

fn count_matches(text: &str, words: &HashSet<String>) -> usize {
    let lowered = text.to_lowercase();
    tokenizer::tokens(&lowered)
        .filter(|token| words.contains(*token))
        .count()
}
