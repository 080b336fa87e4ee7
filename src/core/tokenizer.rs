use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

// \w 為 Unicode 字元類別，與字詞邊界一起使用
static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w+\b").expect("valid word pattern"));

/// Lazily yields every maximal run of word characters in `text`.
pub fn tokens(text: &str) -> impl Iterator<Item = &str> {
    WORD_RE.find_iter(text).map(|m| m.as_str())
}

pub fn word_count(text: &str) -> usize {
    tokens(text).count()
}

/// Lower-cases, tokenizes and drops stop words, rejoining the survivors with
/// single spaces. All scoring runs on this output.
pub fn remove_stopwords(text: &str, stop_words: &HashSet<String>) -> String {
    let lowered = text.to_lowercase();
    tokens(&lowered)
        .filter(|word| !stop_words.contains(*word))
        .collect::<Vec<_>>()
        .join(" ")
}
