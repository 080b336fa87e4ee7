use crate::core::lexicon::Lexicon;
use crate::core::text_stats::HeuristicTextStats;
use crate::core::{lexical, readability, tokenizer};
use crate::domain::model::{Article, ScoredRow};
use crate::domain::ports::TextStatistics;

/// Turns article text into a [`ScoredRow`]. Holds only borrowed, read-only
/// state so it can be reused across the whole batch.
pub struct ArticleScorer<'a, T: TextStatistics = HeuristicTextStats> {
    lexicon: &'a Lexicon,
    stats: T,
}

impl<'a> ArticleScorer<'a, HeuristicTextStats> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self {
            lexicon,
            stats: HeuristicTextStats::new(),
        }
    }
}

impl<'a, T: TextStatistics> ArticleScorer<'a, T> {
    pub fn with_stats(lexicon: &'a Lexicon, stats: T) -> Self {
        Self { lexicon, stats }
    }

    pub fn clean(&self, text: &str) -> String {
        tokenizer::remove_stopwords(text, &self.lexicon.stop_words)
    }

    pub fn score_text(&self, url_id: &str, url: &str, text: &str) -> ScoredRow {
        let cleaned = self.clean(text);
        let lexical = lexical::score(&cleaned, &self.lexicon.positive, &self.lexicon.negative);
        let readability = readability::score(&cleaned, &self.stats);

        tracing::debug!(
            "Scored {}: {} words, +{} / -{}",
            url_id,
            readability.word_count,
            lexical.positive,
            lexical.negative
        );
        ScoredRow::new(url_id, url, lexical, readability)
    }

    pub fn score(&self, article: &Article) -> ScoredRow {
        self.score_text(&article.url_id, &article.url, &article.text)
    }
}
