use serde::{Deserialize, Serialize};

pub const NO_TITLE: &str = "No Title Found";
pub const NO_CONTENT: &str = "No Content Found";

/// 輸出表格欄位，順序固定
pub const OUTPUT_COLUMNS: [&str; 14] = [
    "URL_ID",
    "URL",
    "POSITIVE SCORE",
    "NEGATIVE SCORE",
    "POLARITY SCORE",
    "SUBJECTIVITY SCORE",
    "AVG SENTENCE LENGTH",
    "PERCENTAGE OF COMPLEX WORDS",
    "FOG INDEX",
    "AVG NUMBER OF WORDS PER SENTENCE",
    "COMPLEX WORD COUNT",
    "WORD COUNT",
    "SYLLABLE PER WORD",
    "AVG WORD LENGTH",
];

/// One row of the input table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlEntry {
    pub url_id: String,
    pub url: String,
}

/// Result of fetching one article. Both variants end up as a row; the split
/// only exists so failures can be logged apart from empty pages.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Fetched { title: String, body: String },
    Failed { reason: String },
}

impl FetchOutcome {
    pub fn text(&self) -> String {
        match self {
            FetchOutcome::Fetched { title, body } => format!("{}\n{}", title, body),
            FetchOutcome::Failed { .. } => String::new(),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FetchOutcome::Failed { .. })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub url_id: String,
    pub url: String,
    pub outcome: FetchOutcome,
    pub text: String,
}

impl Article {
    pub fn new(entry: UrlEntry, outcome: FetchOutcome) -> Self {
        let text = outcome.text();
        Self {
            url_id: entry.url_id,
            url: entry.url,
            outcome,
            text,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LexicalScores {
    pub positive: usize,
    pub negative: usize,
    pub polarity: f64,
    pub subjectivity: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityScores {
    pub avg_sentence_length: f64,
    pub percentage_complex_words: f64,
    pub fog_index: f64,
    pub complex_word_count: usize,
    pub word_count: usize,
    pub syllables_per_word: f64,
    pub avg_word_length: f64,
}

/// 每篇文章一列，欄位名稱與輸出表頭一致
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRow {
    #[serde(rename = "URL_ID")]
    pub url_id: String,
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "POSITIVE SCORE")]
    pub positive_score: usize,
    #[serde(rename = "NEGATIVE SCORE")]
    pub negative_score: usize,
    #[serde(rename = "POLARITY SCORE")]
    pub polarity_score: f64,
    #[serde(rename = "SUBJECTIVITY SCORE")]
    pub subjectivity_score: f64,
    #[serde(rename = "AVG SENTENCE LENGTH")]
    pub avg_sentence_length: f64,
    #[serde(rename = "PERCENTAGE OF COMPLEX WORDS")]
    pub percentage_complex_words: f64,
    #[serde(rename = "FOG INDEX")]
    pub fog_index: f64,
    #[serde(rename = "AVG NUMBER OF WORDS PER SENTENCE")]
    pub avg_words_per_sentence: f64,
    #[serde(rename = "COMPLEX WORD COUNT")]
    pub complex_word_count: usize,
    #[serde(rename = "WORD COUNT")]
    pub word_count: usize,
    #[serde(rename = "SYLLABLE PER WORD")]
    pub syllable_per_word: f64,
    #[serde(rename = "AVG WORD LENGTH")]
    pub avg_word_length: f64,
}

impl ScoredRow {
    pub fn new(
        url_id: impl Into<String>,
        url: impl Into<String>,
        lexical: LexicalScores,
        readability: ReadabilityScores,
    ) -> Self {
        Self {
            url_id: url_id.into(),
            url: url.into(),
            positive_score: lexical.positive,
            negative_score: lexical.negative,
            polarity_score: lexical.polarity,
            subjectivity_score: lexical.subjectivity,
            avg_sentence_length: readability.avg_sentence_length,
            percentage_complex_words: readability.percentage_complex_words,
            fog_index: readability.fog_index,
            // 兩個欄位同值，保留給既有報表格式
            avg_words_per_sentence: readability.avg_sentence_length,
            complex_word_count: readability.complex_word_count,
            word_count: readability.word_count,
            syllable_per_word: readability.syllables_per_word,
            avg_word_length: readability.avg_word_length,
        }
    }

    /// 依 OUTPUT_COLUMNS 順序輸出的欄位值
    pub fn to_record(&self) -> Vec<String> {
        vec![
            self.url_id.clone(),
            self.url.clone(),
            self.positive_score.to_string(),
            self.negative_score.to_string(),
            self.polarity_score.to_string(),
            self.subjectivity_score.to_string(),
            self.avg_sentence_length.to_string(),
            self.percentage_complex_words.to_string(),
            self.fog_index.to_string(),
            self.avg_words_per_sentence.to_string(),
            self.complex_word_count.to_string(),
            self.word_count.to_string(),
            self.syllable_per_word.to_string(),
            self.avg_word_length.to_string(),
        ]
    }
}

#[derive(Debug, Clone, Default)]
pub struct BatchResult {
    pub rows: Vec<ScoredRow>,
    pub fetched: usize,
    pub failed: usize,
}
