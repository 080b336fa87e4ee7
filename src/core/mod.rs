pub mod etl;
pub mod lexical;
pub mod lexicon;
pub mod readability;
pub mod scorer;
pub mod text_stats;
pub mod tokenizer;

pub use crate::domain::model::{Article, BatchResult, FetchOutcome, ScoredRow, UrlEntry};
pub use crate::domain::ports::{ArticleFetcher, ConfigProvider, Pipeline, Storage, TextStatistics};
pub use crate::utils::error::Result;
