pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::{fetcher::HttpArticleFetcher, storage::LocalStorage};
pub use crate::app::pipelines::ArticlePipeline;
pub use crate::config::{toml_config::TomlConfig, CliConfig};
pub use crate::core::{etl::BatchEngine, lexicon::Lexicon, scorer::ArticleScorer};
pub use crate::domain::model::{Article, FetchOutcome, ScoredRow, UrlEntry, OUTPUT_COLUMNS};
pub use crate::utils::error::{AnalyzerError, Result};
