pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "article-metrics"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Sentiment and readability metrics for a list of article URLs")
)]
pub struct CliConfig {
    /// CSV, TSV or workbook (.xlsx, .xls, .ods) with URL_ID and URL columns
    #[cfg_attr(feature = "cli", arg(long, default_value = "Input.csv"))]
    pub input_file: String,

    /// Directory the output table and article files are written under
    #[cfg_attr(feature = "cli", arg(long, default_value = "."))]
    pub output_path: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = "Output_Data_Structure"))]
    pub output_filename: String,

    /// Comma-separated list of csv, tsv, json, xlsx; the first is reported
    #[cfg_attr(feature = "cli", arg(long, value_delimiter = ',', default_value = "csv"))]
    pub output_formats: Vec<String>,

    #[cfg_attr(feature = "cli", arg(long, default_value = "articles"))]
    pub articles_dir: String,

    #[cfg_attr(
        feature = "cli",
        arg(long, default_value = "MasterDictionary/positive-words.txt")
    )]
    pub positive_words: String,

    #[cfg_attr(
        feature = "cli",
        arg(long, default_value = "MasterDictionary/negative-words.txt")
    )]
    pub negative_words: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = "StopWords"))]
    pub stop_words_dir: String,

    /// Per-request timeout; no timeout when omitted
    #[cfg_attr(feature = "cli", arg(long))]
    pub request_timeout_seconds: Option<u64>,

    #[cfg_attr(feature = "cli", arg(long))]
    pub user_agent: Option<String>,

    #[cfg_attr(feature = "cli", arg(long, help = "Enable verbose output"))]
    pub verbose: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Log CPU and memory usage per phase"))]
    pub monitor: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            input_file: "Input.csv".to_string(),
            output_path: ".".to_string(),
            output_filename: "Output_Data_Structure".to_string(),
            output_formats: vec!["csv".to_string()],
            articles_dir: "articles".to_string(),
            positive_words: "MasterDictionary/positive-words.txt".to_string(),
            negative_words: "MasterDictionary/negative-words.txt".to_string(),
            stop_words_dir: "StopWords".to_string(),
            request_timeout_seconds: None,
            user_agent: None,
            verbose: false,
            monitor: false,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn input_file(&self) -> &str {
        &self.input_file
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_filename(&self) -> &str {
        &self.output_filename
    }

    fn output_formats(&self) -> &[String] {
        &self.output_formats
    }

    fn articles_dir(&self) -> &str {
        &self.articles_dir
    }

    fn positive_words(&self) -> &str {
        &self.positive_words
    }

    fn negative_words(&self) -> &str {
        &self.negative_words
    }

    fn stop_words_dir(&self) -> &str {
        &self.stop_words_dir
    }

    fn request_timeout_seconds(&self) -> Option<u64> {
        self.request_timeout_seconds
    }

    fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_paths(self)
    }
}

/// 兩種設定來源共用的路徑與格式檢查
pub fn validate_paths<C: ConfigProvider>(config: &C) -> Result<()> {
    validation::validate_path("input_file", config.input_file())?;
    validation::validate_path("output_path", config.output_path())?;
    validation::validate_file_stem("output_filename", config.output_filename())?;
    validation::validate_output_formats("output_formats", config.output_formats())?;
    validation::validate_path("articles_dir", config.articles_dir())?;
    validation::validate_path("positive_words", config.positive_words())?;
    validation::validate_path("negative_words", config.negative_words())?;
    validation::validate_path("stop_words_dir", config.stop_words_dir())?;
    if let Some(user_agent) = config.user_agent() {
        validation::validate_non_empty_string("user_agent", user_agent)?;
    }
    Ok(())
}
