use crate::core::ConfigProvider;
use crate::utils::error::{AnalyzerError, Result};
use crate::utils::validation::Validate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

static ENV_VAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern"));

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub input: InputConfig,
    pub lexicon: LexiconConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
    pub output: OutputConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconConfig {
    pub positive_words: String,
    pub negative_words: String,
    pub stop_words_dir: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FetchConfig {
    pub timeout_seconds: Option<u64>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub output_path: String,
    #[serde(default = "default_filename")]
    pub filename: String,
    #[serde(default = "default_formats")]
    pub formats: Vec<String>,
    #[serde(default = "default_articles_dir")]
    pub articles_dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
    pub log_format: Option<String>,
}

fn default_filename() -> String {
    "Output_Data_Structure".to_string()
}

fn default_formats() -> Vec<String> {
    vec!["csv".to_string()]
}

fn default_articles_dir() -> String {
    "articles".to_string()
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AnalyzerError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| AnalyzerError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${LEXICON_DIR})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_RE
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .to_string()
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }

    pub fn json_logs(&self) -> bool {
        self.monitoring
            .as_ref()
            .and_then(|m| m.log_format.as_deref())
            .map(|format| format == "json")
            .unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn input_file(&self) -> &str {
        &self.input.file
    }

    fn output_path(&self) -> &str {
        &self.output.output_path
    }

    fn output_filename(&self) -> &str {
        &self.output.filename
    }

    fn output_formats(&self) -> &[String] {
        &self.output.formats
    }

    fn articles_dir(&self) -> &str {
        &self.output.articles_dir
    }

    fn positive_words(&self) -> &str {
        &self.lexicon.positive_words
    }

    fn negative_words(&self) -> &str {
        &self.lexicon.negative_words
    }

    fn stop_words_dir(&self) -> &str {
        &self.lexicon.stop_words_dir
    }

    fn request_timeout_seconds(&self) -> Option<u64> {
        self.fetch.timeout_seconds
    }

    fn user_agent(&self) -> Option<&str> {
        self.fetch.user_agent.as_deref()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        crate::config::validate_paths(self)?;

        if let Some(format) = self.monitoring.as_ref().and_then(|m| m.log_format.as_deref()) {
            if format != "json" && format != "compact" {
                return Err(AnalyzerError::InvalidConfigValueError {
                    field: "monitoring.log_format".to_string(),
                    value: format.to_string(),
                    reason: "Valid formats: compact, json".to_string(),
                });
            }
        }
        Ok(())
    }
}
