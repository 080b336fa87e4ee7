use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Spreadsheet read error: {0}")]
    SpreadsheetReadError(#[from] calamine::Error),

    #[error("Spreadsheet write error: {0}")]
    SpreadsheetWriteError(#[from] rust_xlsxwriter::XlsxError),

    #[error("Failed to load lexicon from '{path}': {source}")]
    LexiconError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Input table '{path}' is missing required column '{column}'")]
    MissingColumnError { path: String, column: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AnalyzerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AnalyzerError::HttpError(_) => ErrorCategory::Network,
            AnalyzerError::CsvError(_)
            | AnalyzerError::SerializationError(_)
            | AnalyzerError::SpreadsheetReadError(_)
            | AnalyzerError::SpreadsheetWriteError(_)
            | AnalyzerError::MissingColumnError { .. } => ErrorCategory::Data,
            AnalyzerError::MissingConfigError { .. }
            | AnalyzerError::InvalidConfigValueError { .. }
            | AnalyzerError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            AnalyzerError::IoError(_) | AnalyzerError::LexiconError { .. } => {
                ErrorCategory::System
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AnalyzerError::HttpError(_) => ErrorSeverity::Medium,
            AnalyzerError::CsvError(_)
            | AnalyzerError::SerializationError(_)
            | AnalyzerError::SpreadsheetReadError(_)
            | AnalyzerError::SpreadsheetWriteError(_)
            | AnalyzerError::MissingColumnError { .. }
            | AnalyzerError::MissingConfigError { .. }
            | AnalyzerError::InvalidConfigValueError { .. }
            | AnalyzerError::ConfigValidationError { .. } => ErrorSeverity::High,
            // 沒有詞典就無法評分
            AnalyzerError::IoError(_) | AnalyzerError::LexiconError { .. } => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            AnalyzerError::HttpError(_) => {
                "Check network connectivity and that the article URL is reachable".to_string()
            }
            AnalyzerError::CsvError(_) => {
                "Make sure the input file is valid CSV with a header row".to_string()
            }
            AnalyzerError::IoError(_) => {
                "Check that the paths exist and the process has read/write permission".to_string()
            }
            AnalyzerError::SerializationError(_) => {
                "Try a different output format (csv or tsv)".to_string()
            }
            AnalyzerError::SpreadsheetReadError(_) => {
                "Make sure the input workbook opens in a spreadsheet application, or export it as CSV"
                    .to_string()
            }
            AnalyzerError::SpreadsheetWriteError(_) => {
                "Try a different output format (csv or tsv)".to_string()
            }
            AnalyzerError::LexiconError { path, .. } => format!(
                "Make sure '{}' exists and is readable; positive, negative and stop-word lists are required",
                path
            ),
            AnalyzerError::MissingColumnError { column, .. } => {
                format!("Add a '{}' column to the input header", column)
            }
            AnalyzerError::MissingConfigError { field } => {
                format!("Set '{}' in the configuration", field)
            }
            AnalyzerError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the configuration", field)
            }
            AnalyzerError::ConfigValidationError { field, .. } => {
                format!("Review the '{}' section of the configuration file", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Network problem: {}", self),
            ErrorCategory::Data => format!("Data problem: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::System => format!("System problem: {}", self),
        }
    }

    /// 依嚴重程度對應的結束碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;
