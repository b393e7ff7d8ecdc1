use thiserror::Error;

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Unknown filter operator code: {code}")]
    UnknownOperator { code: String },

    #[error("Unknown sort order code: {code}")]
    UnknownSortOrder { code: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("URL error: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

impl QueryError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            QueryError::UnknownOperator { .. } => {
                "Use one of: eq, neq, gt, lt, gte, lte, contains, ncontains, null, notnull"
            }
            QueryError::UnknownSortOrder { .. } => "Use 'asc' or 'desc'",
            QueryError::IoError(_) => "Check that the file exists and is readable",
            QueryError::SerializationError(_) | QueryError::ConfigError { .. } => {
                "Check the configuration file syntax"
            }
            QueryError::UrlError(_) => "Pass an absolute URL such as https://api.example.com/items",
            QueryError::InvalidConfigValueError { .. } => {
                "Fix the reported configuration field and retry"
            }
            QueryError::ValidationError { .. } => "Fix the reported search parameter and retry",
        }
    }
}

pub type Result<T> = std::result::Result<T, QueryError>;
