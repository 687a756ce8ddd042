use thiserror::Error;

pub type Result<T> = std::result::Result<T, GazetteerError>;

#[derive(Error, Debug)]
pub enum GazetteerError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("KML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Download of {url} failed: {message}")]
    Fetch { url: String, message: String },

    #[error("No entry ending in '{suffix}' found in archive")]
    EntryNotFound { suffix: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

impl From<config::ConfigError> for GazetteerError {
    fn from(err: config::ConfigError) -> Self {
        GazetteerError::Config(err.to_string())
    }
}
