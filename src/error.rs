use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("HTTP {status} from {url}")]
    HttpStatus { url: String, status: StatusCode },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Selector error: {0}")]
    Selector(String),
    #[error("Source {source_name} failed: {reason}")]
    Source { source_name: String, reason: String },
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
