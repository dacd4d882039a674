use crate::key::PersonKey;
use snowball_scanner::ScanError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrawlError {
    #[error("failed to fetch page for {key}: {source}")]
    Transport {
        key: PersonKey,
        #[source]
        source: ScanError,
    },

    #[error("failed to fetch listing for letter '{letter}': {source}")]
    Listing {
        letter: char,
        #[source]
        source: ScanError,
    },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("fetch worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize graph: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("graph output is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, CrawlError>;
