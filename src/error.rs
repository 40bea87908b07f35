//! Error types for fetching and extraction

use std::time::Duration;

use thiserror::Error;

/// Failure while obtaining the search page
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} timed out after {}s", .after.as_secs())]
    Timeout { url: String, after: Duration },

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },

    #[error("HTTP {status} for {url}")]
    Status { status: u16, url: String },

    #[error("failed to read {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },
}

/// Failure while turning markup into listings
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("invalid CSS selector `{selector}`: {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("listing has no title")]
    MissingTitle,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error("invalid search URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("failed to parse plan JSON: {0}")]
    Plan(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
