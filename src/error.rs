use thiserror::Error;

/// Problems detected before any search call is made.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no snowclone pattern given; please specify a pattern with -p, e.g. -p \"X is the new *\"")]
    MissingPattern,
    #[error("no search API key; pass -k/--key or set SNOWCLONE_API_KEY")]
    MissingApiKey,
    #[error("no search engine id; pass -e/--engine or set SNOWCLONE_ENGINE_ID")]
    MissingEngineId,
}

/// Failure of a single page request. Absorbed by the fetcher.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(reqwest::Error),
    #[error("search API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed search response: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// The request URL carries the API key, so it never reaches the message.
impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Request(err.without_url())
    }
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error("every page fetch failed ({pages} pages); no results to report")]
    AllPagesFailed { pages: usize },
}
