use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong while resolving a single mod entry.
/// None of these abort the overall run; the fetch loop logs and moves on.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: StatusCode },

    #[error("malformed response from {url}: {source}")]
    Malformed {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("no file named {filename} in any listed version of project {project_id}")]
    NoMatchingFile { filename: String, project_id: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
