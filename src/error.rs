//! Error types shared across the crate
//!
//! Two failure families matter to the user: bad input (`Usage`) and a
//! non-2xx answer from the remote API (`Remote`). Everything else is a
//! transport or local I/O failure wrapped verbatim.

use thiserror::Error;

/// Errors surfaced by the search/fetch/download pipeline
#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Usage(String),

    #[error("{message}")]
    Remote { status: u16, message: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to parse API response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Build the `Remote` variant for a non-success HTTP status.
    ///
    /// 401 carries a hint about generating an API key, 404 the URL that
    /// was requested, anything else the bare status code.
    pub fn from_status(status: u16, url: &str) -> Self {
        let message = match status {
            401 => format!(
                "Unauthorized API request: HTTP Error {status}\n\
                 Did you generate an API key from your account?\n\
                 https://www.steamgriddb.com/profile/preferences"
            ),
            404 => format!("Requested page was not found: HTTP Error {status}\n{url}"),
            _ => format!("HTTP Error: {status}"),
        };
        Error::Remote { status, message }
    }
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;
