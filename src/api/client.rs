//! SteamGridDB HTTP client
//!
//! One authenticated blocking client for the JSON endpoints plus a plain
//! binary fetch for image CDN URLs. Non-2xx statuses are mapped to
//! [`Error::Remote`] immediately; there are no retries.

use std::time::Duration;

use crate::config::Config;
use crate::error::{Error, Result};

/// Request timeout for API and image downloads
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking client bound to one API base URL and key
pub struct Client {
    http: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
}

impl Client {
    /// Build a client from an explicit configuration.
    pub fn new(config: Config) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!(
                "griddl/",
                env!("CARGO_PKG_VERSION"),
                " +https://github.com/dani/griddl"
            ))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
        })
    }

    /// The API root this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Authenticated GET of `<base>/<path>`, parsed as JSON.
    ///
    /// `params` become query parameters as-is; callers omit a pair to
    /// leave the server default in effect.
    pub fn get_json(&self, path: &str, params: &[(&str, &str)]) -> Result<serde_json::Value> {
        let url = format!("{}/{}", self.base_url, path);
        log::debug!("GET {} params={:?}", url, params);

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.api_key)
            .query(params)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            // The resolved URL includes the query string, useful in the 404 case
            let final_url = response.url().to_string();
            log::debug!("API error {} for {}", status, final_url);
            return Err(Error::from_status(status.as_u16(), &final_url));
        }

        Ok(response.json()?)
    }

    /// Unauthenticated GET of an absolute URL, returning the raw bytes.
    ///
    /// Used for the image CDN; the same status mapping applies.
    pub fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        log::debug!("GET {}", url);

        let response = self.http.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::from_status(status.as_u16(), url));
        }

        Ok(response.bytes()?.to_vec())
    }
}
