//! API payload types
//!
//! Response structs for the SteamGridDB v2 endpoints, plus the text block
//! used whenever a game record is shown to the user.

use chrono::DateTime;
use serde::Deserialize;
use std::fmt;

/// Envelope wrapping every API response: `{"success": bool, "data": ...}`
#[derive(Debug, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(default)]
    pub data: serde_json::Value,
}

/// One game entry from the catalog
#[derive(Debug, Clone, Deserialize)]
pub struct GameRecord {
    /// Catalog ID, the join key for all artwork endpoints
    pub id: u64,
    pub name: String,
    /// Unix timestamp; absent for unreleased titles
    #[serde(default)]
    pub release_date: Option<i64>,
    /// Store platforms the game is known on (e.g. "steam", "gog")
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub verified: bool,
}

impl fmt::Display for GameRecord {
    /// Render the five-line summary block shown by `search` and before
    /// every artwork download.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let released = match self.release_date {
            Some(ts) => DateTime::from_timestamp(ts, 0)
                .map(|dt| dt.format("%m-%Y").to_string())
                .unwrap_or_else(|| ".".to_string()),
            None => ".".to_string(),
        };

        writeln!(f, "Title: {}", self.name)?;
        writeln!(f, "Released: {}", released)?;
        writeln!(f, "ID: {}", self.id)?;
        writeln!(f, "Stores: {}", self.types.join(", "))?;
        write!(f, "Verified: {}", self.verified)
    }
}

/// One artwork entry from a grids/heroes/logos/icons collection
#[derive(Debug, Clone, Deserialize)]
pub struct ImageRecord {
    pub id: u64,
    /// Community score; the server already sorts by relevance
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub nsfw: bool,
    /// Full-resolution image URL
    pub url: String,
    /// Thumbnail URL
    pub thumb: String,
}
