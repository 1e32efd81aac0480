//! Artwork retrieval
//!
//! Categories map one-to-one onto the API's image collections and onto
//! local subdirectory names. Filter values are validated before anything
//! touches the network; `any` means "send no parameter at all".

use crate::api::client::Client;
use crate::api::types::{ApiResponse, ImageRecord};
use crate::error::{Error, Result};

/// The four artwork collections the API serves per game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtworkCategory {
    Grid,
    Hero,
    Logo,
    Icon,
}

impl ArtworkCategory {
    /// Collection name used in the endpoint path and as the local
    /// subdirectory name.
    pub fn collection(&self) -> &'static str {
        match self {
            ArtworkCategory::Grid => "grids",
            ArtworkCategory::Hero => "heroes",
            ArtworkCategory::Logo => "logos",
            ArtworkCategory::Icon => "icons",
        }
    }

    /// Endpoint path for a game's collection.
    pub fn endpoint(&self, game_id: u64) -> String {
        format!("{}/game/{}", self.collection(), game_id)
    }
}

/// Tri-state adult-content filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NsfwFilter {
    True,
    False,
    Any,
}

impl NsfwFilter {
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "true" => Ok(NsfwFilter::True),
            "false" => Ok(NsfwFilter::False),
            "any" => Ok(NsfwFilter::Any),
            other => Err(Error::Usage(format!(
                "Unsupported nsfw filter: {other} (supported values \"true\", \"false\", \"any\")"
            ))),
        }
    }

    /// Query-parameter value; `None` leaves the server default in place.
    pub fn as_param(&self) -> Option<&'static str> {
        match self {
            NsfwFilter::True => Some("true"),
            NsfwFilter::False => Some("false"),
            NsfwFilter::Any => None,
        }
    }
}

/// Tri-state static/animated filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleFilter {
    Static,
    Animated,
    Any,
}

impl StyleFilter {
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "static" => Ok(StyleFilter::Static),
            "animated" => Ok(StyleFilter::Animated),
            "any" => Ok(StyleFilter::Any),
            other => Err(Error::Usage(format!(
                "Unsupported style filter: {other} (supported values \"static\", \"animated\", \"any\")"
            ))),
        }
    }

    pub fn as_param(&self) -> Option<&'static str> {
        match self {
            StyleFilter::Static => Some("static"),
            StyleFilter::Animated => Some("animated"),
            StyleFilter::Any => None,
        }
    }
}

/// Per-invocation download options, as given on the command line
#[derive(Debug, Clone)]
pub struct DownloadFilter {
    /// "true", "false" or "any"
    pub nsfw: String,
    /// "static", "animated" or "any"
    pub style: String,
    /// Maximum number of records to download; `None` means all
    pub limit: Option<usize>,
    /// Download the thumbnail instead of the full-resolution image
    pub prefer_thumbnail: bool,
}

impl Default for DownloadFilter {
    fn default() -> Self {
        Self {
            nsfw: "false".to_string(),
            style: "any".to_string(),
            limit: None,
            prefer_thumbnail: false,
        }
    }
}

impl DownloadFilter {
    /// Validate the enumerated fields and produce the query parameters,
    /// omitting any field set to `any`.
    pub fn query_params(&self) -> Result<Vec<(&'static str, &'static str)>> {
        let nsfw = NsfwFilter::parse(&self.nsfw)?;
        let style = StyleFilter::parse(&self.style)?;

        let mut params = Vec::new();
        if let Some(value) = nsfw.as_param() {
            params.push(("nsfw", value));
        }
        if let Some(value) = style.as_param() {
            params.push(("types", value));
        }
        Ok(params)
    }
}

/// Fetch the filtered image list for one game and category.
///
/// Filter validation happens before the request; an invalid enumerant
/// never reaches the network. An empty list is a valid result.
pub fn fetch_images(
    client: &Client,
    game_id: u64,
    category: ArtworkCategory,
    filter: &DownloadFilter,
) -> Result<Vec<ImageRecord>> {
    let params = filter.query_params()?;

    let path = category.endpoint(game_id);
    log::debug!("Images by id: {}", path);

    let raw = client.get_json(&path, &params)?;
    let envelope: ApiResponse = serde_json::from_value(raw)?;

    if !envelope.success {
        return Ok(Vec::new());
    }

    Ok(serde_json::from_value(envelope.data)?)
}
