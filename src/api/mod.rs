//! SteamGridDB API integration
//!
//! Provides the authenticated HTTP client, game search and resolution,
//! and artwork listing for the download pipeline.

pub mod artwork;
pub mod client;
pub mod search;
pub mod types;

pub use artwork::{fetch_images, ArtworkCategory, DownloadFilter, NsfwFilter, StyleFilter};
pub use client::Client;
pub use search::{resolve_by_id, resolve_by_query, resolve_by_query_raw};
pub use types::{ApiResponse, GameRecord, ImageRecord};
