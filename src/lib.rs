//! griddl
//!
//! Library behind the `griddl` binary: search SteamGridDB for a game,
//! fetch artwork metadata, and download the image files.

pub mod api;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
