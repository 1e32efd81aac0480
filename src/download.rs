//! Image download and file naming
//!
//! Writes artwork records into a deterministic directory tree:
//! `<root>/<slug>-<gameId>/<collection>/` when the game title is known,
//! `<root>/<gameId>/<collection>/` otherwise. Files are named
//! `<gameId>-<score>-<imageId>-<nsfw><ext>`.

use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use crate::api::artwork::{ArtworkCategory, DownloadFilter};
use crate::api::client::Client;
use crate::api::types::ImageRecord;
use crate::error::Result;

// Any run of characters outside [A-Za-z0-9_-] collapses to one underscore
static SLUG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_-]+").expect("slug regex is valid"));

/// Sanitize a game title into a directory-safe slug.
pub fn slugify(title: &str) -> String {
    SLUG_PATTERN.replace_all(title, "_").into_owned()
}

/// Directory the images for one game and category go into.
///
/// Created on demand; an already-existing directory is fine.
pub fn target_directory(
    root: &Path,
    game_id: u64,
    category: ArtworkCategory,
    title: Option<&str>,
) -> Result<PathBuf> {
    let game_dir = match title {
        Some(title) => format!("{}-{}", slugify(title), game_id),
        None => game_id.to_string(),
    };
    let dir = root.join(game_dir).join(category.collection());
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// File extension from the path component of a URL, leading dot included.
///
/// Query strings and fragments are ignored; a path without a dot in its
/// last segment yields an empty string.
pub fn ext_from_url(url: &str) -> &str {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let segment = path.rsplit('/').next().unwrap_or(path);
    match segment.rfind('.') {
        Some(pos) => &segment[pos..],
        None => "",
    }
}

/// File name for one image record.
fn file_name(game_id: u64, image: &ImageRecord, source_url: &str) -> String {
    format!(
        "{}-{}-{}-{}{}",
        game_id,
        image.score,
        image.id,
        image.nsfw,
        ext_from_url(source_url)
    )
}

/// Download the first `limit` records in server order and write them
/// under `root`. Returns the written paths; the first failure aborts the
/// whole operation.
pub fn download(
    client: &Client,
    game_id: u64,
    category: ArtworkCategory,
    records: &[ImageRecord],
    filter: &DownloadFilter,
    title: Option<&str>,
    root: &Path,
) -> Result<Vec<PathBuf>> {
    let directory = target_directory(root, game_id, category, title)?;

    let take = filter.limit.unwrap_or(records.len());
    let mut written = Vec::new();

    for image in records.iter().take(take) {
        let source_url = if filter.prefer_thumbnail {
            &image.thumb
        } else {
            &image.url
        };

        let path = directory.join(file_name(game_id, image, source_url));
        log::debug!("Downloading {} -> {}", source_url, path.display());

        let bytes = client.get_bytes(source_url)?;
        fs::write(&path, &bytes)?;
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u64, score: i64, nsfw: bool) -> ImageRecord {
        ImageRecord {
            id,
            score,
            nsfw,
            url: format!("https://cdn.example.com/grid/{id}.png"),
            thumb: format!("https://cdn.example.com/thumb/{id}.jpg"),
        }
    }

    #[test]
    fn test_slug_keeps_allowed_characters() {
        assert_eq!(slugify("Half-Life_2"), "Half-Life_2");
        assert_eq!(slugify("Doom2016"), "Doom2016");
    }

    #[test]
    fn test_slug_collapses_runs_to_single_underscore() {
        assert_eq!(
            slugify("Half Life 2: Episode One!"),
            "Half_Life_2_Episode_One_"
        );
        assert_eq!(slugify("A  --  B"), "A_--_B");
    }

    #[test]
    fn test_slug_contains_only_allowed_characters() {
        let slug = slugify("Ōkami HD (2017) — déjà vu?");
        assert!(slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-'));
        assert!(!slug.contains("__"));
    }

    #[test]
    fn test_ext_from_url() {
        assert_eq!(ext_from_url("https://cdn.example.com/grid/77.png"), ".png");
        assert_eq!(
            ext_from_url("https://cdn.example.com/grid/77.webp?w=300"),
            ".webp"
        );
        assert_eq!(ext_from_url("https://cdn.example.com/grid/77"), "");
    }

    #[test]
    fn test_file_name_format() {
        let image = record(42, 7, false);
        assert_eq!(file_name(1234, &image, &image.url), "1234-7-42-false.png");
        let nsfw = record(43, 0, true);
        assert_eq!(file_name(1234, &nsfw, &nsfw.thumb), "1234-0-43-true.jpg");
    }

    #[test]
    fn test_target_directory_with_title() {
        let root = tempfile::tempdir().unwrap();
        let dir =
            target_directory(root.path(), 1234, ArtworkCategory::Grid, Some("Ori & Co")).unwrap();
        assert_eq!(dir, root.path().join("Ori_Co-1234").join("grids"));
        assert!(dir.is_dir());
    }

    #[test]
    fn test_target_directory_without_title() {
        let root = tempfile::tempdir().unwrap();
        let dir = target_directory(root.path(), 1234, ArtworkCategory::Hero, None).unwrap();
        assert_eq!(dir, root.path().join("1234").join("heroes"));
        // Creating it again is not an error
        target_directory(root.path(), 1234, ArtworkCategory::Hero, None).unwrap();
    }
}
