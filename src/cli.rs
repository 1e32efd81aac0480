//! Command-line surface and verb dispatch
//!
//! Five verbs: `search` prints matching game records, the four artwork
//! verbs resolve one game, fetch its image list, and download the files
//! under `images/`.

use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::Path;

use crate::api::artwork::{fetch_images, ArtworkCategory, DownloadFilter};
use crate::api::client::Client;
use crate::api::search::{resolve_by_id, resolve_by_query, resolve_by_query_raw};
use crate::api::types::GameRecord;
use crate::config::Config;
use crate::download::download;
use crate::error::Result;

/// Root of the local download tree
const IMAGES_ROOT: &str = "images";

/// Grab game artwork from SteamGridDB
#[derive(Parser, Debug)]
#[command(name = "griddl", version, about, arg_required_else_help = true)]
pub struct Cli {
    /// Print debug info
    #[arg(short, long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every verb
#[derive(Args, Debug)]
pub struct QueryArgs {
    /// Search query. Ignored if -i is present
    pub query: Vec<String>,

    /// SteamGridDB ID to search for
    #[arg(short = 'i', long = "id")]
    pub game_id: Option<u64>,

    /// Number of results to display or images to download
    #[arg(short, long, default_value_t = 3)]
    pub count: usize,
}

/// Options shared by the artwork verbs
#[derive(Args, Debug)]
pub struct FilterArgs {
    /// Download low res thumbnails only
    #[arg(short = 't', long)]
    pub thumb: bool,

    /// Adult-content filter: "false", "true" or "any"
    #[arg(long, default_value = "false")]
    pub nsfw: String,

    /// Filter static or animated artwork: "static", "animated" or "any"
    #[arg(long, default_value = "any")]
    pub types: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search for games matching a string query
    Search(QueryArgs),

    /// Download grid artwork
    Grid {
        #[command(flatten)]
        query: QueryArgs,
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Download large banner background artwork
    Hero {
        #[command(flatten)]
        query: QueryArgs,
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Download logo artwork
    Logo {
        #[command(flatten)]
        query: QueryArgs,
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Download icon artwork
    Icon {
        #[command(flatten)]
        query: QueryArgs,
        #[command(flatten)]
        filter: FilterArgs,
    },
}

/// Load configuration, build the client, and run the selected verb.
pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let client = Client::new(config)?;

    match cli.command {
        Command::Search(args) => run_search(&client, &args),
        Command::Grid { query, filter } => {
            run_artwork(&client, ArtworkCategory::Grid, &query, &filter)
        }
        Command::Hero { query, filter } => {
            run_artwork(&client, ArtworkCategory::Hero, &query, &filter)
        }
        Command::Logo { query, filter } => {
            run_artwork(&client, ArtworkCategory::Logo, &query, &filter)
        }
        Command::Icon { query, filter } => {
            run_artwork(&client, ArtworkCategory::Icon, &query, &filter)
        }
    }
}

/// `search`: print up to `count` records, download nothing.
fn run_search(client: &Client, args: &QueryArgs) -> Result<()> {
    let records = match args.game_id {
        Some(id) => vec![resolve_by_id(client, id)?],
        None => {
            let query = args.query.join(" ");
            println!("Searching steamDB for \"{}\"...", query);
            let (records, raw) = resolve_by_query_raw(client, &args.query)?;
            // Keep the last raw search response around for inspection
            fs::write("result.json", serde_json::to_string_pretty(&raw)?)?;
            records
        }
    };

    print!("{}", render_search_results(&records, args.count));
    Ok(())
}

/// Format the `search` output: a count line followed by numbered record
/// blocks, in server order.
pub fn render_search_results(records: &[GameRecord], count: usize) -> String {
    if records.is_empty() {
        return "No results found\n".to_string();
    }

    let shown = count.min(records.len());
    let mut out = format!("Showing {} of {} results\n", shown, records.len());
    for (i, game) in records.iter().take(count).enumerate() {
        out.push_str(&format!("{}:\n{}\n", i + 1, game));
    }
    out
}

/// Artwork verbs: resolve one game, fetch the image list, download.
fn run_artwork(
    client: &Client,
    category: ArtworkCategory,
    args: &QueryArgs,
    filter_args: &FilterArgs,
) -> Result<()> {
    let filter = DownloadFilter {
        nsfw: filter_args.nsfw.clone(),
        style: filter_args.types.clone(),
        limit: Some(args.count),
        prefer_thumbnail: filter_args.thumb,
    };
    // Reject bad filter values before touching the network
    filter.query_params()?;

    let (game_id, title) = match args.game_id {
        Some(id) => (id, None),
        None => {
            let query = args.query.join(" ");
            println!("Searching steamDB for \"{}\"...", query);

            let records = resolve_by_query(client, &args.query)?;
            let Some(game) = records.into_iter().next() else {
                println!("No results for \"{}\"", query);
                return Ok(());
            };

            // Best guess: the API's first hit
            println!("Found Game");
            println!("{}", game);
            (game.id, Some(game.name))
        }
    };

    let images = fetch_images(client, game_id, category, &filter)?;
    if images.is_empty() {
        match &title {
            Some(title) => println!("No artwork found for {}: {}", game_id, title),
            None => println!("No artwork found for {}", game_id),
        }
        return Ok(());
    }

    let downloading = filter.limit.map_or(images.len(), |n| n.min(images.len()));
    println!("Found {} images, downloading {}", images.len(), downloading);

    let written = download(
        client,
        game_id,
        category,
        &images,
        &filter,
        title.as_deref(),
        Path::new(IMAGES_ROOT),
    )?;

    for path in &written {
        println!("{}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn game(id: u64, name: &str) -> GameRecord {
        GameRecord {
            id,
            name: name.to_string(),
            release_date: Some(1584662400),
            types: vec!["steam".to_string()],
            verified: true,
        }
    }

    #[test]
    fn test_render_two_results() {
        let records = vec![game(1, "Doom Eternal"), game(2, "Doom")];
        let out = render_search_results(&records, 3);

        assert!(out.starts_with("Showing 2 of 2 results\n"));
        assert_eq!(out.matches("Title: ").count(), 2);
        assert_eq!(out.matches("Released: ").count(), 2);
        assert_eq!(out.matches("ID: ").count(), 2);
        assert_eq!(out.matches("Stores: ").count(), 2);
        assert_eq!(out.matches("Verified: ").count(), 2);
        assert!(out.contains("1:\nTitle: Doom Eternal"));
        assert!(out.contains("2:\nTitle: Doom"));
    }

    #[test]
    fn test_render_respects_count() {
        let records = vec![game(1, "A"), game(2, "B"), game(3, "C")];
        let out = render_search_results(&records, 2);
        assert!(out.starts_with("Showing 2 of 3 results\n"));
        assert_eq!(out.matches("Title: ").count(), 2);
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_search_results(&[], 3), "No results found\n");
    }

    #[test]
    fn test_cli_parses_search_query_terms() {
        let cli = Cli::parse_from(["griddl", "search", "Doom", "Eternal"]);
        match cli.command {
            Command::Search(args) => {
                assert_eq!(args.query, vec!["Doom", "Eternal"]);
                assert_eq!(args.count, 3);
                assert!(args.game_id.is_none());
            }
            _ => panic!("expected search command"),
        }
    }

    #[test]
    fn test_cli_parses_grid_flags() {
        let cli = Cli::parse_from([
            "griddl", "grid", "-i", "1234", "--count", "2", "-t", "--nsfw", "any", "--types",
            "static",
        ]);
        match cli.command {
            Command::Grid { query, filter } => {
                assert_eq!(query.game_id, Some(1234));
                assert_eq!(query.count, 2);
                assert!(filter.thumb);
                assert_eq!(filter.nsfw, "any");
                assert_eq!(filter.types, "static");
            }
            _ => panic!("expected grid command"),
        }
    }

    #[test]
    fn test_cli_filter_defaults() {
        let cli = Cli::parse_from(["griddl", "hero", "The", "Witcher", "3"]);
        match cli.command {
            Command::Hero { filter, .. } => {
                assert!(!filter.thumb);
                assert_eq!(filter.nsfw, "false");
                assert_eq!(filter.types, "any");
            }
            _ => panic!("expected hero command"),
        }
    }

    #[test]
    fn test_cli_requires_a_subcommand() {
        assert!(Cli::try_parse_from(["griddl"]).is_err());
    }

    #[test]
    fn test_cli_global_debug_flag() {
        let cli = Cli::parse_from(["griddl", "search", "-d", "Ori"]);
        assert!(cli.debug);
    }
}
