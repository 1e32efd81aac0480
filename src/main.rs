//! griddl
//!
//! Command line tool to grab game artwork from SteamGridDB using their
//! v2 API.

use clap::Parser;

use griddl::cli::{self, Cli};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(e) = cli::run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Logging goes to stderr; `--debug` forces the debug level, otherwise
/// `RUST_LOG` applies.
fn init_logging(debug: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}
