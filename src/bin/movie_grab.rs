//! Look a movie up by title URL or search query and print its record as JSON.
//!
//! ```text
//! movie_grab "http://www.imdb.com/title/tt0133093/"
//! movie_grab --no-cast --list "The Italian Job (1969)"
//! RUST_LOG=movie_grabber=debug movie_grab "Shutter Island"
//! ```

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use movie_grabber::{ExtractionConfig, Grabber, HttpConfig, HttpProvider, ShapeMode, Site};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "movie_grab", version, about = "Grab movie details from a title page")]
struct Args {
    /// Title page URL, or a title to search for
    input: String,

    /// Skip the cast roster
    #[arg(long)]
    no_cast: bool,

    /// Skip rating and vote count
    #[arg(long)]
    no_rating: bool,

    /// Skip the genre list
    #[arg(long)]
    no_genres: bool,

    /// Emit multi-valued fields as lists instead of comma-joined strings
    #[arg(long)]
    list: bool,

    /// Site to query
    #[arg(long, default_value = movie_grabber::site::DEFAULT_BASE_URL)]
    base_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 120)]
    timeout: u64,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let site = match Site::new(&args.base_url) {
        Ok(site) => site,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(2);
        }
    };

    let http = HttpConfig {
        timeout: Duration::from_secs(args.timeout),
        ..HttpConfig::default()
    };
    let grabber = Grabber::with_site(HttpProvider::new(&http), site);

    let config = ExtractionConfig::default()
        .show_cast(!args.no_cast)
        .show_rating(!args.no_rating)
        .show_genres(!args.no_genres)
        .shape_mode(if args.list { ShapeMode::List } else { ShapeMode::Csv });

    let Some(record) = grabber.find(&args.input, &config) else {
        eprintln!("Invalid search term or title URL: no such movie found");
        return ExitCode::FAILURE;
    };

    let json = if args.pretty {
        serde_json::to_string_pretty(&record)
    } else {
        serde_json::to_string(&record)
    };
    match json {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("failed to serialize record: {err}");
            ExitCode::FAILURE
        }
    }
}
