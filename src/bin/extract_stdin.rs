//! Reads a saved title page from stdin and prints the extracted record as JSON.
//!
//! Usage: `extract_stdin [URL] < page.html`

use movie_grabber::{extract_bytes, ExtractionConfig};
use std::io::{self, Read};

fn main() {
    let url = std::env::args().nth(1).unwrap_or_default();

    let mut page = Vec::new();
    if io::stdin().read_to_end(&mut page).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }

    match extract_bytes(&page, &url, &ExtractionConfig::default()) {
        Ok(record) => println!("{}", serde_json::to_string(&record).unwrap_or_default()),
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
