//! Simple CLI that reads HTML from stdin and outputs `PageInfo` JSON to stdout.
//! The page's URL is the single argument; the page itself is not fetched.

use pagegrab::{Grabber, Options};
use std::env;
use std::io::{self, Read};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .init();

    let Some(url) = env::args().nth(1) else {
        eprintln!("Usage: extract_stdin <page-url> < page.html");
        std::process::exit(2);
    };

    let mut html = String::new();
    if io::stdin().read_to_string(&mut html).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }

    let result = Grabber::new(Options::default()).and_then(|g| g.extract_html(&url, &html));

    match result {
        Ok(info) => println!("{}", serde_json::to_string(&info).unwrap_or_default()),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
