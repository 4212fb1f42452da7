//! CLI that extracts each URL given as an argument and prints one JSON
//! `PageInfo` per line. Failures are reported on stderr.
//!
//! Logging goes to stderr; set `RUST_LOG` (default `warn`) to see more.

use pagegrab::{Grabber, Options};
use std::env;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .init();

    let urls: Vec<String> = env::args().skip(1).collect();
    if urls.is_empty() {
        eprintln!("Usage: grab_url <url> [<url> ...]");
        return ExitCode::FAILURE;
    }

    let grabber = match Grabber::new(Options::default()) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut failures = 0usize;

    for url in &urls {
        match grabber.extract(url) {
            Ok(info) => {
                let line = serde_json::to_string(&info).unwrap_or_default();
                if writeln!(out, "{line}").is_err() {
                    return ExitCode::FAILURE;
                }
            }
            Err(e) => {
                eprintln!("{url}: {e}");
                failures += 1;
            }
        }
    }

    if out.flush().is_err() || failures > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
