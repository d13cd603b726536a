//! Reads a profile page from a file (or stdin) and prints the extracted
//! profile as pretty JSON.
//!
//! Usage: extract_profile [PATH | -] [--url PAGE_URL]
//!
//! Log verbosity follows `RUST_LOG` (default `warn`); logs go to stderr.

use std::env;
use std::fs;
use std::io::{self, Read};

use rs_profile_extract::{extract_profile_bytes_with_options, Options};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let mut path: Option<String> = None;
    let mut options = Options::default();

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--url" => {
                let Some(url) = args.next() else {
                    eprintln!("--url requires a value");
                    std::process::exit(2);
                };
                options.url = Some(url);
            }
            "-h" | "--help" => {
                eprintln!("Usage: extract_profile [PATH | -] [--url PAGE_URL]");
                eprintln!("  PATH: HTML file to read (stdin when omitted or `-`)");
                eprintln!("  --url: page URL used to resolve relative logo links");
                return Ok(());
            }
            _ if path.is_none() => path = Some(arg),
            _ => {
                eprintln!("Unexpected argument: {arg}");
                std::process::exit(2);
            }
        }
    }

    let html = match path.as_deref() {
        None | Some("-") => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            buf
        }
        Some(path) => fs::read(path)?,
    };

    let profile = extract_profile_bytes_with_options(&html, &options)?;
    println!("{}", profile.to_json_pretty()?);

    Ok(())
}
