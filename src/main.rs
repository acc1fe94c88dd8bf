//! deck_drive CLI - Download shared deck files from Google Drive.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use deck_drive::{Authenticator, DeckFetcher, DriveClient};

/// Download shared `.ydk` deck files from Google Drive.
#[derive(Parser)]
#[command(name = "deck_drive")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to service account JSON credentials file.
    #[arg(
        long,
        env = "GOOGLE_APPLICATION_CREDENTIALS",
        default_value = "ServiceAccountCredentials.json"
    )]
    credentials: PathBuf,

    /// Directory deck files are saved into.
    #[arg(long, default_value = "Decks")]
    decks_dir: PathBuf,

    /// Shareable links to fetch, processed in order.
    #[arg(required = true)]
    urls: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // A missing or malformed credentials file degrades to a disabled
    // fetcher; any other startup failure is fatal.
    let fetcher = match Authenticator::from_file(&cli.credentials) {
        Ok(auth) => DeckFetcher::new(DriveClient::new(auth), &cli.decks_dir),
        Err(err) if err.is_credential_error() => {
            warn!(error = %err, "running without a Drive client");
            DeckFetcher::disabled(&cli.decks_dir)
        }
        Err(err) => return Err(err.into()),
    };

    let mut failures = 0usize;
    for url in &cli.urls {
        match fetcher.fetch_file(url).await {
            Some(path) => println!("{}", path.display()),
            None => {
                eprintln!("no deck downloaded for {}", url);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{} of {} link(s) produced no deck", failures, cli.urls.len());
    }

    Ok(())
}
