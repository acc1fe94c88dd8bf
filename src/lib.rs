//! deck_drive - fetch shared deck files from Google Drive.
//!
//! Given a shareable link, the fetcher resolves the file ID, checks the
//! remote name against the `.ydk` deck extension, picks a collision-free
//! local path, and saves the downloaded bytes under the decks directory.
//!
//! # Example
//!
//! ```no_run
//! use deck_drive::{Authenticator, DeckFetcher, DriveClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let auth = Authenticator::from_file("ServiceAccountCredentials.json")?;
//!     let fetcher = DeckFetcher::new(DriveClient::new(auth), "Decks");
//!
//!     match fetcher.fetch_file("https://drive.google.com/open?id=abc123").await {
//!         Some(path) => println!("saved to {}", path.display()),
//!         None => println!("nothing downloaded"),
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod client;
pub mod error;
pub mod fetcher;
pub mod models;
pub mod url_parser;

// Re-exports for convenience
pub use auth::Authenticator;
pub use client::{DriveClient, RemoteStore};
pub use error::{DriveError, InitError, Result};
pub use fetcher::DeckFetcher;
pub use models::FileMetadata;
pub use url_parser::extract_file_id;
