//! End-to-end tests for DeckFetcher against an in-memory remote store.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tempfile::TempDir;

use deck_drive::error::DriveError;
use deck_drive::models::FileMetadata;
use deck_drive::{DeckFetcher, RemoteStore};

const LINK: &str = "https://drive.google.com/open?id=deck-1";

/// Remote store stand-in serving one fixed file. `contents: None` makes the
/// transfer fail after metadata has been served.
#[derive(Clone)]
struct FakeStore {
    name: String,
    contents: Option<Vec<u8>>,
    metadata_calls: Arc<AtomicUsize>,
    download_calls: Arc<AtomicUsize>,
}

impl FakeStore {
    fn serving(name: &str, contents: &[u8]) -> Self {
        Self {
            name: name.to_string(),
            contents: Some(contents.to_vec()),
            metadata_calls: Arc::new(AtomicUsize::new(0)),
            download_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn failing_transfer(name: &str) -> Self {
        Self {
            contents: None,
            ..Self::serving(name, b"")
        }
    }
}

#[async_trait]
impl RemoteStore for FakeStore {
    async fn file_metadata(&self, file_id: &str) -> deck_drive::Result<FileMetadata> {
        self.metadata_calls.fetch_add(1, Ordering::SeqCst);
        Ok(FileMetadata {
            id: file_id.to_string(),
            name: self.name.clone(),
            mime_type: None,
            size: self.contents.as_ref().map(|c| c.len() as u64),
        })
    }

    async fn download(&self, _file_id: &str) -> deck_drive::Result<Vec<u8>> {
        self.download_calls.fetch_add(1, Ordering::SeqCst);
        match &self.contents {
            Some(bytes) => Ok(bytes.clone()),
            None => Err(DriveError::ApiError {
                status: 500,
                message: "transfer interrupted".to_string(),
            }),
        }
    }
}

fn decks_dir(temp: &TempDir) -> PathBuf {
    temp.path().join("Decks")
}

#[tokio::test]
async fn saves_deck_and_returns_path() {
    let temp = TempDir::new().unwrap();
    let store = FakeStore::serving("Burn.ydk", b"#main\n89631139\n");
    let fetcher = DeckFetcher::new(store, decks_dir(&temp));

    let path = fetcher.fetch_file(LINK).await.unwrap();

    assert_eq!(path, decks_dir(&temp).join("Burn.ydk"));
    assert_eq!(std::fs::read(&path).unwrap(), b"#main\n89631139\n");
}

#[tokio::test]
async fn link_without_marker_skips_network() {
    let temp = TempDir::new().unwrap();
    let store = FakeStore::serving("Burn.ydk", b"deck");
    let metadata_calls = store.metadata_calls.clone();
    let fetcher = DeckFetcher::new(store, decks_dir(&temp));

    let result = fetcher
        .fetch_file("https://drive.google.com/file/d/deck-1/view")
        .await;

    assert_eq!(result, None);
    assert_eq!(metadata_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn link_with_repeated_marker_skips_network() {
    let temp = TempDir::new().unwrap();
    let store = FakeStore::serving("Burn.ydk", b"deck");
    let metadata_calls = store.metadata_calls.clone();
    let fetcher = DeckFetcher::new(store, decks_dir(&temp));

    let result = fetcher
        .fetch_file("https://drive.google.com/open?id=a&id=b")
        .await;

    assert_eq!(result, None);
    assert_eq!(metadata_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn non_deck_file_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let store = FakeStore::serving("notes.txt", b"not a deck");
    let download_calls = store.download_calls.clone();
    let fetcher = DeckFetcher::new(store, decks_dir(&temp));

    let result = fetcher.fetch_file(LINK).await;

    assert_eq!(result, None);
    assert_eq!(download_calls.load(Ordering::SeqCst), 0);
    assert!(!decks_dir(&temp).exists());
}

#[tokio::test]
async fn failed_transfer_leaves_filesystem_unchanged() {
    let temp = TempDir::new().unwrap();
    let store = FakeStore::failing_transfer("Burn.ydk");
    let fetcher = DeckFetcher::new(store, decks_dir(&temp));

    let result = fetcher.fetch_file(LINK).await;

    assert_eq!(result, None);
    assert!(!decks_dir(&temp).exists());
}

#[tokio::test]
async fn duplicate_names_get_numbered_suffixes() {
    let temp = TempDir::new().unwrap();
    let dir = decks_dir(&temp);
    let store = FakeStore::serving("Burn.ydk", b"deck");
    let fetcher = DeckFetcher::new(store, &dir);

    let first = fetcher.fetch_file(LINK).await.unwrap();
    let second = fetcher.fetch_file(LINK).await.unwrap();
    let third = fetcher.fetch_file(LINK).await.unwrap();

    assert_eq!(first, dir.join("Burn.ydk"));
    assert_eq!(second, dir.join("Burn(1).ydk"));
    assert_eq!(third, dir.join("Burn(2).ydk"));
}

#[tokio::test]
async fn remote_name_is_trimmed_before_saving() {
    let temp = TempDir::new().unwrap();
    let store = FakeStore::serving("  Mystic Deck.ydk", b"deck");
    let fetcher = DeckFetcher::new(store, decks_dir(&temp));

    let path = fetcher.fetch_file(LINK).await.unwrap();

    assert_eq!(path, decks_dir(&temp).join("Mystic Deck.ydk"));
}

#[tokio::test]
async fn one_store_handle_serves_repeated_calls() {
    let temp = TempDir::new().unwrap();
    let store = FakeStore::serving("Burn.ydk", b"deck");
    let metadata_calls = store.metadata_calls.clone();
    let fetcher = DeckFetcher::new(store, decks_dir(&temp));

    fetcher.fetch_file(LINK).await.unwrap();
    fetcher.fetch_file(LINK).await.unwrap();

    // Both requests went through the single injected handle.
    assert_eq!(metadata_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn disabled_fetcher_returns_none() {
    let temp = TempDir::new().unwrap();
    let fetcher = DeckFetcher::disabled(decks_dir(&temp));

    assert!(fetcher.is_disabled());
    assert_eq!(fetcher.fetch_file(LINK).await, None);
    assert!(!decks_dir(&temp).exists());
}
