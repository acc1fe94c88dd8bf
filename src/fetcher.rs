//! Deck retrieval: shareable link in, saved `.ydk` path out.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::client::RemoteStore;
use crate::models::format_size;
use crate::url_parser::extract_file_id;

/// Extension of the deck files this tool accepts.
const DECK_EXTENSION: &str = ".ydk";

/// Fetches deck files from a remote store into a local directory.
///
/// One store handle is injected at construction and reused for every request
/// over the life of the process. A fetcher built without a handle (see
/// [`DeckFetcher::disabled`]) answers every request with `None` instead of
/// failing; the CLI falls back to this mode when the credentials file is
/// absent at startup.
pub struct DeckFetcher {
    store: Option<Box<dyn RemoteStore>>,
    decks_dir: PathBuf,
}

impl DeckFetcher {
    /// Create a fetcher backed by the given store, saving into `decks_dir`.
    pub fn new(store: impl RemoteStore + 'static, decks_dir: impl Into<PathBuf>) -> Self {
        Self {
            store: Some(Box::new(store)),
            decks_dir: decks_dir.into(),
        }
    }

    /// Create a fetcher with no store handle.
    ///
    /// Every [`DeckFetcher::fetch_file`] call on it returns `None`.
    pub fn disabled(decks_dir: impl Into<PathBuf>) -> Self {
        Self {
            store: None,
            decks_dir: decks_dir.into(),
        }
    }

    /// Whether this fetcher was built without a store handle.
    pub fn is_disabled(&self) -> bool {
        self.store.is_none()
    }

    /// Fetch the deck behind a shareable link and save it under the decks
    /// directory.
    ///
    /// Blocks the caller until the transfer settles. Returns the saved path,
    /// or `None` when nothing was downloaded: the link has no usable `id=`
    /// marker, the remote file is not a `.ydk`, the transfer or the local
    /// write failed, or the fetcher is disabled. None of these raise; the
    /// empty result is the caller's only signal.
    pub async fn fetch_file(&self, url: &str) -> Option<PathBuf> {
        let file_id = match extract_file_id(url) {
            Some(id) => id,
            None => {
                debug!(url, "no file id in link");
                return None;
            }
        };

        let store = match self.store.as_ref() {
            Some(store) => store,
            None => {
                warn!(url, "no Drive client available, ignoring request");
                return None;
            }
        };

        let metadata = match store.file_metadata(&file_id).await {
            Ok(metadata) => metadata,
            Err(err) => {
                warn!(%file_id, error = %err, "metadata lookup failed");
                return None;
            }
        };

        // Extension check runs on the untrimmed remote name; trimming is
        // part of destination resolution only.
        if !metadata.name.ends_with(DECK_EXTENSION) {
            debug!(name = %metadata.name, "not a deck file");
            return None;
        }

        let destination = resolve_destination(&self.decks_dir, &metadata.name);

        let bytes = match store.download(&file_id).await {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!(%file_id, error = %err, "download failed");
                return None;
            }
        };

        if let Err(err) = self.persist(&destination, &bytes) {
            warn!(path = %destination.display(), error = %err, "could not save deck");
            return None;
        }

        info!(
            path = %destination.display(),
            size = %format_size(bytes.len() as u64),
            "deck saved"
        );

        // The file's presence on disk is the success signal callers rely on.
        // Racy against a concurrent writer of the same resolved name, which
        // is acceptable for this tool's single-operator usage.
        if destination.exists() {
            Some(destination)
        } else {
            None
        }
    }

    fn persist(&self, destination: &Path, bytes: &[u8]) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.decks_dir)?;
        std::fs::write(destination, bytes)
    }
}

/// Pick a destination under `dir` that does not collide with an existing
/// file.
///
/// The base candidate is the trimmed remote name. When that path is taken,
/// the extension is stripped, the stem trimmed again, and numbered
/// candidates `stem(1).ydk`, `stem(2).ydk`, ... are probed from 1 upward;
/// the first free one wins, so the chosen suffix is always the lowest
/// available integer.
pub fn resolve_destination(dir: &Path, name: &str) -> PathBuf {
    let trimmed = name.trim();
    let base = dir.join(trimmed);
    if !base.exists() {
        return base;
    }

    debug!(path = %base.display(), "resolving duplicate file name");
    let stem = trimmed
        .strip_suffix(DECK_EXTENSION)
        .unwrap_or(trimmed)
        .trim();

    let mut i = 1;
    loop {
        let candidate = dir.join(format!("{stem}({i}){DECK_EXTENSION}"));
        if !candidate.exists() {
            return candidate;
        }
        i += 1;
    }
}
