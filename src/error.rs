//! Error types for the deck_drive crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when talking to Google Drive.
#[derive(Error, Debug)]
pub enum DriveError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("JWT encoding error: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),

    #[error("Token refresh failed: {0}")]
    TokenRefreshError(String),
}

/// Result type alias for DriveError.
pub type Result<T> = std::result::Result<T, DriveError>;

/// Errors raised while building the Drive client at startup.
///
/// The two credential variants form the recoverable class: the caller may
/// keep running with a disabled fetcher that answers every request with
/// "nothing downloaded". `Failed` is everything else and should surface at
/// startup.
#[derive(Error, Debug)]
pub enum InitError {
    #[error("credentials file missing or unreadable: {path}")]
    CredentialsMissing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("credentials file malformed: {path}")]
    CredentialsInvalid {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("client initialization failed: {0}")]
    Failed(#[from] DriveError),
}

impl InitError {
    /// True when the failure is a problem with the credentials file itself,
    /// the class callers are expected to degrade on rather than abort.
    pub fn is_credential_error(&self) -> bool {
        matches!(
            self,
            InitError::CredentialsMissing { .. } | InitError::CredentialsInvalid { .. }
        )
    }
}
