//! # Credential Token Storage
//!
//! Persists the bearer token between runs as a single-line file.
//!
//! A missing or blank file means "not logged in"; it is never an error.

use secrecy::{ExposeSecret, SecretString};
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::error::ClientResult;

/// File-backed store for the credential token.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads the stored token, if any.
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read.
    pub fn load(&self) -> ClientResult<Option<SecretString>> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = ?self.path, "No stored token");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let token = contents.trim();
        if token.is_empty() {
            return Ok(None);
        }
        Ok(Some(SecretString::from(token.to_string())))
    }

    /// Writes the token, creating parent directories as needed.
    pub fn save(&self, token: &SecretString) -> ClientResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, token.expose_secret().trim())?;
        info!(path = ?self.path, "Token saved");
        Ok(())
    }

    /// Deletes the stored token. Removing an absent token succeeds.
    pub fn remove(&self) -> ClientResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                info!(path = ?self.path, "Token removed");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
