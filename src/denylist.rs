//! Common password denylist.
//!
//! The built-in words are matched as substrings. A [`Denylist`] can be
//! extended with entries loaded from a file; those are matched against
//! the whole password. Lists are plain values passed to the evaluator.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming the denylist extension file.
pub const DENYLIST_PATH_ENV: &str = "CLASSHUB_DENYLIST_PATH";

const DEFAULT_DENYLIST_PATH: &str = "./assets/denylist.txt";

/// Words penalized wherever they appear in a password.
pub const BUILTIN_DENYLIST: &[&str] = &[
    "password",
    "motdepasse",
    "admin",
    "user",
    "root",
    "welcome",
    "bienvenue",
];

#[derive(Error, Debug)]
pub enum DenylistError {
    #[error("Denylist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read denylist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Denylist file is empty")]
    EmptyFile,
}

/// Returns the denylist extension path.
///
/// Priority:
/// 1. Environment variable `CLASSHUB_DENYLIST_PATH`
/// 2. Default path `./assets/denylist.txt`
pub fn get_denylist_path() -> PathBuf {
    std::env::var(DENYLIST_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_DENYLIST_PATH))
}

/// Built-in words plus optional whole-password entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Denylist {
    extra: HashSet<String>,
}

impl Denylist {
    /// The built-in words only.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Built-in words plus the given entries, lowercased.
    pub fn with_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extra = entries
            .into_iter()
            .map(|e| e.as_ref().trim().to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        Self { extra }
    }

    /// Loads the extension from the configured path.
    ///
    /// # Errors
    ///
    /// Returns error if the file does not exist, cannot be read, or is empty.
    pub fn load() -> Result<Self, DenylistError> {
        Self::load_from_path(get_denylist_path())
    }

    /// Loads the extension from a file with one password per line.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, DenylistError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Denylist loading FAILED: file not found {:?}", path);
            return Err(DenylistError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;

        if content.trim().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Denylist loading FAILED: empty file {:?}", path);
            return Err(DenylistError::EmptyFile);
        }

        let denylist = Self::with_entries(content.lines());

        #[cfg(feature = "tracing")]
        tracing::info!("Denylist extension loaded: {} entries from {:?}", denylist.len(), path);

        Ok(denylist)
    }

    /// Number of extension entries, built-in words excluded.
    pub fn len(&self) -> usize {
        self.extra.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extra.is_empty()
    }

    /// Returns `true` if the password contains a built-in word or equals
    /// an extension entry. Case-insensitive.
    pub fn is_denied(&self, password: &str) -> bool {
        let lowered = password.to_lowercase();
        BUILTIN_DENYLIST.iter().any(|word| lowered.contains(word)) || self.extra.contains(&lowered)
    }
}
