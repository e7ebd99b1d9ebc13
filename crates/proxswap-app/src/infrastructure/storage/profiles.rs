//! Profile file location and first-run tolerant persistence.
//!
//! The profile file lives at a fixed name in the user's home/profile
//! directory:
//! - Windows:  `%USERPROFILE%\proxswap.ini`
//! - elsewhere: `$HOME/proxswap.ini`
//!
//! The store itself accepts any path; this module only supplies the
//! convention and the startup behaviour around it.

use std::path::{Path, PathBuf};

use thiserror::Error;

use proxswap_core::{IniDocument, IniError};

/// Fixed file name of the profile store inside the home directory.
pub const PROFILE_FILE_NAME: &str = "proxswap.ini";

/// Error type for profile storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The user's home directory could not be determined from the
    /// environment.
    #[error("could not determine the user's home directory")]
    NoHomeDir,

    /// The profile file could not be read or written.
    #[error(transparent)]
    Ini(#[from] IniError),
}

/// Resolves the conventional profile file path.
///
/// # Errors
///
/// Returns [`StoreError::NoHomeDir`] when the relevant environment variable
/// is unset.
pub fn profile_file_path() -> Result<PathBuf, StoreError> {
    home_dir()
        .map(|home| home.join(PROFILE_FILE_NAME))
        .ok_or(StoreError::NoHomeDir)
}

/// Opens the profile store at `path`.
///
/// A missing file is a normal first run and yields an empty store; any
/// other I/O failure is reported.
///
/// # Errors
///
/// Returns [`StoreError::Ini`] for file-system errors other than
/// "not found".
pub fn open_store(path: &Path) -> Result<IniDocument, StoreError> {
    match IniDocument::from_file(path) {
        Ok(doc) => {
            tracing::info!(path = %path.display(), sections = doc.len(), "profile store opened");
            Ok(doc)
        }
        Err(IniError::Io { ref source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "no profile file yet; starting empty");
            Ok(IniDocument::new())
        }
        Err(e) => Err(e.into()),
    }
}

/// Persists the store to `path`.
///
/// # Errors
///
/// Returns [`StoreError::Ini`] when the destination cannot be written.
pub fn persist_store(doc: &IniDocument, path: &Path) -> Result<(), StoreError> {
    doc.save_file(path)?;
    Ok(())
}

/// Resolves the home directory from the platform's environment.
fn home_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        // %USERPROFILE% e.g. C:\Users\<user>
        std::env::var_os("USERPROFILE").map(PathBuf::from)
    }

    #[cfg(not(target_os = "windows"))]
    {
        std::env::var_os("HOME").map(PathBuf::from)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
