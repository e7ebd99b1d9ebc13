//! In-memory configuration store backed by the profile file codec.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use thiserror::Error;

use crate::ini::codec;

/// Ordered map of setting name to setting value within one section.
pub type SettingMap = IndexMap<String, String>;

/// Errors that can occur when loading or saving a profile file.
#[derive(Debug, Error)]
pub enum IniError {
    /// The file could not be opened for reading, or could not be created or
    /// written (missing path, permission denied, lock).
    #[error("I/O error accessing profile file at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The configuration store: named sections of `key=value` settings, loaded
/// from and saved to a profile file on demand.
///
/// Mutations apply only to the in-memory maps; nothing touches disk until
/// [`save_file`](IniDocument::save_file) is called explicitly. There is no
/// background persistence and no drop-triggered flush; a caller that skips
/// the save loses its changes.
///
/// The store is single-threaded and synchronous. It is not safe for
/// concurrent mutation, and two processes saving the same path race with
/// last-writer-wins; neither is supported usage.
///
/// # Examples
///
/// ```rust
/// use proxswap_core::IniDocument;
///
/// let mut doc = IniDocument::new();
/// doc.set_value("office", "host", "proxy.example");
/// doc.set_value("office", "port", "8080");
/// assert_eq!(doc.get("office", "port"), Some("8080"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IniDocument {
    /// Section name → settings, in insertion order. The implicit default
    /// section is named by the empty string.
    sections: IndexMap<String, SettingMap>,
    /// True once a file has been parsed successfully. An empty store that
    /// was never asked to load counts as loaded; a failed load clears it.
    loaded: bool,
}

impl Default for IniDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl IniDocument {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            sections: IndexMap::new(),
            loaded: true,
        }
    }

    /// Creates a store by parsing the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`IniError::Io`] when the file cannot be opened or read.
    pub fn from_file(path: &Path) -> Result<Self, IniError> {
        let mut doc = Self::new();
        doc.load_file(path)?;
        Ok(doc)
    }

    /// Parses the file at `path` and merges its settings into the store.
    ///
    /// Settings already present keep their values (first occurrence wins,
    /// exactly as for duplicate keys within the file itself). Malformed
    /// lines are skipped, never reported.
    ///
    /// # Errors
    ///
    /// Returns [`IniError::Io`] when the file cannot be opened or read; the
    /// store is left untouched and marked unloaded, never partially
    /// populated.
    pub fn load_file(&mut self, path: &Path) -> Result<(), IniError> {
        let text = fs::read_to_string(path).map_err(|source| {
            self.loaded = false;
            IniError::Io {
                path: path.to_path_buf(),
                source,
            }
        })?;
        codec::parse_into(&mut self.sections, &text);
        self.loaded = true;
        tracing::debug!(path = %path.display(), sections = self.sections.len(), "profile file loaded");
        Ok(())
    }

    /// Renders the store and writes it to `path`, creating or truncating the
    /// destination.
    ///
    /// The destination is truncated before the write, so a failure partway
    /// through (for example a full disk) can leave a truncated file behind.
    ///
    /// # Errors
    ///
    /// Returns [`IniError::Io`] when the destination cannot be created or
    /// written.
    pub fn save_file(&self, path: &Path) -> Result<(), IniError> {
        let text = codec::render(&self.sections);
        fs::write(path, text).map_err(|source| IniError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), sections = self.sections.len(), "profile file saved");
        Ok(())
    }

    /// True when the last load succeeded, or when no load was ever attempted.
    pub fn loaded(&self) -> bool {
        self.loaded
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Returns the settings of `section`, if the section exists.
    pub fn section(&self, section: &str) -> Option<&SettingMap> {
        self.sections.get(section)
    }

    /// Returns the value of `name` within `section`.
    pub fn get(&self, section: &str, name: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|settings| settings.get(name))
            .map(String::as_str)
    }

    /// Iterates over section names in insertion order.
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Iterates over `(section name, settings)` pairs in insertion order.
    pub fn sections(&self) -> impl Iterator<Item = (&str, &SettingMap)> {
        self.sections.iter().map(|(name, settings)| (name.as_str(), settings))
    }

    /// Number of sections in the store.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// True when the store holds no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    // ── Mutators ──────────────────────────────────────────────────────────────

    /// Inserts or overwrites a setting, creating the section if absent.
    ///
    /// Unlike parsing, a programmatic set always takes effect: the last
    /// write wins.
    pub fn set_value(&mut self, section: &str, name: &str, value: &str) {
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(name.to_string(), value.to_string());
    }

    /// Removes a section and all its settings. No-op when absent.
    pub fn delete_section(&mut self, section: &str) {
        self.sections.shift_remove(section);
    }

    /// Removes a single setting. No-op when either the section or the
    /// setting is absent.
    pub fn delete_setting(&mut self, section: &str, name: &str) {
        if let Some(settings) = self.sections.get_mut(section) {
            settings.shift_remove(name);
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
