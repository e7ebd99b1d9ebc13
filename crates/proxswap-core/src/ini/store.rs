//! Capability trait over the configuration store.
//!
//! The UI shell never touches [`IniDocument`] internals; it talks to this
//! trait, which names exactly the operations the profile screens need:
//! load, enumerate, read, write, delete, save. Tests and alternative shells
//! can substitute their own implementation without touching the store.

use std::path::Path;

use crate::ini::document::{IniDocument, IniError, SettingMap};

/// The operations the configuration store exposes to its callers.
pub trait SettingsStore {
    /// Parses the file at `path` and merges its settings into the store.
    fn load(&mut self, path: &Path) -> Result<(), IniError>;

    /// Persists the store to `path`.
    fn save(&self, path: &Path) -> Result<(), IniError>;

    /// True when the last load succeeded, or when no load was attempted.
    fn loaded(&self) -> bool;

    /// Section names, in insertion order.
    fn section_names(&self) -> Vec<String>;

    /// The settings of one section, if it exists.
    fn section(&self, section: &str) -> Option<&SettingMap>;

    /// The value of one setting.
    fn get(&self, section: &str, name: &str) -> Option<&str>;

    /// Inserts or overwrites a setting, creating the section if absent.
    fn set_value(&mut self, section: &str, name: &str, value: &str);

    /// Removes a section and its settings. No-op when absent.
    fn delete_section(&mut self, section: &str);

    /// Removes a single setting. No-op when absent.
    fn delete_setting(&mut self, section: &str, name: &str);
}

impl SettingsStore for IniDocument {
    fn load(&mut self, path: &Path) -> Result<(), IniError> {
        self.load_file(path)
    }

    fn save(&self, path: &Path) -> Result<(), IniError> {
        self.save_file(path)
    }

    fn loaded(&self) -> bool {
        IniDocument::loaded(self)
    }

    fn section_names(&self) -> Vec<String> {
        IniDocument::section_names(self).map(str::to_string).collect()
    }

    fn section(&self, section: &str) -> Option<&SettingMap> {
        IniDocument::section(self, section)
    }

    fn get(&self, section: &str, name: &str) -> Option<&str> {
        IniDocument::get(self, section, name)
    }

    fn set_value(&mut self, section: &str, name: &str, value: &str) {
        IniDocument::set_value(self, section, name, value);
    }

    fn delete_section(&mut self, section: &str) {
        IniDocument::delete_section(self, section);
    }

    fn delete_setting(&mut self, section: &str, name: &str) {
        IniDocument::delete_setting(self, section, name);
    }
}
