//! # proxswap-core
//!
//! Shared library for proxswap containing the profile file codec, the
//! in-memory configuration store, and the proxy-profile domain rules.
//!
//! This crate is used by the desktop application crate and by whichever
//! shell (tray UI, command line) is mounted on top of it. It has zero
//! dependencies on OS settings APIs or UI frameworks; the only system
//! facility it touches is the file system, for loading and saving the
//! profile file.
//!
//! Module map:
//!
//! - **`ini`** – How profiles travel to and from disk. A sectioned
//!   `key=value` text format is parsed into an [`ini::IniDocument`] and
//!   rendered back out deterministically.
//!
//! - **`domain`** – Pure business rules with no I/O. Defines what a proxy
//!   profile is, when it is valid, and how the OS proxy string maps back to
//!   a named profile.

pub mod domain;
pub mod ini;

// Re-export the most-used types at the crate root so callers can write
// `proxswap_core::IniDocument` instead of `proxswap_core::ini::document::IniDocument`.
pub use domain::profile::{
    ProfileError, ProxyEndpoint, ProxyProfile, HOST_SETTING, PORT_SETTING,
};
pub use ini::document::{IniDocument, IniError, SettingMap};
pub use ini::store::SettingsStore;
