//! Profile file module containing the INI text codec and the document store.
//!
//! # What is an INI file? (for beginners)
//!
//! An INI file is one of the oldest configuration formats still in use: a
//! plain-text file made of `[Section]` headers followed by `key=value`
//! lines.  proxswap stores one section per proxy profile:
//!
//! ```text
//! [office]
//! host=proxy.corp.example
//! port=8080
//!
//! [home lab]
//! host=10.0.0.4
//! port=3128
//! ```
//!
//! The format here is deliberately forgiving: comments (`;` to end of line)
//! and blank lines are ignored, malformed lines are skipped rather than
//! rejected, and a key that appears twice in one section keeps its first
//! value.  A user hand-editing the file with notepad should never be able
//! to make the application refuse to start.

pub mod codec;
pub mod document;
pub mod store;

pub use codec::{parse_into, render};
pub use document::{IniDocument, IniError, SettingMap};
pub use store::SettingsStore;
