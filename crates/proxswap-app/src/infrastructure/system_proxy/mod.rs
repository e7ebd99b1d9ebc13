//! System proxy infrastructure: the seam over the OS proxy setting.
//!
//! The operating system exposes two pieces of state the application cares
//! about: an on/off flag and a `host:port` server string. This module
//! abstracts both behind the [`SystemProxy`] trait so the application layer
//! never touches platform settings APIs directly.
//!
//! # Testability
//!
//! The in-tree implementation is [`mock::MockSystemProxy`], an in-memory
//! stand-in used by unit and integration tests. The platform adapter that
//! writes the real OS setting ships with the GUI shell, not with this
//! crate.

use proxswap_core::ProxyEndpoint;

pub mod mock;

/// Error type for system proxy operations.
#[derive(Debug, thiserror::Error)]
pub enum ProxyControlError {
    #[error("failed to read the system proxy setting: {0}")]
    Read(String),
    #[error("failed to write the system proxy setting: {0}")]
    Write(String),
}

/// Trait abstracting the operating system's proxy setting.
///
/// Implementations use interior mutability where needed; every method takes
/// `&self` so a single adapter instance can be shared across the UI and the
/// switching use case.
pub trait SystemProxy {
    /// Whether the OS proxy flag is currently on.
    fn is_enabled(&self) -> Result<bool, ProxyControlError>;

    /// The raw `host:port` server string, if one is set.
    ///
    /// Returned verbatim; interpreting it is the caller's business
    /// ([`ProxyEndpoint::parse`]).
    fn current_server(&self) -> Result<Option<String>, ProxyControlError>;

    /// Writes the server string for `endpoint` without toggling the flag.
    fn set_server(&self, endpoint: &ProxyEndpoint) -> Result<(), ProxyControlError>;

    /// Turns the OS proxy flag on.
    fn enable(&self) -> Result<(), ProxyControlError>;

    /// Turns the OS proxy flag off, leaving the server string in place.
    fn disable(&self) -> Result<(), ProxyControlError>;
}
