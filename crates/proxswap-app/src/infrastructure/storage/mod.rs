//! Storage infrastructure: profile file persistence.
//!
//! This module provides a thin adapter between the application and the
//! file system.  The `profiles` sub-module handles:
//!
//! - Resolving the profile file's conventional location in the user's home
//!   directory.
//! - Opening the store on startup, treating a missing file as a normal
//!   first run rather than an error.
//! - Writing changes back to disk when the user modifies profiles.
//!
//! Concentrating storage concerns in one module means the file location or
//! the startup behaviour can change without touching any other part of the
//! codebase.

pub mod profiles;
