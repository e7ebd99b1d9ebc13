//! Application layer use cases for the proxswap desktop application.
//!
//! Use cases in this layer orchestrate domain objects to fulfil a user
//! goal, depend on abstractions (the [`proxswap_core::SettingsStore`] and
//! `SystemProxy` traits) rather than concrete implementations, and contain
//! no direct file-system or OS-settings calls of their own.
//!
//! # Sub-modules
//!
//! - **`manage_profiles`** – Maintains the named proxy profiles stored in
//!   the configuration store: enumerate, read, add/update, delete.
//!
//! - **`switch_proxy`** – Applies a profile to the operating system's proxy
//!   setting, turns the proxy off, and resolves which profile the current
//!   OS state corresponds to.

pub mod manage_profiles;
pub mod switch_proxy;
