//! Infrastructure layer for the proxswap desktop application.
//!
//! Contains the adapters that face the outside world: profile file storage
//! and the operating system's proxy setting.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `proxswap_core`, but MUST NOT be imported by the domain layer.

pub mod storage;
pub mod system_proxy;
