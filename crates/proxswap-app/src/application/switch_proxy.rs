//! SwitchProxyUseCase: moves the operating system between proxy profiles.
//!
//! This use case is the reason the application exists. It applies a chosen
//! profile to the OS proxy setting, switches back to a direct connection,
//! and resolves which named profile the current OS state corresponds to so
//! the UI can highlight it.
//!
//! # Architecture
//!
//! The use case depends only on the [`SystemProxy`] trait and on domain
//! types. The OS-facing implementation is injected at construction time,
//! making every path here fully unit-testable with the in-memory mock.

use thiserror::Error;

use proxswap_core::{ProfileError, ProxyEndpoint, ProxyProfile, SettingsStore};

use crate::application::manage_profiles::ProfileRegistry;
use crate::infrastructure::system_proxy::{ProxyControlError, SystemProxy};

/// Error type for the switch-proxy use case.
#[derive(Debug, Error)]
pub enum SwitchError {
    /// The profile or endpoint failed validation before any OS change.
    #[error(transparent)]
    Invalid(#[from] ProfileError),

    /// The OS proxy setting could not be read or written.
    #[error(transparent)]
    Control(#[from] ProxyControlError),
}

/// Applies profiles to the system proxy and reads the selection back.
pub struct ProxySwitcher<P> {
    proxy: P,
}

impl<P: SystemProxy> ProxySwitcher<P> {
    pub fn new(proxy: P) -> Self {
        Self { proxy }
    }

    /// The injected system proxy adapter.
    pub fn proxy(&self) -> &P {
        &self.proxy
    }

    /// Points the OS at `endpoint` and turns the proxy flag on.
    ///
    /// The endpoint is validated first so a blank host or non-numeric port
    /// never reaches the OS.
    ///
    /// # Errors
    ///
    /// Returns [`SwitchError::Invalid`] for a bad endpoint and
    /// [`SwitchError::Control`] when the OS setting cannot be written.
    pub fn apply(&self, endpoint: &ProxyEndpoint) -> Result<(), SwitchError> {
        endpoint.validate()?;
        self.proxy.set_server(endpoint)?;
        self.proxy.enable()?;
        tracing::info!(endpoint = %endpoint, "proxy applied");
        Ok(())
    }

    /// Applies a named profile; see [`apply`](Self::apply).
    pub fn apply_profile(&self, profile: &ProxyProfile) -> Result<(), SwitchError> {
        self.apply(&profile.endpoint())
    }

    /// Turns the proxy flag off ("Direct" mode). The server string is left
    /// in place so re-enabling restores the previous endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`SwitchError::Control`] when the OS setting cannot be
    /// written.
    pub fn disable(&self) -> Result<(), SwitchError> {
        self.proxy.disable()?;
        tracing::info!("proxy disabled");
        Ok(())
    }

    /// Resolves the current OS proxy state to a profile name.
    ///
    /// Returns `None` when the proxy is off, when no server string is set,
    /// when the string is not a plain `host:port`, or when no complete
    /// profile points at that endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`SwitchError::Control`] when the OS setting cannot be read.
    pub fn selected_profile<S: SettingsStore>(
        &self,
        registry: &ProfileRegistry<S>,
    ) -> Result<Option<String>, SwitchError> {
        if !self.proxy.is_enabled()? {
            return Ok(None);
        }
        let Some(server) = self.proxy.current_server()? else {
            return Ok(None);
        };
        let Some(endpoint) = ProxyEndpoint::parse(&server) else {
            return Ok(None);
        };
        Ok(registry.matching_endpoint(&endpoint))
    }

    /// First-run adoption: when the OS already has a proxy configured that
    /// matches no known profile, records it under the `system` profile so
    /// the user can switch back to it later.
    ///
    /// A missing or unparseable server string adopts nothing. Returns
    /// `true` when the registry changed and should be persisted.
    ///
    /// # Errors
    ///
    /// Returns [`SwitchError::Control`] when the OS setting cannot be read.
    pub fn adopt_system_endpoint<S: SettingsStore>(
        &self,
        registry: &mut ProfileRegistry<S>,
    ) -> Result<bool, SwitchError> {
        let Some(server) = self.proxy.current_server()? else {
            return Ok(false);
        };
        let Some(endpoint) = ProxyEndpoint::parse(&server) else {
            tracing::debug!(server = %server, "system proxy string is not host:port; nothing to adopt");
            return Ok(false);
        };
        Ok(registry.adopt_endpoint(&endpoint))
    }
}
