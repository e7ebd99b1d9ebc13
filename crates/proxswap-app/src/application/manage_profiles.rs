//! ManageProfilesUseCase: the registry of named proxy profiles.
//!
//! The `ProfileRegistry` wraps the configuration store and presents it as a
//! list of proxy profiles. One profile is one section holding a `host` and
//! a `port` setting; sections missing either are preserved in the store but
//! invisible here. The registry mutates only the in-memory store; callers
//! decide when to persist via [`ProfileRegistry::save`].

use std::path::Path;

use proxswap_core::{
    IniError, ProfileError, ProxyEndpoint, ProxyProfile, SettingsStore, HOST_SETTING,
    PORT_SETTING,
};

/// Section name under which a pre-existing system proxy is adopted on first
/// run, so the user's original setting stays reachable from the profile
/// list.
pub const SYSTEM_PROFILE: &str = "system";

/// Named-profile view over a configuration store.
///
/// Generic over [`SettingsStore`] so the UI shell and the tests can supply
/// any store implementation; the application uses the INI-backed document.
pub struct ProfileRegistry<S> {
    store: S,
}

impl<S: SettingsStore> ProfileRegistry<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying configuration store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Parses the file at `path` and merges its settings into the store.
    ///
    /// # Errors
    ///
    /// Returns [`IniError`] when the file cannot be read.
    pub fn load(&mut self, path: &Path) -> Result<(), IniError> {
        self.store.load(path)
    }

    /// Persists the store to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`IniError`] when the destination cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), IniError> {
        self.store.save(path)
    }

    /// Every complete profile, in file order.
    ///
    /// Sections lacking a `host` or a `port` are skipped, as in the profile
    /// list of the UI.
    pub fn profiles(&self) -> Vec<ProxyProfile> {
        self.store
            .section_names()
            .iter()
            .filter_map(|name| self.profile(name))
            .collect()
    }

    /// One complete profile by name, if the section exists and is complete.
    pub fn profile(&self, name: &str) -> Option<ProxyProfile> {
        let settings = self.store.section(name)?;
        ProxyProfile::from_section(name, settings)
    }

    /// Inserts or updates a profile after validating it.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError`] when the profile fails validation; the
    /// store is left unchanged.
    pub fn upsert(&mut self, profile: &ProxyProfile) -> Result<(), ProfileError> {
        profile.validate()?;
        self.store
            .set_value(&profile.name, HOST_SETTING, &profile.host);
        self.store
            .set_value(&profile.name, PORT_SETTING, &profile.port);
        tracing::debug!(name = %profile.name, endpoint = %profile.endpoint(), "profile upserted");
        Ok(())
    }

    /// Removes a profile's section and everything in it. No-op when absent.
    pub fn remove(&mut self, name: &str) {
        self.store.delete_section(name);
        tracing::debug!(name, "profile removed");
    }

    /// The name of the first complete profile pointing at `endpoint`.
    pub fn matching_endpoint(&self, endpoint: &ProxyEndpoint) -> Option<String> {
        self.profiles()
            .into_iter()
            .find(|profile| profile.matches_endpoint(endpoint))
            .map(|profile| profile.name)
    }

    /// Adopts a pre-existing proxy endpoint as the `system` profile when no
    /// known profile already points at it.
    ///
    /// Returns `true` when the store changed and should be persisted.
    pub fn adopt_endpoint(&mut self, endpoint: &ProxyEndpoint) -> bool {
        if self.matching_endpoint(endpoint).is_some() {
            return false;
        }
        self.store
            .set_value(SYSTEM_PROFILE, HOST_SETTING, &endpoint.host);
        self.store
            .set_value(SYSTEM_PROFILE, PORT_SETTING, &endpoint.port);
        tracing::info!(endpoint = %endpoint, "adopted existing system proxy as the 'system' profile");
        true
    }
}
