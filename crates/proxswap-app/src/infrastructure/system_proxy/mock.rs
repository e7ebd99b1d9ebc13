//! Mock system proxy for unit testing.
//!
//! Keeps the proxy flag and server string in memory so tests can exercise
//! the switching use case without touching any OS setting.

use std::sync::{Arc, Mutex};

use proxswap_core::ProxyEndpoint;

use super::{ProxyControlError, SystemProxy};

#[derive(Debug, Default)]
struct ProxyState {
    enabled: bool,
    server: Option<String>,
    refuse_writes: bool,
}

/// An in-memory implementation of [`SystemProxy`].
///
/// Clones share the same state, so a test can hand one handle to the code
/// under test and keep another for inspection.
#[derive(Debug, Clone, Default)]
pub struct MockSystemProxy {
    state: Arc<Mutex<ProxyState>>,
}

impl MockSystemProxy {
    /// Creates a mock with the proxy off and no server string.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mock that reports `server` with the flag already on, as if
    /// another tool had configured the system first.
    pub fn with_active_server(server: &str) -> Self {
        let mock = Self::new();
        {
            let mut state = mock.state.lock().expect("lock poisoned");
            state.enabled = true;
            state.server = Some(server.to_string());
        }
        mock
    }

    /// Makes every subsequent write operation fail, for error-path tests.
    pub fn refuse_writes(&self) {
        self.state.lock().expect("lock poisoned").refuse_writes = true;
    }

    /// The server string currently held by the mock.
    pub fn server(&self) -> Option<String> {
        self.state.lock().expect("lock poisoned").server.clone()
    }

    /// The flag currently held by the mock.
    pub fn enabled(&self) -> bool {
        self.state.lock().expect("lock poisoned").enabled
    }

    fn check_writable(state: &ProxyState) -> Result<(), ProxyControlError> {
        if state.refuse_writes {
            Err(ProxyControlError::Write("write refused by mock".to_string()))
        } else {
            Ok(())
        }
    }
}

impl SystemProxy for MockSystemProxy {
    fn is_enabled(&self) -> Result<bool, ProxyControlError> {
        Ok(self.state.lock().expect("lock poisoned").enabled)
    }

    fn current_server(&self) -> Result<Option<String>, ProxyControlError> {
        Ok(self.state.lock().expect("lock poisoned").server.clone())
    }

    fn set_server(&self, endpoint: &ProxyEndpoint) -> Result<(), ProxyControlError> {
        let mut state = self.state.lock().expect("lock poisoned");
        Self::check_writable(&state)?;
        state.server = Some(endpoint.to_string());
        Ok(())
    }

    fn enable(&self) -> Result<(), ProxyControlError> {
        let mut state = self.state.lock().expect("lock poisoned");
        Self::check_writable(&state)?;
        state.enabled = true;
        Ok(())
    }

    fn disable(&self) -> Result<(), ProxyControlError> {
        let mut state = self.state.lock().expect("lock poisoned");
        Self::check_writable(&state)?;
        state.enabled = false;
        Ok(())
    }
}
