//! Proxy profile entity and validation rules.
//!
//! A profile is one section of the profile file carrying at least a `host`
//! and a `port` setting. Sections missing either are not errors (the store
//! keeps them verbatim), but they are invisible to profile enumeration and
//! to endpoint matching.

use std::fmt;

use thiserror::Error;

use crate::ini::document::SettingMap;

/// Setting name under which a profile stores its proxy host.
pub const HOST_SETTING: &str = "host";

/// Setting name under which a profile stores its proxy port.
pub const PORT_SETTING: &str = "port";

/// Errors produced by profile validation.
///
/// Validation reports every violation at once rather than stopping at the
/// first, so the UI can show the user a complete list.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileError {
    /// One or more fields failed validation; the messages describe each.
    #[error("invalid proxy profile: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

/// A `host:port` pair: the exchange format between profiles and the OS
/// proxy setting.
///
/// Host and port are kept as strings: the store round-trips whatever the
/// user typed, and the OS-facing side consumes the joined `host:port` form
/// without interpreting either half.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyEndpoint {
    pub host: String,
    pub port: String,
}

impl ProxyEndpoint {
    pub fn new(host: impl Into<String>, port: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: port.into(),
        }
    }

    /// Parses the `host:port` server string the OS proxy setting reports.
    ///
    /// Returns `None` unless the string is exactly two parts around a single
    /// `:`. Anything else (no colon, several colons, a bare host) is not an
    /// endpoint this application knows how to match.
    pub fn parse(server: &str) -> Option<Self> {
        let mut parts = server.split(':');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(host), Some(port), None) => Some(Self::new(host, port)),
            _ => None,
        }
    }

    /// Checks that the endpoint is concrete enough to hand to the OS:
    /// a non-empty host and a numeric port.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::Invalid`] listing every violation.
    pub fn validate(&self) -> Result<(), ProfileError> {
        let errors = endpoint_errors(&self.host, &self.port);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ProfileError::Invalid(errors))
        }
    }
}

impl fmt::Display for ProxyEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// A named proxy profile: one complete section of the profile file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyProfile {
    /// Display name; doubles as the section name in the profile file.
    pub name: String,
    /// Proxy host, stored verbatim.
    pub host: String,
    /// Proxy port, stored verbatim as text.
    pub port: String,
}

impl ProxyProfile {
    pub fn new(
        name: impl Into<String>,
        host: impl Into<String>,
        port: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            host: host.into(),
            port: port.into(),
        }
    }

    /// Builds a profile from one section of the store.
    ///
    /// Returns `None` when the section lacks a `host` or a `port` setting;
    /// such sections are skipped wherever profiles are enumerated.
    pub fn from_section(name: &str, settings: &SettingMap) -> Option<Self> {
        let host = settings.get(HOST_SETTING)?;
        let port = settings.get(PORT_SETTING)?;
        Some(Self::new(name, host.as_str(), port.as_str()))
    }

    /// The endpoint this profile points at.
    pub fn endpoint(&self) -> ProxyEndpoint {
        ProxyEndpoint::new(self.host.as_str(), self.port.as_str())
    }

    /// True when this profile points at exactly `endpoint` (case-sensitive
    /// string comparison on both halves, as the OS string is matched
    /// verbatim).
    pub fn matches_endpoint(&self, endpoint: &ProxyEndpoint) -> bool {
        self.host == endpoint.host && self.port == endpoint.port
    }

    /// Checks that the profile can be saved and applied: a numeric port, a
    /// non-empty name, and a non-empty host.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::Invalid`] listing every violation.
    pub fn validate(&self) -> Result<(), ProfileError> {
        let mut errors = Vec::new();
        if self.port.trim().parse::<u32>().is_err() {
            errors.push("the port number is not numeric".to_string());
        }
        if self.name.trim().is_empty() {
            errors.push("no profile name specified".to_string());
        }
        if self.host.trim().is_empty() {
            errors.push("no proxy host specified".to_string());
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ProfileError::Invalid(errors))
        }
    }
}

fn endpoint_errors(host: &str, port: &str) -> Vec<String> {
    let mut errors = Vec::new();
    if port.trim().parse::<u32>().is_err() {
        errors.push("the port number is not numeric".to_string());
    }
    if host.trim().is_empty() {
        errors.push("no proxy host specified".to_string());
    }
    errors
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(pairs: &[(&str, &str)]) -> SettingMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    // ── ProxyEndpoint ─────────────────────────────────────────────────────────

    #[test]
    fn test_endpoint_parse_splits_host_and_port() {
        let endpoint = ProxyEndpoint::parse("10.0.0.4:3128").expect("should parse");
        assert_eq!(endpoint.host, "10.0.0.4");
        assert_eq!(endpoint.port, "3128");
    }

    #[test]
    fn test_endpoint_parse_rejects_string_without_colon() {
        assert_eq!(ProxyEndpoint::parse("proxy.example"), None);
    }

    #[test]
    fn test_endpoint_parse_rejects_string_with_two_colons() {
        assert_eq!(ProxyEndpoint::parse("proxy.example:8080:extra"), None);
    }

    #[test]
    fn test_endpoint_display_renders_host_colon_port() {
        let endpoint = ProxyEndpoint::new("proxy.example", "8080");
        assert_eq!(endpoint.to_string(), "proxy.example:8080");
    }

    #[test]
    fn test_endpoint_display_parse_round_trip() {
        let endpoint = ProxyEndpoint::new("proxy.example", "8080");
        assert_eq!(ProxyEndpoint::parse(&endpoint.to_string()), Some(endpoint));
    }

    #[test]
    fn test_endpoint_validate_accepts_numeric_port_and_host() {
        let endpoint = ProxyEndpoint::new("proxy.example", "8080");
        assert!(endpoint.validate().is_ok());
    }

    #[test]
    fn test_endpoint_validate_rejects_non_numeric_port() {
        let endpoint = ProxyEndpoint::new("proxy.example", "eighty");
        assert!(endpoint.validate().is_err());
    }

    #[test]
    fn test_endpoint_validate_trims_port_before_parsing() {
        let endpoint = ProxyEndpoint::new("proxy.example", " 8080 ");
        assert!(endpoint.validate().is_ok());
    }

    // ── ProxyProfile::from_section ────────────────────────────────────────────

    #[test]
    fn test_from_section_builds_profile_when_host_and_port_present() {
        let map = settings(&[("host", "proxy.example"), ("port", "8080")]);
        let profile = ProxyProfile::from_section("office", &map).expect("complete section");
        assert_eq!(profile.name, "office");
        assert_eq!(profile.host, "proxy.example");
        assert_eq!(profile.port, "8080");
    }

    #[test]
    fn test_from_section_returns_none_when_host_missing() {
        let map = settings(&[("port", "8080")]);
        assert_eq!(ProxyProfile::from_section("office", &map), None);
    }

    #[test]
    fn test_from_section_returns_none_when_port_missing() {
        let map = settings(&[("host", "proxy.example")]);
        assert_eq!(ProxyProfile::from_section("office", &map), None);
    }

    #[test]
    fn test_from_section_ignores_unrelated_settings() {
        let map = settings(&[("host", "h"), ("port", "1"), ("note", "ignored")]);
        assert!(ProxyProfile::from_section("office", &map).is_some());
    }

    // ── Endpoint matching ─────────────────────────────────────────────────────

    #[test]
    fn test_matches_endpoint_requires_both_halves_equal() {
        let profile = ProxyProfile::new("office", "proxy.example", "8080");
        assert!(profile.matches_endpoint(&ProxyEndpoint::new("proxy.example", "8080")));
        assert!(!profile.matches_endpoint(&ProxyEndpoint::new("proxy.example", "8081")));
        assert!(!profile.matches_endpoint(&ProxyEndpoint::new("other.example", "8080")));
    }

    #[test]
    fn test_matches_endpoint_is_case_sensitive() {
        let profile = ProxyProfile::new("office", "Proxy.Example", "8080");
        assert!(!profile.matches_endpoint(&ProxyEndpoint::new("proxy.example", "8080")));
    }

    // ── Validation ────────────────────────────────────────────────────────────

    #[test]
    fn test_validate_accepts_complete_profile() {
        let profile = ProxyProfile::new("office", "proxy.example", "8080");
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_validate_reports_every_violation_at_once() {
        let profile = ProxyProfile::new("  ", "", "not-a-port");
        let Err(ProfileError::Invalid(errors)) = profile.validate() else {
            panic!("expected validation failure");
        };
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_validate_rejects_blank_name_only() {
        let profile = ProxyProfile::new("", "proxy.example", "8080");
        let Err(ProfileError::Invalid(errors)) = profile.validate() else {
            panic!("expected validation failure");
        };
        assert_eq!(errors, vec!["no profile name specified".to_string()]);
    }

    #[test]
    fn test_validate_error_message_joins_violations() {
        let profile = ProxyProfile::new("", "proxy.example", "8080");
        let err = profile.validate().expect_err("expected failure");
        assert_eq!(
            err.to_string(),
            "invalid proxy profile: no profile name specified"
        );
    }
}
