// ── Runtime console configuration ──
//
// Describes where the console API lives and how to reach it. Built by
// the CLI from a config profile; core never touches disk.

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

/// Production API host.
pub const DEFAULT_API_URL: &str = "https://api.cloudhousetechnologies.com";

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    #[default]
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(PathBuf),
    /// Skip verification (staging hosts with self-signed certs).
    DangerAcceptInvalid,
}

/// Configuration for a [`Console`](crate::Console).
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    pub api_url: Url,
    pub tls: TlsVerification,
    /// `None` waits for the server indefinitely.
    pub timeout: Option<Duration>,
    /// Page requested by `FetchServices`.
    pub services_page: u32,
    /// Page size requested by `FetchServices`.
    pub services_limit: u32,
}

impl ConsoleConfig {
    pub fn new(api_url: Url) -> Self {
        Self {
            api_url,
            tls: TlsVerification::default(),
            timeout: None,
            services_page: hostdesk_api::DEFAULT_SERVICES_PAGE,
            services_limit: hostdesk_api::DEFAULT_SERVICES_LIMIT,
        }
    }

    pub(crate) fn transport(&self) -> hostdesk_api::TransportConfig {
        let tls = match &self.tls {
            TlsVerification::SystemDefaults => hostdesk_api::TlsMode::System,
            TlsVerification::CustomCa(path) => hostdesk_api::TlsMode::CustomCa(path.clone()),
            TlsVerification::DangerAcceptInvalid => hostdesk_api::TlsMode::DangerAcceptInvalid,
        };
        hostdesk_api::TransportConfig {
            tls,
            timeout: self.timeout,
        }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self::new(Url::parse(DEFAULT_API_URL).expect("default API URL is valid"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_production_with_first_page_of_two() {
        let config = ConsoleConfig::default();
        assert_eq!(config.api_url.as_str(), "https://api.cloudhousetechnologies.com/");
        assert_eq!(config.services_page, 1);
        assert_eq!(config.services_limit, 2);
        assert!(config.timeout.is_none());
        assert_eq!(config.tls, TlsVerification::SystemDefaults);
    }

    #[test]
    fn transport_mirrors_tls_choice() {
        let mut config = ConsoleConfig::default();
        config.tls = TlsVerification::DangerAcceptInvalid;
        config.timeout = Some(Duration::from_secs(3));
        let transport = config.transport();
        assert!(matches!(transport.tls, hostdesk_api::TlsMode::DangerAcceptInvalid));
        assert_eq!(transport.timeout, Some(Duration::from_secs(3)));
    }
}
