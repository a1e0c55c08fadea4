// src/settings/mod.rs
//! `espman.yml`: which device to talk to and which board profile to use.

mod load;

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Soft-AP address the firmware serves its portal on
pub const DEFAULT_HOST: &str = "http://192.168.4.1";
pub const DEFAULT_SETTINGS_FILE: &str = "espman.yml";
pub const HOST_ENV_VAR: &str = "ESPMAN_HOST";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub host: String,
    pub timeout_secs: u64,
    /// YAML board profile; the built-in NodeMCU table when unset
    pub board_profile: Option<PathBuf>,
    pub log_dir: PathBuf,
    pub debug: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            timeout_secs: 10,
            board_profile: None,
            log_dir: PathBuf::from("./logs"),
            debug: false,
        }
    }
}

impl Settings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Host with a scheme and without a trailing slash
    pub fn base_url(&self) -> String {
        let host = self.host.trim().trim_end_matches('/');
        if host.starts_with("http://") || host.starts_with("https://") {
            host.to_string()
        } else {
            format!("http://{}", host)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_adds_scheme() {
        let mut settings = Settings::default();
        assert_eq!(settings.base_url(), "http://192.168.4.1");

        settings.host = "gauge.local/".to_string();
        assert_eq!(settings.base_url(), "http://gauge.local");

        settings.host = "https://10.0.0.7:8443".to_string();
        assert_eq!(settings.base_url(), "https://10.0.0.7:8443");
    }
}
