use std::{fs, path::Path, sync::Arc};

use crate::error::{EspmanError, Result};
use crate::registry::BoardProfile;

use super::{Settings, HOST_ENV_VAR};

impl Settings {
    /// Read settings from YAML. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        settings.check()?;
        Ok(settings)
    }

    /// Apply `ESPMAN_HOST` if set and non-empty
    pub fn apply_env(&mut self) {
        if let Ok(host) = std::env::var(HOST_ENV_VAR) {
            if !host.trim().is_empty() {
                self.host = host;
            }
        }
    }

    pub fn board(&self) -> Result<Arc<BoardProfile>> {
        let profile = match &self.board_profile {
            Some(path) => BoardProfile::load_from_path(path)?,
            None => BoardProfile::nodemcu_esp8266(),
        };
        Ok(Arc::new(profile))
    }

    fn check(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err("host must not be empty".into());
        }
        if self.timeout_secs == 0 {
            return Err(EspmanError::Config("timeout_secs must be at least 1".to_string()));
        }
        Ok(())
    }
}
