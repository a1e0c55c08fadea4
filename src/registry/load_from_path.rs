use std::{fs, path::Path};

use crate::error::Result;
use crate::log_info;

use super::BoardProfile;

impl BoardProfile {
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let profile = Self::from_yaml(&content)?;
        log_info!(
            "Loaded board profile '{}' from {} ({} sensor types, {} pins)",
            profile.name,
            path.display(),
            profile.sensor_types.len(),
            profile.pins.len()
        );
        Ok(profile)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let profile: BoardProfile = serde_yaml::from_str(content)?;
        profile.validate()?;
        Ok(profile)
    }
}
