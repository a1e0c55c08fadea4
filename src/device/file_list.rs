use serde::{Deserialize, Serialize};

use crate::util::format::{format_percent, format_thousands};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileEntry {
    pub name: String,
    pub size: u64,
}

/// Answer of the file list endpoint. Older firmware omits `used`/`max`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileList {
    #[serde(default)]
    pub files: Vec<FileEntry>,
    #[serde(default)]
    pub used: Option<u64>,
    #[serde(default)]
    pub max: Option<u64>,
}

impl FileList {
    /// `used / max * 100`, when the device reports both and max is non-zero
    pub fn usage_percent(&self) -> Option<f64> {
        match (self.used, self.max) {
            (Some(used), Some(max)) if max > 0 => Some(used as f64 / max as f64 * 100.0),
            _ => None,
        }
    }

    /// `Used:1,024 (25%), Max:4,096`
    pub fn disk_summary(&self) -> Option<String> {
        let (used, max) = (self.used?, self.max?);
        let percent = self.usage_percent()?;
        Some(format!(
            "Used:{} ({}%), Max:{}",
            format_thousands(used),
            format_percent(percent),
            format_thousands(max)
        ))
    }

    /// `(name, formatted size)` per file, in device order
    pub fn rows(&self) -> Vec<(String, String)> {
        self.files
            .iter()
            .map(|f| (f.name.clone(), format_thousands(f.size)))
            .collect()
    }
}
