use crate::error::{EspmanError, Result};

use super::ConfigDocument;

impl ConfigDocument {
    /// Parse raw JSON text, keeping the text in the error for display
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|source| EspmanError::MalformedJson {
            raw: raw.to_string(),
            source,
        })
    }

    /// Two-space indented JSON, the format of the editor text view
    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
