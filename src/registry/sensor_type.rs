use serde::{Deserialize, Serialize};

/// One entry of the sensor type table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorTypeDef {
    /// Value stored in the document's `type` field
    pub key: String,
    /// Text shown in the type selector
    pub label: String,
    /// Pin roles in the order their fields are built
    #[serde(default)]
    pub pins: Vec<String>,
}

impl SensorTypeDef {
    pub fn new(key: &str, label: &str, pins: &[&str]) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            pins: pins.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn has_pins(&self) -> bool {
        !self.pins.is_empty()
    }
}
