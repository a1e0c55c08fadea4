use serde::{Deserialize, Serialize};

/// Silkscreen label and the firmware pin number behind it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PinDef {
    pub label: String,
    pub id: u8,
}

impl PinDef {
    pub fn new(label: &str, id: u8) -> Self {
        Self { label: label.to_string(), id }
    }
}
