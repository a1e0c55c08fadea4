// src/registry/mod.rs
//! Board profiles: the sensor type table and the pin table for one target board.
//!
//! The numeric pin ids differ between boards and firmware revisions, so the
//! tables are data. A built-in NodeMCU ESP8266 profile is provided and other
//! boards are described in YAML files.

mod builtin;
mod load_from_path;
mod pin;
mod sensor_type;
mod validate;

use serde::{Deserialize, Serialize};

pub use pin::PinDef;
pub use sensor_type::SensorTypeDef;

/// Firmware sentinel for "no pin assigned"
pub const PIN_UNASSIGNED: u8 = 255;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardProfile {
    pub name: String,
    /// Sensor types in display order. The empty "no type" entry is implied.
    #[serde(default)]
    pub sensor_types: Vec<SensorTypeDef>,
    /// Pins in display order. The unassigned entry is implied.
    #[serde(default)]
    pub pins: Vec<PinDef>,
}

impl Default for BoardProfile {
    fn default() -> Self {
        Self::nodemcu_esp8266()
    }
}

impl BoardProfile {
    pub fn sensor_type(&self, key: &str) -> Option<&SensorTypeDef> {
        self.sensor_types.iter().find(|t| t.key == key)
    }

    /// Pin roles a type requires, in declared order. Empty for `''` and unknown keys.
    pub fn pin_roles(&self, key: &str) -> &[String] {
        self.sensor_type(key)
            .map(|t| t.pins.as_slice())
            .unwrap_or(&[])
    }

    pub fn is_known_type(&self, key: &str) -> bool {
        key.is_empty() || self.sensor_type(key).is_some()
    }

    /// `(key, label)` pairs for a type selector, empty type first.
    pub fn type_options(&self) -> Vec<(String, String)> {
        std::iter::once((String::new(), String::new()))
            .chain(
                self.sensor_types
                    .iter()
                    .map(|t| (t.key.clone(), t.label.clone())),
            )
            .collect()
    }

    /// Pin labels for a pin selector, unassigned (`""`) first.
    pub fn pin_labels(&self) -> Vec<String> {
        std::iter::once(String::new())
            .chain(self.pins.iter().map(|p| p.label.clone()))
            .collect()
    }

    pub fn pin_id(&self, label: &str) -> Option<u8> {
        if label.is_empty() {
            return Some(PIN_UNASSIGNED);
        }
        self.pins.iter().find(|p| p.label == label).map(|p| p.id)
    }

    pub fn pin_label(&self, id: u8) -> Option<&str> {
        if id == PIN_UNASSIGNED {
            return Some("");
        }
        self.pins
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.label.as_str())
    }
}
