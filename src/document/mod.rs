// src/document/mod.rs
//! The configuration document exchanged with the device.

mod parse;
mod pin_map;
mod validate;

use serde::{Deserialize, Serialize};

pub use pin_map::PinMap;
pub use validate::{IssueSeverity, ValidationIssue};

/// Module name the firmware falls back to before it is configured
pub const DEFAULT_MODULE_NAME: &str = "Module-New";
pub const DEFAULT_MQTT_PORT: u16 = 1883;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigDocument {
    pub module: String,
    pub wifi: WifiSettings,
    pub ip: String,
    pub gateway: String,
    pub appass: String,
    pub otapass: String,
    pub mqtt: MqttSettings,
    pub sensors: Vec<Sensor>,
}

impl Default for ConfigDocument {
    fn default() -> Self {
        Self {
            module: DEFAULT_MODULE_NAME.to_string(),
            wifi: WifiSettings::default(),
            ip: String::new(),
            gateway: String::new(),
            appass: String::new(),
            otapass: String::new(),
            mqtt: MqttSettings::default(),
            sensors: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WifiSettings {
    pub ssid: String,
    pub pass: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MqttSettings {
    pub server: String,
    pub port: u16,
    pub user: String,
    pub pass: String,
}

impl Default for MqttSettings {
    fn default() -> Self {
        Self {
            server: String::new(),
            port: DEFAULT_MQTT_PORT,
            user: String::new(),
            pass: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sensor {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub sensor_type: String,
    /// Role -> firmware pin id in role order. Absent when the type has no pin roles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pins: Option<PinMap>,
}

impl Sensor {
    pub fn new(name: &str, sensor_type: &str) -> Self {
        Self {
            name: name.to_string(),
            sensor_type: sensor_type.to_string(),
            pins: None,
        }
    }

    pub fn with_pins(mut self, pins: &[(&str, u8)]) -> Self {
        self.pins = Some(
            pins.iter()
                .map(|(role, id)| (role.to_string(), *id))
                .collect(),
        );
        self
    }
}
