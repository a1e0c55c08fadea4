// src/form/mod.rs
//! In-memory form model behind the Config tab.
//!
//! The form is the only place interactive edits land. It is read into a
//! [`ConfigDocument`](crate::document::ConfigDocument) by `to_document` and
//! rebuilt from one by `from_document`; the UI never touches documents
//! directly.

mod add_sensor;
mod edit;
mod field_value;
mod from_document;
mod new;
mod remove_sensor;
mod rows;
mod select_sensor_type;
mod sensor_block;
mod to_document;

use std::sync::Arc;

use crate::registry::BoardProfile;

pub use field_value::FieldValue;
pub use rows::FormRow;
pub use sensor_block::{BlockId, PinField, SensorBlock};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Module,

    // WiFi
    WifiSsid,
    WifiPass,
    Ip,
    Gateway,
    ApPass,
    OtaPass,

    // MQTT
    MqttServer,
    MqttPort,
    MqttUser,
    MqttPass,
}

#[derive(Debug, Clone)]
pub struct ConfigForm {
    /// Fixed top-level fields: (label, identity, value)
    pub fields: Vec<(String, FormField, FieldValue)>,
    /// Sensor blocks in display order
    pub sensors: Vec<SensorBlock>,
    /// Live block count, only changed by `add_sensor` and `remove_sensor`
    pub sensor_count: usize,
    profile: Arc<BoardProfile>,
}

impl ConfigForm {
    pub fn profile(&self) -> &BoardProfile {
        &self.profile
    }
}
