use std::sync::Arc;

use crate::document::ConfigDocument;
use crate::registry::BoardProfile;

use super::{ConfigForm, FieldValue, FormField};

impl ConfigForm {
    /// Empty form holding the firmware defaults
    pub fn new(profile: Arc<BoardProfile>) -> Self {
        let defaults = ConfigDocument::default();

        let fields = vec![
            ("Module", FormField::Module, defaults.module),
            ("WiFi SSID", FormField::WifiSsid, defaults.wifi.ssid),
            ("WiFi Pass", FormField::WifiPass, defaults.wifi.pass),
            ("Static IP", FormField::Ip, defaults.ip),
            ("Gateway", FormField::Gateway, defaults.gateway),
            ("AP Pass", FormField::ApPass, defaults.appass),
            ("OTA Pass", FormField::OtaPass, defaults.otapass),
            ("MQTT Server", FormField::MqttServer, defaults.mqtt.server),
            ("MQTT Port", FormField::MqttPort, defaults.mqtt.port.to_string()),
            ("MQTT User", FormField::MqttUser, defaults.mqtt.user),
            ("MQTT Pass", FormField::MqttPass, defaults.mqtt.pass),
        ]
        .into_iter()
        .map(|(label, field, value)| (label.to_string(), field, FieldValue::Text(value)))
        .collect();

        Self {
            fields,
            sensors: Vec::new(),
            sensor_count: 0,
            profile,
        }
    }
}
