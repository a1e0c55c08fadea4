use crate::document::{ConfigDocument, MqttSettings, PinMap, Sensor, WifiSettings};
use crate::error::{EspmanError, Result};
use crate::registry::PIN_UNASSIGNED;

use super::{ConfigForm, FormField};

impl ConfigForm {
    /// Read the whole form into a document. Never modifies the form.
    ///
    /// Fails with `InvalidInput` when the MQTT port is not a number in
    /// `0..=65535`; a blank port is rejected the same way.
    pub fn to_document(&self) -> Result<ConfigDocument> {
        let text = |field| self.field_text(field).to_string();

        let port_text = self.field_text(FormField::MqttPort);
        let port = port_text
            .trim()
            .parse::<u16>()
            .map_err(|_| EspmanError::InvalidInput {
                field: "mqtt.port".to_string(),
                value: port_text.to_string(),
            })?;

        let sensors = self
            .sensors
            .iter()
            .map(|block| {
                let pins = if block.pins.is_empty() {
                    None
                } else {
                    Some(
                        block
                            .pins
                            .iter()
                            .map(|pin| {
                                let id = self
                                    .profile
                                    .pin_id(pin.value.value())
                                    .unwrap_or(PIN_UNASSIGNED);
                                (pin.role.clone(), id)
                            })
                            .collect::<PinMap>(),
                    )
                };

                Sensor {
                    name: block.name().to_string(),
                    sensor_type: block.type_key().to_string(),
                    pins,
                }
            })
            .collect();

        Ok(ConfigDocument {
            module: text(FormField::Module),
            wifi: WifiSettings {
                ssid: text(FormField::WifiSsid),
                pass: text(FormField::WifiPass),
            },
            ip: text(FormField::Ip),
            gateway: text(FormField::Gateway),
            appass: text(FormField::ApPass),
            otapass: text(FormField::OtaPass),
            mqtt: MqttSettings {
                server: text(FormField::MqttServer),
                port,
                user: text(FormField::MqttUser),
                pass: text(FormField::MqttPass),
            },
            sensors,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::registry::BoardProfile;

    fn form() -> ConfigForm {
        ConfigForm::new(Arc::new(BoardProfile::nodemcu_esp8266()))
    }

    #[test]
    fn test_port_coercion() {
        let mut form = form();

        form.set_field_text(FormField::MqttPort, " 8883 ");
        assert_eq!(form.to_document().unwrap().mqtt.port, 8883);

        for bad in ["", "abc", "70000", "-1", "18.83"] {
            form.set_field_text(FormField::MqttPort, bad);
            match form.to_document() {
                Err(EspmanError::InvalidInput { field, value }) => {
                    assert_eq!(field, "mqtt.port");
                    assert_eq!(value, bad);
                }
                other => panic!("expected InvalidInput for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_empty_form_is_default_document() {
        assert_eq!(form().to_document().unwrap(), ConfigDocument::default());
    }

    #[test]
    fn test_serialize_is_read_only() {
        let mut form = form();
        let id = form.add_sensor(None);
        form.select_sensor_type(id, "DHT11").unwrap();

        let first = form.to_document().unwrap();
        let second = form.to_document().unwrap();
        assert_eq!(first, second);
        assert_eq!(form.sensor_count, 1);
    }
}
