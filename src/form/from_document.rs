use crate::document::ConfigDocument;
use crate::error::{EspmanError, Result};

use super::{ConfigForm, FormField};

impl ConfigForm {
    /// Replace the whole form with the document's contents.
    ///
    /// Unsaved sensor edits are discarded. Sensor types the board profile does
    /// not know are rejected before anything changes. Pin ids missing from the
    /// profile load as unassigned; one note per such pin is returned.
    pub fn from_document(&mut self, doc: &ConfigDocument) -> Result<Vec<String>> {
        self.check_types(doc)?;
        let notes = self.foreign_pin_notes(doc);

        self.set_field_text(FormField::Module, &doc.module);
        self.set_field_text(FormField::WifiSsid, &doc.wifi.ssid);
        self.set_field_text(FormField::WifiPass, &doc.wifi.pass);
        self.set_field_text(FormField::Ip, &doc.ip);
        self.set_field_text(FormField::Gateway, &doc.gateway);
        self.set_field_text(FormField::ApPass, &doc.appass);
        self.set_field_text(FormField::OtaPass, &doc.otapass);
        self.set_field_text(FormField::MqttServer, &doc.mqtt.server);
        self.set_field_text(FormField::MqttPort, &doc.mqtt.port.to_string());
        self.set_field_text(FormField::MqttUser, &doc.mqtt.user);
        self.set_field_text(FormField::MqttPass, &doc.mqtt.pass);

        self.clear_sensors();
        for sensor in &doc.sensors {
            self.add_sensor(Some(sensor));
        }
        Ok(notes)
    }

    fn check_types(&self, doc: &ConfigDocument) -> Result<()> {
        for (idx, sensor) in doc.sensors.iter().enumerate() {
            if !self.profile.is_known_type(&sensor.sensor_type) {
                return Err(EspmanError::InvalidDocument(format!(
                    "sensors[{}]: unknown sensor type '{}' for board '{}'",
                    idx, sensor.sensor_type, self.profile.name
                )));
            }
        }
        Ok(())
    }

    fn foreign_pin_notes(&self, doc: &ConfigDocument) -> Vec<String> {
        let mut notes = Vec::new();
        for (idx, sensor) in doc.sensors.iter().enumerate() {
            for (role, id) in sensor.pins.iter().flatten() {
                if self.profile.pin_label(*id).is_none() {
                    notes.push(format!(
                        "sensors[{}].pins.{}: pin id {} is not on board '{}', left unassigned",
                        idx, role, id, self.profile.name
                    ));
                }
            }
        }
        notes
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::document::Sensor;
    use crate::registry::BoardProfile;

    fn form() -> ConfigForm {
        ConfigForm::new(Arc::new(BoardProfile::nodemcu_esp8266()))
    }

    #[test]
    fn test_reload_discards_existing_blocks() {
        let mut form = form();
        form.add_sensor(Some(&Sensor::new("old", "VL53L0X")));
        form.add_sensor(None);

        let doc = ConfigDocument {
            sensors: vec![Sensor::new("new", "VL53L0X")],
            ..Default::default()
        };
        form.from_document(&doc).unwrap();

        assert_eq!(form.sensor_count, 1);
        assert_eq!(form.sensors.len(), 1);
        assert_eq!(form.sensors[0].name(), "new");
    }

    #[test]
    fn test_tolerates_absent_pins() {
        let mut form = form();
        let doc = ConfigDocument {
            sensors: vec![Sensor::new("temp", "DHT11")],
            ..Default::default()
        };
        form.from_document(&doc).unwrap();

        let block = &form.sensors[0];
        assert_eq!(block.pins.len(), 1);
        assert_eq!(block.pins[0].value.value(), "");
    }

    #[test]
    fn test_rejected_document_leaves_form_untouched() {
        let mut form = form();
        form.set_field_text(FormField::Module, "keep");
        form.add_sensor(Some(&Sensor::new("kept", "VL53L0X")));

        let doc = ConfigDocument {
            module: "other".to_string(),
            sensors: vec![Sensor::new("x", "BME280")],
            ..Default::default()
        };
        assert!(matches!(form.from_document(&doc), Err(EspmanError::InvalidDocument(_))));

        assert_eq!(form.field_text(FormField::Module), "keep");
        assert_eq!(form.sensors[0].name(), "kept");
        assert_eq!(form.sensor_count, 1);
    }

    #[test]
    fn test_foreign_pin_loads_unassigned_with_note() {
        let mut form = form();
        let doc = ConfigDocument {
            sensors: vec![
                Sensor::new("front", "HC-SR04").with_pins(&[("pinTrig", 42), ("pinEcho", 4)]),
            ],
            ..Default::default()
        };

        let notes = form.from_document(&doc).unwrap();

        assert_eq!(notes.len(), 1);
        assert!(notes[0].starts_with("sensors[0].pins.pinTrig: pin id 42"));
        let block = &form.sensors[0];
        assert_eq!(block.pin("pinTrig").unwrap().value.value(), "");
        assert_eq!(block.pin("pinEcho").unwrap().value.value(), "D2");
        assert_eq!(form.sensor_count, 1);
    }
}
