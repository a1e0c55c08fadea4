use uuid::Uuid;

use crate::document::Sensor;
use crate::log_warn;

use super::{BlockId, ConfigForm, FieldValue, SensorBlock};

impl ConfigForm {
    /// Append a sensor block, optionally filled from an existing sensor.
    ///
    /// A seeded block goes through the same type-change rebuild as an
    /// interactive one, then takes its pin selections from the seed. Roles
    /// the seed lacks stay unassigned.
    pub fn add_sensor(&mut self, seed: Option<&Sensor>) -> BlockId {
        let id = Uuid::new_v4();

        let name = seed.map(|s| s.name.clone()).unwrap_or_default();
        self.sensors.push(SensorBlock {
            id,
            name: FieldValue::Text(name),
            sensor_type: FieldValue::select(self.profile.type_options()),
            pins: Vec::new(),
        });
        self.sensor_count += 1;

        let Some(sensor) = seed else {
            return id;
        };

        if let Err(e) = self.select_sensor_type(id, &sensor.sensor_type) {
            log_warn!("Sensor '{}' keeps no type: {}", sensor.name, e);
            return id;
        }

        if let Some(pins) = &sensor.pins {
            let profile = self.profile.clone();
            if let Some(block) = self.block_mut(id) {
                for pin in block.pins.iter_mut() {
                    let Some(pin_id) = pins.get(&pin.role) else {
                        continue;
                    };
                    match profile.pin_label(*pin_id) {
                        Some(label) => {
                            pin.value.select_value(label);
                        }
                        None => log_warn!(
                            "Sensor '{}': pin id {} for {} is not on board '{}'",
                            sensor.name, pin_id, pin.role, profile.name
                        ),
                    }
                }
            }
        }

        id
    }
}
