use std::collections::HashSet;

use crate::error::{EspmanError, Result};

use super::{BoardProfile, PIN_UNASSIGNED};

impl BoardProfile {
    /// Reject tables that would make selectors ambiguous
    pub fn validate(&self) -> Result<()> {
        let mut keys = HashSet::new();
        for sensor_type in &self.sensor_types {
            if sensor_type.key.is_empty() {
                return Err(EspmanError::Config(
                    "sensor type key must not be empty".to_string(),
                ));
            }
            if !keys.insert(sensor_type.key.as_str()) {
                return Err(EspmanError::Config(format!(
                    "duplicate sensor type '{}'",
                    sensor_type.key
                )));
            }
            let mut roles = HashSet::new();
            for role in &sensor_type.pins {
                if !roles.insert(role.as_str()) {
                    return Err(EspmanError::Config(format!(
                        "sensor type '{}' declares pin role '{}' twice",
                        sensor_type.key, role
                    )));
                }
            }
        }

        let mut labels = HashSet::new();
        let mut ids = HashSet::new();
        for pin in &self.pins {
            if pin.label.is_empty() {
                return Err(EspmanError::Config("pin label must not be empty".to_string()));
            }
            if pin.id == PIN_UNASSIGNED {
                return Err(EspmanError::Config(format!(
                    "pin '{}' uses the reserved id {}",
                    pin.label, PIN_UNASSIGNED
                )));
            }
            if !labels.insert(pin.label.as_str()) {
                return Err(EspmanError::Config(format!("duplicate pin label '{}'", pin.label)));
            }
            if !ids.insert(pin.id) {
                return Err(EspmanError::Config(format!("duplicate pin id {}", pin.id)));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_profile_is_valid() {
        assert!(BoardProfile::nodemcu_esp8266().validate().is_ok());
    }

    #[test]
    fn test_yaml_profile() {
        let yaml = r#"
name: "wemos-d1-mini"
sensor_types:
  - key: "HC-SR04"
    label: "HC-SR04"
    pins: ["pinTrig", "pinEcho"]
  - key: "VL53L0X"
    label: "VL53L0X, laser"
pins:
  - { label: "D1", id: 5 }
  - { label: "D2", id: 4 }
"#;

        let profile = BoardProfile::from_yaml(yaml).unwrap();
        assert_eq!(profile.name, "wemos-d1-mini");
        assert_eq!(profile.pin_roles("HC-SR04"), ["pinTrig", "pinEcho"]);
        assert!(profile.pin_roles("VL53L0X").is_empty());
        assert_eq!(profile.pin_labels(), vec!["", "D1", "D2"]);
    }

    #[test]
    fn test_reserved_pin_id_rejected() {
        let yaml = r#"
name: "broken"
pins:
  - { label: "D1", id: 255 }
"#;
        assert!(BoardProfile::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_duplicate_pin_label_rejected() {
        let yaml = r#"
name: "broken"
pins:
  - { label: "D1", id: 5 }
  - { label: "D1", id: 4 }
"#;
        assert!(BoardProfile::from_yaml(yaml).is_err());
    }
}
