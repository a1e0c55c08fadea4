use super::{BoardProfile, PinDef, SensorTypeDef};

impl BoardProfile {
    /// NodeMCU v2/v3 (ESP8266) pin numbering
    pub fn nodemcu_esp8266() -> Self {
        Self {
            name: "nodemcu-esp8266".to_string(),
            sensor_types: vec![
                SensorTypeDef::new("HC-SR04", "HC-SR04", &["pinTrig", "pinEcho"]),
                SensorTypeDef::new("DHT11", "DHT11, temp/humi", &["pinData"]),
                SensorTypeDef::new("VL53L0X", "VL53L0X, laser", &[]),
            ],
            pins: vec![
                PinDef::new("D0", 16), // LED_BUILTIN
                PinDef::new("D1", 5),
                PinDef::new("D2", 4),
                PinDef::new("D3", 0),
                PinDef::new("D4", 2),
                PinDef::new("D5", 14),
                PinDef::new("D6", 12),
                PinDef::new("D7", 13),
                PinDef::new("D8", 15),
                PinDef::new("RX", 3),
                PinDef::new("TX", 1),
            ],
        }
    }
}
