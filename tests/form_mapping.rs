use std::sync::Arc;

use serde_json::json;

use espman::document::ConfigDocument;
use espman::form::ConfigForm;
use espman::registry::{BoardProfile, PIN_UNASSIGNED};

fn form() -> ConfigForm {
    ConfigForm::new(Arc::new(BoardProfile::nodemcu_esp8266()))
}

fn sample() -> serde_json::Value {
    json!({
        "module": "m1",
        "wifi": { "ssid": "s", "pass": "p" },
        "ip": "192.168.1.2",
        "gateway": "192.168.1.1",
        "appass": "ap",
        "otapass": "ota",
        "mqtt": { "server": "broker", "port": 1883, "user": "u", "pass": "p2" },
        "sensors": [
            { "name": "front", "type": "HC-SR04", "pins": { "pinTrig": 5, "pinEcho": 4 } }
        ]
    })
}

#[test]
fn test_sample_document_round_trips() {
    let doc: ConfigDocument = serde_json::from_value(sample()).unwrap();
    let mut form = form();
    form.from_document(&doc).unwrap();

    let back = form.to_document().unwrap();
    assert_eq!(back, doc);
    assert_eq!(serde_json::to_value(&back).unwrap(), sample());
}

#[test]
fn test_round_trip_keeps_sensor_order() {
    let doc: ConfigDocument = serde_json::from_value(json!({
        "module": "porch",
        "sensors": [
            { "name": "b", "type": "VL53L0X" },
            { "name": "a", "type": "DHT11", "pins": { "pinData": 13 } },
            { "name": "c", "type": "HC-SR04", "pins": { "pinTrig": 16, "pinEcho": 255 } }
        ]
    }))
    .unwrap();

    let mut form = form();
    form.from_document(&doc).unwrap();
    assert_eq!(form.to_document().unwrap(), doc);
}

#[test]
fn test_selected_type_exposes_roles_unassigned() {
    let mut form = form();
    let id = form.add_sensor(None);
    form.select_sensor_type(id, "HC-SR04").unwrap();

    let block = form.block(id).unwrap();
    let roles: Vec<&str> = block.pins.iter().map(|p| p.role.as_str()).collect();
    assert_eq!(roles, vec!["pinTrig", "pinEcho"]);

    let sensor = &form.to_document().unwrap().sensors[0];
    let pins = sensor.pins.as_ref().unwrap();
    assert_eq!(pins["pinTrig"], PIN_UNASSIGNED);
    assert_eq!(pins["pinEcho"], PIN_UNASSIGNED);
}

#[test]
fn test_switch_to_roleless_type_drops_pins() {
    let doc: ConfigDocument = serde_json::from_value(json!({
        "sensors": [{ "name": "temp", "type": "DHT11", "pins": { "pinData": 2 } }]
    }))
    .unwrap();
    let mut form = form();
    form.from_document(&doc).unwrap();

    let id = form.sensors[0].id;
    form.select_sensor_type(id, "VL53L0X").unwrap();

    assert!(form.block(id).unwrap().pins.is_empty());
    let out = serde_json::to_value(form.to_document().unwrap()).unwrap();
    assert_eq!(out["sensors"][0], json!({ "name": "temp", "type": "VL53L0X" }));
}

#[test]
fn test_remove_keeps_relative_order() {
    let mut form = form();
    let names = ["one", "two", "three"];
    let ids: Vec<_> = names
        .iter()
        .map(|name| {
            let id = form.add_sensor(None);
            form.set_sensor_name(id, name).unwrap();
            id
        })
        .collect();
    assert_eq!(form.sensor_count, 3);

    form.remove_sensor(ids[1]).unwrap();

    assert_eq!(form.sensor_count, 2);
    assert_eq!(form.sensor_count, form.sensors.len());
    let doc = form.to_document().unwrap();
    let left: Vec<&str> = doc.sensors.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(left, vec!["one", "three"]);
}

#[test]
fn test_yaml_board_profile_drives_form() {
    let profile = BoardProfile::from_yaml(
        r#"
name: wemos-d1-mini
sensor_types:
  - key: BMP280
    label: "BMP280, pressure"
    pins: [pinSda, pinScl]
pins:
  - { label: D1, id: 5 }
  - { label: D2, id: 4 }
"#,
    )
    .unwrap();

    let mut form = ConfigForm::new(Arc::new(profile));
    let id = form.add_sensor(None);
    form.set_sensor_name(id, "baro").unwrap();
    form.select_sensor_type(id, "BMP280").unwrap();
    form.set_pin(id, "pinSda", "D2").unwrap();
    form.set_pin(id, "pinScl", "D1").unwrap();

    let out = serde_json::to_value(form.to_document().unwrap()).unwrap();
    assert_eq!(
        out["sensors"][0],
        json!({ "name": "baro", "type": "BMP280", "pins": { "pinSda": 4, "pinScl": 5 } })
    );
    assert!(form.select_sensor_type(id, "DHT11").is_err());
}

#[test]
fn test_pins_serialize_in_role_order() {
    let doc = ConfigDocument::from_json(
        r#"{"sensors":[{"name":"front","type":"HC-SR04","pins":{"pinEcho":4,"pinTrig":5}}]}"#,
    )
    .unwrap();

    let mut form = form();
    form.from_document(&doc).unwrap();
    let text = serde_json::to_string(&form.to_document().unwrap()).unwrap();

    assert!(text.contains(r#""pins":{"pinTrig":5,"pinEcho":4}"#));
}
