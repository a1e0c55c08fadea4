//! Device client and app against an in-process fake of the firmware's admin API.
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use espman::app::App;
use espman::device::DeviceClient;
use espman::document::{ConfigDocument, Sensor};
use espman::error::EspmanError;
use espman::event::{AppEvent, Event, EventHandler};
use espman::registry::BoardProfile;

#[derive(Debug, Default)]
struct Recorded {
    config: Option<Value>,
    accept: Option<String>,
    removed: Vec<String>,
    /// (field name, file name, size)
    uploaded: Vec<(String, String, usize)>,
    restarts: usize,
}

type Shared = Arc<Mutex<Recorded>>;

fn device_config() -> Value {
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

async fn get_config() -> Json<Value> {
    Json(device_config())
}

async fn set_config(
    State(state): State<Shared>,
    headers: axum::http::HeaderMap,
    Json(body): Json<Value>,
) -> &'static str {
    let mut recorded = state.lock().unwrap();
    recorded.config = Some(body);
    recorded.accept = headers
        .get("accept")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    "Config saved"
}

async fn list_files() -> Json<Value> {
    Json(json!({ "files": [{ "name": "a.bin", "size": 1024 }], "used": 1024, "max": 4096 }))
}

async fn remove_file(State(state): State<Shared>, mut multipart: Multipart) -> &'static str {
    while let Some(field) = multipart.next_field().await.unwrap() {
        if field.name() == Some("filename") {
            let name = field.text().await.unwrap();
            state.lock().unwrap().removed.push(name);
        }
    }
    "File removed"
}

async fn upload_files(State(state): State<Shared>, mut multipart: Multipart) -> Json<Value> {
    let mut count = 0;
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().unwrap_or_default().to_string();
        let size = field.bytes().await.unwrap().len();
        state.lock().unwrap().uploaded.push((name, file_name, size));
        count += 1;
    }
    Json(json!({ "uploaded": count }))
}

async fn restart(State(state): State<Shared>) -> &'static str {
    state.lock().unwrap().restarts += 1;
    "Restarting..."
}

fn device_router(state: Shared) -> Router {
    Router::new()
        .route("/api/config/get", get(get_config))
        .route("/api/config/set", post(set_config))
        .route("/api/files/list", get(list_files))
        .route("/api/files/remove", post(remove_file))
        .route("/api/files/upload", post(upload_files))
        .route("/restart", get(restart))
        .with_state(state)
}

async fn serve(router: Router) -> DeviceClient {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    DeviceClient::new(&format!("http://{}", addr), Duration::from_secs(5)).unwrap()
}

async fn fake_device() -> (DeviceClient, Shared) {
    let state = Shared::default();
    let client = serve(device_router(state.clone())).await;
    (client, state)
}

#[tokio::test]
async fn test_get_config_keeps_raw_text() {
    let (client, _) = fake_device().await;

    let fetched = client.get_config().await.unwrap();

    assert_eq!(fetched.document.module, "m1");
    assert_eq!(fetched.document.sensors[0].pins.as_ref().unwrap()["pinTrig"], 5);
    assert_eq!(serde_json::from_str::<Value>(&fetched.raw).unwrap(), device_config());
}

#[tokio::test]
async fn test_set_config_posts_json() {
    let (client, state) = fake_device().await;
    let doc = ConfigDocument {
        module: "garage".to_string(),
        sensors: vec![Sensor::new("door", "VL53L0X")],
        ..Default::default()
    };

    let answer = client.set_config(&doc).await.unwrap();

    assert_eq!(answer, "Config saved");
    let recorded = state.lock().unwrap();
    let sent = recorded.config.as_ref().unwrap();
    assert_eq!(sent["module"], "garage");
    assert_eq!(sent["sensors"][0], json!({ "name": "door", "type": "VL53L0X" }));
    assert_eq!(recorded.accept.as_deref(), Some("application/json"));
}

#[tokio::test]
async fn test_list_and_remove_files() {
    let (client, state) = fake_device().await;

    let list = client.list_files().await.unwrap();
    assert_eq!(list.rows(), vec![("a.bin".to_string(), "1,024".to_string())]);
    assert_eq!(list.disk_summary().as_deref(), Some("Used:1,024 (25%), Max:4,096"));

    let answer = client.remove_file("a.bin").await.unwrap();
    assert_eq!(answer, "File removed");
    assert_eq!(state.lock().unwrap().removed, vec!["a.bin".to_string()]);
}

#[tokio::test]
async fn test_upload_sends_each_file_as_files_part() {
    let (client, state) = fake_device().await;
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("index.html");
    let second = dir.path().join("app.js");
    std::fs::write(&first, "<html></html>").unwrap();
    std::fs::write(&second, "console.log(1)").unwrap();

    let answer = client.upload_files(&[first, second]).await.unwrap();

    assert_eq!(serde_json::from_str::<Value>(&answer).unwrap(), json!({ "uploaded": 2 }));
    let recorded = state.lock().unwrap();
    assert_eq!(
        recorded.uploaded,
        vec![
            ("files[]".to_string(), "index.html".to_string(), 13),
            ("files[]".to_string(), "app.js".to_string(), 14),
        ]
    );
}

#[tokio::test]
async fn test_upload_without_files_is_rejected() {
    let (client, state) = fake_device().await;
    let err = client.upload_files(&[]).await.unwrap_err();

    assert!(matches!(err, EspmanError::InvalidInput { .. }));
    assert!(state.lock().unwrap().uploaded.is_empty());
}

#[tokio::test]
async fn test_restart() {
    let (client, state) = fake_device().await;
    assert_eq!(client.restart().await.unwrap(), "Restarting...");
    assert_eq!(state.lock().unwrap().restarts, 1);
}

#[tokio::test]
async fn test_error_status_is_reported_without_body() {
    let router = Router::new().route(
        "/api/config/get",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "stack trace here") }),
    );
    let client = serve(router).await;

    let err = client.get_config().await.unwrap_err();
    assert!(matches!(err, EspmanError::Status { status: 500 }));
}

#[tokio::test]
async fn test_malformed_file_list_keeps_raw_text() {
    let router = Router::new().route("/api/files/list", get(|| async { "{\"files\": [" }));
    let client = serve(router).await;

    match client.list_files().await.unwrap_err() {
        EspmanError::MalformedJson { raw, .. } => assert_eq!(raw, "{\"files\": ["),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_unreachable_device_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let client = DeviceClient::new(&format!("http://{}", addr), Duration::from_secs(2)).unwrap();

    let err = client.restart().await.unwrap_err();
    assert!(matches!(err, EspmanError::Transport(_)));
}

/// Feed device responses back into the app until nothing is in flight
async fn drain(app: &mut App) {
    while app.requests.any_in_flight() {
        let event = tokio::time::timeout(Duration::from_secs(5), app.events.next())
            .await
            .expect("device response in time")
            .unwrap();
        if let Event::App(AppEvent::Device { seq, outcome }) = event {
            app.handle_device_outcome(seq, outcome);
        }
    }
}

#[tokio::test]
async fn test_app_start_loads_files_and_config() {
    let (client, _) = fake_device().await;
    let mut app = App::new(client, Arc::new(BoardProfile::nodemcu_esp8266()), EventHandler::detached());

    app.start();
    drain(&mut app).await;

    assert!(app.alert.is_none());
    assert_eq!(app.files.files.len(), 1);
    assert_eq!(app.form.sensor_count, 1);
    assert_eq!(
        serde_json::to_value(app.form.to_document().unwrap()).unwrap(),
        device_config()
    );
    let titles: Vec<&str> = app.output.entries().map(|e| e.title.as_str()).collect();
    assert!(titles.contains(&"Get config:"));
    assert!(titles.contains(&"Get filelist:"));
}

#[tokio::test]
async fn test_app_submit_sends_form() {
    let (client, state) = fake_device().await;
    let mut app = App::new(client, Arc::new(BoardProfile::nodemcu_esp8266()), EventHandler::detached());

    app.request_config();
    drain(&mut app).await;
    let id = app.form.sensors[0].id;
    app.form.select_sensor_type(id, "VL53L0X").unwrap();
    app.submit_config();
    drain(&mut app).await;

    assert_eq!(app.output.latest().unwrap().title, "Set config:");
    let recorded = state.lock().unwrap();
    assert_eq!(
        recorded.config.as_ref().unwrap()["sensors"][0],
        json!({ "name": "front", "type": "VL53L0X" })
    );
}

#[tokio::test]
async fn test_app_remove_refreshes_file_list() {
    let (client, state) = fake_device().await;
    let mut app = App::new(client, Arc::new(BoardProfile::nodemcu_esp8266()), EventHandler::detached());

    app.request_remove_file("a.bin".to_string());
    drain(&mut app).await;

    assert_eq!(state.lock().unwrap().removed, vec!["a.bin".to_string()]);
    let titles: Vec<&str> = app.output.entries().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["Get filelist:", "File removed:"]);
}
