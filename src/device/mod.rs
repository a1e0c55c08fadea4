// src/device/mod.rs
//! HTTP client for the device's admin API.
//!
//! Every call is a single request/response. Non-2xx answers become
//! `EspmanError::Status` without looking at the body; there are no retries.

mod file_list;
mod files;
mod config;
mod new;
mod read_body;
mod restart;

pub use config::FetchedConfig;
pub use file_list::{FileEntry, FileList};

pub const CONFIG_GET_PATH: &str = "/api/config/get";
pub const CONFIG_SET_PATH: &str = "/api/config/set";
pub const FILES_LIST_PATH: &str = "/api/files/list";
pub const FILES_REMOVE_PATH: &str = "/api/files/remove";
pub const FILES_UPLOAD_PATH: &str = "/api/files/upload";
pub const RESTART_PATH: &str = "/restart";

#[derive(Debug, Clone)]
pub struct DeviceClient {
    base_url: String,
    http: reqwest::Client,
}

impl DeviceClient {
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
