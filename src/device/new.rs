use std::time::Duration;

use crate::error::Result;

use super::DeviceClient;

impl DeviceClient {
    /// `base_url` is scheme and authority, e.g. `http://192.168.4.1`
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }
}
