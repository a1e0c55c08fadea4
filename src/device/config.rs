use crate::document::ConfigDocument;
use crate::error::Result;
use crate::log_info;

use super::{read_body::read_text, DeviceClient, CONFIG_GET_PATH, CONFIG_SET_PATH};

/// The device's config as sent, plus its parsed form
#[derive(Debug, Clone)]
pub struct FetchedConfig {
    pub raw: String,
    pub document: ConfigDocument,
}

impl DeviceClient {
    pub async fn get_config(&self) -> Result<FetchedConfig> {
        let response = self.http.get(self.url(CONFIG_GET_PATH)).send().await?;
        let raw = read_text(response).await?;
        let document = ConfigDocument::from_json(&raw)?;

        log_info!("Fetched config for module '{}' ({} sensors)", document.module, document.sensors.len());
        Ok(FetchedConfig { raw, document })
    }

    /// Send the whole document; the device applies or rejects it as one unit
    pub async fn set_config(&self, document: &ConfigDocument) -> Result<String> {
        let response = self
            .http
            .post(self.url(CONFIG_SET_PATH))
            .header(reqwest::header::ACCEPT, "application/json")
            .json(document)
            .send()
            .await?;
        let text = read_text(response).await?;

        log_info!("Config for module '{}' sent", document.module);
        Ok(text)
    }
}
