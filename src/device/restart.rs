use crate::error::Result;
use crate::log_info;

use super::{read_body::read_text, DeviceClient, RESTART_PATH};

impl DeviceClient {
    pub async fn restart(&self) -> Result<String> {
        let response = self.http.get(self.url(RESTART_PATH)).send().await?;
        let text = read_text(response).await?;
        log_info!("Restart requested on {}", self.base_url);
        Ok(text)
    }
}
