use crate::error::{EspmanError, Result};
use crate::log_debug;

/// Body text of a successful response, or the status code as an error
pub(super) async fn read_text(response: reqwest::Response) -> Result<String> {
    let status = response.status();
    log_debug!("{} {}", status.as_u16(), response.url());

    if !status.is_success() {
        return Err(EspmanError::Status { status: status.as_u16() });
    }
    Ok(response.text().await?)
}
