use std::path::{Path, PathBuf};

use reqwest::multipart::{Form, Part};

use crate::error::{EspmanError, Result};
use crate::log_info;

use super::{
    read_body::read_text, DeviceClient, FileList, FILES_LIST_PATH, FILES_REMOVE_PATH,
    FILES_UPLOAD_PATH,
};

impl DeviceClient {
    pub async fn list_files(&self) -> Result<FileList> {
        let response = self.http.get(self.url(FILES_LIST_PATH)).send().await?;
        let raw = read_text(response).await?;

        serde_json::from_str(&raw).map_err(|source| EspmanError::MalformedJson { raw, source })
    }

    pub async fn remove_file(&self, filename: &str) -> Result<String> {
        let form = Form::new().text("filename", filename.to_string());
        let response = self
            .http
            .post(self.url(FILES_REMOVE_PATH))
            .multipart(form)
            .send()
            .await?;
        let text = read_text(response).await?;

        log_info!("Removed {} from device", filename);
        Ok(text)
    }

    /// Upload local files in one multipart request, each as a `files[]` part
    pub async fn upload_files(&self, paths: &[PathBuf]) -> Result<String> {
        if paths.is_empty() {
            return Err(EspmanError::InvalidInput {
                field: "files".to_string(),
                value: String::new(),
            });
        }

        let mut form = Form::new();
        for path in paths {
            let bytes = tokio::fs::read(path).await?;
            log_info!("Uploading {} ({} bytes)", path.display(), bytes.len());
            let part = Part::bytes(bytes).file_name(upload_name(path));
            form = form.part("files[]", part);
        }

        let response = self
            .http
            .post(self.url(FILES_UPLOAD_PATH))
            .multipart(form)
            .send()
            .await?;
        read_text(response).await
    }
}

/// Files land in the device's root under their base name
fn upload_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_name_is_base_name() {
        assert_eq!(upload_name(Path::new("/tmp/build/firmware.bin")), "firmware.bin");
        assert_eq!(upload_name(Path::new("index.html")), "index.html");
    }
}
