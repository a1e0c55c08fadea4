use std::future::Future;
use std::path::PathBuf;

use crate::device::DeviceClient;
use crate::document::ConfigDocument;
use crate::error::EspmanError;
use crate::event::{AppEvent, DeviceOutcome, Event, RequestKind};
use crate::log_info;

use super::{alert_text, App};

impl App {
    /// Run one device call on its own task and report back through the event channel
    fn dispatch<F, Fut>(&mut self, kind: RequestKind, call: F)
    where
        F: FnOnce(DeviceClient) -> Fut,
        Fut: Future<Output = DeviceOutcome> + Send + 'static,
    {
        let seq = self.requests.issue(kind);
        let sender = self.events.sender();
        let future = call(self.client.clone());

        log_info!("{} request #{} issued", kind.label(), seq);
        tokio::spawn(async move {
            let outcome = future.await;
            let _ = sender.send(Event::App(AppEvent::Device { seq, outcome }));
        });
    }

    pub fn request_config(&mut self) {
        self.dispatch(RequestKind::GetConfig, |client| async move {
            DeviceOutcome::Config(client.get_config().await)
        });
    }

    /// Serialize the form and send it, unless a sensor name is missing
    pub fn submit_config(&mut self) {
        let document = match self.form.to_document() {
            Ok(document) => document,
            Err(e) => {
                self.show_alert(alert_text(&e));
                return;
            }
        };

        let issues = document.validate(&self.profile);
        for issue in &issues {
            self.output.push("Check config:", &issue.to_string());
        }
        if ConfigDocument::has_errors(&issues) {
            let fields: Vec<String> = issues
                .iter()
                .filter(|i| i.severity == crate::document::IssueSeverity::Error)
                .map(|i| i.field.clone())
                .collect();
            self.show_alert(format!("Required field missing: {}", fields.join(", ")));
            return;
        }

        self.dispatch(RequestKind::SetConfig, |client| async move {
            DeviceOutcome::ConfigSent(client.set_config(&document).await)
        });
    }

    pub fn request_file_list(&mut self) {
        self.dispatch(RequestKind::ListFiles, |client| async move {
            DeviceOutcome::Files(client.list_files().await)
        });
    }

    pub fn request_remove_file(&mut self, filename: String) {
        self.dispatch(RequestKind::RemoveFile, |client| async move {
            let result = client.remove_file(&filename).await;
            DeviceOutcome::FileRemoved { filename, result }
        });
    }

    /// Upload files. Sizes are read on the request task, next to the file contents.
    pub fn request_upload(&mut self, paths: Vec<PathBuf>) {
        self.dispatch(RequestKind::UploadFiles, |client| async move {
            let mut sizes = Vec::with_capacity(paths.len());
            for path in &paths {
                match tokio::fs::metadata(path).await {
                    Ok(meta) => sizes.push(meta.len()),
                    Err(e) => {
                        let result = Err(EspmanError::InvalidInput {
                            field: "files".to_string(),
                            value: format!("{}: {}", path.display(), e),
                        });
                        return DeviceOutcome::Uploaded { paths, sizes, result };
                    }
                }
            }
            let result = client.upload_files(&paths).await;
            DeviceOutcome::Uploaded { paths, sizes, result }
        });
    }

    pub fn request_restart(&mut self) {
        self.dispatch(RequestKind::Restart, |client| async move {
            DeviceOutcome::Restarted(client.restart().await)
        });
    }
}
