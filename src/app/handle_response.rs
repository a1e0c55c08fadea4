use crate::error::Result;
use crate::event::DeviceOutcome;
use crate::{log_error, log_warn};

use super::{alert_text, App};

impl App {
    /// Apply a finished device request. A read answered after a newer read of
    /// the same kind was issued is dropped; every other response is applied.
    pub fn handle_device_outcome(&mut self, seq: u64, outcome: DeviceOutcome) {
        if !self.requests.complete(outcome.kind(), seq) {
            log_warn!("Ignoring superseded {} response", outcome.kind().label());
            return;
        }

        match outcome {
            DeviceOutcome::Config(result) => {
                let Some(fetched) = self.ok_or_alert(result) else { return };
                self.output.push("Get config:", &fetched.raw);

                let notes = match self.form.from_document(&fetched.document) {
                    Ok(notes) => notes,
                    Err(e) => {
                        self.show_alert(alert_text(&e));
                        return;
                    }
                };
                self.note_reloaded_form(&notes);
                match fetched.document.to_pretty_json() {
                    Ok(text) => self.text_view = text,
                    Err(e) => log_error!("Could not render config text: {}", e),
                }
            }
            DeviceOutcome::ConfigSent(result) => {
                let Some(text) = self.ok_or_alert(result) else { return };
                self.output.push("Set config:", &text);
            }
            DeviceOutcome::Files(result) => {
                let Some(list) = self.ok_or_alert(result) else { return };
                let raw = serde_json::to_string(&list).unwrap_or_default();
                self.output.push("Get filelist:", &raw);

                self.files = list;
                self.selected_file = self.selected_file.min(self.files.files.len().saturating_sub(1));
            }
            DeviceOutcome::FileRemoved { filename, result } => {
                if self.ok_or_alert(result).is_none() {
                    return;
                }
                self.output.push("File removed:", &filename);
                self.request_file_list();
            }
            DeviceOutcome::Uploaded { paths, sizes, result } => {
                for (path, size) in paths.iter().zip(&sizes) {
                    self.output.push("File info:", &format!("{} size: {} bytes", path.display(), size));
                }
                let Some(text) = self.ok_or_alert(result) else { return };
                let names: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
                self.output.push("Files uploaded:", &format!("{}\n{}", names.join(", "), text));
                self.request_file_list();
            }
            DeviceOutcome::Restarted(result) => {
                let Some(text) = self.ok_or_alert(result) else { return };
                self.output.push("Restart:", &text);
            }
        }
    }

    /// Housekeeping after the form was replaced from a document
    pub(super) fn note_reloaded_form(&mut self, notes: &[String]) {
        for note in notes {
            log_warn!("{}", note);
            self.output.push("Pin check:", note);
        }
        self.clamp_selected_row();
    }

    fn ok_or_alert<T>(&mut self, result: Result<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                log_error!("Device request failed: {}", e);
                self.show_alert(alert_text(&e));
                None
            }
        }
    }
}
