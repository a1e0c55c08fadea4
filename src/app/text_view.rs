use crate::document::ConfigDocument;
use crate::{log_info, log_warn};

use super::{alert_text, App};

impl App {
    /// Re-serialize the form into the Editor tab text.
    ///
    /// A form that cannot be serialized yet (say a half-typed MQTT port)
    /// leaves the previous text in place.
    pub fn sync_text_view(&mut self) {
        let rendered = self
            .form
            .to_document()
            .and_then(|document| document.to_pretty_json());

        match rendered {
            Ok(text) => self.text_view = text,
            Err(e) => {
                log_warn!("Text view not updated: {}", e);
                self.output.push("Text view:", &e.to_string());
            }
        }
    }

    /// Push hand-edited text back through the form. Nothing changes if it does not parse.
    pub fn apply_text_view(&mut self) {
        let document = match ConfigDocument::from_json(&self.text_view) {
            Ok(document) => document,
            Err(e) => {
                self.show_alert(alert_text(&e));
                return;
            }
        };

        let notes = match self.form.from_document(&document) {
            Ok(notes) => notes,
            Err(e) => {
                self.show_alert(alert_text(&e));
                return;
            }
        };

        self.note_reloaded_form(&notes);
        self.sync_text_view();
        log_info!("Applied text view ({} sensors)", document.sensors.len());
        self.output.push("Text applied:", &format!("{} sensors", self.form.sensor_count));
    }
}
