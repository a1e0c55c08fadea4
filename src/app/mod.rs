// src/app/mod.rs
//! Terminal UI state and the glue between the form, the text view and the device.

mod alert;
mod config_keys;
mod dispatch;
mod editor_keys;
mod external_editor;
mod files_keys;
mod handle_key;
mod handle_response;
mod line_edit;
mod output_log;
mod requests;
mod run;
mod text_view;

use std::sync::Arc;

use crate::device::{DeviceClient, FileList};
use crate::event::EventHandler;
use crate::form::ConfigForm;
use crate::registry::BoardProfile;

pub use alert::alert_text;
pub use config_keys::FieldEdit;
pub use line_edit::LineEdit;
pub use output_log::{OutputEntry, OutputLog};
pub use requests::RequestTracker;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Config,
    Editor,
    Files,
    Output,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Config, Tab::Editor, Tab::Files, Tab::Output];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Config => "Config",
            Tab::Editor => "Editor",
            Tab::Files => "Files",
            Tab::Output => "Output",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn next(&self) -> Tab {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Tab {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    pub tab: Tab,

    pub profile: Arc<BoardProfile>,
    pub client: DeviceClient,

    /// Form model behind the Config tab
    pub form: ConfigForm,
    /// Selected row of `form.rows()`
    pub selected_row: usize,
    /// Text field being edited on the Config tab
    pub field_edit: Option<FieldEdit>,

    /// Pretty JSON shown on the Editor tab
    pub text_view: String,
    pub editor_scroll: u16,
    /// Set by the Editor tab, consumed by the run loop which owns the terminal
    pub external_edit_requested: bool,

    pub files: FileList,
    pub selected_file: usize,
    /// Upload path prompt on the Files tab
    pub upload_prompt: Option<LineEdit>,

    pub output: OutputLog,
    pub output_scroll: usize,
    /// Blocking message; any key dismisses it
    pub alert: Option<String>,

    pub requests: RequestTracker,
    /// Ticks seen while requests are in flight; drives the busy spinner
    pub ticks: u64,
    /// Event handler.
    pub events: EventHandler,
}

impl App {
    /// Constructs a new instance of [`App`].
    pub fn new(client: DeviceClient, profile: Arc<BoardProfile>, events: EventHandler) -> Self {
        let form = ConfigForm::new(profile.clone());

        let mut app = Self {
            running: true,
            tab: Tab::Config,
            profile,
            client,
            form,
            selected_row: 0,
            field_edit: None,
            text_view: String::new(),
            editor_scroll: 0,
            external_edit_requested: false,
            files: FileList::default(),
            selected_file: 0,
            upload_prompt: None,
            output: OutputLog::default(),
            output_scroll: 0,
            alert: None,
            requests: RequestTracker::default(),
            ticks: 0,
            events,
        };
        app.sync_text_view();
        app
    }

    /// What the page does on load: file list first, then the config
    pub fn start(&mut self) {
        self.request_file_list();
        self.request_config();
    }

    /// Set running to false to quit the application.
    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn show_alert(&mut self, message: impl Into<String>) {
        self.alert = Some(message.into());
    }

    /// True while a line editor owns the keyboard
    pub fn is_capturing_text(&self) -> bool {
        self.field_edit.is_some() || self.upload_prompt.is_some()
    }
}
