use std::path::PathBuf;

use crossterm::event::KeyCode;

use super::line_edit::LineEditAction;
use super::{App, LineEdit};

impl App {
    pub(super) fn handle_files_key(&mut self, key: KeyCode) {
        if let Some(prompt) = self.upload_prompt.as_mut() {
            match prompt.handle_key(key) {
                LineEditAction::Submit => {
                    let paths = parse_upload_paths(&prompt.buffer);
                    self.upload_prompt = None;
                    if !paths.is_empty() {
                        self.request_upload(paths);
                    }
                }
                LineEditAction::Cancel => self.upload_prompt = None,
                LineEditAction::None => {}
            }
            return;
        }

        let count = self.files.files.len();
        match key {
            KeyCode::Up => self.selected_file = self.selected_file.saturating_sub(1),
            KeyCode::Down => {
                if self.selected_file + 1 < count {
                    self.selected_file += 1;
                }
            }
            KeyCode::Char('r') => self.request_file_list(),
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(entry) = self.files.files.get(self.selected_file) {
                    let name = entry.name.clone();
                    self.request_remove_file(name);
                }
            }
            KeyCode::Char('u') => self.upload_prompt = Some(LineEdit::default()),
            _ => {}
        }
    }
}

/// Whitespace separated paths, `~/` expanded against `$HOME`
fn parse_upload_paths(input: &str) -> Vec<PathBuf> {
    let home = std::env::var("HOME").ok();
    input
        .split_whitespace()
        .map(|part| match (part.strip_prefix("~/"), home.as_deref()) {
            (Some(rest), Some(home)) => PathBuf::from(home).join(rest),
            _ => PathBuf::from(part),
        })
        .collect()
}
