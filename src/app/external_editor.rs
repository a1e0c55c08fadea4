use std::io::Write;
use std::process::Stdio;

use tokio::process::Command as AsyncCommand;

use crate::error::{EspmanError, Result};
use crate::{log_info, log_warn};

use super::App;

const FALLBACK_EDITORS: [&str; 2] = ["nano", "vi"];

/// Check if a program is on PATH
async fn command_exists(command: &str) -> bool {
    AsyncCommand::new("which")
        .arg(command)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
        .map(|status| status.success())
        .unwrap_or(false)
}

/// `$VISUAL`, then `$EDITOR`, then the first fallback that is installed
async fn pick_editor() -> Option<String> {
    for var in ["VISUAL", "EDITOR"] {
        if let Ok(value) = std::env::var(var) {
            if !value.trim().is_empty() {
                return Some(value);
            }
        }
    }
    for editor in FALLBACK_EDITORS {
        if command_exists(editor).await {
            return Some(editor.to_string());
        }
    }
    None
}

/// Open `text` in an external editor and return what was saved.
///
/// The caller must hand the terminal over first.
pub async fn edit_in_external_editor(text: &str) -> Result<String> {
    let editor = pick_editor()
        .await
        .ok_or_else(|| EspmanError::Config("no editor found, set $EDITOR".to_string()))?;

    let mut file = tempfile::Builder::new()
        .prefix("espman-config-")
        .suffix(".json")
        .tempfile()?;
    file.write_all(text.as_bytes())?;
    file.flush()?;

    // $EDITOR may carry arguments, e.g. "code --wait"
    let mut parts = editor.split_whitespace();
    let program = parts.next().unwrap_or("vi");
    log_info!("Opening {} in {}", file.path().display(), editor);

    let status = AsyncCommand::new(program)
        .args(parts)
        .arg(file.path())
        .status()
        .await?;

    if !status.success() {
        log_warn!("{} exited with {}", editor, status);
        return Err(EspmanError::Config(format!("{} exited with {}", editor, status)));
    }

    Ok(tokio::fs::read_to_string(file.path()).await?)
}

impl App {
    /// Replace the text view with the edited copy. Applying it is a separate step.
    pub fn finish_external_edit(&mut self, edited: Result<String>) {
        match edited {
            Ok(text) if text == self.text_view => {}
            Ok(text) => {
                self.text_view = text;
                self.output.push("Editor:", "Text changed, press 'a' to apply");
            }
            Err(e) => self.show_alert(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support;
    use crate::error::EspmanError;

    #[test]
    fn test_changed_text_replaces_view_without_applying() {
        let mut app = test_support::app();
        app.finish_external_edit(Ok("{\"module\":\"x\"}".to_string()));

        assert_eq!(app.text_view, "{\"module\":\"x\"}");
        assert_eq!(app.form.field_text(crate::form::FormField::Module), "Module-New");
    }

    #[test]
    fn test_editor_failure_alerts() {
        let mut app = test_support::app();
        let before = app.text_view.clone();
        app.finish_external_edit(Err(EspmanError::Config("no editor found".to_string())));

        assert_eq!(app.text_view, before);
        assert!(app.alert.is_some());
    }
}
