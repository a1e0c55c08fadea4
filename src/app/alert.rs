use crate::error::EspmanError;

/// Text of the blocking alert for a failed action.
///
/// HTTP failures show only the status code and transport failures only the
/// error message; malformed JSON shows the offending text.
pub fn alert_text(error: &EspmanError) -> String {
    match error {
        EspmanError::Status { status } => status.to_string(),
        EspmanError::Transport(e) => e.to_string(),
        EspmanError::MalformedJson { raw, source } => {
            format!("Malformed JSON ({}):\n{}", source, raw)
        }
        other => other.to_string(),
    }
}
