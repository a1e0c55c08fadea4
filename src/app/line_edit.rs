use crossterm::event::KeyCode;

/// Single-line text buffer with a cursor counted in characters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineEdit {
    pub buffer: String,
    pub cursor: usize,
}

/// What a key did to a [`LineEdit`]
#[derive(Debug, PartialEq)]
pub enum LineEditAction {
    None,
    Submit,
    Cancel,
}

impl LineEdit {
    pub fn new(text: &str) -> Self {
        Self {
            buffer: text.to_string(),
            cursor: text.chars().count(),
        }
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.buffer.len())
    }

    pub fn handle_key(&mut self, key: KeyCode) -> LineEditAction {
        let len = self.buffer.chars().count();
        match key {
            KeyCode::Esc => return LineEditAction::Cancel,
            KeyCode::Enter => return LineEditAction::Submit,
            KeyCode::Char(c) => {
                let at = self.byte_index(self.cursor);
                self.buffer.insert(at, c);
                self.cursor += 1;
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    let at = self.byte_index(self.cursor - 1);
                    self.buffer.remove(at);
                    self.cursor -= 1;
                }
            }
            KeyCode::Delete => {
                if self.cursor < len {
                    let at = self.byte_index(self.cursor);
                    self.buffer.remove(at);
                }
            }
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(len),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = len,
            _ => {}
        }
        LineEditAction::None
    }

    /// Buffer with a bar at the cursor, for rendering
    pub fn with_cursor(&self) -> String {
        let at = self.byte_index(self.cursor);
        format!("{}│{}", &self.buffer[..at], &self.buffer[at..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_delete_multibyte() {
        let mut edit = LineEdit::new("sensör");
        edit.handle_key(KeyCode::Left);
        edit.handle_key(KeyCode::Backspace);
        assert_eq!(edit.buffer, "sensr");

        edit.handle_key(KeyCode::Char('o'));
        assert_eq!(edit.buffer, "sensor");
        assert_eq!(edit.with_cursor(), "senso│r");

        edit.handle_key(KeyCode::Delete);
        assert_eq!(edit.buffer, "senso");
        assert_eq!(edit.handle_key(KeyCode::Enter), LineEditAction::Submit);
    }

    #[test]
    fn test_cursor_is_clamped() {
        let mut edit = LineEdit::new("ab");
        edit.handle_key(KeyCode::Right);
        assert_eq!(edit.cursor, 2);
        edit.handle_key(KeyCode::Home);
        edit.handle_key(KeyCode::Backspace);
        assert_eq!(edit.buffer, "ab");
    }
}
