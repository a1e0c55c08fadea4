use crossterm::event::KeyCode;

use super::App;

impl App {
    pub(super) fn handle_editor_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('e') | KeyCode::Enter => self.external_edit_requested = true,
            KeyCode::Char('a') => self.apply_text_view(),
            KeyCode::Up => self.editor_scroll = self.editor_scroll.saturating_sub(1),
            KeyCode::Down => {
                let max = self.text_view.lines().count().saturating_sub(1) as u16;
                self.editor_scroll = (self.editor_scroll + 1).min(max);
            }
            KeyCode::PageUp => self.editor_scroll = self.editor_scroll.saturating_sub(10),
            KeyCode::PageDown => {
                let max = self.text_view.lines().count().saturating_sub(1) as u16;
                self.editor_scroll = (self.editor_scroll + 10).min(max);
            }
            KeyCode::Home => self.editor_scroll = 0,
            _ => {}
        }
    }
}
