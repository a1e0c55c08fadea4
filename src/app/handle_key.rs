use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::AppEvent;

use super::{App, Tab};

impl App {
    /// Handles the key events and updates the state of [`App`].
    pub fn handle_key_events(&mut self, key_event: KeyEvent) -> color_eyre::Result<()> {
        if key_event.kind != KeyEventKind::Press {
            return Ok(());
        }

        if key_event.code == KeyCode::Char('c') && key_event.modifiers.contains(KeyModifiers::CONTROL) {
            self.events.send(AppEvent::Quit);
            return Ok(());
        }

        // alert is modal
        if self.alert.is_some() {
            self.alert = None;
            return Ok(());
        }

        if self.is_capturing_text() {
            self.handle_tab_key(key_event.code);
            return Ok(());
        }

        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => self.events.send(AppEvent::Quit),
            KeyCode::Tab => self.tab = self.tab.next(),
            KeyCode::BackTab => self.tab = self.tab.prev(),
            KeyCode::Char(c @ '1'..='4') => {
                let idx = c as usize - '1' as usize;
                self.tab = Tab::ALL[idx];
            }
            KeyCode::Char('g') => self.request_config(),
            KeyCode::Char('s') => self.submit_config(),
            KeyCode::Char('R') => self.request_restart(),
            code => self.handle_tab_key(code),
        }
        Ok(())
    }

    fn handle_tab_key(&mut self, code: KeyCode) {
        match self.tab {
            Tab::Config => self.handle_config_key(code),
            Tab::Editor => self.handle_editor_key(code),
            Tab::Files => self.handle_files_key(code),
            Tab::Output => self.handle_output_key(code),
        }
    }

    fn handle_output_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('c') => {
                self.output.clear();
                self.output_scroll = 0;
            }
            KeyCode::Up => self.output_scroll = self.output_scroll.saturating_sub(1),
            KeyCode::Down => {
                if self.output_scroll + 1 < self.output.len() {
                    self.output_scroll += 1;
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::super::{test_support, Tab};
    use crate::event::{AppEvent, Event, RequestKind};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_tab_switching() {
        let mut app = test_support::app();
        app.handle_key_events(press(KeyCode::Tab)).unwrap();
        assert_eq!(app.tab, Tab::Editor);
        app.handle_key_events(press(KeyCode::BackTab)).unwrap();
        assert_eq!(app.tab, Tab::Config);
        app.handle_key_events(press(KeyCode::Char('4'))).unwrap();
        assert_eq!(app.tab, Tab::Output);
    }

    #[test]
    fn test_any_key_dismisses_alert() {
        let mut app = test_support::app();
        app.show_alert("500");

        app.handle_key_events(press(KeyCode::Char('4'))).unwrap();

        assert!(app.alert.is_none());
        assert_eq!(app.tab, Tab::Config);
    }

    #[test]
    fn test_quit_goes_through_event_channel() {
        let mut app = test_support::app();
        app.handle_key_events(press(KeyCode::Char('q'))).unwrap();

        assert!(matches!(app.events.try_next(), Some(Event::App(AppEvent::Quit))));
    }

    #[test]
    fn test_typing_q_in_field_does_not_quit() {
        let mut app = test_support::app();
        app.handle_key_events(press(KeyCode::Enter)).unwrap();
        app.handle_key_events(press(KeyCode::Char('q'))).unwrap();
        app.handle_key_events(press(KeyCode::Enter)).unwrap();

        assert!(app.events.try_next().is_none());
        assert_eq!(app.form.field_text(crate::form::FormField::Module), "Module-Newq");
    }

    #[test]
    fn test_empty_sensor_name_blocks_submit() {
        let mut app = test_support::app();
        app.form.add_sensor(None);

        app.handle_key_events(press(KeyCode::Char('s'))).unwrap();

        assert!(app.alert.as_deref().unwrap().contains("sensors[0].name"));
        assert!(!app.requests.is_in_flight(RequestKind::SetConfig));
    }

    #[test]
    fn test_output_clear() {
        let mut app = test_support::app();
        app.output.push("Restart:", "ok");
        app.tab = Tab::Output;

        app.handle_key_events(press(KeyCode::Char('c'))).unwrap();
        assert!(app.output.is_empty());
    }
}
