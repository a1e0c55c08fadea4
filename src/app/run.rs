use ratatui::DefaultTerminal;

use crate::event::{AppEvent, Event};
use crate::log_error;

use super::external_editor::edit_in_external_editor;
use super::App;

impl App {
    /// Run the application's main loop.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        let mut needs_redraw = true;

        while self.running {
            if needs_redraw {
                terminal.draw(|frame| frame.render_widget(&self, frame.area()))?;
                needs_redraw = false;
            }

            match self.events.next().await {
                Ok(Event::Tick) => {
                    // only the busy indicator moves on its own
                    if self.requests.any_in_flight() {
                        self.ticks = self.ticks.wrapping_add(1);
                        needs_redraw = true;
                    }
                }
                Ok(Event::Crossterm(event)) => match event {
                    crossterm::event::Event::Key(key_event) => {
                        self.handle_key_events(key_event)?;
                        needs_redraw = true;
                    }
                    crossterm::event::Event::Resize(_, _) => needs_redraw = true,
                    _ => {}
                },
                Ok(Event::App(app_event)) => {
                    match app_event {
                        AppEvent::Quit => self.quit(),
                        AppEvent::Device { seq, outcome } => self.handle_device_outcome(seq, outcome),
                    }
                    needs_redraw = true;
                }
                Err(e) => {
                    log_error!("Event error: {}", e);
                    break;
                }
            }

            if self.external_edit_requested {
                self.external_edit_requested = false;
                self.events.suspend();
                ratatui::restore();
                let edited = edit_in_external_editor(&self.text_view).await;
                terminal = ratatui::init();
                self.events.resume();
                terminal.clear()?;
                self.finish_external_edit(edited);
                needs_redraw = true;
            }
        }
        Ok(())
    }
}
