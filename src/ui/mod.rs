pub mod components;
pub mod screens;
pub mod style;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, BorderType, Clear, Tabs, Widget},
};

use crate::app::{App, Tab};
use crate::ui::components::{KeyHint, UiComponent};
use crate::ui::screens::{config::render_config, editor::render_editor, files::render_files, output::render_output};

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(1),
                Constraint::Length(3),
            ])
            .split(area);

        render_tabs(self, layout[0], buf);

        match self.tab {
            Tab::Config => render_config(self, layout[1], buf),
            Tab::Editor => render_editor(self, layout[1], buf),
            Tab::Files => render_files(self, layout[1], buf),
            Tab::Output => render_output(self, layout[1], buf),
        }

        let footer = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(34)])
            .split(layout[2]);
        UiComponent::help(help_hints(self)).render(footer[0], buf);
        UiComponent::busy(&self.requests.pending_labels(), self.ticks).render(footer[1], buf);

        if let Some(message) = &self.alert {
            let popup = centered_rect(60, 40, area);
            Clear.render(popup, buf);
            UiComponent::alert(message).render(popup, buf);
        }
    }
}

fn render_tabs(app: &App, area: Rect, buf: &mut Buffer) {
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| Line::from(format!("{} {}", i + 1, tab.title())))
        .collect();

    Tabs::new(titles)
        .select(app.tab.index())
        .block(
            Block::bordered()
                .title(format!(" espman · {} ", app.client.base_url()))
                .border_type(BorderType::Rounded)
                .fg(Color::Green),
        )
        .style(Style::default().fg(Color::White))
        .highlight_style(Style::default().fg(Color::Yellow).bold())
        .render(area, buf);
}

fn help_hints(app: &App) -> &'static [KeyHint] {
    if app.alert.is_some() {
        return &[("any key", "dismiss")];
    }
    if app.is_capturing_text() {
        return &[("Enter", "save"), ("Esc", "cancel"), ("←/→", "move cursor")];
    }
    match app.tab {
        Tab::Config => &[
            ("↑/↓", "move"),
            ("Enter", "edit"),
            ("←/→", "change"),
            ("+/-", "add/remove sensor"),
            ("g", "get"),
            ("s", "set"),
            ("R", "restart"),
            ("q", "quit"),
        ],
        Tab::Editor => &[
            ("e", "open in $EDITOR"),
            ("a", "apply to form"),
            ("↑/↓", "scroll"),
            ("g", "get"),
            ("s", "set"),
            ("q", "quit"),
        ],
        Tab::Files => &[
            ("↑/↓", "move"),
            ("r", "refresh"),
            ("d", "remove"),
            ("u", "upload"),
            ("q", "quit"),
        ],
        Tab::Output => &[("↑/↓", "scroll"), ("c", "clear"), ("q", "quit")],
    }
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Flatten a rendered buffer into lines, for assertions on screen content
#[cfg(test)]
pub(crate) fn buffer_text(buf: &Buffer) -> String {
    let area = buf.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            out.push_str(buf[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}
