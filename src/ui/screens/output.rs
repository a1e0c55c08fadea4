use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget, Wrap},
};

use crate::app::App;
use crate::ui::components::UiComponent;

/// Response log, newest entry on top
pub fn render_output(app: &App, area: Rect, buf: &mut Buffer) {
    if app.output.is_empty() {
        UiComponent::empty_message(" Output ", "Device responses will show up here.").render(area, buf);
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    for entry in app.output.entries().skip(app.output_scroll) {
        lines.push(Line::from(vec![
            Span::styled(format!("[{}] ", entry.time), Style::default().fg(Color::DarkGray)),
            Span::styled(entry.title.clone(), Style::default().fg(Color::Yellow).bold()),
        ]));
        for body_line in entry.body.lines() {
            lines.push(Line::from(body_line.to_string()));
        }
        lines.push(Line::default());
    }

    Paragraph::new(lines)
        .block(
            Block::bordered()
                .title(format!(" Output ({}) ", app.output.len()))
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false })
        .render(area, buf);
}
