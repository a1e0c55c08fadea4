use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, BorderType, Paragraph, Widget},
};

use crate::app::App;

/// The pretty JSON text view. Changes are made in an external editor.
pub fn render_editor(app: &App, area: Rect, buf: &mut Buffer) {
    let lines = app.text_view.lines().count();

    Paragraph::new(app.text_view.as_str())
        .block(
            Block::bordered()
                .title(format!(" Config JSON ({} lines) ", lines))
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White))
        .scroll((app.editor_scroll, 0))
        .render(area, buf);
}
