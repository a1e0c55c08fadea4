use ratatui::{
    layout::Alignment,
    prelude::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
};

use super::UiComponent;

/// One footer hint: key, then what it does
pub type KeyHint = (&'static str, &'static str);

impl UiComponent {
    pub fn help(hints: &[KeyHint]) -> Paragraph<'static> {
        let mut spans = Vec::with_capacity(hints.len() * 3);
        for (i, (key, action)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" │ ").fg(Color::DarkGray));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::Yellow).bold()));
            spans.push(Span::styled(format!(" {}", action), Style::default().fg(Color::Gray)));
        }

        Paragraph::new(Line::from(spans))
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .alignment(Alignment::Center)
    }
}
