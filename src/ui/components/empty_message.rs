use ratatui::{
    layout::Alignment,
    prelude::{Color, Stylize, Style},
    widgets::{Block, BorderType, Padding, Paragraph, Wrap},
};

use super::UiComponent;

impl UiComponent {
    /// Stand-in for a table or log with nothing in it yet
    pub fn empty_message<'a>(title: &'a str, text: &'a str) -> Paragraph<'a> {
        let block = Block::bordered()
            .title(title)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan))
            .padding(Padding::symmetric(1, 1));

        Paragraph::new(text)
            .block(block)
            .style(Style::default().fg(Color::Gray).italic())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
    }
}
