use ratatui::{
    layout::Alignment,
    prelude::{Color, Style},
    widgets::{Block, BorderType, Paragraph},
};

use super::UiComponent;
use crate::ui::style::SPINNER;

impl UiComponent {
    /// Device requests still waiting for an answer, with a spinner driven by ticks
    pub fn busy(pending: &[&str], ticks: u64) -> Paragraph<'static> {
        let (text, color) = if pending.is_empty() {
            ("idle".to_string(), Color::DarkGray)
        } else {
            let frame = SPINNER[(ticks / 3) as usize % SPINNER.len()];
            (format!("{} {}", frame, pending.join(", ")), Color::Yellow)
        };

        Paragraph::new(text)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(color))
                    .title(" Requests "),
            )
            .style(Style::default().fg(color))
            .alignment(Alignment::Center)
    }
}
