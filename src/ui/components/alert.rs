use ratatui::{
    layout::Alignment,
    prelude::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap},
};

use super::UiComponent;

impl UiComponent {
    pub fn alert(message: &str) -> Paragraph {
        Paragraph::new(format!("{}\n\n(press any key)", message))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::Red))
                    .title(" Error ")
                    .padding(Padding::symmetric(1, 1))
            )
            .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: false })
    }
}
