#[allow(unused_imports)] // Stylize for .bold() and friends
use ratatui::style::{Style, Stylize};
use ratatui::style::Color;

/// Busy indicator frames
pub const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

pub fn dim_unless_focused(is_focused: bool, style: Style) -> Style {
    if is_focused { style.bold() } else { style.dim().italic() }
}

pub fn row_style(is_selected: bool) -> Style {
    if is_selected {
        Style::default().fg(Color::Yellow).bold()
    } else {
        Style::default().fg(Color::White)
    }
}

pub fn editing_style() -> Style {
    Style::default().fg(Color::Green)
}
