use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    widgets::{Block, BorderType, Paragraph, Row, Table, Widget},
};

use crate::app::App;
use crate::ui::components::UiComponent;
use crate::ui::style::{dim_unless_focused, editing_style, row_style};

pub fn render_files(app: &App, area: Rect, buf: &mut Buffer) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(if app.upload_prompt.is_some() { 3 } else { 0 }),
        ])
        .split(area);

    let is_focused = app.upload_prompt.is_none();
    let border_style = dim_unless_focused(is_focused, Style::default().fg(Color::Cyan));

    if app.files.files.is_empty() {
        UiComponent::empty_message(" Files ", "No files on the device.\n\nPress r to refresh or u to upload.")
            .render(layout[0], buf);
    } else {
        let rows: Vec<Row> = app
            .files
            .rows()
            .into_iter()
            .enumerate()
            .map(|(idx, (name, size))| Row::new(vec![name, size]).style(row_style(idx == app.selected_file)))
            .collect();

        Table::new(rows, [Constraint::Min(20), Constraint::Length(14)])
            .header(Row::new(vec!["Name", "Size"]).style(Style::default().fg(Color::Cyan).bold()))
            .block(
                Block::bordered()
                    .title(format!(" Files ({}) ", app.files.files.len()))
                    .border_type(BorderType::Rounded)
                    .border_style(border_style),
            )
            .render(layout[0], buf);
    }

    let disk = app.files.disk_summary().unwrap_or_default();
    Paragraph::new(disk).fg(Color::Gray).render(layout[1], buf);

    if let Some(prompt) = &app.upload_prompt {
        Paragraph::new(prompt.with_cursor())
            .block(
                Block::bordered()
                    .title(" Upload paths (space separated) ")
                    .border_type(BorderType::Rounded),
            )
            .style(editing_style())
            .render(layout[2], buf);
    }
}
