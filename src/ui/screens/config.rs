use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::app::App;
use crate::form::FormRow;
use crate::ui::style::{editing_style, row_style};

const LABEL_WIDTH: u16 = 22;

pub fn render_config(app: &App, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(
            " Device Configuration · board {} · {} sensors ",
            app.profile.name, app.form.sensor_count
        ));

    let inner = block.inner(area);
    block.render(area, buf);

    // Split into two columns if space permits
    let (left_area, right_area) = if inner.width > 90 {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(inner);
        (chunks[0], chunks[1])
    } else {
        (inner, Rect::default())
    };

    let rows = app.form.rows();
    let visible = left_area.height as usize;
    let offset = if visible == 0 { 0 } else { app.selected_row.saturating_sub(visible - 1) };

    let mut y = left_area.y;
    for (idx, row) in rows.iter().enumerate().skip(offset) {
        if y >= left_area.bottom() {
            break;
        }

        let is_selected = idx == app.selected_row;
        let style = row_style(is_selected);

        let label = format!("{:width$}", app.form_row_label(row), width = LABEL_WIDTH as usize);
        buf.set_string(left_area.x, y, &label, style);

        let value_x = left_area.x + LABEL_WIDTH;
        let value_width = left_area.width.saturating_sub(LABEL_WIDTH) as usize;

        match &app.field_edit {
            Some(edit) if edit.row == *row => {
                buf.set_stringn(value_x, y, edit.line.with_cursor(), value_width, editing_style());
            }
            _ => {
                let value = app.form_row_value(row);
                let display = match row {
                    FormRow::SensorType(_) | FormRow::Pin(..) => format!("< {} >", value),
                    _ => value,
                };
                buf.set_stringn(value_x, y, &display, value_width, style);
            }
        }

        y += 1;
    }

    if right_area.width > 0 {
        let help = if app.field_edit.is_some() {
            "Editing:\n\nEnter - Save\nEsc   - Cancel\n←/→   - Move cursor"
        } else {
            "Fields marked * are required.\n\n\
             ↑/↓   - Navigate\n\
             Enter - Edit text\n\
             ←/→   - Change type or pin\n\
             +     - Add sensor\n\
             -/Del - Remove sensor\n\n\
             g - Get config from device\n\
             s - Send config to device\n\
             R - Restart device"
        };
        Paragraph::new(help)
            .block(Block::default().borders(Borders::LEFT))
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: false })
            .render(right_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{buffer::Buffer, layout::Rect};

    use super::*;
    use crate::app::test_support;
    use crate::ui::buffer_text;

    #[test]
    fn test_sensor_block_rows() {
        let mut app = test_support::app();
        let id = app.form.add_sensor(None);
        app.form.select_sensor_type(id, "DHT11").unwrap();

        let area = Rect::new(0, 0, 120, 24);
        let mut buf = Buffer::empty(area);
        render_config(&app, area, &mut buf);
        let screen = buffer_text(&buf);

        assert!(screen.contains("Sensor 1 name *"));
        assert!(screen.contains("< DHT11, temp/humi >"));
        assert!(screen.contains("pinData"));
        assert!(screen.contains("[ + Add sensor ]"));
    }
}
