use crossterm::event::KeyCode;

use crate::error::Result;
use crate::form::{FormField, FormRow};
use crate::log_warn;

use super::line_edit::LineEditAction;
use super::{alert_text, App, LineEdit};

/// A text edit in progress, bound to the row it was started on
#[derive(Debug, Clone, PartialEq)]
pub struct FieldEdit {
    pub row: FormRow,
    pub line: LineEdit,
}

impl App {
    pub fn selected_form_row(&self) -> Option<FormRow> {
        self.form.rows().into_iter().nth(self.selected_row)
    }

    /// Keep the selection inside the row list after blocks come or go
    pub fn clamp_selected_row(&mut self) {
        let last = self.form.rows().len().saturating_sub(1);
        self.selected_row = self.selected_row.min(last);
    }

    pub(super) fn handle_config_key(&mut self, key: KeyCode) {
        if let Some(edit) = self.field_edit.as_mut() {
            match edit.line.handle_key(key) {
                LineEditAction::Submit => {
                    if let Some(edit) = self.field_edit.take() {
                        self.commit_field_edit(edit);
                    }
                }
                LineEditAction::Cancel => self.field_edit = None,
                LineEditAction::None => {}
            }
            return;
        }

        let result = match key {
            KeyCode::Up => {
                self.selected_row = self.selected_row.saturating_sub(1);
                Ok(false)
            }
            KeyCode::Down => {
                self.selected_row += 1;
                self.clamp_selected_row();
                Ok(false)
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.activate_row(),
            KeyCode::Left => self.cycle_row(false),
            KeyCode::Right => self.cycle_row(true),
            KeyCode::Char('+') | KeyCode::Char('a') => {
                self.add_sensor_block();
                Ok(true)
            }
            KeyCode::Char('-') | KeyCode::Delete => self.remove_selected_block(),
            _ => Ok(false),
        };

        match result {
            Ok(true) => self.sync_text_view(),
            Ok(false) => {}
            Err(e) => self.show_alert(alert_text(&e)),
        }
    }

    /// Enter on a row: edit text, step a selector, or add a sensor
    fn activate_row(&mut self) -> Result<bool> {
        match self.selected_form_row() {
            Some(FormRow::Field(field)) => {
                self.field_edit = Some(FieldEdit {
                    row: FormRow::Field(field),
                    line: LineEdit::new(self.form.field_text(field)),
                });
                Ok(false)
            }
            Some(FormRow::SensorName(id)) => {
                let name = self.form.block(id).map(|b| b.name().to_string()).unwrap_or_default();
                self.field_edit = Some(FieldEdit {
                    row: FormRow::SensorName(id),
                    line: LineEdit::new(&name),
                });
                Ok(false)
            }
            Some(FormRow::AddSensor) => {
                self.add_sensor_block();
                Ok(true)
            }
            Some(FormRow::SensorType(_)) | Some(FormRow::Pin(..)) => self.cycle_row(true),
            None => Ok(false),
        }
    }

    fn cycle_row(&mut self, forward: bool) -> Result<bool> {
        match self.selected_form_row() {
            Some(FormRow::SensorType(id)) => {
                self.form.cycle_sensor_type(id, forward)?;
                self.clamp_selected_row();
                Ok(true)
            }
            Some(FormRow::Pin(id, role)) => {
                self.form.cycle_pin(id, &role, forward)?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Write an edit back to the row it was started on. A sensor removed
    /// or reloaded in the meantime drops the edit.
    fn commit_field_edit(&mut self, edit: FieldEdit) {
        let text = edit.line.buffer;
        let result = match edit.row {
            FormRow::Field(field) => {
                self.form.set_field_text(field, &text);
                Ok(())
            }
            FormRow::SensorName(id) if self.form.block(id).is_none() => {
                log_warn!("Dropping name edit '{}' for a sensor that is gone", text);
                self.output.push("Edit dropped:", &format!("sensor for '{}' no longer exists", text));
                return;
            }
            FormRow::SensorName(id) => self.form.set_sensor_name(id, &text),
            _ => Ok(()),
        };

        match result {
            Ok(()) => self.sync_text_view(),
            Err(e) => self.show_alert(alert_text(&e)),
        }
    }

    /// Append an empty block and put the cursor on its name
    fn add_sensor_block(&mut self) {
        let id = self.form.add_sensor(None);
        if let Some(idx) = self.form.rows().iter().position(|r| *r == FormRow::SensorName(id)) {
            self.selected_row = idx;
        }
    }

    fn remove_selected_block(&mut self) -> Result<bool> {
        let Some(id) = self.selected_form_row().and_then(|r| r.block_id()) else {
            return Ok(false);
        };
        self.form.remove_sensor(id)?;
        self.clamp_selected_row();
        Ok(true)
    }

    /// Label shown next to a row, with `*` on required names
    pub fn form_row_label(&self, row: &FormRow) -> String {
        match row {
            FormRow::Field(field) => self.form.field_label(*field).to_string(),
            FormRow::SensorName(id) => format!("Sensor {} name *", self.block_number(*id)),
            FormRow::SensorType(_) => "  Type".to_string(),
            FormRow::Pin(_, role) => format!("  {}", role),
            FormRow::AddSensor => "[ + Add sensor ]".to_string(),
        }
    }

    pub fn form_row_value(&self, row: &FormRow) -> String {
        match row {
            FormRow::Field(field) => {
                let text = self.form.field_text(*field);
                if is_secret(*field) {
                    "•".repeat(text.chars().count())
                } else {
                    text.to_string()
                }
            }
            FormRow::SensorName(id) => self.form.block(*id).map(|b| b.name().to_string()).unwrap_or_default(),
            FormRow::SensorType(id) => self
                .form
                .block(*id)
                .map(|b| b.sensor_type.as_display_string())
                .unwrap_or_default(),
            FormRow::Pin(id, role) => self
                .form
                .block(*id)
                .and_then(|b| b.pin(role))
                .map(|p| p.value.as_display_string())
                .unwrap_or_default(),
            FormRow::AddSensor => String::new(),
        }
    }

    fn block_number(&self, id: crate::form::BlockId) -> usize {
        self.form.sensors.iter().position(|b| b.id == id).map(|i| i + 1).unwrap_or(0)
    }
}

fn is_secret(field: FormField) -> bool {
    matches!(
        field,
        FormField::WifiPass | FormField::ApPass | FormField::OtaPass | FormField::MqttPass
    )
}
