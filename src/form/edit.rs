use crate::error::{EspmanError, Result};

use super::{BlockId, ConfigForm, FieldValue, FormField, SensorBlock};

impl ConfigForm {
    pub fn field_text(&self, field: FormField) -> &str {
        self.fields
            .iter()
            .find(|(_, f, _)| *f == field)
            .map(|(_, _, value)| value.value())
            .unwrap_or("")
    }

    pub fn set_field_text(&mut self, field: FormField, text: &str) {
        if let Some((_, _, value)) = self.fields.iter_mut().find(|(_, f, _)| *f == field) {
            *value = FieldValue::Text(text.to_string());
        }
    }

    pub fn field_label(&self, field: FormField) -> &str {
        self.fields
            .iter()
            .find(|(_, f, _)| *f == field)
            .map(|(label, _, _)| label.as_str())
            .unwrap_or("")
    }

    pub fn block(&self, id: BlockId) -> Option<&SensorBlock> {
        self.sensors.iter().find(|b| b.id == id)
    }

    pub(super) fn block_mut(&mut self, id: BlockId) -> Option<&mut SensorBlock> {
        self.sensors.iter_mut().find(|b| b.id == id)
    }

    pub fn set_sensor_name(&mut self, id: BlockId, name: &str) -> Result<()> {
        let block = self.block_mut(id).ok_or(EspmanError::UnknownBlock(id))?;
        block.name = FieldValue::Text(name.to_string());
        Ok(())
    }

    /// Select a pin by its board label (`""` for unassigned)
    pub fn set_pin(&mut self, id: BlockId, role: &str, label: &str) -> Result<()> {
        let block = self.block_mut(id).ok_or(EspmanError::UnknownBlock(id))?;
        let pin = block.pin_mut(role).ok_or_else(|| EspmanError::InvalidInput {
            field: "pin role".to_string(),
            value: role.to_string(),
        })?;

        if !pin.value.select_value(label) {
            return Err(EspmanError::InvalidInput {
                field: role.to_string(),
                value: label.to_string(),
            });
        }
        Ok(())
    }

    pub fn cycle_pin(&mut self, id: BlockId, role: &str, forward: bool) -> Result<()> {
        let block = self.block_mut(id).ok_or(EspmanError::UnknownBlock(id))?;
        let pin = block.pin_mut(role).ok_or_else(|| EspmanError::InvalidInput {
            field: "pin role".to_string(),
            value: role.to_string(),
        })?;
        pin.value.cycle(forward);
        Ok(())
    }
}
