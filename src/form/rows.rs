use super::{BlockId, ConfigForm, FormField};

/// One navigable line of the Config tab
#[derive(Debug, Clone, PartialEq)]
pub enum FormRow {
    Field(FormField),
    SensorName(BlockId),
    SensorType(BlockId),
    Pin(BlockId, String),
    AddSensor,
}

impl FormRow {
    /// The sensor block this row belongs to, if any
    pub fn block_id(&self) -> Option<BlockId> {
        match self {
            Self::SensorName(id) | Self::SensorType(id) | Self::Pin(id, _) => Some(*id),
            _ => None,
        }
    }
}

impl ConfigForm {
    /// Flatten the form: scalar fields, each block's name/type/pins, then "add"
    pub fn rows(&self) -> Vec<FormRow> {
        let mut rows: Vec<FormRow> = self
            .fields
            .iter()
            .map(|(_, field, _)| FormRow::Field(*field))
            .collect();

        for block in &self.sensors {
            rows.push(FormRow::SensorName(block.id));
            rows.push(FormRow::SensorType(block.id));
            for pin in &block.pins {
                rows.push(FormRow::Pin(block.id, pin.role.clone()));
            }
        }

        rows.push(FormRow::AddSensor);
        rows
    }
}
