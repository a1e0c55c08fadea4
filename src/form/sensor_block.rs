use uuid::Uuid;

use super::FieldValue;

/// Stable identity of a sensor block for its whole lifetime
pub type BlockId = Uuid;

#[derive(Debug, Clone)]
pub struct SensorBlock {
    pub id: BlockId,
    /// Required free text
    pub name: FieldValue,
    /// Selector over the sensor type table, empty type first
    pub sensor_type: FieldValue,
    /// Rebuilt every time the type changes
    pub pins: Vec<PinField>,
}

#[derive(Debug, Clone)]
pub struct PinField {
    pub role: String,
    /// Selector over pin labels, unassigned first
    pub value: FieldValue,
}

impl SensorBlock {
    pub fn name(&self) -> &str {
        self.name.value()
    }

    pub fn type_key(&self) -> &str {
        self.sensor_type.value()
    }

    pub fn pin(&self, role: &str) -> Option<&PinField> {
        self.pins.iter().find(|p| p.role == role)
    }

    pub fn pin_mut(&mut self, role: &str) -> Option<&mut PinField> {
        self.pins.iter_mut().find(|p| p.role == role)
    }
}
