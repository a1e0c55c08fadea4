use crate::error::{EspmanError, Result};
use crate::registry::BoardProfile;

use super::{BlockId, ConfigForm, FieldValue, PinField, SensorBlock};

impl ConfigForm {
    /// Change a block's type and rebuild its pin fields for the new type
    pub fn select_sensor_type(&mut self, id: BlockId, key: &str) -> Result<()> {
        let profile = self.profile.clone();
        let block = self.block_mut(id).ok_or(EspmanError::UnknownBlock(id))?;

        if !block.sensor_type.select_value(key) {
            return Err(EspmanError::InvalidInput {
                field: "type".to_string(),
                value: key.to_string(),
            });
        }
        Self::rebuild_pins(block, &profile);
        Ok(())
    }

    /// Step the type selector and apply the same rebuild
    pub fn cycle_sensor_type(&mut self, id: BlockId, forward: bool) -> Result<()> {
        let profile = self.profile.clone();
        let block = self.block_mut(id).ok_or(EspmanError::UnknownBlock(id))?;

        block.sensor_type.cycle(forward);
        Self::rebuild_pins(block, &profile);
        Ok(())
    }

    fn rebuild_pins(block: &mut SensorBlock, profile: &BoardProfile) {
        let labels: Vec<(String, String)> = profile
            .pin_labels()
            .into_iter()
            .map(|label| (label.clone(), label))
            .collect();

        block.pins = profile
            .pin_roles(block.type_key())
            .iter()
            .map(|role| PinField {
                role: role.clone(),
                value: FieldValue::select(labels.clone()),
            })
            .collect();
    }
}
