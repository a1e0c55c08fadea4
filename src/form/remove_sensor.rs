use crate::error::{EspmanError, Result};

use super::{BlockId, ConfigForm};

impl ConfigForm {
    pub fn remove_sensor(&mut self, id: BlockId) -> Result<()> {
        let idx = self
            .sensors
            .iter()
            .position(|b| b.id == id)
            .ok_or(EspmanError::UnknownBlock(id))?;

        self.sensors.remove(idx);
        self.sensor_count -= 1;
        Ok(())
    }

    /// Drop every block, as a full reload does
    pub(super) fn clear_sensors(&mut self) {
        self.sensors.clear();
        self.sensor_count = 0;
    }
}
