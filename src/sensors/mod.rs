//! Sensor subsystem — the soil probe driver and the aggregating [`SoilSensorHub`].

pub mod soil;

use crate::app::model::SoilSensor;
use soil::SoilProbe;

/// Owns one [`SoilProbe`] per analog input.
pub struct SoilSensorHub {
    probes: [SoilProbe; 3],
}

impl Default for SoilSensorHub {
    fn default() -> Self {
        Self::new()
    }
}

impl SoilSensorHub {
    pub fn new() -> Self {
        Self {
            probes: SoilSensor::ALL.map(SoilProbe::new),
        }
    }

    /// Sample one probe.
    pub fn read(&mut self, sensor: SoilSensor) -> u16 {
        self.probes[sensor.index()].read()
    }

    pub fn probe(&self, sensor: SoilSensor) -> &SoilProbe {
        &self.probes[sensor.index()]
    }
}
