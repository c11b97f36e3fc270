//! Hardware adapter — bridges real peripherals to domain port traits.
//!
//! Owns the [`SoilSensorHub`] and one [`RelayDriver`] per actuator
//! channel, exposing them through [`SensorPort`] and [`ActuatorPort`].
//! On non-espidf targets, the underlying drivers use cfg-gated
//! simulation stubs.

use crate::app::model::{ActuatorChannel, SoilSensor};
use crate::app::ports::{ActuatorPort, SensorPort};
use crate::drivers::relay::RelayDriver;
use crate::sensors::SoilSensorHub;

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter {
    soil: SoilSensorHub,
    relays: [RelayDriver; 4],
}

impl HardwareAdapter {
    pub fn new(soil: SoilSensorHub) -> Self {
        Self {
            soil,
            relays: ActuatorChannel::ALL.map(RelayDriver::new),
        }
    }

    pub fn relay(&self, channel: ActuatorChannel) -> &RelayDriver {
        &self.relays[channel.index()]
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl SensorPort for HardwareAdapter {
    fn read_raw(&mut self, sensor: SoilSensor) -> u16 {
        self.soil.read(sensor)
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl ActuatorPort for HardwareAdapter {
    fn set_output(&mut self, channel: ActuatorChannel, on: bool) {
        self.relays[channel.index()].set(on);
    }
}
