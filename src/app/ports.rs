//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ BridgeService (domain)
//! ```
//!
//! Driven adapters (relays, ADC, event sinks) implement these traits.
//! The [`BridgeService`](super::service::BridgeService) consumes them via
//! generics, so the domain core never touches hardware directly.  The host
//! byte channel lives in [`crate::link::transport::Transport`].

use super::model::{ActuatorChannel, SoilSensor};

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the domain calls this to sample a soil probe.
pub trait SensorPort {
    /// Take one point sample and return the converter's raw value.
    ///
    /// Infallible by contract: a failed conversion is reported as whatever
    /// raw value the converter produced.
    fn read_raw(&mut self, sensor: SoilSensor) -> u16;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to drive a relay output.
pub trait ActuatorPort {
    /// Drive the channel's output line high (`true`) or low.
    fn set_output(&mut self, channel: ActuatorChannel, on: bool);

    /// Drive every output low.
    fn all_off(&mut self) {
        for channel in ActuatorChannel::ALL {
            self.set_output(channel, false);
        }
    }
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
