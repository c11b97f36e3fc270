//! Relay output driver — one digital line per actuator channel.
//!
//! The driver is a dumb actuator: it records the commanded level and
//! writes it to the pin.  Which channel goes on is decided by the host.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives the GPIO via hw_init helpers.
//! On host/test: hw_init keeps an in-memory level table.

use embedded_hal::digital::{ErrorType, OutputPin, StatefulOutputPin};

use crate::app::model::ActuatorChannel;
use crate::drivers::hw_init;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayState {
    Off,
    On,
}

pub struct RelayDriver {
    channel: ActuatorChannel,
    state: RelayState,
}

impl RelayDriver {
    /// Bind to `channel`'s pin.  The pin is not written until the first
    /// `set`; hw_init has already driven it LOW.
    pub fn new(channel: ActuatorChannel) -> Self {
        Self {
            channel,
            state: RelayState::Off,
        }
    }

    pub fn set(&mut self, on: bool) {
        hw_init::gpio_write(self.channel.gpio(), on);
        self.state = if on { RelayState::On } else { RelayState::Off };
    }

    pub fn state(&self) -> RelayState {
        self.state
    }

    pub fn is_on(&self) -> bool {
        self.state == RelayState::On
    }

    pub fn channel(&self) -> ActuatorChannel {
        self.channel
    }
}

// ── embedded-hal digital traits ───────────────────────────────

impl ErrorType for RelayDriver {
    type Error = core::convert::Infallible;
}

impl OutputPin for RelayDriver {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.set(true);
        Ok(())
    }
}

impl StatefulOutputPin for RelayDriver {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.is_on())
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.is_on())
    }
}
