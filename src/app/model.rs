//! Domain model: actuator channels, soil sensors, and the per-cycle report.

use core::fmt;

use crate::pins;

// ───────────────────────────────────────────────────────────────
// Actuator channels
// ───────────────────────────────────────────────────────────────

/// One of the four relay outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActuatorChannel {
    /// Heater, switched on by the host when the greenhouse is too cold.
    TempLow,
    Humidifier,
    IrrigationValve,
    /// Cooler / fan, switched on by the host when too hot.
    TempHigh,
}

impl ActuatorChannel {
    /// Every channel, in bank order.
    pub const ALL: [Self; 4] = [
        Self::TempLow,
        Self::Humidifier,
        Self::IrrigationValve,
        Self::TempHigh,
    ];

    /// Command keyword the host uses for this channel.
    pub const fn name(self) -> &'static str {
        match self {
            Self::TempLow => "TEMP_BAIXA",
            Self::Humidifier => "UMID",
            Self::IrrigationValve => "IRRIGACAO",
            Self::TempHigh => "TEMP_ALTA",
        }
    }

    /// Output GPIO driving this channel's relay.
    pub const fn gpio(self) -> i32 {
        match self {
            Self::TempLow => pins::TEMP_LOW_HEATER_GPIO,
            Self::Humidifier => pins::HUMIDIFIER_GPIO,
            Self::IrrigationValve => pins::IRRIGATION_VALVE_GPIO,
            Self::TempHigh => pins::TEMP_HIGH_COOLER_GPIO,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ActuatorChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ───────────────────────────────────────────────────────────────
// Soil sensors
// ───────────────────────────────────────────────────────────────

/// One of the three analog soil probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoilSensor {
    Soil1,
    Soil2,
    Soil3,
}

impl SoilSensor {
    /// Every probe, in report order.
    pub const ALL: [Self; 3] = [Self::Soil1, Self::Soil2, Self::Soil3];

    /// ADC1 channel the probe is wired to.
    pub const fn adc_channel(self) -> u32 {
        match self {
            Self::Soil1 => pins::ADC1_CH_SOIL_1,
            Self::Soil2 => pins::ADC1_CH_SOIL_2,
            Self::Soil3 => pins::ADC1_CH_SOIL_3,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }
}

// ───────────────────────────────────────────────────────────────
// Report
// ───────────────────────────────────────────────────────────────

/// Raw readings of all three probes taken in one cycle.
///
/// `Display` renders the wire form `SOLO:<v1>,<v2>,<v3>` (no terminator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SoilReport {
    pub raw: [u16; 3],
}

impl SoilReport {
    pub fn reading(&self, sensor: SoilSensor) -> u16 {
        self.raw[sensor.index()]
    }
}

impl fmt::Display for SoilReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.raw;
        write!(f, "SOLO:{},{},{}", a, b, c)
    }
}

// ───────────────────────────────────────────────────────────────
// Actuator bank
// ───────────────────────────────────────────────────────────────

/// Last commanded state of every actuator channel.  Starts all-off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActuatorBank {
    states: [bool; 4],
}

impl ActuatorBank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_on(&self, channel: ActuatorChannel) -> bool {
        self.states[channel.index()]
    }

    /// Record a new state.  Returns `true` if it differs from the previous one.
    pub fn set(&mut self, channel: ActuatorChannel, on: bool) -> bool {
        let slot = &mut self.states[channel.index()];
        let changed = *slot != on;
        *slot = on;
        changed
    }

    /// Iterate `(channel, state)` pairs in bank order.
    pub fn iter(&self) -> impl Iterator<Item = (ActuatorChannel, bool)> + '_ {
        ActuatorChannel::ALL.into_iter().map(|ch| (ch, self.is_on(ch)))
    }
}
