//! Capacitive soil-moisture probe driver.
//!
//! Reads the probe's analog output through an ESP32-S3 ADC1 channel and
//! returns the raw conversion.  No calibration and no averaging: the host
//! interprets raw values.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads ADC1 via the oneshot API (initialised by hw_init).
//! On host/test: reads from a static `AtomicU16` slot per probe for injection.

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicU16, Ordering};

use crate::app::model::SoilSensor;

#[cfg(not(target_os = "espidf"))]
static SIM_SOIL_ADC: [AtomicU16; 3] = [AtomicU16::new(0), AtomicU16::new(0), AtomicU16::new(0)];

/// Inject the raw value the next simulated read of `sensor` returns.
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_soil_adc(sensor: SoilSensor, raw: u16) {
    SIM_SOIL_ADC[sensor.index()].store(raw, Ordering::Relaxed);
}

pub struct SoilProbe {
    sensor: SoilSensor,
    last_raw: u16,
    total_reads: u32,
}

impl SoilProbe {
    pub fn new(sensor: SoilSensor) -> Self {
        Self {
            sensor,
            last_raw: 0,
            total_reads: 0,
        }
    }

    /// One point sample.
    pub fn read(&mut self) -> u16 {
        self.total_reads = self.total_reads.saturating_add(1);
        self.last_raw = self.read_adc();
        self.last_raw
    }

    #[cfg(target_os = "espidf")]
    fn read_adc(&self) -> u16 {
        crate::drivers::hw_init::adc1_read(self.sensor.adc_channel())
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_adc(&self) -> u16 {
        SIM_SOIL_ADC[self.sensor.index()].load(Ordering::Relaxed)
    }

    pub fn sensor(&self) -> SoilSensor {
        self.sensor
    }

    /// Most recent raw reading (0 before the first read).
    pub fn last_raw(&self) -> u16 {
        self.last_raw
    }

    pub fn total_reads(&self) -> u32 {
        self.total_reads
    }
}
