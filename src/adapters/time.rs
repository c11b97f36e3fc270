//! Blocking delay adapter.
//!
//! Implements [`embedded_hal::delay::DelayNs`] with `std::thread::sleep`.
//! On ESP-IDF the std shim maps that onto `vTaskDelay`, so the idle period
//! yields to the other FreeRTOS tasks (idle task, TWDT) instead of spinning.

use core::time::Duration;

use embedded_hal::delay::DelayNs;

/// Sleep-based delay provider for the main loop.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemDelay;

impl SystemDelay {
    pub fn new() -> Self {
        Self
    }
}

impl DelayNs for SystemDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(Duration::from_nanos(ns as u64));
    }

    fn delay_us(&mut self, us: u32) {
        std::thread::sleep(Duration::from_micros(us as u64));
    }

    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(Duration::from_millis(ms as u64));
    }
}
