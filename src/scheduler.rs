//! Fixed-period cycle scheduler.
//!
//! The firmware has exactly one task: dispatch, report, sleep, repeat.
//! [`CycleScheduler`] runs one such iteration at a time so the loop body
//! can be driven from tests with a recording delay.
//!
//! ```text
//!  ┌──────────────┐   ┌──────────────┐   ┌──────────────────────┐
//!  │ dispatch ≤1  │──▶│ report SOLO: │──▶│ idle report_interval │──┐
//!  │ host line    │   │ line         │   │ (DelayNs)            │  │
//!  └──────────────┘   └──────────────┘   └──────────────────────┘  │
//!         ▲                                                        │
//!         └────────────────────────────────────────────────────────┘
//! ```
//!
//! The idle period is fixed; it does not adapt to input volume or link
//! occupancy.

use embedded_hal::delay::DelayNs;
use log::trace;

use crate::app::model::SoilReport;
use crate::app::ports::{ActuatorPort, EventSink, SensorPort};
use crate::app::service::BridgeService;
use crate::link::host::HostLink;
use crate::link::transport::Transport;

pub struct CycleScheduler<D: DelayNs> {
    delay: D,
    interval_ms: u32,
    cycles: u64,
}

impl<D: DelayNs> CycleScheduler<D> {
    pub fn new(delay: D, interval_ms: u32) -> Self {
        Self {
            delay,
            interval_ms,
            cycles: 0,
        }
    }

    /// One loop iteration: service tick, then the idle period.
    pub fn run_cycle<T: Transport>(
        &mut self,
        app: &mut BridgeService,
        hw: &mut (impl SensorPort + ActuatorPort),
        link: &mut HostLink<T>,
        sink: &mut impl EventSink,
    ) -> SoilReport {
        let report = app.tick(hw, link, sink);
        self.cycles += 1;
        trace!("cycle {} done, idling {}ms", self.cycles, self.interval_ms);
        self.delay.delay_ms(self.interval_ms);
        report
    }

    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn delay(&self) -> &D {
        &self.delay
    }
}
