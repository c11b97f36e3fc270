//! Application service — the hexagonal core.
//!
//! [`BridgeService`] owns the actuator bank and runs the two per-cycle
//! steps: command dispatch and soil reporting.  All I/O flows through
//! port traits injected at call sites, making the whole service testable
//! with mock adapters.
//!
//! ```text
//!   HostLink ──▶ ┌──────────────────────┐ ──▶ HostLink (SOLO: line)
//!                │     BridgeService    │
//!  SensorPort ──▶│ dispatch · report    │ ──▶ ActuatorPort
//!                └──────────────────────┘ ──▶ EventSink
//! ```

use log::{debug, info, warn};

use crate::config::BridgeConfig;
use crate::link::host::HostLink;
use crate::link::transport::Transport;

use super::commands::Command;
use super::events::AppEvent;
use super::model::{ActuatorBank, ActuatorChannel, SoilReport, SoilSensor};
use super::ports::{ActuatorPort, EventSink, SensorPort};

// ───────────────────────────────────────────────────────────────
// BridgeService
// ───────────────────────────────────────────────────────────────

pub struct BridgeService {
    config: BridgeConfig,
    bank: ActuatorBank,
    cycle_count: u64,
}

impl BridgeService {
    /// Construct the service.  Outputs are not touched until [`start`].
    pub fn new(config: BridgeConfig) -> Self {
        Self {
            config,
            bank: ActuatorBank::new(),
            cycle_count: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Drive every actuator off.  Call once before the first cycle.
    pub fn start(&mut self, hw: &mut impl ActuatorPort, sink: &mut impl EventSink) {
        hw.all_off();
        self.bank = ActuatorBank::new();
        sink.emit(&AppEvent::Started);
        info!(
            "BridgeService started (interval={}ms, moisture_threshold={})",
            self.config.report_interval_ms, self.config.moisture_threshold
        );
    }

    // ── Per-cycle orchestration ───────────────────────────────

    /// Run one cycle without the idle period: dispatch, then report.
    pub fn tick<T: Transport>(
        &mut self,
        hw: &mut (impl SensorPort + ActuatorPort),
        link: &mut HostLink<T>,
        sink: &mut impl EventSink,
    ) -> SoilReport {
        self.cycle_count += 1;
        self.dispatch(link, hw, sink);
        self.report(hw, link, sink)
    }

    // ── Command Dispatcher ────────────────────────────────────

    /// Consume at most one pending line from the host and apply it.
    ///
    /// Returns immediately when no complete line is waiting.  Returns the
    /// applied command, or `None` if nothing was applied.
    pub fn dispatch<T: Transport>(
        &mut self,
        link: &mut HostLink<T>,
        hw: &mut impl ActuatorPort,
        sink: &mut impl EventSink,
    ) -> Option<Command> {
        let raw = link.poll_line()?;
        self.dispatch_line(&raw, hw, sink)
    }

    /// Classify one line and drive the matching output.
    pub fn dispatch_line(
        &mut self,
        line: &[u8],
        hw: &mut impl ActuatorPort,
        sink: &mut impl EventSink,
    ) -> Option<Command> {
        let Some(cmd) = Command::parse(line) else {
            debug!("CMD | ignored \"{}\"", line.escape_ascii());
            sink.emit(&AppEvent::CommandIgnored);
            return None;
        };

        hw.set_output(cmd.target, cmd.on);
        let changed = self.bank.set(cmd.target, cmd.on);
        sink.emit(&AppEvent::ActuatorSet {
            channel: cmd.target,
            on: cmd.on,
            changed,
        });
        Some(cmd)
    }

    // ── Sensor Reporter ───────────────────────────────────────

    /// Sample the three probes in order and write one `SOLO:` line.
    ///
    /// A failed write is logged and the cycle carries on; the reading is
    /// returned either way.
    pub fn report<T: Transport>(
        &mut self,
        hw: &mut impl SensorPort,
        link: &mut HostLink<T>,
        sink: &mut impl EventSink,
    ) -> SoilReport {
        let report = Self::sample(hw);

        match link.send_line(&report) {
            Ok(()) => sink.emit(&AppEvent::Reported(report)),
            Err(e) => {
                warn!("SOLO | report not sent: {}", e);
                sink.emit(&AppEvent::ReportDropped);
            }
        }
        report
    }

    fn sample(hw: &mut impl SensorPort) -> SoilReport {
        let mut report = SoilReport::default();
        for sensor in SoilSensor::ALL {
            report.raw[sensor.index()] = hw.read_raw(sensor);
        }
        report
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn is_on(&self, channel: ActuatorChannel) -> bool {
        self.bank.is_on(channel)
    }

    pub fn bank(&self) -> &ActuatorBank {
        &self.bank
    }

    /// Completed [`tick`](Self::tick) calls since construction.
    pub fn cycle_count(&self) -> u64 {
        self.cycle_count
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }
}
