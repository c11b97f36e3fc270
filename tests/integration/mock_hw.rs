//! Mock hardware adapters for integration tests.
//!
//! Records every relay write and hands out scripted ADC readings so tests
//! can assert on the full I/O history without touching real GPIO/ADC.

use embedded_hal::delay::DelayNs;
use soilbridge::app::events::AppEvent;
use soilbridge::app::model::{ActuatorChannel, SoilSensor};
use soilbridge::app::ports::{ActuatorPort, EventSink, SensorPort};
use soilbridge::link::transport::Transport;
use std::collections::VecDeque;

// ── Relay call record ─────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelayWrite {
    pub channel: ActuatorChannel,
    pub on: bool,
}

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    pub writes: Vec<RelayWrite>,
    /// Current line level per channel, indexed by `ActuatorChannel::index`.
    pub levels: [bool; 4],
    /// Readings returned by successive cycles; the last one repeats.
    pub script: VecDeque<[u16; 3]>,
    current: [u16; 3],
    pub reads: Vec<SoilSensor>,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self {
            writes: Vec::new(),
            levels: [false; 4],
            script: VecDeque::new(),
            current: [0; 3],
            reads: Vec::new(),
        }
    }

    pub fn with_readings(readings: [u16; 3]) -> Self {
        let mut hw = Self::new();
        hw.current = readings;
        hw
    }

    pub fn level(&self, channel: ActuatorChannel) -> bool {
        self.levels[channel.index()]
    }
}

impl Default for MockHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl ActuatorPort for MockHardware {
    fn set_output(&mut self, channel: ActuatorChannel, on: bool) {
        self.levels[channel.index()] = on;
        self.writes.push(RelayWrite { channel, on });
    }
}

impl SensorPort for MockHardware {
    fn read_raw(&mut self, sensor: SoilSensor) -> u16 {
        // A new cycle starts with the first probe.
        if sensor == SoilSensor::Soil1 {
            if let Some(next) = self.script.pop_front() {
                self.current = next;
            }
        }
        self.reads.push(sensor);
        self.current[sensor.index()]
    }
}

// ── MemoryTransport ───────────────────────────────────────────

#[derive(Default)]
pub struct MemoryTransport {
    pub rx: VecDeque<u8>,
    pub tx: Vec<u8>,
    pub fail_writes: bool,
}

#[allow(dead_code)]
impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn send(&mut self, data: &str) {
        self.rx.extend(data.as_bytes());
    }

    /// Complete lines written so far, terminators removed.
    pub fn lines(&self) -> Vec<String> {
        String::from_utf8(self.tx.clone())
            .unwrap()
            .split_terminator('\n')
            .map(str::to_owned)
            .collect()
    }
}

impl Transport for MemoryTransport {
    type Error = &'static str;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let n = buf.len().min(self.rx.len());
        for (slot, byte) in buf.iter_mut().zip(self.rx.drain(..n)) {
            *slot = byte;
        }
        Ok(n)
    }

    fn write(&mut self, data: &[u8]) -> Result<usize, Self::Error> {
        if self.fail_writes {
            return Err("tx fault");
        }
        self.tx.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn available(&self) -> bool {
        !self.rx.is_empty()
    }
}

// ── RecordingDelay ────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingDelay {
    pub slept_ms: Vec<u32>,
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.slept_ms.push(ns / 1_000_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.slept_ms.push(ms);
    }
}

// ── RecordingSink ─────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, pred: impl Fn(&AppEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
