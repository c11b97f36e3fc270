//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the ESP-IDF logger (console UART / USB-CDC in production).  The host
//! link is a different UART, so nothing here reaches the host.

use log::{debug, info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the console.
#[derive(Default)]
pub struct LogEventSink {
    ignored: u32,
}

impl LogEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unrecognised command lines seen since boot.
    pub fn ignored_commands(&self) -> u32 {
        self.ignored
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started => {
                info!("START | all actuators off");
            }
            AppEvent::ActuatorSet { channel, on, changed } => {
                info!(
                    "ACT | {} -> {}{}",
                    channel,
                    if *on { "ON" } else { "OFF" },
                    if *changed { "" } else { " (unchanged)" },
                );
            }
            AppEvent::CommandIgnored => {
                self.ignored = self.ignored.saturating_add(1);
                debug!("CMD | unrecognised line dropped (total={})", self.ignored);
            }
            AppEvent::Reported(report) => {
                debug!("SOLO | {:?}", report.raw);
            }
            AppEvent::ReportDropped => {
                warn!("SOLO | report dropped");
            }
        }
    }
}
