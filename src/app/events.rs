//! Outbound application events.
//!
//! The [`BridgeService`](super::service::BridgeService) emits these through
//! the [`EventSink`](super::ports::EventSink) port for diagnostics.  They
//! never travel over the host link; the only thing the host ever sees is
//! the `SOLO:` report line.

use super::model::{ActuatorChannel, SoilReport};

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// All outputs were driven off and the service is ready.
    Started,

    /// A command was applied to a channel.  `changed` is `false` when the
    /// channel was already in the requested state.
    ActuatorSet {
        channel: ActuatorChannel,
        on: bool,
        changed: bool,
    },

    /// A complete line matched no channel name and was dropped.
    CommandIgnored,

    /// A report line was produced for this cycle.
    Reported(SoilReport),

    /// The report line could not be written to the host link.
    ReportDropped,
}
