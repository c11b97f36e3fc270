//! Inbound host commands.
//!
//! A command line is `<NAME><anything>ON|OFF`.  The name is matched by
//! prefix against a fixed table; the desired state is "the trimmed line
//! ends with `ON`".  Everything else about the line is ignored.

use super::model::ActuatorChannel;

/// Prefix table, checked in order; the first match wins.  No entry is a
/// prefix of another.
const DISPATCH_TABLE: [(&str, ActuatorChannel); 4] = [
    ("TEMP_BAIXA", ActuatorChannel::TempLow),
    ("TEMP_ALTA", ActuatorChannel::TempHigh),
    ("UMID", ActuatorChannel::Humidifier),
    ("IRRIGACAO", ActuatorChannel::IrrigationValve),
];

const ON_SUFFIX: &[u8] = b"ON";

/// A parsed host command.  Lives for one dispatch step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    pub target: ActuatorChannel,
    pub on: bool,
}

impl Command {
    /// Classify one raw line.  Surrounding ASCII whitespace (including a
    /// trailing `\r`) is stripped first.  Matching is byte-wise, so bytes
    /// outside ASCII between the name and the suffix do not matter.
    ///
    /// Returns `None` when no channel name matches.  A matching line that
    /// does not end in `ON` — `IRRIGACAO XYZ`, bare `IRRIGACAO` — is an
    /// OFF command, not an error.
    pub fn parse(line: &[u8]) -> Option<Self> {
        let line = line.trim_ascii();
        let target = DISPATCH_TABLE
            .iter()
            .find(|(prefix, _)| line.starts_with(prefix.as_bytes()))
            .map(|&(_, channel)| channel)?;

        Some(Self {
            target,
            on: line.ends_with(ON_SUFFIX),
        })
    }
}
