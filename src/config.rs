//! System configuration parameters
//!
//! All tunable parameters for the SoilBridge firmware.  Nothing is
//! persisted on the device; a build may override the defaults by setting
//! `SOILBRIDGE_CONFIG_JSON` at compile time.

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Build-time override, if one was provided.
const CONFIG_OVERRIDE: Option<&str> = option_env!("SOILBRIDGE_CONFIG_JSON");

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    // --- Host link ---
    /// Host UART baud rate
    pub baud_rate: u32,

    // --- Timing ---
    /// Idle period between loop iterations (milliseconds); one report per period
    pub report_interval_ms: u32,
    /// Task watchdog timeout (milliseconds)
    pub watchdog_timeout_ms: u32,

    // --- Soil ---
    /// Raw ADC value below which soil counts as dry.  Reserved for the
    /// host: no firmware logic reads it.
    pub moisture_threshold: u16,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            // Host link
            baud_rate: 9600,

            // Timing
            report_interval_ms: 2000,   // 0.5 Hz
            watchdog_timeout_ms: 10_000,

            // Soil
            moisture_threshold: 400,
        }
    }
}

impl BridgeConfig {
    /// Range-check every field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.baud_rate == 0 {
            return Err(ConfigError::ValidationFailed("baud_rate must be > 0"));
        }
        if self.report_interval_ms == 0 {
            return Err(ConfigError::ValidationFailed("report_interval_ms must be > 0"));
        }
        if self.watchdog_timeout_ms <= self.report_interval_ms {
            return Err(ConfigError::ValidationFailed(
                "watchdog_timeout_ms must exceed report_interval_ms",
            ));
        }
        Ok(())
    }

    /// Parse and validate a JSON override.  Missing fields keep their
    /// default values.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(text).map_err(|_| ConfigError::Malformed)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Resolve the configuration for this build.
    pub fn load() -> Self {
        Self::resolve(CONFIG_OVERRIDE)
    }

    fn resolve(override_json: Option<&str>) -> Self {
        match override_json {
            None => Self::default(),
            Some(text) => match Self::from_json(text) {
                Ok(cfg) => {
                    info!("Config: build-time override applied");
                    cfg
                }
                Err(e) => {
                    warn!("Config: override rejected ({}), using defaults", e);
                    Self::default()
                }
            },
        }
    }
}
