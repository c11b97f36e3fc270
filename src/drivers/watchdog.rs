//! Task watchdog for the bridge loop.
//!
//! The main task subscribes itself to the ESP-IDF TWDT with the timeout
//! from [`BridgeConfig`](crate::config::BridgeConfig) and feeds it after
//! every cycle.  A cycle that stalls past the timeout panics and reboots,
//! and on reboot every relay comes back up LOW.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

use log::{info, warn};

pub struct Watchdog {
    timeout_ms: u32,
    subscribed: bool,
    feeds: u64,
}

impl Watchdog {
    /// Subscribe the calling task.  Failure to subscribe is logged and the
    /// loop runs unguarded.
    pub fn new(timeout_ms: u32) -> Self {
        let subscribed = subscribe(timeout_ms);
        if subscribed {
            info!("Watchdog: armed ({}ms, panic on trigger)", timeout_ms);
        } else {
            warn!("Watchdog: not armed, loop is unguarded");
        }
        Self {
            timeout_ms,
            subscribed,
            feeds: 0,
        }
    }

    /// Called once per cycle, after the idle period.
    pub fn feed(&mut self) {
        self.feeds += 1;
        if self.subscribed {
            reset();
        }
    }

    pub fn is_armed(&self) -> bool {
        self.subscribed
    }

    pub fn timeout_ms(&self) -> u32 {
        self.timeout_ms
    }

    pub fn feed_count(&self) -> u64 {
        self.feeds
    }
}

#[cfg(target_os = "espidf")]
fn subscribe(timeout_ms: u32) -> bool {
    let cfg = esp_task_wdt_config_t {
        timeout_ms,
        idle_core_mask: 0,
        trigger_panic: true,
    };

    // SAFETY: called once from the main task before the loop starts.
    unsafe {
        let ret = esp_task_wdt_reconfigure(&cfg);
        if ret != ESP_OK as i32 {
            warn!("TWDT reconfigure returned {} (may already be configured)", ret);
        }

        let ret = esp_task_wdt_add(core::ptr::null_mut());
        if ret != ESP_OK as i32 {
            warn!("TWDT add returned {}", ret);
        }
        ret == ESP_OK as i32
    }
}

#[cfg(target_os = "espidf")]
fn reset() {
    // SAFETY: only reached when the current task subscribed in `subscribe`.
    unsafe {
        esp_task_wdt_reset();
    }
}

#[cfg(not(target_os = "espidf"))]
fn subscribe(_timeout_ms: u32) -> bool {
    true
}

#[cfg(not(target_os = "espidf"))]
fn reset() {}
