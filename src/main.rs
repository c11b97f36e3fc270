//! SoilBridge Firmware — Main Entry Point
//!
//! Single-threaded poll loop bridging three soil probes and four relay
//! outputs to a host over a line-oriented UART.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  HardwareAdapter    UartTransport   LogEventSink  SystemDelay  │
//! │  (Sensor+Actuator)  (Transport)     (EventSink)   (DelayNs)    │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │            BridgeService (pure logic)                  │    │
//! │  │  Command dispatch · Soil report                        │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! │                                                                │
//! │  CycleScheduler (fixed idle period) · Watchdog                 │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

// ── Imports ───────────────────────────────────────────────────
use anyhow::Result;
use log::{error, info};

use soilbridge::adapters::hardware::HardwareAdapter;
use soilbridge::adapters::log_sink::LogEventSink;
use soilbridge::adapters::time::SystemDelay;
use soilbridge::adapters::uart::UartTransport;
use soilbridge::app::service::BridgeService;
use soilbridge::config::BridgeConfig;
use soilbridge::drivers::hw_init;
use soilbridge::drivers::watchdog::Watchdog;
use soilbridge::link::host::HostLink;
use soilbridge::pins;
use soilbridge::scheduler::CycleScheduler;
use soilbridge::sensors::SoilSensorHub;

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  SoilBridge v{}                      ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    let config = BridgeConfig::load();

    // ── 2. Peripherals + host link ────────────────────────────
    // Relay outputs are configured and driven LOW here.
    let mut link = match bring_up(&config) {
        Ok(link) => link,
        Err(e) => {
            // Relays were never energised; log and halt.
            error!("{} — halting", e);
            #[allow(clippy::empty_loop)]
            loop {}
        }
    };

    // ── 3. Construct adapters ─────────────────────────────────
    let mut hw = HardwareAdapter::new(SoilSensorHub::new());
    let mut log_sink = LogEventSink::new();
    let mut watchdog = Watchdog::new(config.watchdog_timeout_ms);
    let mut sched = CycleScheduler::new(SystemDelay::new(), config.report_interval_ms);

    // ── 4. Construct app service ──────────────────────────────
    let mut app = BridgeService::new(config);
    app.start(&mut hw, &mut log_sink);

    info!("System ready. Entering main loop.");

    // ── 5. Main loop (never exits) ────────────────────────────
    loop {
        sched.run_cycle(&mut app, &mut hw, &mut link, &mut log_sink);
        watchdog.feed();
    }
}

/// Configure GPIO/ADC and open the host UART.
fn bring_up(config: &BridgeConfig) -> soilbridge::error::Result<HostLink<UartTransport>> {
    hw_init::init_peripherals().inspect_err(|e| error!("hw_init: {}", e))?;

    let uart = UartTransport::open(
        pins::HOST_UART_PORT,
        pins::HOST_UART_TX_GPIO,
        pins::HOST_UART_RX_GPIO,
        config.baud_rate,
    )
    .inspect_err(|e| error!("host link: {}", e))?;
    Ok(HostLink::new(uart))
}
