//! GPIO / peripheral pin assignments for the SoilBridge board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.
//!
//! Output GPIO numbers match the legacy greenhouse harness (D7, D9, D10,
//! D11) so the relay board can be moved over without rewiring.

// ---------------------------------------------------------------------------
// Actuator outputs (relay board, active HIGH)
// ---------------------------------------------------------------------------

/// Low-temperature heater relay.
pub const TEMP_LOW_HEATER_GPIO: i32 = 7;
/// Humidifier relay.
pub const HUMIDIFIER_GPIO: i32 = 9;
/// Irrigation solenoid valve relay.
pub const IRRIGATION_VALVE_GPIO: i32 = 10;
/// High-temperature cooler (fan) relay.
pub const TEMP_HIGH_COOLER_GPIO: i32 = 11;

// ---------------------------------------------------------------------------
// Soil moisture probes — Analog (ADC1)
// ---------------------------------------------------------------------------

/// Capacitive soil probe 1 — ADC1 channel 5 (GPIO 6 on ESP32-S3).
pub const SOIL_1_GPIO: i32 = 6;
/// Capacitive soil probe 2 — ADC1 channel 4 (GPIO 5 on ESP32-S3).
pub const SOIL_2_GPIO: i32 = 5;
/// Capacitive soil probe 3 — ADC1 channel 3 (GPIO 4 on ESP32-S3).
pub const SOIL_3_GPIO: i32 = 4;

pub const ADC1_CH_SOIL_1: u32 = 5;
pub const ADC1_CH_SOIL_2: u32 = 4;
pub const ADC1_CH_SOIL_3: u32 = 3;

// ---------------------------------------------------------------------------
// Host link (UART1). The console / logger keeps UART0 + USB-CDC.
// ---------------------------------------------------------------------------

pub const HOST_UART_PORT: i32 = 1;
pub const HOST_UART_TX_GPIO: i32 = 17;
pub const HOST_UART_RX_GPIO: i32 = 18;
