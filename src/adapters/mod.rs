//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements        | Connects to              |
//! |------------|-------------------|--------------------------|
//! | `hardware` | SensorPort        | ESP32 ADC1               |
//! |            | ActuatorPort      | ESP32 GPIO (relays)      |
//! | `log_sink` | EventSink         | Console log output       |
//! | `time`     | DelayNs           | FreeRTOS task delay      |
//! | `uart`     | Transport         | ESP32 UART1 (host link)  |

pub mod hardware;
pub mod log_sink;
pub mod time;
pub mod uart;
