//! Application core — pure domain logic, zero I/O.
//!
//! This module holds the bridge's rules: how a host line maps onto an
//! actuator channel, and how the three soil probes become a report line.
//! All interaction with hardware happens through **port traits** defined
//! in [`ports`], keeping this layer fully testable without real peripherals.

pub mod commands;
pub mod events;
pub mod model;
pub mod ports;
pub mod service;
