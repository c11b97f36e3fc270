//! SoilBridge firmware library.
//!
//! Exposes the pure-logic modules for integration testing and external
//! inspection. All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod error;
pub mod link;
pub mod pins;
pub mod scheduler;

// Hardware-facing modules; each carries its own simulation backend for
// non-espidf targets.
pub mod adapters;
pub mod drivers;
pub mod sensors;
