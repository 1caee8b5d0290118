//! `fcu-overlay` - ToLiss A320 FCU state overlay
//!
//! Reads the Flight Control Unit state published by the simulation host and
//! renders it as a short text panel: speed, heading, altitude and vertical
//! targets, the active modes and autopilot engagement. Each selector knob is
//! tracked through its push animation so the panel can mark knobs that are
//! currently pushed in. The same lines can be mirrored to a serial device.
//!
//! # Layout
//!
//! - [`knob`]: push detection from the knob animation values
//! - [`fcu`]: the FCU snapshot and the pure text formatter
//! - [`host`]: the [`host::SignalHost`] seam and lazy signal lookup
//! - [`panel`]: per-frame refresh and on-screen placement
//! - [`serial`]: best-effort serial passthrough
//! - [`config`], [`utils`]: configuration file and logging
//! - [`replay`]: recorded host data for running outside the simulator

// Module declarations
pub mod config;
pub mod error;
pub mod fcu;
pub mod host;
pub mod knob;
pub mod panel;
pub mod replay;
pub mod serial;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types
pub use error::{FcuOverlayError, Result};
