//! Configuration management module
//!
//! This module handles loading, saving, and managing overlay configuration:
//! window geometry, host signal keys and serial passthrough settings.
//! Configuration is stored in `config.json` in the overlay data directory with
//! atomic writes to prevent corruption.

pub mod manager;
pub mod models;

pub use manager::ConfigManager;
pub use models::{AppConfig, SerialPreferences, SignalKeys, WindowGeometry};
