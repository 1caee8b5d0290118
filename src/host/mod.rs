//! Simulation host signal access
//!
//! The overlay never talks to the simulator directly. It goes through the
//! [`SignalHost`] trait, which models the host's "find by key, then read by
//! handle" lookup API.
//!
//! # Overview
//!
//! - [`SignalHost`]: lookup and typed reads, implemented by the plugin glue
//!   for a real simulator and by [`MemoryHost`] for tests and replay
//! - [`LazySignal`]: a key plus its memoized handle; unresolved keys are
//!   retried on every refresh and read as zero until they resolve
//! - [`FcuSignals`]: every signal the panel needs, polled into an
//!   [`FcuReadings`] once per refresh
//!
//! # Missing Signals
//!
//! Before an aircraft is loaded most keys do not exist. That is not an error:
//! reads through an unresolved [`LazySignal`] return `0`, `false` or an empty
//! string, so the panel stays renderable at all times.

pub mod lazy;
pub mod memory;
pub mod signals;

pub use lazy::LazySignal;
pub use memory::{MemoryHost, SignalValue};
pub use signals::{FcuReadings, FcuSignals, parse_numeric_prefix};

/// Opaque handle returned by a successful host lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SignalHandle(pub usize);

/// Read access to the simulation host's published values
pub trait SignalHost {
    /// Look up a signal by key; `None` while the host does not publish it
    fn find(&self, key: &str) -> Option<SignalHandle>;

    /// Read a signal as a float
    fn read_float(&self, handle: SignalHandle) -> f32;

    /// Read a signal as an integer
    fn read_int(&self, handle: SignalHandle) -> i32;

    /// Read a signal as text
    fn read_text(&self, handle: SignalHandle) -> String;
}
