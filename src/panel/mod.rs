//! The FCU panel refresh cycle
//!
//! [`FcuPanel`] owns all per-plugin state: the host signal handles and the four
//! knob trackers. The host calls [`FcuPanel::refresh`] once per frame from its
//! draw callback.
//!
//! # Refresh Flow
//!
//! ```text
//! SignalHost ──poll──▶ FcuReadings ──knobs──▶ KnobSet ──flags──┐
//!                           │                                  ▼
//!                           └──────────── snapshot ─────▶ FcuSnapshot ──format──▶ DisplayLines
//!                                                                                    │
//!                                                     SerialLink::forward ◀──────────┤
//!                                                     SerialLink::status_lines ──────┘ (appended)
//! ```

pub mod layout;

pub use layout::{Color, LineLayout, LineRenderer, TextRenderer, color_for, render_lines};

use crate::config::SignalKeys;
use crate::fcu::{DisplayLines, FcuSnapshot, format};
use crate::host::{FcuSignals, SignalHost};
use crate::knob::KnobSet;
use crate::serial::{SerialLink, SerialTransport};
use tracing::info;

/// Per-plugin panel state
#[derive(Debug, Clone)]
pub struct FcuPanel {
    signals: FcuSignals,
    knobs: KnobSet,
    last_snapshot: FcuSnapshot,
}

impl FcuPanel {
    /// Create a panel reading the given keys; nothing is resolved yet
    pub fn new(keys: &SignalKeys) -> Self {
        Self {
            signals: FcuSignals::new(keys),
            knobs: KnobSet::new(),
            last_snapshot: FcuSnapshot::default(),
        }
    }

    /// Poll the host, update the knob trackers and format the panel
    pub fn refresh<H: SignalHost + ?Sized>(&mut self, host: &H) -> DisplayLines {
        let readings = self.signals.poll(host);
        let pushed = self.knobs.update(readings.knobs);
        let snapshot = FcuSnapshot {
            pushed,
            ..readings.snapshot
        };
        self.last_snapshot = snapshot;
        format(&snapshot)
    }

    /// [`refresh`](Self::refresh), then forward the panel to the serial link
    /// and append the link status lines
    pub fn refresh_with_link<H, T>(&mut self, host: &H, link: &mut SerialLink<T>) -> DisplayLines
    where
        H: SignalHost + ?Sized,
        T: SerialTransport,
    {
        let mut lines = self.refresh(host);
        link.forward(&lines);
        lines.extend(link.status_lines());
        lines
    }

    /// Snapshot produced by the most recent refresh
    pub fn last_snapshot(&self) -> &FcuSnapshot {
        &self.last_snapshot
    }

    /// Knob trackers
    pub fn knobs(&self) -> &KnobSet {
        &self.knobs
    }

    /// Host signal set
    pub fn signals(&self) -> &FcuSignals {
        &self.signals
    }

    /// Forget host handles and knob state, e.g. after a new aircraft loads
    pub fn aircraft_changed(&mut self) {
        info!("Aircraft changed; resetting FCU panel state");
        self.signals.invalidate();
        self.knobs.reset();
        self.last_snapshot = FcuSnapshot::default();
    }
}
