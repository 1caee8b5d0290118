//! Push detection for a single FCU selector knob
//!
//! The host exposes the knob position only as an animation value that moves
//! from 0 (rest) towards 1 while the knob is being pushed or pulled. This
//! tracker turns that continuous signal into a latched "pushed in" boolean.

use tracing::trace;

/// Samples strictly below this value are "at rest"
pub const REST_THRESHOLD: f32 = 0.05;

/// Samples strictly above this value are "actuated"
pub const ACTUATED_THRESHOLD: f32 = 0.1;

/// Classification of a single animation sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Rest,
    Actuated,
}

impl Level {
    /// Classify a sample, holding `previous` inside the dead zone.
    ///
    /// NaN compares false against both thresholds and therefore also holds.
    fn classify(sample: f32, previous: Self) -> Self {
        if sample < REST_THRESHOLD {
            Self::Rest
        } else if sample > ACTUATED_THRESHOLD {
            Self::Actuated
        } else {
            previous
        }
    }
}

/// Phase of the push state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PushPhase {
    /// No completed push cycle and no rising edge pending
    #[default]
    AtRest,
    /// A rest-to-actuated edge was seen; waiting for the return to rest
    Rising,
    /// A full rest-actuated-rest cycle completed; the knob is latched in
    Pushed,
}

/// Tracks one knob's push animation and latches completed push cycles
#[derive(Debug, Clone)]
pub struct KnobPushTracker {
    previous_value: f32,
    level: Level,
    phase: PushPhase,
}

impl Default for KnobPushTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl KnobPushTracker {
    /// Create a tracker with the knob at rest
    pub const fn new() -> Self {
        Self {
            previous_value: 0.0,
            level: Level::Rest,
            phase: PushPhase::AtRest,
        }
    }

    /// Feed the next animation sample
    ///
    /// Accepts any value, including ones outside [0, 1]; there is no clamping.
    pub fn update(&mut self, sample: f32) {
        let level = Level::classify(sample, self.level);
        let rising_edge = self.level == Level::Rest && level == Level::Actuated;

        let next = match (self.phase, level) {
            (PushPhase::AtRest, Level::Actuated) if rising_edge => PushPhase::Rising,
            (PushPhase::Rising, Level::Rest) => PushPhase::Pushed,
            // Pushed is only entered at rest and the dead zone holds that
            // level, so any actuated sample here is a rising edge
            (PushPhase::Pushed, Level::Actuated) => PushPhase::Rising,
            (phase, _) => phase,
        };

        if next != self.phase {
            trace!(
                "Knob phase {:?} -> {:?} (sample {})",
                self.phase, next, sample
            );
        }

        self.phase = next;
        self.level = level;
        self.previous_value = sample;
    }

    /// Whether the knob is currently latched in the pushed position
    pub fn is_pushed(&self) -> bool {
        self.phase == PushPhase::Pushed
    }

    /// Current state machine phase
    pub fn phase(&self) -> PushPhase {
        self.phase
    }

    /// Last sample passed to [`update`](Self::update)
    pub fn previous_value(&self) -> f32 {
        self.previous_value
    }

    /// Return to the initial rest state
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
