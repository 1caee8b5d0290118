//! Knob push tracking
//!
//! The four FCU selector knobs (speed, heading, altitude, vertical speed) each
//! expose a push animation. [`KnobSet`] owns one [`KnobPushTracker`] per knob
//! and condenses their state into [`KnobPushFlags`] for the formatter.
//!
//! # Push cycle
//!
//! ```text
//! sample:  0.0 ──▶ 0.5 ──▶ 0.0 ──▶ 0.5
//! phase:   AtRest  Rising  Pushed  Rising
//! ```
//!
//! A knob is reported as pushed only after a complete rest, actuated, rest
//! cycle, and stops being pushed as soon as it is actuated again.

pub mod push_tracker;

pub use push_tracker::{ACTUATED_THRESHOLD, KnobPushTracker, PushPhase, REST_THRESHOLD};

use tracing::debug;

/// Push animation samples for all four knobs from one refresh
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct KnobSamples {
    /// Speed knob push animation
    pub speed: f32,
    /// Heading knob push animation
    pub heading: f32,
    /// Altitude knob push animation
    pub altitude: f32,
    /// Vertical speed knob push animation
    pub vertical_speed: f32,
}

/// Pushed-in state of the four knobs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KnobPushFlags {
    /// Speed knob latched in
    pub speed: bool,
    /// Heading knob latched in
    pub heading: bool,
    /// Altitude knob latched in
    pub altitude: bool,
    /// Vertical speed knob latched in
    pub vertical_speed: bool,
}

/// One push tracker per FCU knob
#[derive(Debug, Clone, Default)]
pub struct KnobSet {
    speed: KnobPushTracker,
    heading: KnobPushTracker,
    altitude: KnobPushTracker,
    vertical_speed: KnobPushTracker,
}

impl KnobSet {
    /// Create a set with every knob at rest
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one refresh worth of samples and return the resulting flags
    pub fn update(&mut self, samples: KnobSamples) -> KnobPushFlags {
        let before = self.flags();

        self.speed.update(samples.speed);
        self.heading.update(samples.heading);
        self.altitude.update(samples.altitude);
        self.vertical_speed.update(samples.vertical_speed);

        let after = self.flags();
        if before != after {
            debug!("Knob push state changed: {:?} -> {:?}", before, after);
        }
        after
    }

    /// Current flags without feeding a new sample
    pub fn flags(&self) -> KnobPushFlags {
        KnobPushFlags {
            speed: self.speed.is_pushed(),
            heading: self.heading.is_pushed(),
            altitude: self.altitude.is_pushed(),
            vertical_speed: self.vertical_speed.is_pushed(),
        }
    }

    /// Access the individual speed knob tracker
    pub fn speed(&self) -> &KnobPushTracker {
        &self.speed
    }

    /// Access the individual heading knob tracker
    pub fn heading(&self) -> &KnobPushTracker {
        &self.heading
    }

    /// Access the individual altitude knob tracker
    pub fn altitude(&self) -> &KnobPushTracker {
        &self.altitude
    }

    /// Access the individual vertical speed knob tracker
    pub fn vertical_speed(&self) -> &KnobPushTracker {
        &self.vertical_speed
    }

    /// Put every knob back at rest
    pub fn reset(&mut self) {
        self.speed.reset();
        self.heading.reset();
        self.altitude.reset();
        self.vertical_speed.reset();
    }
}
