//! The FCU signal set polled on every refresh

use super::{LazySignal, SignalHost};
use crate::config::SignalKeys;
use crate::fcu::{FcuSnapshot, VerticalMode};
use crate::knob::KnobSamples;
use tracing::{debug, info};

/// Raw values read from the host in one refresh
///
/// `snapshot.pushed` is left at its default; the push flags come from the
/// knob trackers, which consume `knobs`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FcuReadings {
    /// Targets, modes and autopilot state
    pub snapshot: FcuSnapshot,
    /// Push animation samples
    pub knobs: KnobSamples,
}

/// Every host signal the panel reads
#[derive(Debug, Clone)]
pub struct FcuSignals {
    speed: LazySignal,
    heading: LazySignal,
    altitude: LazySignal,
    vertical_speed: LazySignal,
    flight_path_angle: LazySignal,
    mach_mode: LazySignal,
    heading_track_mode: LazySignal,
    speed_managed: LazySignal,
    heading_managed: LazySignal,
    vertical_mode: LazySignal,
    ap1_engaged: LazySignal,
    ap2_engaged: LazySignal,
    speed_push: LazySignal,
    heading_push: LazySignal,
    altitude_push: LazySignal,
    vertical_speed_push: LazySignal,
    all_resolved: bool,
}

impl FcuSignals {
    /// Build the signal set from configured keys; nothing is resolved yet
    pub fn new(keys: &SignalKeys) -> Self {
        Self {
            speed: LazySignal::new(&keys.speed),
            heading: LazySignal::new(&keys.heading),
            altitude: LazySignal::new(&keys.altitude),
            vertical_speed: LazySignal::new(&keys.vertical_speed),
            flight_path_angle: LazySignal::new(&keys.flight_path_angle),
            mach_mode: LazySignal::new(&keys.mach_mode),
            heading_track_mode: LazySignal::new(&keys.heading_track_mode),
            speed_managed: LazySignal::new(&keys.speed_managed),
            heading_managed: LazySignal::new(&keys.heading_managed),
            vertical_mode: LazySignal::new(&keys.vertical_mode),
            ap1_engaged: LazySignal::new(&keys.ap1_engaged),
            ap2_engaged: LazySignal::new(&keys.ap2_engaged),
            speed_push: LazySignal::new(&keys.speed_push),
            heading_push: LazySignal::new(&keys.heading_push),
            altitude_push: LazySignal::new(&keys.altitude_push),
            vertical_speed_push: LazySignal::new(&keys.vertical_speed_push),
            all_resolved: false,
        }
    }

    fn iter(&self) -> impl Iterator<Item = &LazySignal> {
        [
            &self.speed,
            &self.heading,
            &self.altitude,
            &self.vertical_speed,
            &self.flight_path_angle,
            &self.mach_mode,
            &self.heading_track_mode,
            &self.speed_managed,
            &self.heading_managed,
            &self.vertical_mode,
            &self.ap1_engaged,
            &self.ap2_engaged,
            &self.speed_push,
            &self.heading_push,
            &self.altitude_push,
            &self.vertical_speed_push,
        ]
        .into_iter()
    }

    fn iter_mut(&mut self) -> impl Iterator<Item = &mut LazySignal> {
        [
            &mut self.speed,
            &mut self.heading,
            &mut self.altitude,
            &mut self.vertical_speed,
            &mut self.flight_path_angle,
            &mut self.mach_mode,
            &mut self.heading_track_mode,
            &mut self.speed_managed,
            &mut self.heading_managed,
            &mut self.vertical_mode,
            &mut self.ap1_engaged,
            &mut self.ap2_engaged,
            &mut self.speed_push,
            &mut self.heading_push,
            &mut self.altitude_push,
            &mut self.vertical_speed_push,
        ]
        .into_iter()
    }

    /// Read every signal once
    ///
    /// Missing signals read as zero / false; this never fails.
    pub fn poll<H: SignalHost + ?Sized>(&mut self, host: &H) -> FcuReadings {
        let snapshot = FcuSnapshot {
            speed: self.speed.read_float(host),
            heading: self.heading.read_float(host),
            altitude: self.altitude.read_float(host),
            vertical_speed: self.vertical_speed.read_float(host),
            flight_path_angle: parse_numeric_prefix(&self.flight_path_angle.read_text(host)),
            mach_mode: self.mach_mode.read_bool(host),
            heading_track_mode: self.heading_track_mode.read_bool(host),
            speed_managed: self.speed_managed.read_bool(host),
            heading_managed: self.heading_managed.read_bool(host),
            vertical_mode: VerticalMode::from_code(self.vertical_mode.read_int(host)),
            ap1_engaged: self.ap1_engaged.read_bool(host),
            ap2_engaged: self.ap2_engaged.read_bool(host),
            ..FcuSnapshot::default()
        };
        let knobs = KnobSamples {
            speed: self.speed_push.read_float(host),
            heading: self.heading_push.read_float(host),
            altitude: self.altitude_push.read_float(host),
            vertical_speed: self.vertical_speed_push.read_float(host),
        };

        if !self.all_resolved && self.unresolved_count() == 0 {
            self.all_resolved = true;
            info!("All FCU host signals resolved");
        }

        FcuReadings { snapshot, knobs }
    }

    /// Number of signals the host has not published yet
    pub fn unresolved_count(&self) -> usize {
        self.iter().filter(|s| !s.is_resolved()).count()
    }

    /// Keys the host has not published yet
    pub fn unresolved_keys(&self) -> Vec<&str> {
        self.iter()
            .filter(|s| !s.is_resolved())
            .map(LazySignal::key)
            .collect()
    }

    /// Forget every resolved handle
    pub fn invalidate(&mut self) {
        debug!("Invalidating all FCU host signal handles");
        for signal in self.iter_mut() {
            signal.invalidate();
        }
        self.all_resolved = false;
    }
}

/// Parse the leading decimal number of `text`, ignoring anything after it
///
/// Text signals arrive as fixed-size byte arrays padded with NULs and may
/// carry a unit suffix. Leading whitespace is skipped; text without a leading
/// number yields `0.0`.
pub fn parse_numeric_prefix(text: &str) -> f32 {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let digits_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - digits_start;
    if bytes.get(end) == Some(&b'.') {
        end += 1;
        let fraction_start = end;
        while bytes.get(end).is_some_and(u8::is_ascii_digit) {
            end += 1;
        }
        digits += end - fraction_start;
    }
    if digits == 0 {
        return 0.0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().unwrap_or(0.0)
}
