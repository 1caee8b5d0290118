//! Per-refresh FCU snapshot

use crate::knob::KnobPushFlags;

/// Autopilot vertical mode as reported by the host
///
/// Codes other than the three the display cares about are kept verbatim in
/// [`VerticalMode::Other`] and take the generic formatting branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalMode {
    /// Managed climb (code 1)
    Climb,
    /// Open climb (code 101)
    OpenClimb,
    /// Selected vertical speed / flight path angle (code 107)
    VerticalSpeed,
    /// Any other mode code
    Other(i32),
}

impl VerticalMode {
    /// Host code for [`VerticalMode::Climb`]
    pub const CLIMB_CODE: i32 = 1;
    /// Host code for [`VerticalMode::OpenClimb`]
    pub const OPEN_CLIMB_CODE: i32 = 101;
    /// Host code for [`VerticalMode::VerticalSpeed`]
    pub const VERTICAL_SPEED_CODE: i32 = 107;

    /// Map a raw host code to a mode
    pub const fn from_code(code: i32) -> Self {
        match code {
            Self::CLIMB_CODE => Self::Climb,
            Self::OPEN_CLIMB_CODE => Self::OpenClimb,
            Self::VERTICAL_SPEED_CODE => Self::VerticalSpeed,
            other => Self::Other(other),
        }
    }

    /// Raw host code for this mode
    pub const fn code(self) -> i32 {
        match self {
            Self::Climb => Self::CLIMB_CODE,
            Self::OpenClimb => Self::OPEN_CLIMB_CODE,
            Self::VerticalSpeed => Self::VERTICAL_SPEED_CODE,
            Self::Other(code) => code,
        }
    }
}

impl Default for VerticalMode {
    fn default() -> Self {
        Self::Other(0)
    }
}

impl From<i32> for VerticalMode {
    fn from(code: i32) -> Self {
        Self::from_code(code)
    }
}

/// Everything the formatter needs for one refresh
///
/// Built fresh every frame from host readings and the knob flags. The default
/// value (all zero / false) is what an aircraft that is not loaded yet reads
/// as, and still formats into a complete panel.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FcuSnapshot {
    /// Selected speed, knots or Mach depending on `mach_mode`
    pub speed: f32,
    /// Selected heading or track, degrees
    pub heading: f32,
    /// Selected altitude, feet
    pub altitude: f32,
    /// Selected vertical speed, feet per minute
    pub vertical_speed: f32,
    /// Selected flight path angle, degrees
    pub flight_path_angle: f32,
    /// Speed window shows Mach
    pub mach_mode: bool,
    /// TRK/FPA instead of HDG/VS
    pub heading_track_mode: bool,
    /// Speed target is managed
    pub speed_managed: bool,
    /// Heading target is managed
    pub heading_managed: bool,
    /// Active vertical mode
    pub vertical_mode: VerticalMode,
    /// Autopilot 1 engaged
    pub ap1_engaged: bool,
    /// Autopilot 2 engaged
    pub ap2_engaged: bool,
    /// Knob push state
    pub pushed: KnobPushFlags,
}
