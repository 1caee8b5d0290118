//! Configuration data models
//!
//! This module defines the data structures used for overlay configuration.
//! Every section carries serde defaults, so a partial file only overrides the
//! fields it names.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Lowest accepted replay refresh interval in milliseconds
pub const MIN_REFRESH_INTERVAL_MS: u64 = 10;

/// Highest accepted replay refresh interval in milliseconds
pub const MAX_REFRESH_INTERVAL_MS: u64 = 1000;

/// Top-level overlay configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Overlay window geometry and text layout
    pub window: WindowGeometry,
    /// Refresh interval used by the replay driver, in milliseconds (10-1000)
    pub refresh_interval_ms: u64,
    /// Host lookup keys
    pub signals: SignalKeys,
    /// Serial passthrough settings
    pub serial: SerialPreferences,
}

/// Overlay text area and line placement, in host screen coordinates
///
/// The host's y axis points up, so `top` is greater than `bottom`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowGeometry {
    /// Left edge
    pub left: i32,
    /// Top edge
    pub top: i32,
    /// Bottom edge
    pub bottom: i32,
    /// Vertical distance between consecutive lines
    pub line_pitch: i32,
    /// Horizontal text offset from the left edge
    pub text_inset_x: i32,
    /// Vertical offset of the first line below the top edge
    pub text_inset_y: i32,
}

/// Host lookup keys for every signal the overlay reads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalKeys {
    /// Selected speed (knots or Mach)
    pub speed: String,
    /// Selected heading / track
    pub heading: String,
    /// Selected altitude
    pub altitude: String,
    /// Selected vertical speed
    pub vertical_speed: String,
    /// Selected flight path angle, published as text
    pub flight_path_angle: String,
    /// Speed window in Mach
    pub mach_mode: String,
    /// TRK/FPA mode
    pub heading_track_mode: String,
    /// Managed speed
    pub speed_managed: String,
    /// Managed heading
    pub heading_managed: String,
    /// Vertical mode code
    pub vertical_mode: String,
    /// Autopilot 1 engaged
    pub ap1_engaged: String,
    /// Autopilot 2 engaged
    pub ap2_engaged: String,
    /// Speed knob push animation
    pub speed_push: String,
    /// Heading knob push animation
    pub heading_push: String,
    /// Altitude knob push animation
    pub altitude_push: String,
    /// Vertical speed knob push animation
    pub vertical_speed_push: String,
}

/// Serial passthrough settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SerialPreferences {
    /// Forward panel lines to the serial display
    pub enabled: bool,
    /// Port opened on startup when `enabled`
    pub last_port: Option<String>,
    /// Line speed
    pub baud_rate: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowGeometry::default(),
            refresh_interval_ms: 50,
            signals: SignalKeys::default(),
            serial: SerialPreferences::default(),
        }
    }
}

impl Default for WindowGeometry {
    fn default() -> Self {
        Self {
            left: 100,
            top: 600,
            bottom: 400,
            line_pitch: 15,
            text_inset_x: 10,
            text_inset_y: 20,
        }
    }
}

impl Default for SignalKeys {
    fn default() -> Self {
        Self {
            speed: "sim/cockpit2/autopilot/airspeed_dial_kts_mach".to_string(),
            heading: "AirbusFBW/FCU_HDG_dial_deg".to_string(),
            altitude: "AirbusFBW/FCU_ALT_dial_ft".to_string(),
            vertical_speed: "AirbusFBW/FCU_VS_dial_fpm".to_string(),
            flight_path_angle: "AirbusFBW/FCU_FPA_dial_text".to_string(),
            mach_mode: "sim/cockpit/autopilot/airspeed_is_mach".to_string(),
            heading_track_mode: "AirbusFBW/HDGTRKmode".to_string(),
            speed_managed: "AirbusFBW/SPDmanaged".to_string(),
            heading_managed: "AirbusFBW/HDGmanaged".to_string(),
            vertical_mode: "AirbusFBW/APVerticalMode".to_string(),
            ap1_engaged: "AirbusFBW/AP1Engage".to_string(),
            ap2_engaged: "AirbusFBW/AP2Engage".to_string(),
            speed_push: "AirbusFBW/SPDKnobPushAnim".to_string(),
            heading_push: "AirbusFBW/HDGKnobPushAnim".to_string(),
            altitude_push: "AirbusFBW/ALTKnobPushAnim".to_string(),
            vertical_speed_push: "AirbusFBW/VSKnobPushAnim".to_string(),
        }
    }
}

impl Default for SerialPreferences {
    fn default() -> Self {
        Self {
            enabled: false,
            last_port: None,
            baud_rate: 9600,
        }
    }
}

impl AppConfig {
    /// Clamp out-of-range values back into their accepted ranges
    ///
    /// Returns `true` if anything was changed.
    pub fn sanitize(&mut self) -> bool {
        let mut changed = false;

        let clamped = self
            .refresh_interval_ms
            .clamp(MIN_REFRESH_INTERVAL_MS, MAX_REFRESH_INTERVAL_MS);
        if clamped != self.refresh_interval_ms {
            warn!(
                "refresh_interval_ms {} out of range, using {}",
                self.refresh_interval_ms, clamped
            );
            self.refresh_interval_ms = clamped;
            changed = true;
        }

        if self.window.line_pitch <= 0 {
            warn!(
                "line_pitch {} must be positive, using default",
                self.window.line_pitch
            );
            self.window.line_pitch = WindowGeometry::default().line_pitch;
            changed = true;
        }

        if self.serial.baud_rate == 0 {
            warn!("baud_rate 0 is invalid, using default");
            self.serial.baud_rate = SerialPreferences::default().baud_rate;
            changed = true;
        }

        changed
    }
}
