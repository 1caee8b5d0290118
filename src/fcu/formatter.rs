//! FCU display formatter
//!
//! Turns an [`FcuSnapshot`] into the fixed sequence of panel lines. The
//! function is pure: the same snapshot always yields the same lines, and every
//! snapshot (including the all-zero default) yields a complete panel.
//!
//! Each data line starts with a one-character glyph column. It holds
//! [`PUSH_GLYPH`] when the matching knob is pushed in, and a space otherwise.
//! Managed speed and heading, and the managed climb altitude, always show the
//! glyph regardless of the knob.

use super::display::{DisplayLine, DisplayLines};
use super::snapshot::{FcuSnapshot, VerticalMode};

/// Marker shown in the glyph column for a pushed knob
pub const PUSH_GLYPH: char = '*';

/// Title line
pub const TITLE_LINE: &str = "========== ToLiss FCU ==========";

/// Separator between the target lines and the mode summary
pub const SEPARATOR_LINE: &str = "--------------------------------";

/// Closing line
pub const FOOTER_LINE: &str = "================================";

/// Format a snapshot into the panel lines, top to bottom
pub fn format(snapshot: &FcuSnapshot) -> DisplayLines {
    let mut lines = DisplayLines::new();
    lines.push(DisplayLine::new(TITLE_LINE));
    lines.push(DisplayLine::new(speed_line(snapshot)));
    lines.push(DisplayLine::new(heading_line(snapshot)));
    lines.push(DisplayLine::new(altitude_line(snapshot)));
    lines.push(DisplayLine::new(vertical_line(snapshot)));
    lines.push(DisplayLine::new(SEPARATOR_LINE));
    lines.push(DisplayLine::new(mode_line(snapshot)));
    lines.push(DisplayLine::new(autopilot_line(snapshot)));
    lines.push(DisplayLine::new(FOOTER_LINE));
    lines
}

fn glyph(shown: bool) -> char {
    if shown { PUSH_GLYPH } else { ' ' }
}

/// Round half away from zero to a whole number; NaN maps to 0
#[expect(
    clippy::cast_possible_truncation,
    reason = "Display values are far inside i64 range; out-of-range floats saturate, which is acceptable on screen"
)]
fn round_to_int(value: f32) -> i64 {
    f64::from(value).round() as i64
}

/// Round a vertical speed to the nearest 100 fpm, ties away from zero
///
/// The value is truncated to whole feet per minute first, then shifted by 50
/// towards its sign and truncated to a multiple of 100.
#[expect(
    clippy::cast_possible_truncation,
    reason = "Truncation to whole fpm is the intended rounding step"
)]
pub fn round_vertical_speed(fpm: f32) -> i64 {
    let whole = f64::from(fpm) as i64;
    if whole >= 0 {
        whole.saturating_add(50) / 100 * 100
    } else {
        whole.saturating_sub(50) / 100 * 100
    }
}

/// Signed, zero-padded vertical speed such as `+0200` or `-0500`
pub fn format_vertical_speed(fpm: f32) -> String {
    format!("{:+05}", round_vertical_speed(fpm))
}

fn speed_line(s: &FcuSnapshot) -> String {
    if s.speed_managed {
        format!("{PUSH_GLYPH}MACH: ---")
    } else if s.mach_mode {
        format!("{}MACH: {:.3}", glyph(s.pushed.speed), s.speed)
    } else {
        format!("{}SPD:  {:3} kts", glyph(s.pushed.speed), round_to_int(s.speed))
    }
}

fn heading_line(s: &FcuSnapshot) -> String {
    let label = if s.heading_track_mode { "TRK" } else { "HDG" };
    if s.heading_managed {
        format!("{PUSH_GLYPH}{label}:  --- deg")
    } else {
        format!(
            "{}{label}:  {:03} deg",
            glyph(s.pushed.heading),
            round_to_int(s.heading)
        )
    }
}

fn altitude_line(s: &FcuSnapshot) -> String {
    match s.vertical_mode {
        VerticalMode::Climb => format!("{PUSH_GLYPH}ALT:  {:5} ft", round_to_int(s.altitude)),
        VerticalMode::OpenClimb => " ALT:  ----- ft".to_string(),
        VerticalMode::VerticalSpeed | VerticalMode::Other(_) => format!(
            "{}ALT:  {:5} ft",
            glyph(s.pushed.altitude),
            round_to_int(s.altitude)
        ),
    }
}

fn vertical_line(s: &FcuSnapshot) -> String {
    match s.vertical_mode {
        VerticalMode::Climb | VerticalMode::OpenClimb => {
            if s.heading_track_mode {
                " FPA:  ----- deg".to_string()
            } else {
                " V/S:  ----- fpm".to_string()
            }
        }
        VerticalMode::VerticalSpeed => {
            format!(" V/S:  {} fpm", format_vertical_speed(s.vertical_speed))
        }
        VerticalMode::Other(_) => {
            let mark = glyph(s.pushed.vertical_speed);
            if s.heading_track_mode {
                format!("{mark}FPA:  {:+4.1} deg", s.flight_path_angle)
            } else {
                format!(
                    "{mark}V/S:  {} fpm",
                    format_vertical_speed(s.vertical_speed)
                )
            }
        }
    }
}

fn mode_line(s: &FcuSnapshot) -> String {
    let lateral = if s.heading_track_mode {
        "TRK/FPA"
    } else {
        "HDG/VS "
    };
    let speed = if s.mach_mode { "MACH" } else { "SPD " };
    format!("Mode: {lateral} | {speed}")
}

fn autopilot_line(s: &FcuSnapshot) -> String {
    fn on_off(engaged: bool) -> &'static str {
        if engaged { "ON" } else { "OFF" }
    }
    format!(
        "AP1: {:<3}  |  AP2: {:<3}",
        on_off(s.ap1_engaged),
        on_off(s.ap2_engaged)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fcu::display::{Emphasis, PANEL_LINE_COUNT};
    use crate::knob::KnobPushFlags;

    fn texts(snapshot: &FcuSnapshot) -> Vec<String> {
        format(snapshot)
            .iter()
            .map(|line| line.text().to_string())
            .collect()
    }

    fn cruise() -> FcuSnapshot {
        FcuSnapshot {
            speed: 250.0,
            heading: 90.0,
            altitude: 5000.0,
            vertical_speed: -450.0,
            ap1_engaged: true,
            vertical_mode: VerticalMode::Other(0),
            ..FcuSnapshot::default()
        }
    }

    #[test]
    fn test_end_to_end_scenario() {
        let lines = texts(&cruise());
        assert_eq!(
            lines,
            vec![
                "========== ToLiss FCU ==========",
                " SPD:  250 kts",
                " HDG:  090 deg",
                " ALT:   5000 ft",
                " V/S:  -0500 fpm",
                "--------------------------------",
                "Mode: HDG/VS  | SPD ",
                "AP1: ON   |  AP2: OFF",
                "================================",
            ]
        );
    }

    #[test]
    fn test_emphasis_layout() {
        let emphases: Vec<Emphasis> = format(&cruise()).iter().map(DisplayLine::emphasis).collect();
        assert_eq!(emphases.len(), PANEL_LINE_COUNT);
        for (index, emphasis) in emphases.iter().enumerate() {
            let expected = if matches!(index, 0 | 5 | 8) {
                Emphasis::Header
            } else {
                Emphasis::Normal
            };
            assert_eq!(*emphasis, expected, "line {index}");
        }
    }

    #[test]
    fn test_format_is_idempotent() {
        let snapshot = cruise();
        assert_eq!(format(&snapshot), format(&snapshot));
    }

    #[test]
    fn test_default_snapshot_formats_completely() {
        let lines = texts(&FcuSnapshot::default());
        assert_eq!(lines.len(), PANEL_LINE_COUNT);
        assert_eq!(lines[1], " SPD:    0 kts");
        assert_eq!(lines[2], " HDG:  000 deg");
        assert_eq!(lines[3], " ALT:      0 ft");
        assert_eq!(lines[4], " V/S:  +0000 fpm");
        assert_eq!(lines[7], "AP1: OFF  |  AP2: OFF");
    }

    #[test]
    fn test_vertical_speed_rounding() {
        assert_eq!(round_vertical_speed(237.0), 200);
        assert_eq!(round_vertical_speed(-237.0), -200);
        assert_eq!(round_vertical_speed(250.0), 300);
        assert_eq!(round_vertical_speed(-250.0), -300);
        assert_eq!(round_vertical_speed(49.9), 0);

        assert_eq!(format_vertical_speed(237.0), "+0200");
        assert_eq!(format_vertical_speed(-237.0), "-0200");
        assert_eq!(format_vertical_speed(250.0), "+0300");
        assert_eq!(format_vertical_speed(-6000.0), "-6000");
    }

    #[test]
    fn test_vertical_speed_rounding_saturates() {
        assert_eq!(round_vertical_speed(f32::MAX) % 100, 0);
        assert!(round_vertical_speed(f32::MIN) < 0);
        assert_eq!(round_vertical_speed(f32::NAN), 0);
    }

    #[test]
    fn test_managed_speed_ignores_value_and_forces_glyph() {
        let snapshot = FcuSnapshot {
            speed_managed: true,
            mach_mode: true,
            speed: 280.0,
            ..FcuSnapshot::default()
        };
        assert_eq!(texts(&snapshot)[1], "*MACH: ---");

        let snapshot = FcuSnapshot {
            speed_managed: true,
            speed: 280.0,
            ..FcuSnapshot::default()
        };
        assert_eq!(texts(&snapshot)[1], "*MACH: ---");
    }

    #[test]
    fn test_mach_speed() {
        let snapshot = FcuSnapshot {
            mach_mode: true,
            speed: 0.78,
            pushed: KnobPushFlags {
                speed: true,
                ..KnobPushFlags::default()
            },
            ..FcuSnapshot::default()
        };
        let lines = texts(&snapshot);
        assert_eq!(lines[1], "*MACH: 0.780");
        assert_eq!(lines[6], "Mode: HDG/VS  | MACH");
    }

    #[test]
    fn test_speed_rounds_to_whole_knots() {
        let snapshot = FcuSnapshot {
            speed: 139.6,
            ..FcuSnapshot::default()
        };
        assert_eq!(texts(&snapshot)[1], " SPD:  140 kts");
    }

    #[test]
    fn test_track_mode_heading() {
        let snapshot = FcuSnapshot {
            heading_track_mode: true,
            heading: 5.4,
            pushed: KnobPushFlags {
                heading: true,
                ..KnobPushFlags::default()
            },
            ..FcuSnapshot::default()
        };
        let lines = texts(&snapshot);
        assert_eq!(lines[2], "*TRK:  005 deg");
        assert_eq!(lines[6], "Mode: TRK/FPA | SPD ");
    }

    #[test]
    fn test_managed_heading() {
        let snapshot = FcuSnapshot {
            heading_managed: true,
            heading: 270.0,
            ..FcuSnapshot::default()
        };
        assert_eq!(texts(&snapshot)[2], "*HDG:  --- deg");

        let snapshot = FcuSnapshot {
            heading_managed: true,
            heading_track_mode: true,
            ..FcuSnapshot::default()
        };
        assert_eq!(texts(&snapshot)[2], "*TRK:  --- deg");
    }

    #[test]
    fn test_climb_altitude_forces_glyph() {
        let snapshot = FcuSnapshot {
            altitude: 35000.0,
            vertical_mode: VerticalMode::Climb,
            ..FcuSnapshot::default()
        };
        assert_eq!(texts(&snapshot)[3], "*ALT:  35000 ft");
    }

    #[test]
    fn test_open_climb_altitude_placeholder() {
        let snapshot = FcuSnapshot {
            altitude: 35000.0,
            vertical_mode: VerticalMode::OpenClimb,
            pushed: KnobPushFlags {
                altitude: true,
                ..KnobPushFlags::default()
            },
            ..FcuSnapshot::default()
        };
        assert_eq!(texts(&snapshot)[3], " ALT:  ----- ft");
    }

    #[test]
    fn test_altitude_glyph_follows_knob() {
        let snapshot = FcuSnapshot {
            altitude: 12000.0,
            vertical_mode: VerticalMode::VerticalSpeed,
            pushed: KnobPushFlags {
                altitude: true,
                ..KnobPushFlags::default()
            },
            ..FcuSnapshot::default()
        };
        assert_eq!(texts(&snapshot)[3], "*ALT:  12000 ft");
    }

    #[test]
    fn test_climb_modes_hide_vertical_rate() {
        for mode in [VerticalMode::Climb, VerticalMode::OpenClimb] {
            let snapshot = FcuSnapshot {
                vertical_mode: mode,
                vertical_speed: 1800.0,
                flight_path_angle: 3.0,
                ..FcuSnapshot::default()
            };
            assert_eq!(texts(&snapshot)[4], " V/S:  ----- fpm");

            let snapshot = FcuSnapshot {
                heading_track_mode: true,
                ..snapshot
            };
            assert_eq!(texts(&snapshot)[4], " FPA:  ----- deg");
        }
    }

    #[test]
    fn test_vertical_speed_mode_always_shows_fpm_without_glyph() {
        let snapshot = FcuSnapshot {
            vertical_mode: VerticalMode::VerticalSpeed,
            vertical_speed: 1250.0,
            heading_track_mode: true,
            pushed: KnobPushFlags {
                vertical_speed: true,
                ..KnobPushFlags::default()
            },
            ..FcuSnapshot::default()
        };
        assert_eq!(texts(&snapshot)[4], " V/S:  +1300 fpm");
    }

    #[test]
    fn test_flight_path_angle() {
        let snapshot = FcuSnapshot {
            heading_track_mode: true,
            flight_path_angle: -2.54,
            pushed: KnobPushFlags {
                vertical_speed: true,
                ..KnobPushFlags::default()
            },
            ..FcuSnapshot::default()
        };
        assert_eq!(texts(&snapshot)[4], "*FPA:  -2.5 deg");

        let snapshot = FcuSnapshot {
            flight_path_angle: 1.0,
            pushed: KnobPushFlags::default(),
            ..snapshot
        };
        assert_eq!(texts(&snapshot)[4], " FPA:  +1.0 deg");
    }

    #[test]
    fn test_vertical_speed_glyph_follows_knob() {
        let snapshot = FcuSnapshot {
            vertical_speed: 700.0,
            pushed: KnobPushFlags {
                vertical_speed: true,
                ..KnobPushFlags::default()
            },
            ..FcuSnapshot::default()
        };
        assert_eq!(texts(&snapshot)[4], "*V/S:  +0700 fpm");
    }

    #[test]
    fn test_both_autopilots() {
        let snapshot = FcuSnapshot {
            ap1_engaged: true,
            ap2_engaged: true,
            ..FcuSnapshot::default()
        };
        assert_eq!(texts(&snapshot)[7], "AP1: ON   |  AP2: ON ");
    }

    // Property-based tests using proptest
    #[cfg(test)]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn snapshot() -> impl Strategy<Value = FcuSnapshot> {
            (
                (any::<f32>(), any::<f32>(), any::<f32>(), any::<f32>(), any::<f32>()),
                (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()),
                prop_oneof![Just(1), Just(101), Just(107), any::<i32>()],
                (any::<bool>(), any::<bool>()),
                (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()),
            )
                .prop_map(
                    |(
                        (speed, heading, altitude, vertical_speed, flight_path_angle),
                        (mach_mode, heading_track_mode, speed_managed, heading_managed),
                        mode,
                        (ap1_engaged, ap2_engaged),
                        (p_spd, p_hdg, p_alt, p_vs),
                    )| FcuSnapshot {
                        speed,
                        heading,
                        altitude,
                        vertical_speed,
                        flight_path_angle,
                        mach_mode,
                        heading_track_mode,
                        speed_managed,
                        heading_managed,
                        vertical_mode: VerticalMode::from_code(mode),
                        ap1_engaged,
                        ap2_engaged,
                        pushed: KnobPushFlags {
                            speed: p_spd,
                            heading: p_hdg,
                            altitude: p_alt,
                            vertical_speed: p_vs,
                        },
                    },
                )
        }

        proptest! {
            /// Property: every snapshot yields the full panel with fixed frame lines
            #[test]
            fn panel_shape_is_fixed(s in snapshot()) {
                let lines = format(&s);
                prop_assert_eq!(lines.len(), PANEL_LINE_COUNT);
                prop_assert_eq!(lines[0].text(), TITLE_LINE);
                prop_assert_eq!(lines[5].text(), SEPARATOR_LINE);
                prop_assert_eq!(lines[8].text(), FOOTER_LINE);
            }

            /// Property: formatting is a pure function of the snapshot
            #[test]
            fn format_is_deterministic(s in snapshot()) {
                prop_assert_eq!(format(&s), format(&s));
            }

            /// Property: climb modes never show a numeric vertical rate
            #[test]
            fn climb_modes_show_placeholder(s in snapshot(), open in any::<bool>()) {
                let mode = if open { VerticalMode::OpenClimb } else { VerticalMode::Climb };
                let s = FcuSnapshot { vertical_mode: mode, ..s };
                let lines = format(&s);
                prop_assert!(lines[4].text().contains("-----"));
            }

            /// Property: rounded vertical speed is a multiple of 100 within 50 fpm of the input
            #[test]
            fn vertical_speed_rounds_to_hundreds(v in -20_000i32..20_000) {
                #[expect(clippy::cast_precision_loss, reason = "Test range is exact in f32")]
                let rounded = round_vertical_speed(v as f32);
                prop_assert_eq!(rounded % 100, 0);
                prop_assert!((rounded - i64::from(v)).abs() <= 50);
            }
        }
    }
}
