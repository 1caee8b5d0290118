#![no_main]

use fcu_overlay::fcu::{FcuSnapshot, PANEL_LINE_COUNT, VerticalMode, format};
use fcu_overlay::knob::KnobPushFlags;
use libfuzzer_sys::fuzz_target;

fn f32_at(data: &[u8], index: usize) -> f32 {
    let start = index * 4;
    data.get(start..start + 4)
        .map_or(0.0, |b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
}

fuzz_target!(|data: &[u8]| {
    // Five floats, a mode code and a flag byte; short inputs read as zero
    let flags = data.get(24).copied().unwrap_or(0);
    let bit = |n: u8| flags & (1 << n) != 0;
    let mode_code = data
        .get(20..24)
        .map_or(0, |b| i32::from_le_bytes([b[0], b[1], b[2], b[3]]));

    let snapshot = FcuSnapshot {
        speed: f32_at(data, 0),
        heading: f32_at(data, 1),
        altitude: f32_at(data, 2),
        vertical_speed: f32_at(data, 3),
        flight_path_angle: f32_at(data, 4),
        vertical_mode: VerticalMode::from_code(mode_code),
        mach_mode: bit(0),
        heading_track_mode: bit(1),
        speed_managed: bit(2),
        heading_managed: bit(3),
        ap1_engaged: bit(4),
        ap2_engaged: bit(5),
        pushed: KnobPushFlags {
            speed: bit(6),
            heading: bit(7),
            altitude: bit(6) && bit(7),
            vertical_speed: bit(6) ^ bit(7),
        },
    };

    let lines = format(&snapshot);
    assert_eq!(lines.len(), PANEL_LINE_COUNT);
    assert_eq!(lines, format(&snapshot));
});
