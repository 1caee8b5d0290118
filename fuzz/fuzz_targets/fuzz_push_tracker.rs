#![no_main]

use fcu_overlay::knob::{KnobPushTracker, PushPhase, REST_THRESHOLD};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Any sample sequence, including NaN and infinities, must be accepted
    let mut tracker = KnobPushTracker::new();
    for chunk in data.chunks_exact(4) {
        let sample = f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        let was = tracker.phase();
        tracker.update(sample);

        // Only a return to rest can latch the knob
        if tracker.phase() == PushPhase::Pushed && was != PushPhase::Pushed {
            assert!(sample < REST_THRESHOLD);
        }
    }
});
