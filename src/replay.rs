//! Recorded host data for driving the panel outside the simulator
//!
//! A replay file is a JSON array of frames. Each frame maps signal keys to
//! values and is applied on top of the previous frames, so a frame only needs
//! the keys that changed. A `null` value withdraws the key.
//!
//! ```json
//! [
//!   { "AirbusFBW/SPDmanaged": 0, "sim/cockpit2/autopilot/airspeed_dial_kts_mach": 250.0 },
//!   { "AirbusFBW/SPDKnobPushAnim": 0.8 },
//!   { "AirbusFBW/SPDKnobPushAnim": 0.0 }
//! ]
//! ```

use crate::error::{FcuOverlayError, Result};
use crate::host::{MemoryHost, SignalValue};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// One frame of changed signals; `None` withdraws the key
pub type ReplayFrame = BTreeMap<String, Option<SignalValue>>;

/// Parse replay frames from JSON text
pub fn parse_frames(json: &str) -> Result<Vec<ReplayFrame>> {
    let frames: Vec<ReplayFrame> =
        serde_json::from_str(json).map_err(|e| FcuOverlayError::ReplayError(e.to_string()))?;
    if frames.is_empty() {
        return Err(FcuOverlayError::ReplayError("no frames".to_string()));
    }
    debug!("Parsed {} replay frame(s)", frames.len());
    Ok(frames)
}

/// Read and parse a replay file
pub fn load_frames(path: &Path) -> Result<Vec<ReplayFrame>> {
    let json = std::fs::read_to_string(path)?;
    parse_frames(&json)
}

/// Apply one frame to the host
pub fn apply_frame(host: &mut MemoryHost, frame: &ReplayFrame) {
    for (key, value) in frame {
        match value {
            Some(value) => host.set(key.as_str(), value.clone()),
            None => host.remove(key),
        }
    }
}
