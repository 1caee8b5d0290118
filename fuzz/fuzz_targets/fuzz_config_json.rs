#![no_main]

use fcu_overlay::config::AppConfig;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Parsing and clamping arbitrary JSON must never panic
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(mut config) = serde_json::from_str::<AppConfig>(s) {
            config.sanitize();
            let _ = serde_json::to_string(&config);
        }
    }
});
