#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(m) = imgmeta::classify(data, "fuzz") {
        assert!(m.width() > 0 && m.height() > 0);
    }
});
