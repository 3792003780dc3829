#![no_main]

use imgmeta::{FormatParser, Probe};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let matches = FormatParser::ALL
        .iter()
        .filter(|p| matches!(p.try_parse(data), Ok(Probe::Match(_))))
        .count();
    assert!(matches <= 1);
});
