#![no_main]
use gedxml::{ConvertOptions, Converter};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = Converter::convert_str(s, &ConvertOptions::default());
    }
});
