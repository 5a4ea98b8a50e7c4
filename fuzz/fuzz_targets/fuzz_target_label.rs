#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(label) = std::str::from_utf8(data) {
        // Fuzz label parsing - this should never panic
        if let Ok(parsed) = deployinfo::TargetLabel::parse(label) {
            let _ = parsed.package_dir();
        }
    }
});
