#![no_main]

use libfuzzer_sys::fuzz_target;
use mid_errors::ErrorType;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(parsed) = s.parse::<ErrorType>() {
            // Textual form must parse back to the same mask
            assert_eq!(parsed.to_string().parse::<ErrorType>().ok(), Some(parsed));
        }
    }
});
