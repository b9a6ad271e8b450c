#![no_main]

use libfuzzer_sys::fuzz_target;
use mid_errors::{ErrorMsg, ErrorMsgs, ErrorType, Meta};
use serde_json::Value;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(value) = serde_json::from_str::<Value>(s) else {
        return;
    };

    // Every metadata shape must render without panicking
    let mut errs = ErrorMsgs::new();
    errs.record(s.to_owned()).set_meta(value.clone());
    errs.push(ErrorMsg::new("record", ErrorType::PUBLIC).with_meta(Meta::Record(value)));

    let _ = errs.to_string();
    let _ = serde_json::to_string(&errs);
    let _ = errs.by_type(ErrorType::PUBLIC).json().into_value();
});
