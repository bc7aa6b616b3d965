#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = saphyr_value::decode(s);
        let _ = saphyr_value::check_yaml_budget(s, &saphyr_value::Budget::default());
    }
});
