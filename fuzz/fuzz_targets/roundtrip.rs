#![no_main]

use libfuzzer_sys::fuzz_target;
use saphyr_value::{Value, decode, encode};

/// Doubles are compared by text: NaN never equals itself.
fn has_double(v: &Value) -> bool {
    match v {
        Value::Double(_) => true,
        Value::Array(items) => items.iter().any(has_double),
        Value::Object(map) => map.values().any(has_double),
        _ => false,
    }
}

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(value) = decode(s) else {
        return;
    };
    let text = encode(&value).expect("decoded values always encode");
    let again = decode(&text).expect("encoded text always decodes");
    if has_double(&value) {
        assert_eq!(encode(&again).ok(), Some(text));
    } else {
        assert_eq!(again, value);
    }

    // Any string read back as a string.
    let as_string = Value::String(s.to_owned());
    let quoted = encode(&as_string).expect("strings always encode");
    assert_eq!(decode(&quoted).ok(), Some(as_string));
});
