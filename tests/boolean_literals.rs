use saphyr_value::{Value, decode};

#[test]
fn yaml11_truthy_boolean_literals() {
    let cases = ["true", "True", "TRUE", "yes", "Yes", "YES", "on", "On", "ON"];
    for case in cases {
        let v = decode(&format!("{case}\n")).expect("expected boolean to parse");
        assert_eq!(v, Value::Bool(true), "literal `{case}` should parse as true");
    }
}

#[test]
fn yaml11_falsey_boolean_literals() {
    let cases = ["false", "False", "FALSE", "no", "No", "NO", "off", "Off", "OFF"];
    for case in cases {
        let v = decode(&format!("{case}\n")).expect("expected boolean to parse");
        assert_eq!(v, Value::Bool(false), "literal `{case}` should parse as false");
    }
}

#[test]
fn near_miss_literals_stay_strings() {
    for case in ["y", "n", "truth", "yess", "onn", "t", "nil"] {
        let v = decode(case).unwrap();
        assert_eq!(v, Value::from(case), "literal `{case}` should stay a string");
    }
}

#[test]
fn quoted_literals_are_strings() {
    assert_eq!(decode("'true'").unwrap(), Value::from("true"));
    assert_eq!(decode("\"true\"").unwrap(), Value::from("true"));
    assert_eq!(decode("'off'").unwrap(), Value::from("off"));
}

#[test]
fn null_literals() {
    for case in ["~", "null", "Null", "NULL", ""] {
        assert_eq!(decode(case).unwrap(), Value::Null, "{case:?}");
    }
    assert_eq!(decode("a:\nb: ~\n").unwrap()["a"], Value::Null);
    assert_eq!(decode("'~'").unwrap(), Value::from("~"));
}

#[test]
fn bool_tag_forces_boolean() {
    let v = decode("[!!bool yes, !!bool 'ON', !!bool nope, !!bool 1]").unwrap();
    assert_eq!(
        v,
        Value::Array(vec![
            Value::Bool(true),
            Value::Bool(true),
            Value::Bool(false),
            Value::Bool(false),
        ])
    );
}
