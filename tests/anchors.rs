use indoc::indoc;
use saphyr_value::{Value, decode};

#[test]
fn alias_decodes_to_null() {
    let v = decode("a: &x 1\nb: *x").unwrap();
    let expected: Value = [("a", Value::Integer(1)), ("b", Value::Null)]
        .into_iter()
        .collect();
    assert_eq!(v, expected);
}

#[test]
fn aliased_collections_are_not_replayed() {
    let y = indoc! {"
        base: &base
          host: localhost
          port: 80
        copy: *base
        list:
          - *base
          - &n 3
          - *n
    "};
    let v = decode(y).unwrap();
    assert_eq!(v["base"]["port"], Value::Integer(80));
    assert!(v["copy"].is_null());
    assert_eq!(
        v["list"],
        Value::Array(vec![Value::Null, Value::Integer(3), Value::Null])
    );
}

#[test]
fn merge_keys_are_plain_entries() {
    let y = indoc! {"
        base: &b {x: 1}
        derived:
          <<: *b
          y: 2
    "};
    let v = decode(y).unwrap();
    let derived = v["derived"].as_object().unwrap();
    assert!(derived["<<"].is_null());
    assert_eq!(derived["y"], Value::Integer(2));
    assert!(derived.get("x").is_none());
}

#[test]
fn alias_as_key_is_rejected() {
    assert!(decode("a: &k key\n*k : value\n").is_err());
}
