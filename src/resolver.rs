//! Scalar resolution: turns one scalar event into a typed [`Value`].
//!
//! Rules are applied in a fixed order and the first match wins:
//!
//! 1. A recognized core tag (`!!null`, `!!bool`, `!!int`, `!!float`, `!!str`). `!!int` and
//!    `!!float` only apply when the text is a valid literal of that kind; otherwise
//!    resolution continues as if the scalar were untagged.
//! 2. Single- and double-quoted scalars are strings.
//! 3. Null: empty, `~`, `null`.
//! 4. Booleans: `true`/`yes`/`on`, `false`/`no`/`off`.
//! 5. `.inf`, `+.inf`, `-.inf`, `.nan`.
//! 6. YAML 1.1 octal `0o17`.
//! 7. Integers with automatic base detection (`0x1F`, `017`, `42`).
//! 8. Floats.
//! 9. Anything else is kept verbatim as a string.
//!
//! Keyword comparisons are ASCII case-insensitive. Resolution never fails.

use saphyr_parser::ScalarStyle;

use crate::parse_scalars::{
    is_null_literal, is_true_literal, parse_auto_radix_i64, parse_full_f64, parse_special_float,
    parse_yaml11_bool, parse_yaml11_octal,
};
use crate::tags::CoreTag;
use crate::value::Value;

/// Resolve a scalar to a value given its text, presentation style and tag.
pub fn resolve_scalar(value: &str, style: ScalarStyle, tag: Option<&str>) -> Value {
    match CoreTag::from_tag(tag) {
        Some(CoreTag::Null) => return Value::Null,
        Some(CoreTag::Bool) => return Value::Bool(is_true_literal(value)),
        Some(CoreTag::Int) => {
            if let Some(i) = parse_auto_radix_i64(value) {
                return Value::Integer(i);
            }
        }
        Some(CoreTag::Float) => {
            if let Some(f) = parse_full_f64(value) {
                return Value::Double(f);
            }
        }
        Some(CoreTag::Str) => return Value::String(value.to_owned()),
        Some(CoreTag::Other) | None => {}
    }

    if matches!(style, ScalarStyle::SingleQuoted | ScalarStyle::DoubleQuoted) {
        return Value::String(value.to_owned());
    }

    resolve_plain(value)
}

/// Untagged, unquoted resolution (rules 3 to 9).
///
/// The serializer uses this to decide whether a string would survive being
/// written as a plain scalar.
pub(crate) fn resolve_plain(value: &str) -> Value {
    if is_null_literal(value) {
        return Value::Null;
    }
    if let Some(b) = parse_yaml11_bool(value) {
        return Value::Bool(b);
    }
    if let Some(f) = parse_special_float(value) {
        return Value::Double(f);
    }
    if let Some(i) = parse_yaml11_octal(value) {
        return Value::Integer(i);
    }
    if let Some(i) = parse_auto_radix_i64(value) {
        return Value::Integer(i);
    }
    if let Some(f) = parse_full_f64(value) {
        return Value::Double(f);
    }
    Value::String(value.to_owned())
}
