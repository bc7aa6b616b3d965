//! Quoting decisions for emitted scalars.
//!
//! Two separate questions are answered here:
//! - [`is_plain_safe`]: would the text survive the YAML grammar as a plain scalar
//!   (no indicators, no comment or mapping separators, no document markers)?
//! - [`needs_forced_quotes`]: would the resolver read the plain text back as
//!   something other than a string?

use crate::parse_scalars::parse_full_f64;
use crate::resolver::resolve_plain;
use crate::value::Value;

/// Words that always get double quotes when written as string values.
const RESERVED: [&str; 11] = [
    "true", "false", "yes", "no", "on", "off", "null", "~", ".inf", "-.inf", ".nan",
];

/// Returns true if `s` written as a string value must be double-quoted to read
/// back as the same string.
pub(crate) fn needs_forced_quotes(s: &str) -> bool {
    if s.is_empty() {
        return true;
    }
    if RESERVED.iter().any(|w| s.eq_ignore_ascii_case(w)) {
        return true;
    }
    if parse_full_f64(s).is_some() {
        return true;
    }
    !matches!(resolve_plain(s), Value::String(_))
}

/// Characters that YAML treats as line breaks or that are not printable.
fn is_unsafe_char(c: char) -> bool {
    c.is_control() || matches!(c, '\u{FEFF}' | '\u{2028}' | '\u{2029}' | '\u{FFFE}' | '\u{FFFF}')
}

/// Returns true if `s` can be emitted as a plain scalar in block context.
#[inline]
pub(crate) fn is_plain_safe(s: &str) -> bool {
    let bytes = s.as_bytes();
    let (Some(&first), Some(&last)) = (bytes.first(), bytes.last()) else {
        return false;
    };
    // Leading or trailing blanks would be stripped by the scanner.
    if first == b' ' || last == b' ' {
        return false;
    }
    if matches!(
        first,
        b'[' | b']'
            | b'{'
            | b'}'
            | b','
            | b'#'
            | b'&'
            | b'*'
            | b'!'
            | b'|'
            | b'>'
            | b'\''
            | b'"'
            | b'%'
            | b'@'
            | b'`'
    ) {
        return false;
    }
    // `-`, `?` and `:` start a plain scalar only when followed by a non-space.
    if matches!(first, b'-' | b'?' | b':') && matches!(bytes.get(1), None | Some(b' ')) {
        return false;
    }
    if s.starts_with("---") || s.starts_with("...") {
        return false;
    }
    if last == b':' || s.contains(": ") || s.contains('#') {
        return false;
    }
    !s.chars().any(is_unsafe_char)
}
