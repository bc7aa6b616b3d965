//! Lexical recognizers for plain scalar text.
//!
//! Every recognizer requires the whole text to match; partial matches such as
//! `12abc` or `0x` are rejected so that the resolver falls through to the next
//! rule.

/// `true`, `yes` and `on`, case-insensitive.
pub(crate) fn is_true_literal(s: &str) -> bool {
    s.eq_ignore_ascii_case("true") || s.eq_ignore_ascii_case("yes") || s.eq_ignore_ascii_case("on")
}

/// `false`, `no` and `off`, case-insensitive.
pub(crate) fn is_false_literal(s: &str) -> bool {
    s.eq_ignore_ascii_case("false") || s.eq_ignore_ascii_case("no") || s.eq_ignore_ascii_case("off")
}

/// Parse a YAML 1.1 boolean literal (the "Norway problem" forms included).
pub(crate) fn parse_yaml11_bool(s: &str) -> Option<bool> {
    if is_true_literal(s) {
        Some(true)
    } else if is_false_literal(s) {
        Some(false)
    } else {
        None
    }
}

/// Empty text, `~`, or `null` in any case.
pub(crate) fn is_null_literal(s: &str) -> bool {
    s.is_empty() || s == "~" || s.eq_ignore_ascii_case("null")
}

/// `.inf`, `+.inf`, `-.inf` and `.nan`, case-insensitive.
pub(crate) fn parse_special_float(s: &str) -> Option<f64> {
    if s.eq_ignore_ascii_case(".inf") || s.eq_ignore_ascii_case("+.inf") {
        Some(f64::INFINITY)
    } else if s.eq_ignore_ascii_case("-.inf") {
        Some(f64::NEG_INFINITY)
    } else if s.eq_ignore_ascii_case(".nan") {
        Some(f64::NAN)
    } else {
        None
    }
}

fn digit_value(b: u8, radix: u32) -> Option<u64> {
    let d = match b {
        b'0'..=b'9' => (b - b'0') as u32,
        b'a'..=b'f' => 10 + (b - b'a') as u32,
        b'A'..=b'F' => 10 + (b - b'A') as u32,
        _ => return None,
    };
    if d < radix { Some(d as u64) } else { None }
}

/// Magnitude of a non-empty digit run; `None` on a foreign character or overflow.
fn parse_magnitude(digits: &str, radix: u32) -> Option<u64> {
    if digits.is_empty() {
        return None;
    }
    let mut val: u64 = 0;
    for b in digits.bytes() {
        let d = digit_value(b, radix)?;
        val = val.checked_mul(radix as u64)?;
        val = val.checked_add(d)?;
    }
    Some(val)
}

fn apply_sign(magnitude: u64, negative: bool) -> Option<i64> {
    if negative {
        if magnitude == i64::MIN.unsigned_abs() {
            Some(i64::MIN)
        } else {
            i64::try_from(magnitude).ok().map(|v| -v)
        }
    } else {
        i64::try_from(magnitude).ok()
    }
}

fn split_sign(s: &str) -> (bool, &str) {
    match s.strip_prefix('+') {
        Some(r) => (false, r),
        None => match s.strip_prefix('-') {
            Some(r) => (true, r),
            None => (false, s),
        },
    }
}

/// Integer with automatic base detection: `0x` hex, leading `0` legacy octal,
/// otherwise decimal. An optional sign precedes the prefix.
///
/// Values outside the `i64` range are rejected rather than clamped.
pub(crate) fn parse_auto_radix_i64(s: &str) -> Option<i64> {
    let (negative, rest) = split_sign(s);
    let (radix, digits) = if let Some(r) = rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
        (16, r)
    } else if rest.len() > 1 && rest.starts_with('0') {
        (8, &rest[1..])
    } else {
        (10, rest)
    };
    apply_sign(parse_magnitude(digits, radix)?, negative)
}

/// YAML 1.1 octal in the `0o17` form. Needs at least one digit after the prefix.
pub(crate) fn parse_yaml11_octal(s: &str) -> Option<i64> {
    if s.len() <= 2 {
        return None;
    }
    let digits = s.strip_prefix("0o").or_else(|| s.strip_prefix("0O"))?;
    apply_sign(parse_magnitude(digits, 8)?, false)
}

/// Floating point number spanning the whole text.
///
/// Accepts decimal notation with optional exponent, the words `inf`,
/// `infinity` and `nan` in any case, and hexadecimal floats such as `0x1.8p1`.
pub(crate) fn parse_full_f64(s: &str) -> Option<f64> {
    if s.is_empty() {
        return None;
    }
    let (negative, rest) = split_sign(s);
    if let Some(hex) = rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
        let v = parse_hex_float(hex)?;
        return Some(if negative { -v } else { v });
    }
    s.parse::<f64>().ok()
}

/// Body of a hexadecimal float after the `0x` prefix: hex digits with an
/// optional fraction, then an optional binary exponent `p[+-]digits`.
fn parse_hex_float(body: &str) -> Option<f64> {
    let (mantissa, exponent) = match body.find(['p', 'P']) {
        Some(pos) => (&body[..pos], Some(&body[pos + 1..])),
        None => (body, None),
    };
    let (int_part, frac_part) = match mantissa.split_once('.') {
        Some((i, f)) => (i, f),
        None => (mantissa, ""),
    };
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }

    let mut value = 0.0f64;
    for b in int_part.bytes().chain(frac_part.bytes()) {
        value = value * 16.0 + digit_value(b, 16)? as f64;
    }

    let mut exp: i32 = match exponent {
        Some(e) => {
            let (neg, digits) = split_sign(e);
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            let magnitude: i32 = digits.parse().unwrap_or(i32::MAX / 2);
            if neg { -magnitude } else { magnitude }
        }
        None => 0,
    };
    let frac_bits = i32::try_from(frac_part.len()).ok()?.checked_mul(4)?;
    exp = exp.saturating_sub(frac_bits);
    Some(value * 2f64.powi(exp))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_radix_detects_bases() {
        assert_eq!(parse_auto_radix_i64("42"), Some(42));
        assert_eq!(parse_auto_radix_i64("-42"), Some(-42));
        assert_eq!(parse_auto_radix_i64("+7"), Some(7));
        assert_eq!(parse_auto_radix_i64("0x1F"), Some(31));
        assert_eq!(parse_auto_radix_i64("-0X1f"), Some(-31));
        assert_eq!(parse_auto_radix_i64("010"), Some(8));
        assert_eq!(parse_auto_radix_i64("0"), Some(0));
        assert_eq!(parse_auto_radix_i64("-9223372036854775808"), Some(i64::MIN));
    }

    #[test]
    fn auto_radix_requires_full_consumption() {
        for s in ["", "-", "0x", "08", "12abc", "1_000", "1.5", " 1", "9223372036854775808"] {
            assert_eq!(parse_auto_radix_i64(s), None, "{s:?}");
        }
    }

    #[test]
    fn yaml11_octal() {
        assert_eq!(parse_yaml11_octal("0o17"), Some(15));
        assert_eq!(parse_yaml11_octal("0O777"), Some(511));
        assert_eq!(parse_yaml11_octal("0o"), None);
        assert_eq!(parse_yaml11_octal("0o8"), None);
        assert_eq!(parse_yaml11_octal("017"), None);
    }

    #[test]
    fn floats() {
        assert_eq!(parse_full_f64("1.5"), Some(1.5));
        assert_eq!(parse_full_f64("-2e3"), Some(-2000.0));
        assert_eq!(parse_full_f64(".5"), Some(0.5));
        assert_eq!(parse_full_f64("08"), Some(8.0));
        assert_eq!(parse_full_f64("inf"), Some(f64::INFINITY));
        assert_eq!(parse_full_f64("0x1.8p1"), Some(3.0));
        assert_eq!(parse_full_f64("-0x10"), Some(-16.0));
        assert!(parse_full_f64("NaN").is_some_and(f64::is_nan));
        for s in ["", ".", "e5", "1.5x", "0x", "0x1p", "1,5", ".inf"] {
            assert_eq!(parse_full_f64(s), None, "{s:?}");
        }
    }

    #[test]
    fn keyword_literals() {
        assert_eq!(parse_yaml11_bool("ON"), Some(true));
        assert_eq!(parse_yaml11_bool("No"), Some(false));
        assert_eq!(parse_yaml11_bool("y"), None);
        assert!(is_null_literal(""));
        assert!(is_null_literal("NULL"));
        assert!(!is_null_literal("nil"));
        assert_eq!(parse_special_float("+.INF"), Some(f64::INFINITY));
        assert_eq!(parse_special_float("-.Inf"), Some(f64::NEG_INFINITY));
        assert!(parse_special_float(".NaN").is_some_and(f64::is_nan));
    }
}
