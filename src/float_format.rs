//! Float rendering that always reads back as a YAML float.
//!
//! zmij produces the shortest text that round-trips to the same value, but may
//! render `3` or `4e-6`; both would then resolve as something else, so a `.0` is
//! inserted.

use std::fmt::Write;

use num_traits::float::FloatCore;
use zmij::Float;

/// Format as float string, make changes to be sure valid YAML float.
pub(crate) fn write_float_string<F: Float + FloatCore, W: Write>(
    target: &mut W,
    f: F,
) -> std::fmt::Result {
    if f.is_nan() {
        return target.write_str(".nan");
    }
    if f.is_infinite() {
        return target.write_str(if f.is_sign_positive() { ".inf" } else { "-.inf" });
    }
    let mut buf = zmij::Buffer::new();
    let s = buf.format_finite(f);
    if s.contains('.') {
        return target.write_str(s);
    }
    match s.find(['e', 'E']) {
        // "4e-6" -> "4.0e-6"
        Some(exp_pos) => {
            target.write_str(&s[..exp_pos])?;
            target.write_str(".0")?;
            target.write_str(&s[exp_pos..])
        }
        None => {
            target.write_str(s)?;
            target.write_str(".0")
        }
    }
}
