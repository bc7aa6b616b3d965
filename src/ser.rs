//! Value walker and scalar formatter.
//!
//! Walks a [`Value`] depth-first and drives the [`Emitter`] with one event per
//! node. Leaves are formatted here; in particular string leaves that the
//! resolver would read back as something else are forced into double quotes,
//! so `decode(encode(String(s)))` returns `String(s)`.

use std::fmt::Write;

use crate::budget::BudgetBreach;
use crate::emitter::{EmitEvent, EmitStyle, Emitter};
use crate::error::Error;
use crate::float_format::write_float_string;
use crate::ser_quoting::needs_forced_quotes;
use crate::serializer_options::SerializerOptions;
use crate::value::Value;

/// Serialize a value to a YAML string with default options.
///
/// ```rust
/// use saphyr_value::Value;
///
/// assert_eq!(saphyr_value::encode(&Value::from("true")).unwrap(), "\"true\"\n");
/// assert_eq!(saphyr_value::encode(&Value::Double(f64::NAN)).unwrap(), ".nan\n");
/// ```
pub fn encode(value: &Value) -> Result<String, Error> {
    encode_with_options(value, SerializerOptions::default())
}

/// Serialize a value to a YAML string with the given options.
pub fn encode_with_options(value: &Value, options: SerializerOptions) -> Result<String, Error> {
    let mut out = String::new();
    encode_to_fmt_writer(&mut out, value, options)?;
    Ok(out)
}

/// Serialize a value into any `fmt::Write` target.
///
/// On failure the target may hold a partial document.
pub fn encode_to_fmt_writer<W: Write>(
    out: &mut W,
    value: &Value,
    options: SerializerOptions,
) -> Result<(), Error> {
    options.consistent()?;
    let mut walker = Walker {
        em: Emitter::new(out, options),
        max_depth: options.max_depth,
        scratch: String::new(),
    };
    walker.document(value).inspect_err(|err| {
        tracing::debug!(kind = ?err.kind(), %err, "YAML encode failed");
    })
}

struct Walker<'w, W: Write> {
    em: Emitter<'w, W>,
    max_depth: usize,
    /// Reused buffer for number rendering.
    scratch: String,
}

impl<'w, W: Write> Walker<'w, W> {
    fn document(&mut self, value: &Value) -> Result<(), Error> {
        self.em.emit(EmitEvent::StreamStart)?;
        self.em.emit(EmitEvent::DocumentStart)?;
        self.node(value, 0)?;
        self.em.emit(EmitEvent::DocumentEnd)?;
        self.em.emit(EmitEvent::StreamEnd)?;
        self.em.finish()
    }

    fn node(&mut self, value: &Value, depth: usize) -> Result<(), Error> {
        match value {
            Value::Null => self.em.emit(EmitEvent::Scalar("null", EmitStyle::Any)),
            Value::Bool(b) => self.em.emit(EmitEvent::Scalar(
                if *b { "true" } else { "false" },
                EmitStyle::Any,
            )),
            Value::Integer(i) => {
                self.scratch.clear();
                write!(self.scratch, "{i}")?;
                self.em.emit(EmitEvent::Scalar(&self.scratch, EmitStyle::Any))
            }
            Value::Double(f) => {
                self.scratch.clear();
                write_float_string(&mut self.scratch, *f)?;
                self.em.emit(EmitEvent::Scalar(&self.scratch, EmitStyle::Any))
            }
            Value::String(s) => {
                let style = if needs_forced_quotes(s) {
                    EmitStyle::DoubleQuoted
                } else {
                    EmitStyle::Any
                };
                self.em.emit(EmitEvent::Scalar(s, style))
            }
            Value::Array(items) => {
                let depth = self.enter(depth)?;
                self.em.emit(EmitEvent::SequenceStart)?;
                for item in items {
                    self.node(item, depth)?;
                }
                self.em.emit(EmitEvent::SequenceEnd)
            }
            Value::Object(map) => {
                let depth = self.enter(depth)?;
                self.em.emit(EmitEvent::MappingStart)?;
                for (k, v) in map {
                    // Keys are read back raw, so no resolver check applies.
                    self.em.emit(EmitEvent::Scalar(k, EmitStyle::Any))?;
                    self.node(v, depth)?;
                }
                self.em.emit(EmitEvent::MappingEnd)
            }
        }
    }

    fn enter(&self, depth: usize) -> Result<usize, Error> {
        let depth = depth + 1;
        if depth > self.max_depth {
            return Err(Error::budget(BudgetBreach::Depth { depth }));
        }
        Ok(depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::value::Map;

    #[test]
    fn leaves() {
        assert_eq!(encode(&Value::Null).unwrap(), "null\n");
        assert_eq!(encode(&Value::Bool(false)).unwrap(), "false\n");
        assert_eq!(encode(&Value::Integer(-42)).unwrap(), "-42\n");
        assert_eq!(encode(&Value::Double(3.0)).unwrap(), "3.0\n");
        assert_eq!(encode(&Value::Double(f64::NEG_INFINITY)).unwrap(), "-.inf\n");
        assert_eq!(encode(&Value::from("plain text")).unwrap(), "plain text\n");
        assert_eq!(encode(&Value::from("")).unwrap(), "\"\"\n");
        assert_eq!(encode(&Value::from("0x1F")).unwrap(), "\"0x1F\"\n");
    }

    #[test]
    fn keys_are_not_forced_into_quotes() {
        let mut m = Map::new();
        m.insert("true".into(), Value::from("yes"));
        m.insert("12".into(), Value::Integer(12));
        assert_eq!(
            encode(&Value::Object(m)).unwrap(),
            "true: \"yes\"\n12: 12\n"
        );
    }

    #[test]
    fn zero_indent_is_invalid_argument() {
        let options = SerializerOptions {
            indent_step: 0,
            ..SerializerOptions::default()
        };
        let err = encode_with_options(&Value::Null, options).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn depth_limit_is_a_resource_error() {
        let mut v = Value::Null;
        for _ in 0..10 {
            v = Value::Array(vec![v]);
        }
        let options = SerializerOptions {
            max_depth: 5,
            ..SerializerOptions::default()
        };
        let err = encode_with_options(&v, options).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Resource);
        assert!(encode_with_options(&v, SerializerOptions::default()).is_ok());
    }
}
