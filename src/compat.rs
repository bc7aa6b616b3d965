//! Host-facing layer with "value or nothing" results and a last-error slot.
//!
//! Script hosts that expect `parse`/`stringify`/`error` functions can wrap a
//! [`YamlModule`]. Failures come back as `None`. Only precondition and resource
//! failures leave a reason behind for [`YamlModule::error`]; a malformed document
//! or a rejected emission returns `None` and leaves the slot untouched.
//!
//! ```rust
//! use saphyr_value::Value;
//! use saphyr_value::compat::YamlModule;
//!
//! let mut yaml = YamlModule::default();
//! assert_eq!(yaml.parse(&Value::from("a: 1")).unwrap()["a"], Value::Integer(1));
//!
//! assert!(yaml.parse(&Value::Integer(5)).is_none());
//! assert_eq!(yaml.error().as_deref(), Some("Invalid argument"));
//! assert!(yaml.error().is_none());
//!
//! assert!(yaml.parse(&Value::from("a: {b: 1")).is_none());
//! assert!(yaml.error().is_none());
//! ```

use crate::de::decode_with_options;
use crate::error::{Error, ErrorKind};
use crate::options::Options;
use crate::ser::encode_with_options;
use crate::serializer_options::SerializerOptions;
use crate::value::Value;

/// A pending low-level failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    InvalidArgument,
    OutOfMemory,
}

impl ErrorCode {
    pub fn message(self) -> &'static str {
        match self {
            ErrorCode::InvalidArgument => "Invalid argument",
            ErrorCode::OutOfMemory => "Out of memory",
        }
    }
}

/// Codec entry points plus the single-slot error memory of one host.
#[derive(Clone, Debug, Default)]
pub struct YamlModule {
    pub options: Options,
    pub serializer_options: SerializerOptions,
    last_error: Option<ErrorCode>,
}

impl YamlModule {
    pub fn new(options: Options, serializer_options: SerializerOptions) -> Self {
        Self {
            options,
            serializer_options,
            last_error: None,
        }
    }

    /// Decode `arg`, which must be a string.
    pub fn parse(&mut self, arg: &Value) -> Option<Value> {
        let Value::String(text) = arg else {
            self.last_error = Some(ErrorCode::InvalidArgument);
            return None;
        };
        decode_with_options(text, self.options.clone())
            .map_err(|err| self.record(&err))
            .ok()
    }

    /// Encode any value.
    pub fn stringify(&mut self, arg: &Value) -> Option<String> {
        encode_with_options(arg, self.serializer_options)
            .map_err(|err| self.record(&err))
            .ok()
    }

    /// Take the pending failure description, if any.
    pub fn error(&mut self) -> Option<String> {
        self.last_error.take().map(|code| code.message().to_owned())
    }

    /// Structural failures leave the slot as it was.
    fn record(&mut self, err: &Error) {
        match err.kind() {
            ErrorKind::InvalidArgument => self.last_error = Some(ErrorCode::InvalidArgument),
            ErrorKind::Resource => self.last_error = Some(ErrorCode::OutOfMemory),
            ErrorKind::Structural => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budget::Budget;

    #[test]
    fn budget_breach_reports_out_of_memory() {
        let mut yaml = YamlModule::new(
            Options {
                budget: Some(Budget {
                    max_depth: 2,
                    ..Budget::default()
                }),
            },
            SerializerOptions::default(),
        );
        assert!(yaml.parse(&Value::from("[[[1]]]")).is_none());
        assert_eq!(yaml.error().as_deref(), Some("Out of memory"));
    }

    #[test]
    fn deep_flow_nesting_reports_out_of_memory() {
        let mut yaml = YamlModule::default();
        let text = format!("{}{}", "[".repeat(300), "]".repeat(300));
        assert!(yaml.parse(&Value::from(text)).is_none());
        assert_eq!(yaml.error().as_deref(), Some("Out of memory"));
    }

    #[test]
    fn structural_failure_keeps_earlier_error() {
        let mut yaml = YamlModule::default();
        assert!(yaml.parse(&Value::Null).is_none());
        assert!(yaml.parse(&Value::from("- [")).is_none());
        assert_eq!(yaml.error().as_deref(), Some("Invalid argument"));
    }

    #[test]
    fn bad_serializer_options_report_invalid_argument() {
        let mut yaml = YamlModule::new(
            Options::default(),
            SerializerOptions {
                indent_step: 0,
                ..SerializerOptions::default()
            },
        );
        assert!(yaml.stringify(&Value::Null).is_none());
        assert_eq!(yaml.error().as_deref(), Some("Invalid argument"));
    }

    #[test]
    fn stringify_round_trips() {
        let mut yaml = YamlModule::default();
        let v: Value = [("k", Value::from("on"))].into_iter().collect();
        let text = yaml.stringify(&v).unwrap();
        assert_eq!(yaml.parse(&Value::from(text)), Some(v));
        assert!(yaml.error().is_none());
    }
}
