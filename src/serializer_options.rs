//! Serializer options for YAML emission.
//!
//! ```rust
//! use saphyr_value::Value;
//!
//! let value: Value = [("items", Value::from(vec![Value::from(1)]))].into_iter().collect();
//! let opts = saphyr_value::serializer_options! {
//!     indent_step: 4,
//! };
//! let yaml = saphyr_value::encode_with_options(&value, opts).unwrap();
//! assert_eq!(yaml, "items:\n    - 1\n");
//! ```

use crate::error::Error;

/// Serializer options for YAML emission.
#[derive(Clone, Copy, Debug)]
pub struct SerializerOptions {
    /// If true, empty maps are emitted as braces {} and empty lists as [] (this is the default).
    /// Such form is equally valid YAML and allows to tell empty from null.
    /// When false, an empty collection leaves its node empty, which reads back as null.
    pub empty_as_braces: bool,
    /// Number of spaces to indent per nesting level (2 by default).
    /// 0 is invalid and is rejected as an invalid argument.
    pub indent_step: usize,
    /// Maximum nesting depth of the value being encoded (2,000 by default).
    /// Deeper values are rejected as a resource failure.
    pub max_depth: usize,
}

pub(crate) const MAX_ENCODE_DEPTH: usize = 2_000;

impl SerializerOptions {
    pub(crate) fn consistent(&self) -> Result<(), Error> {
        if self.indent_step == 0 {
            return Err(Error::invalid_argument("indent step must be positive"));
        }
        Ok(())
    }
}

impl Default for SerializerOptions {
    fn default() -> Self {
        Self {
            indent_step: 2,
            empty_as_braces: true,
            max_depth: MAX_ENCODE_DEPTH,
        }
    }
}
