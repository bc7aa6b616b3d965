//! YAML ⇄ dynamic value codec over saphyr-parser events.
//!
//! Decoding reads the first document of a YAML stream into a [`Value`]:
//! - Plain scalars are typed with YAML 1.1 style inference: `~`/`null`, `yes`/`on`/`true`,
//!   `.inf`/`.nan`, `0o17`, `0x1F`, `017` and floats. Quoted scalars stay strings.
//! - Core tags `!!null`, `!!bool`, `!!int`, `!!float` and `!!str` override inference.
//! - Mapping keys are raw strings. A repeated key overwrites the value in place.
//! - Aliases are not resolved and decode to `Value::Null`.
//!
//! Encoding writes block-style YAML and double-quotes any string that would
//! otherwise be read back as another type.
//!
//! ```rust
//! use saphyr_value::{Value, decode, encode};
//!
//! let v = decode("enabled: on\nmode: 'on'\nretries: 0o17\n").unwrap();
//! assert_eq!(v["enabled"], Value::Bool(true));
//! assert_eq!(v["mode"], Value::from("on"));
//! assert_eq!(v["retries"], Value::Integer(15));
//!
//! let text = encode(&v).unwrap();
//! assert_eq!(text, "enabled: true\nmode: \"on\"\nretries: 15\n");
//! assert_eq!(decode(&text).unwrap(), v);
//! ```

pub use crate::budget::{Budget, BudgetBreach, BudgetReport, check_yaml_budget};
pub use crate::de::{decode, decode_with_options};
pub use crate::error::{Error, ErrorKind, Location};
pub use crate::options::Options;
pub use crate::resolver::resolve_scalar;
pub use crate::ser::{encode, encode_to_fmt_writer, encode_with_options};
pub use crate::serializer_options::SerializerOptions;
pub use crate::value::{Map, Value, ValueIndex};

pub use saphyr_parser::ScalarStyle;

pub mod budget;
pub mod compat;
mod de;
pub mod emitter;
mod error;
mod float_format;
mod live_events;
mod macros;
mod options;
mod parse_scalars;
mod resolver;
mod ser;
mod ser_quoting;
mod serializer_options;
mod tags;
mod value;
mod value_serde;
