//! Value builder: assembles a [`Value`] tree from the event stream.
//!
//! The builder keeps an explicit stack of open containers instead of recursing,
//! so deeply nested input costs heap, not call stack. Depth is bounded by
//! [`Budget::max_depth`](crate::Budget::max_depth) when a budget is configured.

use crate::error::Error;
use crate::live_events::{Ev, Events, LiveEvents};
use crate::options::Options;
use crate::resolver::resolve_scalar;
use crate::value::{Map, Value};

/// A container under construction.
enum Frame {
    Seq(Vec<Value>),
    /// Mapping plus the key whose value is awaited, if any.
    Map { map: Map, key: Option<String> },
}

/// Outcome of placing a finished node into its parent.
enum Placed {
    Nested,
    Root(Value),
}

/// Decode the first YAML document of `input` into a [`Value`] using the default
/// [`Options`].
///
/// Scalars are typed by the resolver cascade, aliases become `Value::Null`, and a
/// repeated mapping key overwrites the earlier value while keeping its position.
/// An empty stream decodes to `Value::Null`.
///
/// ```rust
/// use saphyr_value::Value;
///
/// let v = saphyr_value::decode("port: 0x1F\nname: 'on'\n").unwrap();
/// assert_eq!(v["port"], Value::Integer(31));
/// assert_eq!(v["name"], Value::from("on"));
/// ```
pub fn decode(input: &str) -> Result<Value, Error> {
    decode_with_options(input, Options::default())
}

/// Decode with explicit [`Options`].
pub fn decode_with_options(input: &str, options: Options) -> Result<Value, Error> {
    let mut src = LiveEvents::new(input, options.budget);
    build_value(&mut src).inspect_err(|err| {
        tracing::debug!(kind = ?err.kind(), %err, "YAML decode failed");
    })
}

/// Consume exactly one node from `src`; an exhausted source yields `Null`.
pub(crate) fn build_value(src: &mut impl Events) -> Result<Value, Error> {
    let mut stack: Vec<Frame> = Vec::new();

    loop {
        let Some(ev) = src.next()? else {
            if stack.is_empty() {
                return Ok(Value::Null);
            }
            return Err(Error::eof().with_location(src.last_location()));
        };

        let node = match ev {
            Ev::Scalar {
                value, tag, style, ..
            } => {
                // Mapping keys keep their raw text.
                if let Some(Frame::Map { key: pending @ None, .. }) = stack.last_mut() {
                    *pending = Some(value);
                    continue;
                }
                resolve_scalar(&value, style, tag.as_deref())
            }
            Ev::Alias { location } => {
                if let Some(Frame::Map { key: None, .. }) = stack.last() {
                    return Err(Error::unexpected("scalar mapping key").with_location(location));
                }
                Value::Null
            }
            Ev::SeqStart { location } | Ev::MapStart { location }
                if matches!(stack.last(), Some(Frame::Map { key: None, .. })) =>
            {
                return Err(Error::unexpected("scalar mapping key").with_location(location));
            }
            Ev::SeqStart { .. } => {
                stack.push(Frame::Seq(Vec::new()));
                continue;
            }
            Ev::MapStart { .. } => {
                stack.push(Frame::Map {
                    map: Map::new(),
                    key: None,
                });
                continue;
            }
            Ev::SeqEnd { location } => match stack.pop() {
                Some(Frame::Seq(items)) => Value::Array(items),
                _ => return Err(Error::unexpected("sequence end").with_location(location)),
            },
            Ev::MapEnd { location } => match stack.pop() {
                Some(Frame::Map { map, key: None }) => Value::Object(map),
                _ => return Err(Error::unexpected("mapping end").with_location(location)),
            },
        };

        if let Placed::Root(value) = place(&mut stack, node) {
            return Ok(value);
        }
    }
}

fn place(stack: &mut [Frame], node: Value) -> Placed {
    match stack.last_mut() {
        None => Placed::Root(node),
        Some(Frame::Seq(items)) => {
            items.push(node);
            Placed::Nested
        }
        Some(Frame::Map { map, key }) => {
            // Callers route key scalars away before reaching here, so a value
            // always has a pending key.
            if let Some(k) = key.take() {
                map.insert(k, node);
            }
            Placed::Nested
        }
    }
}
