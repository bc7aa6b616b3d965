//!
//! Live events: a compact layer over the YAML event stream from `saphyr_parser::Parser`.
//!
//! Responsibilities
//! - Provide owned, simplified events (`Ev`) for the value builder.
//! - Hide stream/document markers; expose only logical data events.
//! - Track source locations for diagnostics.
//! - Enforce the decode budget on every raw event pulled.
//!
//! Anchors are dropped and aliases are passed through as `Ev::Alias` without
//! being replayed. Events are pulled lazily, so nothing past the first
//! document's root node is ever parsed.

use std::borrow::Cow;

use saphyr_parser::{Event, Parser, ScalarStyle, StrInput};

use crate::budget::{Budget, BudgetEnforcer};
use crate::error::{Error, Location, location_from_span};

/// Owned, location-carrying event fed to the value builder.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Ev {
    Scalar {
        value: String,
        tag: Option<String>,
        style: ScalarStyle,
        location: Location,
    },
    SeqStart {
        location: Location,
    },
    SeqEnd {
        location: Location,
    },
    MapStart {
        location: Location,
    },
    MapEnd {
        location: Location,
    },
    Alias {
        location: Location,
    },
}

impl Ev {
    pub(crate) fn location(&self) -> Location {
        match self {
            Ev::Scalar { location, .. }
            | Ev::SeqStart { location }
            | Ev::SeqEnd { location }
            | Ev::MapStart { location }
            | Ev::MapEnd { location }
            | Ev::Alias { location } => *location,
        }
    }
}

/// Source of events for the value builder.
pub(crate) trait Events {
    /// Next data event, `Ok(None)` at the end of the stream.
    fn next(&mut self) -> Result<Option<Ev>, Error>;
    /// Location of the last event yielded, for end-of-input errors.
    fn last_location(&self) -> Location;
}

/// Live event source that wraps `saphyr_parser::Parser`.
pub(crate) struct LiveEvents<'a> {
    /// Underlying streaming parser that produces raw events from the input.
    parser: Parser<'a, StrInput<'a>>,
    /// Budget (raw events), if configured.
    budget: Option<BudgetEnforcer>,
    /// Location of the last yielded event (for better error reporting).
    last_location: Location,
}

impl<'a> LiveEvents<'a> {
    pub(crate) fn new(input: &'a str, budget: Option<Budget>) -> Self {
        Self {
            parser: Parser::new_from_str(input),
            budget: budget.map(BudgetEnforcer::new),
            last_location: Location::UNKNOWN,
        }
    }
}

impl<'a> Events for LiveEvents<'a> {
    fn next(&mut self) -> Result<Option<Ev>, Error> {
        while let Some(item) = self.parser.next() {
            let (raw, span) = item.map_err(Error::from_scan_error)?;
            let location = location_from_span(&span);

            if let Some(ref mut budget) = self.budget {
                if let Err(breach) = budget.observe(&raw) {
                    tracing::trace!(?breach, line = location.line(), "decode budget exceeded");
                    return Err(Error::budget(breach).with_location(location));
                }
            }

            let ev = match raw {
                Event::StreamStart
                | Event::StreamEnd
                | Event::DocumentStart(_)
                | Event::DocumentEnd
                | Event::Nothing => {
                    self.last_location = location;
                    continue;
                }

                Event::Scalar(val, style, _anchor_id, tag) => {
                    let value = match val {
                        Cow::Borrowed(v) => v.to_string(),
                        Cow::Owned(v) => v,
                    };
                    Ev::Scalar {
                        value,
                        tag: tag.map(|t| t.to_string()),
                        style,
                        location,
                    }
                }
                Event::SequenceStart(_anchor_id, _tag) => Ev::SeqStart { location },
                Event::SequenceEnd => Ev::SeqEnd { location },
                Event::MappingStart(_anchor_id, _tag) => Ev::MapStart { location },
                Event::MappingEnd => Ev::MapEnd { location },
                Event::Alias(_anchor_id) => Ev::Alias { location },
            };
            self.last_location = ev.location();
            return Ok(Some(ev));
        }

        Ok(None)
    }

    fn last_location(&self) -> Location {
        self.last_location
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(input: &str) -> Result<Vec<Ev>, Error> {
        let mut src = LiveEvents::new(input, None);
        let mut out = Vec::new();
        while let Some(ev) = src.next()? {
            out.push(ev);
        }
        Ok(out)
    }

    #[test]
    fn markers_are_hidden() {
        let evs = drain("--- a\n...\n").unwrap();
        assert_eq!(evs.len(), 1);
        assert!(matches!(&evs[0], Ev::Scalar { value, .. } if value == "a"));
    }

    #[test]
    fn scalars_carry_style_and_tag() {
        let evs = drain("[!!int '1', \"two\"]").unwrap();
        assert!(matches!(&evs[0], Ev::SeqStart { .. }));
        match &evs.get(1) {
            Some(Ev::Scalar { value, tag, style, .. }) => {
                assert_eq!(value, "1");
                assert_eq!(*style, ScalarStyle::SingleQuoted);
                assert!(tag.as_deref().is_some_and(|t| t.ends_with("int")));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn aliases_are_not_replayed() {
        let evs = drain("a: &x 1\nb: *x\n").unwrap();
        assert!(matches!(evs.last(), Some(Ev::MapEnd { .. })));
        assert!(matches!(&evs[evs.len() - 2], Ev::Alias { .. }));
    }

    #[test]
    fn scan_errors_carry_location() {
        let err = drain("a: {b: 1").unwrap_err();
        assert!(err.location().is_some());
    }
}
