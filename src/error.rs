//! Defines error and its location
use std::fmt;

use saphyr_parser::{ScanError, Span};

use crate::budget::{BudgetBreach, parser_depth_breach};

/// Row/column location within the source YAML document (1-indexed).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Location {
    /// 1-indexed row number in the input stream.
    pub(crate) row: u32,
    /// 1-indexed column number in the input stream.
    pub(crate) column: u32,
}

impl Location {
    /// Sentinel value meaning "location unknown".
    pub const UNKNOWN: Self = Self { row: 0, column: 0 };

    pub(crate) const fn new(row: usize, column: usize) -> Self {
        Self {
            row: row as u32,
            column: column as u32,
        }
    }

    /// 1-indexed line of the location.
    pub fn line(&self) -> u64 {
        self.row as u64
    }

    /// 1-indexed column of the location.
    pub fn column(&self) -> u64 {
        self.column as u64
    }

    fn is_known(&self) -> bool {
        self.row != 0 && self.column != 0
    }
}

/// Convert a `saphyr_parser::Span` to a 1-indexed `Location`.
pub(crate) fn location_from_span(span: &Span) -> Location {
    let start = &span.start;
    Location::new(start.line(), start.col() + 1)
}

/// Which failure channel an [`Error`] belongs to.
///
/// Only `InvalidArgument` and `Resource` failures are recorded by
/// [`crate::compat::YamlModule::error`].
/// Structural failures (bad syntax, non-scalar keys, rejected emission) are reported
/// through the `Result` only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller passed an argument the codec cannot work with.
    InvalidArgument,
    /// A resource limit of the decode budget was hit.
    Resource,
    /// The YAML text or the emitted event sequence is malformed.
    Structural,
}

/// Error returned by decoding and encoding.
#[derive(Debug)]
pub enum Error {
    /// Scanner or parser error reported by saphyr-parser.
    Message { msg: String, location: Location },
    /// The event stream ended in the middle of a node.
    Eof { location: Location },
    /// An event of the wrong kind was found, e.g. a collection used as a mapping key.
    Unexpected {
        expected: &'static str,
        location: Location,
    },
    /// The decode budget was exceeded.
    Budget {
        breach: BudgetBreach,
        location: Location,
    },
    /// The emitter rejected an event as out of order.
    Emit { msg: String },
    /// Writing to the output failed.
    Format { error: fmt::Error },
    /// A precondition of the call was violated.
    InvalidArgument { msg: String },
}

impl Error {
    pub(crate) fn msg<S: Into<String>>(s: S) -> Self {
        Error::Message {
            msg: s.into(),
            location: Location::UNKNOWN,
        }
    }

    pub(crate) fn unexpected(what: &'static str) -> Self {
        Error::Unexpected {
            expected: what,
            location: Location::UNKNOWN,
        }
    }

    pub(crate) fn eof() -> Self {
        Error::Eof {
            location: Location::UNKNOWN,
        }
    }

    pub(crate) fn budget(breach: BudgetBreach) -> Self {
        Error::Budget {
            breach,
            location: Location::UNKNOWN,
        }
    }

    pub(crate) fn emit<S: Into<String>>(s: S) -> Self {
        Error::Emit { msg: s.into() }
    }

    pub(crate) fn invalid_argument<S: Into<String>>(s: S) -> Self {
        Error::InvalidArgument { msg: s.into() }
    }

    pub(crate) fn with_location(mut self, set_location: Location) -> Self {
        match &mut self {
            Error::Message { location, .. }
            | Error::Eof { location }
            | Error::Unexpected { location, .. }
            | Error::Budget { location, .. } => {
                *location = set_location;
            }
            Error::Emit { .. } | Error::Format { .. } | Error::InvalidArgument { .. } => {}
        }
        self
    }

    /// Scan errors are structural, except the parser's own nesting limit,
    /// which is a depth breach.
    pub(crate) fn from_scan_error(err: ScanError) -> Self {
        let mark = err.marker();
        let location = Location::new(mark.line(), mark.col() + 1);
        match parser_depth_breach(&err) {
            Some(breach) => Error::budget(breach).with_location(location),
            None => Error::msg(err.info()).with_location(location),
        }
    }

    /// Source location of the error, if known.
    pub fn location(&self) -> Option<Location> {
        match self {
            Error::Message { location, .. }
            | Error::Eof { location }
            | Error::Unexpected { location, .. }
            | Error::Budget { location, .. } => location.is_known().then_some(*location),
            Error::Emit { .. } | Error::Format { .. } | Error::InvalidArgument { .. } => None,
        }
    }

    /// The failure channel this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Error::Budget { .. } => ErrorKind::Resource,
            Error::Message { .. }
            | Error::Eof { .. }
            | Error::Unexpected { .. }
            | Error::Emit { .. }
            | Error::Format { .. } => ErrorKind::Structural,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Message { msg, location } => fmt_with_location(f, msg, location),
            Error::Eof { location } => fmt_with_location(f, "unexpected end of input", location),
            Error::Unexpected { expected, location } => fmt_with_location(
                f,
                &format!("unexpected event: expected {expected}"),
                location,
            ),
            Error::Budget { breach, location } => {
                fmt_with_location(f, &format!("YAML budget breached: {breach:?}"), location)
            }
            Error::Emit { msg } => write!(f, "emitter error: {msg}"),
            Error::Format { error } => write!(f, "formatting error: {error}"),
            Error::InvalidArgument { msg } => write!(f, "invalid argument: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Format { error } => Some(error),
            _ => None,
        }
    }
}

impl From<fmt::Error> for Error {
    fn from(error: fmt::Error) -> Self {
        Error::Format { error }
    }
}

/// Print a message optionally suffixed with "at line X, column Y".
fn fmt_with_location(f: &mut fmt::Formatter<'_>, msg: &str, location: &Location) -> fmt::Result {
    if location.is_known() {
        write!(
            f,
            "{msg} at line {}, column {}",
            location.row, location.column
        )
    } else {
        write!(f, "{msg}")
    }
}

#[cfg(test)]
mod tests {
    use saphyr_parser::Marker;

    use super::*;

    #[test]
    fn display_appends_known_location() {
        let err = Error::msg("did not find expected key").with_location(Location::new(3, 7));
        assert_eq!(
            err.to_string(),
            "did not find expected key at line 3, column 7"
        );
        assert_eq!(err.location(), Some(Location::new(3, 7)));
    }

    #[test]
    fn display_omits_unknown_location() {
        let err = Error::eof();
        assert_eq!(err.to_string(), "unexpected end of input");
        assert!(err.location().is_none());
    }

    #[test]
    fn kinds_follow_failure_channels() {
        assert_eq!(Error::invalid_argument("x").kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            Error::budget(BudgetBreach::Depth { depth: 3 }).kind(),
            ErrorKind::Resource
        );
        assert_eq!(Error::unexpected("scalar key").kind(), ErrorKind::Structural);
        assert_eq!(Error::emit("bad order").kind(), ErrorKind::Structural);
        assert_eq!(Error::from(fmt::Error).kind(), ErrorKind::Structural);
    }

    #[test]
    fn parser_recursion_limit_is_a_depth_breach() {
        let scan = ScanError::new_str(Marker::new(255, 1, 255), "recursion limit exceeded");
        let err = Error::from_scan_error(scan);
        assert_eq!(err.kind(), ErrorKind::Resource);
        assert!(matches!(
            err,
            Error::Budget {
                breach: BudgetBreach::Depth { .. },
                ..
            }
        ));
        assert_eq!(err.location(), Some(Location::new(1, 256)));

        let scan = ScanError::new_str(Marker::new(3, 1, 3), "did not find expected key");
        assert_eq!(Error::from_scan_error(scan).kind(), ErrorKind::Structural);
    }
}
