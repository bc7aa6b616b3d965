//! Event sink: writes block-style YAML text from a sequence of emit events.
//!
//! The emitter checks that events arrive in a well-formed order and rejects
//! anything else with a structural [`Error`]. Output is block style throughout;
//! empty collections are written as `[]`/`{}` and nested mappings inside
//! sequences start on the dash line (`- key: value`).
//!
//! ```rust
//! use saphyr_value::emitter::{EmitEvent, EmitStyle, Emitter};
//!
//! let mut out = String::new();
//! let mut em = Emitter::new(&mut out, Default::default());
//! for ev in [
//!     EmitEvent::StreamStart,
//!     EmitEvent::DocumentStart,
//!     EmitEvent::MappingStart,
//!     EmitEvent::Scalar("name", EmitStyle::Any),
//!     EmitEvent::Scalar("on", EmitStyle::DoubleQuoted),
//!     EmitEvent::MappingEnd,
//!     EmitEvent::DocumentEnd,
//!     EmitEvent::StreamEnd,
//! ] {
//!     em.emit(ev).unwrap();
//! }
//! em.finish().unwrap();
//! assert_eq!(out, "name: \"on\"\n");
//! ```

use std::fmt::Write;

use crate::error::Error;
use crate::ser_quoting::is_plain_safe;
use crate::serializer_options::SerializerOptions;

/// Longest rendered key written as an implicit `key: value` pair.
const MAX_IMPLICIT_KEY_LEN: usize = 1024;

/// Requested presentation of a scalar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmitStyle {
    /// Plain when the text is structurally safe as a plain scalar, double-quoted otherwise.
    Any,
    /// Always double-quoted.
    DoubleQuoted,
}

/// One call into the sink.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmitEvent<'a> {
    StreamStart,
    StreamEnd,
    DocumentStart,
    DocumentEnd,
    Scalar(&'a str, EmitStyle),
    SequenceStart,
    SequenceEnd,
    MappingStart,
    MappingEnd,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stage {
    Init,
    Stream,
    Document { root_done: bool },
    Finished,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Kind {
    Seq,
    /// `awaiting_value` is set between a key and its value.
    Map { awaiting_value: bool },
}

/// How the first entry of a collection is placed relative to the text before it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Lead {
    /// Root collection, already at the start of a line.
    LineStart,
    /// After a dash: the first entry continues the dash line.
    Inline,
    /// After `key:`: entries start on the next line.
    Newline,
}

#[derive(Clone, Copy, Debug)]
struct Frame {
    kind: Kind,
    /// Column at which entries (dashes or keys) are written.
    col: usize,
    lead: Lead,
    len: usize,
}

/// Where the next node goes, derived from the innermost open container.
#[derive(Clone, Copy, Debug)]
enum Slot {
    Root,
    /// After a `-` at this column, space still pending.
    SeqItem(usize),
    /// After `key:` (or an explicit `:`) at this column, space still pending.
    MapValue(usize),
    MapKey,
}

/// Block-style YAML writer over any `fmt::Write`.
pub struct Emitter<'w, W: Write> {
    out: &'w mut W,
    indent_step: usize,
    empty_as_braces: bool,
    stage: Stage,
    stack: Vec<Frame>,
}

impl<'w, W: Write> Emitter<'w, W> {
    pub fn new(out: &'w mut W, options: SerializerOptions) -> Self {
        Self {
            out,
            indent_step: options.indent_step.max(1),
            empty_as_braces: options.empty_as_braces,
            stage: Stage::Init,
            stack: Vec::new(),
        }
    }

    /// Feed one event. Out-of-order events fail without writing anything.
    pub fn emit(&mut self, ev: EmitEvent<'_>) -> Result<(), Error> {
        match (self.stage, ev) {
            (Stage::Init, EmitEvent::StreamStart) => {
                self.stage = Stage::Stream;
                Ok(())
            }
            (Stage::Init, _) => Err(Error::emit("expected stream start")),
            (Stage::Stream, EmitEvent::DocumentStart) => {
                self.stage = Stage::Document { root_done: false };
                Ok(())
            }
            (Stage::Stream, EmitEvent::StreamEnd) => {
                self.stage = Stage::Finished;
                Ok(())
            }
            (Stage::Stream, _) => Err(Error::emit("expected document start or stream end")),
            (Stage::Document { root_done: true }, EmitEvent::DocumentEnd) => {
                self.stage = Stage::Stream;
                Ok(())
            }
            (Stage::Document { root_done: true }, _) => {
                Err(Error::emit("expected document end after the root node"))
            }
            (Stage::Document { root_done: false }, EmitEvent::DocumentEnd) => {
                if self.stack.is_empty() {
                    Err(Error::emit("document has no content"))
                } else {
                    Err(Error::emit("document ended with open collections"))
                }
            }
            (Stage::Document { root_done: false }, _) => self.node_event(ev),
            (Stage::Finished, _) => Err(Error::emit("event after stream end")),
        }
    }

    /// Check that the stream was closed.
    pub fn finish(&self) -> Result<(), Error> {
        match self.stage {
            Stage::Finished => Ok(()),
            _ => Err(Error::emit("stream was not closed")),
        }
    }

    fn slot(&self) -> Slot {
        match self.stack.last() {
            None => Slot::Root,
            Some(Frame { kind: Kind::Seq, col, .. }) => Slot::SeqItem(*col),
            Some(Frame {
                kind: Kind::Map { awaiting_value: true },
                col,
                ..
            }) => Slot::MapValue(*col),
            Some(Frame {
                kind: Kind::Map { awaiting_value: false },
                ..
            }) => Slot::MapKey,
        }
    }

    fn node_event(&mut self, ev: EmitEvent<'_>) -> Result<(), Error> {
        let slot = self.slot();
        match ev {
            EmitEvent::Scalar(text, style) => {
                if let Slot::MapKey = slot {
                    return self.write_key(text, style);
                }
                self.begin_entry()?;
                match slot {
                    Slot::Root => {}
                    _ => self.out.write_char(' ')?,
                }
                self.write_scalar(text, style)?;
                self.out.write_char('\n')?;
                self.end_node();
                Ok(())
            }
            EmitEvent::SequenceStart | EmitEvent::MappingStart => {
                let (col, lead) = match slot {
                    Slot::MapKey => return Err(Error::emit("mapping keys must be scalars")),
                    Slot::Root => (0, Lead::LineStart),
                    Slot::SeqItem(dash_col) => (dash_col + 2, Lead::Inline),
                    Slot::MapValue(key_col) => (key_col + self.indent_step, Lead::Newline),
                };
                self.begin_entry()?;
                let kind = if ev == EmitEvent::SequenceStart {
                    Kind::Seq
                } else {
                    Kind::Map {
                        awaiting_value: false,
                    }
                };
                self.stack.push(Frame {
                    kind,
                    col,
                    lead,
                    len: 0,
                });
                Ok(())
            }
            EmitEvent::SequenceEnd => match self.stack.last() {
                Some(Frame { kind: Kind::Seq, .. }) => self.close("[]"),
                _ => Err(Error::emit("sequence end does not match an open sequence")),
            },
            EmitEvent::MappingEnd => match self.stack.last() {
                Some(Frame {
                    kind: Kind::Map { awaiting_value: false },
                    ..
                }) => self.close("{}"),
                Some(Frame {
                    kind: Kind::Map { awaiting_value: true },
                    ..
                }) => Err(Error::emit("mapping closed after a key without a value")),
                _ => Err(Error::emit("mapping end does not match an open mapping")),
            },
            EmitEvent::StreamStart
            | EmitEvent::StreamEnd
            | EmitEvent::DocumentStart
            | EmitEvent::DocumentEnd => Err(Error::emit("expected a node")),
        }
    }

    /// Write the prefix of the next entry of the innermost sequence (its dash)
    /// when a node is placed into it. Mapping values need no prefix here.
    fn begin_entry(&mut self) -> Result<(), Error> {
        let Some(frame) = self.stack.last().copied() else {
            return Ok(());
        };
        if frame.kind == Kind::Seq {
            self.entry_prefix(frame)?;
            self.out.write_char('-')?;
            if let Some(top) = self.stack.last_mut() {
                top.len += 1;
            }
        }
        Ok(())
    }

    /// Move to where the next entry of `frame` starts.
    fn entry_prefix(&mut self, frame: Frame) -> Result<(), Error> {
        if frame.len == 0 {
            match frame.lead {
                Lead::Inline => return Ok(self.out.write_char(' ')?),
                Lead::Newline => self.out.write_char('\n')?,
                Lead::LineStart => {}
            }
        }
        self.write_indent(frame.col)
    }

    fn write_key(&mut self, text: &str, style: EmitStyle) -> Result<(), Error> {
        let Some(frame) = self.stack.last().copied() else {
            return Err(Error::emit("key outside of a mapping"));
        };
        let mut rendered = String::new();
        render_scalar(&mut rendered, text, style)?;

        self.entry_prefix(frame)?;
        if rendered.chars().count() > MAX_IMPLICIT_KEY_LEN {
            self.out.write_str("? ")?;
            self.out.write_str(&rendered)?;
            self.out.write_char('\n')?;
            self.write_indent(frame.col)?;
        } else {
            self.out.write_str(&rendered)?;
        }
        self.out.write_char(':')?;

        if let Some(top) = self.stack.last_mut() {
            top.len += 1;
            top.kind = Kind::Map {
                awaiting_value: true,
            };
        }
        Ok(())
    }

    fn write_scalar(&mut self, text: &str, style: EmitStyle) -> Result<(), Error> {
        render_scalar(self.out, text, style)
    }

    fn close(&mut self, braces: &str) -> Result<(), Error> {
        let Some(frame) = self.stack.pop() else {
            return Err(Error::emit("no open collection"));
        };
        if frame.len == 0 {
            if frame.lead != Lead::LineStart {
                self.out.write_char(' ')?;
            }
            if self.empty_as_braces {
                self.out.write_str(braces)?;
            }
            self.out.write_char('\n')?;
        }
        self.end_node();
        Ok(())
    }

    /// A node was completed in the current slot.
    fn end_node(&mut self) {
        match self.stack.last_mut() {
            None => {
                self.stage = Stage::Document { root_done: true };
            }
            Some(Frame {
                kind: Kind::Map { awaiting_value },
                ..
            }) => *awaiting_value = false,
            Some(Frame { kind: Kind::Seq, .. }) => {}
        }
    }

    fn write_indent(&mut self, col: usize) -> Result<(), Error> {
        for _ in 0..col {
            self.out.write_char(' ')?;
        }
        Ok(())
    }
}

fn render_scalar<W: Write + ?Sized>(out: &mut W, text: &str, style: EmitStyle) -> Result<(), Error> {
    match style {
        EmitStyle::Any if is_plain_safe(text) => Ok(out.write_str(text)?),
        EmitStyle::Any | EmitStyle::DoubleQuoted => write_quoted(out, text),
    }
}

/// Double-quoted scalar with YAML escapes.
fn write_quoted<W: Write + ?Sized>(out: &mut W, s: &str) -> Result<(), Error> {
    out.write_char('"')?;
    for ch in s.chars() {
        match ch {
            '\\' => out.write_str("\\\\")?,
            '"' => out.write_str("\\\"")?,
            // YAML named escapes for common control characters
            '\0' => out.write_str("\\0")?,
            '\u{7}' => out.write_str("\\a")?,
            '\u{8}' => out.write_str("\\b")?,
            '\t' => out.write_str("\\t")?,
            '\n' => out.write_str("\\n")?,
            '\u{b}' => out.write_str("\\v")?,
            '\u{c}' => out.write_str("\\f")?,
            '\r' => out.write_str("\\r")?,
            '\u{1b}' => out.write_str("\\e")?,
            '\u{FEFF}' => out.write_str("\\uFEFF")?,
            // YAML named escapes for Unicode separators
            '\u{0085}' => out.write_str("\\N")?,
            '\u{2028}' => out.write_str("\\L")?,
            '\u{2029}' => out.write_str("\\P")?,
            '\u{FFFE}' | '\u{FFFF}' => write!(out, "\\u{:04X}", ch as u32)?,
            c if (c as u32) <= 0xFF && c.is_control() => write!(out, "\\x{:02X}", c as u32)?,
            c => out.write_char(c)?,
        }
    }
    out.write_char('"')?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(events: &[EmitEvent<'_>]) -> Result<String, Error> {
        run_with(events, SerializerOptions::default())
    }

    fn run_with(events: &[EmitEvent<'_>], options: SerializerOptions) -> Result<String, Error> {
        let mut out = String::new();
        let mut em = Emitter::new(&mut out, options);
        for ev in events {
            em.emit(*ev)?;
        }
        em.finish()?;
        Ok(out)
    }

    use EmitEvent::*;

    const ANY: EmitStyle = EmitStyle::Any;

    fn doc<'a>(body: &[EmitEvent<'a>]) -> Vec<EmitEvent<'a>> {
        let mut v = vec![StreamStart, DocumentStart];
        v.extend_from_slice(body);
        v.extend_from_slice(&[DocumentEnd, StreamEnd]);
        v
    }

    #[test]
    fn top_level_scalar() {
        assert_eq!(run(&doc(&[Scalar("hi", ANY)])).unwrap(), "hi\n");
        assert_eq!(
            run(&doc(&[Scalar("a\tb", ANY)])).unwrap(),
            "\"a\\tb\"\n"
        );
    }

    #[test]
    fn nested_layout() {
        let out = run(&doc(&[
            MappingStart,
            Scalar("list", ANY),
            SequenceStart,
            Scalar("1", ANY),
            MappingStart,
            Scalar("k", ANY),
            Scalar("v", ANY),
            Scalar("k2", ANY),
            SequenceStart,
            SequenceEnd,
            MappingEnd,
            SequenceStart,
            Scalar("x", ANY),
            Scalar("y", ANY),
            SequenceEnd,
            SequenceEnd,
            Scalar("empty", ANY),
            MappingStart,
            MappingEnd,
            MappingEnd,
        ]))
        .unwrap();
        assert_eq!(
            out,
            "list:\n  - 1\n  - k: v\n    k2: []\n  - - x\n    - y\nempty: {}\n"
        );
    }

    #[test]
    fn empty_root_collections() {
        assert_eq!(run(&doc(&[SequenceStart, SequenceEnd])).unwrap(), "[]\n");
        assert_eq!(run(&doc(&[MappingStart, MappingEnd])).unwrap(), "{}\n");
    }

    #[test]
    fn indent_step_applies_under_keys() {
        let options = SerializerOptions {
            indent_step: 4,
            ..SerializerOptions::default()
        };
        let out = run_with(
            &doc(&[
                MappingStart,
                Scalar("a", ANY),
                MappingStart,
                Scalar("b", ANY),
                Scalar("c", ANY),
                MappingEnd,
                MappingEnd,
            ]),
            options,
        )
        .unwrap();
        assert_eq!(out, "a:\n    b: c\n");
    }

    #[test]
    fn empty_collections_without_braces() {
        let options = SerializerOptions {
            empty_as_braces: false,
            ..SerializerOptions::default()
        };
        let out = run_with(
            &doc(&[MappingStart, Scalar("a", ANY), SequenceStart, SequenceEnd, MappingEnd]),
            options,
        )
        .unwrap();
        assert_eq!(out, "a: \n");
    }

    #[test]
    fn long_keys_use_explicit_form() {
        let key = "k".repeat(MAX_IMPLICIT_KEY_LEN + 1);
        let out = run(&doc(&[MappingStart, Scalar(&key, ANY), Scalar("v", ANY), MappingEnd]))
            .unwrap();
        assert_eq!(out, format!("? {key}\n: v\n"));
    }

    #[test]
    fn rejects_out_of_order_events() {
        let cases: Vec<Vec<EmitEvent<'_>>> = vec![
            vec![Scalar("x", ANY)],
            vec![StreamStart, Scalar("x", ANY)],
            vec![StreamStart, DocumentStart, SequenceStart, MappingEnd],
            vec![StreamStart, DocumentStart, MappingStart, Scalar("k", ANY), MappingEnd],
            vec![StreamStart, DocumentStart, MappingStart, SequenceStart],
            vec![StreamStart, DocumentStart, SequenceStart, DocumentEnd],
            vec![StreamStart, DocumentStart, DocumentEnd],
            vec![StreamStart, DocumentStart, Scalar("a", ANY), Scalar("b", ANY)],
            vec![StreamStart, StreamEnd, StreamStart],
        ];
        for events in cases {
            let mut out = String::new();
            let mut em = Emitter::new(&mut out, SerializerOptions::default());
            let failed = events.iter().any(|ev| em.emit(*ev).is_err());
            assert!(failed, "{events:?}");
        }
    }

    #[test]
    fn unfinished_stream_is_rejected() {
        let mut out = String::new();
        let mut em = Emitter::new(&mut out, SerializerOptions::default());
        em.emit(StreamStart).unwrap();
        em.emit(DocumentStart).unwrap();
        em.emit(SequenceStart).unwrap();
        assert!(em.finish().is_err());
    }

    #[test]
    fn escapes() {
        let mut s = String::new();
        write_quoted(&mut s, "q\"\\\0\u{1}\u{85}\u{2028}\u{FEFF}").unwrap();
        assert_eq!(s, "\"q\\\"\\\\\\0\\x01\\N\\L\\uFEFF\"");
    }
}
