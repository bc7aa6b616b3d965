//! Streaming YAML budget checker using saphyr-parser.
//!
//! This inspects the parser's event stream and enforces simple budgets to
//! avoid pathological inputs. The decoder feeds every event it pulls through a
//! [`BudgetEnforcer`]; [`check_yaml_budget`] runs the same checks over a whole
//! stream without building a value.

use std::borrow::Cow;

use saphyr_parser::{Event, Parser, ScanError};

/// Budgets for a streaming YAML scan.
///
/// The defaults are permissive for typical configuration files while stopping
/// obvious resource-amplifying inputs.
///
/// ```rust
/// use saphyr_value::{Budget, Options, Value};
///
/// let options = Options {
///     budget: Some(Budget {
///         max_depth: 8,
///         ..Budget::default()
///     }),
/// };
/// let value = saphyr_value::decode_with_options("a: [1, 2]", options).unwrap();
/// assert_eq!(value["a"][1], Value::Integer(2));
/// ```
#[derive(Clone, Debug)]
pub struct Budget {
    /// Maximum total parser events (counting every event).
    ///
    /// Default: 1,000,000
    pub max_events: usize,
    /// Maximum structural nesting depth (sequences + mappings).
    ///
    /// Default: 2,000
    pub max_depth: usize,
    /// Maximum number of *nodes* (SequenceStart/MappingStart/Scalar).
    ///
    /// Default: 250,000
    pub max_nodes: usize,
    /// Maximum total bytes of scalar contents (sum of `Scalar.value.len()`).
    ///
    /// Default: 67,108,864 (64 MiB)
    pub max_total_scalar_bytes: usize,
}

impl Default for Budget {
    fn default() -> Self {
        Self {
            max_events: 1_000_000, // plenty for normal configs
            max_depth: 2_000,                         // protects stack/CPU
            max_nodes: 250_000,                       // sequences + maps + scalars
            max_total_scalar_bytes: 64 * 1024 * 1024, // 64 MiB of scalar text
        }
    }
}

/// What tripped the budget (if anything).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BudgetBreach {
    /// The total number of parser events exceeded [`Budget::max_events`].
    Events {
        /// Total events observed at the moment of the breach.
        events: usize,
    },

    /// The structural nesting depth exceeded [`Budget::max_depth`].
    Depth {
        /// Depth reached when the breach occurred.
        depth: usize,
    },

    /// The number of nodes exceeded [`Budget::max_nodes`].
    Nodes {
        /// Total nodes observed at the moment of the breach.
        nodes: usize,
    },

    /// The cumulative size of scalar contents exceeded [`Budget::max_total_scalar_bytes`].
    ScalarBytes {
        /// Sum of `Scalar.value.len()` over all scalars seen so far.
        total_scalar_bytes: usize,
    },
}

/// Summary of the scan (even if no breach).
#[derive(Clone, Debug, Default)]
pub struct BudgetReport {
    /// `Some(..)` if a limit was exceeded; `None` if all budgets were respected.
    pub breached: Option<BudgetBreach>,
    /// Total number of parser events observed.
    pub events: usize,
    /// Total number of alias events (`*ref`). Aliases decode to null and are not limited.
    pub aliases: usize,
    /// Total number of YAML documents in the stream.
    pub documents: usize,
    /// Total number of nodes encountered (scalars + sequence starts + mapping starts).
    pub nodes: usize,
    /// Maximum structural nesting depth reached at any point in the stream.
    pub max_depth: usize,
    /// Sum of bytes across all scalar values, saturating on overflow.
    pub total_scalar_bytes: usize,
}

/// Stateful helper that enforces a [`Budget`] while consuming a stream of [`Event`]s.
#[derive(Debug)]
pub struct BudgetEnforcer {
    budget: Budget,
    report: BudgetReport,
    depth: usize,
}

impl BudgetEnforcer {
    /// Create a new enforcer for the provided `budget`.
    pub fn new(budget: Budget) -> Self {
        Self {
            budget,
            report: BudgetReport::default(),
            depth: 0,
        }
    }

    /// Observe a parser [`Event`], updating the internal counters.
    ///
    /// Returns `Err(BudgetBreach)` as soon as a limit is exceeded.
    pub fn observe(&mut self, ev: &Event) -> Result<(), BudgetBreach> {
        self.report.events += 1;
        if self.report.events > self.budget.max_events {
            return Err(BudgetBreach::Events {
                events: self.report.events,
            });
        }

        match ev {
            Event::StreamStart | Event::StreamEnd | Event::DocumentEnd | Event::Nothing => {}
            Event::DocumentStart(_explicit) => {
                self.report.documents += 1;
            }
            Event::Alias(_anchor_id) => {
                self.report.aliases += 1;
            }
            Event::Scalar(value, _style, _anchor_id, _tag) => {
                self.bump_nodes()?;
                let len = match value {
                    Cow::Borrowed(s) => s.len(),
                    Cow::Owned(s) => s.len(),
                };
                self.report.total_scalar_bytes = self.report.total_scalar_bytes.saturating_add(len);
                if self.report.total_scalar_bytes > self.budget.max_total_scalar_bytes {
                    return Err(BudgetBreach::ScalarBytes {
                        total_scalar_bytes: self.report.total_scalar_bytes,
                    });
                }
            }
            Event::SequenceStart(_anchor_id, _tag) | Event::MappingStart(_anchor_id, _tag) => {
                self.bump_nodes()?;
                self.depth = self.depth.saturating_add(1);
                if self.depth > self.report.max_depth {
                    self.report.max_depth = self.depth;
                }
                if self.report.max_depth > self.budget.max_depth {
                    return Err(BudgetBreach::Depth {
                        depth: self.report.max_depth,
                    });
                }
            }
            Event::SequenceEnd | Event::MappingEnd => {
                // The parser always balances its events.
                self.depth = self.depth.saturating_sub(1);
            }
        }

        Ok(())
    }

    fn bump_nodes(&mut self) -> Result<(), BudgetBreach> {
        self.report.nodes += 1;
        if self.report.nodes > self.budget.max_nodes {
            return Err(BudgetBreach::Nodes {
                nodes: self.report.nodes,
            });
        }
        Ok(())
    }

    /// Consume the enforcer and return the accumulated [`BudgetReport`].
    pub fn into_report(self) -> BudgetReport {
        self.report
    }
}

/// Flow nesting depth at which saphyr-parser gives up with a scan error.
pub(crate) const PARSER_FLOW_DEPTH_LIMIT: usize = u8::MAX as usize + 1;

/// The scan error the parser raises when flow collections nest past
/// [`PARSER_FLOW_DEPTH_LIMIT`], reported as a depth breach.
pub(crate) fn parser_depth_breach(err: &ScanError) -> Option<BudgetBreach> {
    (err.info() == "recursion limit exceeded").then_some(BudgetBreach::Depth {
        depth: PARSER_FLOW_DEPTH_LIMIT,
    })
}

/// Check an input `&str` against the given `Budget`.
///
/// Unlike decoding, this scans the whole stream, including any documents after
/// the first one.
///
/// Returns:
/// - `Ok(report)`: `report.breached.is_none()` means **within budget**.
/// - `Err(ScanError)`: scanning (lexing/parsing) failed.
///
/// Flow collections nested deeper than the parser supports are reported as a
/// [`BudgetBreach::Depth`] rather than a scan error.
pub fn check_yaml_budget(input: &str, budget: &Budget) -> Result<BudgetReport, ScanError> {
    let mut parser = Parser::new_from_str(input);
    let mut enforcer = BudgetEnforcer::new(budget.clone());

    while let Some(item) = parser.next() {
        let (ev, _span) = match item {
            Ok(pair) => pair,
            Err(err) => {
                let Some(breach) = parser_depth_breach(&err) else {
                    return Err(err);
                };
                let mut report = enforcer.into_report();
                report.breached = Some(breach);
                return Ok(report);
            }
        };
        if let Err(breach) = enforcer.observe(&ev) {
            let mut report = enforcer.into_report();
            report.breached = Some(breach);
            return Ok(report);
        }
    }

    Ok(enforcer.into_report())
}
