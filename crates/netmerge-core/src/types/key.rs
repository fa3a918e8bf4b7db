//! Connection keys used to decide which groups merge.

use std::fmt;

use super::GroupRecord;

/// Text rendered for a group whose sinks are not known.
pub const UNKNOWN_SINKS: &str = "unknown";

/// The sink half of a [`ConnectionKey`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SinkPattern {
    /// The report listed `unknown` for the sinks.
    Unknown,
    /// Sink FPGA identifiers, sorted lexicographically.
    Fpgas(Vec<String>),
}

impl SinkPattern {
    /// Builds a pattern from sinks in any order.
    ///
    /// An empty list becomes [`SinkPattern::Unknown`]. Duplicates are kept.
    pub fn from_sinks(sinks: &[String]) -> Self {
        if sinks.is_empty() {
            return SinkPattern::Unknown;
        }
        let mut sorted = sinks.to_vec();
        sorted.sort_unstable();
        SinkPattern::Fpgas(sorted)
    }

    /// Sorted sink identifiers; empty for [`SinkPattern::Unknown`].
    pub fn fpgas(&self) -> &[String] {
        match self {
            SinkPattern::Unknown => &[],
            SinkPattern::Fpgas(fpgas) => fpgas,
        }
    }
}

impl fmt::Display for SinkPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkPattern::Unknown => f.write_str(UNKNOWN_SINKS),
            SinkPattern::Fpgas(fpgas) => f.write_str(&fpgas.join(",")),
        }
    }
}

/// Source FPGA plus sink set, ignoring per-sink counts.
///
/// Two records with equal keys share a connection pattern and are merged.
///
/// # Examples
///
/// ```
/// use netmerge_core::{ConnectionKey, GroupRecord};
///
/// let a = GroupRecord::new(1, "F0", ["F2", "F1"], ["n1"]);
/// let b = GroupRecord::new(2, "F0", ["F1", "F2"], ["n2"]);
/// assert_eq!(ConnectionKey::of(&a), ConnectionKey::of(&b));
/// assert_eq!(ConnectionKey::of(&a).to_string(), "F0 -> F1,F2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConnectionKey {
    source: String,
    sinks: SinkPattern,
}

impl ConnectionKey {
    /// Creates a key from a source and a sink pattern.
    pub fn new(source: impl Into<String>, sinks: SinkPattern) -> Self {
        Self {
            source: source.into(),
            sinks,
        }
    }

    /// Derives the key of a record.
    pub fn of(record: &GroupRecord) -> Self {
        Self::new(record.source(), SinkPattern::from_sinks(record.sinks()))
    }

    /// Source FPGA identifier.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Sink half of the key.
    pub fn sinks(&self) -> &SinkPattern {
        &self.sinks
    }
}

impl fmt::Display for ConnectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.sinks)
    }
}
