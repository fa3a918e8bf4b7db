//! Net group records as read from a group report.

/// One `Group [n]: ...` line of a net group report.
///
/// Sink identifiers have already had their `(count)` suffixes removed.
/// An empty sink list means the report gave `unknown` for the sinks.
///
/// The group number is kept as the digits written in the report, so numbers
/// of any length or script are preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupRecord {
    group_num: String,
    source: String,
    sinks: Vec<String>,
    nets: Vec<String>,
}

impl GroupRecord {
    /// Creates a record from already-parsed parts.
    ///
    /// # Examples
    ///
    /// ```
    /// use netmerge_core::GroupRecord;
    ///
    /// let record = GroupRecord::new(1, "F0", ["F1", "F2"], ["net1", "net7"]);
    /// assert_eq!(record.group_num(), "1");
    /// assert_eq!(record.source(), "F0");
    /// assert_eq!(record.sinks(), ["F1", "F2"]);
    /// ```
    pub fn new<S, I, N>(
        group_num: impl ToString,
        source: impl Into<String>,
        sinks: I,
        nets: N,
    ) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = S>,
        N: IntoIterator<Item = S>,
    {
        Self {
            group_num: group_num.to_string(),
            source: source.into(),
            sinks: sinks.into_iter().map(Into::into).collect(),
            nets: nets.into_iter().map(Into::into).collect(),
        }
    }

    /// The group number as written in the report.
    pub fn group_num(&self) -> &str {
        &self.group_num
    }

    /// Source FPGA identifier.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Sink FPGA identifiers in report order, counts stripped.
    pub fn sinks(&self) -> &[String] {
        &self.sinks
    }

    /// Whether the sinks were reported as `unknown`.
    pub fn has_unknown_sinks(&self) -> bool {
        self.sinks.is_empty()
    }

    /// Net identifiers in report order.
    pub fn nets(&self) -> &[String] {
        &self.nets
    }
}
