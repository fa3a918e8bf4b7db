//! Merging of net groups that share a connection pattern.

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::types::{ConnectionKey, GroupRecord};

/// Records that share one [`ConnectionKey`], in arrival order.
///
/// Never empty: a group is created together with its first member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsolidatedGroup {
    members: Vec<GroupRecord>,
}

impl ConsolidatedGroup {
    fn new(first: GroupRecord) -> Self {
        Self {
            members: vec![first],
        }
    }

    /// Member records in the order they were read.
    pub fn members(&self) -> &[GroupRecord] {
        &self.members
    }

    /// The first record that produced this group.
    pub fn first(&self) -> &GroupRecord {
        &self.members[0]
    }

    /// All member nets, concatenated in member order.
    pub fn nets(&self) -> impl Iterator<Item = &str> {
        self.members
            .iter()
            .flat_map(|record| record.nets().iter().map(String::as_str))
    }
}

/// Consolidated groups keyed by connection pattern.
///
/// Iteration follows the order in which each key was first seen, which is
/// also the numbering order used in reports.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Consolidation {
    groups: IndexMap<ConnectionKey, ConsolidatedGroup>,
}

impl Consolidation {
    /// Creates an empty consolidation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record to the group for its key, creating the group if needed.
    pub fn push(&mut self, record: GroupRecord) {
        match self.groups.entry(ConnectionKey::of(&record)) {
            Entry::Occupied(mut entry) => entry.get_mut().members.push(record),
            Entry::Vacant(entry) => {
                entry.insert(ConsolidatedGroup::new(record));
            }
        }
    }

    /// Number of distinct connection patterns.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether no records have been added.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Looks up the group for a key.
    pub fn get(&self, key: &ConnectionKey) -> Option<&ConsolidatedGroup> {
        self.groups.get(key)
    }

    /// Groups in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&ConnectionKey, &ConsolidatedGroup)> {
        self.groups.iter()
    }

    /// Total number of records across all groups.
    pub fn original_group_count(&self) -> usize {
        self.groups.values().map(|group| group.members.len()).sum()
    }
}

impl FromIterator<GroupRecord> for Consolidation {
    fn from_iter<I: IntoIterator<Item = GroupRecord>>(iter: I) -> Self {
        let mut consolidation = Self::new();
        consolidation.extend(iter);
        consolidation
    }
}

impl Extend<GroupRecord> for Consolidation {
    fn extend<I: IntoIterator<Item = GroupRecord>>(&mut self, iter: I) {
        for record in iter {
            self.push(record);
        }
    }
}

/// Groups records by connection pattern, keeping first-seen key order.
///
/// # Examples
///
/// ```
/// use netmerge_core::{consolidate, GroupRecord};
///
/// let consolidation = consolidate(vec![
///     GroupRecord::new(1, "F0", ["F1", "F2"], ["n1", "n2"]),
///     GroupRecord::new(2, "F0", ["F2", "F1"], ["n3"]),
/// ]);
/// assert_eq!(consolidation.len(), 1);
///
/// let (_, group) = consolidation.iter().next().unwrap();
/// assert_eq!(group.nets().collect::<Vec<_>>(), ["n1", "n2", "n3"]);
/// ```
pub fn consolidate(records: impl IntoIterator<Item = GroupRecord>) -> Consolidation {
    let consolidation: Consolidation = records.into_iter().collect();
    tracing::debug!(
        original = consolidation.original_group_count(),
        consolidated = consolidation.len(),
        "Consolidated net groups"
    );
    consolidation
}
