//! Collection access history.
//!
//! Records which collections were visited, most recent last, so that
//! closing a tab can fall back to the collection the user was in before.

use serde::{Deserialize, Serialize};

use crate::tab::CollectionUid;

/// Number of collections remembered by default.
pub const DEFAULT_HISTORY_LIMIT: usize = 20;

const fn default_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

/// Bounded, deduplicated log of visited collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionAccessHistory {
    /// Visited collections (oldest first).
    entries: Vec<CollectionUid>,
    /// Maximum number of collections to keep.
    #[serde(default = "default_limit")]
    limit: usize,
}

impl Default for CollectionAccessHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl CollectionAccessHistory {
    /// Creates an empty history holding at most `limit` collections.
    #[must_use]
    pub const fn new(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            limit,
        }
    }

    /// Marks a collection as the most recently accessed one.
    ///
    /// An earlier occurrence is removed; the oldest entries are dropped once
    /// the limit is exceeded.
    pub fn record(&mut self, collection_uid: &CollectionUid) {
        self.entries.retain(|uid| uid != collection_uid);
        self.entries.push(collection_uid.clone());
        self.trim();
    }

    /// Returns all entries (oldest first).
    #[must_use]
    pub fn entries(&self) -> &[CollectionUid] {
        &self.entries
    }

    /// Iterates entries from the most recent to the oldest.
    pub fn most_recent_first(&self) -> impl Iterator<Item = &CollectionUid> {
        self.entries.iter().rev()
    }

    /// Returns the most recently accessed collection.
    #[must_use]
    pub fn latest(&self) -> Option<&CollectionUid> {
        self.entries.last()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the maximum number of entries kept.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Sets the maximum number of entries and trims if needed.
    pub fn set_limit(&mut self, limit: usize) {
        self.limit = limit;
        self.trim();
    }

    fn trim(&mut self) {
        if self.entries.len() > self.limit {
            let excess = self.entries.len() - self.limit;
            self.entries.drain(..excess);
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn uid(id: &str) -> CollectionUid {
        CollectionUid::collection(id)
    }

    #[test]
    fn test_record_moves_to_end() {
        let mut history = CollectionAccessHistory::default();
        history.record(&uid("a"));
        history.record(&uid("b"));
        history.record(&uid("a"));

        assert_eq!(history.entries(), &[uid("b"), uid("a")]);
        assert_eq!(history.latest(), Some(&uid("a")));
    }

    #[test]
    fn test_history_limit() {
        let mut history = CollectionAccessHistory::default();
        for i in 0..25 {
            history.record(&uid(&format!("c{i}")));
        }

        assert_eq!(history.len(), DEFAULT_HISTORY_LIMIT);
        assert_eq!(history.entries()[0], uid("c5"));
        assert_eq!(history.latest(), Some(&uid("c24")));
    }

    #[test]
    fn test_set_limit_trims_oldest() {
        let mut history = CollectionAccessHistory::new(5);
        for id in ["a", "b", "c", "d"] {
            history.record(&uid(id));
        }
        history.set_limit(2);

        assert_eq!(history.entries(), &[uid("c"), uid("d")]);
        let newest_first: Vec<_> = history.most_recent_first().cloned().collect();
        assert_eq!(newest_first, vec![uid("d"), uid("c")]);
    }

    #[test]
    fn test_missing_limit_defaults_on_deserialize() {
        let history: CollectionAccessHistory =
            serde_json::from_str(r#"{"entries":["c1","virtual-w1"]}"#)
                .expect("history should deserialize");
        assert_eq!(history.limit(), DEFAULT_HISTORY_LIMIT);
        assert_eq!(history.len(), 2);
        assert!(history.entries()[1].is_workspace_home());
    }
}
