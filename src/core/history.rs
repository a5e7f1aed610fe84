//! Calculation history.
//!
//! History is immutable - `record` and `cleared` return a new history and
//! leave the original untouched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default number of entries kept by [`CalculationHistory`].
pub const DEFAULT_HISTORY_LIMIT: usize = 20;

/// One successful evaluation.
///
/// # Example
///
/// ```rust
/// use scicalc::core::HistoryEntry;
///
/// let entry = HistoryEntry::new("5 - 3", "2");
/// assert_eq!(entry.to_string(), "5 - 3 = 2");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The evaluated expression, after angle preprocessing
    pub expression: String,
    /// The formatted result
    pub result: String,
    /// When the evaluation happened
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(expression: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            result: result.into(),
            timestamp: Utc::now(),
        }
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.expression, self.result)
    }
}

/// Ordered history of evaluations, most recent first, capped at `limit`.
///
/// # Example
///
/// ```rust
/// use scicalc::core::{CalculationHistory, HistoryEntry};
///
/// let history = CalculationHistory::with_limit(2)
///     .record(HistoryEntry::new("1 + 1", "2"))
///     .record(HistoryEntry::new("2 + 2", "4"))
///     .record(HistoryEntry::new("3 + 3", "6"));
///
/// let lines = history.lines();
/// assert_eq!(lines, vec!["3 + 3 = 6", "2 + 2 = 4"]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculationHistory {
    entries: Vec<HistoryEntry>,
    limit: usize,
}

impl Default for CalculationHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculationHistory {
    /// Create an empty history with the default limit.
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }

    /// Create an empty history keeping at most `limit` entries.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            limit,
        }
    }

    /// Record an entry at the front, returning a new history.
    ///
    /// Entries beyond the limit are evicted from the back (oldest first).
    pub fn record(&self, entry: HistoryEntry) -> Self {
        let mut entries = Vec::with_capacity(self.limit.min(self.entries.len() + 1));
        entries.push(entry);
        entries.extend(self.entries.iter().cloned());
        entries.truncate(self.limit);
        Self {
            entries,
            limit: self.limit,
        }
    }

    /// Return an empty history with the same limit.
    pub fn cleared(&self) -> Self {
        Self::with_limit(self.limit)
    }

    /// All entries, most recent first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Entry at `index` (0 is the most recent).
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Rendered `"expression = result"` lines, most recent first.
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(n: usize) -> HistoryEntry {
        HistoryEntry::new(format!("{n} + 0"), n.to_string())
    }

    #[test]
    fn new_history_is_empty() {
        let history = CalculationHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.limit(), DEFAULT_HISTORY_LIMIT);
        assert!(history.latest().is_none());
    }

    #[test]
    fn record_puts_newest_first() {
        let history = CalculationHistory::new().record(entry(1)).record(entry(2));

        assert_eq!(history.len(), 2);
        assert_eq!(history.latest().unwrap().result, "2");
        assert_eq!(history.get(1).unwrap().result, "1");
    }

    #[test]
    fn record_is_immutable() {
        let history = CalculationHistory::new();
        let new_history = history.record(entry(1));

        assert_eq!(history.len(), 0);
        assert_eq!(new_history.len(), 1);
    }

    #[test]
    fn record_evicts_oldest_beyond_limit() {
        let mut history = CalculationHistory::new();
        for n in 0..25 {
            history = history.record(entry(n));
        }

        assert_eq!(history.len(), 20);
        assert_eq!(history.latest().unwrap().result, "24");
        assert_eq!(history.get(19).unwrap().result, "5");
    }

    #[test]
    fn zero_limit_keeps_nothing() {
        let history = CalculationHistory::with_limit(0).record(entry(1));
        assert!(history.is_empty());
    }

    #[test]
    fn cleared_keeps_limit() {
        let history = CalculationHistory::with_limit(5).record(entry(1));
        let cleared = history.cleared();

        assert!(cleared.is_empty());
        assert_eq!(cleared.limit(), 5);
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn entry_renders_expression_and_result() {
        assert_eq!(HistoryEntry::new("2 ^ 10", "1024").to_string(), "2 ^ 10 = 1024");
    }

    #[test]
    fn history_serializes_correctly() {
        let history = CalculationHistory::new().record(entry(7));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: CalculationHistory = serde_json::from_str(&json).unwrap();

        assert_eq!(history, deserialized);
    }
}
