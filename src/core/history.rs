//! Calculation history.
//!
//! Completed evaluations accumulate in an append-only log. Storage order is
//! insertion order; presentation iterates newest first. History lives only
//! for the lifetime of the session.

use serde::{Deserialize, Serialize};

/// A completed calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Expression text exactly as it was submitted.
    pub expression: String,
    /// Numeric result returned by the evaluation endpoint.
    pub result: f64,
    /// Unix timestamp when the entry was recorded.
    pub recorded_at: i64,
}

impl HistoryEntry {
    /// Creates an entry stamped with the current time.
    #[must_use]
    pub fn new(expression: String, result: f64) -> Self {
        Self {
            expression,
            result,
            recorded_at: current_timestamp(),
        }
    }
}

/// Append-only log of completed calculations.
///
/// # Examples
///
/// ```
/// use aicalc::core::{History, HistoryEntry};
///
/// let mut history = History::new();
/// history.record(HistoryEntry::new("2 + 2".to_string(), 4.0));
/// history.record(HistoryEntry::new("3 * 7".to_string(), 21.0));
///
/// let newest: Vec<&str> = history
///     .iter_recent()
///     .map(|entry| entry.expression.as_str())
///     .collect();
/// assert_eq!(newest, ["3 * 7", "2 + 2"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Creates an empty history.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends an entry. Existing entries are never reordered.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no calculations have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Iterates entries newest first, the order the panel displays them.
    pub fn iter_recent(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev()
    }

    /// Returns the most recently recorded entry.
    #[must_use]
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }
}

/// Returns the current Unix timestamp in seconds.
#[allow(clippy::cast_possible_wrap)]
fn current_timestamp() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(expression: &str, result: f64) -> HistoryEntry {
        HistoryEntry::new(expression.to_string(), result)
    }

    #[test]
    fn test_new_is_empty() {
        let history = History::new();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
        assert!(history.latest().is_none());
    }

    #[test]
    fn test_record_preserves_insertion_order() {
        let mut history = History::new();
        history.record(entry("1 + 1", 2.0));
        history.record(entry("2 + 2", 4.0));
        history.record(entry("3 + 3", 6.0));

        let expressions: Vec<&str> = history
            .entries()
            .iter()
            .map(|e| e.expression.as_str())
            .collect();
        assert_eq!(expressions, ["1 + 1", "2 + 2", "3 + 3"]);
    }

    #[test]
    fn test_iter_recent_is_newest_first() {
        let mut history = History::new();
        history.record(entry("1 + 1", 2.0));
        history.record(entry("2 + 2", 4.0));

        let recent: Vec<&str> = history
            .iter_recent()
            .map(|e| e.expression.as_str())
            .collect();
        assert_eq!(recent, ["2 + 2", "1 + 1"]);
    }

    #[test]
    fn test_latest() {
        let mut history = History::new();
        history.record(entry("9 / 3", 3.0));
        history.record(entry("sqrt(16)", 4.0));

        let latest = history.latest().unwrap();
        assert_eq!(latest.expression, "sqrt(16)");
        assert!((latest.result - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_clear_removes_everything() {
        let mut history = History::new();
        history.record(entry("2 + 2", 4.0));
        history.record(entry("5 - 1", 4.0));
        history.clear();
        assert!(history.is_empty());
        assert!(history.latest().is_none());
    }

    #[test]
    fn test_entry_has_timestamp() {
        let e = entry("2 + 2", 4.0);
        assert!(e.recorded_at > 0);
    }

    #[test]
    fn test_serialization_round_trip() {
        let mut history = History::new();
        history.record(entry("2 + 2", 4.0));

        let json = serde_json::to_string(&history).unwrap();
        let restored: History = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, history);
    }
}
