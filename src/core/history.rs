//! Computation history.
//!
//! Provides an immutable, append-only log of completed computations,
//! following functional programming principles: `record` returns a new log
//! and leaves the original untouched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Separator between the expression and the result in a history line.
pub const LINE_SEPARATOR: &str = " = ";

/// Record of a single successful `=`.
///
/// # Example
///
/// ```rust
/// use tapcalc::core::HistoryEntry;
/// use chrono::Utc;
///
/// let entry = HistoryEntry {
///     expression: "7+3×2".to_string(),
///     result: 13.0,
///     recorded_at: Utc::now(),
/// };
/// assert_eq!(entry.line(), "7+3×2 = 13");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The rendered expression as it was shown when `=` was pressed
    pub expression: String,
    /// The rounded result
    pub result: f64,
    /// When the computation completed
    pub recorded_at: DateTime<Utc>,
}

impl HistoryEntry {
    /// Canonical `"<expression> = <result>"` line.
    pub fn line(&self) -> String {
        format!(
            "{}{}{}",
            self.expression,
            LINE_SEPARATOR,
            crate::eval::format_number(self.result)
        )
    }

    /// Extract the result half of a history line.
    ///
    /// Splits on `=`, trims, and parses what follows. Returns `None` for a
    /// line without a parsable result.
    ///
    /// ```rust
    /// use tapcalc::core::HistoryEntry;
    ///
    /// assert_eq!(HistoryEntry::parse_result("3+4=7"), Some(7.0));
    /// assert_eq!(HistoryEntry::parse_result("3-5 = -2"), Some(-2.0));
    /// assert_eq!(HistoryEntry::parse_result("no result"), None);
    /// ```
    pub fn parse_result(line: &str) -> Option<f64> {
        let (_, result) = line.split_once('=')?;
        result
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
    }
}

/// Ordered log of computations, oldest first.
///
/// An optional capacity drops the oldest entry once exceeded; without one
/// the log grows for the lifetime of the session.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
    capacity: Option<usize>,
}

impl History {
    /// Create a new, unbounded, empty history.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            capacity: None,
        }
    }

    /// Create an empty history that keeps at most `capacity` entries.
    pub fn with_capacity_limit(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity: Some(capacity),
        }
    }

    /// Record an entry, returning a new history.
    ///
    /// This is a pure function - it does not mutate the existing history
    /// but returns a new one with the entry appended.
    ///
    /// ```rust
    /// use tapcalc::core::{History, HistoryEntry};
    /// use chrono::Utc;
    ///
    /// let history = History::new();
    /// let entry = HistoryEntry {
    ///     expression: "1+1".to_string(),
    ///     result: 2.0,
    ///     recorded_at: Utc::now(),
    /// };
    ///
    /// let updated = history.record(entry);
    /// assert_eq!(updated.len(), 1);
    /// assert_eq!(history.len(), 0); // Original unchanged
    /// ```
    pub fn record(&self, entry: HistoryEntry) -> Self {
        let mut entries = self.entries.clone();
        entries.push(entry);
        if let Some(capacity) = self.capacity {
            let excess = entries.len().saturating_sub(capacity);
            entries.drain(..excess);
        }
        Self {
            entries,
            capacity: self.capacity,
        }
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Display lines in chronological order.
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(HistoryEntry::line).collect()
    }
}
