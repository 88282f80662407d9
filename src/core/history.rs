//! Append-only log of completed calculations.
//!
//! Entries are immutable once recorded and insertion order is preserved,
//! following functional programming principles: `record` returns a new
//! history rather than mutating in place.

use serde::{Deserialize, Serialize};

/// Ordered, append-only calculation history.
///
/// Each entry is the formatted text of one completed binary calculation,
/// `"<op1> <symbol> <op2> = <result>"`. Entries are never reordered,
/// truncated, or edited after being appended.
///
/// # Example
///
/// ```rust
/// use abacus::core::History;
///
/// let history = History::new();
/// let history = history.record("2.0 + 3.0 = 5".to_string());
/// let history = history.record("5.0 × 4.0 = 20".to_string());
///
/// assert_eq!(history.entries(), ["2.0 + 3.0 = 5", "5.0 × 4.0 = 20"]);
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record an entry, returning a new history.
    ///
    /// This is a pure function - it does not mutate the existing history
    /// but returns a new one with the entry appended.
    ///
    /// # Example
    ///
    /// ```rust
    /// use abacus::core::History;
    ///
    /// let history = History::new();
    /// let recorded = history.record("1.0 + 1.0 = 2".to_string());
    ///
    /// assert!(history.is_empty()); // Original unchanged
    /// assert_eq!(recorded.len(), 1);
    /// ```
    pub fn record(&self, entry: String) -> Self {
        let mut entries = self.entries.clone();
        entries.push(entry);
        Self { entries }
    }

    /// Get all entries in insertion order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether no calculation has completed yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
