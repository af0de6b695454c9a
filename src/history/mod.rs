//! Append-only operation history.
//!
//! [`HistoryLog`] keeps an ordered sequence of [`OperationRecord`] values.
//! Entries are only ever added through [`add_entry`](HistoryLog::add_entry)
//! or removed all at once through [`clear`](HistoryLog::clear); single
//! entries are never removed or reordered.

mod record;

pub use record::{Operation, OperationRecord};

use serde::{Deserialize, Serialize};

use crate::error::CalcError;

/// Ordered, append-only collection of operation records.
///
/// Insertion order is preserved; there is no deduplication and no size
/// bound. Consumers read the contents through the
/// [`entries`](HistoryLog::entries) accessor and never mutate records
/// directly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryLog {
    entries: Vec<OperationRecord>,
}

impl HistoryLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one record with a fresh timestamp. Always succeeds.
    pub fn add_entry(
        &mut self,
        operation: Operation,
        operands: &[f64],
        result: Result<f64, CalcError>,
    ) {
        self.entries
            .push(OperationRecord::new(operation, operands.to_vec(), result));
    }

    /// Removes all entries. Irreversible.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// The recorded entries, oldest first.
    pub fn entries(&self) -> &[OperationRecord] {
        &self.entries
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
