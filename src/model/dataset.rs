//! Loaded dataset handle.

use crate::model::Record;

/// The full ordered collection of records available to the static flow.
///
/// Constructed once at startup from the bundled archive and passed into the
/// core by value; there is no ambient global. Read-only after load.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Wrap an ordered record collection.
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// All records, in load order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
