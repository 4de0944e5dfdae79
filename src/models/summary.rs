//! Summary table model.
//!
//! A [`SummaryTable`] is the small keyed view an aggregation produces for a
//! single chart: one row per category with an aggregate value.

use serde::{Deserialize, Serialize};

/// One row of a summary table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow<V> {
    /// The categorical key (e.g., department name).
    pub key: String,
    /// The aggregate value for this key.
    pub value: V,
}

/// A mapping from a categorical key to an aggregate value.
///
/// Rows are kept in the order the producing aggregation defines. Keys are
/// unique within a table.
///
/// # Example
///
/// ```
/// use hr_dashboard::models::SummaryTable;
///
/// let table = SummaryTable::new(
///     "Department",
///     "Terminations",
///     vec![("Sales".to_string(), 3u64), ("IT/IS".to_string(), 1)],
/// );
/// assert_eq!(table.get("Sales"), Some(&3));
/// assert_eq!(table.get("Admin Offices"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryTable<V> {
    /// Label describing the key column.
    pub key_label: String,
    /// Label describing the value column.
    pub value_label: String,
    /// The rows of the table.
    pub rows: Vec<SummaryRow<V>>,
}

impl<V> SummaryTable<V> {
    /// Creates a summary table from `(key, value)` pairs.
    pub fn new(
        key_label: impl Into<String>,
        value_label: impl Into<String>,
        rows: Vec<(String, V)>,
    ) -> Self {
        Self {
            key_label: key_label.into(),
            value_label: value_label.into(),
            rows: rows
                .into_iter()
                .map(|(key, value)| SummaryRow { key, value })
                .collect(),
        }
    }

    /// Looks up the value for a key.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.rows.iter().find(|row| row.key == key).map(|row| &row.value)
    }

    /// Returns the keys in row order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|row| row.key.as_str())
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
