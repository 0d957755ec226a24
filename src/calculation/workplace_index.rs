//! Workplace id to location lookup.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::models::WorkplaceRow;

/// Maps workplace ids to their coordinate strings.
///
/// Built once per calculation. When the directory lists an id more than
/// once, the first row wins. Rows without an integer id are ignored.
///
/// # Example
///
/// ```
/// use student_payout::calculation::WorkplaceIndex;
/// use student_payout::models::WorkplaceRow;
///
/// let index = WorkplaceIndex::build(&[
///     WorkplaceRow::new("1", "(0,0)"),
///     WorkplaceRow::new("1", "(9,9)"),
/// ]);
/// assert_eq!(index.location_of(1), "(0,0)");
/// assert_eq!(index.location_of(2), "");
/// ```
#[derive(Debug, Clone, Default)]
pub struct WorkplaceIndex {
    locations: HashMap<i64, String>,
}

impl WorkplaceIndex {
    /// Indexes the workplace directory.
    pub fn build(rows: &[WorkplaceRow]) -> Self {
        let mut locations = HashMap::with_capacity(rows.len());

        for record in rows.iter().filter_map(WorkplaceRow::parse) {
            match locations.entry(record.id) {
                Entry::Vacant(slot) => {
                    slot.insert(record.location);
                }
                Entry::Occupied(_) => {
                    tracing::debug!(workplace_id = record.id, "Ignoring duplicate workplace");
                }
            }
        }

        Self { locations }
    }

    /// Returns the location of a workplace, or an empty string when unknown.
    pub fn location_of(&self, workplace_id: i64) -> &str {
        self.locations
            .get(&workplace_id)
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Number of distinct workplaces indexed.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Returns true when no workplace was indexed.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}
