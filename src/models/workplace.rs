//! Workplace directory rows.

use serde::{Deserialize, Serialize};

use super::de::optional_cell;

/// A workplace row as read from the directory, before any type checks.
///
/// Every cell is optional because rows come from loosely structured files;
/// see [`WorkplaceRow::parse`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkplaceRow {
    /// The workplace identifier.
    #[serde(default, deserialize_with = "optional_cell")]
    pub id: Option<String>,
    /// The workplace coordinate, e.g. `"(3,4)"`.
    #[serde(default, deserialize_with = "optional_cell")]
    pub location: Option<String>,
}

/// A workplace with a valid integer identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkplaceRecord {
    /// The workplace identifier.
    pub id: i64,
    /// The workplace coordinate string; empty when the row had none.
    pub location: String,
}

impl WorkplaceRow {
    /// Creates a row with both cells present.
    pub fn new(id: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            location: Some(location.into()),
        }
    }

    /// Returns the typed record, or `None` when the id is missing or not an
    /// integer. A missing location becomes an empty string.
    pub fn parse(&self) -> Option<WorkplaceRecord> {
        let id = self.id.as_deref()?.trim().parse::<i64>().ok()?;
        Some(WorkplaceRecord {
            id,
            location: self.location.clone().unwrap_or_default(),
        })
    }
}
