use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Grade;

pub type CourseId = Uuid;

/// A course recorded in the ledger with the grade earned in it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseEntry {
    pub id: CourseId,
    /// Display name, already trimmed and never empty
    pub name: String,
    pub grade: Grade,
}

impl CourseEntry {
    /// Create an entry with a fresh id. Returns `None` when the name is blank
    /// once surrounding whitespace is removed.
    pub fn new(name: &str, grade: Grade) -> Option<Self> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        Some(Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            grade,
        })
    }

    /// Whether this entry takes part in the average.
    pub fn is_counted(&self) -> bool {
        !self.grade.is_withdrawn()
    }
}
