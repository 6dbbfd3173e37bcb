use tracing::{debug, info};

use crate::domain::{CourseEntry, CourseId, Grade, GradeLedger};

use super::{AppError, CourseRef, GpaReport};

/// Application service wrapping a grade ledger.
/// This is the interface front ends talk to (interactive session, one-shot CLI).
#[derive(Debug, Default)]
pub struct GradeService {
    ledger: GradeLedger,
}

impl GradeService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ledger(&self) -> &GradeLedger {
        &self.ledger
    }

    /// Record a course. Blank names are ignored and yield `None`.
    pub fn add_course(&mut self, name: &str, grade: Grade) -> Option<&CourseEntry> {
        let id = self.ledger.add(name, grade)?;
        self.ledger.get(id)
    }

    /// Remove a course and return it.
    ///
    /// A position outside the list is an error, since the user typed it.
    /// An id that is not in the ledger removes nothing and returns `None`.
    pub fn remove_course(&mut self, target: CourseRef) -> Result<Option<CourseEntry>, AppError> {
        let id = self.resolve(target)?;
        let removed = self.ledger.get(id).cloned();
        self.ledger.remove(id);
        Ok(removed)
    }

    /// Drop every course and return how many there were.
    pub fn clear(&mut self) -> usize {
        let count = self.ledger.len();
        self.ledger.clear();
        debug!(count, "ledger cleared");
        count
    }

    pub fn gpa(&self) -> f64 {
        let gpa = self.ledger.compute_average();
        info!(
            gpa,
            counted = self.ledger.counted().count(),
            withdrawn = self.ledger.withdrawn_count(),
            "average computed"
        );
        gpa
    }

    pub fn report(&self) -> GpaReport {
        GpaReport::from_ledger(&self.ledger)
    }

    fn resolve(&self, target: CourseRef) -> Result<CourseId, AppError> {
        match target {
            CourseRef::Id(id) => Ok(id),
            CourseRef::Position(position) => position
                .checked_sub(1)
                .and_then(|idx| self.ledger.entries().get(idx))
                .map(|entry| entry.id)
                .ok_or(AppError::InvalidPosition {
                    position,
                    len: self.ledger.len(),
                }),
        }
    }
}
