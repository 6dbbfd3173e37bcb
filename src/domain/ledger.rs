use tracing::debug;

use super::{CourseEntry, CourseId, Grade};

/// The in-memory list of courses recorded during a session.
/// Insertion order is kept for display; ids are unique within the ledger.
#[derive(Debug, Clone, Default)]
pub struct GradeLedger {
    entries: Vec<CourseEntry>,
}

impl GradeLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a course. A blank name is silently ignored and yields `None`.
    pub fn add(&mut self, name: &str, grade: Grade) -> Option<CourseId> {
        let Some(entry) = CourseEntry::new(name, grade) else {
            debug!("ignoring course with blank name");
            return None;
        };

        let id = entry.id;
        debug!(%id, name = %entry.name, %grade, "course added");
        self.entries.push(entry);
        Some(id)
    }

    /// Remove the course with the given id. Unknown ids are a no-op.
    pub fn remove(&mut self, id: CourseId) {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        if self.entries.len() < before {
            debug!(%id, "course removed");
        }
    }

    /// Drop every course.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Unweighted mean of point values over every course not withdrawn.
    /// Returns 0.0 when no course counts.
    pub fn compute_average(&self) -> f64 {
        compute_average(&self.entries)
    }

    pub fn entries(&self) -> &[CourseEntry] {
        &self.entries
    }

    pub fn get(&self, id: CourseId) -> Option<&CourseEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn contains(&self, id: CourseId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Courses that take part in the average.
    pub fn counted(&self) -> impl Iterator<Item = &CourseEntry> {
        self.entries.iter().filter(|entry| entry.is_counted())
    }

    pub fn withdrawn_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.grade.is_withdrawn())
            .count()
    }

    pub fn failing_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.grade.is_failing())
            .count()
    }
}

/// Compute the GPA for a list of courses.
/// Withdrawn courses are filtered out before summing; an empty remainder
/// averages to 0.0. A grade without points contributes 0.0.
pub fn compute_average(entries: &[CourseEntry]) -> f64 {
    let (total, count) = entries
        .iter()
        .filter(|entry| entry.is_counted())
        .fold((0.0, 0usize), |(total, count), entry| {
            (total + entry.grade.points().unwrap_or(0.0), count + 1)
        });

    if count == 0 {
        return 0.0;
    }

    total / count as f64
}
