use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style, Width};
use tabled::{Table, Tabled};

use crate::domain::{format_gpa, CourseId, Grade, GradeLedger};

use super::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl ReportFormat {
    /// Pick a file format from a path's extension. Anything but `.json`
    /// and `.txt` is written as CSV.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => ReportFormat::Json,
            Some("txt") => ReportFormat::Table,
            _ => ReportFormat::Csv,
        }
    }
}

impl FromStr for ReportFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(ReportFormat::Table),
            "json" => Ok(ReportFormat::Json),
            "csv" => Ok(ReportFormat::Csv),
            other => Err(AppError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Snapshot of the ledger together with its GPA.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GpaReport {
    pub entries: Vec<ReportLine>,
    pub counted: usize,
    pub withdrawn: usize,
    pub failing: usize,
    pub gpa: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportLine {
    pub id: CourseId,
    pub name: String,
    pub grade: Grade,
    pub points: Option<f64>,
    pub counted: bool,
}

impl GpaReport {
    pub fn from_ledger(ledger: &GradeLedger) -> Self {
        let entries = ledger
            .entries()
            .iter()
            .map(|entry| ReportLine {
                id: entry.id,
                name: entry.name.clone(),
                grade: entry.grade,
                points: entry.grade.points(),
                counted: entry.is_counted(),
            })
            .collect();

        Self {
            entries,
            counted: ledger.counted().count(),
            withdrawn: ledger.withdrawn_count(),
            failing: ledger.failing_count(),
            gpa: ledger.compute_average(),
        }
    }

    /// Plain-text table, one row per course followed by the GPA line.
    pub fn to_table(&self) -> String {
        let mut out = String::new();

        if self.entries.is_empty() {
            out.push_str("No courses recorded.\n");
        } else {
            let rows = self.entries.iter().map(|line| TableRow {
                course: line.name.clone(),
                grade: line.grade,
                points: line
                    .points
                    .map(|p| format!("{:.1}", p))
                    .unwrap_or_else(|| "-".to_string()),
            });

            // Widths are display widths, so names with combining marks line up.
            let mut table = Table::new(rows);
            table
                .with(Style::psql())
                .modify(Columns::first(), Width::truncate(COURSE_WIDTH).suffix("..."))
                .modify(Columns::new(1..), Alignment::right());

            out.push_str(&table.to_string());
            out.push('\n');
        }

        out.push_str(&format!("GPA: {}\n", format_gpa(self.gpa)));
        out.push_str(&format!(
            "({} counted, {} withdrawn)\n",
            self.counted, self.withdrawn
        ));
        out
    }
}

const COURSE_WIDTH: usize = 30;

#[derive(Tabled)]
struct TableRow {
    #[tabled(rename = "COURSE")]
    course: String,
    #[tabled(rename = "GRADE")]
    grade: Grade,
    #[tabled(rename = "POINTS")]
    points: String,
}
