use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

use crate::application::{GpaReport, ReportFormat};
use crate::domain::format_gpa;

/// Exporter for writing a GPA report in the supported formats.
pub struct Exporter<'a> {
    report: &'a GpaReport,
}

impl<'a> Exporter<'a> {
    pub fn new(report: &'a GpaReport) -> Self {
        Self { report }
    }

    /// Write the report in the given format. Returns the number of courses written.
    pub fn export<W: Write>(&self, writer: W, format: ReportFormat) -> Result<usize> {
        match format {
            ReportFormat::Csv => self.export_csv(writer),
            ReportFormat::Json => self.export_json(writer),
            ReportFormat::Table => self.export_table(writer),
        }
    }

    /// Export courses to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["id", "name", "grade", "points", "counted"])?;

        let mut count = 0;
        for line in &self.report.entries {
            csv_writer.write_record([
                line.id.to_string(),
                line.name.clone(),
                line.grade.to_string(),
                line.points.map(|p| format!("{:.1}", p)).unwrap_or_default(),
                line.counted.to_string(),
            ])?;
            count += 1;
        }

        csv_writer.flush()?;
        Ok(count)
    }

    /// Export the whole report as pretty-printed JSON
    pub fn export_json<W: Write>(&self, mut writer: W) -> Result<usize> {
        serde_json::to_writer_pretty(&mut writer, self.report)?;
        writeln!(writer)?;
        Ok(self.report.entries.len())
    }

    pub fn export_table<W: Write>(&self, mut writer: W) -> Result<usize> {
        writer.write_all(self.report.to_table().as_bytes())?;
        writer.flush()?;
        Ok(self.report.entries.len())
    }

    /// Write the report to a file, replacing it if it exists.
    /// The format is taken from the path's extension when not given.
    pub fn export_to_path(&self, path: &Path, format: Option<ReportFormat>) -> Result<usize> {
        let format = format.unwrap_or_else(|| ReportFormat::from_path(path));
        let file = File::create(path)
            .with_context(|| format!("Failed to create file: {}", path.display()))?;

        let count = self
            .export(BufWriter::new(file), format)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;

        info!(
            path = %path.display(),
            courses = count,
            gpa = %format_gpa(self.report.gpa),
            "report exported"
        );
        Ok(count)
    }
}
