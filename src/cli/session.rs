use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{BufRead, Write};
use tracing::warn;

use crate::application::{Command, GradeService, HELP};
use crate::domain::{format_gpa, CourseEntry};
use crate::io::Exporter;

use super::{write_grade_table, write_report};

const PROMPT: &str = "gpa> ";

/// Interactive session: reads one command per line and answers on `output`.
/// Ends on `quit`/`exit` or at end of input.
pub struct Session {
    service: GradeService,
}

impl Session {
    pub fn new() -> Self {
        Self {
            service: GradeService::new(),
        }
    }

    pub fn service(&self) -> &GradeService {
        &self.service
    }

    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> Result<()> {
        writeln!(output, "GPA calculator. Type 'help' for commands.")?;
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        // Only I/O errors end the loop; an undecodable line is reported and skipped.
        let mut buf = Vec::new();
        loop {
            buf.clear();
            let read = input
                .read_until(b'\n', &mut buf)
                .context("Failed to read input")?;
            if read == 0 {
                break;
            }

            match std::str::from_utf8(&buf) {
                Ok(line) => {
                    if !self.handle_line(line, &mut output)? {
                        return Ok(());
                    }
                }
                Err(err) => {
                    warn!(error = %err, "ignoring undecodable input line");
                    writeln!(output, "Error: input line is not valid UTF-8; ignored")?;
                }
            }

            write!(output, "{}", PROMPT)?;
            output.flush()?;
        }

        writeln!(output)?;
        Ok(())
    }

    /// Parse and run one line. Returns `false` once the user asked to quit.
    fn handle_line<W: Write>(&mut self, line: &str, output: &mut W) -> Result<bool> {
        match Command::parse(line) {
            Ok(None) => {}
            Ok(Some(Command::Quit)) => return Ok(false),
            Ok(Some(command)) => {
                if let Err(err) = self.execute(command, output) {
                    warn!(error = %err, "command failed");
                    writeln!(output, "Error: {:#}", err)?;
                }
            }
            Err(err) => writeln!(output, "Error: {}", err)?,
        }
        Ok(true)
    }

    /// Run a single command, writing its result to `output`.
    pub fn execute<W: Write>(&mut self, command: Command, output: &mut W) -> Result<()> {
        match command {
            Command::Add { grade, name } => match self.service.add_course(&name, grade) {
                Some(entry) => writeln!(output, "Added: {}", format_entry(entry))?,
                None => writeln!(output, "Course name is empty; nothing added.")?,
            },

            Command::Remove(target) => match self.service.remove_course(target)? {
                Some(entry) => writeln!(output, "Removed: {}", format_entry(&entry))?,
                None => writeln!(output, "No such course; nothing removed.")?,
            },

            Command::List => {
                let entries = self.service.ledger().entries();
                if entries.is_empty() {
                    writeln!(output, "No courses yet.")?;
                } else {
                    for (i, entry) in entries.iter().enumerate() {
                        writeln!(output, "{:>3}. {}", i + 1, format_entry(entry))?;
                    }
                }
            }

            Command::Gpa => {
                writeln!(output, "GPA: {}", format_gpa(self.service.gpa()))?;
            }

            Command::Report(format) => {
                write_report(output, &self.service.report(), format)?;
            }

            Command::Export { path, format } => {
                let report = self.service.report();
                let count = Exporter::new(&report).export_to_path(&path, format)?;
                writeln!(output, "Exported {} course(s) to {}", count, path.display())?;
            }

            Command::Grades => write_grade_table(output)?,

            Command::Clear => {
                let count = self.service.clear();
                writeln!(output, "Cleared {} course(s).", count)?;
            }

            Command::Help => writeln!(output, "{}", HELP)?,

            Command::Quit => {}
        }

        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// `name (grade)`, highlighted when the course was failed.
fn format_entry(entry: &CourseEntry) -> String {
    let text = format!("{} ({})", entry.name, entry.grade);
    if entry.grade.is_failing() {
        text.red().bold().to_string()
    } else {
        text
    }
}
