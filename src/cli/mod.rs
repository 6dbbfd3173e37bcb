mod session;

pub use session::Session;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Write};

use crate::application::{parse_course_arg, GpaReport, GradeService, ReportFormat};
use crate::domain::Grade;
use crate::io::Exporter;

/// Gradebook - GPA Calculator
#[derive(Parser)]
#[command(name = "gradebook")]
#[command(about = "Record courses and letter grades, then compute an unweighted GPA")]
#[command(version)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable coloured output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive session (the default)
    Session,

    /// Compute the GPA for a list of courses and print a report
    Calc {
        /// Courses as name:grade (e.g. "Calculus:B+"); a missing grade means A
        #[arg(required = true)]
        courses: Vec<String>,

        /// Output format: table, json, csv
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Show the grade table
    Grades,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        if self.no_color {
            colored::control::set_override(false);
        }

        let stdout = io::stdout();
        let mut out = stdout.lock();

        match self.command.unwrap_or(Commands::Session) {
            Commands::Session => {
                let stdin = io::stdin();
                Session::new().run(stdin.lock(), &mut out)?;
            }

            Commands::Calc { courses, format } => {
                let format: ReportFormat = format.parse()?;
                let report = calculate(&courses)?;
                write_report(&mut out, &report, format)?;
            }

            Commands::Grades => write_grade_table(&mut out)?,
        }

        Ok(())
    }
}

/// Build a report from `name:grade` arguments in one go.
pub fn calculate<S: AsRef<str>>(courses: &[S]) -> Result<GpaReport> {
    let mut service = GradeService::new();
    for arg in courses {
        let arg = arg.as_ref();
        let (name, grade) =
            parse_course_arg(arg).with_context(|| format!("Invalid course '{}'", arg))?;
        service.add_course(&name, grade);
    }
    Ok(service.report())
}

pub(crate) fn write_report<W: Write>(
    out: &mut W,
    report: &GpaReport,
    format: ReportFormat,
) -> Result<()> {
    Exporter::new(report).export(out, format)?;
    Ok(())
}

pub(crate) fn write_grade_table<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{:<6} {:>6}", "GRADE", "POINTS")?;
    writeln!(out, "{}", "-".repeat(13))?;
    for grade in Grade::ALL {
        match grade.points() {
            Some(points) => writeln!(out, "{:<6} {:>6.1}", grade, points)?,
            None => writeln!(out, "{:<6} {:>6}", grade, "-")?,
        }
    }
    writeln!(out, "W (withdrawn) is excluded from the average.")?;
    Ok(())
}
