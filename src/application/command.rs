use std::path::PathBuf;

use uuid::Uuid;

use crate::domain::{CourseId, Grade};

use super::{AppError, ReportFormat};

/// A course identified either by its 1-based position in the list or by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseRef {
    Position(usize),
    Id(CourseId),
}

impl CourseRef {
    pub fn parse(s: &str) -> Result<Self, AppError> {
        let s = s.trim();
        if let Ok(position) = s.parse::<usize>() {
            return Ok(CourseRef::Position(position));
        }
        Uuid::parse_str(s)
            .map(CourseRef::Id)
            .map_err(|_| AppError::InvalidCourseRef(s.to_string()))
    }
}

/// One line of input to an interactive session.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add { grade: Grade, name: String },
    Remove(CourseRef),
    List,
    Gpa,
    Report(ReportFormat),
    Export {
        path: PathBuf,
        format: Option<ReportFormat>,
    },
    Grades,
    Clear,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  add <grade> <name>        Record a course (grades: A, B+, B, C+, C, D+, D, F, W)
  remove <position|id>      Remove a course
  list                      Show recorded courses
  gpa                       Compute the grade-point average
  report [table|json|csv]   Show the full report
  export <path> [format]    Write the report to a file
  grades                    Show the grade table
  clear                     Remove every course
  help                      Show this message
  quit                      Leave the session";

impl Command {
    /// Parse a line of input. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, AppError> {
        let (word, rest) = split_word(line);
        if word.is_empty() {
            return Ok(None);
        }

        let command = match word.to_lowercase().as_str() {
            "add" => {
                let (grade, name) = split_word(rest);
                if grade.is_empty() {
                    return Err(AppError::MissingArgument {
                        usage: "add <grade> <name>",
                    });
                }
                Command::Add {
                    grade: grade.parse()?,
                    name: name.to_string(),
                }
            }
            "remove" | "rm" => {
                let (target, _) = split_word(rest);
                if target.is_empty() {
                    return Err(AppError::MissingArgument {
                        usage: "remove <position|id>",
                    });
                }
                Command::Remove(CourseRef::parse(target)?)
            }
            "list" | "ls" => Command::List,
            "gpa" => Command::Gpa,
            "report" => {
                let (format, _) = split_word(rest);
                if format.is_empty() {
                    Command::Report(ReportFormat::default())
                } else {
                    Command::Report(format.parse()?)
                }
            }
            "export" => {
                let (path, rest) = split_word(rest);
                if path.is_empty() {
                    return Err(AppError::MissingArgument {
                        usage: "export <path> [table|json|csv]",
                    });
                }
                let (format, _) = split_word(rest);
                let format = if format.is_empty() {
                    None
                } else {
                    Some(format.parse()?)
                };
                Command::Export {
                    path: PathBuf::from(path),
                    format,
                }
            }
            "grades" => Command::Grades,
            "clear" => Command::Clear,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => return Err(AppError::UnknownCommand(word.to_string())),
        };

        Ok(Some(command))
    }
}

/// Parse a `name:grade` course argument. Without a `:grade` suffix the default
/// grade applies.
pub fn parse_course_arg(arg: &str) -> Result<(String, Grade), AppError> {
    match arg.rsplit_once(':') {
        Some((name, grade)) => Ok((name.to_string(), grade.parse()?)),
        None => Ok((arg.to_string(), Grade::default())),
    }
}

fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(idx) => (&s[..idx], s[idx..].trim()),
        None => (s, ""),
    }
}
