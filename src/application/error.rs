use thiserror::Error;

use crate::domain::ParseGradeError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Unknown command: {0} (type 'help' for a list of commands)")]
    UnknownCommand(String),

    #[error("Missing argument. Usage: {usage}")]
    MissingArgument { usage: &'static str },

    #[error("Invalid grade: {0}")]
    InvalidGrade(#[from] ParseGradeError),

    #[error("No course at position {position} (the list has {len})")]
    InvalidPosition { position: usize, len: usize },

    #[error("Invalid course reference '{0}': expected a list position or a course id")]
    InvalidCourseRef(String),

    #[error("Unsupported format: {0} (expected table, json or csv)")]
    UnsupportedFormat(String),
}
