// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use gradebook::cli::Session;
use gradebook::domain::{Grade, GradeLedger};
use std::io::Cursor;

/// Build a ledger with one course per grade, named "Course 1", "Course 2", ...
pub fn ledger_with(grades: &[Grade]) -> GradeLedger {
    let mut ledger = GradeLedger::new();
    for (i, grade) in grades.iter().enumerate() {
        ledger.add(&format!("Course {}", i + 1), *grade);
    }
    ledger
}

/// Feed `script` to a fresh session and return it together with everything it printed.
pub fn run_script(script: &str) -> Result<(Session, String)> {
    let mut session = Session::new();
    let mut output = Vec::new();
    session.run(Cursor::new(script), &mut output)?;
    Ok((session, String::from_utf8(output)?))
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
