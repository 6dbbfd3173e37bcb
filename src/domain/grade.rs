use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A letter grade. The set is closed: every symbol a course can carry is a
/// variant here, and the point table below is an exhaustive match over it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Grade {
    #[default]
    A,
    #[serde(rename = "B+")]
    BPlus,
    B,
    #[serde(rename = "C+")]
    CPlus,
    C,
    #[serde(rename = "D+")]
    DPlus,
    D,
    F,
    /// Withdrawn. Never part of an average.
    W,
}

impl Grade {
    /// Every grade in the order a selector should offer them.
    pub const ALL: [Grade; 9] = [
        Grade::A,
        Grade::BPlus,
        Grade::B,
        Grade::CPlus,
        Grade::C,
        Grade::DPlus,
        Grade::D,
        Grade::F,
        Grade::W,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::CPlus => "C+",
            Grade::C => "C",
            Grade::DPlus => "D+",
            Grade::D => "D",
            Grade::F => "F",
            Grade::W => "W",
        }
    }

    /// Point value on a 4.0 scale. `W` has none.
    pub fn points(&self) -> Option<f64> {
        match self {
            Grade::A => Some(4.0),
            Grade::BPlus => Some(3.5),
            Grade::B => Some(3.0),
            Grade::CPlus => Some(2.5),
            Grade::C => Some(2.0),
            Grade::DPlus => Some(1.5),
            Grade::D => Some(1.0),
            Grade::F => Some(0.0),
            Grade::W => None,
        }
    }

    pub fn is_withdrawn(&self) -> bool {
        matches!(self, Grade::W)
    }

    pub fn is_failing(&self) -> bool {
        matches!(self, Grade::F)
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Grade {
    type Err = ParseGradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbol = s.trim();
        Grade::ALL
            .into_iter()
            .find(|grade| grade.as_str().eq_ignore_ascii_case(symbol))
            .ok_or_else(|| ParseGradeError::UnknownSymbol(symbol.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseGradeError {
    UnknownSymbol(String),
}

impl fmt::Display for ParseGradeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseGradeError::UnknownSymbol(symbol) => write!(
                f,
                "unknown grade '{}' (expected one of: {})",
                symbol,
                grade_symbols().join(", ")
            ),
        }
    }
}

impl std::error::Error for ParseGradeError {}

/// The grade symbols, in selector order.
pub fn grade_symbols() -> Vec<&'static str> {
    Grade::ALL.iter().map(Grade::as_str).collect()
}

/// Format an average for display, rounded to two decimal places.
/// Example: 2.6666 -> "2.67", 0.0 -> "0.00"
pub fn format_gpa(gpa: f64) -> String {
    format!("{:.2}", gpa)
}
