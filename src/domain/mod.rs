mod course;
mod grade;
mod ledger;

pub use course::*;
pub use grade::*;
pub use ledger::*;
