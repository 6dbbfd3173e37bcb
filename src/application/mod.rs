// Application layer: command parsing, reporting and the service front ends use.

pub mod command;
pub mod error;
pub mod reporting;
pub mod service;

pub use command::*;
pub use error::*;
pub use reporting::*;
pub use service::*;
