//! Small shared helpers: date formatting and browser glue.

pub mod browser;
pub mod datetime;
pub mod download;
