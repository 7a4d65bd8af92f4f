//! Report assembly and rendering in console, JSON, and plain-text formats

pub mod formatter;
pub mod report;
