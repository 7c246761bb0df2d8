//! Output module for views, listings and match reports

pub mod formatter;
pub mod report;
