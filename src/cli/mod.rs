//! Terminal-facing helpers: result rendering

pub mod output;
