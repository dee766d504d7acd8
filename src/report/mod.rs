//! Report module
//!
//! Renders the batch report text.
//!
//! # Components
//!
//! - `format` - The single number-formatting routine
//! - `writer` - Section-by-section report builder

pub mod format;
pub mod writer;

pub use format::AmountFormatter;
pub use writer::ReportWriter;
