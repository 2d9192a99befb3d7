//! Summaries built from parsed SAM text.
//!
//! - [`flag_tally`]: Counts records per FLAG bit and pairing category
//! - [`header_annotation`]: Describes each header tag using the SAM reference table

pub mod flag_tally;
pub mod header_annotation;
