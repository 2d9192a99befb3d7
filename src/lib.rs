//! # sam-inspect
//!
//! Small reporting tools for SAM text files.
//!
//! - **sam-flags** decodes the FLAG column of every alignment record into the
//!   twelve named SAM bits and counts how many records carry each one, plus two
//!   pairing categories derived from several bits.
//! - **sam-header** walks the header block and explains every tag using the
//!   descriptions from the SAM format specification.
//!
//! ## Example
//!
//! ```rust
//! use sam_inspect::core::flags::{FlagBit, FlagCategory};
//! use sam_inspect::report::flag_tally::FlagTally;
//! use sam_inspect::report::header_annotation::{annotate_header, HeaderReport};
//!
//! let sam = "@HD\tVN:1.6\tSO:coordinate\nr1\t99\tchr1\t100\nr1\t147\tchr1\t300\n";
//!
//! let tally = FlagTally::from_sam_text(sam).unwrap();
//! assert_eq!(tally[FlagBit::Paired], 2);
//! assert_eq!(tally.count(FlagCategory::ItselfAndMateMapped), 2);
//!
//! let HeaderReport::Annotated(tags) = annotate_header(sam).unwrap() else {
//!     panic!("expected a header");
//! };
//! assert_eq!(tags[1].key, "SO");
//! ```
//!
//! ## Modules
//!
//! - [`core`]: FLAG bits, header types and the SAM tag reference table
//! - [`parsing`]: Line-oriented SAM text parsing
//! - [`report`]: Flag tallies and header annotation
//! - [`utils`]: Grid table rendering
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod parsing;
pub mod report;
pub mod utils;

pub use crate::core::flags::{FlagBit, FlagCategory, SamFlag};
pub use crate::core::header::{AnnotatedTag, HeaderType};
pub use crate::parsing::sam::ParseError;
pub use crate::report::flag_tally::FlagTally;
pub use crate::report::header_annotation::{annotate_header, HeaderReport};
