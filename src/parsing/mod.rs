//! Line-oriented SAM text parsing.
//!
//! Files are read into memory in one go and scanned line by line:
//!
//! - **Alignment records**: the FLAG column (index 1) is decoded into a
//!   [`SamFlag`](crate::core::flags::SamFlag)
//! - **Header lines**: the leading block of `@` lines is split into a header
//!   type and `KEY:VALUE` tags
//!
//! ## Example
//!
//! ```rust
//! use sam_inspect::parsing::sam::{header_block, parse_header_line};
//!
//! let text = "@HD\tVN:1.6\tSO:coordinate\nread1\t0\tchr1\t1\n";
//! let block = header_block(text.lines());
//! let line = parse_header_line(block[0], 1).unwrap();
//! assert_eq!(line.tags.len(), 2);
//! ```

pub mod sam;
