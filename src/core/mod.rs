//! Core data types for SAM flag and header inspection.
//!
//! - [`flags`]: The twelve named FLAG bits, the derived pairing categories and
//!   a range-checked [`flags::SamFlag`] value
//! - [`header`]: Header line types, tags and annotated tags
//! - [`reference`]: The static table of header type and tag descriptions
//!
//! ## FLAG bits
//!
//! | Position | Name          | Mask  |
//! |----------|---------------|-------|
//! | 0        | SUPPLEMENTARY | 0x800 |
//! | 1        | DUP           | 0x400 |
//! | 2        | QCFAIL        | 0x200 |
//! | 3        | SECONDARY     | 0x100 |
//! | 4        | READ2         | 0x80  |
//! | 5        | READ1         | 0x40  |
//! | 6        | MREVERSE      | 0x20  |
//! | 7        | REVERSE       | 0x10  |
//! | 8        | MUNMAP        | 0x8   |
//! | 9        | UNMAP         | 0x4   |
//! | 10       | PROPER_PAIR   | 0x2   |
//! | 11       | PAIRED        | 0x1   |

pub mod flags;
pub mod header;
pub mod reference;
