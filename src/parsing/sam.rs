use std::path::Path;
use thiserror::Error;
use tracing::debug;

use crate::core::flags::SamFlag;
use crate::core::header::{HeaderLine, HeaderTag, HeaderType};

/// Index of the FLAG column in an alignment record
pub const FLAG_FIELD: usize = 1;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Line {line}: missing FLAG field")]
    MissingFlagField { line: usize },

    #[error("Line {line}: invalid FLAG value '{value}'")]
    InvalidFlag { line: usize, value: String },

    #[error("Line {line}: FLAG value {value} does not fit in 12 bits")]
    FlagOutOfRange { line: usize, value: u32 },

    #[error("Header line {line}: malformed tag '{tag}' (expected KEY:VALUE)")]
    MalformedTag { line: usize, tag: String },

    #[error("Header line {line}: unknown header type '{header_type}'")]
    UnknownHeaderType { line: usize, header_type: String },
}

/// Read a whole SAM file into memory.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read.
pub fn read_sam_text(path: &Path) -> Result<String, ParseError> {
    let text = std::fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = text.len(), "Read SAM file");
    Ok(text)
}

/// Whether a line is treated as a header by the flag scan: its first
/// tab-delimited field contains `@` anywhere.
#[must_use]
pub fn is_header_record(line: &str) -> bool {
    line.split('\t').next().is_some_and(|field| field.contains('@'))
}

/// Extract and decode the FLAG column of an alignment record.
///
/// `line_number` is the 1-based position in the file, used in errors.
///
/// # Errors
///
/// Returns `ParseError::MissingFlagField` if the record has fewer than two
/// fields, `ParseError::InvalidFlag` if the field is not a non-negative
/// integer, or `ParseError::FlagOutOfRange` if it does not fit in 12 bits.
pub fn parse_flag_field(line: &str, line_number: usize) -> Result<SamFlag, ParseError> {
    let raw = line
        .split('\t')
        .nth(FLAG_FIELD)
        .ok_or(ParseError::MissingFlagField { line: line_number })?
        .trim();

    let value: u32 = raw.parse().map_err(|_| ParseError::InvalidFlag {
        line: line_number,
        value: raw.to_string(),
    })?;

    SamFlag::new(value).ok_or(ParseError::FlagOutOfRange {
        line: line_number,
        value,
    })
}

/// The contiguous block of lines starting with `@` at the top of the file.
///
/// Scanning stops at the first line that does not start with `@`.
pub fn header_block<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
    lines
        .into_iter()
        .take_while(|line| line.starts_with('@'))
        .collect()
}

/// Split one header line into its type and tags.
///
/// `index` is the 1-based position of the line within the header block.
/// `@CO` lines carry free text, so the whole payload becomes a single `CO`
/// tag rather than being split on `:`.
///
/// # Errors
///
/// Returns `ParseError::UnknownHeaderType` if the record type is not one of
/// `@HD`, `@SQ`, `@RG`, `@PG` or `@CO`, or `ParseError::MalformedTag` if a
/// field has no `:` separator.
pub fn parse_header_line(line: &str, index: usize) -> Result<HeaderLine, ParseError> {
    let mut fields = line.split('\t');
    let type_tag = fields.next().unwrap_or_default();

    let header_type =
        HeaderType::from_tag(type_tag).ok_or_else(|| ParseError::UnknownHeaderType {
            line: index,
            header_type: type_tag.to_string(),
        })?;

    let tags = if header_type == HeaderType::Comment {
        let comment = fields.collect::<Vec<_>>().join("\t");
        vec![HeaderTag::new("CO", comment.trim())]
    } else {
        fields
            .filter(|field| !field.trim().is_empty())
            .map(|field| {
                field
                    .split_once(':')
                    .map(|(key, value)| HeaderTag::new(key, value.trim()))
                    .ok_or_else(|| ParseError::MalformedTag {
                        line: index,
                        tag: field.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?
    };

    Ok(HeaderLine {
        header_type,
        index,
        tags,
    })
}
