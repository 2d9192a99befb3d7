use tracing::debug;

use crate::core::header::{AnnotatedTag, HeaderLine, HeaderType, UNKNOWN_TAG_DESCRIPTION};
use crate::parsing::sam::{header_block, parse_header_line, ParseError};

/// Result of annotating a SAM header
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderReport {
    /// One entry per tag, in file order
    Annotated(Vec<AnnotatedTag>),
    /// The file does not start with any `@` lines
    NoHeaders,
}

/// Attach reference descriptions to every tag of a header line.
#[must_use]
pub fn annotate_line(line: &HeaderLine) -> Vec<AnnotatedTag> {
    line.tags
        .iter()
        .map(|tag| {
            let description = if line.header_type == HeaderType::Comment {
                line.header_type.description()
            } else {
                line.header_type
                    .tag_description(&tag.key)
                    .unwrap_or_else(|| {
                        debug!(
                            header_type = %line.header_type,
                            tag = %tag.key,
                            "Tag not in reference table"
                        );
                        UNKNOWN_TAG_DESCRIPTION
                    })
            };

            AnnotatedTag {
                header_type: line.header_type,
                line: line.index,
                key: tag.key.clone(),
                value: tag.value.clone(),
                description,
            }
        })
        .collect()
}

/// Parse and annotate the header block at the top of `text`.
///
/// Only the leading run of `@` lines is inspected; anything after the first
/// other line is ignored.
///
/// # Errors
///
/// Returns `ParseError::UnknownHeaderType` or `ParseError::MalformedTag` for
/// the first header line that cannot be parsed.
pub fn annotate_header(text: &str) -> Result<HeaderReport, ParseError> {
    let block = header_block(text.lines());
    if block.is_empty() {
        return Ok(HeaderReport::NoHeaders);
    }

    let mut tags = Vec::new();
    for (i, raw) in block.iter().enumerate() {
        let line = parse_header_line(raw, i + 1)?;
        tags.extend(annotate_line(&line));
    }

    debug!(
        header_lines = block.len(),
        tags = tags.len(),
        "Annotated header block"
    );

    Ok(HeaderReport::Annotated(tags))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn annotated(text: &str) -> Vec<AnnotatedTag> {
        match annotate_header(text).unwrap() {
            HeaderReport::Annotated(tags) => tags,
            HeaderReport::NoHeaders => panic!("expected header tags"),
        }
    }

    #[test]
    fn test_hd_line() {
        let tags = annotated("@HD\tVN:1.6\tSO:coordinate\nread1\t0\tchr1\n");
        assert_eq!(tags.len(), 2);

        assert_eq!(tags[0].header_type, HeaderType::Header);
        assert_eq!(tags[0].line, 1);
        assert_eq!(tags[0].key, "VN");
        assert_eq!(tags[0].value, "1.6");
        assert_eq!(
            Some(tags[0].description),
            HeaderType::Header.tag_description("VN")
        );

        assert_eq!(tags[1].line, 1);
        assert_eq!(tags[1].key, "SO");
        assert_eq!(tags[1].value, "coordinate");
        assert!(tags[1].description.starts_with("Sorting order of alignments."));
    }

    #[test]
    fn test_lines_after_records_are_ignored() {
        let tags = annotated("@HD\tVN:1.6\tSO:coordinate\nread1\t0\tchr1\n@XX\tbroken\n");
        assert_eq!(tags.len(), 2);
    }

    #[test]
    fn test_line_index_counts_header_lines() {
        let text = "@HD\tVN:1.6\n@SQ\tSN:chr1\tLN:100\n@SQ\tSN:chr2\tLN:200\n@PG\tID:bwa\tPN:bwa\n";
        let tags = annotated(text);
        let lines: Vec<(HeaderType, usize, &str)> = tags
            .iter()
            .map(|t| (t.header_type, t.line, t.key.as_str()))
            .collect();
        assert_eq!(
            lines,
            vec![
                (HeaderType::Header, 1, "VN"),
                (HeaderType::ReferenceSequence, 2, "SN"),
                (HeaderType::ReferenceSequence, 2, "LN"),
                (HeaderType::ReferenceSequence, 3, "SN"),
                (HeaderType::ReferenceSequence, 3, "LN"),
                (HeaderType::Program, 4, "ID"),
                (HeaderType::Program, 4, "PN"),
            ]
        );
    }

    #[test]
    fn test_unknown_tag_uses_placeholder() {
        let tags = annotated("@SQ\tXX:foo\n");
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].key, "XX");
        assert_eq!(tags[0].value, "foo");
        assert_eq!(tags[0].description, UNKNOWN_TAG_DESCRIPTION);
        assert!(tags[0].is_unknown());
    }

    #[test]
    fn test_value_keeps_later_colons() {
        let tags = annotated("@SQ\tSN:chr1\tUR:http://example.com/ref.fa\n");
        assert_eq!(tags[1].key, "UR");
        assert_eq!(tags[1].value, "http://example.com/ref.fa");
    }

    #[test]
    fn test_comment_line() {
        let tags = annotated("@HD\tVN:1.6\n@CO\tsample: NA12878\n");
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[1].header_type, HeaderType::Comment);
        assert_eq!(tags[1].line, 2);
        assert_eq!(tags[1].key, "CO");
        assert_eq!(tags[1].value, "sample: NA12878");
        assert_eq!(tags[1].description, HeaderType::Comment.description());
    }

    #[test]
    fn test_no_headers() {
        let report = annotate_header("read1\t0\tchr1\n@HD\tVN:1.6\n").unwrap();
        assert_eq!(report, HeaderReport::NoHeaders);
        assert_eq!(annotate_header("").unwrap(), HeaderReport::NoHeaders);
    }

    #[test]
    fn test_unknown_header_type_is_fatal() {
        let err = annotate_header("@HD\tVN:1.6\n@ZZ\tAB:cd\n").unwrap_err();
        assert!(matches!(err, ParseError::UnknownHeaderType { line: 2, .. }));
    }

    #[test]
    fn test_malformed_tag_is_fatal() {
        let err = annotate_header("@RG\tID\n").unwrap_err();
        assert!(matches!(err, ParseError::MalformedTag { line: 1, .. }));
    }
}
