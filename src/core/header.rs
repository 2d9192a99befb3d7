use crate::core::reference;

/// Description used when a tag has no entry in the reference table
pub const UNKNOWN_TAG_DESCRIPTION: &str = "Description not found";

/// SAM header record type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderType {
    /// `@HD` file-level metadata
    Header,
    /// `@SQ` reference sequence dictionary
    ReferenceSequence,
    /// `@RG` read group
    ReadGroup,
    /// `@PG` program
    Program,
    /// `@CO` free-text comment
    Comment,
}

impl HeaderType {
    #[cfg(test)]
    pub const ALL: [Self; 5] = [
        Self::Header,
        Self::ReferenceSequence,
        Self::ReadGroup,
        Self::Program,
        Self::Comment,
    ];

    /// Parse a header type tag such as `@SQ`.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "@HD" => Some(Self::Header),
            "@SQ" => Some(Self::ReferenceSequence),
            "@RG" => Some(Self::ReadGroup),
            "@PG" => Some(Self::Program),
            "@CO" => Some(Self::Comment),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Header => "@HD",
            Self::ReferenceSequence => "@SQ",
            Self::ReadGroup => "@RG",
            Self::Program => "@PG",
            Self::Comment => "@CO",
        }
    }

    /// What this kind of header line holds.
    #[must_use]
    pub fn description(self) -> &'static str {
        reference::type_description(self)
    }

    /// Look up the description of a tag on this header type.
    #[must_use]
    pub fn tag_description(self, key: &str) -> Option<&'static str> {
        reference::tags(self)
            .iter()
            .find(|(tag, _)| *tag == key)
            .map(|(_, description)| *description)
    }
}

impl std::fmt::Display for HeaderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A `KEY:VALUE` field from a header line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderTag {
    pub key: String,
    pub value: String,
}

impl HeaderTag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// One line of the header block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderLine {
    pub header_type: HeaderType,

    /// 1-based position among header lines
    pub index: usize,

    pub tags: Vec<HeaderTag>,
}

/// A header tag together with its reference description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedTag {
    pub header_type: HeaderType,
    pub line: usize,
    pub key: String,
    pub value: String,
    pub description: &'static str,
}

impl AnnotatedTag {
    /// Whether the reference table had no entry for this tag.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.description == UNKNOWN_TAG_DESCRIPTION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_type_round_trip() {
        for header_type in HeaderType::ALL {
            assert_eq!(HeaderType::from_tag(header_type.as_str()), Some(header_type));
        }
        assert_eq!(HeaderType::from_tag("@XX"), None);
        assert_eq!(HeaderType::from_tag("HD"), None);
    }

    #[test]
    fn test_tag_description() {
        assert_eq!(
            HeaderType::ReferenceSequence.tag_description("SP"),
            Some("Species.")
        );
        assert_eq!(
            HeaderType::Program.tag_description("PN"),
            Some("Program name")
        );
        assert!(HeaderType::ReferenceSequence.tag_description("XX").is_none());
        // tags are scoped to their header type
        assert!(HeaderType::Header.tag_description("SN").is_none());
        assert!(HeaderType::Comment.tag_description("CO").is_none());
    }

    #[test]
    fn test_every_type_has_description() {
        for header_type in HeaderType::ALL {
            assert!(!header_type.description().is_empty());
        }
    }
}
