use tracing::debug;

use crate::core::flags::{FlagBit, FlagCategory, SamFlag, FLAG_WIDTH};
use crate::parsing::sam::{is_header_record, parse_flag_field, ParseError};

/// Per-category record counts for one SAM file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagTally {
    /// Indexed by bit-string position
    bits: [u64; FLAG_WIDTH],
    singletons: u64,
    itself_and_mate_mapped: u64,
    records: u64,
}

impl FlagTally {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one record.
    pub fn add(&mut self, flag: SamFlag) {
        for bit in flag.set_bits() {
            self.bits[bit.position()] += 1;
        }

        match flag.pairing_category() {
            Some(FlagCategory::Singletons) => self.singletons += 1,
            Some(FlagCategory::ItselfAndMateMapped) => self.itself_and_mate_mapped += 1,
            Some(FlagCategory::Bit(_)) | None => {}
        }

        self.records += 1;
    }

    #[must_use]
    pub fn count(&self, category: FlagCategory) -> u64 {
        match category {
            FlagCategory::Bit(bit) => self.bits[bit.position()],
            FlagCategory::Singletons => self.singletons,
            FlagCategory::ItselfAndMateMapped => self.itself_and_mate_mapped,
        }
    }

    /// Number of records counted.
    #[must_use]
    pub fn records(&self) -> u64 {
        self.records
    }

    /// All categories with their counts, in report order.
    pub fn rows(&self) -> impl Iterator<Item = (FlagCategory, u64)> + '_ {
        FlagCategory::REPORT_ORDER
            .into_iter()
            .map(|category| (category, self.count(category)))
    }

    /// Tally the FLAG column of every alignment record in `text`.
    ///
    /// Lines whose first field contains `@` are skipped. Any other line,
    /// blank ones included, must carry a FLAG field.
    ///
    /// # Errors
    ///
    /// Returns the first `ParseError` hit while decoding a FLAG field; no
    /// partial tally is returned.
    pub fn from_sam_text(text: &str) -> Result<Self, ParseError> {
        let mut tally = Self::new();
        let mut skipped = 0usize;

        for (i, line) in text.lines().enumerate() {
            if is_header_record(line) {
                skipped += 1;
                continue;
            }
            tally.add(parse_flag_field(line, i + 1)?);
        }

        debug!(
            records = tally.records,
            skipped, "Tallied FLAG bits across records"
        );

        Ok(tally)
    }
}

impl Extend<SamFlag> for FlagTally {
    fn extend<T: IntoIterator<Item = SamFlag>>(&mut self, iter: T) {
        for flag in iter {
            self.add(flag);
        }
    }
}

impl FromIterator<SamFlag> for FlagTally {
    fn from_iter<T: IntoIterator<Item = SamFlag>>(iter: T) -> Self {
        let mut tally = Self::new();
        tally.extend(iter);
        tally
    }
}

/// Shorthand for the count of a raw FLAG bit.
impl std::ops::Index<FlagBit> for FlagTally {
    type Output = u64;

    fn index(&self, bit: FlagBit) -> &u64 {
        &self.bits[bit.position()]
    }
}
