use noodles::sam::alignment::record::Flags;

/// Number of FLAG bits rendered in the bit string.
pub const FLAG_WIDTH: usize = 12;

/// Largest FLAG value that fits in [`FLAG_WIDTH`] bits.
pub const MAX_FLAG: u16 = (1 << FLAG_WIDTH) - 1;

/// One of the twelve named SAM FLAG bits.
///
/// Variants are declared in bit-string order: position 0 is the most
/// significant bit (`SUPPLEMENTARY`, 0x800) and position 11 the least
/// significant (`PAIRED`, 0x1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagBit {
    Supplementary,
    Duplicate,
    QcFail,
    Secondary,
    Read2,
    Read1,
    MateReverse,
    Reverse,
    MateUnmapped,
    Unmapped,
    ProperPair,
    Paired,
}

impl FlagBit {
    /// All bits, indexed by their position in the bit string.
    pub const ALL: [Self; FLAG_WIDTH] = [
        Self::Supplementary,
        Self::Duplicate,
        Self::QcFail,
        Self::Secondary,
        Self::Read2,
        Self::Read1,
        Self::MateReverse,
        Self::Reverse,
        Self::MateUnmapped,
        Self::Unmapped,
        Self::ProperPair,
        Self::Paired,
    ];

    /// Position of this bit in the 12-character bit string (0 = leftmost).
    #[must_use]
    pub fn position(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Supplementary => "SUPPLEMENTARY",
            Self::Duplicate => "DUP",
            Self::QcFail => "QCFAIL",
            Self::Secondary => "SECONDARY",
            Self::Read2 => "READ2",
            Self::Read1 => "READ1",
            Self::MateReverse => "MREVERSE",
            Self::Reverse => "REVERSE",
            Self::MateUnmapped => "MUNMAP",
            Self::Unmapped => "UNMAP",
            Self::ProperPair => "PROPER_PAIR",
            Self::Paired => "PAIRED",
        }
    }

    /// The SAM mask for this bit.
    #[must_use]
    pub fn flag(self) -> Flags {
        match self {
            Self::Supplementary => Flags::SUPPLEMENTARY,
            Self::Duplicate => Flags::DUPLICATE,
            Self::QcFail => Flags::QC_FAIL,
            Self::Secondary => Flags::SECONDARY,
            Self::Read2 => Flags::LAST_SEGMENT,
            Self::Read1 => Flags::FIRST_SEGMENT,
            Self::MateReverse => Flags::MATE_REVERSE_COMPLEMENTED,
            Self::Reverse => Flags::REVERSE_COMPLEMENTED,
            Self::MateUnmapped => Flags::MATE_UNMAPPED,
            Self::Unmapped => Flags::UNMAPPED,
            Self::ProperPair => Flags::PROPERLY_SEGMENTED,
            Self::Paired => Flags::SEGMENTED,
        }
    }
}

impl std::fmt::Display for FlagBit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A row of the flag summary: either a raw FLAG bit or one of the two
/// pairing categories derived from several bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagCategory {
    Bit(FlagBit),
    /// Paired read that is mapped while its mate is unmapped
    Singletons,
    /// Paired read where both the read and its mate are mapped
    ItselfAndMateMapped,
}

impl FlagCategory {
    /// Categories in report order.
    pub const REPORT_ORDER: [Self; FLAG_WIDTH + 2] = [
        Self::Bit(FlagBit::Paired),
        Self::Bit(FlagBit::ProperPair),
        Self::Bit(FlagBit::Unmapped),
        Self::Bit(FlagBit::MateUnmapped),
        Self::Bit(FlagBit::Reverse),
        Self::Bit(FlagBit::MateReverse),
        Self::Bit(FlagBit::Read1),
        Self::Bit(FlagBit::Read2),
        Self::Bit(FlagBit::Secondary),
        Self::Bit(FlagBit::QcFail),
        Self::Bit(FlagBit::Duplicate),
        Self::Bit(FlagBit::Supplementary),
        Self::Singletons,
        Self::ItselfAndMateMapped,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Bit(bit) => bit.name(),
            Self::Singletons => "SINGLETONS",
            Self::ItselfAndMateMapped => "ITSELF_AND_MATE_MAPPED",
        }
    }
}

impl std::fmt::Display for FlagCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A FLAG value known to fit in [`FLAG_WIDTH`] bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamFlag(u16);

impl SamFlag {
    /// Returns `None` when `value` does not fit in 12 bits.
    #[must_use]
    pub fn new(value: u32) -> Option<Self> {
        u16::try_from(value)
            .ok()
            .filter(|v| *v <= MAX_FLAG)
            .map(Self)
    }

    #[must_use]
    pub fn flags(self) -> Flags {
        Flags::from(self.0)
    }

    #[must_use]
    pub fn is_set(self, bit: FlagBit) -> bool {
        self.flags().contains(bit.flag())
    }

    /// Fixed-width binary rendering, most significant bit first.
    ///
    /// ```
    /// use sam_inspect::core::flags::SamFlag;
    ///
    /// let flag = SamFlag::new(2145).unwrap();
    /// assert_eq!(flag.to_bit_string(), "100001100001");
    /// ```
    #[must_use]
    pub fn to_bit_string(self) -> String {
        format!("{:0width$b}", self.0, width = FLAG_WIDTH)
    }

    /// Bits set in this flag, in bit-string order.
    pub fn set_bits(self) -> impl Iterator<Item = FlagBit> {
        FlagBit::ALL.into_iter().filter(move |bit| self.is_set(*bit))
    }

    /// The derived pairing category for this record, if any.
    ///
    /// Only paired reads that are themselves mapped are considered; the
    /// mate's mapping state then picks exactly one category.
    #[must_use]
    pub fn pairing_category(self) -> Option<FlagCategory> {
        if !self.is_set(FlagBit::Paired) || self.is_set(FlagBit::Unmapped) {
            return None;
        }

        if self.is_set(FlagBit::MateUnmapped) {
            Some(FlagCategory::Singletons)
        } else {
            Some(FlagCategory::ItselfAndMateMapped)
        }
    }
}
