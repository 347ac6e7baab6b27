//! Per-syllable stress classification

use core::fmt;

/// Stress classification of a single vowel inside a word
///
/// The discriminant is the digit used when a pattern is rendered as text,
/// so the values must not be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[repr(u8)]
pub enum StressMark {
    /// Word without vowels (only a stray stress mark survived reduction)
    Unknown = 0,
    /// Unmarked vowel of a polysyllabic word
    Unstressed = 1,
    /// The only vowel of a monosyllabic word
    OneSyllable = 2,
    /// Stressed first vowel of a two-syllable word
    TwoSyllablesFirstStressed = 3,
    /// Stressed second vowel of a two-syllable word
    TwoSyllablesSecondStressed = 4,
    /// Stressed vowel of a word with three or more syllables
    MoreThanTwoSyllables = 5,
}

impl StressMark {
    /// All marks in ordinal order
    pub const ALL: [StressMark; 6] = [
        StressMark::Unknown,
        StressMark::Unstressed,
        StressMark::OneSyllable,
        StressMark::TwoSyllablesFirstStressed,
        StressMark::TwoSyllablesSecondStressed,
        StressMark::MoreThanTwoSyllables,
    ];

    /// Ordinal used in the textual pattern report
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Digit character for the textual pattern report
    pub fn digit(self) -> char {
        char::from(b'0' + self.ordinal())
    }

    /// Parse a report digit back into a mark
    pub fn from_digit(ch: char) -> Option<Self> {
        let value = ch.to_digit(10)?;
        Self::ALL.get(value as usize).copied()
    }

    /// Acceptable in the weak slot of a two-syllable foot
    pub fn is_weak_disyllabic(self) -> bool {
        matches!(self, StressMark::Unstressed | StressMark::OneSyllable)
    }

    /// Weak-slot set that also admits a first-stressed disyllable
    pub fn is_weak_trisyllabic_leading(self) -> bool {
        self.is_weak_disyllabic() || self == StressMark::TwoSyllablesFirstStressed
    }

    /// Weak-slot set that also admits a second-stressed disyllable
    pub fn is_weak_trisyllabic_trailing(self) -> bool {
        self.is_weak_disyllabic() || self == StressMark::TwoSyllablesSecondStressed
    }
}

impl fmt::Display for StressMark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.digit())
    }
}
