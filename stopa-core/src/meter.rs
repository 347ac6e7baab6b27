//! Metrical foot labels

use core::fmt;
use core::str::FromStr;

/// Metrical foot of a line or of a whole poem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MeterType {
    /// Weak-strong
    Iamb,
    /// Strong-weak
    Choree,
    /// Strong-weak-weak
    Dactyl,
    /// Weak-strong-weak
    Amphibrach,
    /// Weak-weak-strong
    Anapest,
    /// No template matched
    Unknown,
}

impl MeterType {
    /// All meters in classification priority order, `Unknown` last
    pub const ALL: [MeterType; 6] = [
        MeterType::Iamb,
        MeterType::Choree,
        MeterType::Dactyl,
        MeterType::Amphibrach,
        MeterType::Anapest,
        MeterType::Unknown,
    ];

    /// English label used in reports
    pub fn label(&self) -> &'static str {
        match self {
            MeterType::Iamb => "iamb",
            MeterType::Choree => "choree",
            MeterType::Dactyl => "dactyl",
            MeterType::Amphibrach => "amphibrach",
            MeterType::Anapest => "anapest",
            MeterType::Unknown => "unknown",
        }
    }

    /// Ukrainian label
    pub fn native_label(&self) -> &'static str {
        match self {
            MeterType::Iamb => "ямб",
            MeterType::Choree => "хорей",
            MeterType::Dactyl => "дактиль",
            MeterType::Amphibrach => "амфібрахій",
            MeterType::Anapest => "анапест",
            MeterType::Unknown => "невизначений",
        }
    }

    /// Syllables per foot, `None` for `Unknown`
    pub fn foot_length(&self) -> Option<usize> {
        match self {
            MeterType::Iamb | MeterType::Choree => Some(2),
            MeterType::Dactyl | MeterType::Amphibrach | MeterType::Anapest => Some(3),
            MeterType::Unknown => None,
        }
    }
}

impl fmt::Display for MeterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a meter label is not recognised
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown meter label: {0}")]
pub struct ParseMeterError(pub String);

impl FromStr for MeterType {
    type Err = ParseMeterError;

    /// Accepts both English and Ukrainian labels, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        MeterType::ALL
            .into_iter()
            .find(|m| m.label() == wanted || m.native_label() == wanted)
            .ok_or_else(|| ParseMeterError(s.to_string()))
    }
}
