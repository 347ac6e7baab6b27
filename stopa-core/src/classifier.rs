//! Positional matching of stress patterns against foot templates
//!
//! Each foot constrains only its weak slots; the strong slots may hold any
//! mark. Templates are tried in a fixed order and the first full match wins,
//! so a pattern that is weak everywhere is an iamb.

use crate::meter::MeterType;
use crate::pattern::Pattern;
use crate::stress::StressMark;

/// A set of pattern positions `start, start + step, ...` and what they accept
#[derive(Clone, Copy)]
struct SlotCheck {
    start: usize,
    step: usize,
    accepts: fn(StressMark) -> bool,
}

impl SlotCheck {
    const fn new(start: usize, step: usize, accepts: fn(StressMark) -> bool) -> Self {
        Self {
            start,
            step,
            accepts,
        }
    }

    fn holds(&self, pattern: &Pattern) -> bool {
        pattern.slots(self.start, self.step).all(self.accepts)
    }
}

/// Weak-slot constraints of one foot
struct FootRule {
    meter: MeterType,
    checks: &'static [SlotCheck],
}

impl FootRule {
    fn matches(&self, pattern: &Pattern) -> bool {
        self.checks.iter().all(|check| check.holds(pattern))
    }
}

const WEAK2: fn(StressMark) -> bool = StressMark::is_weak_disyllabic;
const WEAK3A: fn(StressMark) -> bool = StressMark::is_weak_trisyllabic_leading;
const WEAK3B: fn(StressMark) -> bool = StressMark::is_weak_trisyllabic_trailing;

/// Templates in priority order
const RULES: [FootRule; 5] = [
    FootRule {
        meter: MeterType::Iamb,
        checks: &[SlotCheck::new(0, 2, WEAK2)],
    },
    FootRule {
        meter: MeterType::Choree,
        checks: &[SlotCheck::new(1, 2, WEAK2)],
    },
    FootRule {
        meter: MeterType::Dactyl,
        checks: &[SlotCheck::new(1, 3, WEAK3A), SlotCheck::new(2, 3, WEAK3B)],
    },
    FootRule {
        meter: MeterType::Amphibrach,
        checks: &[SlotCheck::new(0, 3, WEAK3B), SlotCheck::new(2, 3, WEAK3A)],
    },
    FootRule {
        meter: MeterType::Anapest,
        checks: &[SlotCheck::new(0, 3, WEAK3A), SlotCheck::new(1, 3, WEAK3B)],
    },
];

/// Classify a pattern into a metrical foot
///
/// Total and deterministic: falls back to [`MeterType::Unknown`].
pub fn classify(pattern: &Pattern) -> MeterType {
    RULES
        .iter()
        .find(|rule| rule.matches(pattern))
        .map(|rule| rule.meter)
        .unwrap_or(MeterType::Unknown)
}

/// Stateless classifier handle for callers that want a value to pass around
#[derive(Debug, Clone, Copy, Default)]
pub struct MeterClassifier;

impl MeterClassifier {
    /// Classify a pattern, see [`classify`]
    pub fn classify(&self, pattern: &Pattern) -> MeterType {
        classify(pattern)
    }

    /// Every foot whose template the pattern satisfies, in priority order
    ///
    /// Useful for explaining why a line got its label; the first entry is
    /// what [`classify`] returns.
    pub fn candidates(&self, pattern: &Pattern) -> Vec<MeterType> {
        RULES
            .iter()
            .filter(|rule| rule.matches(pattern))
            .map(|rule| rule.meter)
            .collect()
    }
}
