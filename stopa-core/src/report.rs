//! Report data for callers that print or serialize results

use crate::aggregate::MeterVerdict;
use crate::line::Line;
use crate::meter::MeterType;
use crate::pattern::Pattern;
use crate::poem::Poem;

/// Which label set to print meters with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LabelStyle {
    /// `iamb`, `choree`, ...
    #[default]
    English,
    /// `ямб`, `хорей`, ...
    Native,
}

impl LabelStyle {
    /// Label of `meter` in this style
    pub fn label(self, meter: MeterType) -> &'static str {
        match self {
            LabelStyle::English => meter.label(),
            LabelStyle::Native => meter.native_label(),
        }
    }

    /// Human-readable poem summary, e.g. `Meter: choree, probability 0.8`
    ///
    /// The probability uses `f64` `Display`, so a whole value prints as
    /// `probability 1`, not `probability 1.0`.
    pub fn summary(self, verdict: &MeterVerdict) -> String {
        let label = self.label(verdict.meter);
        let probability = verdict.probability();
        match self {
            LabelStyle::English => format!("Meter: {label}, probability {probability}"),
            LabelStyle::Native => format!("Віршовий розмір: {label}, ймовірність {probability}"),
        }
    }
}

/// One classified line
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineReport {
    /// Line text as classified (with stress marks when annotated)
    pub text: String,
    /// Stress pattern digits
    pub pattern: Pattern,
    /// Line meter
    pub meter: MeterType,
}

impl LineReport {
    /// Build from a classified line, `None` for lines without a pattern
    pub fn from_line(line: &Line) -> Option<Self> {
        Some(Self {
            text: line.raw().to_string(),
            pattern: line.pattern()?.clone(),
            meter: line.meter()?,
        })
    }

    /// `pattern: meter` rendering
    pub fn render(&self, style: LabelStyle) -> String {
        format!("{}: {}", self.pattern, style.label(self.meter))
    }
}

/// Line count for one meter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeterCount {
    /// Meter
    pub meter: MeterType,
    /// Lines classified as `meter`
    pub lines: usize,
}

/// Full report for a poem
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoemReport {
    /// Classified lines in order
    pub lines: Vec<LineReport>,
    /// Dominant meter
    pub meter: MeterType,
    /// Share of classified lines in the dominant meter
    pub probability: f64,
    /// Lines in the dominant meter
    pub matching: usize,
    /// Lines with a classification
    pub classified: usize,
    /// Counts per meter in first-seen order
    pub distribution: Vec<MeterCount>,
    /// Whether stress annotation was unavailable
    pub annotation_fallback: bool,
}

impl PoemReport {
    /// Build the report of an analyzed poem
    pub fn from_poem(poem: &Poem) -> Self {
        let verdict = poem.verdict();
        Self {
            lines: poem.lines().iter().filter_map(LineReport::from_line).collect(),
            meter: verdict.meter,
            probability: verdict.probability(),
            matching: verdict.matching,
            classified: verdict.classified,
            distribution: poem
                .tally()
                .entries()
                .iter()
                .map(|&(meter, lines)| MeterCount { meter, lines })
                .collect(),
            annotation_fallback: poem.fell_back(),
        }
    }

    /// Verdict the report was built from
    pub fn verdict(&self) -> MeterVerdict {
        MeterVerdict {
            meter: self.meter,
            matching: self.matching,
            classified: self.classified,
        }
    }

    /// Summary line in the given style
    pub fn summary(&self, style: LabelStyle) -> String {
        style.summary(&self.verdict())
    }
}
