//! Poem-level meter from per-line classifications

use crate::error::{PoemError, Result};
use crate::line::Line;
use crate::meter::MeterType;

/// Meter counts in first-seen order
///
/// The order matters: when two meters share the highest count, the one seen
/// first wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeterTally {
    counts: Vec<(MeterType, usize)>,
    total: usize,
}

impl MeterTally {
    /// Empty tally
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more line of `meter`
    pub fn record(&mut self, meter: MeterType) {
        match self.counts.iter_mut().find(|(seen, _)| *seen == meter) {
            Some((_, count)) => *count += 1,
            None => self.counts.push((meter, 1)),
        }
        self.total += 1;
    }

    /// Number of recorded lines
    pub fn total(&self) -> usize {
        self.total
    }

    /// Count for one meter
    pub fn count(&self, meter: MeterType) -> usize {
        self.counts
            .iter()
            .find(|(seen, _)| *seen == meter)
            .map_or(0, |&(_, count)| count)
    }

    /// `(meter, count)` pairs in first-seen order
    pub fn entries(&self) -> &[(MeterType, usize)] {
        &self.counts
    }

    /// Most frequent meter; ties go to the earliest seen
    pub fn leader(&self) -> Option<(MeterType, usize)> {
        let mut best: Option<(MeterType, usize)> = None;
        for &(meter, count) in &self.counts {
            match best {
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((meter, count)),
            }
        }
        best
    }

    /// Verdict over the recorded lines, failing when nothing was recorded
    pub fn verdict(&self) -> Result<MeterVerdict> {
        let (meter, matching) = self.leader().ok_or(PoemError::EmptyResult)?;
        Ok(MeterVerdict {
            meter,
            matching,
            classified: self.total,
        })
    }
}

impl FromIterator<MeterType> for MeterTally {
    fn from_iter<I: IntoIterator<Item = MeterType>>(iter: I) -> Self {
        let mut tally = MeterTally::new();
        for meter in iter {
            tally.record(meter);
        }
        tally
    }
}

/// Dominant meter of a poem and how many lines agree with it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeterVerdict {
    /// Most frequent line meter
    pub meter: MeterType,
    /// Lines classified as `meter`
    pub matching: usize,
    /// Lines that had a classification at all
    pub classified: usize,
}

impl MeterVerdict {
    /// Share of classified lines that match the verdict, in `[0, 1]`
    pub fn probability(&self) -> f64 {
        self.matching as f64 / self.classified as f64
    }
}

/// Aggregate classified lines into a single meter
///
/// Lines without a classification are skipped and do not count towards the
/// denominator.
pub fn aggregate<'a, I>(lines: I) -> Result<MeterVerdict>
where
    I: IntoIterator<Item = &'a Line>,
{
    lines
        .into_iter()
        .filter_map(Line::meter)
        .collect::<MeterTally>()
        .verdict()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_majority_wins() {
        let tally: MeterTally = [MeterType::Iamb, MeterType::Iamb, MeterType::Choree]
            .into_iter()
            .collect();
        let verdict = tally.verdict().unwrap();
        assert_eq!(verdict.meter, MeterType::Iamb);
        assert_eq!(verdict.matching, 2);
        assert_eq!(verdict.classified, 3);
        assert!((verdict.probability() - 2.0 / 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_tie_goes_to_first_seen() {
        let tally: MeterTally = [
            MeterType::Choree,
            MeterType::Iamb,
            MeterType::Iamb,
            MeterType::Choree,
        ]
        .into_iter()
        .collect();
        assert_eq!(tally.leader(), Some((MeterType::Choree, 2)));
        assert_eq!(
            tally.entries(),
            &[(MeterType::Choree, 2), (MeterType::Iamb, 2)]
        );
    }

    #[test]
    fn test_later_meter_can_overtake() {
        let tally: MeterTally = [
            MeterType::Unknown,
            MeterType::Dactyl,
            MeterType::Dactyl,
        ]
        .into_iter()
        .collect();
        assert_eq!(tally.leader(), Some((MeterType::Dactyl, 2)));
        assert_eq!(tally.count(MeterType::Unknown), 1);
        assert_eq!(tally.count(MeterType::Anapest), 0);
    }

    #[test]
    fn test_empty_tally_fails() {
        let tally = MeterTally::new();
        assert!(tally.leader().is_none());
        assert!(matches!(tally.verdict(), Err(PoemError::EmptyResult)));
    }

    #[test]
    fn test_aggregate_skips_unclassified_lines() {
        let lines = [
            Line::new("вода́ вода́"),
            Line::new("..."),
            Line::new("ма́ма ма́ма"),
            Line::new("вода́ вода́"),
        ];
        let verdict = aggregate(&lines).unwrap();
        assert_eq!(verdict.meter, MeterType::Iamb);
        assert_eq!(verdict.matching, 2);
        assert_eq!(verdict.classified, 3);
    }

    #[test]
    fn test_aggregate_without_classified_lines() {
        let lines = [Line::new(""), Line::new("—")];
        assert!(matches!(aggregate(&lines), Err(PoemError::EmptyResult)));
    }
}
