//! End-to-end tests for the analysis pipeline

use std::cell::Cell;
use std::fs;
use stopa_core::{
    analyze, classify, LabelStyle, MeterType, NoAnnotation, Pattern, Poem, PoemError,
    PoemReport, StressAnnotator, StressMark,
};
use tempfile::TempDir;

/// Annotator that looks words up in a tiny fixed table and counts calls
struct TableAnnotator {
    table: &'static [(&'static str, &'static str)],
    calls: Cell<usize>,
}

impl TableAnnotator {
    fn new(table: &'static [(&'static str, &'static str)]) -> Self {
        Self {
            table,
            calls: Cell::new(0),
        }
    }
}

impl StressAnnotator for TableAnnotator {
    fn annotate(&self, text: &str) -> Option<String> {
        self.calls.set(self.calls.get() + 1);
        let mut annotated = text.to_string();
        for (plain, stressed) in self.table {
            annotated = annotated.replace(plain, stressed);
        }
        Some(annotated)
    }
}

const SHEVCHENKO: &str = "Реве́ та сто́гне Дні́пр широ́кий,
Серди́тий ві́тер завива́,
Додо́лу ве́рби гне,
Висо́кі хви́лі підійма́.";

#[test]
fn test_iambic_poem() {
    let poem = Poem::from_text(SHEVCHENKO, &NoAnnotation).unwrap();

    let patterns: Vec<String> = poem
        .lines()
        .iter()
        .map(|line| line.pattern().unwrap().to_string())
        .collect();
    assert_eq!(patterns, ["142312151", "15131115", "151312", "15131115"]);

    assert_eq!(poem.meter(), MeterType::Iamb);
    assert_eq!(poem.probability(), 1.0);
    assert_eq!(
        LabelStyle::English.summary(&poem.verdict()),
        "Meter: iamb, probability 1"
    );
}

#[test]
fn test_annotation_is_applied_once_to_the_whole_text() {
    let annotator = TableAnnotator::new(&[("мама", "ма́ма"), ("рама", "ра́ма")]);
    let poem = Poem::from_text("мама рама\nмама мама\nрама", &annotator).unwrap();

    assert_eq!(annotator.calls.get(), 1);
    assert!(!poem.fell_back());
    assert_eq!(poem.annotated_text(), "ма́ма ра́ма\nма́ма ма́ма\nра́ма");
    assert_eq!(poem.meter(), MeterType::Choree);
    assert_eq!(poem.verdict().matching, 3);
}

#[test]
fn test_fallback_classifies_raw_text_verbatim() {
    let raw = "Ой у лузі червона калина\nпохилилася";
    let poem = Poem::from_text(raw, &NoAnnotation).unwrap();

    assert!(poem.fell_back());
    assert_eq!(poem.annotated_text(), raw);
    assert!(!poem.annotated_text().contains('\u{301}'));

    // without marks every vowel is unstressed or a lone syllable
    for line in poem.lines() {
        assert!(line
            .pattern()
            .unwrap()
            .iter()
            .all(|m| matches!(m, StressMark::Unstressed | StressMark::OneSyllable)));
    }
    assert_eq!(poem.meter(), MeterType::Iamb);
}

#[test]
fn test_majority_over_three_lines() {
    // two iambic lines and one choreic line
    let poem = Poem::from_text("вода́ вода́\nвода́ вода́\nма́ма ма́ма", &NoAnnotation).unwrap();
    let verdict = poem.verdict();
    assert_eq!(verdict.meter, MeterType::Iamb);
    assert_eq!(verdict.matching, 2);
    assert_eq!(verdict.classified, 3);
    assert!((poem.probability() - 2.0 / 3.0).abs() < 1e-12);
}

#[test]
fn test_poem_without_vowels_is_an_error() {
    let result = Poem::from_text("---\n\n***\n12345", &NoAnnotation);
    assert!(matches!(result, Err(PoemError::EmptyResult)));
}

#[test]
fn test_poem_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("shevchenko.txt");
    fs::write(&path, SHEVCHENKO).unwrap();

    let poem = Poem::builder().file(&path).build(&NoAnnotation).unwrap();
    assert_eq!(poem.text(), SHEVCHENKO);
    assert_eq!(poem.lines().len(), 4);

    let poem = Poem::from_file(&path, &NoAnnotation).unwrap();
    assert_eq!(poem.meter(), MeterType::Iamb);
}

#[test]
fn test_missing_file_and_missing_input() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.txt");

    assert!(matches!(
        Poem::from_file(&path, &NoAnnotation),
        Err(PoemError::MissingFile { .. })
    ));
    assert!(matches!(
        Poem::builder().build(&NoAnnotation),
        Err(PoemError::Configuration)
    ));
}

#[test]
fn test_invalid_utf8_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("latin1.txt");
    fs::write(&path, [0xff, 0xfe, 0x00, 0xe0]).unwrap();

    assert!(matches!(
        Poem::from_file(&path, &NoAnnotation),
        Err(PoemError::Io { .. })
    ));
}

#[test]
fn test_documented_classifier_examples() {
    let cases = [
        ("11", MeterType::Iamb),
        ("31", MeterType::Choree),
        ("331", MeterType::Dactyl),
    ];
    for (digits, expected) in cases {
        let pattern: Pattern = digits.parse().unwrap();
        assert_eq!(classify(&pattern), expected, "pattern {digits}");
    }
}

#[test]
fn test_vowelless_lines_have_no_pattern_regardless_of_length() {
    for len in [0, 1, 10, 1000] {
        let line = "бв, ".repeat(len);
        assert!(analyze(&line).is_none());
    }
}

#[test]
fn test_report_summary_and_patterns() {
    let poem = Poem::from_text("ма́ма ма́ма\nвода́ вода́\nма́ма ма́ма", &NoAnnotation).unwrap();
    let report = PoemReport::from_poem(&poem);
    assert_eq!(
        report.summary(LabelStyle::English),
        "Meter: choree, probability 0.6666666666666666"
    );
    assert_eq!(report.lines[2].pattern.to_string(), "3131");
}
