//! Stress annotation contract
//!
//! An annotator returns the text with [`STRESS_MARK`](crate::alphabet::STRESS_MARK)
//! inserted after the stressed vowel of each polysyllabic word. Annotators
//! own their retries and timeouts; a `None` result means the annotation could
//! not be obtained and the caller falls back to the raw text.

/// Source of stress-annotated text
pub trait StressAnnotator {
    /// Annotate `text`, or `None` if no annotation could be obtained
    fn annotate(&self, text: &str) -> Option<String>;

    /// Short name for logs and reports
    fn name(&self) -> &str {
        "annotator"
    }
}

impl<A: StressAnnotator + ?Sized> StressAnnotator for &A {
    fn annotate(&self, text: &str) -> Option<String> {
        (**self).annotate(text)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<A: StressAnnotator + ?Sized> StressAnnotator for Box<A> {
    fn annotate(&self, text: &str) -> Option<String> {
        (**self).annotate(text)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Annotator that never produces anything
///
/// Use it for text that already carries stress marks, or when working
/// offline; every poem then falls back to its raw text.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAnnotation;

impl StressAnnotator for NoAnnotation {
    fn annotate(&self, _text: &str) -> Option<String> {
        None
    }

    fn name(&self) -> &str {
        "none"
    }
}

/// Outcome of annotating a text, keeping track of whether we fell back
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotated {
    /// Text to analyze
    pub text: String,
    /// Whether `text` is the raw input because annotation was unavailable
    pub fell_back: bool,
}

/// Annotate `raw`, substituting it verbatim when the annotator gives up
///
/// An empty but successful annotation is kept as is.
pub fn annotate_or_raw<A: StressAnnotator + ?Sized>(annotator: &A, raw: &str) -> Annotated {
    match annotator.annotate(raw) {
        Some(text) => Annotated {
            text,
            fell_back: false,
        },
        None => {
            log::warn!(
                "stress annotation via {} unavailable, analyzing raw text",
                annotator.name()
            );
            Annotated {
                text: raw.to_string(),
                fell_back: true,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Option<&'static str>);

    impl StressAnnotator for Fixed {
        fn annotate(&self, _text: &str) -> Option<String> {
            self.0.map(str::to_string)
        }
    }

    #[test]
    fn test_fallback_keeps_raw_text() {
        let annotated = annotate_or_raw(&NoAnnotation, "Ой у лузі");
        assert_eq!(annotated.text, "Ой у лузі");
        assert!(annotated.fell_back);
    }

    #[test]
    fn test_successful_annotation() {
        let annotated = annotate_or_raw(&Fixed(Some("лу́зі")), "лузі");
        assert_eq!(annotated.text, "лу́зі");
        assert!(!annotated.fell_back);
    }

    #[test]
    fn test_empty_annotation_is_not_a_failure() {
        let annotated = annotate_or_raw(&Fixed(Some("")), "лузі");
        assert_eq!(annotated.text, "");
        assert!(!annotated.fell_back);
    }

    #[test]
    fn test_boxed_and_borrowed_annotators() {
        let boxed: Box<dyn StressAnnotator> = Box::new(NoAnnotation);
        assert_eq!(boxed.name(), "none");
        assert!(boxed.annotate("текст").is_none());

        let fixed = Fixed(Some("те́кст"));
        let borrowed = &fixed;
        assert_eq!(borrowed.annotate("текст").as_deref(), Some("те́кст"));
        assert_eq!(borrowed.name(), "annotator");
    }
}
