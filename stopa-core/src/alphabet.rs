//! Ukrainian vowel set and the stress diacritic

/// Vowel letters, both cases. Each one carries a syllable.
pub const VOWELS: &str = "АаОоУуЕеИиІіЯяЄєЇїЮю";

/// COMBINING ACUTE ACCENT, placed right after a stressed vowel
pub const STRESS_MARK: char = '\u{0301}';

/// Word separator kept in reduced lines
pub const SEPARATOR: char = ' ';

/// Whether `ch` is one of the ten vowel letters
pub fn is_vowel(ch: char) -> bool {
    matches!(
        ch,
        'А' | 'а'
            | 'О'
            | 'о'
            | 'У'
            | 'у'
            | 'Е'
            | 'е'
            | 'И'
            | 'и'
            | 'І'
            | 'і'
            | 'Я'
            | 'я'
            | 'Є'
            | 'є'
            | 'Ї'
            | 'ї'
            | 'Ю'
            | 'ю'
    )
}

/// Whether `ch` is the stress diacritic
pub fn is_stress_mark(ch: char) -> bool {
    ch == STRESS_MARK
}

/// Count vowels in `text`, ignoring stress marks
pub fn vowel_count(text: &str) -> usize {
    text.chars().filter(|&ch| is_vowel(ch)).count()
}
