use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use super::tables::ALLOWED_PUNCTUATION;

/// Unicode blocks accepted as Sinhala script: Sinhala and Sinhala Archaic Numbers.
pub const SINHALA_RANGES: [RangeInclusive<char>; 2] =
    ['\u{0D80}'..='\u{0DFF}', '\u{111E0}'..='\u{111FF}'];

/// Outcome of validating a piece of input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Valid,
    /// Distinct offending characters, sorted by code point.
    Invalid(Vec<char>),
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid)
    }
}

pub fn is_sinhala(c: char) -> bool {
    SINHALA_RANGES.iter().any(|range| range.contains(&c))
}

/// Whether `c` may appear in text handed to the transliterator.
pub fn is_allowed(c: char) -> bool {
    is_sinhala(c) || c.is_ascii_digit() || c.is_whitespace() || ALLOWED_PUNCTUATION.contains(&c)
}

/// Check every character of `text` and collect the ones that are not allowed.
///
/// Each offending character is reported once, however often it occurs, and
/// the list is ordered by code point so diagnostics are stable.
pub fn validate(text: &str) -> Validation {
    let invalid: BTreeSet<char> = text.chars().filter(|&c| !is_allowed(c)).collect();
    if invalid.is_empty() {
        Validation::Valid
    } else {
        Validation::Invalid(invalid.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_sinhala_digits_and_punctuation() {
        assert!(validate("මට බඩේ අමාරුවක් තියෙනවා").is_valid());
        assert!(validate("2024 - “ආයුබෝවන්!” (හරි?)").is_valid());
        assert!(validate("පේළි\tදෙක\nතුන").is_valid());
        assert!(validate("").is_valid());
    }

    #[test]
    fn accepts_archaic_numbers_block() {
        assert!(validate("\u{111E1}\u{111F4}").is_valid());
        assert!(is_sinhala('\u{0D80}'));
        assert!(is_sinhala('\u{0DFF}'));
        assert!(!is_sinhala('\u{0E00}'));
        assert!(!is_sinhala('\u{111DF}'));
    }

    #[test]
    fn rejects_latin_letter() {
        assert_eq!(validate("aක"), Validation::Invalid(vec!['a']));
    }

    #[test]
    fn reports_each_offending_character_once_in_code_point_order() {
        assert_eq!(
            validate("zක z@ aaක#z"),
            Validation::Invalid(vec!['#', '@', 'a', 'z'])
        );
    }

    #[test]
    fn rejects_symbols_outside_the_allow_list() {
        assert_eq!(validate("ක/ග"), Validation::Invalid(vec!['/']));
        assert_eq!(validate("ක\u{2014}ග"), Validation::Invalid(vec!['\u{2014}']));
        // Zero-width joiner is neither Sinhala nor whitespace.
        assert_eq!(
            validate("ශ්\u{200D}රී"),
            Validation::Invalid(vec!['\u{200D}'])
        );
    }

    #[test]
    fn only_ascii_digits_are_accepted() {
        assert!(validate("0123456789").is_valid());
        assert_eq!(validate("\u{0663}"), Validation::Invalid(vec!['\u{0663}']));
    }
}
