use super::tables::{Scheme, ALLOWED_PUNCTUATION, DIGIT_WORDS, VIRAMA};

/// Class of a single code point, with its mapped string where one exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Standalone vowel letter; carries its romanization.
    IndependentVowel(&'static str),
    /// Consonant letter; carries its bare (vowel-less) romanization.
    Consonant(&'static str),
    /// Combining vowel sign; carries the vowel that replaces the inherent "a".
    VowelDiacritic(&'static str),
    /// The al-lakuna sign.
    Virama,
    /// ASCII digit; carries its Sinhala number word.
    Digit(&'static str),
    /// Whitespace or a member of the punctuation allow-list.
    PunctuationOrWhitespace,
    Other,
}

impl Scheme {
    /// Classify `c` against this scheme's tables.
    ///
    /// The letter tables are disjoint, so the lookup order only matters for
    /// the fallback classes.
    pub fn classify(self, c: char) -> CharClass {
        let tables = self.tables();
        if let Some(&roman) = tables.independent_vowels.get(&c) {
            return CharClass::IndependentVowel(roman);
        }
        if let Some(&roman) = tables.consonants.get(&c) {
            return CharClass::Consonant(roman);
        }
        if let Some(&roman) = tables.vowel_diacritics.get(&c) {
            return CharClass::VowelDiacritic(roman);
        }
        if c == VIRAMA {
            return CharClass::Virama;
        }
        if let Some(&word) = DIGIT_WORDS.get(&c) {
            return CharClass::Digit(word);
        }
        if c.is_whitespace() || ALLOWED_PUNCTUATION.contains(&c) {
            return CharClass::PunctuationOrWhitespace;
        }
        CharClass::Other
    }

    /// Bare romanization of `c` if it is a consonant in this scheme.
    pub fn consonant(self, c: char) -> Option<&'static str> {
        self.tables().consonants.get(&c).copied()
    }

    /// Romanization of `c` if it is a vowel sign in this scheme.
    pub fn vowel_diacritic(self, c: char) -> Option<&'static str> {
        self.tables().vowel_diacritics.get(&c).copied()
    }
}
