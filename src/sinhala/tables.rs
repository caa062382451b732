use phf::{phf_map, phf_set};
use serde::{Deserialize, Serialize};

/// The al-lakuna sign (hal kirima), U+0DCA.
///
/// Silences the inherent vowel of the consonant before it. Inside a word it
/// also marks that consonant as the first member of a cluster.
pub const VIRAMA: char = '\u{0DCA}';

/// Inherent vowel appended to a consonant that carries no vowel sign.
pub const INHERENT_VOWEL: &str = "a";

/// Romanization scheme selecting which set of tables the transliterator uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Scheme {
    /// Plain ASCII spelling tuned for a Malay voice (`ms-MY`).
    #[default]
    Phonetic,
    /// Macron/ligature spelling (ā, æ, ǣ, ṛ ...) with prenasalized stops.
    Diacritic,
}

/// The three letter tables of one scheme.
#[derive(Debug, Clone, Copy)]
pub struct SchemeTables {
    pub independent_vowels: &'static phf::Map<char, &'static str>,
    pub consonants: &'static phf::Map<char, &'static str>,
    pub vowel_diacritics: &'static phf::Map<char, &'static str>,
}

impl Scheme {
    /// All schemes, in declaration order.
    pub const ALL: [Scheme; 2] = [Scheme::Phonetic, Scheme::Diacritic];

    pub fn tables(self) -> SchemeTables {
        match self {
            Scheme::Phonetic => SchemeTables {
                independent_vowels: &PHONETIC_INDEPENDENT_VOWELS,
                consonants: &PHONETIC_CONSONANTS,
                vowel_diacritics: &PHONETIC_VOWEL_DIACRITICS,
            },
            Scheme::Diacritic => SchemeTables {
                independent_vowels: &DIACRITIC_INDEPENDENT_VOWELS,
                consonants: &DIACRITIC_CONSONANTS,
                vowel_diacritics: &DIACRITIC_VOWEL_DIACRITICS,
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Scheme::Phonetic => "phonetic",
            Scheme::Diacritic => "diacritic",
        }
    }
}

static PHONETIC_INDEPENDENT_VOWELS: phf::Map<char, &'static str> = phf_map! {
    '\u{0D85}' => "a",   // අ
    '\u{0D86}' => "aa",  // ආ
    '\u{0D87}' => "ae",  // ඇ
    '\u{0D88}' => "aae", // ඈ
    '\u{0D89}' => "i",   // ඉ
    '\u{0D8A}' => "ii",  // ඊ
    '\u{0D8B}' => "u",   // උ
    '\u{0D8C}' => "uu",  // ඌ
    '\u{0D8D}' => "ri",  // ඍ
    '\u{0D8E}' => "rii", // ඎ
    '\u{0D91}' => "e",   // එ
    '\u{0D92}' => "ee",  // ඒ
    '\u{0D93}' => "ai",  // ඓ
    '\u{0D94}' => "o",   // ඔ
    '\u{0D95}' => "oo",  // ඕ
    '\u{0D96}' => "au",  // ඖ
};

static PHONETIC_CONSONANTS: phf::Map<char, &'static str> = phf_map! {
    '\u{0D9A}' => "k",  // ක
    '\u{0D9C}' => "g",  // ග
    '\u{0DA0}' => "ch", // ච
    '\u{0DA2}' => "j",  // ජ
    '\u{0DA7}' => "t",  // ට
    '\u{0DA9}' => "d",  // ඩ
    '\u{0DAB}' => "n",  // ණ
    '\u{0DAD}' => "th", // ත
    '\u{0DAF}' => "d",  // ද
    '\u{0DB1}' => "n",  // න
    '\u{0DB4}' => "p",  // ප
    '\u{0DB6}' => "b",  // බ
    '\u{0DB8}' => "m",  // ම
    '\u{0DBA}' => "y",  // ය
    '\u{0DBB}' => "r",  // ර
    '\u{0DBD}' => "l",  // ල
    '\u{0DC0}' => "v",  // ව
    '\u{0DC3}' => "s",  // ස
    '\u{0DC4}' => "h",  // හ
    '\u{0DC5}' => "l",  // ළ
    '\u{0DC6}' => "f",  // ෆ
};

static PHONETIC_VOWEL_DIACRITICS: phf::Map<char, &'static str> = phf_map! {
    '\u{0DCF}' => "aa",  // ා
    '\u{0DD0}' => "ae",  // ැ
    '\u{0DD1}' => "aae", // ෑ
    '\u{0DD2}' => "i",   // ි
    '\u{0DD3}' => "ii",  // ී
    '\u{0DD4}' => "u",   // ු
    '\u{0DD6}' => "uu",  // ූ
    '\u{0DD9}' => "e",   // ෙ
    '\u{0DDA}' => "ee",  // ේ
    '\u{0DDB}' => "ai",  // ෛ
    '\u{0DDC}' => "o",   // ො
    '\u{0DDD}' => "oo",  // ෝ
    '\u{0DDE}' => "au",  // ෞ
};

static DIACRITIC_INDEPENDENT_VOWELS: phf::Map<char, &'static str> = phf_map! {
    '\u{0D85}' => "a",
    '\u{0D86}' => "\u{0101}",  // ā
    '\u{0D87}' => "\u{00E6}",  // æ
    '\u{0D88}' => "\u{01E3}",  // ǣ
    '\u{0D89}' => "i",
    '\u{0D8A}' => "\u{012B}",  // ī
    '\u{0D8B}' => "\u{016B}",  // ū
    '\u{0D8C}' => "uu",
    '\u{0D8D}' => "\u{1E5B}",  // ṛ
    '\u{0D8E}' => "\u{1E5D}",  // ṝ
    '\u{0D91}' => "e",
    '\u{0D92}' => "\u{0113}",  // ē
    '\u{0D93}' => "ai",
    '\u{0D94}' => "o",
    '\u{0D95}' => "\u{014D}",  // ō
    '\u{0D96}' => "au",
};

static DIACRITIC_CONSONANTS: phf::Map<char, &'static str> = phf_map! {
    '\u{0D9A}' => "k",
    '\u{0D9C}' => "g",
    '\u{0DA0}' => "ch",
    '\u{0DA2}' => "j",
    '\u{0DA7}' => "t",
    '\u{0DA9}' => "d",
    '\u{0DAB}' => "n",
    '\u{0DAD}' => "th",
    '\u{0DAF}' => "d",
    '\u{0DB1}' => "n",
    '\u{0DB3}' => "n\u{0306}d", // ඳ
    '\u{0DB4}' => "p",
    '\u{0DB6}' => "b",
    '\u{0DB8}' => "m",
    '\u{0DB9}' => "m\u{0306}b", // ඹ
    '\u{0DBA}' => "y",
    '\u{0DBB}' => "r",
    '\u{0DBD}' => "l",
    '\u{0DC0}' => "v",
    '\u{0DC3}' => "s",
    '\u{0DC4}' => "h",
    '\u{0DC5}' => "l",
    '\u{0DC6}' => "f",
};

static DIACRITIC_VOWEL_DIACRITICS: phf::Map<char, &'static str> = phf_map! {
    '\u{0DCF}' => "\u{0101}",
    '\u{0DD0}' => "\u{00E6}",
    '\u{0DD1}' => "\u{01E3}",
    '\u{0DD2}' => "i",
    '\u{0DD3}' => "\u{012B}",
    '\u{0DD4}' => "u",
    '\u{0DD6}' => "\u{016B}",
    '\u{0DD9}' => "e",
    '\u{0DDA}' => "\u{0113}",
    '\u{0DDB}' => "ai",
    '\u{0DDC}' => "o",
    '\u{0DDD}' => "\u{014D}",
    '\u{0DDE}' => "au",
};

/// Vowel signs written as if preceded by an extra "a" (kombuva, diga kombuva).
pub static EXTRA_A_DIACRITICS: phf::Set<char> = phf_set! {
    '\u{0DD9}', // ෙ
    '\u{0DDA}', // ේ
};

/// Sinhala number words for the ASCII digits.
pub static DIGIT_WORDS: phf::Map<char, &'static str> = phf_map! {
    '0' => "\u{0DC1}\u{0DD4}\u{0DB1}\u{0DCA}\u{0DBA}", // ශුන්ය
    '1' => "\u{0D91}\u{0D9A}",                         // එක
    '2' => "\u{0DAF}\u{0DD9}\u{0D9A}",                 // දෙක
    '3' => "\u{0DAD}\u{0DD4}\u{0DB1}",                 // තුන
    '4' => "\u{0DC4}\u{0DAD}\u{0DBB}",                 // හතර
    '5' => "\u{0DB4}\u{0DC4}",                         // පහ
    '6' => "\u{0DC4}\u{0DBA}",                         // හය
    '7' => "\u{0DC4}\u{0DAD}",                         // හත
    '8' => "\u{0D85}\u{0DA7}",                         // අට
    '9' => "\u{0DB1}\u{0DC0}\u{0DBA}",                 // නවය
};

/// Punctuation accepted by the validator and passed through untouched.
pub static ALLOWED_PUNCTUATION: phf::Set<char> = phf_set! {
    ' ', '.', ',', '!', '?', ';', ':', '-', '\'', '"',
    '(', ')', '[', ']', '{', '}',
    '\u{00AB}', '\u{00BB}', // « »
    '\u{2039}', '\u{203A}', // ‹ ›
    '\u{2018}', '\u{2019}', // ‘ ’
    '\u{201C}', '\u{201D}', // “ ”
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_tables_are_pairwise_disjoint() {
        for scheme in Scheme::ALL {
            let t = scheme.tables();
            for c in t.independent_vowels.keys() {
                assert!(!t.consonants.contains_key(c), "{scheme:?}: {c}");
                assert!(!t.vowel_diacritics.contains_key(c), "{scheme:?}: {c}");
                assert_ne!(*c, VIRAMA);
            }
            for c in t.consonants.keys() {
                assert!(!t.vowel_diacritics.contains_key(c), "{scheme:?}: {c}");
                assert_ne!(*c, VIRAMA);
            }
            assert!(!t.vowel_diacritics.contains_key(&VIRAMA));
        }
    }

    #[test]
    fn table_sizes_match_the_alphabet() {
        let phonetic = Scheme::Phonetic.tables();
        assert_eq!(phonetic.independent_vowels.len(), 16);
        assert_eq!(phonetic.consonants.len(), 21);
        assert_eq!(phonetic.vowel_diacritics.len(), 13);

        let diacritic = Scheme::Diacritic.tables();
        assert_eq!(diacritic.independent_vowels.len(), 16);
        assert_eq!(diacritic.consonants.len(), 23);
        assert_eq!(diacritic.vowel_diacritics.len(), 13);
    }

    #[test]
    fn schemes_cover_the_same_vowel_code_points() {
        let phonetic = Scheme::Phonetic.tables();
        let diacritic = Scheme::Diacritic.tables();
        for c in phonetic.independent_vowels.keys() {
            assert!(diacritic.independent_vowels.contains_key(c));
        }
        for c in phonetic.vowel_diacritics.keys() {
            assert!(diacritic.vowel_diacritics.contains_key(c));
        }
        for c in phonetic.consonants.keys() {
            assert!(diacritic.consonants.contains_key(c));
        }
    }

    #[test]
    fn extra_a_signs_are_vowel_diacritics() {
        for scheme in Scheme::ALL {
            for c in EXTRA_A_DIACRITICS.iter() {
                assert!(scheme.tables().vowel_diacritics.contains_key(c));
            }
        }
    }

    #[test]
    fn every_ascii_digit_has_a_word() {
        for d in '0'..='9' {
            let word = DIGIT_WORDS.get(&d).expect("digit word");
            assert!(word
                .chars()
                .all(|c| ('\u{0D80}'..='\u{0DFF}').contains(&c)));
        }
    }
}
