use std::iter::Peekable;
use std::str::Chars;

use unicode_normalization::UnicodeNormalization;

use super::classify::CharClass;
use super::tables::{Scheme, EXTRA_A_DIACRITICS, INHERENT_VOWEL, VIRAMA};

/// Romanizes Sinhala script with a single left-to-right scan.
///
/// Input is brought to NFC first so that split vowel signs (e.g. kombuva
/// followed by al-lakuna) reach the scanner as their composed code point.
/// Characters the scheme does not know are copied through, so the scan
/// never fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Transliterator {
    scheme: Scheme,
}

impl Transliterator {
    pub fn new(scheme: Scheme) -> Self {
        Self { scheme }
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    pub fn transliterate(&self, text: &str) -> String {
        let normalized: String = text.nfc().collect();
        let mut out = String::with_capacity(normalized.len());
        let mut chars = normalized.chars().peekable();

        while let Some(ch) = chars.next() {
            match self.scheme.classify(ch) {
                CharClass::IndependentVowel(roman) => out.push_str(roman),
                CharClass::Consonant(bare) => self.syllable(bare, &mut chars, &mut out),
                // A vowel sign with no consonant in front of it.
                CharClass::VowelDiacritic(roman) => out.push_str(roman),
                CharClass::Virama => {}
                CharClass::Digit(_) | CharClass::PunctuationOrWhitespace | CharClass::Other => {
                    out.push(ch)
                }
            }
        }

        log::trace!("transliterated {text:?} -> {out:?}");
        out
    }

    /// Consume one syllable whose first consonant has already been read.
    ///
    /// Consonants followed by al-lakuna collect in the cluster; the first
    /// consonant without one is the base and takes the vowel.
    fn syllable(&self, first: &'static str, chars: &mut Peekable<Chars<'_>>, out: &mut String) {
        let mut syllable = Syllable::default();
        let mut current = first;

        loop {
            if chars.next_if_eq(&VIRAMA).is_none() {
                syllable.base(current);
                break;
            }
            syllable.cluster(current);
            match chars.peek().and_then(|&c| self.scheme.consonant(c)) {
                Some(next) => {
                    chars.next();
                    current = next;
                }
                // Cluster ends on al-lakuna: no base, no vowel.
                None => break,
            }
        }

        if syllable.has_base {
            let sign = chars
                .peek()
                .and_then(|&c| self.scheme.vowel_diacritic(c).map(|roman| (c, roman)));
            match sign {
                Some((c, roman)) => {
                    chars.next();
                    if EXTRA_A_DIACRITICS.contains(&c) {
                        syllable.vowel(INHERENT_VOWEL);
                    }
                    syllable.vowel(roman);
                }
                None => syllable.vowel(INHERENT_VOWEL),
            }
        }

        out.push_str(&syllable.text);
    }
}

/// Romanization of one syllable as it is being assembled.
#[derive(Debug, Default)]
struct Syllable {
    text: String,
    has_base: bool,
}

impl Syllable {
    fn cluster(&mut self, bare: &str) {
        self.text.push_str(bare);
    }

    fn base(&mut self, bare: &str) {
        self.text.push_str(bare);
        self.has_base = true;
    }

    fn vowel(&mut self, roman: &str) {
        self.text.push_str(roman);
    }
}
