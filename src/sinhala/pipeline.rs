use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use super::digits::expand_digits;
use super::error::TransliterationError;
use super::tables::Scheme;
use super::transliterate::Transliterator;
use super::validate::{validate, Validation};

/// Options for a [`Pipeline`].
///
/// ```rust
/// use sinhala_tts::sinhala::{PipelineOptionsBuilder, Scheme};
///
/// let options = PipelineOptionsBuilder::default()
///     .scheme(Scheme::Diacritic)
///     .build()?;
/// assert!(options.expand_digits);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(default)]
#[serde(default)]
pub struct PipelineOptions {
    /// Romanization tables to use.
    pub scheme: Scheme,
    /// Spell out ASCII digits as Sinhala number words before romanizing.
    /// When disabled, digits reach the synthesizer as-is.
    pub expand_digits: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            scheme: Scheme::Phonetic,
            expand_digits: true,
        }
    }
}

/// Empty check, validation, digit expansion and transliteration, in that order.
///
/// A rejected text never reaches the later stages.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    options: PipelineOptions,
    transliterator: Transliterator,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: PipelineOptions) -> Self {
        Self {
            transliterator: Transliterator::new(options.scheme),
            options,
        }
    }

    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    /// Romanize `raw`, or explain why it cannot be.
    ///
    /// Surrounding whitespace is trimmed first; text that is empty after
    /// trimming is [`TransliterationError::EmptyInput`].
    pub fn run(&self, raw: &str) -> Result<String, TransliterationError> {
        let text = raw.trim();
        if text.is_empty() {
            log::warn!("Rejected empty text");
            return Err(TransliterationError::EmptyInput);
        }

        if let Validation::Invalid(characters) = validate(text) {
            log::warn!("Rejected text with invalid characters: {characters:?}");
            return Err(TransliterationError::InvalidCharacters { characters });
        }

        let expanded = if self.options.expand_digits {
            expand_digits(text)
        } else {
            text.into()
        };
        log::debug!("Text after digit expansion: {expanded}");

        let romanized = self.transliterator.transliterate(&expanded);
        log::debug!(
            "Converted phonetic text ({}): {romanized}",
            self.options.scheme.name()
        );
        Ok(romanized)
    }
}
