//! # sinhala-tts-rs
//!
//! A Rust library that prepares Sinhala text for speech synthesizers that
//! have no Sinhala voice.
//!
//! ## Features
//!
//! - **Validation**: Rejects anything outside the Sinhala script, digits and a
//!   small punctuation allow-list, reporting the offending characters
//! - **Digit Expansion**: Spells out `0`–`9` as Sinhala number words
//! - **Transliteration**: Romanizes Sinhala syllables, clusters and vowel signs
//!   into text a Malay (or similar) voice reads naturally
//! - **Synthesis Seam**: Plug any speech provider in through [`SynthesisEngine`]
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! sinhala-tts-rs = "2026.10"
//! ```
//!
//! ```rust
//! let romanized = sinhala_tts::transliterate("මට බඩේ අමාරුවක් තියෙනවා")?;
//! assert_eq!(romanized, "mata badaee amaaruvak thiyaenavaa");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod sinhala;

use std::path::Path;

pub use sinhala::{
    AudioEncoding, ErrorKind, ErrorReport, Pipeline, PipelineOptions, Scheme, TransliterationError,
};

/// Romanize `text` with the default pipeline (phonetic scheme, digits expanded).
pub fn transliterate(text: &str) -> Result<String, TransliterationError> {
    Pipeline::new().run(text)
}

/// The result of a synthesis (text-to-speech) operation.
///
/// Contains the encoded audio as returned by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisResult {
    /// Encoded audio bytes
    pub audio: Vec<u8>,
    /// Container format of `audio`
    pub encoding: AudioEncoding,
}

impl SynthesisResult {
    /// Write the encoded audio to a file as-is.
    pub fn write_to_file(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        std::fs::write(path, &self.audio)?;
        Ok(())
    }

    /// MIME type for serving the audio over HTTP.
    pub fn mime_type(&self) -> &'static str {
        self.encoding.mime_type()
    }
}

/// Common interface for text-to-speech providers.
///
/// Implementations receive already-romanized text; see
/// [`sinhala::Speaker`] for the component that prepares it.
pub trait SynthesisEngine {
    /// Parameters for configuring inference behavior (voice, speed, etc.)
    type SynthesisParams;

    /// Synthesize speech from the given text.
    fn synthesize(
        &mut self,
        text: &str,
        params: Option<Self::SynthesisParams>,
    ) -> Result<SynthesisResult, Box<dyn std::error::Error>>;

    /// Synthesize speech from the given text and write it to a file.
    ///
    /// Default implementation calls `synthesize()` then `SynthesisResult::write_to_file()`.
    fn synthesize_to_file(
        &mut self,
        text: &str,
        path: &Path,
        params: Option<Self::SynthesisParams>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        self.synthesize(text, params)?.write_to_file(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_level_transliterate() {
        assert_eq!(transliterate("ක්ත").unwrap(), "ktha");
        assert_eq!(
            transliterate("aක").unwrap_err().invalid_characters(),
            &['a']
        );
    }

    #[test]
    fn writes_audio_bytes_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.mp3");
        let result = SynthesisResult {
            audio: vec![0xFF, 0xFB, 0x90, 0x00],
            encoding: AudioEncoding::Mp3,
        };
        result.write_to_file(&path).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), result.audio);
        assert_eq!(result.mime_type(), "audio/mpeg");
    }
}
