//! Sinhala validation, digit expansion and romanization.
//!
//! This module turns Sinhala text into a Latin spelling that a synthesizer
//! for another language can read aloud. The stages run in a fixed order:
//!
//! 1. **Empty check**: whitespace-only text is rejected.
//! 2. **Validation**: only the Sinhala blocks (U+0D80–U+0DFF, U+111E0–U+111FF),
//!    ASCII digits, whitespace and allow-listed punctuation are accepted.
//! 3. **Digit expansion**: `0`–`9` become Sinhala number words.
//! 4. **Transliteration**: NFC normalization, then one scan over the code points.
//!
//! # Syllable Rules
//!
//! | Input | Rule | Output |
//! |---|---|---|
//! | `ක` | consonant takes the inherent vowel | `ka` |
//! | `කි` | vowel sign replaces the inherent vowel | `ki` |
//! | `කෙ` | kombuva signs are read with an extra `a` | `kae` |
//! | `ක්ත` | al-lakuna joins a bare consonant to the next syllable | `ktha` |
//! | `ක්` | cluster with no following consonant | `k` |
//! | `5` | digit spelled out first (`පහ`) | `paha` |
//!
//! # Schemes
//!
//! | Scheme | Example | Notes |
//! |---|---|---|
//! | [`Scheme::Phonetic`] | `ආයුබෝවන්` → `aayuboovan` | ASCII only, tuned for `ms-MY` voices |
//! | [`Scheme::Diacritic`] | `ආයුබෝවන්` → `āyubōvan` | macrons, adds `ඳ` and `ඹ` |
//!
//! # Examples
//!
//! ## Romanize
//!
//! ```rust
//! use sinhala_tts::sinhala::Pipeline;
//!
//! let pipeline = Pipeline::new();
//! assert_eq!(pipeline.run("ඔව් විටමින්")?, "ov vitamin");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Report Invalid Input
//!
//! ```rust
//! use sinhala_tts::sinhala::Pipeline;
//!
//! let err = Pipeline::new().run("hi ක").unwrap_err();
//! assert_eq!(err.invalid_characters(), &['h', 'i']);
//! println!("{}", err.report().to_json()?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod classify;
pub mod digits;
pub mod error;
pub mod pipeline;
pub mod speaker;
pub mod tables;
pub mod transliterate;
pub mod validate;
pub mod voice;

pub use classify::CharClass;
pub use digits::expand_digits;
pub use error::{ErrorKind, ErrorReport, TransliterationError};
pub use pipeline::{Pipeline, PipelineOptions, PipelineOptionsBuilder};
pub use speaker::{SpeakError, Speaker};
pub use tables::{Scheme, VIRAMA};
pub use transliterate::Transliterator;
pub use validate::{is_allowed, is_sinhala, validate, Validation};
pub use voice::{AudioEncoding, ConfigError, VoiceParams};
