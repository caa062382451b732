use std::path::Path;

use crate::{SynthesisEngine, SynthesisResult};

use super::error::TransliterationError;
use super::pipeline::Pipeline;
use super::voice::VoiceParams;

#[derive(thiserror::Error, Debug)]
pub enum SpeakError {
    #[error(transparent)]
    Rejected(#[from] TransliterationError),
    #[error("Failed to generate speech: {0}")]
    Synthesis(Box<dyn std::error::Error>),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Reads Sinhala text aloud through a foreign-language synthesizer.
///
/// Text goes through the [`Pipeline`] first; only romanized text reaches
/// the engine, and rejected text never does.
///
/// ```rust
/// use sinhala_tts::sinhala::{Speaker, VoiceParams};
/// use sinhala_tts::{AudioEncoding, SynthesisEngine, SynthesisResult};
///
/// struct Echo;
///
/// impl SynthesisEngine for Echo {
///     type SynthesisParams = VoiceParams;
///
///     fn synthesize(
///         &mut self,
///         text: &str,
///         _params: Option<VoiceParams>,
///     ) -> Result<SynthesisResult, Box<dyn std::error::Error>> {
///         Ok(SynthesisResult { audio: text.as_bytes().to_vec(), encoding: AudioEncoding::Mp3 })
///     }
/// }
///
/// let mut speaker = Speaker::new(Echo);
/// let result = speaker.speak("පහ")?;
/// assert_eq!(result.audio, b"paha");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Speaker<E> {
    pipeline: Pipeline,
    engine: E,
    voice: VoiceParams,
}

impl<E> Speaker<E>
where
    E: SynthesisEngine<SynthesisParams = VoiceParams>,
{
    /// Create a speaker with the default pipeline and Malay voice.
    pub fn new(engine: E) -> Self {
        Self::with_pipeline(engine, Pipeline::new(), VoiceParams::default())
    }

    pub fn with_pipeline(engine: E, pipeline: Pipeline, voice: VoiceParams) -> Self {
        Self {
            pipeline,
            engine,
            voice,
        }
    }

    pub fn voice(&self) -> &VoiceParams {
        &self.voice
    }

    pub fn set_voice(&mut self, voice: VoiceParams) {
        self.voice = voice;
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Romanize `text` and synthesize it with the configured voice.
    pub fn speak(&mut self, text: &str) -> Result<SynthesisResult, SpeakError> {
        let romanized = self.pipeline.run(text)?;
        log::info!(
            "Synthesizing {} chars with voice {}",
            romanized.chars().count(),
            self.voice.voice_name
        );
        self.engine
            .synthesize(&romanized, Some(self.voice.clone()))
            .map_err(|e| {
                log::error!("TTS Error: {e}");
                SpeakError::Synthesis(e)
            })
    }

    /// Romanize `text`, synthesize it and write the audio to `path`.
    pub fn speak_to_file(&mut self, text: &str, path: &Path) -> Result<(), SpeakError> {
        let result = self.speak(text)?;
        std::fs::write(path, &result.audio)?;
        Ok(())
    }
}
