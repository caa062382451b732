use std::path::Path;

use serde::{Deserialize, Serialize};

/// Range of speaking rates accepted by common cloud synthesizers.
pub const SPEAKING_RATE_RANGE: std::ops::RangeInclusive<f32> = 0.25..=4.0;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid voice config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("speaking_rate {0} is outside 0.25–4.0")]
    SpeakingRate(f32),
}

/// Container format of synthesized audio.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AudioEncoding {
    #[default]
    Mp3,
    /// 16-bit PCM in a WAV container.
    Linear16,
    OggOpus,
}

impl AudioEncoding {
    pub fn mime_type(self) -> &'static str {
        match self {
            AudioEncoding::Mp3 => "audio/mpeg",
            AudioEncoding::Linear16 => "audio/wav",
            AudioEncoding::OggOpus => "audio/ogg",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            AudioEncoding::Mp3 => "mp3",
            AudioEncoding::Linear16 => "wav",
            AudioEncoding::OggOpus => "ogg",
        }
    }
}

/// Voice selection handed to the speech synthesis provider.
///
/// There is no Sinhala voice, so the romanized text is read by a voice whose
/// phonology is close enough. The defaults select the Malay voice the
/// romanization tables were tuned for, slowed down slightly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceParams {
    /// BCP-47 language code of the voice (e.g. `"ms-MY"`).
    pub language_code: String,
    /// Provider-specific voice name (e.g. `"ms-MY-Standard-A"`).
    pub voice_name: String,
    /// Speed multiplier. Range: 0.25–4.0, default 0.9.
    pub speaking_rate: f32,
    pub audio_encoding: AudioEncoding,
}

impl Default for VoiceParams {
    fn default() -> Self {
        Self {
            language_code: "ms-MY".to_string(),
            voice_name: "ms-MY-Standard-A".to_string(),
            speaking_rate: 0.9,
            audio_encoding: AudioEncoding::Mp3,
        }
    }
}

impl VoiceParams {
    /// Load voice parameters from a JSON file.
    ///
    /// Missing fields keep their defaults, so `{}` is a valid file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let params = Self::from_json(&content)?;
        log::info!(
            "Loaded voice config from {}: {} / {}",
            path.display(),
            params.language_code,
            params.voice_name
        );
        Ok(params)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !SPEAKING_RATE_RANGE.contains(&self.speaking_rate) {
            return Err(ConfigError::SpeakingRate(self.speaking_rate));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_select_malay_voice() {
        let params = VoiceParams::default();
        assert_eq!(params.language_code, "ms-MY");
        assert_eq!(params.voice_name, "ms-MY-Standard-A");
        assert_eq!(params.speaking_rate, 0.9);
        assert_eq!(params.audio_encoding.mime_type(), "audio/mpeg");
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let params = VoiceParams::from_json(r#"{"speaking_rate": 1.25}"#).unwrap();
        assert_eq!(params.speaking_rate, 1.25);
        assert_eq!(params.voice_name, "ms-MY-Standard-A");

        let params = VoiceParams::from_json(r#"{"audio_encoding": "linear16"}"#).unwrap();
        assert_eq!(params.audio_encoding, AudioEncoding::Linear16);
        assert_eq!(params.audio_encoding.extension(), "wav");
    }

    #[test]
    fn rejects_out_of_range_speaking_rate() {
        let err = VoiceParams::from_json(r#"{"speaking_rate": 9.0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::SpeakingRate(r) if r == 9.0));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = VoiceParams::from_json("{").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"language_code": "id-ID", "voice_name": "id-ID-Standard-A"}}"#
        )
        .unwrap();

        let params = VoiceParams::load(file.path()).unwrap();
        assert_eq!(params.language_code, "id-ID");
        assert_eq!(params.voice_name, "id-ID-Standard-A");
        assert_eq!(params.speaking_rate, 0.9);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = VoiceParams::load(&dir.path().join("voice.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
