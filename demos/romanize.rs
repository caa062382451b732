use std::time::Instant;

use sinhala_tts::{
    sinhala::{Pipeline, PipelineOptionsBuilder, Scheme, Speaker, VoiceParams},
    AudioEncoding, SynthesisEngine, SynthesisResult,
};

/// Stand-in for a cloud synthesizer: prints the request it would send.
struct DryRun;

impl SynthesisEngine for DryRun {
    type SynthesisParams = VoiceParams;

    fn synthesize(
        &mut self,
        text: &str,
        params: Option<VoiceParams>,
    ) -> Result<SynthesisResult, Box<dyn std::error::Error>> {
        let params = params.unwrap_or_default();
        println!(
            "  -> {} ({}, rate {}): {text}",
            params.voice_name, params.language_code, params.speaking_rate
        );
        Ok(SynthesisResult {
            audio: Vec::new(),
            encoding: AudioEncoding::Mp3,
        })
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let sentences = [
        "මට බඩේ අමාරුවක් තියෙනවා",
        "මාසයක් විතර වෙනවා",
        "ඔව් විටමින් පෙති 2ක් ගන්නවා",
        "නැහැ මට මේක පලවෙනි වතාවට",
    ];

    for scheme in Scheme::ALL {
        let options = PipelineOptionsBuilder::default().scheme(scheme).build()?;
        let pipeline = Pipeline::with_options(options);

        println!("[{}]", scheme.name());
        let start = Instant::now();
        for sentence in sentences {
            println!("  {sentence} => {}", pipeline.run(sentence)?);
        }
        println!("  romanized {} sentences in {:.2?}", sentences.len(), start.elapsed());
    }

    match Pipeline::new().run("Hello මට!") {
        Ok(text) => println!("unexpectedly accepted: {text}"),
        Err(err) => println!("rejected: {}", err.report().to_json()?),
    }

    let mut speaker = Speaker::new(DryRun);
    speaker.speak(sentences[0])?;

    Ok(())
}
