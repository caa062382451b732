use std::io::{self, BufRead};
use std::process;

use clap::Parser;

use sinhala_tts::sinhala::{Pipeline, PipelineOptions, Scheme};

#[derive(Parser)]
#[command(
    name = "sinhala-romanize",
    about = "Romanize Sinhala text for a foreign-language speech synthesizer"
)]
struct Cli {
    /// Text to romanize; reads stdin line by line when omitted
    text: Vec<String>,
    /// Romanization scheme
    #[arg(long, value_enum, default_value = "phonetic")]
    scheme: Scheme,
    /// Keep ASCII digits instead of spelling them out
    #[arg(long)]
    no_digits: bool,
    /// Print rejections as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let pipeline = Pipeline::with_options(PipelineOptions {
        scheme: cli.scheme,
        expand_digits: !cli.no_digits,
    });

    let mut rejected = false;
    if cli.text.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.unwrap_or_else(|e| {
                eprintln!("Error reading stdin: {e}");
                process::exit(1);
            });
            if line.trim().is_empty() {
                println!();
                continue;
            }
            rejected |= !romanize(&pipeline, &line, cli.json);
        }
    } else {
        rejected = !romanize(&pipeline, &cli.text.join(" "), cli.json);
    }

    if rejected {
        process::exit(2);
    }
}

/// Print the romanization of `text`, or the rejection to stderr.
fn romanize(pipeline: &Pipeline, text: &str, json: bool) -> bool {
    match pipeline.run(text) {
        Ok(romanized) => {
            println!("{romanized}");
            true
        }
        Err(err) if json => {
            let report = err.report();
            match report.to_json() {
                Ok(line) => eprintln!("{line}"),
                Err(e) => eprintln!("Error encoding report: {e}"),
            }
            false
        }
        Err(err) => {
            eprintln!("{err} ({})", err.user_message());
            false
        }
    }
}
