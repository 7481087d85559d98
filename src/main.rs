use std::io;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use log::info;

use animal_quiz::{check, play};
use animal_quiz::quiz::data;
use animal_quiz::{Dataset, QuizEngine};

const USAGE: &str = "\
Usage: animal-quiz [dataset.json]
       animal-quiz --check <dataset.json>
       animal-quiz --dump

Without arguments the built-in dataset is played.
Logging: set RUST_LOG=debug for every transition";

fn main() -> Result<ExitCode> {
    // Control verbosity with RUST_LOG:
    //   RUST_LOG=info   animal-quiz            # sessions + transitions
    //   RUST_LOG=debug  animal-quiz data.json  # + dataset loading, raw picks
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("--help") | Some("-h") => {
            println!("{USAGE}");
            Ok(ExitCode::SUCCESS)
        }
        Some("--dump") => {
            println!("{}", data::canonical().to_json_pretty()?);
            Ok(ExitCode::SUCCESS)
        }
        Some("--check") => {
            let path = args.get(2).context(USAGE)?;
            let clean = check::check_dataset(Path::new(path), &mut io::stdout())?;
            Ok(if clean {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Some(path) => {
            let dataset = Dataset::from_path(path)
                .with_context(|| format!("failed to load dataset {path}"))?;
            let engine = QuizEngine::new(&dataset)?;
            info!(
                "Playing {path}: {} questions, {} results",
                dataset.questions.len(),
                dataset.results.len()
            );
            play::run(&engine, &mut io::stdin().lock(), &mut io::stdout())?;
            Ok(ExitCode::SUCCESS)
        }
        None => {
            play::run(&QuizEngine::canonical(), &mut io::stdin().lock(), &mut io::stdout())?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
