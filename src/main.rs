use clap::Parser;
use dotenv::dotenv;
use std::{
    io::{self, BufRead, BufWriter, Write},
    path::PathBuf,
    process::ExitCode,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use goodspoint_keywords::{
    GenerationOptions, KeywordError, KeywordGenerator, KeywordRecord, Lexicon, Settings,
    apex::config::DEFAULT_LOG_FILTER,
};

/// Generate search keywords for listing titles, one JSON line per title.
#[derive(Debug, Parser)]
#[command(name = "goodspoint-keywords", version)]
struct Args {
    /// Longest n-gram span (defaults to KEYWORDS_MAX_NGRAM, then 4)
    #[arg(long)]
    max_ngram: Option<i64>,

    /// Lexicon extension file merged over the built-in tables
    #[arg(long)]
    lexicon: Option<PathBuf>,

    /// Titles to index; stdin is read line by line when none are given
    titles: Vec<String>,
}

fn run(args: Args, settings: Settings) -> Result<(), KeywordError> {
    let lexicon = match args.lexicon.or(settings.lexicon_path) {
        Some(path) => Lexicon::builtin_with_extension(&path)?,
        None => Lexicon::builtin(),
    };
    let generator = KeywordGenerator::new(lexicon);
    let options = GenerationOptions {
        max_ngram: args.max_ngram.or(settings.max_ngram),
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut emit = |title: String| -> Result<(), KeywordError> {
        let keywords = generator.generate(title.as_str(), &options);
        let record = KeywordRecord { title, keywords };
        serde_json::to_writer(&mut out, &record)?;
        out.write_all(b"\n")?;
        Ok(())
    };

    let mut count = 0usize;
    if args.titles.is_empty() {
        for line in io::stdin().lock().lines() {
            emit(line?)?;
            count += 1;
        }
    } else {
        for title in args.titles {
            emit(title)?;
            count += 1;
        }
    }

    drop(emit);
    out.flush()?;
    info!(titles = count, "keyword generation finished");
    Ok(())
}

fn main() -> ExitCode {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let settings = Settings::from_env();

    match run(args, settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "keyword generation failed");
            ExitCode::FAILURE
        }
    }
}
