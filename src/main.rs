use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};

use textsim::config::Config;
use textsim::pipeline::{self, RunPaths};
use textsim::text::stopwords::StopwordLanguage;

/// textsim: lexical similarity between an original document and a candidate.
///
/// Tokenizes both files, scores the candidate against the original's word
/// frequencies, and writes the score (0.00 to 1.00) to OUTPUT.
#[derive(Parser)]
#[command(name = "textsim", version, about)]
struct Cli {
    /// The original document
    original: PathBuf,

    /// The document to check against the original
    candidate: PathBuf,

    /// Where to write the score
    output: PathBuf,

    /// Also print the full comparison as JSON
    #[arg(long)]
    json: bool,

    /// Print a breakdown of the score
    #[arg(short, long)]
    verbose: bool,

    /// Extra jieba-format dictionary (overrides TEXTSIM_USER_DICT)
    #[arg(long)]
    user_dict: Option<PathBuf>,

    /// Extra stopwords, one per line (overrides TEXTSIM_STOPWORDS_FILE)
    #[arg(long)]
    stopwords_file: Option<PathBuf>,

    /// Merge a bundled stopword list (repeatable, overrides TEXTSIM_STOPWORD_LANGUAGES)
    #[arg(long = "stopword-language", value_enum)]
    stopword_languages: Vec<StopwordLanguage>,
}

fn main() -> ExitCode {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout stays clean for --json
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("textsim=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
        // --help and --version
        Err(e) => e.exit(),
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(error = ?e, "Comparison failed");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load()?;
    if cli.user_dict.is_some() {
        config.user_dict = cli.user_dict;
    }
    if cli.stopwords_file.is_some() {
        config.stopwords_file = cli.stopwords_file;
    }
    if !cli.stopword_languages.is_empty() {
        config.stopword_languages = cli.stopword_languages;
    }

    let tokenizer = pipeline::build_tokenizer(&config)?;
    let paths = RunPaths {
        original: cli.original,
        candidate: cli.candidate,
        output: cli.output,
    };
    info!(
        original = %paths.original.display(),
        candidate = %paths.candidate.display(),
        "Comparing documents"
    );

    let comparison = pipeline::run(&tokenizer, &paths)?;

    if cli.verbose {
        textsim::output::terminal::display_comparison(&comparison);
    }
    if cli.json {
        println!("{}", textsim::output::render_json(&comparison)?);
    }
    Ok(())
}
