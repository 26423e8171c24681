//! Count the words in a piece of text and list the most common ones.

use anyhow::Context;
use chrono::Local;
use clap::Parser;
use log::{LevelFilter, debug};
use std::io::{self, Write};
use std::process::ExitCode;
use wordfreq_rs::corpus::DEFAULT_CORPUS_URL;
use wordfreq_rs::{Config, HttpTransport, WordFreqError, analyze, input};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Counts the words in a piece of text and shows the most common ones with their frequencies",
    long_about = None
)]
struct Args {
    /// Treat TEXT as the name of a file to read
    #[arg(short, long)]
    file: bool,

    /// Number of words to show, most common first; 0 shows all
    #[arg(short, long, default_value_t = 10)]
    number: usize,

    /// Also count phrases of at least this many words; 0 turns phrases off
    #[arg(short, long, value_name = "MIN", default_value_t = 0)]
    phrases: usize,

    /// Draw a normalised histogram of the frequencies
    #[arg(short = 'H', long)]
    histogram: bool,

    /// Leave the counts off each line
    #[arg(long = "no-count")]
    no_count: bool,

    /// Remove the N most common English words before ranking
    #[arg(short, long, value_name = "N", default_value_t = 0)]
    uncommon: usize,

    /// Show the N most common English words alongside the results
    #[arg(short, long, value_name = "N", default_value_t = 0)]
    compare: usize,

    /// Tab-separated word list, most common first
    #[arg(long = "corpus-url", default_value = DEFAULT_CORPUS_URL)]
    corpus_url: String,

    /// Corpus lines fetched at a time when removing common words
    #[arg(long = "page-size", default_value_t = 1000)]
    page_size: usize,

    /// Log progress and report errors in full
    #[arg(short, long)]
    verbose: bool,

    /// Text to analyse, or a file name with --file
    text: String,
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| {
            let time_str = Local::now().format("%x - %I:%M.%S%p");
            writeln!(buf, "{time_str} [{}] {}", record.level(), record.args())
        })
        .init();
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = Config {
        number: args.number,
        phrase_min_words: args.phrases,
        histogram: args.histogram,
        show_count: !args.no_count,
        uncommon: args.uncommon,
        compare: args.compare,
        corpus_url: args.corpus_url,
        page_size: args.page_size,
        verbose: args.verbose,
    };
    debug!("{config:?}");

    let text = input::load(&args.text, args.file)?;
    let report = analyze(&text, &config, &HttpTransport::new())
        .with_context(|| format!("analysis of {} characters failed", text.chars().count()))?;

    let mut out = io::BufWriter::new(io::stdout().lock());
    for line in report.lines(&config) {
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    let verbose = args.verbose;
    init_logging(verbose);

    // Ctrl-C ends the run quietly and successfully; nothing is printed
    // until the analysis is complete.
    if let Err(e) = ctrlc::set_handler(|| std::process::exit(0)) {
        debug!("could not install interrupt handler: {e}");
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let program_name = env!("CARGO_BIN_NAME");
            if let Some(WordFreqError::MissingInput(_)) = e.downcast_ref::<WordFreqError>() {
                eprintln!("FATAL ERROR: {e}");
            } else if verbose {
                eprintln!("{program_name}: {e:?}");
            } else {
                let indent = " ".repeat(program_name.len());
                eprintln!("{program_name}: {e}");
                eprintln!("{indent}  for help use --help");
            }
            ExitCode::from(2)
        }
    }
}
