use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tiktok_subs::config::CaptionConfig;
use tiktok_subs::logerr;
use tiktok_subs::pipeline::{self, RunOptions};
use tracing_subscriber::filter::LevelFilter;

/// Convert a whisper JSON transcript into an ffmpeg drawtext filter that
/// shows a few words at a time, centered on screen.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Whisper JSON or JSONL transcript
    input: PathBuf,

    /// Where to write the filter chain
    output: PathBuf,

    /// JSON file with caption style and chunking settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Words shown per caption (overrides the config file)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    words_per_chunk: Option<u32>,

    /// Also write the captions as an SRT file
    #[arg(long)]
    srt: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

async fn build_options(cli: Cli) -> Result<RunOptions> {
    let mut config = match &cli.config {
        Some(path) => CaptionConfig::load(path).await?,
        None => CaptionConfig::default(),
    };
    if let Some(n) = cli.words_per_chunk {
        config.words_per_chunk = n as usize;
    }

    Ok(RunOptions {
        input: cli.input,
        output: cli.output,
        srt: cli.srt,
        config,
    })
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let result = match build_options(cli).await {
        Ok(opts) => pipeline::run(&opts).await,
        Err(err) => Err(err),
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            logerr(format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}
