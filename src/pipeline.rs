use crate::chunker::chunk_transcript;
use crate::config::CaptionConfig;
use crate::drawtext::build_filter;
use crate::init::ensure_parent_dir;
use crate::srt::render_srt;
use crate::transcript::load_transcript;
use crate::{logi, logok, logw};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub srt: Option<PathBuf>,
    pub config: CaptionConfig,
}

impl RunOptions {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            srt: None,
            config: CaptionConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Written { chunks: usize },
    /// The transcript parsed but held no captionable words; an empty
    /// filter was written.
    Empty,
}

async fn write_artifact(path: &Path, data: &str) -> Result<()> {
    ensure_parent_dir(path).await?;
    fs::write(path, data)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))
}

/// Turns one whisper transcript into a `drawtext` filter chain file.
///
/// Transcript failures are returned as [`crate::transcript::TranscriptError`]
/// wrapped in the `anyhow::Error`.
pub async fn run(opts: &RunOptions) -> Result<RunOutcome> {
    logi(format!("Reading transcript: {}", opts.input.display()));
    let transcript = load_transcript(&opts.input).await?;
    debug!("{} segments loaded", transcript.transcription.len());

    let chunks = chunk_transcript(&transcript, opts.config.words_per_chunk);
    let filter = build_filter(&chunks, &opts.config.style);
    write_artifact(&opts.output, &filter).await?;

    if let Some(srt_path) = &opts.srt {
        write_artifact(srt_path, &render_srt(&chunks)).await?;
        logi(format!("Wrote SRT sidecar: {}", srt_path.display()));
    }

    if chunks.is_empty() {
        logw("No text chunks created");
        return Ok(RunOutcome::Empty);
    }

    logok(format!(
        "Generated TikTok-style subtitle filter with {} chunks: {}",
        chunks.len(),
        opts.output.display()
    ));
    Ok(RunOutcome::Written {
        chunks: chunks.len(),
    })
}
