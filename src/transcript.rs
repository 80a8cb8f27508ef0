use serde::Deserialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use tracing::debug;

/// Top-level key a whisper JSON document stores its segments under.
pub const TRANSCRIPTION_KEY: &str = "transcription";

#[derive(Debug, Error)]
pub enum TranscriptError {
    #[error("Could not read transcript {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Could not parse JSON file")]
    Unparseable,
    #[error("No transcription found in Whisper JSON")]
    MissingTranscription,
    #[error("Malformed transcription")]
    Malformed(#[source] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Offsets {
    pub from: i64,
    pub to: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Segment {
    #[serde(default)]
    pub text: String,
    pub offsets: Offsets,
}

impl Segment {
    pub fn new(text: impl Into<String>, from: i64, to: i64) -> Self {
        Self {
            text: text.into(),
            offsets: Offsets { from, to },
        }
    }

    pub fn start_ms(&self) -> i64 {
        self.offsets.from
    }

    pub fn end_ms(&self) -> i64 {
        self.offsets.to
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Transcript {
    pub transcription: Vec<Segment>,
}

/// Ways a raw transcript file may be laid out, tried in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseStrategy {
    /// The whole file is one JSON document.
    WholeDocument,
    /// One JSON document per line (whisper's JSONL output).
    JsonLines,
}

const STRATEGIES: [ParseStrategy; 2] = [ParseStrategy::WholeDocument, ParseStrategy::JsonLines];

impl ParseStrategy {
    fn documents(self, raw: &str) -> Vec<Value> {
        match self {
            ParseStrategy::WholeDocument => serde_json::from_str(raw).ok().into_iter().collect(),
            ParseStrategy::JsonLines => raw
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .filter_map(|line| match serde_json::from_str::<Value>(line) {
                    Ok(doc) => Some(doc),
                    Err(err) => {
                        debug!("skipping unparseable JSONL line: {err}");
                        None
                    }
                })
                .collect(),
        }
    }
}

fn has_transcription(doc: &Value) -> bool {
    doc.get(TRANSCRIPTION_KEY).is_some()
}

pub fn load_transcript_str(raw: &str) -> Result<Transcript, TranscriptError> {
    let raw = raw.trim();
    let mut saw_document = false;

    for strategy in STRATEGIES {
        for doc in strategy.documents(raw) {
            saw_document = true;
            if has_transcription(&doc) {
                debug!("transcript matched by {strategy:?}");
                return serde_json::from_value(doc).map_err(TranscriptError::Malformed);
            }
        }
    }

    if saw_document {
        Err(TranscriptError::MissingTranscription)
    } else {
        Err(TranscriptError::Unparseable)
    }
}

pub async fn load_transcript<P: AsRef<Path>>(path: P) -> Result<Transcript, TranscriptError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .await
        .map_err(|source| TranscriptError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    load_transcript_str(&raw)
}
