use crate::transcript::{Segment, Transcript};

pub const DEFAULT_WORDS_PER_CHUNK: usize = 3;

/// One on-screen caption: a short run of consecutive words and the
/// window (in seconds) during which it is shown.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionChunk {
    pub words: Vec<String>,
    pub start_s: f64,
    pub end_s: f64,
}

impl CaptionChunk {
    pub fn text(&self) -> String {
        self.words.join(" ")
    }
}

/// Splits a segment into chunks of `words_per_chunk` words, spreading the
/// segment duration linearly over its words.
pub fn chunk_segment(segment: &Segment, words_per_chunk: usize) -> Vec<CaptionChunk> {
    let text = segment.text.trim();
    if text.is_empty() {
        return Vec::new();
    }

    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return Vec::new();
    }

    let stride = words_per_chunk.max(1);
    let word_count = words.len() as f64;
    let start_ms = segment.start_ms() as f64;
    // inverted offsets collapse to a zero-length segment
    let duration_ms = (segment.end_ms() as f64 - start_ms).max(0.0);
    let boundary_s =
        |word_idx: usize| (start_ms + duration_ms * word_idx as f64 / word_count) / 1000.0;

    words
        .chunks(stride)
        .enumerate()
        .map(|(n, run)| {
            let first = n * stride;
            CaptionChunk {
                words: run.iter().map(|w| (*w).to_string()).collect(),
                start_s: boundary_s(first),
                end_s: boundary_s(first + run.len()),
            }
        })
        .collect()
}

pub fn chunk_transcript(transcript: &Transcript, words_per_chunk: usize) -> Vec<CaptionChunk> {
    transcript
        .transcription
        .iter()
        .flat_map(|segment| chunk_segment(segment, words_per_chunk))
        .collect()
}
