use crate::chunker::CaptionChunk;
use std::fmt::Write;

/// `HH:MM:SS,mmm`, rounded to the nearest millisecond.
pub fn format_timestamp(seconds: f64) -> String {
    let total_ms = (seconds.max(0.0) * 1000.0).round() as u64;
    let ms = total_ms % 1000;
    let total_s = total_ms / 1000;
    format!(
        "{:02}:{:02}:{:02},{:03}",
        total_s / 3600,
        (total_s / 60) % 60,
        total_s % 60,
        ms
    )
}

pub fn render_srt(chunks: &[CaptionChunk]) -> String {
    let mut out = String::new();
    for (idx, chunk) in chunks.iter().enumerate() {
        let _ = write!(
            out,
            "{}\n{} --> {}\n{}\n\n",
            idx + 1,
            format_timestamp(chunk.start_s),
            format_timestamp(chunk.end_s),
            chunk.text()
        );
    }
    out
}
