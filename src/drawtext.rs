use crate::chunker::CaptionChunk;
use crate::config::CaptionStyle;

/// Escapes text for a single-quoted ffmpeg `drawtext` value.
///
/// Backslashes are doubled before quotes and colons get their own
/// backslash, so the escapes introduced here are never escaped again.
pub fn escape_drawtext(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            ':' => out.push_str("\\:"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn format_chunk(chunk: &CaptionChunk, style: &CaptionStyle) -> String {
    format!(
        "drawtext=text='{}':fontcolor={}:fontsize={}:bordercolor={}:borderw={}:x={}:y={}:enable='between(t,{:.3},{:.3})'",
        escape_drawtext(&chunk.text()),
        style.font_color,
        style.font_size,
        style.border_color,
        style.border_width,
        style.x,
        style.y,
        chunk.start_s,
        chunk.end_s
    )
}

/// Joins every chunk's expression into one filter chain. Empty input
/// gives an empty string.
pub fn build_filter(chunks: &[CaptionChunk], style: &CaptionStyle) -> String {
    chunks
        .iter()
        .map(|chunk| format_chunk(chunk, style))
        .collect::<Vec<_>>()
        .join(",")
}
