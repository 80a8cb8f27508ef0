use crate::chunker::DEFAULT_WORDS_PER_CHUNK;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;

/// Presentation of a burned-in caption. Every field maps onto one
/// `drawtext` option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptionStyle {
    #[serde(rename = "fontcolor")]
    pub font_color: String,
    #[serde(rename = "fontsize")]
    pub font_size: u32,
    #[serde(rename = "bordercolor")]
    pub border_color: String,
    #[serde(rename = "borderw")]
    pub border_width: u32,
    pub x: String,
    pub y: String,
}

impl Default for CaptionStyle {
    fn default() -> Self {
        Self {
            font_color: "white".to_string(),
            font_size: 60,
            border_color: "black".to_string(),
            border_width: 4,
            x: "(w-text_w)/2".to_string(),
            y: "(h-text_h)/2".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptionConfig {
    #[serde(default = "default_words_per_chunk")]
    pub words_per_chunk: usize,
    #[serde(default)]
    pub style: CaptionStyle,
}

fn default_words_per_chunk() -> usize {
    DEFAULT_WORDS_PER_CHUNK
}

impl Default for CaptionConfig {
    fn default() -> Self {
        Self {
            words_per_chunk: default_words_per_chunk(),
            style: CaptionStyle::default(),
        }
    }
}

impl CaptionConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        let config: CaptionConfig =
            serde_json::from_str(text).context("Failed to parse caption config JSON")?;
        config.validate()?;
        Ok(config)
    }

    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
        Self::from_json(&content)
            .with_context(|| format!("Invalid config: {}", path.as_ref().display()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.words_per_chunk == 0 {
            anyhow::bail!("words_per_chunk must be at least 1");
        }
        if self.style.font_size == 0 {
            anyhow::bail!("style.fontsize must be at least 1");
        }
        Ok(())
    }
}
