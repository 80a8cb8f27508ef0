use crate::logi;
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

/// Creates the directory an output artifact will be written into, if it
/// does not exist yet.
pub async fn ensure_parent_dir(path: &Path) -> Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_os_str().is_empty() || fs::metadata(parent).await.is_ok() {
        return Ok(());
    }

    fs::create_dir_all(parent)
        .await
        .with_context(|| format!("Failed to create dir {}", parent.display()))?;
    logi(format!("Created directory: {}", parent.display()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn creates_missing_parents() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("a/b/filter.txt");
        ensure_parent_dir(&out).await.unwrap();
        assert!(dir.path().join("a/b").is_dir());

        ensure_parent_dir(&out).await.unwrap();
        ensure_parent_dir(Path::new("filter.txt")).await.unwrap();
    }
}
