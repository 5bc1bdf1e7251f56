use anyhow::{Result, anyhow};
use chrono::NaiveDateTime;
use std::fmt::Write;
use std::path::{Path, PathBuf};

/// Render `now` with a strftime pattern, failing on specifiers a naive time cannot fill (`%z`).
pub fn render_timestamp(timestamp_format: &str, now: NaiveDateTime) -> Result<String> {
    let mut stamp = String::new();
    write!(stamp, "{}", now.format(timestamp_format))
        .map_err(|_| anyhow!("timestamp format {timestamp_format:?} cannot be rendered"))?;
    Ok(stamp)
}

/// `path` itself if free, otherwise `<stem>_<timestamp><.ext>` next to it.
pub fn unique_output_path(
    path: &Path,
    timestamp_format: &str,
    now: NaiveDateTime,
) -> Result<PathBuf> {
    if !path.exists() {
        return Ok(path.to_path_buf());
    }

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    let stamp = render_timestamp(timestamp_format, now)?;

    Ok(path.with_file_name(format!("{stem}_{stamp}{ext}")))
}
