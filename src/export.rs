//! Writing the preview to disk.

use anyhow::Context as _;
use image::ImageFormat;
use std::fs;
use std::io::{Cursor, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

use crate::render::RasterSurface;

/// Encode the surface as PNG and atomically write it to `path`.
pub fn save_png(path: &Path, surface: &RasterSurface) -> anyhow::Result<()> {
    let mut encoded = Vec::new();
    surface
        .image()
        .write_to(&mut Cursor::new(&mut encoded), ImageFormat::Png)
        .context("Failed to encode PNG")?;
    write_atomic(path, &encoded)?;
    let [width, height] = surface.size();
    info!(path = %path.display(), width, height, "image saved");
    Ok(())
}

/// Write `data` next to `path` in a temp file, then rename it over `path`.
fn write_atomic(path: &Path, data: &[u8]) -> anyhow::Result<()> {
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).with_context(|| format!("Failed to create {}", parent.display()))?;
    let mut tmp = NamedTempFile::new_in(parent)
        .with_context(|| format!("Failed to create temp file in {}", parent.display()))?;
    tmp.write_all(data)
        .and_then(|()| tmp.as_file().sync_all())
        .with_context(|| format!("Failed to write {}", tmp.path().display()))?;
    tmp.persist(path)
        .map_err(|err| err.error)
        .with_context(|| format!("Failed to replace {}", path.display()))?;
    Ok(())
}
