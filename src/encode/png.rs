use std::path::Path;

use anyhow::Context as _;

use crate::foundation::core::FrameRGBA;
use crate::foundation::error::ChartResult;

/// Create the parent directory of `path` if it does not exist.
pub fn ensure_parent_dir(path: &Path) -> ChartResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

/// Write `frame` to `path` as a PNG with straight alpha.
pub fn write_png(path: &Path, frame: FrameRGBA) -> ChartResult<()> {
    ensure_parent_dir(path)?;
    let img = frame.into_rgba_image()?;
    img.save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
