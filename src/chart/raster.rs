use std::sync::Arc;

use crate::foundation::core::{Canvas, FrameRGBA};
use crate::foundation::error::{ChartError, ChartResult};

/// Parses SVG documents with `usvg` and rasterizes them with `resvg`.
///
/// Holds only the parse options (font database); every call renders into a fresh pixmap.
pub struct SvgRasterizer {
    opts: usvg::Options<'static>,
}

impl SvgRasterizer {
    /// Rasterizer with system fonts loaded for text rendering.
    pub fn new() -> Self {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        tracing::debug!(faces = db.len(), "loaded system fonts");
        Self::with_fontdb(db)
    }

    /// Rasterizer without fonts; text nodes are dropped.
    pub fn without_fonts() -> Self {
        Self::with_fontdb(usvg::fontdb::Database::new())
    }

    fn with_fontdb(db: usvg::fontdb::Database) -> Self {
        Self {
            opts: usvg::Options {
                fontdb: Arc::new(db),
                ..Default::default()
            },
        }
    }

    /// Number of font faces available to text nodes.
    pub fn font_faces(&self) -> usize {
        self.opts.fontdb.len()
    }

    /// Parse and render `svg` into a premultiplied frame of `canvas` size.
    pub fn rasterize(&self, svg: &str, canvas: Canvas) -> ChartResult<FrameRGBA> {
        let canvas = Canvas::new(canvas.width, canvas.height)?;
        let tree = usvg::Tree::from_str(svg, &self.opts)
            .map_err(|e| ChartError::render(format!("parse svg: {e}")))?;

        let mut pixmap = resvg::tiny_skia::Pixmap::new(canvas.width, canvas.height)
            .ok_or_else(|| ChartError::render("failed to allocate chart pixmap"))?;

        let sx = (canvas.width as f32) / tree.size().width();
        let sy = (canvas.height as f32) / tree.size().height();
        let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);
        resvg::render(&tree, xform, &mut pixmap.as_mut());

        Ok(FrameRGBA {
            width: canvas.width,
            height: canvas.height,
            data: pixmap.take(),
            premultiplied: true,
        })
    }
}

impl Default for SvgRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/chart/raster.rs"]
mod tests;
