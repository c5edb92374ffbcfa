use std::path::PathBuf;

use anyhow::Context as _;
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame};

use crate::encode::png::ensure_parent_dir;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{FrameIndex, FrameRGBA};
use crate::foundation::error::{ChartError, ChartResult};

/// Options for [`GifSink`] output.
#[derive(Clone, Debug)]
pub struct GifSinkOpts {
    /// Output GIF path.
    pub out_path: PathBuf,
    /// Color quantization speed, 1 (best) to 30 (fastest).
    pub speed: i32,
    /// Loop forever instead of playing once.
    pub repeat: bool,
}

impl GifSinkOpts {
    /// Options for writing a looping GIF to `out_path`.
    pub fn new(out_path: impl Into<PathBuf>) -> Self {
        Self {
            out_path: out_path.into(),
            speed: 10,
            repeat: true,
        }
    }
}

/// Sink that collects frames and writes an animated GIF on `end`.
///
/// The file is only created once every frame has been encoded, so a failed animation never
/// leaves a truncated GIF behind.
pub struct GifSink {
    opts: GifSinkOpts,
    cfg: Option<SinkConfig>,
    frames: Vec<Frame>,
    last_idx: Option<FrameIndex>,
}

impl GifSink {
    /// Create a new GIF sink.
    pub fn new(opts: GifSinkOpts) -> Self {
        Self {
            opts,
            cfg: None,
            frames: Vec::new(),
            last_idx: None,
        }
    }
}

impl FrameSink for GifSink {
    fn begin(&mut self, cfg: SinkConfig) -> ChartResult<()> {
        if cfg.width == 0 || cfg.height == 0 {
            return Err(ChartError::encode("gif sink width/height must be non-zero"));
        }
        if cfg.width > u32::from(u16::MAX) || cfg.height > u32::from(u16::MAX) {
            return Err(ChartError::encode(format!(
                "gif frames are limited to {0}x{0}, got {1}x{2}",
                u16::MAX,
                cfg.width,
                cfg.height
            )));
        }
        if !(1..=30).contains(&self.opts.speed) {
            return Err(ChartError::encode("gif speed must be within 1..=30"));
        }
        self.cfg = Some(cfg);
        self.frames.clear();
        self.last_idx = None;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> ChartResult<()> {
        let cfg = self
            .cfg
            .ok_or_else(|| ChartError::encode("gif sink used before begin"))?;
        if let Some(prev) = self.last_idx
            && idx <= prev
        {
            return Err(ChartError::encode(format!(
                "gif frames out of order: {} after {}",
                idx.0, prev.0
            )));
        }
        if frame.width != cfg.width || frame.height != cfg.height {
            return Err(ChartError::encode(format!(
                "frame {} is {}x{}, expected {}x{}",
                idx.0, frame.width, frame.height, cfg.width, cfg.height
            )));
        }

        let img = frame.clone().into_rgba_image()?;
        let delay = Delay::from_numer_denom_ms(cfg.frame_delay_ms, 1);
        self.frames.push(Frame::from_parts(img, 0, 0, delay));
        self.last_idx = Some(idx);
        Ok(())
    }

    fn end(&mut self) -> ChartResult<()> {
        if self.cfg.is_none() {
            return Err(ChartError::encode("gif sink ended before begin"));
        }
        if self.frames.is_empty() {
            return Err(ChartError::encode("gif sink received no frames"));
        }

        let mut bytes = Vec::new();
        {
            let mut encoder = GifEncoder::new_with_speed(&mut bytes, self.opts.speed);
            let repeat = if self.opts.repeat {
                Repeat::Infinite
            } else {
                Repeat::Finite(1)
            };
            encoder
                .set_repeat(repeat)
                .map_err(|e| ChartError::encode(format!("gif repeat: {e}")))?;
            encoder
                .encode_frames(self.frames.drain(..))
                .map_err(|e| ChartError::encode(format!("gif encode: {e}")))?;
        }

        ensure_parent_dir(&self.opts.out_path)?;
        std::fs::write(&self.opts.out_path, &bytes)
            .with_context(|| format!("write gif '{}'", self.opts.out_path.display()))?;
        tracing::debug!(
            path = %self.opts.out_path.display(),
            bytes = bytes.len(),
            "gif written"
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gif.rs"]
mod tests;
