//! Chart description, SVG output, and rasterization.

pub mod figure;
pub(crate) mod raster;
pub mod style;
pub(crate) mod svg;
