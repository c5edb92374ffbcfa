//! Output encoders: PNG files and animated GIF sinks.

pub(crate) mod gif;
pub(crate) mod png;
pub(crate) mod sink;
