//! Report assembly: which files exist, how each is drawn, and the run that writes them.

pub(crate) mod artifact;
pub mod charts;
pub(crate) mod metrics;
pub(crate) mod pipeline;
