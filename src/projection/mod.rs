//! Projection table, derived metrics, and scenario sweep.

pub mod constants;
pub(crate) mod payback;
pub(crate) mod sensitivity;
pub(crate) mod table;
