/// Convenience result type used across the crate.
pub type ChartResult<T> = Result<T, ChartError>;

/// Top-level error taxonomy for projection building and chart output.
#[derive(thiserror::Error, Debug)]
pub enum ChartError {
    /// Literal projection inputs have an invalid shape (e.g. mismatched column lengths).
    #[error("configuration error: {0}")]
    Config(String),

    /// Errors while building, parsing, or rasterizing a chart.
    #[error("render error: {0}")]
    Render(String),

    /// Errors while encoding or writing an output artifact.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ChartError {
    /// Build a [`ChartError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`ChartError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`ChartError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
