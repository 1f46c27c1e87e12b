/// Convenience result type used across arcbanner.
pub type ArcBannerResult<T> = Result<T, ArcBannerError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum ArcBannerError {
    /// Invalid caller-provided parameters (canvas size, spans, font sizes).
    #[error("validation error: {0}")]
    Validation(String),

    /// A catalog font could not be resolved or registered.
    #[error("font error: {0}")]
    Font(String),

    /// Errors while painting layers onto the raster surface.
    #[error("render error: {0}")]
    Render(String),

    /// Errors while encoding the finished surface.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ArcBannerError {
    /// Build an [`ArcBannerError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`ArcBannerError::Font`] value.
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    /// Build an [`ArcBannerError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build an [`ArcBannerError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
