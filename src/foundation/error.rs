/// Convenience result type used across Starbright.
pub type StarbrightResult<T> = Result<T, StarbrightError>;

/// Top-level error taxonomy used by library APIs.
///
/// The geometry generators never return errors; this type covers the
/// boundaries (scene files, animation validation, rasterizing, HTTP).
#[derive(thiserror::Error, Debug)]
pub enum StarbrightError {
    /// Invalid user-provided scene or decoration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while validating or sampling animation expressions.
    #[error("animation error: {0}")]
    Animation(String),

    /// Errors while turning SVG markup into pixels or image files.
    #[error("render error: {0}")]
    Render(String),

    /// Contact form submission could not be delivered.
    #[error("transport error: {0}")]
    Transport(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StarbrightError {
    /// Build a [`StarbrightError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`StarbrightError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`StarbrightError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`StarbrightError::Transport`] value.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Build a [`StarbrightError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for StarbrightError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
