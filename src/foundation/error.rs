/// Convenience result type used across typereveal.
pub type RevealResult<T> = Result<T, RevealError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Layout overflow is deliberately absent: it is advisory and reported as a
/// [`crate::LayoutWarning`] instead.
#[derive(thiserror::Error, Debug)]
pub enum RevealError {
    /// Invalid user-provided configuration or caption data.
    #[error("validation error: {0}")]
    Validation(String),

    /// A font requested by a resolved style could not be loaded.
    #[error("missing style asset: font '{font}': {reason}")]
    MissingStyleAsset {
        /// Font identifier as written in the configuration or group override.
        font: String,
        /// Human-readable cause.
        reason: String,
    },

    /// Errors raised by a text or canvas backend while drawing.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RevealError {
    /// Build a [`RevealError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`RevealError::MissingStyleAsset`] value.
    pub fn missing_style_asset(font: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MissingStyleAsset {
            font: font.into(),
            reason: reason.into(),
        }
    }

    /// Build a [`RevealError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`RevealError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
