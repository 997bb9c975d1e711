/// Convenience result type used across wavyte-morph.
pub type MorphResult<T> = Result<T, MorphError>;

/// Top-level error taxonomy used by transform APIs.
///
/// Every variant is fatal at this layer: they describe caller misconfiguration, not
/// transient conditions, and are raised before any frame is produced.
#[derive(thiserror::Error, Debug)]
pub enum MorphError {
    /// Missing target, invalid method call, rejected function result or bad matrix shape.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Two mobject trees that cannot be made congruent.
    #[error("structural error: {0}")]
    Structural(String),

    /// Lifecycle misuse, e.g. interpolating before `begin`.
    #[error("animation error: {0}")]
    Animation(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or user callbacks.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MorphError {
    /// Build a [`MorphError::Configuration`] value.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Build a [`MorphError::Structural`] value.
    pub fn structural(msg: impl Into<String>) -> Self {
        Self::Structural(msg.into())
    }

    /// Build a [`MorphError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`MorphError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
