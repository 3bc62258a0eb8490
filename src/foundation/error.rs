/// Convenience result type used across scrollreel.
pub type ScrollreelResult<T> = Result<T, ScrollreelError>;

/// Top-level error taxonomy used by runner and timeline APIs.
#[derive(thiserror::Error, Debug)]
pub enum ScrollreelError {
    /// Invalid caller-provided data (timing, keyframes, style vars, batches).
    #[error("validation error: {0}")]
    Validation(String),

    /// A host reference could not be resolved (scrolling element, detached element).
    #[error("resolution error: {0}")]
    Resolution(String),

    /// A lifecycle method was called in a state that does not allow it.
    #[error("lifecycle error: {0}")]
    Lifecycle(String),

    /// Errors while sampling timelines or effects.
    #[error("animation error: {0}")]
    Animation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from a host implementation or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScrollreelError {
    /// Build a [`ScrollreelError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ScrollreelError::Resolution`] value.
    pub fn resolution(msg: impl Into<String>) -> Self {
        Self::Resolution(msg.into())
    }

    /// Build a [`ScrollreelError::Lifecycle`] value.
    pub fn lifecycle(msg: impl Into<String>) -> Self {
        Self::Lifecycle(msg.into())
    }

    /// Build a [`ScrollreelError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`ScrollreelError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ScrollreelError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
