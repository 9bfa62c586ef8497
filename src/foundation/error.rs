/// Convenient result alias used across the crate.
pub type BankLockerResult<T> = Result<T, BankLockerError>;

/// Top-level error type for scene construction, evaluation and rendering.
///
/// The layout calculator itself never fails; every variant here belongs to the timeline and
/// rendering layers around it.
#[derive(thiserror::Error, Debug)]
pub enum BankLockerError {
    /// Invalid user-provided configuration or scene structure.
    #[error("validation error: {0}")]
    Validation(String),

    /// Invalid animation track definition or sampling request.
    #[error("animation error: {0}")]
    Animation(String),

    /// Failure while sampling the scene at a frame.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Failure while rasterizing a frame.
    #[error("render error: {0}")]
    Render(String),

    /// JSON (de)serialization failure for configs or layout dumps.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BankLockerError {
    /// Build a [`BankLockerError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BankLockerError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`BankLockerError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`BankLockerError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`BankLockerError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
