use animus_core::AnimusError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// A mask modification delta outside the valid [-1.0, 1.0] range.
    #[error("modification {value} for '{emotion}' in mask '{mask}' is outside [-1.0, 1.0]")]
    MaskModification {
        mask: String,
        emotion: String,
        value: f32,
    },

    /// A mask name was referenced that is not in the registry.
    #[error("no mask named '{name}' is registered")]
    MaskNotFound { name: String },

    /// An error surfaced from the emotional dynamics core.
    #[error(transparent)]
    Core(#[from] AnimusError),
}

pub type Result<T> = std::result::Result<T, EngineError>;
