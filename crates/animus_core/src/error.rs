//! Error taxonomy for the emotional dynamics core.
//!
//! Every fallible operation validates before mutating, so a returned error
//! never leaves a state partially modified. Unknown emotion keys supplied to
//! the tolerant entry points (`apply_delta`, trait-modulated updates) are
//! deliberately NOT errors: they are skipped, since upstream estimators may
//! reference emotions a given persona does not track.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnimusError {
    /// An emotion name was referenced that this state does not track.
    #[error("emotion '{name}' is not tracked by this state")]
    EmotionNotFound { name: String },

    /// An emotion intensity outside the valid [0.0, 1.0] range.
    #[error("value {value} for '{name}' is outside the valid range [0.0, 1.0]")]
    EmotionValue { name: String, value: f32 },

    /// A trait name outside the trait catalog.
    #[error("trait '{name}' is not a known personality trait")]
    TraitNotFound { name: String },

    /// A trait value outside the valid [0.0, 1.0] range.
    #[error("value {value} for trait '{name}' is outside the valid range [0.0, 1.0]")]
    TraitValue { name: String, value: f32 },
}

pub type Result<T> = std::result::Result<T, AnimusError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = AnimusError::EmotionNotFound {
            name: "serenity".into(),
        };
        assert!(err.to_string().contains("serenity"));

        let err = AnimusError::EmotionValue {
            name: "anxious".into(),
            value: 1.5,
        };
        assert!(err.to_string().contains("1.5"));
        assert!(err.to_string().contains("anxious"));
    }
}
