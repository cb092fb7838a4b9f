//! Emotional dynamics core.
//!
//! Models a persona's psychological state as a bounded vector of emotion
//! intensities over a fixed 36-emotion catalog. State evolves through four
//! operations applied per conversational turn:
//!
//! 1. **Decay**: emotions relax toward a slow-moving mood baseline.
//! 2. **Trait-modulated change**: incoming target values are scaled by a
//!    reactivity factor derived from a personality trait profile.
//! 3. **Antagonism**: contradictory emotion pairs suppress each other.
//! 4. **Baseline update**: the mood baseline drifts toward lived state.
//!
//! Everything is synchronous, in-memory, and deterministic. Persistence and
//! expression layers live in `animus_engine`.

pub mod config;
pub mod emotion;
pub mod error;
pub mod state;
pub mod traits;

pub use config::DynamicsConfig;
pub use emotion::{category_of, is_valid_emotion, EmotionCategory, ALL_EMOTIONS};
pub use error::{AnimusError, Result};
pub use state::{EmotionMap, EmotionalState, ANTAGONISTIC_PAIRS};
pub use traits::{TraitCoefficients, TraitProfile, ALL_TRAITS};
