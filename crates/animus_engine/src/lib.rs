//! Mask and trigger activation engine.
//!
//! Layers contextual expression on top of `animus_core` emotional states:
//!
//! - **Masks** are named overlays of emotion deltas, activated by keyword
//!   matching against stimulus text. They change what a persona *expresses*,
//!   never the raw state the dynamics math runs on.
//! - **Triggers** are conditional activators: emotional triggers watch the
//!   raw state through threshold rules, situational triggers match keyword
//!   phrases in text. A fired trigger either nudges emotions or activates
//!   a mask.
//! - The **activation engine** runs one pass of both per stimulus and
//!   reports what happened, including a prompt-context string for the
//!   conversation layer.

pub mod defaults;
pub mod engine;
pub mod error;
pub mod mask;
pub mod registry;
pub mod trigger;

pub use defaults::{default_mask, default_masks};
pub use engine::{ActivationEngine, ActivationReport};
pub use error::{EngineError, Result};
pub use mask::Mask;
pub use registry::{MaskRegistry, TriggerSet};
pub use trigger::{CompareOp, FireOutcome, Trigger, TriggerCondition, TriggerResponse, TriggerRule};
