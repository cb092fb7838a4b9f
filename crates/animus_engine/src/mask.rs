//! Masks: contextual personas that modify emotional *expression*.
//!
//! A mask is a non-mutating overlay of emotion deltas. Applying one yields a
//! derived view of an `EmotionalState`; the raw state that all dynamics math
//! runs on is never touched by mask activation.

use crate::error::{EngineError, Result};
use animus_core::EmotionalState;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A contextual persona overlay.
///
/// `name` is unique within a persona's registry. `emotional_modifications`
/// holds signed deltas in [-1.0, 1.0] added on top of the raw vector when
/// the mask is active. `trigger_situations` are keyword phrases matched
/// case-insensitively against stimulus text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mask {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub emotional_modifications: BTreeMap<String, f32>,
    #[serde(default)]
    pub trigger_situations: Vec<String>,
    #[serde(default)]
    pub active_by_default: bool,
}

impl Mask {
    /// Build a validated mask. Fails if any modification delta falls
    /// outside [-1.0, 1.0].
    pub fn new(
        name: impl Into<String>,
        emotional_modifications: BTreeMap<String, f32>,
        trigger_situations: Vec<String>,
    ) -> Result<Self> {
        let mask = Self {
            name: name.into(),
            description: String::new(),
            emotional_modifications,
            trigger_situations,
            active_by_default: false,
        };
        mask.validate()?;
        Ok(mask)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_active_by_default(mut self, active: bool) -> Self {
        self.active_by_default = active;
        self
    }

    /// Check modification deltas are within bounds. Deserialization goes
    /// through serde directly, so loaders call this before accepting a mask.
    pub fn validate(&self) -> Result<()> {
        for (emotion, value) in &self.emotional_modifications {
            if !(-1.0..=1.0).contains(value) {
                return Err(EngineError::MaskModification {
                    mask: self.name.clone(),
                    emotion: emotion.clone(),
                    value: *value,
                });
            }
        }
        Ok(())
    }

    /// Whether this mask should activate for the given situation text.
    ///
    /// True when `active_by_default` is set, or when any trigger phrase
    /// occurs as a case-insensitive substring of the text.
    pub fn should_trigger(&self, situation_text: &str) -> bool {
        if self.active_by_default {
            return true;
        }
        let lower = situation_text.to_lowercase();
        self.trigger_situations
            .iter()
            .any(|phrase| lower.contains(&phrase.to_lowercase()))
    }

    /// Produce the masked view of an emotional state.
    ///
    /// Returns a new state with each configured delta added to the
    /// corresponding emotion, clamped to [0, 1]. Emotions without a
    /// configured modification pass through unchanged, and the input is
    /// never mutated.
    pub fn apply(&self, raw_state: &EmotionalState) -> EmotionalState {
        let mut view = raw_state.clone();
        view.apply_delta(&self.emotional_modifications, 1.0);
        view
    }

    /// The delta configured for one emotion; 0.0 when unconfigured.
    pub fn modification(&self, emotion: &str) -> f32 {
        self.emotional_modifications
            .get(emotion)
            .copied()
            .unwrap_or(0.0)
    }
}

/// Convenience constructor used by the default mask set.
pub(crate) fn build_mask(
    name: &str,
    description: &str,
    modifications: &[(&str, f32)],
    keywords: &[&str],
) -> Mask {
    Mask {
        name: name.to_string(),
        description: description.to_string(),
        emotional_modifications: modifications
            .iter()
            .map(|(e, v)| (e.to_string(), *v))
            .collect(),
        trigger_situations: keywords.iter().map(|k| k.to_string()).collect(),
        active_by_default: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interview_mask() -> Mask {
        build_mask(
            "interview",
            "",
            &[("anxious", -0.3), ("proud", 0.4)],
            &["interview", "formal meeting"],
        )
    }

    #[test]
    fn test_validation_bounds() {
        let mods: BTreeMap<String, f32> = [("anxious".to_string(), -1.5)].into_iter().collect();
        let err = Mask::new("broken", mods, vec![]).unwrap_err();
        assert!(matches!(err, EngineError::MaskModification { .. }));

        let mods: BTreeMap<String, f32> = [("anxious".to_string(), -1.0)].into_iter().collect();
        assert!(Mask::new("edge", mods, vec![]).is_ok());
    }

    #[test]
    fn test_should_trigger_case_insensitive_substring() {
        let mask = interview_mask();
        assert!(mask.should_trigger("Preparing for the INTERVIEW tomorrow"));
        assert!(mask.should_trigger("a formal meeting with the board"));
        assert!(!mask.should_trigger("dinner with friends"));
    }

    #[test]
    fn test_active_by_default_always_triggers() {
        let mask = interview_mask().with_active_by_default(true);
        assert!(mask.should_trigger("anything at all"));
    }

    #[test]
    fn test_apply_is_non_mutating() {
        let mask = interview_mask();
        let mut raw = EmotionalState::new(0.0).unwrap();
        raw.set("anxious", 0.7).unwrap();

        let view = mask.apply(&raw);
        assert!((view.get("anxious").unwrap() - 0.4).abs() < 1e-6);
        assert_eq!(raw.get("anxious").unwrap(), 0.7);
    }

    #[test]
    fn test_apply_clamps_and_passes_through() {
        let mask = interview_mask();
        let mut raw = EmotionalState::new(0.0).unwrap();
        raw.set("proud", 0.8).unwrap();
        raw.set("hopeful", 0.5).unwrap();

        let view = mask.apply(&raw);
        assert_eq!(view.get("proud").unwrap(), 1.0);
        assert_eq!(view.get("hopeful").unwrap(), 0.5);
    }

    #[test]
    fn test_modification_lookup() {
        let mask = interview_mask();
        assert_eq!(mask.modification("anxious"), -0.3);
        assert_eq!(mask.modification("hopeful"), 0.0);
    }

    #[test]
    fn test_serde_roundtrip() {
        let mask = interview_mask().with_description("job interview persona");
        let json = serde_json::to_string(&mask).unwrap();
        let back: Mask = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mask);
    }

    #[test]
    fn test_serde_defaults_for_missing_fields() {
        let mask: Mask = serde_json::from_str(r#"{"name": "bare"}"#).unwrap();
        assert_eq!(mask.name, "bare");
        assert!(mask.emotional_modifications.is_empty());
        assert!(!mask.active_by_default);
    }
}
