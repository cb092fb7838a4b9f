//! Personality traits and the trait→emotion coefficient table.
//!
//! Traits modulate how strongly a persona reacts to emotional updates: high
//! emotional stability dampens shifts, high sensitivity amplifies them, and
//! each trait carries per-emotion coefficients that bias specific emotions.
//!
//! The coefficient table is an immutable lookup built once and passed by
//! reference into `EmotionalState::apply_trait_modulated_change`; there is
//! no module-level mutable state, so different personas can use independent
//! or overridden tables.

use crate::error::{AnimusError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const WARMTH: &str = "warmth";
pub const REASONING: &str = "reasoning";
pub const EMOTIONAL_STABILITY: &str = "emotional_stability";
pub const DOMINANCE: &str = "dominance";
pub const LIVELINESS: &str = "liveliness";
pub const RULE_CONSCIOUSNESS: &str = "rule_consciousness";
pub const SOCIAL_BOLDNESS: &str = "social_boldness";
pub const SENSITIVITY: &str = "sensitivity";
pub const VIGILANCE: &str = "vigilance";
pub const ABSTRACTEDNESS: &str = "abstractedness";
pub const PRIVATENESS: &str = "privateness";
pub const APPREHENSION: &str = "apprehension";
pub const OPENNESS_TO_CHANGE: &str = "openness_to_change";
pub const SELF_RELIANCE: &str = "self_reliance";
pub const PERFECTIONISM: &str = "perfectionism";
pub const TENSION: &str = "tension";
pub const HUMILITY: &str = "humility";

/// Every trait in the catalog.
pub const ALL_TRAITS: [&str; 17] = [
    WARMTH,
    REASONING,
    EMOTIONAL_STABILITY,
    DOMINANCE,
    LIVELINESS,
    RULE_CONSCIOUSNESS,
    SOCIAL_BOLDNESS,
    SENSITIVITY,
    VIGILANCE,
    ABSTRACTEDNESS,
    PRIVATENESS,
    APPREHENSION,
    OPENNESS_TO_CHANGE,
    SELF_RELIANCE,
    PERFECTIONISM,
    TENSION,
    HUMILITY,
];

/// Whether a name is part of the trait catalog.
pub fn is_valid_trait(trait_name: &str) -> bool {
    ALL_TRAITS.contains(&trait_name)
}

/// A validated map of trait name → value in [0.0, 1.0].
///
/// Untracked traits read as 0.5, the population average, so a sparse profile
/// behaves like an average person on the traits it leaves out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraitProfile {
    traits: BTreeMap<String, f32>,
}

impl TraitProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a trait value, validating name and range first.
    pub fn set(&mut self, trait_name: &str, value: f32) -> Result<()> {
        if !is_valid_trait(trait_name) {
            return Err(AnimusError::TraitNotFound {
                name: trait_name.to_string(),
            });
        }
        if !(0.0..=1.0).contains(&value) {
            return Err(AnimusError::TraitValue {
                name: trait_name.to_string(),
                value,
            });
        }
        self.traits.insert(trait_name.to_string(), value);
        Ok(())
    }

    /// Read a trait value, defaulting to 0.5 for traits not explicitly set.
    pub fn get(&self, trait_name: &str) -> f32 {
        self.traits.get(trait_name).copied().unwrap_or(0.5)
    }

    /// Build a profile from (trait, value) pairs; fails on the first invalid
    /// name or out-of-range value without constructing a partial profile.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, f32)>,
    {
        let mut profile = Self::new();
        for (name, value) in pairs {
            profile.set(name, value)?;
        }
        Ok(profile)
    }

    /// Iterate over explicitly-set traits.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f32)> {
        self.traits.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.traits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.traits.is_empty()
    }
}

/// Immutable trait→emotion coefficient lookup.
///
/// Coefficients range from -1.0 to 1.0. Positive means the trait amplifies
/// the emotion's reactivity, negative dampens it, absent means no
/// relationship.
#[derive(Debug, Clone)]
pub struct TraitCoefficients {
    table: BTreeMap<&'static str, BTreeMap<&'static str, f32>>,
}

impl TraitCoefficients {
    /// The built-in coefficient table.
    pub fn builtin() -> Self {
        let mut table: BTreeMap<&'static str, BTreeMap<&'static str, f32>> = BTreeMap::new();
        let mut insert = |trait_name: &'static str, coeffs: &[(&'static str, f32)]| {
            table.insert(trait_name, coeffs.iter().copied().collect());
        };

        insert(
            WARMTH,
            &[
                ("loving", 0.4),
                ("trusting", 0.3),
                ("nurturing", 0.3),
                ("intimate", 0.3),
                ("hostile", -0.5),
                ("critical", -0.3),
                ("lonely", -0.2),
                ("hateful", -0.4),
            ],
        );
        insert(
            REASONING,
            &[
                ("confused", -0.3),
                ("creative", 0.2),
                ("thoughtful", 0.3),
                ("helpless", -0.2),
            ],
        );
        insert(
            EMOTIONAL_STABILITY,
            &[
                ("anxious", -0.5),
                ("depressed", -0.4),
                ("angry", -0.3),
                ("content", 0.4),
                ("satisfied", 0.3),
                ("helpless", -0.3),
                ("guilty", -0.2),
                ("ashamed", -0.2),
            ],
        );
        insert(
            DOMINANCE,
            &[
                ("proud", 0.3),
                ("important", 0.3),
                ("respected", 0.3),
                ("submissive", -0.5),
                ("helpless", -0.3),
                ("insecure", -0.3),
                ("hostile", 0.2),
                ("critical", 0.2),
            ],
        );
        insert(
            HUMILITY,
            &[
                ("proud", -0.3),
                ("important", -0.2),
                ("appreciated", 0.2),
                ("content", 0.2),
                ("selfish", -0.4),
            ],
        );
        insert(
            LIVELINESS,
            &[
                ("excited", 0.4),
                ("cheerful", 0.4),
                ("energetic", 0.4),
                ("hopeful", 0.3),
                ("bored", -0.4),
                ("apathetic", -0.4),
                ("depressed", -0.3),
            ],
        );
        insert(
            RULE_CONSCIOUSNESS,
            &[
                ("guilty", 0.3),
                ("ashamed", 0.2),
                ("satisfied", 0.2),
                ("faithful", 0.3),
                ("selfish", -0.3),
            ],
        );
        insert(
            SOCIAL_BOLDNESS,
            &[
                ("rejected", -0.4),
                ("insecure", -0.4),
                ("submissive", -0.3),
                ("excited", 0.2),
                ("energetic", 0.2),
                ("respected", 0.2),
                ("lonely", -0.2),
            ],
        );
        insert(
            SENSITIVITY,
            &[
                ("loving", 0.3),
                ("hurt", 0.3),
                ("intimate", 0.3),
                ("sensual", 0.3),
                ("lonely", 0.2),
                ("depressed", 0.2),
                ("creative", 0.2),
            ],
        );
        insert(
            VIGILANCE,
            &[
                ("trusting", -0.5),
                ("anxious", 0.3),
                ("hostile", 0.2),
                ("critical", 0.3),
                ("insecure", 0.2),
            ],
        );
        insert(
            ABSTRACTEDNESS,
            &[
                ("creative", 0.4),
                ("thoughtful", 0.3),
                ("confused", 0.2),
                ("bored", -0.2),
            ],
        );
        insert(
            PRIVATENESS,
            &[
                ("intimate", -0.3),
                ("trusting", -0.2),
                ("insecure", 0.2),
                ("lonely", 0.2),
            ],
        );
        insert(
            APPREHENSION,
            &[
                ("anxious", 0.4),
                ("guilty", 0.3),
                ("ashamed", 0.3),
                ("insecure", 0.4),
                ("helpless", 0.3),
                ("content", -0.3),
                ("satisfied", -0.3),
                ("proud", -0.3),
            ],
        );
        insert(
            OPENNESS_TO_CHANGE,
            &[
                ("excited", 0.3),
                ("creative", 0.3),
                ("hopeful", 0.2),
                ("anxious", 0.1),
                ("bored", -0.3),
                ("content", -0.1),
            ],
        );
        insert(
            SELF_RELIANCE,
            &[
                ("lonely", 0.2),
                ("rejected", -0.2),
                ("important", 0.2),
                ("trusting", -0.2),
                ("intimate", -0.2),
            ],
        );
        insert(
            PERFECTIONISM,
            &[
                ("satisfied", 0.2),
                ("guilty", 0.2),
                ("angry", 0.3),
                ("critical", 0.3),
                ("anxious", 0.2),
            ],
        );
        insert(
            TENSION,
            &[
                ("anxious", 0.4),
                ("angry", 0.4),
                ("hostile", 0.3),
                ("content", -0.4),
                ("energetic", 0.2),
            ],
        );

        Self { table }
    }

    /// Coefficient for a trait-emotion pair; 0.0 when no relationship exists.
    pub fn coefficient(&self, trait_name: &str, emotion: &str) -> f32 {
        self.table
            .get(trait_name)
            .and_then(|coeffs| coeffs.get(emotion))
            .copied()
            .unwrap_or(0.0)
    }

    /// Emotions with a non-zero coefficient for the given trait.
    pub fn affected_emotions(&self, trait_name: &str) -> Vec<&'static str> {
        self.table
            .get(trait_name)
            .map(|coeffs| coeffs.keys().copied().collect())
            .unwrap_or_default()
    }

    /// Traits with a non-zero coefficient for the given emotion.
    pub fn traits_affecting(&self, emotion: &str) -> BTreeMap<&'static str, f32> {
        self.table
            .iter()
            .filter_map(|(trait_name, coeffs)| {
                coeffs.get(emotion).map(|c| (*trait_name, *c))
            })
            .collect()
    }
}

impl Default for TraitCoefficients {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_validation() {
        let mut profile = TraitProfile::new();
        profile.set(WARMTH, 0.9).unwrap();
        assert_eq!(profile.get(WARMTH), 0.9);

        let err = profile.set("charisma", 0.5).unwrap_err();
        assert_eq!(
            err,
            AnimusError::TraitNotFound {
                name: "charisma".into()
            }
        );

        let err = profile.set(TENSION, 1.2).unwrap_err();
        assert_eq!(
            err,
            AnimusError::TraitValue {
                name: TENSION.into(),
                value: 1.2
            }
        );
    }

    #[test]
    fn test_profile_defaults_to_average() {
        let profile = TraitProfile::new();
        assert_eq!(profile.get(EMOTIONAL_STABILITY), 0.5);
    }

    #[test]
    fn test_coefficient_lookup() {
        let coeffs = TraitCoefficients::builtin();
        assert_eq!(coeffs.coefficient(WARMTH, "loving"), 0.4);
        assert_eq!(coeffs.coefficient(WARMTH, "excited"), 0.0);
        assert_eq!(coeffs.coefficient("unknown", "loving"), 0.0);
    }

    #[test]
    fn test_affected_emotions() {
        let coeffs = TraitCoefficients::builtin();
        let affected = coeffs.affected_emotions(WARMTH);
        assert!(affected.contains(&"loving"));
        assert!(affected.contains(&"hostile"));
        assert!(coeffs.affected_emotions("unknown").is_empty());
    }

    #[test]
    fn test_traits_affecting_emotion() {
        let coeffs = TraitCoefficients::builtin();
        let traits = coeffs.traits_affecting("anxious");
        assert_eq!(traits.get(EMOTIONAL_STABILITY), Some(&-0.5));
        assert_eq!(traits.get(APPREHENSION), Some(&0.4));
        assert!(!traits.contains_key(WARMTH));
    }

    #[test]
    fn test_coefficients_in_range() {
        let coeffs = TraitCoefficients::builtin();
        for trait_name in ALL_TRAITS {
            for emotion in coeffs.affected_emotions(trait_name) {
                let c = coeffs.coefficient(trait_name, emotion);
                assert!((-1.0..=1.0).contains(&c), "{trait_name}/{emotion}: {c}");
            }
        }
    }

    #[test]
    fn test_profile_serde_flat_map() {
        let profile = TraitProfile::from_pairs([(WARMTH, 0.8), (TENSION, 0.3)]).unwrap();
        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains("\"warmth\":0.8"));
        let back: TraitProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, profile);
    }

    #[test]
    fn test_from_pairs_rejects_invalid() {
        assert!(TraitProfile::from_pairs([("warmth", 0.5), ("moxie", 0.5)]).is_err());
    }
}
