//! The emotion catalog: 36 named emotions in six categories.
//!
//! Each category carries a valence sign (pleasant/unpleasant) and an arousal
//! level (calm/activated). The catalog is fixed: an `EmotionalState` tracks
//! either all of it or a validated subset, never names outside it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// Anger category
pub const HOSTILE: &str = "hostile";
pub const HURT: &str = "hurt";
pub const ANGRY: &str = "angry";
pub const SELFISH: &str = "selfish";
pub const HATEFUL: &str = "hateful";
pub const CRITICAL: &str = "critical";

// Sad category
pub const GUILTY: &str = "guilty";
pub const ASHAMED: &str = "ashamed";
pub const DEPRESSED: &str = "depressed";
pub const LONELY: &str = "lonely";
pub const BORED: &str = "bored";
pub const APATHETIC: &str = "apathetic";

// Fear category
pub const REJECTED: &str = "rejected";
pub const CONFUSED: &str = "confused";
pub const SUBMISSIVE: &str = "submissive";
pub const INSECURE: &str = "insecure";
pub const ANXIOUS: &str = "anxious";
pub const HELPLESS: &str = "helpless";

// Joy category
pub const EXCITED: &str = "excited";
pub const SENSUAL: &str = "sensual";
pub const ENERGETIC: &str = "energetic";
pub const CHEERFUL: &str = "cheerful";
pub const CREATIVE: &str = "creative";
pub const HOPEFUL: &str = "hopeful";

// Powerful category
pub const PROUD: &str = "proud";
pub const RESPECTED: &str = "respected";
pub const APPRECIATED: &str = "appreciated";
pub const IMPORTANT: &str = "important";
pub const FAITHFUL: &str = "faithful";
pub const SATISFIED: &str = "satisfied";

// Peaceful category
pub const CONTENT: &str = "content";
pub const THOUGHTFUL: &str = "thoughtful";
pub const INTIMATE: &str = "intimate";
pub const LOVING: &str = "loving";
pub const TRUSTING: &str = "trusting";
pub const NURTURING: &str = "nurturing";

pub const ANGER_EMOTIONS: [&str; 6] = [HOSTILE, HURT, ANGRY, SELFISH, HATEFUL, CRITICAL];
pub const SAD_EMOTIONS: [&str; 6] = [GUILTY, ASHAMED, DEPRESSED, LONELY, BORED, APATHETIC];
pub const FEAR_EMOTIONS: [&str; 6] = [REJECTED, CONFUSED, SUBMISSIVE, INSECURE, ANXIOUS, HELPLESS];
pub const JOY_EMOTIONS: [&str; 6] = [EXCITED, SENSUAL, ENERGETIC, CHEERFUL, CREATIVE, HOPEFUL];
pub const POWERFUL_EMOTIONS: [&str; 6] =
    [PROUD, RESPECTED, APPRECIATED, IMPORTANT, FAITHFUL, SATISFIED];
pub const PEACEFUL_EMOTIONS: [&str; 6] =
    [CONTENT, THOUGHTFUL, INTIMATE, LOVING, TRUSTING, NURTURING];

/// Every emotion in the catalog, grouped by category.
pub const ALL_EMOTIONS: [&str; 36] = [
    // Anger
    HOSTILE, HURT, ANGRY, SELFISH, HATEFUL, CRITICAL,
    // Sad
    GUILTY, ASHAMED, DEPRESSED, LONELY, BORED, APATHETIC,
    // Fear
    REJECTED, CONFUSED, SUBMISSIVE, INSECURE, ANXIOUS, HELPLESS,
    // Joy
    EXCITED, SENSUAL, ENERGETIC, CHEERFUL, CREATIVE, HOPEFUL,
    // Powerful
    PROUD, RESPECTED, APPRECIATED, IMPORTANT, FAITHFUL, SATISFIED,
    // Peaceful
    CONTENT, THOUGHTFUL, INTIMATE, LOVING, TRUSTING, NURTURING,
];

/// The six major emotional categories.
///
/// Categories cluster related emotions and carry the valence/arousal
/// constants consumed by `EmotionalState::valence()` / `arousal()` and by
/// the trait-modulation logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionCategory {
    Anger,
    Sad,
    Fear,
    Joy,
    Powerful,
    Peaceful,
}

impl EmotionCategory {
    /// Valence sign of the category, from -1.0 (very negative) to 1.0.
    pub fn valence(&self) -> f32 {
        match self {
            EmotionCategory::Anger => -0.8,
            EmotionCategory::Sad => -0.6,
            EmotionCategory::Fear => -0.7,
            EmotionCategory::Joy => 0.9,
            EmotionCategory::Powerful => 0.7,
            EmotionCategory::Peaceful => 0.8,
        }
    }

    /// Activation level of the category, from 0.0 (calm) to 1.0 (activated).
    pub fn arousal(&self) -> f32 {
        match self {
            EmotionCategory::Anger => 0.9,
            EmotionCategory::Sad => 0.2,
            EmotionCategory::Fear => 0.8,
            EmotionCategory::Joy => 0.8,
            EmotionCategory::Powerful => 0.6,
            EmotionCategory::Peaceful => 0.2,
        }
    }

    pub fn is_positive(&self) -> bool {
        matches!(
            self,
            EmotionCategory::Joy | EmotionCategory::Powerful | EmotionCategory::Peaceful
        )
    }

    pub fn is_negative(&self) -> bool {
        matches!(
            self,
            EmotionCategory::Anger | EmotionCategory::Sad | EmotionCategory::Fear
        )
    }

    pub fn description(&self) -> &'static str {
        match self {
            EmotionCategory::Anger => "Hostile, aggressive, and frustrated emotions",
            EmotionCategory::Sad => "Depressive, lonely, and disengaged emotions",
            EmotionCategory::Fear => "Anxious, insecure, and helpless emotions",
            EmotionCategory::Joy => "Happy, energetic, and hopeful emotions",
            EmotionCategory::Powerful => "Confident, proud, and satisfied emotions",
            EmotionCategory::Peaceful => "Calm, loving, and trusting emotions",
        }
    }

    /// The emotions belonging to this category.
    pub fn emotions(&self) -> &'static [&'static str] {
        match self {
            EmotionCategory::Anger => &ANGER_EMOTIONS,
            EmotionCategory::Sad => &SAD_EMOTIONS,
            EmotionCategory::Fear => &FEAR_EMOTIONS,
            EmotionCategory::Joy => &JOY_EMOTIONS,
            EmotionCategory::Powerful => &POWERFUL_EMOTIONS,
            EmotionCategory::Peaceful => &PEACEFUL_EMOTIONS,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionCategory::Anger => "anger",
            EmotionCategory::Sad => "sad",
            EmotionCategory::Fear => "fear",
            EmotionCategory::Joy => "joy",
            EmotionCategory::Powerful => "powerful",
            EmotionCategory::Peaceful => "peaceful",
        }
    }

    pub fn all() -> [EmotionCategory; 6] {
        [
            EmotionCategory::Anger,
            EmotionCategory::Sad,
            EmotionCategory::Fear,
            EmotionCategory::Joy,
            EmotionCategory::Powerful,
            EmotionCategory::Peaceful,
        ]
    }
}

impl fmt::Display for EmotionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmotionCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "anger" => Ok(EmotionCategory::Anger),
            "sad" => Ok(EmotionCategory::Sad),
            "fear" => Ok(EmotionCategory::Fear),
            "joy" => Ok(EmotionCategory::Joy),
            "powerful" => Ok(EmotionCategory::Powerful),
            "peaceful" => Ok(EmotionCategory::Peaceful),
            other => Err(format!(
                "invalid emotion category '{other}', expected one of: anger, sad, fear, joy, powerful, peaceful"
            )),
        }
    }
}

/// Look up the category an emotion belongs to.
///
/// Returns `None` for names outside the catalog; callers that tolerate
/// unknown emotions (delta application, trait modulation) rely on this.
pub fn category_of(emotion: &str) -> Option<EmotionCategory> {
    for category in EmotionCategory::all() {
        if category.emotions().contains(&emotion) {
            return Some(category);
        }
    }
    None
}

/// Whether a name is part of the catalog.
pub fn is_valid_emotion(emotion: &str) -> bool {
    ALL_EMOTIONS.contains(&emotion)
}

/// All emotions from the positive categories (joy, powerful, peaceful).
pub fn positive_emotions() -> Vec<&'static str> {
    EmotionCategory::all()
        .iter()
        .filter(|c| c.is_positive())
        .flat_map(|c| c.emotions().iter().copied())
        .collect()
}

/// All emotions from the negative categories (anger, sad, fear).
pub fn negative_emotions() -> Vec<&'static str> {
    EmotionCategory::all()
        .iter()
        .filter(|c| c.is_negative())
        .flat_map(|c| c.emotions().iter().copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_size() {
        assert_eq!(ALL_EMOTIONS.len(), 36);
        for category in EmotionCategory::all() {
            assert_eq!(category.emotions().len(), 6);
        }
    }

    #[test]
    fn test_category_lookup() {
        assert_eq!(category_of("anxious"), Some(EmotionCategory::Fear));
        assert_eq!(category_of("hopeful"), Some(EmotionCategory::Joy));
        assert_eq!(category_of("trusting"), Some(EmotionCategory::Peaceful));
        assert_eq!(category_of("happiness"), None);
    }

    #[test]
    fn test_valence_signs() {
        for category in EmotionCategory::all() {
            if category.is_negative() {
                assert!(category.valence() < 0.0, "{category} should be negative");
            } else {
                assert!(category.valence() > 0.0, "{category} should be positive");
            }
        }
    }

    #[test]
    fn test_positive_negative_partition() {
        let pos = positive_emotions();
        let neg = negative_emotions();
        assert_eq!(pos.len() + neg.len(), 36);
        assert!(pos.contains(&"hopeful"));
        assert!(!pos.contains(&"anxious"));
        assert!(neg.contains(&"anxious"));
    }

    #[test]
    fn test_category_parse_roundtrip() {
        for category in EmotionCategory::all() {
            let parsed: EmotionCategory = category.as_str().parse().unwrap();
            assert_eq!(parsed, category);
        }
        assert!("serene".parse::<EmotionCategory>().is_err());
    }

    #[test]
    fn test_category_serde_lowercase() {
        let json = serde_json::to_string(&EmotionCategory::Powerful).unwrap();
        assert_eq!(json, "\"powerful\"");
        let back: EmotionCategory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, EmotionCategory::Powerful);
    }

    #[test]
    fn test_is_valid_emotion() {
        assert!(is_valid_emotion("anxious"));
        assert!(is_valid_emotion("nurturing"));
        assert!(!is_valid_emotion("ANXIOUS"));
        assert!(!is_valid_emotion(""));
    }
}
