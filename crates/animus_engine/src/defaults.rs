//! Predefined masks for common social contexts.
//!
//! Usable directly or as templates for custom masks.

use crate::mask::{build_mask, Mask};

/// Workplace persona. Suppresses strong emotional displays and promotes
/// calm, composed behavior.
pub fn professional_mask() -> Mask {
    build_mask(
        "professional",
        "Workplace persona that suppresses strong emotions and promotes \
         calm, composed behavior suitable for professional environments.",
        &[
            ("angry", -0.5),
            ("hostile", -0.5),
            ("hateful", -0.6),
            ("critical", -0.3),
            ("excited", -0.3),
            ("content", 0.2),
            ("satisfied", 0.2),
            ("thoughtful", 0.3),
        ],
        &[
            "office",
            "meeting",
            "professional",
            "work",
            "conference",
            "presentation",
            "interview",
            "client",
            "boss",
            "colleague",
        ],
    )
}

/// Relaxed persona for informal social situations. Allows more natural
/// emotional expression and reduces guardedness.
pub fn casual_mask() -> Mask {
    build_mask(
        "casual",
        "Relaxed persona for informal social situations that allows more \
         natural emotional expression.",
        &[
            ("excited", 0.2),
            ("cheerful", 0.2),
            ("energetic", 0.2),
            ("insecure", -0.2),
            ("anxious", -0.2),
            ("loving", 0.1),
            ("trusting", 0.2),
        ],
        &[
            "party",
            "friends",
            "casual",
            "hanging out",
            "relaxing",
            "weekend",
            "bar",
            "pub",
            "home",
            "vacation",
        ],
    )
}

/// Calm, unflappable persona for crisis situations. Suppresses emotional
/// reactivity in favor of measured responses.
pub fn stoic_mask() -> Mask {
    build_mask(
        "stoic",
        "Calm, unflappable persona for crisis situations that suppresses \
         emotional reactivity and promotes rational, measured responses.",
        &[
            ("angry", -0.6),
            ("anxious", -0.5),
            ("helpless", -0.4),
            ("confused", -0.3),
            ("insecure", -0.4),
            ("excited", -0.4),
            ("depressed", -0.3),
            ("lonely", -0.2),
            ("content", 0.3),
            ("thoughtful", 0.4),
            ("satisfied", 0.2),
        ],
        &[
            "crisis",
            "emergency",
            "danger",
            "high stakes",
            "stressful",
            "pressure",
            "urgent",
            "critical",
            "life or death",
        ],
    )
}

/// High-energy persona for motivational contexts. Amplifies positive
/// emotions and enthusiasm.
pub fn enthusiastic_mask() -> Mask {
    build_mask(
        "enthusiastic",
        "High-energy persona for motivational contexts that amplifies \
         positive emotions and enthusiasm.",
        &[
            ("excited", 0.4),
            ("cheerful", 0.4),
            ("hopeful", 0.3),
            ("energetic", 0.5),
            ("creative", 0.3),
            ("bored", -0.4),
            ("apathetic", -0.5),
            ("depressed", -0.3),
            ("lonely", -0.2),
            ("proud", 0.2),
            ("important", 0.2),
        ],
        &[
            "rally",
            "motivational",
            "celebration",
            "achievement",
            "success",
            "launch",
            "opening",
            "kickoff",
            "pep talk",
            "inspiring",
        ],
    )
}

/// Caring, supportive persona for caretaking situations. Promotes warmth,
/// patience, and empathy.
pub fn nurturing_mask() -> Mask {
    build_mask(
        "nurturing",
        "Caring, supportive persona for caretaking situations that promotes \
         warmth, patience, and empathy.",
        &[
            ("loving", 0.4),
            ("nurturing", 0.5),
            ("intimate", 0.3),
            ("trusting", 0.3),
            ("angry", -0.4),
            ("critical", -0.4),
            ("hostile", -0.5),
            ("selfish", -0.5),
            ("content", 0.2),
            ("satisfied", 0.2),
        ],
        &[
            "child",
            "children",
            "baby",
            "caring",
            "nursing",
            "teaching",
            "mentoring",
            "comforting",
            "supporting",
            "vulnerable",
        ],
    )
}

/// Protective persona for unfamiliar or potentially hostile situations.
/// Reduces trust and increases vigilance.
pub fn guarded_mask() -> Mask {
    build_mask(
        "guarded",
        "Protective persona for unfamiliar or potentially hostile situations \
         that reduces trust and increases vigilance.",
        &[
            ("trusting", -0.4),
            ("intimate", -0.5),
            ("loving", -0.3),
            ("anxious", 0.2),
            ("insecure", 0.2),
            ("cheerful", -0.2),
            ("excited", -0.2),
            ("content", 0.1),
            ("thoughtful", 0.2),
        ],
        &[
            "stranger",
            "unfamiliar",
            "suspicious",
            "unknown",
            "new place",
            "first time",
            "wary",
            "cautious",
        ],
    )
}

/// All predefined masks, in activation-priority order.
pub fn default_masks() -> Vec<Mask> {
    vec![
        professional_mask(),
        casual_mask(),
        stoic_mask(),
        enthusiastic_mask(),
        nurturing_mask(),
        guarded_mask(),
    ]
}

/// Look up a predefined mask by name, case-insensitively.
pub fn default_mask(name: &str) -> Option<Mask> {
    default_masks()
        .into_iter()
        .find(|m| m.name.eq_ignore_ascii_case(name))
}
