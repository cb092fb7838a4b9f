//! Triggers: conditional activators over emotional state or situation text.
//!
//! An emotional trigger watches the raw state through threshold rules; a
//! situational trigger matches keyword phrases against stimulus text. When a
//! trigger fires, its response either nudges emotions directly or nominates
//! a mask for activation. Firing is idempotent per evaluation; there is no
//! persistent "already fired" flag.

use crate::mask::Mask;
use animus_core::{AnimusError, EmotionalState};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

fn default_true() -> bool {
    true
}

/// Comparison operator for threshold rules. Serializes as the operator
/// symbol itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CompareOp {
    #[serde(rename = ">")]
    #[default]
    Greater,
    #[serde(rename = "<")]
    Less,
    #[serde(rename = ">=")]
    GreaterEq,
    #[serde(rename = "<=")]
    LessEq,
    #[serde(rename = "==")]
    Eq,
    #[serde(rename = "!=")]
    NotEq,
}

impl CompareOp {
    pub fn evaluate(self, value: f32, threshold: f32) -> bool {
        match self {
            CompareOp::Greater => value > threshold,
            CompareOp::Less => value < threshold,
            CompareOp::GreaterEq => value >= threshold,
            CompareOp::LessEq => value <= threshold,
            CompareOp::Eq => value == threshold,
            CompareOp::NotEq => value != threshold,
        }
    }
}

/// One threshold rule, e.g. `anxious > 0.8`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggerRule {
    pub field: String,
    pub threshold: f32,
    #[serde(default)]
    pub operator: CompareOp,
}

impl TriggerRule {
    pub fn new(field: impl Into<String>, threshold: f32, operator: CompareOp) -> Self {
        Self {
            field: field.into(),
            threshold,
            operator,
        }
    }

    pub fn evaluate(&self, value: f32) -> bool {
        self.operator.evaluate(value, self.threshold)
    }
}

/// What kind of condition gates a trigger, with its rule set.
///
/// Flattened into the trigger's serialized form, so the wire shape carries
/// a top-level `"type": "emotional" | "situational"` discriminant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TriggerCondition {
    /// Fires on the raw emotional state via threshold rules.
    Emotional {
        rules: Vec<TriggerRule>,
        #[serde(default = "default_true")]
        match_all: bool,
    },
    /// Fires on stimulus/situation input: keyword phrases against text,
    /// threshold rules against a numeric context map.
    Situational {
        #[serde(default)]
        rules: Vec<TriggerRule>,
        #[serde(default = "default_true")]
        match_all: bool,
        #[serde(default)]
        keyword_triggers: Vec<String>,
    },
}

/// What happens when a trigger fires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum TriggerResponse {
    /// Emotion deltas applied additively to the raw state.
    Modifications(BTreeMap<String, f32>),
    /// A mask that should become the persona's active mask.
    Mask(Mask),
}

/// Outcome of firing a trigger, dispatched on the response tag.
#[derive(Debug, Clone, PartialEq)]
pub enum FireOutcome {
    /// No response configured; nothing to apply.
    None,
    /// Emotions were adjusted; the new raw state.
    Adjusted(EmotionalState),
    /// The named mask should be activated by the owning registry.
    ActivateMask(Mask),
}

/// A conditional activator attached to a persona.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trigger {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub description: String,
    #[serde(flatten)]
    pub condition: TriggerCondition,
    #[serde(default)]
    pub response: Option<TriggerResponse>,
    #[serde(default = "default_true")]
    pub active: bool,
}

impl Trigger {
    /// An emotional trigger with threshold rules over the raw state.
    pub fn emotional(description: impl Into<String>, rules: Vec<TriggerRule>) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            condition: TriggerCondition::Emotional {
                rules,
                match_all: true,
            },
            response: None,
            active: true,
        }
    }

    /// A situational trigger matching keyword phrases against text.
    pub fn situational(description: impl Into<String>, keywords: Vec<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            condition: TriggerCondition::Situational {
                rules: Vec::new(),
                match_all: true,
                keyword_triggers: keywords,
            },
            response: None,
            active: true,
        }
    }

    pub fn with_response(mut self, response: TriggerResponse) -> Self {
        self.response = Some(response);
        self
    }

    pub fn with_match_any(mut self) -> Self {
        match &mut self.condition {
            TriggerCondition::Emotional { match_all, .. }
            | TriggerCondition::Situational { match_all, .. } => *match_all = false,
        }
        self
    }

    /// Evaluate an emotional condition against the raw state.
    ///
    /// Returns `Ok(false)` for inactive or situational triggers. A rule
    /// naming an untracked emotion propagates `EmotionNotFound` to the
    /// caller rather than silently failing the rule.
    pub fn check_state(&self, state: &EmotionalState) -> Result<bool, AnimusError> {
        if !self.active {
            return Ok(false);
        }
        let TriggerCondition::Emotional { rules, match_all } = &self.condition else {
            return Ok(false);
        };
        if rules.is_empty() {
            return Ok(false);
        }
        let mut results = Vec::with_capacity(rules.len());
        for rule in rules {
            let value = state.get(&rule.field)?;
            results.push(rule.evaluate(value));
        }
        Ok(if *match_all {
            results.iter().all(|r| *r)
        } else {
            results.iter().any(|r| *r)
        })
    }

    /// Evaluate a situational condition against stimulus text.
    ///
    /// False for inactive or emotional triggers; keyword phrases match as
    /// case-insensitive substrings.
    pub fn check_text(&self, text: &str) -> bool {
        if !self.active {
            return false;
        }
        let TriggerCondition::Situational {
            keyword_triggers, ..
        } = &self.condition
        else {
            return false;
        };
        if keyword_triggers.is_empty() {
            return false;
        }
        let lower = text.to_lowercase();
        keyword_triggers
            .iter()
            .any(|kw| lower.contains(&kw.to_lowercase()))
    }

    /// Evaluate a situational condition against a numeric context map
    /// (e.g. `crowd_level -> 0.9`). Missing fields fail their rule.
    pub fn check_fields(&self, fields: &BTreeMap<String, f32>) -> bool {
        if !self.active {
            return false;
        }
        let TriggerCondition::Situational {
            rules, match_all, ..
        } = &self.condition
        else {
            return false;
        };
        if rules.is_empty() {
            return false;
        }
        let results: Vec<bool> = rules
            .iter()
            .map(|rule| {
                fields
                    .get(&rule.field)
                    .is_some_and(|v| rule.evaluate(*v))
            })
            .collect();
        if *match_all {
            results.iter().all(|r| *r)
        } else {
            results.iter().any(|r| *r)
        }
    }

    /// Apply this trigger's response.
    ///
    /// Modifications produce an adjusted copy of the raw state; a mask
    /// response nominates that mask for activation without touching the
    /// raw state.
    pub fn fire(&self, state: &EmotionalState) -> FireOutcome {
        match &self.response {
            None => FireOutcome::None,
            Some(TriggerResponse::Modifications(deltas)) => {
                let mut adjusted = state.clone();
                adjusted.apply_delta(deltas, 1.0);
                FireOutcome::Adjusted(adjusted)
            }
            Some(TriggerResponse::Mask(mask)) => FireOutcome::ActivateMask(mask.clone()),
        }
    }
}
