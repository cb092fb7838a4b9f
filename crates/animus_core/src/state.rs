//! Emotional state: a bounded vector of emotion intensities plus the
//! slow-moving mood baseline it decays toward.
//!
//! Per turn the owning context applies, in order:
//! `decay → trait-modulated change → antagonism → mood-baseline update`.
//! Every operation is a pure, synchronous computation over in-memory data;
//! nothing here suspends, retries, or performs I/O.

use crate::emotion::{category_of, is_valid_emotion, EmotionCategory, ALL_EMOTIONS};
use crate::error::{AnimusError, Result};
use crate::traits::{
    TraitCoefficients, TraitProfile, APPREHENSION, EMOTIONAL_STABILITY, SENSITIVITY, TENSION,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Flat mapping of emotion name → intensity, the shape emotion vectors
/// serialize to and deltas arrive in.
pub type EmotionMap = BTreeMap<String, f32>;

/// Default per-turn decay rate: ~15% of the gap toward baseline per turn.
pub const DEFAULT_DECAY_RATE: f32 = 0.15;

/// Default suppression strength for antagonistic pairs.
pub const DEFAULT_ANTAGONISM_STRENGTH: f32 = 0.3;

/// Default mood-baseline learning rate.
pub const DEFAULT_BASELINE_LEARNING_RATE: f32 = 0.1;

/// The neutral resting value the mood baseline itself drifts toward.
/// Slightly positive; people default mildly content, not blank.
pub const RESTING_NEUTRAL: f32 = 0.1;

/// Values within this distance of baseline snap exactly to baseline
/// during decay, so emotions settle instead of asymptoting forever.
const SNAP_EPSILON: f32 = 0.01;

/// Both emotions in a pair must exceed this before suppression applies.
const ANTAGONISM_FLOOR: f32 = 0.1;

/// Mutually suppressive emotion pairs, based on valence × arousal
/// opposition. Processed once per `apply_antagonism` call, in this order.
/// An emotion appearing in two pairs can be suppressed twice in one call.
pub const ANTAGONISTIC_PAIRS: [(&str, &str); 14] = [
    // Joy ↔ Sad
    ("cheerful", "depressed"),
    ("hopeful", "helpless"),
    ("excited", "apathetic"),
    ("energetic", "bored"),
    // Powerful ↔ Fear
    ("proud", "ashamed"),
    ("respected", "rejected"),
    ("important", "insecure"),
    ("satisfied", "guilty"),
    // Peaceful ↔ Anger
    ("content", "angry"),
    ("loving", "hateful"),
    ("trusting", "hostile"),
    ("nurturing", "critical"),
    // Within-category oppositions
    ("creative", "confused"),
    ("faithful", "selfish"),
];

/// The emotional state of one persona.
///
/// Tracks the intensity of each emotion in [0.0, 1.0], alongside a mood
/// baseline of the same shape (the resting point emotions decay toward) and
/// a turn counter used only for bookkeeping. The tracked emotion set is
/// fixed at construction. `Clone` yields a deep, independent copy; states
/// are never shared by reference across personas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawEmotionalState")]
pub struct EmotionalState {
    emotions: EmotionMap,
    mood_baseline: EmotionMap,
    turn: u64,
}

/// Unvalidated wire shape of `EmotionalState`. Deserialization goes through
/// this so stored snapshots cannot smuggle in out-of-range values or names
/// outside the catalog.
#[derive(Deserialize)]
struct RawEmotionalState {
    emotions: EmotionMap,
    mood_baseline: EmotionMap,
    #[serde(default)]
    turn: u64,
}

impl TryFrom<RawEmotionalState> for EmotionalState {
    type Error = AnimusError;

    fn try_from(raw: RawEmotionalState) -> Result<Self> {
        for map in [&raw.emotions, &raw.mood_baseline] {
            for (emotion, value) in map {
                if !is_valid_emotion(emotion) {
                    return Err(AnimusError::EmotionNotFound {
                        name: emotion.clone(),
                    });
                }
                // Also rejects NaN and the infinities.
                if !(0.0..=1.0).contains(value) {
                    return Err(AnimusError::EmotionValue {
                        name: emotion.clone(),
                        value: *value,
                    });
                }
            }
        }
        Ok(Self {
            emotions: raw.emotions,
            mood_baseline: raw.mood_baseline,
            turn: raw.turn,
        })
    }
}

impl EmotionalState {
    /// Track the full 36-emotion catalog, all starting at `baseline`.
    pub fn new(baseline: f32) -> Result<Self> {
        Self::with_emotions(&ALL_EMOTIONS, baseline)
    }

    /// Track only the given subset of the catalog.
    ///
    /// Fails with `EmotionNotFound` on any name outside the catalog and
    /// `EmotionValue` when `baseline` is out of range, before any state is
    /// built.
    pub fn with_emotions(emotions: &[&str], baseline: f32) -> Result<Self> {
        if !(0.0..=1.0).contains(&baseline) {
            return Err(AnimusError::EmotionValue {
                name: "baseline".to_string(),
                value: baseline,
            });
        }
        for emotion in emotions {
            if !is_valid_emotion(emotion) {
                return Err(AnimusError::EmotionNotFound {
                    name: emotion.to_string(),
                });
            }
        }
        let map: EmotionMap = emotions
            .iter()
            .map(|e| (e.to_string(), baseline))
            .collect();
        Ok(Self {
            mood_baseline: map.clone(),
            emotions: map,
            turn: 0,
        })
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Current intensity of a tracked emotion.
    pub fn get(&self, emotion: &str) -> Result<f32> {
        self.emotions
            .get(emotion)
            .copied()
            .ok_or_else(|| AnimusError::EmotionNotFound {
                name: emotion.to_string(),
            })
    }

    /// Set a single emotion to an absolute value. Validation precedes
    /// mutation; an error leaves the state untouched.
    pub fn set(&mut self, emotion: &str, value: f32) -> Result<()> {
        if !self.emotions.contains_key(emotion) {
            return Err(AnimusError::EmotionNotFound {
                name: emotion.to_string(),
            });
        }
        if !(0.0..=1.0).contains(&value) {
            return Err(AnimusError::EmotionValue {
                name: emotion.to_string(),
                value,
            });
        }
        self.emotions.insert(emotion.to_string(), value);
        Ok(())
    }

    /// Set multiple emotions at once. When `fill` is given, every tracked
    /// emotion is first reset to `fill`, then the explicit overrides apply.
    ///
    /// Every key and value (and `fill`) is validated before anything
    /// changes, so a failure never leaves a partially-applied state.
    pub fn change_state(&mut self, updates: &EmotionMap, fill: Option<f32>) -> Result<()> {
        if let Some(f) = fill {
            if !(0.0..=1.0).contains(&f) {
                return Err(AnimusError::EmotionValue {
                    name: "fill".to_string(),
                    value: f,
                });
            }
        }
        for (emotion, value) in updates {
            if !self.emotions.contains_key(emotion) {
                return Err(AnimusError::EmotionNotFound {
                    name: emotion.clone(),
                });
            }
            if !(0.0..=1.0).contains(value) {
                return Err(AnimusError::EmotionValue {
                    name: emotion.clone(),
                    value: *value,
                });
            }
        }

        if let Some(f) = fill {
            for value in self.emotions.values_mut() {
                *value = f;
            }
        }
        for (emotion, value) in updates {
            self.emotions.insert(emotion.clone(), *value);
        }
        Ok(())
    }

    /// Reset every tracked emotion to the given value.
    pub fn reset(&mut self, value: f32) -> Result<()> {
        if !(0.0..=1.0).contains(&value) {
            return Err(AnimusError::EmotionValue {
                name: "reset".to_string(),
                value,
            });
        }
        for v in self.emotions.values_mut() {
            *v = value;
        }
        Ok(())
    }

    /// The emotion with the highest intensity; ties resolve to the
    /// alphabetically-first name. `None` only when nothing is tracked.
    pub fn dominant(&self) -> Option<(&str, f32)> {
        let mut best: Option<(&str, f32)> = None;
        // BTreeMap iterates in name order, so strictly-greater keeps the
        // alphabetically-first emotion on ties.
        for (name, value) in &self.emotions {
            match best {
                Some((_, best_value)) if *value <= best_value => {}
                _ => best = Some((name.as_str(), *value)),
            }
        }
        best
    }

    /// The `n` highest-intensity emotions, sorted by value descending then
    /// name ascending.
    pub fn top(&self, n: usize) -> Vec<(&str, f32)> {
        let mut all: Vec<(&str, f32)> = self
            .emotions
            .iter()
            .map(|(name, value)| (name.as_str(), *value))
            .collect();
        all.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(b.0))
        });
        all.truncate(n);
        all
    }

    /// Tracked emotions belonging to a category, with their values.
    pub fn category_emotions(&self, category: EmotionCategory) -> EmotionMap {
        category
            .emotions()
            .iter()
            .filter_map(|e| self.emotions.get(*e).map(|v| (e.to_string(), *v)))
            .collect()
    }

    /// Average intensity across tracked emotions of a category; 0.0 when
    /// none of the category's emotions are tracked.
    pub fn category_average(&self, category: EmotionCategory) -> f32 {
        let values = self.category_emotions(category);
        if values.is_empty() {
            return 0.0;
        }
        values.values().sum::<f32>() / values.len() as f32
    }

    /// Whether any emotion (optionally scoped to a category) exceeds the
    /// threshold.
    pub fn any_above(&self, threshold: f32, category: Option<EmotionCategory>) -> bool {
        match category {
            Some(cat) => self
                .category_emotions(cat)
                .values()
                .any(|v| *v > threshold),
            None => self.emotions.values().any(|v| *v > threshold),
        }
    }

    /// Overall valence: intensity-weighted average of each active emotion's
    /// category valence. 0.0 when no emotion is active.
    pub fn valence(&self) -> f32 {
        self.weighted_category_average(|c| c.valence())
    }

    /// Overall arousal: intensity-weighted average of each active emotion's
    /// category arousal. 0.0 when no emotion is active.
    pub fn arousal(&self) -> f32 {
        self.weighted_category_average(|c| c.arousal())
    }

    fn weighted_category_average(&self, metric: impl Fn(EmotionCategory) -> f32) -> f32 {
        let mut weighted = 0.0;
        let mut total = 0.0;
        for (emotion, value) in &self.emotions {
            if *value > 0.0 {
                if let Some(category) = category_of(emotion) {
                    weighted += metric(category) * value;
                    total += value;
                }
            }
        }
        if total == 0.0 {
            0.0
        } else {
            weighted / total
        }
    }

    // ------------------------------------------------------------------
    // Dynamics: decay, delta, trait modulation, antagonism, baseline
    // ------------------------------------------------------------------

    /// Decay every emotion toward its mood baseline.
    ///
    /// The effective decay compounds nonlinearly: `1 - (1-rate)^turns`.
    /// Values within 0.01 of baseline snap exactly to it. The mood baseline
    /// itself drifts toward the neutral resting value (0.1) at ~3% per turn.
    /// Advances the turn counter. No-op when `turns` is zero.
    pub fn decay(&mut self, turns: u32, rate: f32) {
        if turns == 0 {
            return;
        }

        // powf, not powi: `turns as i32` wraps negative past i32::MAX and
        // the exponential blows up.
        let effective = 1.0 - (1.0 - rate.min(0.99)).powf(turns as f32);

        for (emotion, current) in self.emotions.iter_mut() {
            let baseline = self.mood_baseline.get(emotion).copied().unwrap_or(0.0);
            if (*current - baseline).abs() < SNAP_EPSILON {
                *current = baseline;
                continue;
            }
            *current += (baseline - *current) * effective;
            *current = current.clamp(0.0, 1.0);
        }

        let mood_drift = 1.0 - 0.97f32.powf(turns as f32);
        for baseline in self.mood_baseline.values_mut() {
            if (*baseline - RESTING_NEUTRAL).abs() > SNAP_EPSILON {
                *baseline += (RESTING_NEUTRAL - *baseline) * mood_drift;
            }
        }

        self.turn += u64::from(turns);
    }

    /// Nudge emotions by deltas rather than setting them absolutely.
    ///
    /// Results are clamped to [0.0, 1.0]. Unknown emotion names are
    /// silently skipped, since upstream estimators may reference emotions this
    /// persona does not track.
    pub fn apply_delta(&mut self, deltas: &EmotionMap, intensity_scale: f32) {
        for (emotion, delta) in deltas {
            if !delta.is_finite() {
                tracing::warn!("Ignoring non-finite delta for '{emotion}'");
                continue;
            }
            if let Some(current) = self.emotions.get_mut(emotion) {
                *current = (*current + delta * intensity_scale).clamp(0.0, 1.0);
            }
        }
    }

    /// Apply target-value updates modulated by personality traits.
    ///
    /// Without a profile, targets are assigned directly (clamped). With
    /// one, each emotion moves toward its target scaled by a reactivity
    /// factor: emotional stability dampens it, sensitivity amplifies it,
    /// per-emotion trait coefficients bias it, apprehension amplifies
    /// negative-category emotions, and tension amplifies anger-category
    /// ones. Reactivity is clamped to [0.2, 2.5], so the direction of
    /// change is never inverted. Unknown emotion names are skipped.
    pub fn apply_trait_modulated_change(
        &mut self,
        raw_updates: &EmotionMap,
        trait_profile: Option<&TraitProfile>,
        coefficients: &TraitCoefficients,
    ) {
        let profile = match trait_profile {
            Some(p) if !p.is_empty() => p,
            _ => {
                for (emotion, target) in raw_updates {
                    if !target.is_finite() {
                        tracing::warn!("Ignoring non-finite target for '{emotion}'");
                        continue;
                    }
                    if let Some(current) = self.emotions.get_mut(emotion) {
                        *current = target.clamp(0.0, 1.0);
                    }
                }
                return;
            }
        };

        let stability = profile.get(EMOTIONAL_STABILITY);
        let sensitivity = profile.get(SENSITIVITY);
        let apprehension = profile.get(APPREHENSION);
        let tension = profile.get(TENSION);

        // Base reactivity is 1.0 at average traits; stability pulls it
        // down, sensitivity pushes it up.
        let base_reactivity =
            (1.0 + (sensitivity - 0.5) * 0.6 - (stability - 0.5) * 0.8).clamp(0.3, 2.0);

        for (emotion, target) in raw_updates {
            if !target.is_finite() {
                tracing::warn!("Ignoring non-finite target for '{emotion}'");
                continue;
            }
            let Some(current) = self.emotions.get(emotion).copied() else {
                continue;
            };
            let raw_delta = target - current;

            let mut trait_modifier = 0.0;
            for (trait_name, trait_value) in profile.iter() {
                let coeff = coefficients.coefficient(trait_name, emotion);
                if coeff != 0.0 {
                    trait_modifier += (trait_value - 0.5) * coeff;
                }
            }

            let mut reactivity = base_reactivity + trait_modifier;

            if let Some(category) = category_of(emotion) {
                if category.is_negative() && apprehension > 0.6 {
                    reactivity *= 1.0 + (apprehension - 0.6) * 0.5;
                }
                if category == EmotionCategory::Anger && tension > 0.6 {
                    reactivity *= 1.0 + (tension - 0.6) * 0.4;
                }
            }

            let reactivity = reactivity.clamp(0.2, 2.5);
            let new_value = (current + raw_delta * reactivity).clamp(0.0, 1.0);
            self.emotions.insert(emotion.clone(), new_value);
        }
    }

    /// Suppress contradictory emotions.
    ///
    /// For each antagonistic pair where both emotions are tracked and above
    /// 0.1, the stronger is left untouched and the weaker loses
    /// `min(weaker, strength * stronger)`. Pairs are processed once, in
    /// table order, not iterated to a fixed point, so an emotion sitting
    /// on the weak side of two pairs can be suppressed twice in one call.
    pub fn apply_antagonism(&mut self, strength: f32) {
        self.apply_antagonism_with(&ANTAGONISTIC_PAIRS, strength);
    }

    /// Same as `apply_antagonism` but over a caller-supplied pair table.
    ///
    /// An emotion listed on the weak side of two pairs is suppressed once
    /// per pair within the single pass.
    pub fn apply_antagonism_with(&mut self, pairs: &[(&str, &str)], strength: f32) {
        for &(e1, e2) in pairs {
            let (Some(v1), Some(v2)) = (
                self.emotions.get(e1).copied(),
                self.emotions.get(e2).copied(),
            ) else {
                continue;
            };
            if v1 > ANTAGONISM_FLOOR && v2 > ANTAGONISM_FLOOR {
                if v1 >= v2 {
                    let suppression = v2.min(strength * v1);
                    self.emotions.insert(e2.to_string(), (v2 - suppression).max(0.0));
                } else {
                    let suppression = v1.min(strength * v2);
                    self.emotions.insert(e1.to_string(), (v1 - suppression).max(0.0));
                }
            }
        }
    }

    /// Shift the mood baseline toward the current state. Repeated emotional
    /// experience moves the resting point: many anxious turns raise resting
    /// anxiety.
    pub fn update_mood_baseline(&mut self, learning_rate: f32) {
        for (emotion, baseline) in self.mood_baseline.iter_mut() {
            let current = self.emotions.get(emotion).copied().unwrap_or(0.0);
            *baseline += (current - *baseline) * learning_rate;
        }
    }

    /// The mood baseline (resting point) for one emotion; 0.0 if untracked.
    pub fn mood_baseline_of(&self, emotion: &str) -> f32 {
        self.mood_baseline.get(emotion).copied().unwrap_or(0.0)
    }

    /// Mean absolute deviation between current values and the baseline.
    /// 0.0 at rest or when nothing is tracked.
    pub fn volatility(&self) -> f32 {
        if self.emotions.is_empty() {
            return 0.0;
        }
        let total: f32 = self
            .emotions
            .iter()
            .map(|(emotion, value)| {
                (value - self.mood_baseline.get(emotion).copied().unwrap_or(0.0)).abs()
            })
            .sum();
        total / self.emotions.len() as f32
    }

    // ------------------------------------------------------------------
    // Introspection & serialization views
    // ------------------------------------------------------------------

    /// Turns accumulated through `decay` calls.
    pub fn turn(&self) -> u64 {
        self.turn
    }

    pub fn len(&self) -> usize {
        self.emotions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emotions.is_empty()
    }

    pub fn contains(&self, emotion: &str) -> bool {
        self.emotions.contains_key(emotion)
    }

    /// Tracked emotion names, in alphabetical order.
    pub fn emotion_names(&self) -> impl Iterator<Item = &str> {
        self.emotions.keys().map(String::as_str)
    }

    /// Flat name → value snapshot of the current vector, the shape the
    /// persistence layer stores.
    pub fn to_map(&self) -> EmotionMap {
        self.emotions.clone()
    }
}

impl fmt::Display for EmotionalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let top = self.top(3);
        if top.is_empty() || top[0].1 == 0.0 {
            return write!(f, "EmotionalState(neutral)");
        }
        let parts: Vec<String> = top
            .iter()
            .filter(|(_, v)| *v > 0.0)
            .map(|(e, v)| format!("{e}={v:.2}"))
            .collect();
        write!(f, "EmotionalState({})", parts.join(", "))
    }
}
