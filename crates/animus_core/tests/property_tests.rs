//! Property-based tests for animus_core.
//!
//! Uses proptest to verify invariants that must hold for ALL possible inputs,
//! not just hand-picked examples. This catches edge cases that unit tests miss.

use animus_core::state::{DEFAULT_ANTAGONISM_STRENGTH, DEFAULT_DECAY_RATE};
use animus_core::traits::{ALL_TRAITS, EMOTIONAL_STABILITY, SENSITIVITY};
use animus_core::{
    EmotionMap, EmotionalState, TraitCoefficients, TraitProfile, ALL_EMOTIONS,
};
use proptest::prelude::*;
use std::collections::BTreeMap;

// ============================================================================
// Strategies: generate arbitrary but valid state values
// ============================================================================

/// Generate an arbitrary full-catalog state with values in [0, 1].
fn arb_state() -> impl Strategy<Value = EmotionalState> {
    proptest::collection::vec(0.0f32..=1.0, 36).prop_map(|values| {
        let mut state = EmotionalState::new(0.0).unwrap();
        for (emotion, value) in ALL_EMOTIONS.iter().zip(values) {
            state.set(emotion, value).unwrap();
        }
        state
    })
}

/// Generate an arbitrary delta map over a subset of the catalog, with
/// deltas in [-1, 1] and the occasional unknown key mixed in.
fn arb_deltas() -> impl Strategy<Value = EmotionMap> {
    proptest::collection::btree_map(
        prop_oneof![
            proptest::sample::select(ALL_EMOTIONS.to_vec()).prop_map(String::from),
            Just("not_an_emotion".to_string()),
        ],
        -1.0f32..=1.0,
        0..12,
    )
}

/// Generate target-value updates (absolute, in [0, 1]).
fn arb_targets() -> impl Strategy<Value = EmotionMap> {
    proptest::collection::btree_map(
        proptest::sample::select(ALL_EMOTIONS.to_vec()).prop_map(String::from),
        0.0f32..=1.0,
        0..12,
    )
}

/// Generate an arbitrary trait profile over a subset of the trait catalog.
fn arb_profile() -> impl Strategy<Value = TraitProfile> {
    proptest::collection::btree_map(
        proptest::sample::select(ALL_TRAITS.to_vec()).prop_map(String::from),
        0.0f32..=1.0,
        0..8,
    )
    .prop_map(|m| {
        TraitProfile::from_pairs(m.iter().map(|(k, v)| (k.as_str(), *v))).unwrap()
    })
}

fn assert_bounded(state: &EmotionalState) {
    for emotion in state.emotion_names() {
        let v = state.get(emotion).unwrap();
        assert!(v.is_finite(), "{emotion} not finite: {v}");
        assert!((0.0..=1.0).contains(&v), "{emotion} out of range: {v}");
        let b = state.mood_baseline_of(emotion);
        assert!(b.is_finite(), "{emotion} baseline not finite: {b}");
        assert!((0.0..=1.0).contains(&b), "{emotion} baseline out of range: {b}");
    }
}

// ============================================================================
// Boundedness: every operation keeps all values finite and in [0, 1]
// ============================================================================

proptest! {
    #[test]
    fn decay_always_produces_valid_state(
        state in arb_state(),
        turns in 0u32..200,
        rate in 0.0f32..1.0,
    ) {
        let mut s = state;
        s.decay(turns, rate);
        assert_bounded(&s);
    }

    #[test]
    fn apply_delta_always_produces_valid_state(
        state in arb_state(),
        deltas in arb_deltas(),
        scale in 0.0f32..=3.0,
    ) {
        let mut s = state;
        s.apply_delta(&deltas, scale);
        assert_bounded(&s);
    }

    #[test]
    fn trait_modulation_always_produces_valid_state(
        state in arb_state(),
        targets in arb_targets(),
        profile in arb_profile(),
    ) {
        let coeffs = TraitCoefficients::builtin();
        let mut s = state;
        s.apply_trait_modulated_change(&targets, Some(&profile), &coeffs);
        assert_bounded(&s);
    }

    #[test]
    fn antagonism_always_produces_valid_state(
        state in arb_state(),
        strength in 0.0f32..=1.0,
    ) {
        let mut s = state;
        s.apply_antagonism(strength);
        assert_bounded(&s);
    }

    #[test]
    fn baseline_update_always_produces_valid_state(
        state in arb_state(),
        lr in 0.0f32..=1.0,
    ) {
        let mut s = state;
        s.update_mood_baseline(lr);
        assert_bounded(&s);
    }

    #[test]
    fn full_turn_pipeline_stays_bounded(
        state in arb_state(),
        targets in arb_targets(),
        profile in arb_profile(),
    ) {
        let coeffs = TraitCoefficients::builtin();
        let mut s = state;
        for _ in 0..5 {
            s.decay(1, DEFAULT_DECAY_RATE);
            s.apply_trait_modulated_change(&targets, Some(&profile), &coeffs);
            s.apply_antagonism(DEFAULT_ANTAGONISM_STRENGTH);
            s.update_mood_baseline(0.1);
            assert_bounded(&s);
        }
    }
}

// ============================================================================
// Directional properties
// ============================================================================

proptest! {
    /// Decay never moves an emotion away from its baseline.
    #[test]
    fn decay_moves_toward_baseline(
        state in arb_state(),
        turns in 1u32..50,
    ) {
        let before = state.clone();
        let mut s = state;
        s.decay(turns, DEFAULT_DECAY_RATE);
        for emotion in before.emotion_names() {
            let baseline = before.mood_baseline_of(emotion);
            let gap_before = (before.get(emotion).unwrap() - baseline).abs();
            let gap_after = (s.get(emotion).unwrap() - baseline).abs();
            prop_assert!(
                gap_after <= gap_before + 1e-5,
                "{emotion} moved away from baseline: {gap_before} -> {gap_after}"
            );
        }
    }

    /// Antagonism only ever lowers values, and only the weaker of a pair.
    #[test]
    fn antagonism_never_raises_values(
        state in arb_state(),
        strength in 0.0f32..=1.0,
    ) {
        let before = state.clone();
        let mut s = state;
        s.apply_antagonism(strength);
        for emotion in before.emotion_names() {
            prop_assert!(
                s.get(emotion).unwrap() <= before.get(emotion).unwrap() + 1e-6
            );
        }
    }

    /// Trait-modulated updates never invert the direction of change:
    /// if the target is above the current value, the result never drops
    /// below it, and vice versa.
    #[test]
    fn trait_modulation_preserves_direction(
        state in arb_state(),
        targets in arb_targets(),
        profile in arb_profile(),
    ) {
        let coeffs = TraitCoefficients::builtin();
        let before = state.clone();
        let mut s = state;
        s.apply_trait_modulated_change(&targets, Some(&profile), &coeffs);
        for (emotion, target) in &targets {
            let old = before.get(emotion).unwrap();
            let new = s.get(emotion).unwrap();
            if *target > old {
                prop_assert!(new >= old - 1e-6, "{emotion}: raised target but value fell");
            } else if *target < old {
                prop_assert!(new <= old + 1e-6, "{emotion}: lowered target but value rose");
            }
        }
    }

    /// Higher emotional stability never produces a larger shift than lower
    /// stability, all else equal.
    #[test]
    fn stability_monotonically_dampens(
        state in arb_state(),
        targets in arb_targets(),
        low in 0.0f32..=0.5,
        high in 0.5f32..=1.0,
    ) {
        let coeffs = TraitCoefficients::builtin();
        let calm = TraitProfile::from_pairs([(EMOTIONAL_STABILITY, high), (SENSITIVITY, 0.5)]).unwrap();
        let volatile = TraitProfile::from_pairs([(EMOTIONAL_STABILITY, low), (SENSITIVITY, 0.5)]).unwrap();

        let mut a = state.clone();
        let mut b = state.clone();
        a.apply_trait_modulated_change(&targets, Some(&calm), &coeffs);
        b.apply_trait_modulated_change(&targets, Some(&volatile), &coeffs);

        for (emotion, _) in &targets {
            let old = state.get(emotion).unwrap();
            let shift_calm = (a.get(emotion).unwrap() - old).abs();
            let shift_volatile = (b.get(emotion).unwrap() - old).abs();
            prop_assert!(
                shift_calm <= shift_volatile + 1e-5,
                "{emotion}: stability {high} shifted {shift_calm} > stability {low} shifted {shift_volatile}"
            );
        }
    }

    /// The mood baseline chases the current state without overshooting.
    #[test]
    fn baseline_update_never_overshoots(
        state in arb_state(),
        lr in 0.0f32..=1.0,
    ) {
        let before = state.clone();
        let mut s = state;
        s.update_mood_baseline(lr);
        for emotion in before.emotion_names() {
            let current = before.get(emotion).unwrap();
            let old_b = before.mood_baseline_of(emotion);
            let new_b = s.mood_baseline_of(emotion);
            let lo = old_b.min(current) - 1e-6;
            let hi = old_b.max(current) + 1e-6;
            prop_assert!(
                new_b >= lo && new_b <= hi,
                "{emotion}: baseline {new_b} overshot [{lo}, {hi}]"
            );
        }
    }
}

// ============================================================================
// Serialization
// ============================================================================

proptest! {
    #[test]
    fn serde_roundtrip_preserves_state(state in arb_state()) {
        let json = serde_json::to_string(&state).unwrap();
        let back: EmotionalState = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, state);
    }

    /// `change_state` validates everything before mutating anything.
    #[test]
    fn change_state_is_atomic_on_error(
        state in arb_state(),
        good in arb_targets(),
    ) {
        let mut bad: BTreeMap<String, f32> = good;
        bad.insert("not_an_emotion".to_string(), 0.5);
        let before = state.clone();
        let mut s = state;
        prop_assert!(s.change_state(&bad, None).is_err());
        prop_assert_eq!(s, before);
    }
}
