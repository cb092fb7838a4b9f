//! The activation engine: one pass of mask selection and trigger firing
//! for a single stimulus.
//!
//! Mask selection is a two-state machine per persona (no mask, or exactly
//! one active mask) re-derived on every call. Trigger firing mutates the
//! raw state; mask activation never does.

use crate::error::Result;
use crate::registry::{MaskRegistry, TriggerSet};
use crate::trigger::{FireOutcome, TriggerCondition};
use animus_core::EmotionalState;
use tracing::info;

/// Transient result of one `evaluate` call. Informational only; the state
/// and registry mutations have already happened by the time this is built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivationReport {
    /// Names of masks that matched or were activated this call.
    pub activated_masks: Vec<String>,
    /// Descriptions of triggers that fired.
    pub fired_triggers: Vec<String>,
    /// Human-readable log of what was applied.
    pub applied_effects: Vec<String>,
    /// Formatted context for injection into a system prompt. Empty when
    /// nothing activated.
    pub prompt_context: String,
}

/// Evaluates masks and triggers against incoming stimuli.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActivationEngine;

impl ActivationEngine {
    pub fn new() -> Self {
        Self
    }

    /// Run one activation pass.
    ///
    /// 1. Masks are checked against the stimulus text (concatenated with
    ///    the situation description when present); the first match becomes
    ///    the sole active mask, and a miss reverts to natural expression.
    /// 2. Active triggers are evaluated in declaration order: emotional
    ///    conditions against the raw state, situational ones against the
    ///    text. Fired modifications accumulate additively on the raw state;
    ///    a mask response activates that mask (registering it if needed).
    ///
    /// An emotional trigger rule naming an untracked emotion surfaces as an
    /// error to the caller; nothing is rolled back.
    pub fn evaluate(
        &self,
        state: &mut EmotionalState,
        masks: &mut MaskRegistry,
        triggers: &TriggerSet,
        stimulus: &str,
        situation: Option<&str>,
    ) -> Result<ActivationReport> {
        let mut report = ActivationReport::default();

        let check_text = match situation {
            Some(desc) if !desc.is_empty() => format!("{stimulus} {desc}"),
            _ => stimulus.to_string(),
        };

        // Mask selection: first match wins, exclusive.
        for mask in masks.iter() {
            if mask.should_trigger(&check_text) {
                report.activated_masks.push(mask.name.clone());
                info!("Mask '{}' triggered by message content", mask.name);
            }
        }
        match report.activated_masks.first().cloned() {
            Some(best) => {
                masks.activate(&best)?;
                report.applied_effects.push(format!(
                    "Mask '{best}' activated — emotional expression modified"
                ));
                info!("Activated mask '{}'", best);
            }
            None => {
                if masks.active_mask().is_some() {
                    masks.deactivate();
                    report
                        .applied_effects
                        .push("No mask matched — reverted to natural expression".to_string());
                }
            }
        }

        // Trigger firing, in declaration order.
        for trigger in triggers.iter() {
            if !trigger.active {
                continue;
            }
            let should_fire = match &trigger.condition {
                TriggerCondition::Emotional { .. } => trigger.check_state(state)?,
                TriggerCondition::Situational { .. } => trigger.check_text(&check_text),
            };
            if !should_fire {
                continue;
            }

            report.fired_triggers.push(trigger.description.clone());
            match trigger.fire(state) {
                FireOutcome::Adjusted(adjusted) => {
                    *state = adjusted;
                    report.applied_effects.push(format!(
                        "Trigger '{}' fired — emotions adjusted",
                        trigger.description
                    ));
                }
                FireOutcome::ActivateMask(mask) => {
                    let name = mask.name.clone();
                    if masks.get(&name).is_none() {
                        masks.add(mask);
                    }
                    masks.activate(&name)?;
                    if !report.activated_masks.contains(&name) {
                        report.activated_masks.push(name.clone());
                    }
                    report.applied_effects.push(format!(
                        "Trigger '{}' fired — mask '{}' activated",
                        trigger.description, name
                    ));
                }
                FireOutcome::None => {}
            }
            info!("Trigger '{}' fired", trigger.description);
        }

        let prompt_context = build_prompt_context(&report, masks);
        report.prompt_context = prompt_context;
        Ok(report)
    }
}

/// Format the activation outcome for injection into a system prompt.
fn build_prompt_context(report: &ActivationReport, masks: &MaskRegistry) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(active) = masks.active_mask() {
        if !report.activated_masks.is_empty() {
            let plural = if report.activated_masks.len() > 1 { "S" } else { "" };
            parts.push(format!(
                "ACTIVE BEHAVIORAL MASK{plural}: {}. You are currently wearing your '{}' mask. {}",
                report.activated_masks.join(", "),
                active.name,
                active.description
            ));

            let suppressed: Vec<String> = active
                .emotional_modifications
                .iter()
                .filter(|(_, v)| **v < 0.0)
                .map(|(e, v)| format!("{e} (suppressed by {:.0}%)", v.abs() * 100.0))
                .collect();
            let enhanced: Vec<String> = active
                .emotional_modifications
                .iter()
                .filter(|(_, v)| **v > 0.0)
                .map(|(e, v)| format!("{e} (enhanced by {:.0}%)", v * 100.0))
                .collect();
            if !suppressed.is_empty() {
                parts.push(format!("Suppressed emotions: {}", suppressed.join(", ")));
            }
            if !enhanced.is_empty() {
                parts.push(format!("Enhanced emotions: {}", enhanced.join(", ")));
            }
        }
    }

    for description in &report.fired_triggers {
        parts.push(format!(
            "TRIGGERED RESPONSE: '{description}' — this emotional trigger \
             has been activated. Your responses should reflect this shift."
        ));
    }

    parts.join("\n")
}
