//! Per-persona collections: the mask registry and the trigger set.
//!
//! A persona owns one `MaskRegistry` (at most one active mask, tracked as
//! an index into the registry's own list) and one `TriggerSet`. Both load
//! tolerantly from serialized form: a malformed entry is skipped with a
//! warning instead of aborting the whole load.

use crate::error::{EngineError, Result};
use crate::mask::Mask;
use crate::trigger::Trigger;
use animus_core::EmotionalState;
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

/// An ordered collection of masks with at most one active.
///
/// Order is significant: the activation engine picks the first matching
/// mask, so earlier masks take precedence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaskRegistry {
    masks: Vec<Mask>,
    active: Option<usize>,
}

impl MaskRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry preloaded with the six predefined masks.
    pub fn with_defaults() -> Self {
        Self {
            masks: crate::defaults::default_masks(),
            active: None,
        }
    }

    /// Add a mask, replacing any existing mask with the same name in place.
    /// Replacing the active mask keeps it active.
    pub fn add(&mut self, mask: Mask) {
        if let Some(pos) = self.masks.iter().position(|m| m.name == mask.name) {
            self.masks[pos] = mask;
        } else {
            self.masks.push(mask);
        }
    }

    /// Remove a mask by name. Removing the active mask deactivates it.
    pub fn remove(&mut self, name: &str) -> bool {
        let Some(pos) = self.masks.iter().position(|m| m.name == name) else {
            return false;
        };
        self.masks.remove(pos);
        match self.active {
            Some(a) if a == pos => self.active = None,
            Some(a) if a > pos => self.active = Some(a - 1),
            _ => {}
        }
        true
    }

    pub fn get(&self, name: &str) -> Option<&Mask> {
        self.masks.iter().find(|m| m.name == name)
    }

    /// Make the named mask the sole active one. Exclusive: any previously
    /// active mask is implicitly deactivated.
    pub fn activate(&mut self, name: &str) -> Result<()> {
        match self.masks.iter().position(|m| m.name == name) {
            Some(pos) => {
                self.active = Some(pos);
                Ok(())
            }
            None => Err(EngineError::MaskNotFound {
                name: name.to_string(),
            }),
        }
    }

    pub fn deactivate(&mut self) {
        self.active = None;
    }

    pub fn active_mask(&self) -> Option<&Mask> {
        self.active.and_then(|i| self.masks.get(i))
    }

    /// The expressed view of a raw state: the active mask's overlay applied,
    /// or an unmodified copy when no mask is active. Never mutates the raw
    /// state.
    pub fn expressed(&self, raw_state: &EmotionalState) -> EmotionalState {
        match self.active_mask() {
            Some(mask) => mask.apply(raw_state),
            None => raw_state.clone(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Mask> {
        self.masks.iter()
    }

    pub fn len(&self) -> usize {
        self.masks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.masks.is_empty()
    }

    /// Load masks from serialized values, skipping malformed or invalid
    /// entries with a warning.
    pub fn from_json_values(values: &[serde_json::Value]) -> Self {
        let mut registry = Self::new();
        for value in values {
            match serde_json::from_value::<Mask>(value.clone()) {
                Ok(mask) => match mask.validate() {
                    Ok(()) => registry.add(mask),
                    Err(e) => warn!("Skipping mask: {}", e),
                },
                Err(e) => warn!("Skipping mask: {}", e),
            }
        }
        registry
    }
}

/// A persona's triggers, evaluated in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TriggerSet {
    triggers: Vec<Trigger>,
}

impl TriggerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, trigger: Trigger) {
        self.triggers.push(trigger);
    }

    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.triggers.len();
        self.triggers.retain(|t| t.id != id);
        self.triggers.len() < before
    }

    pub fn get(&self, id: Uuid) -> Option<&Trigger> {
        self.triggers.iter().find(|t| t.id == id)
    }

    /// Toggle a trigger's active flag without resetting any other field.
    pub fn set_active(&mut self, id: Uuid, active: bool) -> bool {
        match self.triggers.iter_mut().find(|t| t.id == id) {
            Some(trigger) => {
                trigger.active = active;
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Trigger> {
        self.triggers.iter()
    }

    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }

    /// Load triggers from serialized values, skipping malformed entries
    /// with a warning.
    pub fn from_json_values(values: &[serde_json::Value]) -> Self {
        let mut set = Self::new();
        for value in values {
            match serde_json::from_value::<Trigger>(value.clone()) {
                Ok(trigger) => set.add(trigger),
                Err(e) => warn!("Skipping trigger: {}", e),
            }
        }
        set
    }
}
