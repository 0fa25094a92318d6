//! Formation templates: named slot layouts in percent pitch coordinates.

mod catalog;

pub use catalog::{all_formations, classic_442, for_squad_size};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Smallest side the organizer supports (five-a-side).
pub const MIN_SQUAD_SIZE: u8 = 5;
/// Largest side the organizer supports (full eleven).
pub const MAX_SQUAD_SIZE: u8 = 11;

/// One slot of a formation template.
///
/// `x` and `y` are percent pitch coordinates (0-100) locating the CENTER of
/// the slot marker. `id` is unique within a formation; `label` is the short
/// role name painted on the marker and may repeat (two "CB" markers).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SlotSpec {
    pub id: String,
    pub label: String,
    pub x: f32,
    pub y: f32,
}

impl SlotSpec {
    pub fn new(id: &str, label: &str, x: f32, y: f32) -> Self {
        SlotSpec {
            id: id.to_string(),
            label: label.to_string(),
            x: x.clamp(0.0, 100.0),
            y: y.clamp(0.0, 100.0),
        }
    }
}

/// A named formation template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Formation {
    pub name: String,
    pub slots: Vec<SlotSpec>,
}

impl Formation {
    pub fn new(name: &str, slots: Vec<SlotSpec>) -> Self {
        Formation { name: name.to_string(), slots }
    }

    /// Validating constructor for formations built from external input.
    pub fn with_slots(name: &str, slots: Vec<SlotSpec>) -> Result<Self, String> {
        validate_slots(&slots)?;
        Ok(Formation::new(name, slots))
    }

    /// Re-check the template invariants. Useful after deserializing.
    pub fn validate(&self) -> Result<(), String> {
        validate_slots(&self.slots)
    }

    pub fn squad_size(&self) -> u8 {
        self.slots.len() as u8
    }

    pub fn contains_slot(&self, slot_id: &str) -> bool {
        self.slots.iter().any(|s| s.id == slot_id)
    }

    pub fn slot_ids(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(|s| s.id.as_str())
    }
}

fn validate_slots(slots: &[SlotSpec]) -> Result<(), String> {
    let count = slots.len();
    if count < MIN_SQUAD_SIZE as usize || count > MAX_SQUAD_SIZE as usize {
        return Err(format!(
            "formation must have between {} and {} slots, found {}",
            MIN_SQUAD_SIZE, MAX_SQUAD_SIZE, count
        ));
    }
    for (i, slot) in slots.iter().enumerate() {
        if slot.id.is_empty() {
            return Err(format!("slot {} has an empty id", i));
        }
        if slots[..i].iter().any(|other| other.id == slot.id) {
            return Err(format!("duplicate slot id: {}", slot.id));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_slots_accepts_valid_template() {
        let formation = Formation::with_slots(
            "test",
            vec![
                SlotSpec::new("GK", "GK", 50.0, 90.0),
                SlotSpec::new("CB", "CB", 50.0, 70.0),
                SlotSpec::new("LM", "LM", 30.0, 50.0),
                SlotSpec::new("RM", "RM", 70.0, 50.0),
                SlotSpec::new("CF", "CF", 50.0, 25.0),
            ],
        );
        assert!(formation.is_ok());
        assert_eq!(formation.unwrap().squad_size(), 5);
    }

    #[test]
    fn test_with_slots_rejects_duplicate_ids() {
        let result = Formation::with_slots(
            "bad",
            vec![
                SlotSpec::new("GK", "GK", 50.0, 90.0),
                SlotSpec::new("GK", "GK", 50.0, 70.0),
                SlotSpec::new("LM", "LM", 30.0, 50.0),
                SlotSpec::new("RM", "RM", 70.0, 50.0),
                SlotSpec::new("CF", "CF", 50.0, 25.0),
            ],
        );
        let err = result.unwrap_err();
        assert!(err.contains("duplicate slot id"), "unexpected error: {}", err);
    }

    #[test]
    fn test_with_slots_rejects_too_few_slots() {
        let result = Formation::with_slots(
            "bad",
            vec![SlotSpec::new("GK", "GK", 50.0, 90.0)],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_slot_spec_clamps_coordinates() {
        let slot = SlotSpec::new("GK", "GK", -5.0, 140.0);
        assert_eq!(slot.x, 0.0);
        assert_eq!(slot.y, 100.0);
    }

    #[test]
    fn test_contains_slot() {
        let formation = classic_442();
        assert!(formation.contains_slot("GK"));
        assert!(!formation.contains_slot("SW"));
    }
}
