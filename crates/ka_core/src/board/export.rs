//! Render-ready snapshot of the board.
//!
//! Hosts draw from these structs instead of poking at live state. The
//! snapshot is plain data: comparing two of them is how tests assert that
//! an operation changed nothing.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::player::Player;

use super::FormationBoard;

/// One slot as the host should draw it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SlotExport {
    pub id: String,
    pub label: String,
    /// Template center, percent of pitch width (0-100).
    pub x: f32,
    /// Template center, percent of pitch height (0-100).
    pub y: f32,
    pub player: Option<Player>,
}

/// The full board snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BoardExport {
    pub formation: String,
    /// Bench players in display order.
    pub roster: Vec<Player>,
    /// Slots in formation order.
    pub slots: Vec<SlotExport>,
    /// Slot id the open drag would land in, if any.
    pub highlighted: Option<String>,
    /// Player id being dragged, if a session is open.
    pub dragging: Option<String>,
}

impl FormationBoard {
    pub fn to_export(&self) -> BoardExport {
        let mut slots = Vec::with_capacity(self.slots().len());
        for slot in self.slots() {
            slots.push(SlotExport {
                id: slot.id.clone(),
                label: slot.label.clone(),
                x: slot.x,
                y: slot.y,
                player: slot.occupant.clone(),
            });
        }

        BoardExport {
            formation: self.formation().name.clone(),
            roster: self.roster().to_vec(),
            slots,
            highlighted: self.highlighted_slot().map(str::to_string),
            dragging: self.dragging_player().map(|p| p.id.clone()),
        }
    }
}
