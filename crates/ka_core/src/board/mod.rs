//! Formation board: roster-to-slot assignment driven by drag gestures.
//!
//! The board owns the whole assignment state: the bench roster, the slot
//! occupants, the cached slot rects and the in-flight drag session. Hosts
//! feed it input events and re-render from `to_export()`; they never mutate
//! occupancy directly.
//!
//! Contract: hover highlighting and drop resolution run the same hit-test
//! over the same cached rects, so the slot a user sees highlighted is the
//! slot the drop lands in.

mod events;
mod export;


pub use events::InputEvent;
pub use export::{BoardExport, SlotExport};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{BoardError, Result};
use crate::formation::{classic_442, Formation, SlotSpec};
use crate::models::player::{default_roster, Player};
use crate::pitch::{Point, Rect, SlotLayout};

/// Extra pixels around a slot rect that still count as a hit.
pub const DEFAULT_HIT_PADDING: f32 = 0.0;

/// One pitch slot: template position plus the player standing in it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Slot {
    pub id: String,
    pub label: String,
    pub x: f32,
    pub y: f32,
    pub occupant: Option<Player>,
}

impl Slot {
    fn from_spec(spec: &SlotSpec) -> Self {
        Slot {
            id: spec.id.clone(),
            label: spec.label.clone(),
            x: spec.x,
            y: spec.y,
            occupant: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }
}

/// How a finished drag resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DropOutcome {
    /// Release arrived with no drag in progress.
    NoSession,
    /// Release landed outside every slot; nothing changed.
    Cancelled,
    /// Roster player placed into an empty slot.
    Assigned { slot: String },
    /// Slot player moved to another slot (`from == to` when dropped back
    /// onto its own slot).
    Moved { from: String, to: String },
    /// Two slot players exchanged places.
    Swapped { origin: String, target: String },
    /// Roster player took an occupied slot; the displaced player went to
    /// the end of the roster.
    Bumped { slot: String, displaced: String },
}

/// In-flight drag state. Occupancy does not change while this is open; the
/// session only remembers what is being dragged and where the pointer went.
#[derive(Debug, Clone)]
struct DragSession {
    player: Player,
    origin_slot: Option<String>,
    candidate: Option<String>,
    last_point: Option<Point>,
}

/// The formation board model.
#[derive(Debug, Clone)]
pub struct FormationBoard {
    formation: Formation,
    initial_players: Vec<Player>,
    roster: Vec<Player>,
    slots: Vec<Slot>,
    layout: SlotLayout,
    hit_padding: f32,
    drag: Option<DragSession>,
}

impl FormationBoard {
    pub fn new(players: Vec<Player>, formation: Formation) -> Self {
        let mut board = FormationBoard {
            formation: formation.clone(),
            initial_players: Vec::new(),
            roster: Vec::new(),
            slots: Vec::new(),
            layout: SlotLayout::new(),
            hit_padding: DEFAULT_HIT_PADDING,
            drag: None,
        };
        board.reinitialize(players, formation);
        board
    }

    pub fn with_hit_padding(mut self, padding: f32) -> Self {
        self.hit_padding = padding;
        self
    }

    /// Replace players and formation, emptying every slot. Any open drag is
    /// dropped. Cached rects survive only for slot ids present in the new
    /// formation; the rest would be stale and are discarded.
    pub fn reinitialize(&mut self, players: Vec<Player>, formation: Formation) {
        debug_assert!(
            players.iter().enumerate().all(|(i, p)| players[..i].iter().all(|q| q.id != p.id)),
            "player ids must be distinct"
        );
        self.drag = None;
        self.layout.retain(|id| formation.contains_slot(id));
        self.slots = formation.slots.iter().map(Slot::from_spec).collect();
        self.roster = players.clone();
        self.initial_players = players;
        log::info!(
            "board initialized: {} players on {} ({} slots)",
            self.roster.len(),
            formation.name,
            self.slots.len()
        );
        self.formation = formation;
    }

    /// Put the board back to its initial state: full roster, empty slots.
    pub fn reset(&mut self) {
        let players = self.initial_players.clone();
        let formation = self.formation.clone();
        self.reinitialize(players, formation);
    }

    // ------------------------------------------------------------------
    // Layout
    // ------------------------------------------------------------------

    /// Record the measured pixel rect for a slot. Reports for slot ids not
    /// in the current formation are ignored; they come from layout passes
    /// that raced a reinitialize.
    pub fn set_slot_rect(&mut self, slot_id: &str, rect: Rect) {
        if self.slot_index(slot_id).is_none() {
            log::warn!("layout reported for unknown slot {}", slot_id);
            return;
        }
        self.layout.set(slot_id, rect);
    }

    pub fn apply_layout<I: IntoIterator<Item = (String, Rect)>>(&mut self, rects: I) {
        for (slot_id, rect) in rects {
            self.set_slot_rect(&slot_id, rect);
        }
    }

    // ------------------------------------------------------------------
    // Drag lifecycle
    // ------------------------------------------------------------------

    /// Open a drag session for a player.
    ///
    /// `origin_slot_id` is `None` when the drag starts from the roster
    /// strip, or the occupied slot the player is dragged out of. The player
    /// stays where it is until the release resolves.
    pub fn begin_drag(&mut self, player_id: &str, origin_slot_id: Option<&str>) -> Result<()> {
        if let Some(session) = &self.drag {
            return Err(BoardError::DragAlreadyActive {
                active: session.player.id.clone(),
                requested: player_id.to_string(),
            });
        }

        let player = match origin_slot_id {
            Some(slot_id) => {
                let slot = match self.slot(slot_id) {
                    Some(slot) => slot,
                    None => return Err(BoardError::SlotNotFound(slot_id.to_string())),
                };
                match &slot.occupant {
                    Some(occupant) if occupant.id == player_id => occupant.clone(),
                    _ => {
                        return Err(BoardError::OriginMismatch {
                            player_id: player_id.to_string(),
                            slot_id: slot_id.to_string(),
                        })
                    }
                }
            }
            None => match self.roster.iter().find(|p| p.id == player_id) {
                Some(player) => player.clone(),
                None => return Err(BoardError::PlayerNotFound(player_id.to_string())),
            },
        };

        log::debug!("drag started: player {} (origin {:?})", player.id, origin_slot_id);
        self.drag = Some(DragSession {
            player,
            origin_slot: origin_slot_id.map(|s| s.to_string()),
            candidate: None,
            last_point: None,
        });
        Ok(())
    }

    /// Track the pointer during a drag. Updates the highlight candidate:
    /// the empty slot under the pointer, or none. Occupied slots are never
    /// highlighted even though a release over them still resolves.
    ///
    /// Without an open session this is a benign no-op; late move events
    /// after a cancel are expected from real input streams.
    pub fn update_drag(&mut self, point: Point) {
        if self.drag.is_none() {
            log::debug!("drag move ignored: no drag in progress");
            return;
        }
        let candidate = match self.find_slot_at(point) {
            Some(slot_id) if self.is_slot_empty(&slot_id) => Some(slot_id),
            _ => None,
        };
        if let Some(session) = self.drag.as_mut() {
            session.last_point = Some(point);
            session.candidate = candidate;
        }
    }

    /// Close the drag session and resolve the drop at the last pointer
    /// position. Resolution order:
    ///
    /// 1. no session: no-op
    /// 2. pointer outside every slot (or never moved): cancel
    /// 3. empty target: move (slot origin) or assign (roster origin)
    /// 4. occupied target: swap (slot origin) or bump (roster origin)
    pub fn end_drag(&mut self) -> DropOutcome {
        let session = match self.drag.take() {
            Some(session) => session,
            None => {
                log::debug!("drop ignored: no drag in progress");
                return DropOutcome::NoSession;
            }
        };

        let target_id = match session.last_point.and_then(|p| self.find_slot_at(p)) {
            Some(slot_id) => slot_id,
            None => {
                log::debug!("drag cancelled for player {}", session.player.id);
                return DropOutcome::Cancelled;
            }
        };
        let target_idx = match self.slot_index(&target_id) {
            Some(idx) => idx,
            None => return DropOutcome::Cancelled,
        };

        // Dropping a player back onto its own slot is the identity move.
        if session.origin_slot.as_deref() == Some(target_id.as_str()) {
            log::debug!("player {} dropped back onto slot {}", session.player.id, target_id);
            return DropOutcome::Moved { from: target_id.clone(), to: target_id };
        }

        let origin_idx = session.origin_slot.as_deref().and_then(|id| self.slot_index(id));
        let target_occupied = self.slots[target_idx].occupant.is_some();

        let outcome = match (origin_idx, target_occupied) {
            (Some(origin_idx), false) => {
                let dragged = self.slots[origin_idx].occupant.take();
                self.slots[target_idx].occupant = dragged;
                DropOutcome::Moved {
                    from: self.slots[origin_idx].id.clone(),
                    to: target_id,
                }
            }
            (Some(origin_idx), true) => {
                let dragged = self.slots[origin_idx].occupant.take();
                let displaced = std::mem::replace(&mut self.slots[target_idx].occupant, dragged);
                self.slots[origin_idx].occupant = displaced;
                DropOutcome::Swapped {
                    origin: self.slots[origin_idx].id.clone(),
                    target: target_id,
                }
            }
            (None, false) => match self.roster_index(&session.player.id) {
                Some(i) => {
                    let player = self.roster.remove(i);
                    self.slots[target_idx].occupant = Some(player);
                    DropOutcome::Assigned { slot: target_id }
                }
                None => {
                    log::warn!("dragged player {} is no longer on the roster", session.player.id);
                    DropOutcome::Cancelled
                }
            },
            (None, true) => match self.roster_index(&session.player.id) {
                Some(i) => {
                    let player = self.roster.remove(i);
                    let displaced =
                        std::mem::replace(&mut self.slots[target_idx].occupant, Some(player));
                    match displaced {
                        Some(bumped) => {
                            let displaced_id = bumped.id.clone();
                            self.roster.push(bumped);
                            DropOutcome::Bumped { slot: target_id, displaced: displaced_id }
                        }
                        None => DropOutcome::Assigned { slot: target_id },
                    }
                }
                None => {
                    log::warn!("dragged player {} is no longer on the roster", session.player.id);
                    DropOutcome::Cancelled
                }
            },
        };

        log::debug!("drag resolved: {:?}", outcome);
        outcome
    }

    /// Evict a slot's occupant back to the end of the roster without a
    /// drag (a tap on an occupied slot). Returns whether anything moved;
    /// unknown or empty slots are benign no-ops.
    pub fn remove_from_slot(&mut self, slot_id: &str) -> bool {
        let idx = match self.slot_index(slot_id) {
            Some(idx) => idx,
            None => {
                log::debug!("remove ignored: unknown slot {}", slot_id);
                return false;
            }
        };
        let player = match self.slots[idx].occupant.take() {
            Some(player) => player,
            None => {
                log::debug!("remove ignored: slot {} is empty", slot_id);
                return false;
            }
        };

        // A drag that started from this slot now refers to a player who
        // left it; drop the session so the release lands as a no-op.
        let drag_is_stale =
            self.drag.as_ref().map_or(false, |s| s.origin_slot.as_deref() == Some(slot_id));
        if drag_is_stale {
            log::debug!("drag from slot {} dropped by eviction", slot_id);
            self.drag = None;
        }

        log::debug!("player {} returned to roster from slot {}", player.id, slot_id);
        self.roster.push(player);
        true
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn formation(&self) -> &Formation {
        &self.formation
    }

    pub fn roster(&self) -> &[Player] {
        &self.roster
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn slot(&self, slot_id: &str) -> Option<&Slot> {
        self.slots.iter().find(|s| s.id == slot_id)
    }

    /// The empty slot the current drag would land in, if any.
    pub fn highlighted_slot(&self) -> Option<&str> {
        self.drag.as_ref().and_then(|s| s.candidate.as_deref())
    }

    /// The player being dragged, if a session is open.
    pub fn dragging_player(&self) -> Option<&Player> {
        self.drag.as_ref().map(|s| &s.player)
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn assigned_count(&self) -> usize {
        self.slots.iter().filter(|s| s.occupant.is_some()).count()
    }

    /// Total players on the board, roster and slots combined. Constant
    /// across every operation except reinitialize.
    pub fn player_count(&self) -> usize {
        self.roster.len() + self.assigned_count()
    }

    /// The slot under a pixel point, honoring the hit padding. Overlapping
    /// rects resolve to the nearest rect center; exact ties keep the first
    /// slot in formation order.
    fn find_slot_at(&self, point: Point) -> Option<String> {
        let mut best: Option<(f32, &str)> = None;
        for slot in &self.slots {
            let rect = match self.layout.rect(&slot.id) {
                Some(rect) => rect,
                None => continue,
            };
            if !rect.inflate(self.hit_padding).contains(point) {
                continue;
            }
            let dist = point.distance_squared(rect.center());
            let closer = match best {
                Some((best_dist, _)) => dist < best_dist,
                None => true,
            };
            if closer {
                best = Some((dist, slot.id.as_str()));
            }
        }
        best.map(|(_, slot_id)| slot_id.to_string())
    }

    fn slot_index(&self, slot_id: &str) -> Option<usize> {
        self.slots.iter().position(|s| s.id == slot_id)
    }

    fn roster_index(&self, player_id: &str) -> Option<usize> {
        self.roster.iter().position(|p| p.id == player_id)
    }

    fn is_slot_empty(&self, slot_id: &str) -> bool {
        self.slot(slot_id).map_or(false, |s| s.occupant.is_none())
    }
}

impl Default for FormationBoard {
    /// Fresh eleven-a-side board: stock roster, classic 4-4-2, empty slots.
    fn default() -> Self {
        FormationBoard::new(default_roster(), classic_442())
    }
}
