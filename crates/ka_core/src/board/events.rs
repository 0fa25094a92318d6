//! Input events a host feeds into the board.
//!
//! Gestures arrive as a flat stream: drag starts, pointer moves, releases
//! and slot layout measurements, in the order the host saw them. The board
//! applies them one at a time; replaying the same stream on the same start
//! state reproduces the same end state.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::pitch::{Point, Rect};

use super::{DropOutcome, FormationBoard};

/// One host gesture or layout report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    /// A player was picked up, from the roster strip (`origin_slot_id`
    /// absent) or out of a slot.
    DragStart {
        player_id: String,
        #[serde(default)]
        origin_slot_id: Option<String>,
    },
    /// The pointer moved while dragging. Coordinates are view pixels.
    DragMove { x: f32, y: f32 },
    /// The pointer was released.
    DragEnd,
    /// The host measured a slot's on-screen rect.
    SlotMeasured { slot_id: String, rect: Rect },
}

impl FormationBoard {
    /// Apply one input event. Only `DragEnd` produces an outcome; only
    /// `DragStart` can fault.
    pub fn apply(&mut self, event: &InputEvent) -> Result<Option<DropOutcome>> {
        match event {
            InputEvent::DragStart { player_id, origin_slot_id } => {
                self.begin_drag(player_id, origin_slot_id.as_deref())?;
                Ok(None)
            }
            InputEvent::DragMove { x, y } => {
                self.update_drag(Point::new(*x, *y));
                Ok(None)
            }
            InputEvent::DragEnd => Ok(Some(self.end_drag())),
            InputEvent::SlotMeasured { slot_id, rect } => {
                self.set_slot_rect(slot_id, *rect);
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formation;
    use crate::models::player::Player;

    fn board() -> FormationBoard {
        let players: Vec<Player> =
            (1..=5).map(|i| Player::new(&i.to_string(), &format!("P{}", i))).collect();
        FormationBoard::new(players, formation::for_squad_size(5).unwrap())
    }

    #[test]
    fn test_events_deserialize_from_tagged_json() {
        let event: InputEvent =
            serde_json::from_str(r#"{"type":"drag_start","player_id":"1"}"#).unwrap();
        assert_eq!(
            event,
            InputEvent::DragStart { player_id: "1".to_string(), origin_slot_id: None }
        );

        let event: InputEvent =
            serde_json::from_str(r#"{"type":"drag_move","x":10.5,"y":20.0}"#).unwrap();
        assert_eq!(event, InputEvent::DragMove { x: 10.5, y: 20.0 });

        let event: InputEvent = serde_json::from_str(r#"{"type":"drag_end"}"#).unwrap();
        assert_eq!(event, InputEvent::DragEnd);

        let event: InputEvent = serde_json::from_str(
            r#"{"type":"slot_measured","slot_id":"GK","rect":{"x":0.0,"y":0.0,"width":48.0,"height":48.0}}"#,
        )
        .unwrap();
        assert!(matches!(event, InputEvent::SlotMeasured { ref slot_id, .. } if slot_id == "GK"));
    }

    #[test]
    fn test_event_stream_drives_an_assignment() {
        let mut board = board();
        let events = vec![
            InputEvent::SlotMeasured {
                slot_id: "GK".to_string(),
                rect: Rect::new(176.0, 516.0, 48.0, 48.0),
            },
            InputEvent::DragStart { player_id: "1".to_string(), origin_slot_id: None },
            InputEvent::DragMove { x: 200.0, y: 540.0 },
            InputEvent::DragEnd,
        ];

        let mut outcomes = Vec::new();
        for event in &events {
            if let Some(outcome) = board.apply(event).unwrap() {
                outcomes.push(outcome);
            }
        }

        assert_eq!(outcomes, vec![DropOutcome::Assigned { slot: "GK".to_string() }]);
        assert_eq!(board.slot("GK").unwrap().occupant.as_ref().unwrap().id, "1");
    }

    #[test]
    fn test_faulting_event_reports_the_error() {
        let mut board = board();
        let err = board
            .apply(&InputEvent::DragStart { player_id: "99".to_string(), origin_slot_id: None })
            .unwrap_err();
        assert!(matches!(err, crate::error::BoardError::PlayerNotFound(_)));
    }

    #[test]
    fn test_stray_release_is_not_a_fault() {
        let mut board = board();
        let outcome = board.apply(&InputEvent::DragEnd).unwrap();
        assert_eq!(outcome, Some(DropOutcome::NoSession));
    }
}
