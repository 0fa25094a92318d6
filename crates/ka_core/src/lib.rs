//! # ka_core - Kickabout Squad Organizer Core
//!
//! This library provides the squad organizer and formation board logic
//! for the Kickabout app, with a JSON API for easy integration with UI
//! hosts like Godot.
//!
//! ## Features
//! - Drag-and-drop formation board with live slot highlighting
//! - Hover and drop share one hit-test, so the highlighted slot is the
//!   slot the drop lands in
//! - Built-in formation templates for 5-a-side up to a full eleven
//! - JSON API for easy integration
//! - Compressed, checksummed profile persistence

// Allow unused code for features under development
#![allow(dead_code)]

pub mod api;
pub mod board;
pub mod error;
pub mod formation;
pub mod models;
pub mod pitch;
pub mod save;

// Re-export main API functions
pub use api::{
    apply_board_events_json, export_board_json, get_formation_json, list_formations_json,
    run_board_session_json, BoardEventsRequest, BoardSessionRequest, BoardSessionResponse,
};
pub use api::{create_squad_json, list_squads_json, set_availability_json};
pub use api::{load_profile_json, save_profile_json};
pub use error::{BoardError, Result, SquadError};

// Re-export board types
pub use board::{
    BoardExport, DropOutcome, FormationBoard, InputEvent, Slot, SlotExport, DEFAULT_HIT_PADDING,
};

// Re-export formation catalog
pub use formation::{
    all_formations, classic_442, for_squad_size, Formation, SlotSpec, MAX_SQUAD_SIZE,
    MIN_SQUAD_SIZE,
};

// Re-export domain models
pub use models::{
    default_roster, MatchdaySetup, PitchRole, Player, Squad, SquadDirectory, SquadRole, TeamSide,
};

// Re-export pitch geometry
pub use pitch::{Point, Rect, SlotLayout};

// Re-export profile persistence
pub use save::{ProfileInfo, ProfileStore, ProfileStoreError, UserProfile, PROFILE_VERSION};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: &str = api::board_json::API_VERSION;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_players() -> serde_json::Value {
        json!([
            {"id": "1", "name": "Marcus", "number": 1},
            {"id": "2", "name": "James", "number": 2},
            {"id": "3", "name": "Alex", "number": 3},
            {"id": "4", "name": "David", "number": 4},
        ])
    }

    #[test]
    fn test_board_session_end_to_end() {
        let request = json!({
            "schema_version": SCHEMA_VERSION,
            "players": sample_players(),
            "layout": [
                {"slot_id": "GK", "rect": {"x": 176.0, "y": 516.0, "width": 48.0, "height": 48.0}},
            ],
            "events": [
                {"type": "drag_start", "player_id": "1"},
                {"type": "drag_move", "x": 200.0, "y": 540.0},
                {"type": "drag_end"},
            ],
        });

        let result = run_board_session_json(&request.to_string());
        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();

        assert_eq!(parsed["success"], true);
        assert_eq!(parsed["schema_version"], SCHEMA_VERSION);

        let data = &parsed["data"];
        assert_eq!(data["outcomes"][0]["kind"], "assigned");
        assert_eq!(data["outcomes"][0]["slot"], "GK");

        let board = &data["board"];
        assert_eq!(board["formation"], "4-4-2");
        assert_eq!(board["roster"].as_array().unwrap().len(), 3);
        let gk = board["slots"]
            .as_array()
            .unwrap()
            .iter()
            .find(|s| s["id"] == "GK")
            .unwrap();
        assert_eq!(gk["player"]["id"], "1");
    }

    #[test]
    fn test_session_conserves_players_through_bumps_and_swaps() {
        let request = json!({
            "schema_version": SCHEMA_VERSION,
            "players": sample_players(),
            "events": [
                {"type": "slot_measured", "slot_id": "GK",
                 "rect": {"x": 176.0, "y": 516.0, "width": 48.0, "height": 48.0}},
                {"type": "slot_measured", "slot_id": "ST1",
                 "rect": {"x": 176.0, "y": 96.0, "width": 48.0, "height": 48.0}},
                {"type": "drag_start", "player_id": "1"},
                {"type": "drag_move", "x": 200.0, "y": 540.0},
                {"type": "drag_end"},
                {"type": "drag_start", "player_id": "2"},
                {"type": "drag_move", "x": 200.0, "y": 120.0},
                {"type": "drag_end"},
                {"type": "drag_start", "player_id": "3"},
                {"type": "drag_move", "x": 200.0, "y": 120.0},
                {"type": "drag_end"},
                {"type": "drag_start", "player_id": "1", "origin_slot_id": "GK"},
                {"type": "drag_move", "x": 200.0, "y": 120.0},
                {"type": "drag_end"},
            ],
        });

        let result = run_board_session_json(&request.to_string());
        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert_eq!(parsed["success"], true);

        let data = &parsed["data"];
        let kinds: Vec<&str> = data["outcomes"]
            .as_array()
            .unwrap()
            .iter()
            .map(|o| o["kind"].as_str().unwrap())
            .collect();
        assert_eq!(kinds, vec!["assigned", "assigned", "bumped", "swapped"]);

        // The bumped striker went back to the bench, the swap crossed GK and ST1
        let board = &data["board"];
        let roster_ids: Vec<&str> = board["roster"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["id"].as_str().unwrap())
            .collect();
        assert_eq!(roster_ids, vec!["4", "2"]);

        let slots = board["slots"].as_array().unwrap();
        let occupant = |id: &str| {
            slots
                .iter()
                .find(|s| s["id"] == id)
                .and_then(|s| s["player"]["id"].as_str())
        };
        assert_eq!(occupant("GK"), Some("3"));
        assert_eq!(occupant("ST1"), Some("1"));

        // Every player is still on the board exactly once
        let mut all_ids: Vec<&str> = roster_ids.clone();
        for slot in slots {
            if let Some(id) = slot["player"]["id"].as_str() {
                all_ids.push(id);
            }
        }
        all_ids.sort_unstable();
        assert_eq!(all_ids, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_same_request_yields_same_board() {
        let request = json!({
            "schema_version": SCHEMA_VERSION,
            "players": sample_players(),
            "squad_size": 7,
            "events": [
                {"type": "slot_measured", "slot_id": "CF",
                 "rect": {"x": 176.0, "y": 96.0, "width": 48.0, "height": 48.0}},
                {"type": "drag_start", "player_id": "2"},
                {"type": "drag_move", "x": 180.0, "y": 100.0},
                {"type": "drag_end"},
            ],
        })
        .to_string();

        let result1 = run_board_session_json(&request);
        let result2 = run_board_session_json(&request);

        let parsed1: serde_json::Value = serde_json::from_str(&result1).unwrap();
        let parsed2: serde_json::Value = serde_json::from_str(&result2).unwrap();

        // Envelope timestamps differ; the board payload must not
        assert_eq!(parsed1["data"], parsed2["data"], "same request should produce the same board");
    }

    #[test]
    fn test_session_request_schema_validates_payloads() {
        let schema = serde_json::to_value(BoardSessionRequest::json_schema()).unwrap();
        assert_eq!(schema["title"], "BoardSessionRequest");

        let compiled =
            jsonschema::JSONSchema::compile(&schema).expect("request schema should compile");

        let valid = json!({
            "schema_version": SCHEMA_VERSION,
            "players": [{"id": "1", "name": "Marcus"}],
            "squad_size": 5,
            "events": [{"type": "drag_start", "player_id": "1"}],
        });
        assert!(compiled.is_valid(&valid));

        let wrong_shape = json!({"players": "not an array"});
        assert!(!compiled.is_valid(&wrong_shape));
    }

    #[test]
    fn test_version_constants() {
        assert!(!VERSION.is_empty());
        assert_eq!(SCHEMA_VERSION, "v1");
    }
}
