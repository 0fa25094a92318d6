pub mod board_json;
pub mod profile_json;
pub mod squad_json;

pub use board_json::{
    apply_board_events_json, export_board_json, get_formation_json, list_formations_json,
    run_board_session_json, ApiError, ApiResponse, BoardEventsRequest, BoardSessionRequest,
    BoardSessionResponse, SlotRectEntry,
};
pub use profile_json::{load_profile_json, save_profile_json, SaveProfileRequest};
pub use squad_json::{
    create_squad_json, list_squads_json, set_availability_json, CreateSquadRequest,
    SetAvailabilityRequest,
};
