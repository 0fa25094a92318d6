//! JSON API for the formation board
//!
//! String-in, string-out endpoints for embedding hosts. Requests carry the
//! board inputs (players, formation, measured slot rects) plus the gesture
//! stream; responses wrap the render-ready board snapshot in the standard
//! envelope.

use crate::board::{BoardExport, DropOutcome, FormationBoard, InputEvent};
use crate::error::BoardError;
use crate::formation::{classic_442, for_squad_size, Formation};
use crate::models::player::Player;
use crate::pitch::Rect;
use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, error, info, warn};

/// API version for schema compatibility
pub const API_VERSION: &str = "v1";

/// Standard API response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
    pub schema_version: String,
    pub timestamp: DateTime<Utc>,
}

/// Structured API error with codes and details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    pub details: Option<HashMap<String, serde_json::Value>>,
}

impl ApiError {
    pub fn new(code: &str, message: &str) -> Self {
        Self { code: code.to_string(), message: message.to_string(), details: None }
    }

    pub fn with_details(
        code: &str,
        message: &str,
        details: HashMap<String, serde_json::Value>,
    ) -> Self {
        Self { code: code.to_string(), message: message.to_string(), details: Some(details) }
    }

    pub fn from_board_error(error: &BoardError) -> Self {
        let code = match error {
            BoardError::PlayerNotFound(_) => "PLAYER_NOT_FOUND",
            BoardError::SlotNotFound(_) => "SLOT_NOT_FOUND",
            BoardError::OriginMismatch { .. } => "ORIGIN_MISMATCH",
            BoardError::DragAlreadyActive { .. } => "DRAG_IN_PROGRESS",
            BoardError::InvalidSquadSize { .. } => "INVALID_SQUAD_SIZE",
            BoardError::InvalidFormation(_) => "INVALID_FORMATION",
            BoardError::SerializationError(_) | BoardError::DeserializationError(_) => {
                "INVALID_JSON"
            }
        };

        Self::new(code, &error.to_string())
    }
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            schema_version: API_VERSION.to_string(),
            timestamp: Utc::now(),
        }
    }

    pub fn error(error: ApiError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
            schema_version: API_VERSION.to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// A measured slot rect as reported by the host's layout pass
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SlotRectEntry {
    pub slot_id: String,
    pub rect: Rect,
}

/// Board session request: inputs plus the gesture stream to run
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BoardSessionRequest {
    pub schema_version: Option<String>,
    pub players: Vec<Player>,
    /// Formation template per player count; ignored when `formation` is set.
    pub squad_size: Option<u8>,
    /// Explicit formation, validated before use.
    pub formation: Option<Formation>,
    #[serde(default)]
    pub layout: Vec<SlotRectEntry>,
    pub hit_padding: Option<f32>,
    #[serde(default)]
    pub events: Vec<InputEvent>,
}

/// Board session response
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BoardSessionResponse {
    pub board: BoardExport,
    /// One entry per `drag_end` in the stream, in order.
    pub outcomes: Vec<DropOutcome>,
}

/// Events-only request for a host-held board
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BoardEventsRequest {
    pub schema_version: Option<String>,
    pub events: Vec<InputEvent>,
}

/// Formation template query request
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FormationQueryRequest {
    pub schema_version: Option<String>,
    pub squad_size: u8,
}

/// Formation template query response
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FormationQueryResponse {
    pub formation: Formation,
}

/// Formation catalog response
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FormationListResponse {
    pub formations: Vec<Formation>,
}

impl BoardSessionRequest {
    /// Validate the session request
    pub fn validate(&self) -> Result<(), ApiError> {
        // Duplicate ids would make drags ambiguous
        for (i, player) in self.players.iter().enumerate() {
            if self.players[..i].iter().any(|p| p.id == player.id) {
                return Err(ApiError::new(
                    "DUPLICATE_PLAYER_ID",
                    &format!("Player id {} appears more than once", player.id),
                ));
            }
        }

        if let Some(ref formation) = self.formation {
            if let Err(msg) = formation.validate() {
                return Err(ApiError::new("INVALID_FORMATION", &msg));
            }
        }

        Ok(())
    }

    /// Generate JSON schema for this request structure
    pub fn json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(BoardSessionRequest)
    }
}

/// Build the board a session request describes. Formation precedence:
/// explicit template, then squad-size lookup, then the classic 4-4-2.
fn build_board(request: &BoardSessionRequest) -> Result<FormationBoard, ApiError> {
    let formation = match (&request.formation, request.squad_size) {
        (Some(formation), _) => formation.clone(),
        (None, Some(size)) => for_squad_size(size)
            .ok_or_else(|| ApiError::from_board_error(&BoardError::InvalidSquadSize { size }))?,
        (None, None) => classic_442(),
    };

    let mut board = FormationBoard::new(request.players.clone(), formation);
    if let Some(padding) = request.hit_padding {
        board = board.with_hit_padding(padding);
    }
    for entry in &request.layout {
        board.set_slot_rect(&entry.slot_id, entry.rect);
    }
    Ok(board)
}

/// Apply a gesture stream to a board. A faulting event stops the stream;
/// the error carries the event index and the drops resolved before it.
fn apply_events(
    board: &mut FormationBoard,
    events: &[InputEvent],
) -> Result<Vec<DropOutcome>, ApiError> {
    let mut outcomes = Vec::new();
    for (index, event) in events.iter().enumerate() {
        match board.apply(event) {
            Ok(Some(outcome)) => outcomes.push(outcome),
            Ok(None) => {}
            Err(e) => {
                let mut details = HashMap::new();
                details.insert("event_index".to_string(), serde_json::json!(index));
                details.insert("outcomes_before_failure".to_string(), serde_json::json!(outcomes));
                return Err(ApiError::with_details(
                    &ApiError::from_board_error(&e).code,
                    &e.to_string(),
                    details,
                ));
            }
        }
    }
    Ok(outcomes)
}

/// Core API implementation functions

/// Run a full board session from JSON request string
///
/// # Arguments
/// * `request_json` - JSON string containing BoardSessionRequest
///
/// # Returns
/// JSON string containing ApiResponse<BoardSessionResponse>
pub fn run_board_session_json(request_json: &str) -> String {
    info!("Processing board session request");

    // Parse the request
    let request: BoardSessionRequest = match serde_json::from_str(request_json) {
        Ok(req) => req,
        Err(e) => {
            error!("Failed to parse BoardSessionRequest: {}", e);
            let error = ApiError::new("INVALID_JSON", &format!("Invalid JSON format: {}", e));
            let response: ApiResponse<BoardSessionResponse> = ApiResponse::error(error);
            return serde_json::to_string(&response).unwrap_or_else(|_| "{}".to_string());
        }
    };

    // Validate the request
    if let Err(error) = request.validate() {
        warn!("Board session request validation failed: {:?}", error);
        let response: ApiResponse<BoardSessionResponse> = ApiResponse::error(error);
        return serde_json::to_string(&response).unwrap_or_else(|_| "{}".to_string());
    }

    // Build the board
    let mut board = match build_board(&request) {
        Ok(board) => board,
        Err(error) => {
            warn!("Board session setup failed: {}", error.message);
            let response: ApiResponse<BoardSessionResponse> = ApiResponse::error(error);
            return serde_json::to_string(&response).unwrap_or_else(|_| "{}".to_string());
        }
    };

    // Run the gesture stream
    match apply_events(&mut board, &request.events) {
        Ok(outcomes) => {
            info!(
                "Board session resolved {} drops over {} events",
                outcomes.len(),
                request.events.len()
            );
            let response_data =
                BoardSessionResponse { board: board.to_export(), outcomes };
            let response = ApiResponse::success(response_data);
            serde_json::to_string(&response).unwrap_or_else(|_| "{}".to_string())
        }
        Err(error) => {
            error!("Board session failed: {} ({})", error.message, error.code);
            let response: ApiResponse<BoardSessionResponse> = ApiResponse::error(error);
            serde_json::to_string(&response).unwrap_or_else(|_| "{}".to_string())
        }
    }
}

/// Apply a gesture stream to a host-held board from JSON request string
///
/// Events before a faulting one stay applied; the error reports where the
/// stream stopped.
///
/// # Arguments
/// * `request_json` - JSON string containing BoardEventsRequest
/// * `board` - the live board owned by the host
///
/// # Returns
/// JSON string containing ApiResponse<BoardSessionResponse>
pub fn apply_board_events_json(request_json: &str, board: &mut FormationBoard) -> String {
    debug!("Processing board events request");

    // Parse the request
    let request: BoardEventsRequest = match serde_json::from_str(request_json) {
        Ok(req) => req,
        Err(e) => {
            error!("Failed to parse BoardEventsRequest: {}", e);
            let error = ApiError::new("INVALID_JSON", &format!("Invalid JSON format: {}", e));
            let response: ApiResponse<BoardSessionResponse> = ApiResponse::error(error);
            return serde_json::to_string(&response).unwrap_or_else(|_| "{}".to_string());
        }
    };

    match apply_events(board, &request.events) {
        Ok(outcomes) => {
            debug!("Applied {} events", request.events.len());
            let response_data =
                BoardSessionResponse { board: board.to_export(), outcomes };
            let response = ApiResponse::success(response_data);
            serde_json::to_string(&response).unwrap_or_else(|_| "{}".to_string())
        }
        Err(error) => {
            warn!("Board events failed: {} ({})", error.message, error.code);
            let response: ApiResponse<BoardSessionResponse> = ApiResponse::error(error);
            serde_json::to_string(&response).unwrap_or_else(|_| "{}".to_string())
        }
    }
}

/// Export the current board snapshot as a JSON envelope
pub fn export_board_json(board: &FormationBoard) -> String {
    debug!("Exporting board snapshot");

    let response = ApiResponse::success(board.to_export());
    serde_json::to_string(&response).unwrap_or_else(|_| "{}".to_string())
}

/// Look up the formation template for a squad size
pub fn get_formation_json(request_json: &str) -> String {
    debug!("Processing formation query request");

    let request: FormationQueryRequest = match serde_json::from_str(request_json) {
        Ok(req) => req,
        Err(e) => {
            error!("Failed to parse FormationQueryRequest: {}", e);
            let error = ApiError::new("INVALID_JSON", &format!("Invalid JSON format: {}", e));
            let response: ApiResponse<FormationQueryResponse> = ApiResponse::error(error);
            return serde_json::to_string(&response).unwrap_or_else(|_| "{}".to_string());
        }
    };

    match for_squad_size(request.squad_size) {
        Some(formation) => {
            let response = ApiResponse::success(FormationQueryResponse { formation });
            serde_json::to_string(&response).unwrap_or_else(|_| "{}".to_string())
        }
        None => {
            let error = ApiError::from_board_error(&BoardError::InvalidSquadSize {
                size: request.squad_size,
            });
            let response: ApiResponse<FormationQueryResponse> = ApiResponse::error(error);
            serde_json::to_string(&response).unwrap_or_else(|_| "{}".to_string())
        }
    }
}

/// List every formation template, smallest squad first
pub fn list_formations_json() -> String {
    debug!("Listing formation catalog");

    let response = ApiResponse::success(FormationListResponse {
        formations: crate::formation::all_formations(),
    });
    serde_json::to_string(&response).unwrap_or_else(|_| "{}".to_string())
}
