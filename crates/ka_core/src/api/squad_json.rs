//! JSON API for squad management
//!
//! Endpoints for the squads screen: list the directory, create a squad,
//! answer availability for the next game.

use crate::error::SquadError;
use crate::models::squad::{Squad, SquadDirectory};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, error, info, warn};

use super::board_json::{ApiError, ApiResponse};

/// Squad listing response
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SquadListResponse {
    pub squads: Vec<Squad>,
    /// Availability answer per squad id; unanswered squads map to false.
    pub availability: HashMap<String, bool>,
}

/// Squad creation request
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CreateSquadRequest {
    pub schema_version: Option<String>,
    pub name: String,
}

/// Squad creation response
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CreateSquadResponse {
    pub squad: Squad,
}

/// Availability update request
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SetAvailabilityRequest {
    pub schema_version: Option<String>,
    pub squad_id: String,
    pub available: bool,
}

/// Availability update response
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SetAvailabilityResponse {
    pub squad_id: String,
    pub available: bool,
}

impl ApiError {
    pub fn from_squad_error(error: &SquadError) -> Self {
        let code = match error {
            SquadError::EmptyName => "EMPTY_NAME",
            SquadError::NotFound(_) => "SQUAD_NOT_FOUND",
        };

        Self::new(code, &error.to_string())
    }
}

/// List every squad with the user's availability answers
pub fn list_squads_json(directory: &SquadDirectory) -> String {
    debug!("Listing {} squads", directory.len());

    let availability: HashMap<String, bool> = directory
        .squads()
        .iter()
        .map(|squad| (squad.id.clone(), directory.is_available(&squad.id)))
        .collect();

    let response = ApiResponse::success(SquadListResponse {
        squads: directory.squads().to_vec(),
        availability,
    });
    serde_json::to_string(&response).unwrap_or_else(|_| "{}".to_string())
}

/// Create a squad from JSON request string
///
/// # Arguments
/// * `request_json` - JSON string containing CreateSquadRequest
/// * `directory` - the live squad directory owned by the host
///
/// # Returns
/// JSON string containing ApiResponse<CreateSquadResponse>
pub fn create_squad_json(request_json: &str, directory: &mut SquadDirectory) -> String {
    info!("Processing squad creation request");

    let request: CreateSquadRequest = match serde_json::from_str(request_json) {
        Ok(req) => req,
        Err(e) => {
            error!("Failed to parse CreateSquadRequest: {}", e);
            let error = ApiError::new("INVALID_JSON", &format!("Invalid JSON format: {}", e));
            let response: ApiResponse<CreateSquadResponse> = ApiResponse::error(error);
            return serde_json::to_string(&response).unwrap_or_else(|_| "{}".to_string());
        }
    };

    match directory.create_squad(&request.name) {
        Ok(squad) => {
            info!("Squad created: {} ({})", squad.name, squad.id);
            let response = ApiResponse::success(CreateSquadResponse { squad: squad.clone() });
            serde_json::to_string(&response).unwrap_or_else(|_| "{}".to_string())
        }
        Err(e) => {
            warn!("Squad creation rejected: {}", e);
            let response: ApiResponse<CreateSquadResponse> =
                ApiResponse::error(ApiError::from_squad_error(&e));
            serde_json::to_string(&response).unwrap_or_else(|_| "{}".to_string())
        }
    }
}

/// Record an availability answer from JSON request string
pub fn set_availability_json(request_json: &str, directory: &mut SquadDirectory) -> String {
    debug!("Processing availability update");

    let request: SetAvailabilityRequest = match serde_json::from_str(request_json) {
        Ok(req) => req,
        Err(e) => {
            error!("Failed to parse SetAvailabilityRequest: {}", e);
            let error = ApiError::new("INVALID_JSON", &format!("Invalid JSON format: {}", e));
            let response: ApiResponse<SetAvailabilityResponse> = ApiResponse::error(error);
            return serde_json::to_string(&response).unwrap_or_else(|_| "{}".to_string());
        }
    };

    match directory.set_availability(&request.squad_id, request.available) {
        Ok(()) => {
            let response = ApiResponse::success(SetAvailabilityResponse {
                squad_id: request.squad_id,
                available: request.available,
            });
            serde_json::to_string(&response).unwrap_or_else(|_| "{}".to_string())
        }
        Err(e) => {
            warn!("Availability update rejected: {}", e);
            let response: ApiResponse<SetAvailabilityResponse> =
                ApiResponse::error(ApiError::from_squad_error(&e));
            serde_json::to_string(&response).unwrap_or_else(|_| "{}".to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn parse(response: &str) -> Value {
        serde_json::from_str(response).unwrap()
    }

    #[test]
    fn test_list_squads_includes_availability() {
        let mut directory = SquadDirectory::sample();
        directory.set_availability("1", true).unwrap();

        let response = parse(&list_squads_json(&directory));
        assert_eq!(response["success"], json!(true));

        let squads = response["data"]["squads"].as_array().unwrap();
        assert_eq!(squads.len(), 2);
        assert_eq!(squads[0]["name"], json!("Sunday League FC"));
        assert_eq!(squads[0]["role"], json!("Manager"));

        assert_eq!(response["data"]["availability"]["1"], json!(true));
        assert_eq!(response["data"]["availability"]["2"], json!(false));
    }

    #[test]
    fn test_create_squad_endpoint() {
        let mut directory = SquadDirectory::sample();
        let request = json!({"name": "Monday Medics"});

        let response = parse(&create_squad_json(&request.to_string(), &mut directory));
        assert_eq!(response["success"], json!(true));
        assert_eq!(response["data"]["squad"]["name"], json!("Monday Medics"));
        assert_eq!(response["data"]["squad"]["member_count"], json!(1));
        assert_eq!(response["data"]["squad"]["role"], json!("Manager"));
        assert_eq!(directory.len(), 3);
        assert_eq!(directory.squads()[0].name, "Monday Medics");
    }

    #[test]
    fn test_create_squad_rejects_blank_name() {
        let mut directory = SquadDirectory::new();
        let request = json!({"name": "   "});

        let response = parse(&create_squad_json(&request.to_string(), &mut directory));
        assert_eq!(response["success"], json!(false));
        assert_eq!(response["error"]["code"], json!("EMPTY_NAME"));
        assert!(directory.is_empty());
    }

    #[test]
    fn test_set_availability_endpoint() {
        let mut directory = SquadDirectory::sample();
        let request = json!({"squad_id": "2", "available": true});

        let response = parse(&set_availability_json(&request.to_string(), &mut directory));
        assert_eq!(response["success"], json!(true));
        assert_eq!(response["data"]["squad_id"], json!("2"));
        assert!(directory.is_available("2"));
    }

    #[test]
    fn test_set_availability_unknown_squad() {
        let mut directory = SquadDirectory::sample();
        let request = json!({"squad_id": "99", "available": true});

        let response = parse(&set_availability_json(&request.to_string(), &mut directory));
        assert_eq!(response["success"], json!(false));
        assert_eq!(response["error"]["code"], json!("SQUAD_NOT_FOUND"));
    }

    #[test]
    fn test_malformed_request_is_reported() {
        let mut directory = SquadDirectory::new();
        let response = parse(&create_squad_json("{", &mut directory));
        assert_eq!(response["error"]["code"], json!("INVALID_JSON"));
    }
}
