//! JSON API for the user profile
//!
//! Save and load the profile through the host-provided store. Responses
//! echo the stored timestamp so the profile screen can show when the
//! profile was last saved.

use crate::save::{ProfileStore, ProfileStoreError, UserProfile};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use super::board_json::{ApiError, ApiResponse};

/// Profile save request
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SaveProfileRequest {
    pub schema_version: Option<String>,
    pub profile: UserProfile,
}

/// Profile save response
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SaveProfileResponse {
    pub version: u32,
    /// Unix milliseconds the record was stamped with.
    pub saved_at: u64,
}

/// Profile load response
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct LoadProfileResponse {
    pub profile: UserProfile,
    pub version: u32,
    pub saved_at: u64,
}

impl ApiError {
    pub fn from_store_error(error: &ProfileStoreError) -> Self {
        let code = match error {
            ProfileStoreError::FileNotFound { .. } => "PROFILE_NOT_FOUND",
            ProfileStoreError::ChecksumMismatch
            | ProfileStoreError::Corrupted
            | ProfileStoreError::Decompression
            | ProfileStoreError::Deserialization(_) => "PROFILE_CORRUPTED",
            ProfileStoreError::VersionMismatch { .. } => "VERSION_MISMATCH",
            ProfileStoreError::DataTooLarge { .. } => "PROFILE_TOO_LARGE",
            ProfileStoreError::Serialization(_) => "ENCODE_FAILED",
            ProfileStoreError::Io(_) => "IO_ERROR",
        };

        Self::new(code, &error.to_string())
    }
}

/// Save the profile from JSON request string
///
/// # Arguments
/// * `request_json` - JSON string containing SaveProfileRequest
/// * `store` - the profile store rooted at the host's data directory
///
/// # Returns
/// JSON string containing ApiResponse<SaveProfileResponse>
pub fn save_profile_json(request_json: &str, store: &ProfileStore) -> String {
    info!("Processing profile save request");

    let request: SaveProfileRequest = match serde_json::from_str(request_json) {
        Ok(req) => req,
        Err(e) => {
            error!("Failed to parse SaveProfileRequest: {}", e);
            let error = ApiError::new("INVALID_JSON", &format!("Invalid JSON format: {}", e));
            let response: ApiResponse<SaveProfileResponse> = ApiResponse::error(error);
            return serde_json::to_string(&response).unwrap_or_else(|_| "{}".to_string());
        }
    };

    match store.save(&request.profile) {
        Ok(record) => {
            info!("Profile saved at {}", record.saved_at);
            let response = ApiResponse::success(SaveProfileResponse {
                version: record.version,
                saved_at: record.saved_at,
            });
            serde_json::to_string(&response).unwrap_or_else(|_| "{}".to_string())
        }
        Err(e) => {
            error!("Profile save failed: {}", e);
            let response: ApiResponse<SaveProfileResponse> =
                ApiResponse::error(ApiError::from_store_error(&e));
            serde_json::to_string(&response).unwrap_or_else(|_| "{}".to_string())
        }
    }
}

/// Load the stored profile
///
/// A missing file reports PROFILE_NOT_FOUND; the host shows the empty form.
pub fn load_profile_json(store: &ProfileStore) -> String {
    debug!("Processing profile load request");

    match store.load() {
        Ok(record) => {
            let response = ApiResponse::success(LoadProfileResponse {
                profile: record.profile,
                version: record.version,
                saved_at: record.saved_at,
            });
            serde_json::to_string(&response).unwrap_or_else(|_| "{}".to_string())
        }
        Err(e) => {
            if e.is_recoverable() {
                debug!("No stored profile: {}", e);
            } else {
                warn!("Profile load failed: {}", e);
            }
            let response: ApiResponse<LoadProfileResponse> =
                ApiResponse::error(ApiError::from_store_error(&e));
            serde_json::to_string(&response).unwrap_or_else(|_| "{}".to_string())
        }
    }
}
