use super::error::ProfileStoreError;
use super::PROFILE_VERSION;
use crate::models::player::PitchRole;
use serde::{Deserialize, Serialize};

use lz4_flex::{compress_prepend_size, decompress_size_prepended};
use rmp_serde::{from_slice, to_vec_named};
use schemars::JsonSchema;
use sha2::{Digest, Sha256};
use time::OffsetDateTime;

/// Longest accepted free-text field, in bytes.
const MAX_FIELD_LEN: usize = 200;

/// The user's profile as edited on the profile screen.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
pub struct UserProfile {
    /// Display name. May be empty while the user is still filling it in.
    pub name: String,

    /// Free-text home ground or area.
    pub location: String,

    /// Preferred position.
    pub primary_position: PitchRole,

    /// Fallback position.
    pub secondary_position: PitchRole,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: String::new(),
            location: String::new(),
            primary_position: PitchRole::ST,
            secondary_position: PitchRole::CM,
        }
    }
}

impl UserProfile {
    pub fn validate(&self) -> Result<(), ProfileStoreError> {
        if self.name.len() > MAX_FIELD_LEN {
            return Err(ProfileStoreError::DataTooLarge { size: self.name.len() });
        }
        if self.location.len() > MAX_FIELD_LEN {
            return Err(ProfileStoreError::DataTooLarge { size: self.location.len() });
        }
        Ok(())
    }
}

/// On-disk profile envelope.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ProfileRecord {
    /// Record format version for forward compatibility checks.
    pub version: u32,

    /// Save timestamp (unix milliseconds).
    pub saved_at: u64,

    pub profile: UserProfile,
}

impl ProfileRecord {
    pub fn new(profile: UserProfile) -> Self {
        Self { version: PROFILE_VERSION, saved_at: current_timestamp(), profile }
    }

    pub fn update_timestamp(&mut self) {
        self.saved_at = current_timestamp();
    }
}

/// Serialize and compress a profile record
pub fn serialize_and_compress(record: &ProfileRecord) -> Result<Vec<u8>, ProfileStoreError> {
    // Validate before serialization
    record.profile.validate()?;

    // 1. Serialize to MessagePack with field names
    let msgpack = to_vec_named(record).map_err(ProfileStoreError::Serialization)?;

    // 2. Compress with LZ4 (size prepended for easy decompression)
    let compressed = compress_prepend_size(&msgpack);

    // 3. Add SHA256 checksum at the end
    let mut hasher = Sha256::new();
    hasher.update(&compressed);
    let checksum = hasher.finalize();

    let mut result = compressed;
    result.extend_from_slice(&checksum);

    Ok(result)
}

/// Decompress and deserialize a profile record
pub fn decompress_and_deserialize(bytes: &[u8]) -> Result<ProfileRecord, ProfileStoreError> {
    // Check minimum size (header + checksum)
    if bytes.len() < 4 + 32 {
        return Err(ProfileStoreError::Corrupted);
    }

    // Split payload and checksum
    let (payload, checksum_bytes) = bytes.split_at(bytes.len() - 32);

    // Verify checksum
    let mut hasher = Sha256::new();
    hasher.update(payload);
    let calculated_checksum = hasher.finalize();

    if &calculated_checksum[..] != checksum_bytes {
        return Err(ProfileStoreError::ChecksumMismatch);
    }

    // Decompress
    let msgpack =
        decompress_size_prepended(payload).map_err(|_| ProfileStoreError::Decompression)?;

    // Deserialize
    let record: ProfileRecord =
        from_slice(&msgpack).map_err(ProfileStoreError::Deserialization)?;

    // Validate version
    if record.version > PROFILE_VERSION {
        return Err(ProfileStoreError::VersionMismatch {
            found: record.version,
            expected: PROFILE_VERSION,
        });
    }

    Ok(record)
}

pub fn current_timestamp() -> u64 {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as u64
}
