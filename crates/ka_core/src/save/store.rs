use super::error::ProfileStoreError;
use super::format::{
    decompress_and_deserialize, serialize_and_compress, ProfileRecord, UserProfile,
};
use crate::models::player::PitchRole;

use std::fs::{remove_file, rename, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

const PROFILE_FILE: &str = "user_profile.dat";

/// Reads and writes the profile file under a host-provided data directory.
pub struct ProfileStore {
    dir: PathBuf,
}

impl ProfileStore {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        ProfileStore { dir: dir.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(PROFILE_FILE)
    }

    /// Persist the profile, stamping it with the current time. Returns the
    /// record as written so callers can echo `saved_at` back to the UI.
    pub fn save(&self, profile: &UserProfile) -> Result<ProfileRecord, ProfileStoreError> {
        let record = ProfileRecord::new(profile.clone());
        Self::save_to_path(&self.path(), &record)?;
        log::info!("profile saved ({} bytes of name)", profile.name.len());
        Ok(record)
    }

    pub fn load(&self) -> Result<ProfileRecord, ProfileStoreError> {
        let record = Self::load_from_path(&self.path())?;
        log::info!("profile loaded (saved_at {})", record.saved_at);
        Ok(record)
    }

    pub fn exists(&self) -> bool {
        self.path().exists()
    }

    pub fn delete(&self) -> Result<(), ProfileStoreError> {
        let path = self.path();
        if path.exists() {
            remove_file(&path)?;
            log::info!("profile deleted");
        }
        Ok(())
    }

    /// Lightweight metadata for the profile screen header.
    pub fn info(&self) -> Result<Option<ProfileInfo>, ProfileStoreError> {
        if !self.exists() {
            return Ok(None);
        }

        let record = self.load()?;
        Ok(Some(ProfileInfo {
            version: record.version,
            saved_at: record.saved_at,
            name: record.profile.name,
            primary_position: record.profile.primary_position,
        }))
    }

    // Private helper methods

    fn save_to_path(path: &Path, record: &ProfileRecord) -> Result<(), ProfileStoreError> {
        // Ensure the data directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // Serialize and compress
        let data = serialize_and_compress(record)?;

        // Atomic save: write to temp file, then rename
        let temp_path = path.with_extension("tmp");

        {
            let mut file = File::create(&temp_path)?;
            file.write_all(&data)?;
            file.flush()?;

            // sync_all ensures data is written to disk (portable fsync)
            file.sync_all()?;
        }

        // Atomic rename
        rename(&temp_path, path)?;

        log::debug!("Saved {} bytes to {:?}", data.len(), path);
        Ok(())
    }

    fn load_from_path(path: &Path) -> Result<ProfileRecord, ProfileStoreError> {
        if !path.exists() {
            return Err(ProfileStoreError::FileNotFound { path: path.display().to_string() });
        }

        let mut file = File::open(path)?;
        let mut data = Vec::new();
        file.read_to_end(&mut data)?;

        let record = decompress_and_deserialize(&data)?;

        log::debug!("Loaded {} bytes from {:?}", data.len(), path);
        Ok(record)
    }
}

impl Default for ProfileStore {
    /// Falls back to a `profile` directory under the working directory for
    /// hosts that pass no data dir.
    fn default() -> Self {
        let dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")).join("profile");
        ProfileStore { dir }
    }
}

/// Summary of the stored profile for UI display.
#[derive(Debug, Clone)]
pub struct ProfileInfo {
    pub version: u32,
    pub saved_at: u64,
    pub name: String,
    pub primary_position: PitchRole,
}

impl ProfileInfo {
    pub fn format_timestamp(&self) -> String {
        use time::{format_description::well_known::Rfc3339, OffsetDateTime};

        let timestamp =
            OffsetDateTime::from_unix_timestamp_nanos((self.saved_at * 1_000_000) as i128)
                .unwrap_or_else(|_| OffsetDateTime::now_utc());

        timestamp.format(&Rfc3339).unwrap_or_else(|_| "Unknown".to_string())
    }

    pub fn get_display_text(&self) -> String {
        let name = if self.name.is_empty() { "Unnamed" } else { &self.name };
        format!("{} ({})", name, self.primary_position)
    }
}
