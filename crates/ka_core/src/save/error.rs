use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProfileStoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] rmp_serde::encode::Error),

    #[error("Deserialization error: {0}")]
    Deserialization(#[from] rmp_serde::decode::Error),

    #[error("Decompression error")]
    Decompression,

    #[error("Corrupted data")]
    Corrupted,

    #[error("Version mismatch: found {found}, expected {expected}")]
    VersionMismatch { found: u32, expected: u32 },

    #[error("Checksum mismatch")]
    ChecksumMismatch,

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Profile data too large: {size} bytes")]
    DataTooLarge { size: usize },
}

impl ProfileStoreError {
    /// Whether the caller can fall back to an empty profile and carry on.
    /// Corruption and bad checksums mean the file on disk cannot be
    /// trusted; a newer version means the app was downgraded.
    pub fn is_recoverable(&self) -> bool {
        match self {
            ProfileStoreError::Io(_) => true,
            ProfileStoreError::FileNotFound { .. } => true,
            ProfileStoreError::Corrupted => false,
            ProfileStoreError::ChecksumMismatch => false,
            ProfileStoreError::VersionMismatch { .. } => false,
            _ => false,
        }
    }
}
