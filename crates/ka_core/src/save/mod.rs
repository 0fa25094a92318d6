// Profile persistence for Kickabout
// MessagePack + LZ4 compression with versioning and integrity checks

pub mod error;
pub mod format;
pub mod store;

pub use error::ProfileStoreError;
pub use format::{
    current_timestamp, decompress_and_deserialize, serialize_and_compress, ProfileRecord,
    UserProfile,
};
pub use store::{ProfileInfo, ProfileStore};

pub const PROFILE_VERSION: u32 = 1;
