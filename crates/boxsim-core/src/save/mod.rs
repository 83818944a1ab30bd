//! Universe persistence: MessagePack + LZ4 compression with a SHA256
//! checksum and slot-based atomic writes.

pub mod error;
pub mod format;
pub mod manager;
pub mod migration;

pub use error::SaveError;
pub use format::{decompress_and_deserialize, serialize_and_compress, UniverseSave};
pub use manager::{SaveManager, SaveSlotInfo, SLOT_COUNT};
pub use migration::{migrate_save, needs_migration};

pub const SAVE_VERSION: u32 = 1;
