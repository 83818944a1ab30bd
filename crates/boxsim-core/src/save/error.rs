use thiserror::Error;

#[derive(Error, Debug)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] rmp_serde::encode::Error),

    #[error("deserialization error: {0}")]
    Deserialization(#[from] rmp_serde::decode::Error),

    #[error("decompression error")]
    Decompression,

    #[error("corrupted save data")]
    Corrupted,

    #[error("version mismatch: found {found}, expected {expected}")]
    VersionMismatch { found: u32, expected: u32 },

    #[error("checksum mismatch")]
    ChecksumMismatch,

    #[error("save file not found: {path}")]
    FileNotFound { path: String },

    #[error("invalid save slot: {slot}")]
    InvalidSlot { slot: i64 },

    #[error("save data too large: {size} fighters")]
    DataTooLarge { size: usize },
}

impl SaveError {
    pub fn is_recoverable(&self) -> bool {
        match self {
            SaveError::Io(_) => true,
            SaveError::FileNotFound { .. } => true,
            SaveError::VersionMismatch { .. } => true,
            SaveError::InvalidSlot { .. } => false,
            SaveError::Corrupted => false,
            SaveError::ChecksumMismatch => false,
            _ => false,
        }
    }
}
