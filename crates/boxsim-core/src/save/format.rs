use serde::{Deserialize, Serialize};

use lz4_flex::{compress_prepend_size, decompress_size_prepended};
use rmp_serde::{from_slice, to_vec_named};
use sha2::{Digest, Sha256};

use crate::models::fighter::Fighter;
use crate::models::sanctioning::Title;
use crate::universe::hall_of_fame::HofInductee;
use crate::universe::week_processor::BoutSummary;

use super::error::SaveError;
use super::SAVE_VERSION;

/// On-disk snapshot of a universe. Everything needed to resume a career
/// simulation from exactly where it stopped: every fighter, every title's
/// lineage, the hall of fame register, and the rolling window of recent
/// results the rankings/matchmaker consult for freshness checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UniverseSave {
    pub version: u32,
    pub timestamp: u64,
    pub base_seed: u64,
    pub year: u32,
    pub week: u32,
    pub fighters: Vec<Fighter>,
    pub titles: Vec<Title>,
    pub hall_of_fame: Vec<HofInductee>,
    pub recent_results: Vec<BoutSummary>,
}

impl UniverseSave {
    pub fn validate(&self) -> Result<(), SaveError> {
        if self.fighters.len() > 100_000 {
            return Err(SaveError::DataTooLarge { size: self.fighters.len() });
        }
        let mut seen = std::collections::HashSet::new();
        for fighter in &self.fighters {
            if !seen.insert(&fighter.id) {
                return Err(SaveError::Corrupted);
            }
        }
        Ok(())
    }

    pub fn update_timestamp(&mut self) {
        self.timestamp = current_timestamp();
    }
}

/// Serialize to MessagePack, compress with LZ4, append a SHA256 checksum.
pub fn serialize_and_compress(save: &UniverseSave) -> Result<Vec<u8>, SaveError> {
    save.validate()?;

    let msgpack = to_vec_named(save).map_err(SaveError::Serialization)?;
    let compressed = compress_prepend_size(&msgpack);

    let mut hasher = Sha256::new();
    hasher.update(&compressed);
    let checksum = hasher.finalize();

    let mut result = compressed;
    result.extend_from_slice(&checksum);
    Ok(result)
}

/// Verify the checksum, decompress, and deserialize. Does not apply
/// migrations; callers go through `SaveManager` for that.
pub fn decompress_and_deserialize(bytes: &[u8]) -> Result<UniverseSave, SaveError> {
    if bytes.len() < 4 + 32 {
        return Err(SaveError::Corrupted);
    }

    let (payload, checksum_bytes) = bytes.split_at(bytes.len() - 32);

    let mut hasher = Sha256::new();
    hasher.update(payload);
    let calculated = hasher.finalize();
    if &calculated[..] != checksum_bytes {
        return Err(SaveError::ChecksumMismatch);
    }

    let msgpack = decompress_size_prepended(payload).map_err(|_| SaveError::Decompression)?;
    let save: UniverseSave = from_slice(&msgpack).map_err(SaveError::Deserialization)?;

    if save.version > SAVE_VERSION {
        return Err(SaveError::VersionMismatch { found: save.version, expected: SAVE_VERSION });
    }
    Ok(save)
}

pub fn current_timestamp() -> u64 {
    chrono::Utc::now().timestamp_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_save() -> UniverseSave {
        UniverseSave {
            version: SAVE_VERSION,
            timestamp: current_timestamp(),
            base_seed: 7,
            year: 2026,
            week: 1,
            fighters: Vec::new(),
            titles: Vec::new(),
            hall_of_fame: Vec::new(),
            recent_results: Vec::new(),
        }
    }

    #[test]
    fn serialize_deserialize_roundtrip() {
        let save = empty_save();
        let bytes = serialize_and_compress(&save).unwrap();
        let restored = decompress_and_deserialize(&bytes).unwrap();
        assert_eq!(restored.version, save.version);
        assert_eq!(restored.base_seed, save.base_seed);
    }

    #[test]
    fn corrupted_checksum_is_rejected() {
        let save = empty_save();
        let mut bytes = serialize_and_compress(&save).unwrap();
        if let Some(last) = bytes.last_mut() {
            *last = last.wrapping_add(1);
        }
        let result = decompress_and_deserialize(&bytes);
        assert!(matches!(result, Err(SaveError::ChecksumMismatch)));
    }

    #[test]
    fn duplicate_fighter_ids_fail_validation() {
        let mut save = empty_save();
        let fighter = crate::fighter::generator::generate_fighter(1, 50);
        save.fighters.push(fighter.clone());
        save.fighters.push(fighter);
        assert!(save.validate().is_err());
    }
}
