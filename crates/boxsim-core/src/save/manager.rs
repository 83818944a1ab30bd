use std::fs::{remove_file, rename, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use super::error::SaveError;
use super::format::{decompress_and_deserialize, serialize_and_compress, UniverseSave};
use super::migration::migrate_save;

/// Slot-based save/load against a directory on disk, with an extra
/// always-on autosave slot. Holds no in-memory game state of its own --
/// every call here takes or returns a `UniverseSave` explicitly, since
/// `Universe` is an owned value the CLI carries rather than a
/// process-wide singleton.
pub struct SaveManager {
    save_dir: PathBuf,
}

pub const SLOT_COUNT: u8 = 5;

impl SaveManager {
    pub fn new(save_dir: impl Into<PathBuf>) -> Self {
        Self { save_dir: save_dir.into() }
    }

    pub fn save_to_slot(&self, slot: u8, save: &UniverseSave) -> Result<(), SaveError> {
        Self::validate_slot(slot)?;
        let path = self.slot_path(slot);
        self.save_to_path(&path, save)?;
        log::info!("universe saved to slot {}", slot);
        Ok(())
    }

    pub fn load_from_slot(&self, slot: u8) -> Result<UniverseSave, SaveError> {
        Self::validate_slot(slot)?;
        let path = self.slot_path(slot);
        let save = self.load_from_path(&path)?;
        log::info!("universe loaded from slot {}", slot);
        Ok(save)
    }

    pub fn auto_save(&self, save: &UniverseSave) -> Result<(), SaveError> {
        let path = self.auto_save_path();
        self.save_to_path(&path, save)?;
        log::debug!("autosave completed at week {}/{}", save.week, save.year);
        Ok(())
    }

    pub fn load_auto_save(&self) -> Result<UniverseSave, SaveError> {
        let path = self.auto_save_path();
        self.load_from_path(&path)
    }

    pub fn slot_exists(&self, slot: u8) -> bool {
        Self::validate_slot(slot).is_ok() && self.slot_path(slot).exists()
    }

    pub fn auto_save_exists(&self) -> bool {
        self.auto_save_path().exists()
    }

    pub fn delete_slot(&self, slot: u8) -> Result<(), SaveError> {
        Self::validate_slot(slot)?;
        let path = self.slot_path(slot);
        if path.exists() {
            remove_file(&path)?;
            log::info!("deleted save slot {}", slot);
        }
        Ok(())
    }

    pub fn slot_info(&self, slot: u8) -> Result<Option<SaveSlotInfo>, SaveError> {
        Self::validate_slot(slot)?;
        let path = self.slot_path(slot);
        if !path.exists() {
            return Ok(None);
        }
        let save = self.load_from_path(&path)?;
        Ok(Some(SaveSlotInfo {
            slot,
            timestamp: save.timestamp,
            version: save.version,
            week: save.week,
            year: save.year,
            fighter_count: save.fighters.len(),
        }))
    }

    pub fn all_slot_info(&self) -> Vec<SaveSlotInfo> {
        let mut slots: Vec<SaveSlotInfo> =
            (0..SLOT_COUNT).filter_map(|slot| self.slot_info(slot).ok().flatten()).collect();
        slots.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        slots
    }

    fn validate_slot(slot: u8) -> Result<(), SaveError> {
        if slot >= SLOT_COUNT {
            return Err(SaveError::InvalidSlot { slot: slot as i64 });
        }
        Ok(())
    }

    fn slot_path(&self, slot: u8) -> PathBuf {
        self.save_dir.join(format!("universe_slot_{}.box", slot))
    }

    fn auto_save_path(&self) -> PathBuf {
        self.save_dir.join("universe_autosave.box")
    }

    fn save_to_path(&self, path: &Path, save: &UniverseSave) -> Result<(), SaveError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = serialize_and_compress(save)?;
        let temp_path = path.with_extension("tmp");
        {
            let mut file = File::create(&temp_path)?;
            file.write_all(&data)?;
            file.flush()?;
            file.sync_all()?;
        }
        rename(&temp_path, path)?;

        log::debug!("wrote {} bytes to {:?}", data.len(), path);
        Ok(())
    }

    fn load_from_path(&self, path: &Path) -> Result<UniverseSave, SaveError> {
        if !path.exists() {
            return Err(SaveError::FileNotFound { path: path.display().to_string() });
        }
        let mut file = File::open(path)?;
        let mut data = Vec::new();
        file.read_to_end(&mut data)?;

        let save = decompress_and_deserialize(&data)?;
        let save = migrate_save(save)?;
        log::debug!("read {} bytes from {:?}", data.len(), path);
        Ok(save)
    }
}

#[derive(Debug, Clone)]
pub struct SaveSlotInfo {
    pub slot: u8,
    pub timestamp: u64,
    pub version: u32,
    pub week: u32,
    pub year: u32,
    pub fighter_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_save() -> UniverseSave {
        UniverseSave {
            version: super::super::SAVE_VERSION,
            timestamp: super::super::format::current_timestamp(),
            base_seed: 11,
            year: 2026,
            week: 3,
            fighters: Vec::new(),
            titles: Vec::new(),
            hall_of_fame: Vec::new(),
            recent_results: Vec::new(),
        }
    }

    #[test]
    fn save_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let manager = SaveManager::new(dir.path());
        let save = sample_save();

        manager.save_to_slot(0, &save).unwrap();
        let loaded = manager.load_from_slot(0).unwrap();
        assert_eq!(loaded.week, save.week);
        assert_eq!(loaded.base_seed, save.base_seed);
    }

    #[test]
    fn atomic_save_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let manager = SaveManager::new(dir.path());
        manager.save_to_slot(1, &sample_save()).unwrap();

        assert!(manager.slot_path(1).exists());
        assert!(!manager.slot_path(1).with_extension("tmp").exists());
    }

    #[test]
    fn invalid_slot_is_rejected() {
        let dir = TempDir::new().unwrap();
        let manager = SaveManager::new(dir.path());
        assert!(manager.save_to_slot(SLOT_COUNT, &sample_save()).is_err());
    }

    #[test]
    fn autosave_roundtrips() {
        let dir = TempDir::new().unwrap();
        let manager = SaveManager::new(dir.path());
        let save = sample_save();
        manager.auto_save(&save).unwrap();
        assert!(manager.auto_save_exists());
        let loaded = manager.load_auto_save().unwrap();
        assert_eq!(loaded.week, save.week);
    }
}
