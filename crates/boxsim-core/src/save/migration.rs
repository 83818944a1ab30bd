use super::error::SaveError;
use super::format::UniverseSave;
use super::SAVE_VERSION;

/// Bring an older save up to the current version. A no-op today since
/// `SAVE_VERSION` has never incremented, but kept as the seam the next
/// format change hangs off of rather than special-cased inline at the
/// load site.
pub fn migrate_save(mut save: UniverseSave) -> Result<UniverseSave, SaveError> {
    let original_version = save.version;

    save = match save.version {
        1 => save,
        v if v > SAVE_VERSION => {
            log::warn!("loading a save from a future version {} (current: {})", v, SAVE_VERSION);
            save
        }
        _ => return Err(SaveError::VersionMismatch { found: save.version, expected: SAVE_VERSION }),
    };

    save.version = SAVE_VERSION;
    if original_version != SAVE_VERSION {
        save.update_timestamp();
        log::info!("migrated save from version {} to {}", original_version, SAVE_VERSION);
    }
    Ok(save)
}

pub fn needs_migration(save: &UniverseSave) -> bool {
    save.version < SAVE_VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_version_is_unchanged() {
        let save = UniverseSave {
            version: SAVE_VERSION,
            timestamp: 0,
            base_seed: 1,
            year: 2026,
            week: 1,
            fighters: Vec::new(),
            titles: Vec::new(),
            hall_of_fame: Vec::new(),
            recent_results: Vec::new(),
        };
        let migrated = migrate_save(save.clone()).unwrap();
        assert_eq!(migrated.version, save.version);
    }

    #[test]
    fn future_version_is_accepted_with_a_warning() {
        let mut save = UniverseSave {
            version: SAVE_VERSION + 1,
            timestamp: 0,
            base_seed: 1,
            year: 2026,
            week: 1,
            fighters: Vec::new(),
            titles: Vec::new(),
            hall_of_fame: Vec::new(),
            recent_results: Vec::new(),
        };
        save.version = SAVE_VERSION + 1;
        assert!(migrate_save(save).is_ok());
    }
}
