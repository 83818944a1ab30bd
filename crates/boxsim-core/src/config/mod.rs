//! On-disk configuration loading for direct-fight mode: a fighter
//! configuration file builds a `Fighter` without going through the
//! procedural generator, and a fight configuration file pairs two such
//! fighters with bout parameters ready to hand to `combat::run_fight`.
//! JSON and YAML are both accepted, detected by extension.

pub mod fight_config;
pub mod fighter_config;

pub use fight_config::FightConfigFile;
pub use fighter_config::FighterConfigFile;

use std::fs;
use std::path::Path;

use crate::error::{BoxsimError, Result};

/// Read a config document from disk and deserialize it as either JSON or
/// YAML based on its extension. `.yml`/`.yaml` are parsed as YAML;
/// anything else (including no extension) is parsed as JSON.
pub(crate) fn read_config<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = fs::read_to_string(path)
        .map_err(|e| BoxsimError::Config(format!("cannot read {}: {e}", path.display())))?;

    let is_yaml = matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yml") | Some("yaml")
    );

    if is_yaml {
        serde_yaml::from_str(&contents)
            .map_err(|e| BoxsimError::Config(format!("invalid YAML in {}: {e}", path.display())))
    } else {
        serde_json::from_str(&contents)
            .map_err(|e| BoxsimError::Config(format!("invalid JSON in {}: {e}", path.display())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn rejects_a_file_that_does_not_exist() {
        let result: Result<fighter_config::FighterConfigFile> =
            read_config(Path::new("/nonexistent/path/fighter.json"));
        assert!(result.is_err());
    }

    #[test]
    fn rejects_malformed_json() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, "{{ not valid json").unwrap();
        let result: Result<fighter_config::FighterConfigFile> = read_config(file.path());
        assert!(result.is_err());
    }
}
