//! On-disk fighter configuration: the enumerated groups
//! `identity, physical, style, power, speed, stamina, defense, offense,
//! technical, mental, tactics, record`, deserialized directly into a
//! `Fighter` builder rather than the procedural generator's RNG path --
//! this is how direct-fight mode and the universe's external roster
//! import build a `Fighter` without going through `fighter::generator`.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{BoxsimError, Result};
use crate::fighter::validation::validate_fighter;
use crate::models::fighter::{
    DefenseAttributes, DefensiveSubStyle, Fighter, FighterCareerStats, MentalAttributes,
    OffensiveSubStyle, PowerAttributes, PrimaryStyle, SpeedAttributes, Stance, StaminaAttributes,
    Style, TechnicalAttributes,
};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IdentityConfig {
    pub name: String,
    #[serde(default)]
    pub nickname: Option<String>,
}

/// Either an exact birth date or a whole-years age; a loader only needs
/// one. The config format accepts whichever is more convenient for the
/// caller, and `PhysicalConfig::date_of_birth` resolves it once.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PhysicalConfig {
    pub stance: Stance,
    pub height_cm: u16,
    pub weight_kg: u16,
    pub reach_cm: u16,
    #[serde(default)]
    pub date_of_birth: Option<DateTime<Utc>>,
    #[serde(default)]
    pub age_years: Option<u32>,
}

impl PhysicalConfig {
    fn resolved_date_of_birth(&self) -> Result<DateTime<Utc>> {
        match (self.date_of_birth, self.age_years) {
            (Some(dob), _) => Ok(dob),
            (None, Some(age)) => Ok(Utc::now() - Duration::days(age as i64 * 365)),
            (None, None) => {
                Err(BoxsimError::Config("physical: one of date_of_birth or age_years is required".into()))
            }
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StyleConfig {
    pub primary: PrimaryStyle,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OffenseConfig {
    pub sub_style: OffensiveSubStyle,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TacticsConfig {
    pub defensive_sub_style: DefensiveSubStyle,
}

/// Initial career record a config can seed a fighter with -- used by
/// direct-fight mode to load an established contender rather than always
/// starting 0-0, and by config-driven universe imports.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RecordConfig {
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(default)]
    pub draws: u32,
    #[serde(default)]
    pub wins_by_ko: u32,
    #[serde(default)]
    pub wins_by_tko: u32,
}

/// On-disk fighter schema, grouped into named sections. Each group is its
/// own struct so `FighterConfigFile` reads as a table of contents rather
/// than one flat bag of fields.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FighterConfigFile {
    pub identity: IdentityConfig,
    pub physical: PhysicalConfig,
    pub style: StyleConfig,
    pub power: PowerAttributes,
    pub speed: SpeedAttributes,
    pub stamina: StaminaAttributes,
    pub defense: DefenseAttributes,
    pub offense: OffenseConfig,
    pub technical: TechnicalAttributes,
    pub mental: MentalAttributes,
    pub tactics: TacticsConfig,
    #[serde(default)]
    pub record: RecordConfig,
}

impl FighterConfigFile {
    /// Load and validate a fighter config from disk. Surfaces
    /// `BoxsimError::Config` on any schema or range violation; never
    /// returns a partially-built `Fighter`.
    pub fn load(path: &std::path::Path) -> Result<Fighter> {
        let config: FighterConfigFile = super::read_config(path)?;
        config.into_fighter()
    }

    pub fn into_fighter(self) -> Result<Fighter> {
        let now = Utc::now();
        let date_of_birth = self.physical.resolved_date_of_birth()?;

        let fighter = Fighter {
            id: uuid::Uuid::new_v4().to_string(),
            name: self.identity.name,
            nickname: self.identity.nickname,
            stance: self.physical.stance,
            height_cm: self.physical.height_cm,
            weight_kg: self.physical.weight_kg,
            reach_cm: self.physical.reach_cm,
            date_of_birth,
            power: self.power,
            speed: self.speed,
            stamina: self.stamina,
            defense: self.defense,
            mental: self.mental,
            technical: self.technical,
            style: Style {
                primary: self.style.primary,
                defensive: self.tactics.defensive_sub_style,
                offensive: self.offense.sub_style,
            },
            career_stats: FighterCareerStats {
                wins: self.record.wins,
                losses: self.record.losses,
                draws: self.record.draws,
                wins_by_ko: self.record.wins_by_ko,
                wins_by_tko: self.record.wins_by_tko,
                ..Default::default()
            },
            fight_history: Vec::new(),
            retired: false,
            retired_at_week: None,
            retired_at_year: None,
            created_at: now,
            updated_at: now,
        };

        let issues = validate_fighter(&fighter);
        if !issues.is_empty() {
            let message = issues
                .into_iter()
                .map(|issue| format!("{}: {}", issue.field, issue.message))
                .collect::<Vec<_>>()
                .join("; ");
            return Err(BoxsimError::Config(message));
        }

        Ok(fighter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sample_json() -> &'static str {
        r#"{
            "identity": {"name": "Marcus Castellano", "nickname": "The Hammer"},
            "physical": {"stance": "orthodox", "height_cm": 183, "weight_kg": 86, "reach_cm": 188, "age_years": 27},
            "style": {"primary": "boxer-puncher"},
            "power": {"left": 70, "right": 78, "knockout": 75},
            "speed": {"hand": 60, "foot": 55, "reflexes": 62},
            "stamina": {"cardio": 72, "recovery": 68},
            "defense": {"head_movement": 58, "blocking": 64},
            "offense": {"sub_style": "combination"},
            "technical": {"accuracy": 66, "fight_iq": 60, "ring_generalship": 58},
            "mental": {"chin": 74, "heart": 80, "killer_instinct": 65},
            "tactics": {"defensive_sub_style": "high-guard"}
        }"#
    }

    #[test]
    fn loads_a_well_formed_config() {
        let config: FighterConfigFile = serde_json::from_str(sample_json()).unwrap();
        let fighter = config.into_fighter().unwrap();
        assert_eq!(fighter.name, "Marcus Castellano");
        assert_eq!(fighter.style.primary, PrimaryStyle::BoxerPuncher);
    }

    #[test]
    fn rejects_out_of_range_attribute() {
        let mut config: FighterConfigFile = serde_json::from_str(sample_json()).unwrap();
        config.power.left = 0;
        assert!(config.into_fighter().is_err());
    }

    #[test]
    fn rejects_missing_birth_date_and_age() {
        let mut config: FighterConfigFile = serde_json::from_str(sample_json()).unwrap();
        config.physical.age_years = None;
        config.physical.date_of_birth = None;
        assert!(config.into_fighter().is_err());
    }

    #[test]
    fn load_reads_from_a_file_on_disk() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, "{}", sample_json()).unwrap();
        let fighter = FighterConfigFile::load(file.path()).unwrap();
        assert_eq!(fighter.name, "Marcus Castellano");
    }
}
