//! Static fighter identity and attributes (L0).
//!
//! `Fighter` holds everything about a boxer that does not change over the
//! course of a single bout: identity, physical measurements, and the six
//! attribute groups. In-bout mutable state lives separately in
//! [`crate::models::fight_state::FighterState`] so a `Fighter` can be shared
//! (by value, never by live reference -- see `models::replay`) across many
//! fights without entangling career data with tick-by-tick combat state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::history::FightHistoryEntry;

/// Handedness / stance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stance {
    Orthodox,
    Southpaw,
}

/// Primary fighting style. Sub-styles further color a controller's rule
/// weighting (see `combat::controller`) but the primary style is what
/// selects the base probability table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PrimaryStyle {
    OutBoxer,
    Swarmer,
    Slugger,
    BoxerPuncher,
    CounterPuncher,
    InsideFighter,
    VolumePuncher,
    SwitchHitter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DefensiveSubStyle {
    HighGuard,
    PhilShelter,
    Evasive,
    Clinchy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OffensiveSubStyle {
    BodySnatcher,
    HeadHunter,
    Combination,
    SingleShot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style {
    pub primary: PrimaryStyle,
    pub defensive: DefensiveSubStyle,
    pub offensive: OffensiveSubStyle,
}

/// Power attribute group. All fields `1..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerAttributes {
    pub left: u8,
    pub right: u8,
    pub knockout: u8,
}

/// Speed attribute group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeedAttributes {
    pub hand: u8,
    pub foot: u8,
    pub reflexes: u8,
}

/// Stamina attribute group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaminaAttributes {
    pub cardio: u8,
    pub recovery: u8,
}

/// Defense attribute group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefenseAttributes {
    pub head_movement: u8,
    pub blocking: u8,
}

/// Mental attribute group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentalAttributes {
    pub chin: u8,
    pub heart: u8,
    pub killer_instinct: u8,
}

/// Technical attribute group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechnicalAttributes {
    pub accuracy: u8,
    pub fight_iq: u8,
    pub ring_generalship: u8,
}

impl PowerAttributes {
    pub fn validate(&self) -> Result<(), String> {
        validate_range("power", &[
            ("left", self.left),
            ("right", self.right),
            ("knockout", self.knockout),
        ])
    }
}

impl SpeedAttributes {
    pub fn validate(&self) -> Result<(), String> {
        validate_range("speed", &[
            ("hand", self.hand),
            ("foot", self.foot),
            ("reflexes", self.reflexes),
        ])
    }
}

impl StaminaAttributes {
    pub fn validate(&self) -> Result<(), String> {
        validate_range("stamina", &[("cardio", self.cardio), ("recovery", self.recovery)])
    }
}

impl DefenseAttributes {
    pub fn validate(&self) -> Result<(), String> {
        validate_range("defense", &[
            ("head_movement", self.head_movement),
            ("blocking", self.blocking),
        ])
    }
}

impl MentalAttributes {
    pub fn validate(&self) -> Result<(), String> {
        validate_range("mental", &[
            ("chin", self.chin),
            ("heart", self.heart),
            ("killer_instinct", self.killer_instinct),
        ])
    }
}

impl TechnicalAttributes {
    pub fn validate(&self) -> Result<(), String> {
        validate_range("technical", &[
            ("accuracy", self.accuracy),
            ("fight_iq", self.fight_iq),
            ("ring_generalship", self.ring_generalship),
        ])
    }
}

fn validate_range(group: &str, fields: &[(&str, u8)]) -> Result<(), String> {
    for (name, value) in fields {
        if !(1..=100).contains(value) {
            return Err(format!("{group}.{name} = {value} is out of range [1,100]"));
        }
    }
    Ok(())
}

/// Career record tallied across all of a fighter's bouts. Distinct from
/// per-fight stats (which live on `FighterState` during a bout and get
/// folded in here once the fight ends).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FighterCareerStats {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub no_contests: u32,
    pub wins_by_ko: u32,
    pub wins_by_tko: u32,
    pub losses_by_ko: u32,
    pub losses_by_tko: u32,
    pub title_reigns: u32,
    pub notable_wins: u32,
    pub consecutive_losses: u32,
    pub consecutive_devastating_losses: u32,
    /// Last in-universe week this fighter fought, used by the matchmaker's
    /// freshness tie-break and title-gap eligibility.
    #[serde(default)]
    pub last_fight_week: Option<u32>,
}

impl FighterCareerStats {
    pub fn total_fights(&self) -> u32 {
        self.wins + self.losses + self.draws + self.no_contests
    }

    pub fn win_pct(&self) -> f32 {
        let total = self.total_fights();
        if total == 0 {
            0.0
        } else {
            self.wins as f32 / total as f32
        }
    }
}

/// The static identity and skills of a single fighter.
///
/// MIGRATION NOTE: fields added after the first persisted schema version
/// use `#[serde(default)]` so older universe saves still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fighter {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub nickname: Option<String>,
    pub stance: Stance,
    pub height_cm: u16,
    pub weight_kg: u16,
    pub reach_cm: u16,
    pub date_of_birth: DateTime<Utc>,

    pub power: PowerAttributes,
    pub speed: SpeedAttributes,
    pub stamina: StaminaAttributes,
    pub defense: DefenseAttributes,
    pub mental: MentalAttributes,
    pub technical: TechnicalAttributes,
    pub style: Style,

    #[serde(default)]
    pub career_stats: FighterCareerStats,
    #[serde(default)]
    pub fight_history: Vec<FightHistoryEntry>,
    #[serde(default)]
    pub retired: bool,
    #[serde(default)]
    pub retired_at_week: Option<u32>,
    #[serde(default)]
    pub retired_at_year: Option<u32>,

    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl fmt::Display for Fighter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.nickname {
            Some(nick) => write!(f, "{} \"{}\"", self.name, nick),
            None => write!(f, "{}", self.name),
        }
    }
}

impl Fighter {
    /// Update the modification timestamp. Call after any attribute or
    /// career-stat mutation, mirroring `CorePlayer::touch`.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn age_years(&self, at: DateTime<Utc>) -> f32 {
        let days = (at - self.date_of_birth).num_days() as f32;
        days / 365.25
    }

    /// Append one completed bout to this fighter's record, capped at a
    /// generous retained window so a two-decade career doesn't grow the
    /// save file unboundedly; oldest entries drop first.
    pub fn record_fight(&mut self, entry: FightHistoryEntry) {
        const MAX_RETAINED: usize = 150;
        self.fight_history.push(entry);
        if self.fight_history.len() > MAX_RETAINED {
            self.fight_history.remove(0);
        }
        self.touch();
    }

    /// Validate every attribute group is in range. Used by the config
    /// loader before a `Fighter` is ever constructed from disk.
    pub fn validate_attributes(&self) -> Result<(), String> {
        self.power.validate()?;
        self.speed.validate()?;
        self.stamina.validate()?;
        self.defense.validate()?;
        self.mental.validate()?;
        self.technical.validate()?;
        if !(150..=220).contains(&self.height_cm) {
            return Err(format!("height_cm {} out of range [150,220]", self.height_cm));
        }
        if !(45..=150).contains(&self.weight_kg) {
            return Err(format!("weight_kg {} out of range [45,150]", self.weight_kg));
        }
        if self.name.trim().is_empty() {
            return Err("name is required".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_fighter() -> Fighter {
        let now = Utc::now();
        Fighter {
            id: "f1".into(),
            name: "Test Fighter".into(),
            nickname: None,
            stance: Stance::Orthodox,
            height_cm: 180,
            weight_kg: 80,
            reach_cm: 185,
            date_of_birth: now - chrono::Duration::days(365 * 25),
            power: PowerAttributes { left: 70, right: 75, knockout: 72 },
            speed: SpeedAttributes { hand: 60, foot: 55, reflexes: 65 },
            stamina: StaminaAttributes { cardio: 80, recovery: 70 },
            defense: DefenseAttributes { head_movement: 60, blocking: 65 },
            mental: MentalAttributes { chin: 75, heart: 80, killer_instinct: 60 },
            technical: TechnicalAttributes { accuracy: 70, fight_iq: 65, ring_generalship: 60 },
            style: Style {
                primary: PrimaryStyle::BoxerPuncher,
                defensive: DefensiveSubStyle::HighGuard,
                offensive: OffensiveSubStyle::Combination,
            },
            career_stats: FighterCareerStats::default(),
            fight_history: Vec::new(),
            retired: false,
            retired_at_week: None,
            retired_at_year: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn validates_in_range_attributes() {
        assert!(sample_fighter().validate_attributes().is_ok());
    }

    #[test]
    fn rejects_out_of_range_power() {
        let mut fighter = sample_fighter();
        fighter.power.left = 0;
        assert!(fighter.validate_attributes().is_err());
    }

    #[test]
    fn rejects_out_of_range_weight() {
        let mut fighter = sample_fighter();
        fighter.weight_kg = 200;
        assert!(fighter.validate_attributes().is_err());
    }

    #[test]
    fn win_pct_handles_no_fights() {
        assert_eq!(FighterCareerStats::default().win_pct(), 0.0);
    }
}
