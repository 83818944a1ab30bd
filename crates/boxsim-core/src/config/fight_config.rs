//! On-disk fight configuration: `{rounds, type, simulation, rules}`.
//! Builds a `models::fight::FightConfig` the combat engine can
//! run directly; does not carry the fighters themselves -- direct-fight
//! mode loads those separately via `FighterConfigFile` and pairs them
//! with whatever `FightConfigFile` resolves to.

use serde::{Deserialize, Serialize};

use crate::error::{BoxsimError, Result};
use crate::models::fight::FightConfig;

/// `type ∈ {title, main-event, undercard, championship}`.
/// `Championship` and `Title` both map to `is_title_fight = true`; the
/// distinction exists in the config format for vocabulary only, since
/// the combat engine doesn't otherwise treat them differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FightType {
    Title,
    MainEvent,
    Undercard,
    Championship,
}

impl FightType {
    fn is_title_fight(self) -> bool {
        matches!(self, FightType::Title | FightType::Championship)
    }
}

fn default_round_duration_seconds() -> f32 {
    180.0
}

fn default_tick_rate() -> f32 {
    0.5
}

fn default_speed_multiplier() -> f32 {
    1.0
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SimulationConfig {
    #[serde(default = "default_tick_rate")]
    pub tick_rate: f32,
    #[serde(default = "default_speed_multiplier")]
    pub speed_multiplier: f32,
    #[serde(default)]
    pub real_time: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_rate: default_tick_rate(),
            speed_multiplier: default_speed_multiplier(),
            real_time: false,
        }
    }
}

/// Per-round and per-fight stoppage thresholds a caller can override from
/// disk; anything left unset falls back to `Tunables::default()` at the
/// specific field the engine reads. Only the stoppage thresholds are
/// exposed here -- the rest of `Tunables` stays an in-process calibration
/// concern, not a fight-config surface.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RulesConfig {
    #[serde(default)]
    pub round_duration_seconds: Option<f32>,
    #[serde(default)]
    pub max_knockdowns_per_round: Option<u8>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FightConfigFile {
    pub rounds: u8,
    #[serde(rename = "type")]
    pub fight_type: FightType,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub rules: RulesConfig,
}

impl FightConfigFile {
    pub fn load(path: &std::path::Path) -> Result<FightConfigFile> {
        super::read_config(path)
    }

    /// Resolve to the engine-facing `FightConfig`. `seed` defaults to 0
    /// (deterministic but not randomized) if the config doesn't pin one;
    /// the CLI overrides this per-invocation for batch runs.
    pub fn to_fight_config(&self, seed_override: Option<u64>) -> Result<FightConfig> {
        if self.rounds == 0 || self.rounds > 15 {
            return Err(BoxsimError::Config(format!(
                "rounds {} out of plausible range [1,15]",
                self.rounds
            )));
        }
        if self.simulation.tick_rate <= 0.0 {
            return Err(BoxsimError::Config("simulation.tick_rate must be positive".into()));
        }

        let round_duration =
            self.rules.round_duration_seconds.unwrap_or_else(default_round_duration_seconds);
        let ticks_per_round = (round_duration / self.simulation.tick_rate).round() as u32;

        Ok(FightConfig {
            scheduled_rounds: self.rounds,
            seed: seed_override.or(self.seed).unwrap_or(0),
            ticks_per_round: ticks_per_round.max(1),
            is_title_fight: self.fight_type.is_title_fight(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "rounds": 12,
            "type": "title",
            "simulation": {"tick_rate": 0.5, "speed_multiplier": 2.0, "real_time": false}
        }"#
    }

    #[test]
    fn loads_and_resolves_tick_count() {
        let config: FightConfigFile = serde_json::from_str(sample_json()).unwrap();
        let resolved = config.to_fight_config(Some(42)).unwrap();
        assert_eq!(resolved.scheduled_rounds, 12);
        assert_eq!(resolved.ticks_per_round, 360);
        assert!(resolved.is_title_fight);
        assert_eq!(resolved.seed, 42);
    }

    #[test]
    fn undercard_is_not_a_title_fight() {
        let config = FightConfigFile {
            rounds: 8,
            fight_type: FightType::Undercard,
            seed: None,
            simulation: SimulationConfig::default(),
            rules: RulesConfig::default(),
        };
        assert!(!config.to_fight_config(None).unwrap().is_title_fight);
    }

    #[test]
    fn rejects_zero_rounds() {
        let config = FightConfigFile {
            rounds: 0,
            fight_type: FightType::Undercard,
            seed: None,
            simulation: SimulationConfig::default(),
            rules: RulesConfig::default(),
        };
        assert!(config.to_fight_config(None).is_err());
    }

    #[test]
    fn rejects_nonpositive_tick_rate() {
        let config = FightConfigFile {
            rounds: 10,
            fight_type: FightType::MainEvent,
            seed: None,
            simulation: SimulationConfig { tick_rate: 0.0, ..SimulationConfig::default() },
            rules: RulesConfig::default(),
        };
        assert!(config.to_fight_config(None).is_err());
    }
}
