//! Calibration constants for the combat resolver, centralized into one
//! named table separate from the functions that use them -- no magic
//! numbers inlined into resolver logic.

use serde::{Deserialize, Serialize};

/// All tunable coefficients the resolver, stamina, and scoring modules
/// read from. A single `Tunables::default()` ships with the crate;
/// `config::mod` lets a caller override it from a TOML/YAML file for
/// experimentation without touching resolver code.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tunables {
    pub base_hit_chance: f32,
    pub accuracy_weight: f32,
    pub defense_weight: f32,
    pub reach_advantage_per_cm: f32,

    pub jab_power_fraction: f32,
    pub hook_power_fraction: f32,
    pub cross_power_fraction: f32,
    pub uppercut_power_fraction: f32,
    pub power_shot_power_fraction: f32,
    pub knockout_crit_chance: f32,
    pub knockout_crit_multiplier: f32,

    /// Multiplicative damage bonus for a punch landed while the defender
    /// was also committed to throwing this tick -- traded punches favor
    /// whoever's shot lands sharper.
    pub counter_punch_bonus: f32,
    /// Extra bonus stacked on top of `counter_punch_bonus` for a
    /// `CounterPuncher`-style attacker specifically.
    pub counter_puncher_style_bonus: f32,

    pub stamina_drain_per_punch_thrown: f32,
    pub stamina_drain_per_punch_landed_extra: f32,
    pub stamina_regen_per_tick_resting: f32,
    pub gassed_threshold: f32,
    /// Power multiplier applied to a gassed attacker's punches, on top of
    /// the accuracy penalty `hit_chance` already applies.
    pub gassed_power_multiplier: f32,

    pub head_damage_knockdown_threshold: f32,
    pub body_damage_knockdown_threshold: f32,
    pub knockdown_chance_per_power_point: f32,
    /// How much a defender's chin + heart, averaged, cut the knockdown
    /// roll computed in `resolver::check_knockdown`.
    pub chin_heart_knockdown_resistance: f32,
    /// Added to the knockdown roll when the defender is already Hurt or
    /// Stunned -- a shaken fighter goes down easier.
    pub shaken_knockdown_bonus: f32,

    pub foul_base_chance_per_tick: f32,
    pub foul_warning_threshold: u8,
    pub foul_dq_threshold: u8,
    pub flagrant_foul_chance: f32,

    pub position_closing_speed: f32,
    pub position_retreat_speed: f32,

    /// Cumulative (head + body) damage, normalized to [0,2], above which a
    /// fighter is a candidate for the `exhaustion_and_damage` TKO reason if
    /// stamina is also below `exhaustion_stamina_threshold`.
    pub exhaustion_damage_threshold: f32,
    pub exhaustion_stamina_threshold: f32,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            base_hit_chance: 0.35,
            accuracy_weight: 0.006,
            defense_weight: 0.005,
            reach_advantage_per_cm: 0.002,

            jab_power_fraction: 0.35,
            hook_power_fraction: 0.85,
            cross_power_fraction: 1.0,
            uppercut_power_fraction: 1.15,
            power_shot_power_fraction: 1.0,
            knockout_crit_chance: 0.04,
            knockout_crit_multiplier: 2.2,

            counter_punch_bonus: 0.18,
            counter_puncher_style_bonus: 0.12,

            stamina_drain_per_punch_thrown: 0.004,
            stamina_drain_per_punch_landed_extra: 0.002,
            stamina_regen_per_tick_resting: 0.006,
            gassed_threshold: 0.25,
            gassed_power_multiplier: 0.85,

            head_damage_knockdown_threshold: 0.55,
            body_damage_knockdown_threshold: 0.65,
            knockdown_chance_per_power_point: 0.0015,
            chin_heart_knockdown_resistance: 0.12,
            shaken_knockdown_bonus: 0.08,

            foul_base_chance_per_tick: 0.0008,
            foul_warning_threshold: 2,
            foul_dq_threshold: 3,
            flagrant_foul_chance: 0.02,

            position_closing_speed: 0.6,
            position_retreat_speed: 0.8,

            exhaustion_damage_threshold: 1.3,
            exhaustion_stamina_threshold: 0.12,
        }
    }
}
