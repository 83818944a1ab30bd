//! Mutable in-fight fighter state (L0 mutable half) plus the `Effect`
//! enumeration: effects are a closed enumeration with a pure metadata
//! registry, not ad-hoc string tables.

use serde::{Deserialize, Serialize};

/// A fighter's coarse combat state within a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatState {
    Neutral,
    Hurt,
    Stunned,
    Down,
    Recovering,
}

/// 2-D bounded ring position, `x, y` in `[-10, 10]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const BOUND: f32 = 10.0;

    pub fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    pub fn clamp_to_arena(mut self) -> Self {
        self.x = self.x.clamp(-Self::BOUND, Self::BOUND);
        self.y = self.y.clamp(-Self::BOUND, Self::BOUND);
        self
    }

    pub fn distance(&self, other: &Position) -> f32 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// The kind of a buff/debuff. Closed enumeration -- no free-form string
/// tags. Display strings belong to a commentary/presentation layer, never
/// to this core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectKind {
    Momentum,
    Gassed,
    HurtHands,
    Staggered,
    Flash,
    SecondWind,
    CutBleeding,
    SwollenEye,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StackingPolicy {
    Replace,
    Refresh,
    Additive,
}

/// Pure metadata about an effect kind, independent of any particular
/// instance. Returned by `EffectKind::metadata`; the registry itself holds
/// no mutable state.
#[derive(Debug, Clone, Copy)]
pub struct EffectMetadata {
    pub default_duration_ticks: u32,
    pub stacking: StackingPolicy,
    pub accuracy_multiplier: f32,
    pub power_multiplier: f32,
}

impl EffectKind {
    pub fn metadata(self) -> EffectMetadata {
        match self {
            EffectKind::Momentum => EffectMetadata {
                default_duration_ticks: 10,
                stacking: StackingPolicy::Refresh,
                accuracy_multiplier: 1.1,
                power_multiplier: 1.05,
            },
            EffectKind::Gassed => EffectMetadata {
                default_duration_ticks: 20,
                stacking: StackingPolicy::Refresh,
                accuracy_multiplier: 0.8,
                power_multiplier: 0.85,
            },
            EffectKind::HurtHands => EffectMetadata {
                default_duration_ticks: 60,
                stacking: StackingPolicy::Replace,
                accuracy_multiplier: 1.0,
                power_multiplier: 0.85,
            },
            EffectKind::Staggered => EffectMetadata {
                default_duration_ticks: 6,
                stacking: StackingPolicy::Refresh,
                accuracy_multiplier: 0.6,
                power_multiplier: 0.9,
            },
            EffectKind::Flash => EffectMetadata {
                default_duration_ticks: 3,
                stacking: StackingPolicy::Refresh,
                accuracy_multiplier: 0.5,
                power_multiplier: 0.8,
            },
            EffectKind::SecondWind => EffectMetadata {
                default_duration_ticks: 16,
                stacking: StackingPolicy::Replace,
                accuracy_multiplier: 1.05,
                power_multiplier: 1.0,
            },
            EffectKind::CutBleeding => EffectMetadata {
                default_duration_ticks: u32::MAX,
                stacking: StackingPolicy::Additive,
                accuracy_multiplier: 1.0,
                power_multiplier: 1.0,
            },
            EffectKind::SwollenEye => EffectMetadata {
                default_duration_ticks: u32::MAX,
                stacking: StackingPolicy::Additive,
                accuracy_multiplier: 0.95,
                power_multiplier: 1.0,
            },
        }
    }
}

/// A live instance of an effect on a fighter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Effect {
    pub kind: EffectKind,
    pub magnitude: f32,
    pub remaining_ticks: u32,
}

impl Effect {
    pub fn new(kind: EffectKind, magnitude: f32) -> Self {
        Self { kind, magnitude, remaining_ticks: kind.metadata().default_duration_ticks }
    }

    pub fn is_expired(&self) -> bool {
        self.remaining_ticks == 0
    }

    pub fn tick(&mut self) {
        self.remaining_ticks = self.remaining_ticks.saturating_sub(1);
    }
}

/// Per-punch-type/location shot counters: thrown/landed broken out by
/// jab/power, and separately by head/body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PunchStats {
    pub jabs_thrown: u32,
    pub jabs_landed: u32,
    pub power_thrown: u32,
    pub power_landed: u32,
    pub head_thrown: u32,
    pub head_landed: u32,
    pub body_thrown: u32,
    pub body_landed: u32,
}

impl PunchStats {
    pub fn total_thrown(&self) -> u32 {
        self.jabs_thrown + self.power_thrown
    }

    pub fn total_landed(&self) -> u32 {
        self.jabs_landed + self.power_landed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoulKind {
    LowBlow,
    RabbitPunch,
    Headbutt,
    Holding,
    HittingOnBreak,
}

/// Per-foul-kind warning/deduction tracking.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FoulRecord {
    pub warnings: u8,
    pub point_deductions: u8,
}

/// Mutable state for one fighter over the course of one bout. Reset fresh
/// at bout start; never persisted standalone (it lives inside
/// `combat::engine::BoutState` for the duration of a fight only).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FighterState {
    pub head_damage: f32,
    pub body_damage: f32,
    pub stamina_percent: f32,
    pub state: CombatState,
    pub position: Position,
    pub knockdowns_this_round: u8,
    pub knockdowns_total: u8,
    pub punch_stats: PunchStats,
    pub buffs: Vec<Effect>,
    pub debuffs: Vec<Effect>,
    pub foul_records: std::collections::BTreeMap<FoulKindKey, FoulRecord>,
    pub total_point_deductions: u8,
    /// Point deductions charged this round only, reset at round start.
    /// Scoring applies this against the round card; `total_point_deductions`
    /// remains the fight-long DQ ladder.
    pub point_deductions_this_round: u8,
    pub count: Option<u8>,
}

/// `FoulKind` isn't `Ord`, so give `BTreeMap` a small ordered key wrapper
/// rather than pull in a hashmap + nondeterministic iteration order,
/// which would jeopardize replay determinism if ever iterated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FoulKindKey(pub u8);

impl From<FoulKind> for FoulKindKey {
    fn from(kind: FoulKind) -> Self {
        FoulKindKey(match kind {
            FoulKind::LowBlow => 0,
            FoulKind::RabbitPunch => 1,
            FoulKind::Headbutt => 2,
            FoulKind::Holding => 3,
            FoulKind::HittingOnBreak => 4,
        })
    }
}

impl FighterState {
    pub fn fresh(position: Position) -> Self {
        Self {
            head_damage: 0.0,
            body_damage: 0.0,
            stamina_percent: 1.0,
            state: CombatState::Neutral,
            position,
            knockdowns_this_round: 0,
            knockdowns_total: 0,
            punch_stats: PunchStats::default(),
            buffs: Vec::new(),
            debuffs: Vec::new(),
            foul_records: std::collections::BTreeMap::new(),
            total_point_deductions: 0,
            point_deductions_this_round: 0,
            count: None,
        }
    }

    /// Monotonic accessor -- damage never decreases within a fight.
    pub fn head_percent(&self) -> f32 {
        self.head_damage.min(1.0)
    }

    pub fn body_percent(&self) -> f32 {
        self.body_damage.min(1.0)
    }

    pub fn is_down(&self) -> bool {
        matches!(self.state, CombatState::Down)
    }

    pub fn apply_head_damage(&mut self, amount: f32) {
        debug_assert!(amount >= 0.0, "damage deltas must be non-negative; damage is monotonic within a fight");
        self.head_damage += amount.max(0.0);
    }

    pub fn apply_body_damage(&mut self, amount: f32) {
        debug_assert!(amount >= 0.0, "damage deltas must be non-negative; damage is monotonic within a fight");
        self.body_damage += amount.max(0.0);
    }

    pub fn has_effect(&self, kind: EffectKind) -> bool {
        self.buffs.iter().chain(self.debuffs.iter()).any(|e| e.kind == kind)
    }

    pub fn add_effect(&mut self, effect: Effect, is_debuff: bool) {
        let bucket = if is_debuff { &mut self.debuffs } else { &mut self.buffs };
        let policy = effect.kind.metadata().stacking;
        if let Some(existing) = bucket.iter_mut().find(|e| e.kind == effect.kind) {
            match policy {
                StackingPolicy::Replace => *existing = effect,
                StackingPolicy::Refresh => {
                    existing.remaining_ticks = effect.kind.metadata().default_duration_ticks;
                }
                StackingPolicy::Additive => {
                    existing.magnitude += effect.magnitude;
                    existing.remaining_ticks = existing.remaining_ticks.max(effect.remaining_ticks);
                }
            }
        } else {
            bucket.push(effect);
        }
    }

    pub fn tick_effects(&mut self) {
        for bucket in [&mut self.buffs, &mut self.debuffs] {
            for effect in bucket.iter_mut() {
                effect.tick();
            }
            bucket.retain(|e| !e.is_expired());
        }
    }

    pub fn record_foul(&mut self, kind: FoulKind) -> &mut FoulRecord {
        self.foul_records.entry(kind.into()).or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn head_percent_is_clamped() {
        let mut state = FighterState::fresh(Position::origin());
        state.apply_head_damage(1.5);
        assert_eq!(state.head_percent(), 1.0);
    }

    #[test]
    fn damage_never_decreases() {
        let mut state = FighterState::fresh(Position::origin());
        state.apply_head_damage(0.2);
        let after_first = state.head_damage;
        state.apply_head_damage(0.1);
        assert!(state.head_damage >= after_first);
    }

    #[test]
    fn effect_refresh_resets_duration_without_duplicating() {
        let mut state = FighterState::fresh(Position::origin());
        state.add_effect(Effect::new(EffectKind::Gassed, 1.0), true);
        state.tick_effects();
        state.add_effect(Effect::new(EffectKind::Gassed, 1.0), true);
        assert_eq!(state.debuffs.len(), 1);
        assert_eq!(
            state.debuffs[0].remaining_ticks,
            EffectKind::Gassed.metadata().default_duration_ticks
        );
    }

    #[test]
    fn position_clamps_to_arena_bounds() {
        let pos = Position { x: 50.0, y: -50.0 }.clamp_to_arena();
        assert_eq!(pos.x, Position::BOUND);
        assert_eq!(pos.y, -Position::BOUND);
    }
}
