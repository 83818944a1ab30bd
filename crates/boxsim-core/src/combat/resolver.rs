//! L2 combat resolver: given both fighters' intents for a tick, decides
//! hit/miss, applies damage and stamina cost, checks for knockdown, and
//! emits the corresponding events.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::models::events::{Corner, FightEventKind, PunchType, SimTime};
use crate::models::fight_state::{CombatState, FighterState};
use crate::models::fighter::{Fighter, PrimaryStyle};

use super::damage;
use super::stamina;
use super::tunables::Tunables;

/// Outcome of resolving one fighter's thrown punch this tick, as events
/// ready to push onto the sink (time is stamped by the caller, which
/// knows the round/tick).
pub enum PunchOutcome {
    Missed,
    Landed { damage_dealt: f32, was_crit: bool },
}

/// Result of applying a landed punch's damage and rolling the knockdown
/// check, before the engine has decided whether this defender actually
/// goes down this tick (see `commit_landed_state`).
pub struct LandedEffect {
    pub would_knock_down: bool,
}

fn hit_chance(
    attacker: &Fighter,
    attacker_state: &FighterState,
    defender: &Fighter,
    punch: PunchType,
    tunables: &Tunables,
) -> f32 {
    let accuracy = attacker.technical.accuracy as f32;
    let defense = if punch.is_head() {
        defender.defense.head_movement as f32
    } else {
        defender.defense.blocking as f32
    };
    let reach_delta = attacker.reach_cm as f32 - defender.reach_cm as f32;
    let base = tunables.base_hit_chance
        + accuracy * tunables.accuracy_weight
        - defense * tunables.defense_weight
        + reach_delta * tunables.reach_advantage_per_cm;

    let speed_factor = if punch.is_power() {
        (attacker.speed.hand as f32 + attacker.speed.reflexes as f32) / 200.0
    } else {
        attacker.speed.hand as f32 / 100.0
    };

    let gassed_penalty = if stamina::is_gassed(attacker_state, tunables) { 0.85 } else { 1.0 };

    (base * (0.7 + speed_factor * 0.5) * gassed_penalty).clamp(0.05, 0.92)
}

/// Resolve a single thrown punch. Caller is responsible for applying
/// `apply_throw_cost` separately (stamina drains whether the punch lands
/// or not). `is_counter` marks a punch landed while the defender was
/// also committed to throwing this tick -- a trade, not a clean
/// unanswered shot -- which lands harder, more so for a `CounterPuncher`.
pub fn resolve_punch(
    attacker: &Fighter,
    attacker_state: &FighterState,
    defender: &Fighter,
    punch: PunchType,
    is_counter: bool,
    tunables: &Tunables,
    rng: &mut ChaCha8Rng,
) -> PunchOutcome {
    let chance = hit_chance(attacker, attacker_state, defender, punch, tunables);
    if !rng.gen_bool(chance as f64) {
        return PunchOutcome::Missed;
    }

    let raw = damage::base_damage_fraction(attacker, attacker_state, punch, tunables);
    let crit_roll: f32 = rng.gen_range(0.0..1.0);
    let is_crit = matches!(punch, PunchType::Hook | PunchType::Cross | PunchType::Uppercut)
        && damage::is_knockout_crit(attacker, crit_roll, tunables);
    let raw = if is_crit { damage::apply_crit(raw, tunables) } else { raw };

    let mitigated = if punch.is_head() {
        damage::mitigated_head_damage(raw, defender)
    } else {
        damage::mitigated_body_damage(raw, defender)
    };

    let mitigated = if is_counter {
        let style_bonus = if matches!(attacker.style.primary, PrimaryStyle::CounterPuncher) {
            tunables.counter_puncher_style_bonus
        } else {
            0.0
        };
        mitigated * (1.0 + tunables.counter_punch_bonus + style_bonus)
    } else {
        mitigated
    };

    PunchOutcome::Landed { damage_dealt: mitigated, was_crit: is_crit }
}

/// Whether a landed shot triggers a knockdown this tick: probability
/// rises with cumulative damage past the relevant threshold, the
/// attacker's knockout power, and whether the defender is already Hurt
/// or Stunned, and falls with the defender's chin and heart.
pub fn check_knockdown(
    defender: &Fighter,
    defender_state: &FighterState,
    punch: PunchType,
    attacker_power_knockout: u8,
    tunables: &Tunables,
    rng: &mut ChaCha8Rng,
) -> bool {
    let (damage_frac, threshold) = if punch.is_head() {
        (defender_state.head_percent(), tunables.head_damage_knockdown_threshold)
    } else {
        (defender_state.body_percent(), tunables.body_damage_knockdown_threshold)
    };
    if damage_frac < threshold {
        return false;
    }
    let over = damage_frac - threshold;
    let chin_heart_resistance = (defender.mental.chin as f32 + defender.mental.heart as f32)
        / 200.0
        * tunables.chin_heart_knockdown_resistance;
    let shaken_bonus = if matches!(defender_state.state, CombatState::Hurt | CombatState::Stunned) {
        tunables.shaken_knockdown_bonus
    } else {
        0.0
    };

    let chance = (over * 4.0
        + attacker_power_knockout as f32 * tunables.knockdown_chance_per_power_point
        + shaken_bonus
        - chin_heart_resistance)
        .clamp(0.0, 0.9);
    rng.gen_bool(chance as f64)
}

/// Apply a landed punch's damage and stamina cost to the defender and
/// roll the knockdown check, without yet committing the resulting
/// combat-state transition -- the engine arbitrates same-tick
/// double-knockdowns before calling `commit_landed_state`.
pub fn apply_landed_damage(
    defender: &Fighter,
    defender_state: &mut FighterState,
    punch: PunchType,
    damage_dealt: f32,
    attacker_power_knockout: u8,
    tunables: &Tunables,
    rng: &mut ChaCha8Rng,
) -> LandedEffect {
    if punch.is_head() {
        defender_state.apply_head_damage(damage_dealt);
    } else {
        defender_state.apply_body_damage(damage_dealt);
    }
    stamina::apply_landed_extra_cost(defender_state, tunables);

    let would_knock_down =
        check_knockdown(defender, defender_state, punch, attacker_power_knockout, tunables, rng);
    LandedEffect { would_knock_down }
}

/// Commit the Hurt/Down transition for a landed punch once the engine has
/// decided (via `would_knock_down` and, for a same-tick conflict, its own
/// tie-break) whether this defender actually goes down this tick.
pub fn commit_landed_state(
    defender_state: &mut FighterState,
    corner: Corner,
    damage_dealt: f32,
    goes_down: bool,
) -> Vec<FightEventKind> {
    if goes_down {
        defender_state.knockdowns_this_round += 1;
        defender_state.knockdowns_total += 1;
        defender_state.state = CombatState::Down;
        defender_state.count = Some(0);
        vec![FightEventKind::Knockdown { corner, count_reached: 0 }]
    } else if damage_dealt > 0.02 {
        defender_state.state = CombatState::Hurt;
        vec![FightEventKind::Hurt { corner }]
    } else {
        Vec::new()
    }
}

pub fn stamp(events: Vec<FightEventKind>, time: SimTime) -> Vec<crate::models::events::FightEvent> {
    events.into_iter().map(|kind| crate::models::events::FightEvent::new(time, kind)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fighter::generator::generate_fighter;
    use crate::models::fight_state::Position;
    use rand::SeedableRng;

    #[test]
    fn high_accuracy_beats_low_defense_often() {
        let mut attacker = generate_fighter(1, 60);
        attacker.technical.accuracy = 95;
        let mut defender = generate_fighter(2, 60);
        defender.defense.head_movement = 5;
        let tunables = Tunables::default();
        let chance = hit_chance(&attacker, &FighterState::fresh(Position::origin()), &defender, PunchType::Jab, &tunables);
        assert!(chance > 0.5);
    }

    #[test]
    fn resolver_is_deterministic_given_seed() {
        let attacker = generate_fighter(1, 70);
        let defender = generate_fighter(2, 70);
        let tunables = Tunables::default();
        let attacker_state = FighterState::fresh(Position::origin());

        let mut rng_a = ChaCha8Rng::seed_from_u64(5);
        let mut rng_b = ChaCha8Rng::seed_from_u64(5);
        let outcome_a = resolve_punch(&attacker, &attacker_state, &defender, PunchType::Cross, false, &tunables, &mut rng_a);
        let outcome_b = resolve_punch(&attacker, &attacker_state, &defender, PunchType::Cross, false, &tunables, &mut rng_b);
        match (outcome_a, outcome_b) {
            (PunchOutcome::Missed, PunchOutcome::Missed) => {}
            (
                PunchOutcome::Landed { damage_dealt: a, was_crit: ca },
                PunchOutcome::Landed { damage_dealt: b, was_crit: cb },
            ) => {
                assert_eq!(a, b);
                assert_eq!(ca, cb);
            }
            _ => panic!("outcomes diverged for identical seeds"),
        }
    }

    #[test]
    fn heavy_head_damage_can_trigger_knockdown() {
        let tunables = Tunables::default();
        let defender = generate_fighter(2, 60);
        let mut state = FighterState::fresh(Position::origin());
        state.head_damage = 0.9;
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut knocked_down = false;
        for _ in 0..200 {
            if check_knockdown(&defender, &state, PunchType::Cross, 90, &tunables, &mut rng) {
                knocked_down = true;
                break;
            }
        }
        assert!(knocked_down);
    }

    #[test]
    fn high_chin_and_heart_resist_knockdowns_more_than_low() {
        let tunables = Tunables::default();
        let mut state = FighterState::fresh(Position::origin());
        state.head_damage = 0.9;

        let mut tough = generate_fighter(3, 60);
        tough.mental.chin = 100;
        tough.mental.heart = 100;
        let mut fragile = generate_fighter(4, 60);
        fragile.mental.chin = 1;
        fragile.mental.heart = 1;

        let knockdown_rate = |fighter: &Fighter| {
            let mut rng = ChaCha8Rng::seed_from_u64(42);
            (0..200)
                .filter(|_| check_knockdown(fighter, &state, PunchType::Cross, 60, &tunables, &mut rng))
                .count()
        };

        assert!(knockdown_rate(&tough) <= knockdown_rate(&fragile));
    }

    #[test]
    fn an_already_shaken_defender_goes_down_more_easily() {
        let tunables = Tunables::default();
        let defender = generate_fighter(5, 60);
        let mut neutral = FighterState::fresh(Position::origin());
        neutral.head_damage = 0.58;
        let mut hurt = neutral.clone();
        hurt.state = CombatState::Hurt;

        let rate = |state: &FighterState| {
            let mut rng = ChaCha8Rng::seed_from_u64(9);
            (0..200)
                .filter(|_| check_knockdown(&defender, state, PunchType::Cross, 50, &tunables, &mut rng))
                .count()
        };

        assert!(rate(&hurt) >= rate(&neutral));
    }
}
