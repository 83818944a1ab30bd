//! Pure damage-computation functions (L1): small, independently testable
//! functions over attribute groups plus a `Tunables` table rather than a
//! method on some larger stateful struct.

use crate::models::events::PunchType;
use crate::models::fight_state::FighterState;
use crate::models::fighter::Fighter;

use super::stamina;
use super::tunables::Tunables;

/// Fraction of the target's remaining health a landed punch removes,
/// before crit/knockdown rolls. Head and body damage pools are tracked
/// separately so a head-damage-heavy fighter can still be stopped on a
/// body shot. A gassed attacker's power is reduced on top of the
/// accuracy penalty already applied in `resolver::hit_chance`.
pub fn base_damage_fraction(
    attacker: &Fighter,
    attacker_state: &FighterState,
    punch: PunchType,
    tunables: &Tunables,
) -> f32 {
    let best = attacker.power.left.max(attacker.power.right) as f32;
    let power = match punch {
        PunchType::Jab => {
            (attacker.power.left as f32 + attacker.power.right as f32) / 2.0
                * tunables.jab_power_fraction
        }
        PunchType::Hook => best * tunables.hook_power_fraction,
        PunchType::Cross => best * tunables.cross_power_fraction,
        PunchType::Uppercut => best * tunables.uppercut_power_fraction,
        PunchType::PowerBody => best * tunables.power_shot_power_fraction,
    };
    // Normalize 1..=100 power into a damage fraction on the order of a
    // few percent per landed shot so a 12-round fight takes many dozens
    // of clean connects to finish.
    let fraction = (power / 100.0) * 0.035;
    if stamina::is_gassed(attacker_state, tunables) {
        fraction * tunables.gassed_power_multiplier
    } else {
        fraction
    }
}

pub fn is_knockout_crit(attacker: &Fighter, rng_roll: f32, tunables: &Tunables) -> bool {
    let ko_factor = attacker.power.knockout as f32 / 100.0;
    rng_roll < tunables.knockout_crit_chance * ko_factor * 2.0
}

pub fn apply_crit(damage: f32, tunables: &Tunables) -> f32 {
    damage * tunables.knockout_crit_multiplier
}

/// Chin/heart mitigate incoming head damage; body shots are mitigated by
/// cardio alone.
pub fn mitigated_head_damage(raw: f32, defender: &Fighter) -> f32 {
    let mitigation = 1.0 - (defender.mental.chin as f32 / 100.0) * 0.3;
    raw * mitigation
}

pub fn mitigated_body_damage(raw: f32, defender: &Fighter) -> f32 {
    let mitigation = 1.0 - (defender.stamina.cardio as f32 / 100.0) * 0.2;
    raw * mitigation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fighter::generator::generate_fighter;

    #[test]
    fn power_shots_hit_harder_than_jabs() {
        let attacker = generate_fighter(1, 80);
        let state = crate::models::fight_state::FighterState::fresh(
            crate::models::fight_state::Position::origin(),
        );
        let tunables = Tunables::default();
        let jab = base_damage_fraction(&attacker, &state, PunchType::Jab, &tunables);
        let cross = base_damage_fraction(&attacker, &state, PunchType::Cross, &tunables);
        assert!(cross >= jab);
    }

    #[test]
    fn punch_power_ordering_climbs_jab_hook_cross_uppercut() {
        let attacker = generate_fighter(1, 80);
        let state = crate::models::fight_state::FighterState::fresh(
            crate::models::fight_state::Position::origin(),
        );
        let tunables = Tunables::default();
        let jab = base_damage_fraction(&attacker, &state, PunchType::Jab, &tunables);
        let hook = base_damage_fraction(&attacker, &state, PunchType::Hook, &tunables);
        let cross = base_damage_fraction(&attacker, &state, PunchType::Cross, &tunables);
        let uppercut = base_damage_fraction(&attacker, &state, PunchType::Uppercut, &tunables);
        assert!(jab < hook);
        assert!(hook < cross);
        assert!(cross < uppercut);
    }

    #[test]
    fn gassed_attacker_hits_softer() {
        let attacker = generate_fighter(1, 80);
        let tunables = Tunables::default();
        let fresh = crate::models::fight_state::FighterState::fresh(
            crate::models::fight_state::Position::origin(),
        );
        let mut gassed = fresh.clone();
        gassed.stamina_percent = 0.0;
        let fresh_damage = base_damage_fraction(&attacker, &fresh, PunchType::Cross, &tunables);
        let gassed_damage = base_damage_fraction(&attacker, &gassed, PunchType::Cross, &tunables);
        assert!(gassed_damage < fresh_damage);
    }

    #[test]
    fn high_chin_reduces_head_damage() {
        let mut tough = generate_fighter(2, 60);
        tough.mental.chin = 100;
        let mut weak = generate_fighter(2, 60);
        weak.mental.chin = 1;
        assert!(mitigated_head_damage(1.0, &tough) < mitigated_head_damage(1.0, &weak));
    }
}
