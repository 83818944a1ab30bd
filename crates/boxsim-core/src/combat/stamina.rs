//! Stamina drain/regen (L1).

use crate::models::events::PunchType;
use crate::models::fight_state::FighterState;

use super::tunables::Tunables;

pub fn drain_for_thrown(punch: PunchType, tunables: &Tunables) -> f32 {
    let base = tunables.stamina_drain_per_punch_thrown;
    if punch.is_power() {
        base * 1.8
    } else {
        base
    }
}

pub fn apply_throw_cost(state: &mut FighterState, punch: PunchType, tunables: &Tunables) {
    state.stamina_percent = (state.stamina_percent - drain_for_thrown(punch, tunables)).max(0.0);
}

pub fn apply_landed_extra_cost(state: &mut FighterState, tunables: &Tunables) {
    state.stamina_percent =
        (state.stamina_percent - tunables.stamina_drain_per_punch_landed_extra).max(0.0);
}

/// Regeneration when a fighter is resting (not throwing this tick).
/// Recovery attribute scales the rate; cardio sets the ceiling fighters
/// settle towards rather than regenerating back to full.
pub fn apply_regen(state: &mut FighterState, cardio: u8, recovery: u8, tunables: &Tunables) {
    let ceiling = 0.4 + (cardio as f32 / 100.0) * 0.6;
    if state.stamina_percent < ceiling {
        let rate = tunables.stamina_regen_per_tick_resting * (0.5 + recovery as f32 / 200.0);
        state.stamina_percent = (state.stamina_percent + rate).min(ceiling);
    }
}

pub fn is_gassed(state: &FighterState, tunables: &Tunables) -> bool {
    state.stamina_percent < tunables.gassed_threshold
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fight_state::Position;

    #[test]
    fn throwing_drains_stamina() {
        let tunables = Tunables::default();
        let mut state = FighterState::fresh(Position::origin());
        let before = state.stamina_percent;
        apply_throw_cost(&mut state, PunchType::Cross, &tunables);
        assert!(state.stamina_percent < before);
    }

    #[test]
    fn resting_regenerates_towards_ceiling_not_full() {
        let tunables = Tunables::default();
        let mut state = FighterState::fresh(Position::origin());
        state.stamina_percent = 0.1;
        for _ in 0..10_000 {
            apply_regen(&mut state, 50, 50, &tunables);
        }
        assert!(state.stamina_percent <= 0.7 + 1e-4);
    }
}
