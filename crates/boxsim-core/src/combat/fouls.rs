//! Foul detection and discipline: fouls are modeled as independent
//! per-tick Bernoulli rolls, one per foul kind, rather than a single
//! combined "dirty fighter" roll.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::models::events::{Corner, FightEventKind};
use crate::models::fight_state::{FighterState, FoulKind};
use crate::models::fighter::Fighter;

use super::tunables::Tunables;

const FOUL_KINDS: [FoulKind; 5] = [
    FoulKind::LowBlow,
    FoulKind::RabbitPunch,
    FoulKind::Headbutt,
    FoulKind::Holding,
    FoulKind::HittingOnBreak,
];

/// A fighter's temperament biases which fouls they're prone to: killer
/// instinct raises low-blow/rabbit-punch chance, low ring generalship
/// raises holding/hitting-on-break.
fn foul_chance(fighter: &Fighter, kind: FoulKind, tunables: &Tunables) -> f32 {
    let base = tunables.foul_base_chance_per_tick;
    let modifier = match kind {
        FoulKind::LowBlow | FoulKind::RabbitPunch => {
            1.0 + fighter.mental.killer_instinct as f32 / 200.0
        }
        FoulKind::Headbutt => 1.0,
        FoulKind::Holding | FoulKind::HittingOnBreak => {
            1.0 + (100 - fighter.technical.ring_generalship) as f32 / 200.0
        }
    };
    base * modifier
}

/// Fouls flagrant enough to end the fight on their own, independent of
/// the cumulative-deduction ladder: three cumulative deductions or a
/// single flagrant foul both trigger disqualification.
const FLAGRANT_CANDIDATES: [FoulKind; 2] = [FoulKind::RabbitPunch, FoulKind::Headbutt];

/// Roll every foul kind for a fighter this tick. Returns the discipline
/// events to emit (Foul always implies either Warning or PointDeduction
/// depending on prior record, per the escalation ladder above) plus
/// whether this foul triggers disqualification, either via the
/// cumulative ladder or a single flagrant incident.
pub fn roll_fouls(
    fighter: &Fighter,
    state: &mut FighterState,
    corner: Corner,
    tunables: &Tunables,
    rng: &mut ChaCha8Rng,
) -> (Vec<FightEventKind>, bool) {
    let mut events = Vec::new();
    let mut disqualify = false;

    for &kind in &FOUL_KINDS {
        if rng.gen_bool(foul_chance(fighter, kind, tunables) as f64) {
            events.push(FightEventKind::Foul { corner, kind });

            if FLAGRANT_CANDIDATES.contains(&kind)
                && rng.gen_bool(tunables.flagrant_foul_chance as f64)
            {
                events.push(FightEventKind::PointDeduction { corner, points: 3 });
                state.point_deductions_this_round += 3;
                disqualify = true;
                continue;
            }

            let record = state.record_foul(kind);
            record.warnings += 1;

            if record.warnings <= tunables.foul_warning_threshold {
                events.push(FightEventKind::Warning { corner, kind });
            } else {
                record.point_deductions += 1;
                state.total_point_deductions += 1;
                state.point_deductions_this_round += 1;
                events.push(FightEventKind::PointDeduction { corner, points: 1 });

                if state.total_point_deductions >= tunables.foul_dq_threshold {
                    disqualify = true;
                }
            }
        }
    }

    (events, disqualify)
}
