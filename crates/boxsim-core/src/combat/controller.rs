//! L3 fighter controller: a priority-cascade of rule closures deciding
//! what a fighter does this tick, expressed as an ordered rule list
//! rather than one monolithic branch. Rules are tried in order; the
//! first that fires wins. Priority order is stable and data-driven, not
//! reshuffled per call.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::models::events::PunchType;
use crate::models::fight_state::{CombatState, FighterState, Position};
use crate::models::fighter::Fighter;

use super::position::preferred_range;
use super::stamina::is_gassed;
use super::tunables::Tunables;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intent {
    Throw(PunchType),
    Advance,
    Retreat,
    Clinch,
    Rest,
}

/// Inputs a controller rule needs to decide this fighter's action. Both
/// fighters' read-only `Fighter` data and this-tick `FighterState` are
/// visible; the opponent's are read-only too (a controller never mutates
/// state directly -- that's the resolver's job).
pub struct ControllerContext<'a> {
    pub fighter: &'a Fighter,
    pub state: &'a FighterState,
    pub opponent: &'a Fighter,
    pub opponent_state: &'a FighterState,
    pub tunables: &'a Tunables,
}

type Rule = fn(&ControllerContext, &mut ChaCha8Rng) -> Option<Intent>;

/// Rules in priority order. Earlier rules model survival instinct
/// (recovering from being hurt, clinching when badly gassed); later rules
/// model offensive style preference. Kept as a flat const slice so the
/// cascade order is inspectable and stable across calls.
const RULES: &[Rule] = &[
    rule_down_or_recovering_does_nothing,
    rule_hold_fire_on_downed_opponent,
    rule_clinch_when_desperate,
    rule_retreat_when_badly_hurt,
    rule_close_distance_if_too_far,
    rule_retreat_if_too_close_for_style,
    rule_throw_by_style,
];

fn rule_down_or_recovering_does_nothing(
    ctx: &ControllerContext,
    _rng: &mut ChaCha8Rng,
) -> Option<Intent> {
    matches!(ctx.state.state, CombatState::Down | CombatState::Recovering).then_some(Intent::Rest)
}

/// There's no legal target to hit while the opponent is down for the
/// count -- a standing fighter just holds position rather than throwing.
fn rule_hold_fire_on_downed_opponent(
    ctx: &ControllerContext,
    _rng: &mut ChaCha8Rng,
) -> Option<Intent> {
    ctx.opponent_state.is_down().then_some(Intent::Rest)
}

fn rule_clinch_when_desperate(ctx: &ControllerContext, rng: &mut ChaCha8Rng) -> Option<Intent> {
    let gassed = is_gassed(ctx.state, ctx.tunables);
    let badly_hurt = ctx.state.head_percent() > 0.8;
    (gassed && badly_hurt && rng.gen_bool(0.4)).then_some(Intent::Clinch)
}

fn rule_retreat_when_badly_hurt(ctx: &ControllerContext, rng: &mut ChaCha8Rng) -> Option<Intent> {
    let hurt = matches!(ctx.state.state, CombatState::Hurt | CombatState::Stunned);
    (hurt && rng.gen_bool(0.55)).then_some(Intent::Retreat)
}

fn rule_close_distance_if_too_far(
    ctx: &ControllerContext,
    _rng: &mut ChaCha8Rng,
) -> Option<Intent> {
    let desired = preferred_range(ctx.fighter.style.primary);
    let current = ctx.state.position.distance(&ctx.opponent_state.position);
    (current > desired + 1.5).then_some(Intent::Advance)
}

fn rule_retreat_if_too_close_for_style(
    ctx: &ControllerContext,
    rng: &mut ChaCha8Rng,
) -> Option<Intent> {
    let desired = preferred_range(ctx.fighter.style.primary);
    let current = ctx.state.position.distance(&ctx.opponent_state.position);
    let wants_space = matches!(
        ctx.fighter.style.primary,
        crate::models::fighter::PrimaryStyle::OutBoxer
            | crate::models::fighter::PrimaryStyle::CounterPuncher
    );
    (wants_space && current < desired - 1.5 && rng.gen_bool(0.5)).then_some(Intent::Retreat)
}

fn rule_throw_by_style(ctx: &ControllerContext, rng: &mut ChaCha8Rng) -> Option<Intent> {
    use crate::models::fighter::PrimaryStyle::*;
    let gassed = is_gassed(ctx.state, ctx.tunables);
    let power_bias = match ctx.fighter.style.primary {
        Slugger => 0.75,
        BoxerPuncher | SwitchHitter => 0.55,
        InsideFighter | VolumePuncher => 0.45,
        Swarmer => 0.4,
        CounterPuncher => 0.5,
        OutBoxer => 0.25,
    };
    let power_bias = if gassed { power_bias * 0.6 } else { power_bias };
    if rng.gen_bool(power_bias as f64) {
        use crate::models::fighter::OffensiveSubStyle;
        let to_body =
            matches!(ctx.fighter.style.offensive, OffensiveSubStyle::BodySnatcher) && rng.gen_bool(0.5);
        if to_body {
            return Some(Intent::Throw(PunchType::PowerBody));
        }
        let head_punch = match ctx.fighter.style.offensive {
            OffensiveSubStyle::HeadHunter => {
                // Hunts the finish: weighted toward the two heaviest shots.
                if rng.gen_bool(0.55) { PunchType::Uppercut } else { PunchType::Cross }
            }
            OffensiveSubStyle::Combination => {
                // Mixes the full head arsenal rather than leaning on one shot.
                match rng.gen_range(0..3) {
                    0 => PunchType::Hook,
                    1 => PunchType::Cross,
                    _ => PunchType::Uppercut,
                }
            }
            OffensiveSubStyle::SingleShot => PunchType::Cross,
            OffensiveSubStyle::BodySnatcher => PunchType::Hook,
        };
        Some(Intent::Throw(head_punch))
    } else {
        Some(Intent::Throw(PunchType::Jab))
    }
}

/// Run the cascade, returning the first rule's decision. Falls back to
/// `Intent::Rest` if every rule abstains (should not happen given
/// `rule_throw_by_style` always returns `Some`, but keeps the function
/// total rather than panicking on an empty cascade).
pub fn decide(ctx: &ControllerContext, rng: &mut ChaCha8Rng) -> Intent {
    for rule in RULES {
        if let Some(intent) = rule(ctx, rng) {
            return intent;
        }
    }
    Intent::Rest
}

/// Desired movement for this tick, evaluated after `decide` since
/// movement and action are independent (a fighter can advance while
/// jabbing). Kept separate so the resolver can apply position updates
/// before or after the punch resolution as needed.
pub fn desired_position(
    fighter: &Fighter,
    state: &FighterState,
    opponent_state: &FighterState,
    intent: Intent,
    tunables: &Tunables,
) -> Position {
    match intent {
        Intent::Advance => super::position::step_towards(
            state.position,
            opponent_state.position,
            tunables.position_closing_speed,
        ),
        Intent::Retreat => super::position::step_away(
            state.position,
            opponent_state.position,
            tunables.position_retreat_speed,
        ),
        _ => {
            let desired = preferred_range(fighter.style.primary);
            let current = state.position.distance(&opponent_state.position);
            if current > desired + 0.5 {
                super::position::step_towards(
                    state.position,
                    opponent_state.position,
                    tunables.position_closing_speed * 0.3,
                )
            } else {
                state.position
            }
        }
    }
}
