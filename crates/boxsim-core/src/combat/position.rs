//! Ring positioning (L1). Pure functions over `Position` plus
//! a style-driven "preferred range" so the controller (L3) has something
//! concrete to chase or retreat towards.

use crate::models::fighter::PrimaryStyle;
use crate::models::fight_state::Position;

use super::tunables::Tunables;

/// The distance (ring units) a style's fighter wants to fight at.
pub fn preferred_range(style: PrimaryStyle) -> f32 {
    match style {
        PrimaryStyle::OutBoxer => 4.0,
        PrimaryStyle::CounterPuncher => 3.5,
        PrimaryStyle::BoxerPuncher => 2.5,
        PrimaryStyle::SwitchHitter => 2.5,
        PrimaryStyle::VolumePuncher => 1.8,
        PrimaryStyle::Slugger => 1.5,
        PrimaryStyle::Swarmer => 1.0,
        PrimaryStyle::InsideFighter => 0.8,
    }
}

pub fn step_towards(from: Position, to: Position, speed: f32) -> Position {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let dist = (dx * dx + dy * dy).sqrt();
    if dist < f32::EPSILON {
        return from;
    }
    let step = speed.min(dist);
    Position { x: from.x + dx / dist * step, y: from.y + dy / dist * step }.clamp_to_arena()
}

pub fn step_away(from: Position, away_from: Position, speed: f32) -> Position {
    let dx = from.x - away_from.x;
    let dy = from.y - away_from.y;
    let dist = (dx * dx + dy * dy).sqrt();
    if dist < f32::EPSILON {
        return Position { x: from.x + speed, y: from.y }.clamp_to_arena();
    }
    let step = speed.min(Position::BOUND);
    Position { x: from.x + dx / dist * step, y: from.y + dy / dist * step }.clamp_to_arena()
}

/// Whether two fighters are close enough to exchange punches this tick.
pub fn in_range(a: Position, b: Position, tunables: &Tunables) -> bool {
    let _ = tunables;
    a.distance(&b) <= 1.5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_towards_moves_closer() {
        let a = Position { x: 0.0, y: 0.0 };
        let b = Position { x: 5.0, y: 0.0 };
        let next = step_towards(a, b, 1.0);
        assert!(next.distance(&b) < a.distance(&b));
    }

    #[test]
    fn step_away_moves_further() {
        let a = Position { x: 0.0, y: 0.0 };
        let b = Position { x: 1.0, y: 0.0 };
        let next = step_away(a, b, 1.0);
        assert!(next.distance(&b) > a.distance(&b));
    }

    #[test]
    fn swarmer_prefers_closer_range_than_out_boxer() {
        assert!(preferred_range(PrimaryStyle::Swarmer) < preferred_range(PrimaryStyle::OutBoxer));
    }
}
