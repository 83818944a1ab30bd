//! Age-related attribute drift: young fighters gain, fighters past their
//! prime decline, and the rates are pure functions of age rather than
//! hand-tuned per call site.

use crate::models::fighter::Fighter;

const PRIME_START: f32 = 24.0;
const PRIME_END: f32 = 32.0;
const DECLINE_START: f32 = 34.0;

/// Multiplier applied to attribute growth/decline this year, as a function
/// of age. Positive below `PRIME_END`, roughly flat through prime, negative
/// (decline) past `DECLINE_START`.
fn age_curve_multiplier(age_years: f32) -> f32 {
    if age_years < PRIME_START {
        (PRIME_START - age_years) / PRIME_START * 0.08 + 0.02
    } else if age_years <= PRIME_END {
        0.0
    } else if age_years < DECLINE_START {
        0.0
    } else {
        -((age_years - DECLINE_START) * 0.015).min(0.25)
    }
}

fn drift(value: u8, delta: f32) -> u8 {
    let next = value as f32 + delta;
    next.round().clamp(1.0, 100.0) as u8
}

/// Apply one year (52 weeks) of aging to a fighter's attributes in place.
/// Physical attributes (power, speed, stamina, defense) drift with the
/// age curve; mental/technical attributes are more stable, drifting at a
/// quarter of the rate, since ring intelligence erodes slower than
/// athleticism.
pub fn apply_yearly_aging(fighter: &mut Fighter, at: chrono::DateTime<chrono::Utc>) {
    let age = fighter.age_years(at);
    let mult = age_curve_multiplier(age);

    fighter.power.left = drift(fighter.power.left, mult * 10.0);
    fighter.power.right = drift(fighter.power.right, mult * 10.0);
    fighter.power.knockout = drift(fighter.power.knockout, mult * 8.0);

    fighter.speed.hand = drift(fighter.speed.hand, mult * 12.0);
    fighter.speed.foot = drift(fighter.speed.foot, mult * 14.0);
    fighter.speed.reflexes = drift(fighter.speed.reflexes, mult * 13.0);

    fighter.stamina.cardio = drift(fighter.stamina.cardio, mult * 10.0);
    fighter.stamina.recovery = drift(fighter.stamina.recovery, mult * 11.0);

    fighter.defense.head_movement = drift(fighter.defense.head_movement, mult * 9.0);
    fighter.defense.blocking = drift(fighter.defense.blocking, mult * 7.0);

    let mental_mult = mult * 0.25;
    fighter.mental.chin = drift(fighter.mental.chin, mental_mult * 10.0);
    fighter.technical.accuracy = drift(fighter.technical.accuracy, mental_mult * 10.0);
    fighter.technical.fight_iq = drift(fighter.technical.fight_iq, mental_mult * 10.0 + 0.3);
    fighter.technical.ring_generalship =
        drift(fighter.technical.ring_generalship, mental_mult * 10.0 + 0.3);

    fighter.touch();
}

/// Whether a fighter should be offered retirement this week: age past
/// decline plus a losing skid, or extreme age regardless of record.
pub fn should_consider_retirement(fighter: &Fighter, at: chrono::DateTime<chrono::Utc>) -> bool {
    let age = fighter.age_years(at);
    if age >= 42.0 {
        return true;
    }
    age >= DECLINE_START && fighter.career_stats.consecutive_losses >= 3
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fighter::generator::generate_fighter;

    #[test]
    fn young_fighter_trends_upward() {
        let mut fighter = generate_fighter(1, 50);
        fighter.date_of_birth = chrono::Utc::now() - chrono::Duration::days(365 * 20);
        let before = fighter.speed.hand;
        apply_yearly_aging(&mut fighter, chrono::Utc::now());
        assert!(fighter.speed.hand >= before);
    }

    #[test]
    fn old_fighter_declines() {
        let mut fighter = generate_fighter(2, 80);
        fighter.date_of_birth = chrono::Utc::now() - chrono::Duration::days(365 * 39);
        let before = fighter.speed.foot;
        apply_yearly_aging(&mut fighter, chrono::Utc::now());
        assert!(fighter.speed.foot <= before);
    }

    #[test]
    fn ancient_fighter_always_considers_retirement() {
        let mut fighter = generate_fighter(3, 50);
        fighter.date_of_birth = chrono::Utc::now() - chrono::Duration::days(365 * 45);
        assert!(should_consider_retirement(&fighter, chrono::Utc::now()));
    }
}
