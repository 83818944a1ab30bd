//! Judge scoring. Three profiles (Power/Volume/Balanced)
//! weight the same per-round tallies differently. Knockdowns and
//! stagger-blowouts override the tally-based read entirely; otherwise an
//! "effective advantage" is perturbed by judge variance, a "memorable
//! moment", an occasional swing-round extra perturbation, and a small
//! nudge toward the trailing fighter once a judge's own card gap is wide,
//! then banded into a round score with a minority-upset chance so even a
//! lopsided statistical round occasionally goes the other way. Judge RNG
//! is the caller's sub-stream, kept separate from the tick RNG so replay
//! determinism holds independent of judge count.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::models::events::Corner;
use crate::models::fight::{JudgeProfile, RoundScore};

/// Raw per-round tallies the engine accumulates tick by tick, handed to
/// `score_round` once a round ends.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RoundTally {
    pub red_landed: u32,
    pub blue_landed: u32,
    pub red_power_landed: u32,
    pub blue_power_landed: u32,
    pub red_knockdowns: u8,
    pub blue_knockdowns: u8,
    /// Staggers (sub-knockdown "hurt" states) caused this round, credited
    /// to the fighter who landed the staggering punch.
    pub red_staggers: u8,
    pub blue_staggers: u8,
}

const STAGGER_BONUS: f32 = 30.0;
const JUDGE_VARIANCE: f32 = 0.10;
const MEMORABLE_MOMENT: f32 = 0.15;
const SWING_ROUND_EXTRA: f32 = 0.10;
const SWING_ROUND_CHANCE: f64 = 0.20;
const MINORITY_UPSET_CHANCE: f64 = 0.10;
const BALANCING_NUDGE: f32 = 0.05;
const BALANCING_GAP: i32 = 3;
const ADVANTAGE_MIN: f32 = 0.25;
const ADVANTAGE_MAX: f32 = 0.75;
/// No round is ever carded below this, even after deductions -- matches
/// how judges actually score (a 10-6 is about as lopsided as a card gets;
/// deductions are never allowed to manufacture a lower one).
const ROUND_SCORE_FLOOR: u8 = 6;

/// Weighted per-fighter score feeding "effective advantage", per judge
/// personality: damage & power-shots for `Power`, total landed &
/// activity for `Volume`, a blend for `Balanced`; a
/// stagger bonus of 30 per stagger caused is added under every profile.
fn weighted_output(tally: &RoundTally, profile: JudgeProfile) -> (f32, f32) {
    let (red, blue) = match profile {
        JudgeProfile::Power => (
            tally.red_power_landed as f32 * 2.0 + tally.red_landed as f32 * 0.3,
            tally.blue_power_landed as f32 * 2.0 + tally.blue_landed as f32 * 0.3,
        ),
        JudgeProfile::Volume => (
            tally.red_landed as f32 + tally.red_power_landed as f32 * 0.5,
            tally.blue_landed as f32 + tally.blue_power_landed as f32 * 0.5,
        ),
        JudgeProfile::Balanced => (
            tally.red_landed as f32 * 0.7 + tally.red_power_landed as f32 * 1.1,
            tally.blue_landed as f32 * 0.7 + tally.blue_power_landed as f32 * 1.1,
        ),
    };
    (
        red + tally.red_staggers as f32 * STAGGER_BONUS,
        blue + tally.blue_staggers as f32 * STAGGER_BONUS,
    )
}

/// Red's share of the round's effective output, in `[0, 1]`; `0.5` when
/// neither fighter landed or staggered anything.
fn effective_advantage(tally: &RoundTally, profile: JudgeProfile) -> f32 {
    let (red, blue) = weighted_output(tally, profile);
    let total = red + blue;
    if total <= f32::EPSILON {
        0.5
    } else {
        red / total
    }
}

/// Score one round under one judge's profile. `deductions` are this
/// round's point deductions already charged against each corner, applied
/// after banding. `card_gap_before` is this judge's running
/// `(red_total, blue_total)` entering the round, used only for the
/// "balancing nudge toward the trailing fighter" once the gap is wide.
pub fn score_round(
    round: u8,
    tally: &RoundTally,
    deductions: (u8, u8),
    card_gap_before: (i32, i32),
    profile: JudgeProfile,
    rng: &mut ChaCha8Rng,
) -> RoundScore {
    let knockdown_diff = tally.red_knockdowns as i16 - tally.blue_knockdowns as i16;
    let stagger_blowout = (tally.red_staggers >= 2 && tally.blue_staggers == 0)
        || (tally.blue_staggers >= 2 && tally.red_staggers == 0);

    let mut score = if knockdown_diff != 0 {
        // Knockdowns override the tally-based margin entirely: 10-8 for
        // one knockdown, 10-7 for two, etc.
        let deduction = (knockdown_diff.unsigned_abs() as u8).min(3);
        if knockdown_diff > 0 {
            RoundScore { round, red: 10, blue: 10u8.saturating_sub(deduction + 1) }
        } else {
            RoundScore { round, red: 10u8.saturating_sub(deduction + 1), blue: 10 }
        }
    } else if stagger_blowout {
        // Two or more staggers by one fighter with none against also
        // force a 10-8 round.
        if tally.red_staggers > tally.blue_staggers {
            RoundScore { round, red: 10, blue: 8 }
        } else {
            RoundScore { round, red: 8, blue: 10 }
        }
    } else {
        let mut advantage = effective_advantage(tally, profile);

        advantage += rng.gen_range(-JUDGE_VARIANCE..=JUDGE_VARIANCE);
        advantage += rng.gen_range(-MEMORABLE_MOMENT..=MEMORABLE_MOMENT);
        if rng.gen_bool(SWING_ROUND_CHANCE) {
            advantage += rng.gen_range(-SWING_ROUND_EXTRA..=SWING_ROUND_EXTRA);
        }

        let gap = card_gap_before.0 - card_gap_before.1;
        if gap.unsigned_abs() as i32 >= BALANCING_GAP {
            if gap > 0 {
                advantage -= BALANCING_NUDGE; // blue is trailing
            } else {
                advantage += BALANCING_NUDGE; // red is trailing
            }
        }

        advantage = advantage.clamp(ADVANTAGE_MIN, ADVANTAGE_MAX);

        let mut red_favored = advantage > 0.5;
        let one_sided = (advantage - 0.5).abs() > 0.15;
        if one_sided && rng.gen_bool(MINORITY_UPSET_CHANCE) {
            red_favored = !red_favored;
        }

        if (advantage - 0.5).abs() < f32::EPSILON {
            RoundScore { round, red: 10, blue: 10 }
        } else if red_favored {
            RoundScore { round, red: 10, blue: 9 }
        } else {
            RoundScore { round, red: 9, blue: 10 }
        }
    };

    score.red = score.red.saturating_sub(deductions.0).max(ROUND_SCORE_FLOOR);
    score.blue = score.blue.saturating_sub(deductions.1).max(ROUND_SCORE_FLOOR);
    score
}

/// Which corner a round favored, ignoring the exact score -- used to
/// detect momentum shifts between consecutive rounds.
pub fn round_winner(score: RoundScore) -> Option<Corner> {
    match score.red.cmp(&score.blue) {
        std::cmp::Ordering::Greater => Some(Corner::Red),
        std::cmp::Ordering::Less => Some(Corner::Blue),
        std::cmp::Ordering::Equal => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    #[test]
    fn knockdown_overrides_volume_disadvantage() {
        let tally = RoundTally { red_landed: 2, blue_landed: 40, red_knockdowns: 1, ..Default::default() };
        let score = score_round(3, &tally, (0, 0), (0, 0), JudgeProfile::Volume, &mut rng());
        assert_eq!(score.red, 10);
        assert!(score.blue < 9);
    }

    #[test]
    fn even_tally_scores_ten_ten_when_no_perturbation_moves_it() {
        let tally = RoundTally::default();
        let score = score_round(1, &tally, (0, 0), (0, 0), JudgeProfile::Balanced, &mut rng());
        assert!(score.red == 10 || score.red == 9);
        assert!(score.blue == 10 || score.blue == 9);
        assert_eq!(score.red + score.blue <= 20, true);
    }

    #[test]
    fn power_profile_favors_power_landed_over_volume() {
        let tally = RoundTally {
            red_landed: 5,
            blue_landed: 30,
            red_power_landed: 12,
            blue_power_landed: 0,
            ..Default::default()
        };
        // Check across several judge seeds: the profile should favor the
        // heavy-power corner far more often than not, even with variance.
        let mut red_favored_count = 0;
        for seed in 0..30u64 {
            let mut judge_rng = ChaCha8Rng::seed_from_u64(seed);
            let score = score_round(2, &tally, (0, 0), (0, 0), JudgeProfile::Power, &mut judge_rng);
            if round_winner(score) == Some(Corner::Red) {
                red_favored_count += 1;
            }
        }
        assert!(red_favored_count > 20, "expected power profile to favor red most of the time");
    }

    #[test]
    fn two_staggers_with_none_against_forces_ten_eight() {
        let tally = RoundTally { red_staggers: 2, ..Default::default() };
        let score = score_round(4, &tally, (0, 0), (0, 0), JudgeProfile::Balanced, &mut rng());
        assert_eq!(score, RoundScore { round: 4, red: 10, blue: 8 });
    }

    #[test]
    fn point_deductions_reduce_the_offenders_score() {
        let tally = RoundTally { red_knockdowns: 1, ..Default::default() };
        let score = score_round(5, &tally, (1, 0), (0, 0), JudgeProfile::Balanced, &mut rng());
        assert_eq!(score.red, 9);
        assert_eq!(score.blue, 8);
    }
}
