//! Property-based tests over the invariants a combat engine and universe
//! processor must hold for any seed, not just the handful of fixed cases
//! unit tests cover.

use proptest::prelude::*;

use boxsim_core::combat::{run_fight, Tunables};
use boxsim_core::fighter::generate_fighter;
use boxsim_core::models::events::{EventLog, FightEventKind};
use boxsim_core::models::fight::StoppageMethod;
use boxsim_core::models::sanctioning::Division;
use boxsim_core::{Fight, FightConfig};
use boxsim_core::{SaveManager, Universe};

fn run_seeded_fight(red_seed: u64, blue_seed: u64, fight_seed: u64) -> (Fight, boxsim_core::FightResult, EventLog) {
    let fight = Fight {
        red: generate_fighter(red_seed, 65),
        blue: generate_fighter(blue_seed, 65),
        config: FightConfig { scheduled_rounds: 10, seed: fight_seed, ticks_per_round: 90, is_title_fight: false },
    };
    let mut log = EventLog::default();
    let result = run_fight(&fight, &mut log);
    (fight, result, log)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every fight ends with a recognized terminal method and never
    /// runs past its scheduled rounds.
    #[test]
    fn stoppage_is_always_complete_and_within_schedule(
        red_seed in 1u64..10_000,
        blue_seed in 1u64..10_000,
        fight_seed in any::<u64>(),
    ) {
        let (fight, result, log) = run_seeded_fight(red_seed, blue_seed, fight_seed);

        prop_assert!(result.ending_round >= 1);
        prop_assert!(result.ending_round <= fight.config.scheduled_rounds);
        prop_assert!(matches!(
            result.method,
            StoppageMethod::Ko
                | StoppageMethod::Tko(_)
                | StoppageMethod::Decision(_)
                | StoppageMethod::Draw(_)
                | StoppageMethod::Disqualification
                | StoppageMethod::NoContest
        ));
        prop_assert!(matches!(log.events.last().unwrap().kind, FightEventKind::FightEnd { .. }));
    }

    /// A judge's per-round score never exceeds 10 on either side, and the
    /// schedule never produces more scorecard rounds than were fought.
    #[test]
    fn scorecards_are_bounded_and_never_overrun_the_schedule(
        red_seed in 1u64..10_000,
        blue_seed in 1u64..10_000,
        fight_seed in any::<u64>(),
    ) {
        let (fight, result, _log) = run_seeded_fight(red_seed, blue_seed, fight_seed);

        for card in &result.scorecards {
            prop_assert!(card.rounds.len() <= fight.config.scheduled_rounds as usize);
            for round_score in &card.rounds {
                prop_assert!(round_score.red <= 10);
                prop_assert!(round_score.blue <= 10);
                prop_assert!(round_score.red >= 6);
                prop_assert!(round_score.blue >= 6);
            }
        }
    }

    /// The same seed and the same two fighters always produce a
    /// bit-identical result and event stream.
    #[test]
    fn replay_is_deterministic_for_any_seed(
        red_seed in 1u64..10_000,
        blue_seed in 1u64..10_000,
        fight_seed in any::<u64>(),
    ) {
        let (fight_a, result_a, log_a) = run_seeded_fight(red_seed, blue_seed, fight_seed);
        let fight_b = fight_a.clone();
        let mut log_b = EventLog::default();
        let result_b = run_fight(&fight_b, &mut log_b);

        prop_assert_eq!(result_a, result_b);
        prop_assert_eq!(log_a.events, log_b.events);
    }

    /// A fighter only reaches a count of 10 when the fight ends in a KO
    /// with the opponent declared the winner.
    #[test]
    fn a_full_ten_count_always_ends_the_fight_by_knockout(
        red_seed in 1u64..10_000,
        blue_seed in 1u64..10_000,
        fight_seed in any::<u64>(),
    ) {
        let (fight, result, log) = run_seeded_fight(red_seed, blue_seed, fight_seed);

        let reached_ten = log.events.iter().any(|event| {
            matches!(event.kind, FightEventKind::Count { count: 10, .. })
        });

        if reached_ten {
            prop_assert_eq!(result.method, StoppageMethod::Ko);
            prop_assert!(result.winner_id.is_some());
            prop_assert_ne!(&result.winner_id, &result.loser_id);
        }
    }
}

/// Ranking lists never exceed the cap, never repeat a fighter, and never
/// list the reigning champion among the contenders.
#[test]
fn rankings_stay_well_formed_across_a_freshly_bootstrapped_universe() {
    let universe = Universe::bootstrap(4242, 400);

    for division in [
        Division::Flyweight,
        Division::Lightweight,
        Division::Welterweight,
        Division::Heavyweight,
    ] {
        let rankings = universe.consensus_rankings(division);
        assert!(rankings.entries.len() <= 15);

        let mut seen = std::collections::HashSet::new();
        for entry in &rankings.entries {
            assert!(seen.insert(entry.fighter_id.clone()), "duplicate ranking entry");
        }

        let rankings_by_body = universe.rankings_for(division);
        for body in boxsim_core::models::sanctioning::SanctioningBody::ALL {
            if let Some(title) = universe.title_for(body, division) {
                if let Some(champion_id) = &title.champion_id {
                    if let Some(body_rankings) = rankings_by_body.get(&body) {
                        assert!(
                            !body_rankings.entries.iter().any(|e| &e.fighter_id == champion_id),
                            "champion listed among own contenders"
                        );
                    }
                }
            }
        }
    }
}

/// Advancing a week always moves {year, week} forward by exactly one
/// step, never zero and never more than one.
#[test]
fn advancing_a_week_always_moves_time_forward_by_exactly_one_step() {
    let mut universe = Universe::bootstrap(7, 120);
    let mut progress = boxsim_core::universe::NoopProgress;

    for _ in 0..10 {
        let before = (universe.year, universe.week);
        universe.advance_week(&mut progress).unwrap();
        let after = (universe.year, universe.week);
        assert_ne!(before, after);

        let before_total = before.0 as u64 * boxsim_core::universe::WEEKS_PER_YEAR as u64 + before.1 as u64;
        let after_total = after.0 as u64 * boxsim_core::universe::WEEKS_PER_YEAR as u64 + after.1 as u64;
        assert_eq!(after_total - before_total, 1);
    }
}

/// A universe survives a save/load round trip with no structural drift
/// in its roster or schedule position.
#[test]
fn a_universe_round_trips_through_save_and_load_unchanged() {
    let mut universe = Universe::bootstrap(314, 50);
    let mut progress = boxsim_core::universe::NoopProgress;
    universe.advance_week(&mut progress).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let manager = SaveManager::new(dir.path());
    let save = universe.to_save();
    manager.save_to_slot(0, &save).unwrap();

    let loaded_save = manager.load_from_slot(0).unwrap();
    let restored = Universe::from_save(&loaded_save);

    assert_eq!(restored.year, universe.year);
    assert_eq!(restored.week, universe.week);
    assert_eq!(restored.fighters.len(), universe.fighters.len());
    assert_eq!(restored.titles.len(), universe.titles.len());
}

/// Three cumulative point deductions disqualify a fighter, at the
/// default tunables' DQ threshold.
#[test]
fn three_point_deductions_always_disqualify() {
    use boxsim_core::combat::fouls::roll_fouls;
    use boxsim_core::fighter::generate_fighter;
    use boxsim_core::models::events::Corner;
    use boxsim_core::models::fight_state::{FighterState, Position};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    assert_eq!(Tunables::default().foul_dq_threshold, 3);

    let fighter = generate_fighter(1, 60);
    let mut state = FighterState::fresh(Position::origin());
    let tunables = Tunables {
        foul_base_chance_per_tick: 1.0,
        foul_warning_threshold: 0,
        ..Tunables::default()
    };
    let mut rng = ChaCha8Rng::seed_from_u64(11);

    let mut disqualified = false;
    for _ in 0..5 {
        let (_, dq) = roll_fouls(&fighter, &mut state, Corner::Red, &tunables, &mut rng);
        if dq {
            disqualified = true;
            break;
        }
    }

    assert!(disqualified);
    assert!(state.total_point_deductions >= tunables.foul_dq_threshold);
}

#[test]
fn sanity_default_tunables_are_probabilities() {
    let t = Tunables::default();
    assert!(t.base_hit_chance >= 0.0 && t.base_hit_chance <= 1.0);
}
