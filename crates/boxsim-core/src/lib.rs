//! # boxsim-core - Deterministic Boxing Career Simulation Engine
//!
//! This library simulates competitive boxing at two coupled time scales: a
//! tick-driven round-by-round combat engine that resolves a single bout
//! into a precise result (knockout, technical stoppage, decision,
//! disqualification, no contest), and a universe-mode career simulator that
//! advances a roster of fighters through weekly time steps -- matchmaking,
//! rankings, titles, retirements, and hall-of-fame induction.
//!
//! ## Properties
//! - Fully deterministic: the same seed and fighter states always produce
//!   the same event stream and result.
//! - Single-threaded cooperative scheduling throughout; long-running
//!   universe operations report progress via callbacks rather than
//!   spawning work.
//! - A thin JSON-facing API (`api` module) mirrors the core's native types
//!   for callers that prefer serialized requests/responses.

// Struct fields assigned individually after `Default::default()` in a few
// generator/config spots; intentional, not an oversight.
#![allow(clippy::field_reassign_with_default)]
#![allow(clippy::too_many_arguments)]

pub mod api;
pub mod combat;
pub mod config;
pub mod error;
pub mod fighter;
pub mod models;
pub mod save;
pub mod universe;

pub use combat::{run_fight, run_fight_with_tunables, Tunables};
pub use error::{BoxsimError, Result};
pub use fighter::{generate_fighter, generate_roster};
pub use models::{Fight, FightConfig, FightResult, Fighter};
pub use save::{SaveManager, UniverseSave};
pub use universe::{Universe, WeekProgress, WeekReport};

/// Crate version, surfaced in save files and the CLI's `--version` output.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Persisted-save schema version. Bumped whenever a breaking change is made
/// to `UniverseSave`'s on-disk shape; see `save::migration`.
pub const SCHEMA_VERSION: u32 = save::SAVE_VERSION;

#[cfg(test)]
mod tests {
    use super::*;
    use models::events::EventLog;

    #[test]
    fn a_freshly_generated_matchup_runs_to_completion() {
        let red = generate_fighter(1, 70);
        let blue = generate_fighter(2, 70);
        let fight = Fight { red, blue, config: FightConfig { seed: 42, ..Default::default() } };

        let mut log = EventLog::default();
        let result = run_fight(&fight, &mut log);

        assert!(result.ending_round >= 1);
        assert!(!log.events.is_empty());
    }

    #[test]
    fn same_seed_reproduces_the_same_result() {
        let red = generate_fighter(3, 65);
        let blue = generate_fighter(4, 65);
        let config = FightConfig { seed: 777, ..Default::default() };

        let fight_a = Fight { red: red.clone(), blue: blue.clone(), config: config.clone() };
        let fight_b = Fight { red, blue, config };

        let mut log_a = EventLog::default();
        let mut log_b = EventLog::default();
        let result_a = run_fight(&fight_a, &mut log_a);
        let result_b = run_fight(&fight_b, &mut log_b);

        assert_eq!(result_a, result_b);
        assert_eq!(log_a.events, log_b.events);
    }

    #[test]
    fn a_bootstrapped_universe_can_advance_a_week() {
        let mut universe = Universe::bootstrap(99, 60);
        let mut progress = universe::NoopProgress;
        let report = universe.advance_week(&mut progress).unwrap();
        assert_eq!(universe.week, 1);
        assert!(!report.bouts.is_empty());
    }
}
