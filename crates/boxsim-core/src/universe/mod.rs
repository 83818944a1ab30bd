//! The persistent career universe: a roster of fighters plus the titles,
//! hall of fame register, and rolling result history that accumulate as
//! weeks are processed. `Universe` is the aggregate a CLI or future UI
//! holds and advances; everything else in this module is the machinery
//! one week of advancement runs through.

pub mod generator;
pub mod hall_of_fame;
pub mod matchmaker;
pub mod rankings;
pub mod titles;
pub mod week_processor;

use std::collections::VecDeque;

use crate::combat::tunables::Tunables;
use crate::error::Result;
use crate::models::fighter::Fighter;
use crate::models::sanctioning::{Division, Rankings, SanctioningBody, Title};
use crate::save::UniverseSave;

pub use hall_of_fame::HofInductee;
pub use week_processor::{BoutSummary, NoopProgress, WeekProgress, WeekReport, WEEKS_PER_YEAR};

const DIVISIONS: [Division; 8] = [
    Division::Flyweight,
    Division::Bantamweight,
    Division::Featherweight,
    Division::Lightweight,
    Division::Welterweight,
    Division::Middleweight,
    Division::LightHeavyweight,
    Division::Heavyweight,
];

/// Cap on the rolling recent-results window so a long-running universe's
/// save doesn't grow without bound; matchmaking and rankings only ever
/// consult a fighter's own `last_fight_week`, never this log, so trimming
/// it loses nothing the engine depends on.
pub const RECENT_RESULTS_WINDOW: usize = 1_000;

/// One running career simulation: fighters, titles, and history. Holds
/// exactly one canonical `Fighter` per id (enforced at bootstrap and by
/// `process_week`, which never introduces or duplicates an id).
#[derive(Debug, Clone)]
pub struct Universe {
    pub base_seed: u64,
    pub year: u32,
    pub week: u32,
    pub fighters: Vec<Fighter>,
    pub titles: Vec<Title>,
    pub hall_of_fame: Vec<HofInductee>,
    pub recent_results: VecDeque<BoutSummary>,
    pub tunables: Tunables,
}

impl Universe {
    /// Bootstrap a fresh universe: a roster spread across divisions and
    /// one vacant title per body/division pair.
    pub fn bootstrap(base_seed: u64, roster_size: usize) -> Universe {
        let fighters = generator::bootstrap_roster(base_seed, roster_size);
        let titles = DIVISIONS.iter().flat_map(|&division| titles::new_title_set(division)).collect();
        Universe {
            base_seed,
            year: 2026,
            week: 0,
            fighters,
            titles,
            hall_of_fame: Vec::new(),
            recent_results: VecDeque::new(),
            tunables: Tunables::default(),
        }
    }

    pub fn fighter(&self, id: &str) -> Option<&Fighter> {
        self.fighters.iter().find(|f| f.id == id)
    }

    pub fn fighter_mut(&mut self, id: &str) -> Option<&mut Fighter> {
        self.fighters.iter_mut().find(|f| f.id == id)
    }

    pub fn active_fighters(&self) -> impl Iterator<Item = &Fighter> {
        self.fighters.iter().filter(|f| !f.retired)
    }

    pub fn title_for(&self, body: SanctioningBody, division: Division) -> Option<&Title> {
        self.titles.iter().find(|t| t.body == Some(body) && t.division == Some(division))
    }

    /// Each body's own top-15 for a division, recomputed fresh from the
    /// current roster (never cached, per the policy rankings are built on).
    pub fn rankings_for(
        &self,
        division: Division,
    ) -> std::collections::HashMap<SanctioningBody, Rankings> {
        rankings::compute_rankings(&self.fighters, division, &self.titles)
    }

    /// The single consensus ranking for a division, averaged across the
    /// four bodies' independent lists.
    pub fn consensus_rankings(&self, division: Division) -> Rankings {
        rankings::compute_consensus(&self.rankings_for(division))
    }

    /// Advance exactly one week: aging, matchmaking, simulation, ranking
    /// recomputation, title updates, retirements, and Hall of Fame
    /// induction, in that order. Folds the week's bouts into the rolling
    /// result window, trimming it back down to `RECENT_RESULTS_WINDOW`.
    pub fn advance_week(&mut self, progress: &mut dyn WeekProgress) -> Result<WeekReport> {
        self.week += 1;
        if self.week > WEEKS_PER_YEAR {
            self.week = 1;
            self.year += 1;
        }

        let report = week_processor::process_week(
            &mut self.fighters,
            &mut self.titles,
            self.week,
            self.year,
            self.base_seed,
            &self.tunables,
            progress,
        )?;

        self.hall_of_fame.extend(report.hof_inductions.iter().cloned());
        self.recent_results.extend(report.bouts.iter().cloned());
        while self.recent_results.len() > RECENT_RESULTS_WINDOW {
            self.recent_results.pop_front();
        }

        Ok(report)
    }

    /// Advance several weeks in sequence, collecting every week's report.
    /// A failure on one week aborts the batch; weeks already processed
    /// keep their effect on `self`.
    pub fn advance_weeks(
        &mut self,
        count: u32,
        progress: &mut dyn WeekProgress,
    ) -> Result<Vec<WeekReport>> {
        let mut reports = Vec::with_capacity(count as usize);
        for _ in 0..count {
            reports.push(self.advance_week(progress)?);
        }
        Ok(reports)
    }

    pub fn to_save(&self) -> UniverseSave {
        UniverseSave {
            version: crate::save::SAVE_VERSION,
            timestamp: crate::save::format::current_timestamp(),
            base_seed: self.base_seed,
            year: self.year,
            week: self.week,
            fighters: self.fighters.clone(),
            titles: self.titles.clone(),
            hall_of_fame: self.hall_of_fame.clone(),
            recent_results: self.recent_results.iter().cloned().collect(),
        }
    }

    pub fn from_save(save: &UniverseSave) -> Universe {
        Universe {
            base_seed: save.base_seed,
            year: save.year,
            week: save.week,
            fighters: save.fighters.clone(),
            titles: save.titles.clone(),
            hall_of_fame: save.hall_of_fame.clone(),
            recent_results: save.recent_results.iter().cloned().collect(),
            tunables: Tunables::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bootstrap_produces_one_title_per_body_per_division() {
        let universe = Universe::bootstrap(1, 200);
        assert_eq!(universe.titles.len(), DIVISIONS.len() * SanctioningBody::ALL.len());
    }

    #[test]
    fn fighter_ids_are_unique_at_bootstrap() {
        let universe = Universe::bootstrap(2, 300);
        let mut seen = std::collections::HashSet::new();
        assert!(universe.fighters.iter().all(|f| seen.insert(f.id.clone())));
    }

    #[test]
    fn advancing_a_week_increments_the_clock() {
        let mut universe = Universe::bootstrap(3, 80);
        universe.advance_week(&mut NoopProgress).unwrap();
        assert_eq!(universe.week, 1);
    }

    #[test]
    fn year_rolls_over_after_fifty_two_weeks() {
        let mut universe = Universe::bootstrap(4, 60);
        universe.week = WEEKS_PER_YEAR;
        universe.advance_week(&mut NoopProgress).unwrap();
        assert_eq!(universe.week, 1);
        assert_eq!(universe.year, 2027);
    }

    #[test]
    fn recent_results_window_is_capped() {
        let mut universe = Universe::bootstrap(5, 120);
        for _ in 0..10 {
            universe.advance_week(&mut NoopProgress).unwrap();
        }
        assert!(universe.recent_results.len() <= RECENT_RESULTS_WINDOW);
    }

    #[test]
    fn save_and_restore_preserves_clock_and_roster_size() {
        let mut universe = Universe::bootstrap(6, 100);
        universe.advance_week(&mut NoopProgress).unwrap();

        let save = universe.to_save();
        let restored = Universe::from_save(&save);

        assert_eq!(restored.week, universe.week);
        assert_eq!(restored.year, universe.year);
        assert_eq!(restored.fighters.len(), universe.fighters.len());
    }
}
