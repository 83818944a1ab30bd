//! The weekly pipeline: aging, matchmaking, simulation, ranking
//! recomputation, title updates, retirement checks, and Hall of Fame
//! induction, run in that fixed order every in-universe week. Progress
//! is surfaced through a callback so a caller (CLI, future UI) can
//! observe a long batch of weeks without the engine knowing anything
//! about its presentation.

use std::collections::HashSet;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::combat::engine::run_fight_with_tunables;
use crate::combat::tunables::Tunables;
use crate::error::Result;
use crate::fighter::aging::{apply_yearly_aging, should_consider_retirement};
use crate::models::events::EventLog;
use crate::models::fight::{Fight, FightConfig, FightResult, StoppageMethod};
use crate::models::fighter::Fighter;
use crate::models::history::{FightHistoryEntry, Outcome};
use crate::models::replay::ReplaySnapshot;
use crate::models::sanctioning::{Division, SanctioningBody, Title};

use super::hall_of_fame::{classify_induction, HofInductee};
use super::matchmaker::{book_week, MatchType, Matchup};
use super::rankings::compute_rankings;
use super::titles::{apply_title_result, needs_contender_bout, pick_vacant_title_contenders};

/// One bout's headline result, kept separately from the full `FightResult`
/// so the universe's rolling recent-results window doesn't have to
/// retain every scorecard for bouts nobody asked to replay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoutSummary {
    pub red_id: String,
    pub blue_id: String,
    pub division: Division,
    pub match_type: MatchType,
    pub method: StoppageMethod,
    pub winner_id: Option<String>,
}

/// Summary of one week's processing, returned to the caller (and folded
/// into the universe's week-by-week history for later inspection).
#[derive(Debug, Clone, PartialEq)]
pub struct WeekReport {
    pub week: u32,
    pub year: u32,
    pub fights_run: u32,
    pub no_contests: u32,
    pub retirements: Vec<String>,
    pub hof_inductions: Vec<HofInductee>,
    pub bouts: Vec<BoutSummary>,
}

/// Observer of week-processing progress. Default no-op so callers that
/// don't care about progress pay nothing.
pub trait WeekProgress {
    fn on_fight_simulated(&mut self, _index: usize, _total: usize) {}
}

pub struct NoopProgress;
impl WeekProgress for NoopProgress {}

pub const WEEKS_PER_YEAR: u32 = 52;

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

/// Process one in-universe week in place. Returns a `WeekReport`
/// summarizing what happened. A simulation invariant violation for one
/// bout never aborts the whole week: the engine itself detects the
/// violation and resolves the fight as a `NoContest` (see
/// `BoxsimError::Simulation`) rather than propagating an error here, so
/// `simulate_bout` always returns a `FightResult` and the week continues
/// regardless of how any individual bout landed.
pub fn process_week(
    fighters: &mut Vec<Fighter>,
    titles: &mut Vec<Title>,
    week: u32,
    year: u32,
    base_seed: u64,
    tunables: &Tunables,
    progress: &mut dyn WeekProgress,
) -> Result<WeekReport> {
    log::info!("week {}/{} processing starts ({} fighters)", week, year, fighters.len());
    let mut rng = ChaCha8Rng::seed_from_u64(base_seed ^ ((week as u64) << 32) ^ year as u64);

    // Step 1: ageAndDecay, once per year boundary.
    if week % WEEKS_PER_YEAR == 1 {
        let now = chrono::Utc::now();
        for fighter in fighters.iter_mut() {
            if !fighter.retired {
                apply_yearly_aging(fighter, now);
            }
        }
    }

    // Step 2: matchmake, against rankings as of the start of this week.
    let rankings = recompute_all_rankings(fighters, titles);
    let excluded = HashSet::new();
    let mut matchups = book_week(fighters, titles, &rankings, week, &excluded);

    // Step 5 (scheduled eagerly, since process_week already runs weekly):
    // inaugurateChampionships -- a vacant title with two active top
    // contenders gets an automatic title-eligible bout.
    let booked: HashSet<String> =
        matchups.iter().flat_map(|m| [m.red_id.clone(), m.blue_id.clone()]).collect();
    for title in titles.iter() {
        if !needs_contender_bout(title) {
            continue;
        }
        let (Some(body), Some(division)) = (title.body, title.division) else { continue };
        let Some(division_rankings) = rankings.get(&(division, body)) else { continue };
        if let Some((a, b)) = pick_vacant_title_contenders(fighters, division_rankings) {
            if booked.contains(&a.id) || booked.contains(&b.id) {
                continue;
            }
            matchups.push(Matchup {
                red_id: a.id.clone(),
                blue_id: b.id.clone(),
                division,
                match_type: MatchType::TitleFight,
                sanctioning_body: Some(body),
            });
        }
    }

    // Step 3: run each proposed match through the combat engine in
    // instant mode.
    let mut fights_run = 0u32;
    let mut no_contests = 0u32;
    let mut results: Vec<(Matchup, FightResult, ReplaySnapshot)> = Vec::new();

    for (index, matchup) in matchups.iter().enumerate() {
        progress.on_fight_simulated(index, matchups.len());

        let red = fighters.iter().find(|f| f.id == matchup.red_id).cloned();
        let blue = fighters.iter().find(|f| f.id == matchup.blue_id).cloned();
        let (Some(red), Some(blue)) = (red, blue) else {
            no_contests += 1;
            continue;
        };

        let is_title_fight = matchup.match_type == MatchType::TitleFight;
        let fight = Fight {
            red,
            blue,
            config: FightConfig {
                scheduled_rounds: if is_title_fight { 12 } else { 10 },
                seed: rng.gen(),
                ticks_per_round: 180,
                is_title_fight,
            },
        };

        let outcome = simulate_bout(&fight, tunables);
        fights_run += 1;
        if outcome.method == StoppageMethod::NoContest {
            no_contests += 1;
            log::warn!(
                "bout {} vs {} ended NO_CONTEST in week {}",
                matchup.red_id, matchup.blue_id, week
            );
        }
        let snapshot = ReplaySnapshot::capture(&fight.red, &fight.blue, &fight.config);
        results.push((matchup.clone_key(), outcome, snapshot));
    }

    // Step 4: apply results to career records, fight history, and titles.
    for (matchup, result, snapshot) in &results {
        apply_result_to_career(fighters, matchup, result, snapshot, week, year);

        if matchup.match_type == MatchType::TitleFight {
            if let Some(body) = matchup.sanctioning_body {
                if let Some(title) = titles
                    .iter_mut()
                    .find(|t| t.body == Some(body) && t.division == Some(matchup.division))
                {
                    apply_title_result(title, result, week, year);
                }
            }
        }
    }

    let retirements = process_retirements(fighters, week, year);
    let inductions = process_hof(fighters, year);

    let bouts = results
        .iter()
        .map(|(matchup, result, _)| BoutSummary {
            red_id: matchup.red_id.clone(),
            blue_id: matchup.blue_id.clone(),
            division: matchup.division,
            match_type: matchup.match_type,
            method: result.method,
            winner_id: result.winner_id.clone(),
        })
        .collect();

    log::info!(
        "week {}/{} done: {} fights, {} no-contests, {} retirements, {} HOF inductions",
        week, year, fights_run, no_contests, retirements.len(), inductions.len()
    );

    Ok(WeekReport {
        week,
        year,
        fights_run,
        no_contests,
        retirements,
        hof_inductions: inductions,
        bouts,
    })
}

fn simulate_bout(fight: &Fight, tunables: &Tunables) -> FightResult {
    let mut sink = EventLog::default();
    run_fight_with_tunables(fight, tunables, &mut sink)
}

fn apply_result_to_career(
    fighters: &mut [Fighter],
    matchup: &Matchup,
    result: &FightResult,
    snapshot: &ReplaySnapshot,
    week: u32,
    year: u32,
) {
    let is_draw = result.is_draw() || result.method == StoppageMethod::NoContest;
    let red_won = result.winner_id.as_deref() == Some(matchup.red_id.as_str());
    let blue_won = result.winner_id.as_deref() == Some(matchup.blue_id.as_str());

    for fighter in fighters.iter_mut() {
        let (won, opponent_id) = if fighter.id == matchup.red_id {
            (red_won, matchup.blue_id.clone())
        } else if fighter.id == matchup.blue_id {
            (blue_won, matchup.red_id.clone())
        } else {
            continue;
        };

        update_one_side(fighter, result, is_draw, won);
        fighter.career_stats.last_fight_week = Some(week);

        let outcome = if result.method == StoppageMethod::NoContest {
            Outcome::NoContest
        } else if is_draw {
            Outcome::Draw
        } else if won {
            Outcome::Win
        } else {
            Outcome::Loss
        };

        fighter.record_fight(FightHistoryEntry {
            opponent_id,
            outcome,
            method: result.method,
            week,
            year,
            is_title_fight: matchup.match_type == MatchType::TitleFight,
            replay: snapshot.clone(),
        });
    }
}

fn update_one_side(fighter: &mut Fighter, result: &FightResult, is_draw: bool, won: bool) {
    let stats = &mut fighter.career_stats;
    if result.method == StoppageMethod::NoContest {
        stats.no_contests += 1;
    } else if is_draw {
        stats.draws += 1;
        stats.consecutive_losses = 0;
    } else if won {
        stats.wins += 1;
        stats.consecutive_losses = 0;
        stats.consecutive_devastating_losses = 0;
        match result.method {
            StoppageMethod::Ko => stats.wins_by_ko += 1,
            StoppageMethod::Tko(_) => stats.wins_by_tko += 1,
            _ => {}
        }
    } else {
        stats.losses += 1;
        stats.consecutive_losses += 1;
        match result.method {
            StoppageMethod::Ko | StoppageMethod::Tko(_) => {
                stats.losses_by_ko += matches!(result.method, StoppageMethod::Ko) as u32;
                stats.losses_by_tko += matches!(result.method, StoppageMethod::Tko(_)) as u32;
                stats.consecutive_devastating_losses += 1;
            }
            _ => {
                stats.consecutive_devastating_losses = 0;
            }
        }
    }
    fighter.touch();
}

fn process_retirements(fighters: &mut [Fighter], week: u32, year: u32) -> Vec<String> {
    let now = chrono::Utc::now();
    let mut retired = Vec::new();
    for fighter in fighters.iter_mut() {
        if !fighter.retired && should_consider_retirement(fighter, now) {
            fighter.retired = true;
            fighter.retired_at_week = Some(week);
            fighter.retired_at_year = Some(year);
            fighter.touch();
            log::info!("{} retired in week {}/{}", fighter.id, week, year);
            retired.push(fighter.id.clone());
        }
    }
    retired
}

fn process_hof(fighters: &[Fighter], year: u32) -> Vec<HofInductee> {
    fighters
        .iter()
        .filter_map(|fighter| {
            classify_induction(fighter, year).map(|category| HofInductee {
                fighter_id: fighter.id.clone(),
                category: super::hall_of_fame::category_label(category).to_string(),
                inducted_at_year: year,
            })
        })
        .collect()
}

/// Recompute rankings for every division, used by the matchmaker and by
/// callers that want a fresh snapshot after a week.
pub fn recompute_all_rankings(
    fighters: &[Fighter],
    titles: &[Title],
) -> std::collections::HashMap<(Division, SanctioningBody), crate::models::sanctioning::Rankings> {
    let mut out = std::collections::HashMap::new();
    for division in DIVISIONS {
        for (body, rankings) in compute_rankings(fighters, division, titles) {
            out.insert((division, body), rankings);
        }
    }
    out
}

impl Matchup {
    fn clone_key(&self) -> Matchup {
        Matchup {
            red_id: self.red_id.clone(),
            blue_id: self.blue_id.clone(),
            division: self.division,
            match_type: self.match_type,
            sanctioning_body: self.sanctioning_body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::universe::generator::bootstrap_roster;

    #[test]
    fn processing_a_week_produces_a_report() {
        let mut fighters = bootstrap_roster(1, 40);
        let mut titles = Vec::new();
        let tunables = Tunables::default();
        let report =
            process_week(&mut fighters, &mut titles, 1, 2026, 7, &tunables, &mut NoopProgress).unwrap();
        assert_eq!(report.week, 1);
        assert!(report.fights_run + report.no_contests > 0);
    }

    #[test]
    fn career_stats_accumulate_across_weeks() {
        let mut fighters = bootstrap_roster(2, 30);
        let mut titles = Vec::new();
        let tunables = Tunables::default();
        for week in 1..=3 {
            process_week(&mut fighters, &mut titles, week, 2026, 11, &tunables, &mut NoopProgress).unwrap();
        }
        let total_fights: u32 =
            fighters.iter().map(|f| f.career_stats.total_fights()).sum();
        assert!(total_fights > 0);
    }

    #[test]
    fn fight_history_carries_a_replay_snapshot() {
        let mut fighters = bootstrap_roster(3, 20);
        let mut titles = Vec::new();
        let tunables = Tunables::default();
        process_week(&mut fighters, &mut titles, 1, 2026, 9, &tunables, &mut NoopProgress).unwrap();
        assert!(fighters.iter().any(|f| !f.fight_history.is_empty()));
    }
}
