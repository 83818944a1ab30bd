//! Weekly matchmaking: the matchmaker proposes a card of `{TITLE_FIGHT,
//! MAIN_EVENT, UNDERCARD}` matches. Heuristics: title fights require the
//! champion plus a #1..#4 contender with a minimum week gap since either
//! side's last bout; main events pair top-15 contenders of similar rank;
//! undercards fill the remaining schedule with close-skill journeyman
//! pairings. Greedy, with priority by type then rank proximity then
//! freshness -- small independent rules feeding one arbitration point,
//! the same shape used by the combat controller elsewhere in this crate.

use std::collections::{HashMap, HashSet};

use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::models::fighter::Fighter;
use crate::models::sanctioning::{Division, Rankings, SanctioningBody, Title};

/// Minimum weeks between two bouts for a fighter to be eligible for a
/// title fight.
pub const TITLE_FIGHT_MIN_WEEK_GAP: u32 = 8;

/// How a booked bout slots into the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchType {
    TitleFight,
    MainEvent,
    Undercard,
}

/// One booked bout for the week, by fighter id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matchup {
    pub red_id: String,
    pub blue_id: String,
    pub division: Division,
    pub match_type: MatchType,
    pub sanctioning_body: Option<SanctioningBody>,
}

fn overall_skill(fighter: &Fighter) -> f32 {
    let power = (fighter.power.left as u32 + fighter.power.right as u32 + fighter.power.knockout as u32) as f32 / 3.0;
    let speed = (fighter.speed.hand as u32 + fighter.speed.foot as u32 + fighter.speed.reflexes as u32) as f32 / 3.0;
    let defense = (fighter.defense.head_movement as u32 + fighter.defense.blocking as u32) as f32 / 2.0;
    let technical = (fighter.technical.accuracy as u32 + fighter.technical.fight_iq as u32 + fighter.technical.ring_generalship as u32) as f32 / 3.0;
    (power + speed + defense + technical) / 4.0
}

fn is_fresh_enough(fighter: &Fighter, current_week: u32) -> bool {
    match fighter.career_stats.last_fight_week {
        None => true,
        Some(last) => current_week.saturating_sub(last) >= TITLE_FIGHT_MIN_WEEK_GAP,
    }
}

/// Book one week's card across every division. `rankings` is the prior
/// week's recomputed rankings (current-week rankings don't exist yet,
/// the same way matchmaking always acts on the last known standings).
pub fn book_week(
    fighters: &[Fighter],
    titles: &[Title],
    rankings: &HashMap<(Division, SanctioningBody), Rankings>,
    current_week: u32,
    excluded: &HashSet<String>,
) -> Vec<Matchup> {
    let mut by_division: std::collections::BTreeMap<Division, Vec<&Fighter>> = Default::default();
    for fighter in fighters {
        if fighter.retired || excluded.contains(&fighter.id) {
            continue;
        }
        by_division.entry(Division::for_weight_kg(fighter.weight_kg)).or_default().push(fighter);
    }

    let mut matchups = Vec::new();
    for (division, mut pool) in by_division {
        pool.sort_by(|a, b| {
            overall_skill(a)
                .partial_cmp(&overall_skill(b))
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.id.cmp(&b.id))
        });

        let by_id: FxHashMap<&str, &Fighter> = pool.iter().map(|f| (f.id.as_str(), *f)).collect();
        let mut used: HashSet<String> = HashSet::new();

        // Priority 1: title fights -- champion vs. best eligible contender
        // among the body's #1..#4.
        for &body in &SanctioningBody::ALL {
            let Some(title) = titles.iter().find(|t| t.body == Some(body) && t.division == Some(division)) else {
                continue;
            };
            let Some(champion_id) = &title.champion_id else { continue };
            let Some(&champion) = by_id.get(champion_id.as_str()) else { continue };
            if used.contains(champion_id) || !is_fresh_enough(champion, current_week) {
                continue;
            }
            let Some(ranking) = rankings.get(&(division, body)) else { continue };

            let contender = ranking
                .entries
                .iter()
                .take(4)
                .filter_map(|entry| by_id.get(entry.fighter_id.as_str()).copied())
                .find(|c| !used.contains(&c.id) && c.id != *champion_id && is_fresh_enough(c, current_week));

            if let Some(contender) = contender {
                used.insert(champion_id.clone());
                used.insert(contender.id.clone());
                matchups.push(Matchup {
                    red_id: champion_id.clone(),
                    blue_id: contender.id.clone(),
                    division,
                    match_type: MatchType::TitleFight,
                    sanctioning_body: Some(body),
                });
            }
        }

        // Priority 2: main events -- pair top-15 (any body) contenders of
        // similar rank/record with each other.
        let top_fifteen: HashSet<String> = rankings
            .iter()
            .filter(|((d, _), _)| *d == division)
            .flat_map(|(_, r)| r.entries.iter().map(|e| e.fighter_id.clone()))
            .collect();

        let mut ranked_pool: Vec<&Fighter> = pool
            .iter()
            .filter(|f| top_fifteen.contains(&f.id) && !used.contains(&f.id))
            .copied()
            .collect();
        ranked_pool.sort_by(|a, b| {
            overall_skill(a)
                .partial_cmp(&overall_skill(b))
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.id.cmp(&b.id))
        });
        for i in 0..ranked_pool.len() {
            let a = ranked_pool[i];
            if used.contains(&a.id) {
                continue;
            }
            if let Some(b) = find_best_partner(&ranked_pool, i, &used) {
                used.insert(a.id.clone());
                used.insert(b.id.clone());
                matchups.push(Matchup {
                    red_id: a.id.clone(),
                    blue_id: b.id.clone(),
                    division,
                    match_type: MatchType::MainEvent,
                    sanctioning_body: None,
                });
            }
        }

        // Priority 3: undercards -- fill the rest of the pool greedily by
        // skill proximity.
        for i in 0..pool.len() {
            let a = pool[i];
            if used.contains(&a.id) {
                continue;
            }
            if let Some(b) = find_best_partner(&pool, i, &used) {
                used.insert(a.id.clone());
                used.insert(b.id.clone());
                matchups.push(Matchup {
                    red_id: a.id.clone(),
                    blue_id: b.id.clone(),
                    division,
                    match_type: MatchType::Undercard,
                    sanctioning_body: None,
                });
            }
        }
    }
    matchups
}

fn find_best_partner<'a>(
    pool: &[&'a Fighter],
    from_index: usize,
    used: &HashSet<String>,
) -> Option<&'a Fighter> {
    pool.iter()
        .skip(from_index + 1)
        .find(|candidate| !used.contains(&candidate.id))
        .copied()
}
