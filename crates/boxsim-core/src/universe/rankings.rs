//! Four-body ranking policy: each `SanctioningBody` keeps its
//! own top-15 ranking per division, recomputed from scratch every week
//! rather than adjusted incrementally, so the result only ever depends on
//! current career stats (and each body's own scoring bias), never on
//! ranking history.

use std::collections::HashMap;

use fxhash::FxHashMap;

use crate::models::fighter::Fighter;
use crate::models::sanctioning::{Division, RankingEntry, Rankings, SanctioningBody, Title};

/// Each body weighs recency/power/resume slightly differently, so two
/// bodies rarely agree perfectly on a single ranking -- this is what
/// creates "champion in one body, unranked in another" stories.
fn body_bias(body: SanctioningBody, fighter: &Fighter) -> f32 {
    match body {
        SanctioningBody::Wbc => fighter.career_stats.wins_by_ko as f32 * 1.5,
        SanctioningBody::Wba => fighter.career_stats.notable_wins as f32 * 2.0,
        SanctioningBody::Ibf => -(fighter.career_stats.losses as f32) * 1.2,
        SanctioningBody::Wbo => fighter.technical.ring_generalship as f32 * 0.3,
    }
}

fn ranking_points(body: SanctioningBody, fighter: &Fighter) -> f32 {
    let wins = fighter.career_stats.wins as f32;
    let win_pct = fighter.career_stats.win_pct();
    let base = wins * win_pct * 10.0;
    (base + body_bias(body, fighter)).max(0.0)
}

/// Recompute every body's top-15 for one division from the current
/// roster. Ties broken by fighter id for determinism. Each body's
/// reigning champion in `titles` is excluded from its own contender list,
/// but may still appear in another body's rankings if it has no title
/// there.
pub fn compute_rankings(
    fighters: &[Fighter],
    division: Division,
    titles: &[Title],
) -> HashMap<SanctioningBody, Rankings> {
    let contenders: Vec<&Fighter> = fighters
        .iter()
        .filter(|f| !f.retired && Division::for_weight_kg(f.weight_kg) == division)
        .filter(|f| f.career_stats.total_fights() > 0)
        .collect();

    let mut result = HashMap::new();
    for body in SanctioningBody::ALL {
        let champion_id = titles
            .iter()
            .find(|t| t.body == Some(body) && t.division == Some(division))
            .and_then(|t| t.champion_id.as_deref());

        let mut scored: Vec<(&Fighter, f32)> = contenders
            .iter()
            .filter(|f| Some(f.id.as_str()) != champion_id)
            .map(|f| (*f, ranking_points(body, f)))
            .collect();
        scored.sort_by(|(fa, pa), (fb, pb)| {
            pb.partial_cmp(pa).unwrap_or(std::cmp::Ordering::Equal).then_with(|| fa.id.cmp(&fb.id))
        });

        let entries = scored
            .into_iter()
            .take(Rankings::MAX_RANKED)
            .enumerate()
            .map(|(i, (fighter, points))| RankingEntry {
                rank: (i + 1) as u8,
                fighter_id: fighter.id.clone(),
                points,
            })
            .collect();

        result.insert(body, Rankings { entries });
    }
    result
}

/// Consensus view across the four bodies: average a fighter's rank
/// across every body that ranks them (unranked in a body counts as
/// just outside the list, `MAX_RANKED + 1`, rather than being ignored),
/// then re-sort and re-number 1..=15. This is the "Division" entity's
/// single published ranking, separate from each body's own list.
pub fn compute_consensus(by_body: &HashMap<SanctioningBody, Rankings>) -> Rankings {
    let fallback_rank = Rankings::MAX_RANKED as f32 + 1.0;
    let mut points: FxHashMap<&str, f32> = FxHashMap::default();

    for rankings in by_body.values() {
        for entry in &rankings.entries {
            *points.entry(entry.fighter_id.as_str()).or_insert(0.0) += entry.rank as f32;
        }
    }
    for rankings in by_body.values() {
        for fighter_id in points.keys().copied().collect::<Vec<_>>() {
            if !rankings.entries.iter().any(|e| e.fighter_id == fighter_id) {
                *points.get_mut(fighter_id).unwrap() += fallback_rank;
            }
        }
    }

    let mut ranked: Vec<(&str, f32)> = points.into_iter().collect();
    ranked.sort_by(|(ida, pa), (idb, pb)| {
        pa.partial_cmp(pb).unwrap_or(std::cmp::Ordering::Equal).then_with(|| ida.cmp(idb))
    });

    let entries = ranked
        .into_iter()
        .take(Rankings::MAX_RANKED)
        .enumerate()
        .map(|(i, (fighter_id, score))| RankingEntry {
            rank: (i + 1) as u8,
            fighter_id: fighter_id.to_string(),
            points: score,
        })
        .collect();

    Rankings { entries }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fighter::generator::generate_roster;
    use crate::models::fighter::FighterCareerStats;

    #[test]
    fn rankings_are_well_formed() {
        let mut roster = generate_roster(1, 30, 60);
        for (i, fighter) in roster.iter_mut().enumerate() {
            fighter.weight_kg = 63;
            fighter.career_stats = FighterCareerStats { wins: i as u32 + 1, losses: 1, ..Default::default() };
        }
        let rankings = compute_rankings(&roster, Division::Lightweight, &[]);
        for body_rankings in rankings.values() {
            assert!(body_rankings.is_well_formed());
        }
    }

    #[test]
    fn rankings_cap_at_fifteen() {
        let mut roster = generate_roster(2, 40, 60);
        for (i, fighter) in roster.iter_mut().enumerate() {
            fighter.weight_kg = 63;
            fighter.career_stats = FighterCareerStats { wins: i as u32 + 1, losses: 0, ..Default::default() };
        }
        let rankings = compute_rankings(&roster, Division::Lightweight, &[]);
        for body_rankings in rankings.values() {
            assert!(body_rankings.entries.len() <= Rankings::MAX_RANKED);
        }
    }

    #[test]
    fn champion_is_excluded_from_own_contender_list() {
        let mut roster = generate_roster(3, 20, 60);
        for (i, fighter) in roster.iter_mut().enumerate() {
            fighter.weight_kg = 63;
            fighter.career_stats = FighterCareerStats { wins: i as u32 + 1, losses: 0, ..Default::default() };
        }
        let champion_id = roster.last().unwrap().id.clone();
        let mut title = Title::new(SanctioningBody::Wbc, Division::Lightweight);
        title.champion_id = Some(champion_id.clone());

        let rankings = compute_rankings(&roster, Division::Lightweight, &[title]);
        let wbc = &rankings[&SanctioningBody::Wbc];
        assert!(wbc.entries.iter().all(|e| e.fighter_id != champion_id));
    }

    #[test]
    fn consensus_is_well_formed_and_bounded() {
        let mut roster = generate_roster(4, 50, 60);
        for (i, fighter) in roster.iter_mut().enumerate() {
            fighter.weight_kg = 63;
            fighter.career_stats = FighterCareerStats { wins: i as u32 + 1, losses: 0, ..Default::default() };
        }
        let by_body = compute_rankings(&roster, Division::Lightweight, &[]);
        let consensus = compute_consensus(&by_body);
        assert!(consensus.is_well_formed());
    }
}
