//! Title lineage and vacant-title scheduling.

use crate::models::fight::FightResult;
use crate::models::fighter::Fighter;
use crate::models::sanctioning::{Division, SanctioningBody, Title};

/// Apply a title fight's result to the title's lineage. Only call this
/// for fights flagged `is_title_fight`; non-title bouts never touch
/// lineage even if a champion happens to fight in them.
pub fn apply_title_result(title: &mut Title, result: &FightResult, week: u32, year: u32) {
    if result.is_draw() || !result.method.has_winner() {
        // Champion retains on a draw or no-decision; defenses still count
        // as a successful defense of the belt.
        if title.champion_id.is_some() {
            title.defenses += 1;
        }
        return;
    }

    let Some(winner_id) = &result.winner_id else { return };
    if title.champion_id.as_deref() == Some(winner_id.as_str()) {
        title.defenses += 1;
    } else {
        title.champion_id = Some(winner_id.clone());
        title.won_at_week = Some(week);
        title.won_at_year = Some(year);
        title.defenses = 0;
    }
}

/// Whether a vacant title should be put up for grabs this week: always
/// yes, since the matchmaker treats an eligible vacant title as a
/// standing request for the two highest-ranked available contenders.
pub fn needs_contender_bout(title: &Title) -> bool {
    title.is_vacant()
}

/// Pick the two best available contenders for a vacant title from a
/// body's rankings, returning `None` if fewer than two ranked fighters
/// are active and eligible.
pub fn pick_vacant_title_contenders<'a>(
    fighters: &'a [Fighter],
    rankings: &crate::models::sanctioning::Rankings,
) -> Option<(&'a Fighter, &'a Fighter)> {
    let ranked_active: Vec<&Fighter> = rankings
        .entries
        .iter()
        .filter_map(|entry| fighters.iter().find(|f| f.id == entry.fighter_id && !f.retired))
        .collect();
    if ranked_active.len() < 2 {
        return None;
    }
    Some((ranked_active[0], ranked_active[1]))
}

pub fn new_title_set(division: Division) -> Vec<Title> {
    SanctioningBody::ALL.into_iter().map(|body| Title::new(body, division)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fight::StoppageMethod;

    fn sample_result(winner: &str, loser: &str) -> FightResult {
        FightResult {
            method: StoppageMethod::Ko,
            ending_round: 4,
            ending_tick: 10,
            scorecards: vec![],
            winner_id: Some(winner.to_string()),
            loser_id: Some(loser.to_string()),
            knockdowns_total: (1, 0),
            finishing_punch: None,
        }
    }

    #[test]
    fn new_champion_resets_defenses() {
        let mut title = Title::new(SanctioningBody::Wbc, Division::Lightweight);
        title.champion_id = Some("old".into());
        title.defenses = 5;
        apply_title_result(&mut title, &sample_result("new", "old"), 10, 2026);
        assert_eq!(title.champion_id.as_deref(), Some("new"));
        assert_eq!(title.defenses, 0);
    }

    #[test]
    fn successful_defense_increments_count() {
        let mut title = Title::new(SanctioningBody::Wbc, Division::Lightweight);
        title.champion_id = Some("champ".into());
        apply_title_result(&mut title, &sample_result("champ", "challenger"), 11, 2026);
        assert_eq!(title.defenses, 1);
    }
}
