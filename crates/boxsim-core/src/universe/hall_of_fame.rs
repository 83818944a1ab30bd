//! Hall of Fame induction: three categories mirroring
//! real boxing HOF conventions -- first-ballot for dominant careers,
//! standard for solid careers after a waiting period, and a veterans
//! committee pass for borderline careers much later.

use crate::models::fighter::Fighter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InductionCategory {
    FirstBallot,
    Standard,
    VeteransCommittee,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HofInductee {
    pub fighter_id: String,
    pub category: String,
    pub inducted_at_year: u32,
}

const RETIREMENT_WAIT_YEARS_FIRST_BALLOT: u32 = 3;
const RETIREMENT_WAIT_YEARS_STANDARD: u32 = 5;
const RETIREMENT_WAIT_YEARS_VETERANS: u32 = 15;

fn dominance_score(fighter: &Fighter) -> f32 {
    let stats = &fighter.career_stats;
    let win_pct = stats.win_pct();
    let ko_rate = if stats.wins > 0 {
        (stats.wins_by_ko + stats.wins_by_tko) as f32 / stats.wins as f32
    } else {
        0.0
    };
    win_pct * 60.0 + ko_rate * 20.0 + stats.title_reigns as f32 * 8.0 + stats.notable_wins as f32 * 2.0
}

/// Classify a retired fighter's eligibility this year, if any.
pub fn classify_induction(
    fighter: &Fighter,
    current_year: u32,
) -> Option<InductionCategory> {
    if !fighter.retired {
        return None;
    }
    let retired_year = fighter.retired_at_year?;
    let years_since = current_year.saturating_sub(retired_year);
    let score = dominance_score(fighter);

    if years_since >= RETIREMENT_WAIT_YEARS_FIRST_BALLOT
        && score >= 80.0
        && fighter.career_stats.title_reigns >= 2
    {
        Some(InductionCategory::FirstBallot)
    } else if years_since >= RETIREMENT_WAIT_YEARS_STANDARD && score >= 55.0 {
        Some(InductionCategory::Standard)
    } else if years_since >= RETIREMENT_WAIT_YEARS_VETERANS && score >= 35.0 {
        Some(InductionCategory::VeteransCommittee)
    } else {
        None
    }
}

pub fn category_label(category: InductionCategory) -> &'static str {
    match category {
        InductionCategory::FirstBallot => "first_ballot",
        InductionCategory::Standard => "standard",
        InductionCategory::VeteransCommittee => "veterans_committee",
    }
}
