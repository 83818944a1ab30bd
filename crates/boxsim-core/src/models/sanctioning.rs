//! Sanctioning bodies, weight divisions, and title lineage types.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SanctioningBody {
    Wbc,
    Wba,
    Ibf,
    Wbo,
}

impl SanctioningBody {
    pub const ALL: [SanctioningBody; 4] =
        [SanctioningBody::Wbc, SanctioningBody::Wba, SanctioningBody::Ibf, SanctioningBody::Wbo];
}

/// Weight divisions, lightest to heaviest, matching boundaries used by the
/// matchmaker's weight-compatibility check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Division {
    Flyweight,
    Bantamweight,
    Featherweight,
    Lightweight,
    Welterweight,
    Middleweight,
    LightHeavyweight,
    Heavyweight,
}

impl Division {
    /// Upper bound in kg, inclusive. `Heavyweight` has no upper bound.
    pub fn upper_bound_kg(self) -> Option<u16> {
        match self {
            Division::Flyweight => Some(51),
            Division::Bantamweight => Some(56),
            Division::Featherweight => Some(61),
            Division::Lightweight => Some(65),
            Division::Welterweight => Some(69),
            Division::Middleweight => Some(75),
            Division::LightHeavyweight => Some(91),
            Division::Heavyweight => None,
        }
    }

    pub fn for_weight_kg(weight_kg: u16) -> Division {
        for division in [
            Division::Flyweight,
            Division::Bantamweight,
            Division::Featherweight,
            Division::Lightweight,
            Division::Welterweight,
            Division::Middleweight,
            Division::LightHeavyweight,
        ] {
            if let Some(bound) = division.upper_bound_kg() {
                if weight_kg <= bound {
                    return division;
                }
            }
        }
        Division::Heavyweight
    }
}

/// A single ranking slot within one body/division. Rankings are
/// recomputed, never mutated incrementally, so this type has no identity
/// beyond its position: rank 1..=15 contiguous, no gaps, no duplicate
/// fighter ids within a body+division.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub rank: u8,
    pub fighter_id: String,
    pub points: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rankings {
    pub entries: Vec<RankingEntry>,
}

impl Rankings {
    pub const MAX_RANKED: usize = 15;

    /// Invariant check used by tests and by the rankings module itself
    /// after recomputation: contiguous ranks starting at 1, no duplicates.
    pub fn is_well_formed(&self) -> bool {
        if self.entries.len() > Self::MAX_RANKED {
            return false;
        }
        let mut seen = std::collections::HashSet::new();
        for (index, entry) in self.entries.iter().enumerate() {
            if entry.rank as usize != index + 1 {
                return false;
            }
            if !seen.insert(entry.fighter_id.clone()) {
                return false;
            }
        }
        true
    }
}

/// A title's current lineage: who holds it, since when, and how many
/// defenses they've made. `None` champion means the title is vacant and
/// eligible for the vacant-title scheduling path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Title {
    pub body: Option<SanctioningBody>,
    pub division: Option<Division>,
    pub champion_id: Option<String>,
    pub won_at_week: Option<u32>,
    pub won_at_year: Option<u32>,
    pub defenses: u32,
}

impl Title {
    pub fn new(body: SanctioningBody, division: Division) -> Self {
        Self { body: Some(body), division: Some(division), ..Default::default() }
    }

    pub fn is_vacant(&self) -> bool {
        self.champion_id.is_none()
    }
}
