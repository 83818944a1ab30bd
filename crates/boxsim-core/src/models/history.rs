//! Per-fighter fight history: each completed bout leaves one entry on
//! both participants' records, carrying a value-copy `ReplaySnapshot` so
//! the bout can be rerun later without the universe's current fighter
//! state -- the snapshot never holds a reference to a fighter whose
//! stats may change later.

use serde::{Deserialize, Serialize};

use super::fight::StoppageMethod;
use super::replay::ReplaySnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Loss,
    Draw,
    NoContest,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FightHistoryEntry {
    pub opponent_id: String,
    pub outcome: Outcome,
    pub method: StoppageMethod,
    pub week: u32,
    pub year: u32,
    #[serde(default)]
    pub is_title_fight: bool,
    pub replay: ReplaySnapshot,
}
