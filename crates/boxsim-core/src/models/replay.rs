//! Replay snapshots: a fight re-run from the same seed and fighters must
//! reproduce the same event stream byte-for-byte.
//!
//! A `ReplaySnapshot` is a value-copy of everything needed to reproduce a
//! fight -- it holds no live references, so cloning one and handing it to a
//! second `combat::engine::run_fight` call is the whole replay mechanism.

use serde::{Deserialize, Serialize};

use super::fight::FightConfig;
use super::fighter::Fighter;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplaySnapshot {
    pub red: Fighter,
    pub blue: Fighter,
    pub config: FightConfig,
}

impl ReplaySnapshot {
    pub fn capture(red: &Fighter, blue: &Fighter, config: &FightConfig) -> Self {
        Self { red: red.clone(), blue: blue.clone(), config: config.clone() }
    }
}
