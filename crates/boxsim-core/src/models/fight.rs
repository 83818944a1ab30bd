//! Fight configuration and outcome types.

use serde::{Deserialize, Serialize};

use super::fighter::Fighter;

/// Parameters a bout is run under. Constructed by the config loader
/// (`config::mod`) or by the universe scheduler when booking a card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FightConfig {
    pub scheduled_rounds: u8,
    pub seed: u64,
    #[serde(default = "default_ticks_per_round")]
    pub ticks_per_round: u32,
    #[serde(default)]
    pub is_title_fight: bool,
}

fn default_ticks_per_round() -> u32 {
    180
}

impl Default for FightConfig {
    fn default() -> Self {
        Self {
            scheduled_rounds: 12,
            seed: 0,
            ticks_per_round: default_ticks_per_round(),
            is_title_fight: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JudgeProfile {
    Power,
    Volume,
    Balanced,
}

/// One judge's scorecard for one round. Knockdown precedence (a
/// knockdown always outscores a stagger-only round, 10-8 either way) is
/// enforced when the card is built, not here -- this struct just holds
/// the resulting score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundScore {
    pub round: u8,
    pub red: u8,
    pub blue: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scorecard {
    pub judge: JudgeProfile,
    pub rounds: Vec<RoundScore>,
}

impl Scorecard {
    pub fn total(&self) -> (u32, u32) {
        self.rounds.iter().fold((0, 0), |(r, b), score| {
            (r + score.red as u32, b + score.blue as u32)
        })
    }
}

/// Named TKO reasons tracked on a stoppage result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TkoReason {
    /// Head damage ≥ 1.0 with the fighter still standing but throwing
    /// nothing back.
    Damage,
    /// Body damage ≥ 1.0 under the same standing-but-unresponsive test.
    BodyDamage,
    /// Third knockdown in a single round.
    ThreeKnockdowns,
    /// A single crushing landed shot judged severe enough to end it
    /// outright, short of a full ten-count.
    Accumulation,
    /// Cumulative damage high and stamina low at once.
    ExhaustionAndDamage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecisionKind {
    Unanimous,
    Split,
    Majority,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawKind {
    Unanimous,
    Split,
    Majority,
}

/// How a fight concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoppageMethod {
    Ko,
    Tko(TkoReason),
    Decision(DecisionKind),
    Draw(DrawKind),
    Disqualification,
    NoContest,
}

impl StoppageMethod {
    pub fn is_stoppage(self) -> bool {
        matches!(self, StoppageMethod::Ko | StoppageMethod::Tko(_))
    }

    pub fn has_winner(self) -> bool {
        matches!(
            self,
            StoppageMethod::Ko
                | StoppageMethod::Tko(_)
                | StoppageMethod::Decision(_)
                | StoppageMethod::Disqualification
        )
    }
}

/// Full outcome of a simulated bout. `winner` is `None` for a draw or
/// no-contest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FightResult {
    pub method: StoppageMethod,
    pub ending_round: u8,
    pub ending_tick: u32,
    pub scorecards: Vec<Scorecard>,
    pub winner_id: Option<String>,
    pub loser_id: Option<String>,
    pub knockdowns_total: (u8, u8),
    pub finishing_punch: Option<super::events::PunchType>,
}

impl FightResult {
    pub fn is_draw(&self) -> bool {
        matches!(self.method, StoppageMethod::Draw(_))
    }
}

/// A fully specified matchup, ready to hand to the combat engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fight {
    pub red: Fighter,
    pub blue: Fighter,
    pub config: FightConfig,
}
