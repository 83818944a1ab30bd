//! Fight event stream. Closed tagged-variant enum, each variant carrying
//! its own round and simulation-time so a consumer never needs to thread
//! ambient time state. Event construction lives on the engine directly
//! (no separate generator type) since every event already corresponds to
//! a specific resolver outcome.

use serde::{Deserialize, Serialize};

use super::fight::StoppageMethod;
use super::fight_state::{EffectKind, FoulKind};

/// Which fighter a side-specific event concerns. Avoids stringly-typed
/// corner identifiers in the event stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Corner {
    Red,
    Blue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PunchType {
    Jab,
    Hook,
    Cross,
    Uppercut,
    PowerBody,
}

impl PunchType {
    /// Explicit power ordering among the head shots: a jab is the
    /// lightest, a hook heavier, a cross heavier still, an uppercut the
    /// heaviest. Body shots aren't ranked against head shots -- they
    /// spend from a separate damage pool entirely.
    pub fn power_rank(self) -> u8 {
        match self {
            PunchType::Jab => 0,
            PunchType::Hook => 1,
            PunchType::Cross => 2,
            PunchType::Uppercut => 3,
            PunchType::PowerBody => 0,
        }
    }

    pub fn is_head(self) -> bool {
        !matches!(self, PunchType::PowerBody)
    }

    pub fn is_power(self) -> bool {
        !matches!(self, PunchType::Jab)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    pub round: u8,
    pub tick: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FightEventKind {
    FightStart,
    RoundStart,
    Tick,
    PunchLanded { corner: Corner, punch: PunchType, damage: f32 },
    Missed { corner: Corner, punch: PunchType },
    Hurt { corner: Corner },
    Knockdown { corner: Corner, count_reached: u8 },
    Count { corner: Corner, count: u8 },
    Recovered { corner: Corner },
    Foul { corner: Corner, kind: FoulKind },
    Warning { corner: Corner, kind: FoulKind },
    PointDeduction { corner: Corner, points: u8 },
    MomentumShift { corner: Corner, effect: EffectKind },
    RoundEnd { round_scores: (u8, u8) },
    FightEnd { method: StoppageMethod },
    SpeedChange { multiplier: f32 },
}

/// One event in a fight's chronological stream. `SimTime` is attached to
/// every variant uniformly rather than per-variant, since every consumer
/// needs it regardless of kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FightEvent {
    pub time: SimTime,
    pub kind: FightEventKind,
}

impl FightEvent {
    pub fn new(time: SimTime, kind: FightEventKind) -> Self {
        Self { time, kind }
    }
}

/// Consumers that want to observe events as they're produced implement
/// this rather than collecting the full `Vec<FightEvent>` -- the same
/// callback shape the week processor uses for progress, so a UI layer
/// can stream a live fight instead of waiting on completion.
pub trait EventSink {
    fn on_event(&mut self, event: &FightEvent);
}

/// An `EventSink` that just accumulates everything, the default used by
/// `run_fight` when the caller doesn't need streaming.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    pub events: Vec<FightEvent>,
}

impl EventSink for EventLog {
    fn on_event(&mut self, event: &FightEvent) {
        self.events.push(event.clone());
    }
}
