//! Data model: L0 static/mutable fighter state plus the value types shared
//! by every other layer (fight config/result, events, sanctioning,
//! replay). This module re-exports its leaf types so callers don't need
//! to reach into submodules.

pub mod events;
pub mod fight;
pub mod fight_state;
pub mod fighter;
pub mod history;
pub mod replay;
pub mod sanctioning;

pub use events::{Corner, EventLog, EventSink, FightEvent, FightEventKind, PunchType, SimTime};
pub use fight::{
    DecisionKind, DrawKind, Fight, FightConfig, FightResult, JudgeProfile, RoundScore, Scorecard,
    StoppageMethod, TkoReason,
};
pub use fight_state::{
    CombatState, Effect, EffectKind, FighterState, FoulKind, FoulRecord, Position, PunchStats,
    StackingPolicy,
};
pub use fighter::{
    DefenseAttributes, DefensiveSubStyle, Fighter, FighterCareerStats, MentalAttributes,
    OffensiveSubStyle, PowerAttributes, PrimaryStyle, SpeedAttributes, Stance,
    StaminaAttributes, Style, TechnicalAttributes,
};
pub use history::{FightHistoryEntry, Outcome};
pub use replay::ReplaySnapshot;
pub use sanctioning::{Division, RankingEntry, Rankings, SanctioningBody, Title};
