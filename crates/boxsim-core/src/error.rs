//! Crate-wide error taxonomy.
//!
//! Splits into a top-level error enum and subsystem-local enums (see
//! `save::error::SaveError`): callers mostly see `BoxsimError`, but
//! persistence failures carry their own richer type that converts in via
//! `#[from]`.

use thiserror::Error;

use crate::save::SaveError;

#[derive(Error, Debug)]
pub enum BoxsimError {
    /// Invalid fighter/fight configuration. Surfaced to the caller; no
    /// partial `Fighter` or `Fight` is ever constructed from a failed load.
    #[error("configuration error: {0}")]
    Config(String),

    /// An internal invariant was violated mid-fight (e.g. both fighters
    /// DOWN at once). The fight is terminated as NO_CONTEST rather than
    /// propagating past `run_fight`; this variant exists for the rare case
    /// callers need to inspect why.
    #[error("simulation invariant violated: {0}")]
    Simulation(String),

    /// Autosave or load failed. The in-memory `Universe` remains
    /// authoritative; the next successful autosave reconciles.
    #[error("persistence error: {0}")]
    Persistence(#[from] SaveError),

    /// A controller produced an unrepresentable intent. Never surfaced as
    /// a hard failure to simulation callers -- the engine degrades to
    /// `Intent::Rest` for that tick and logs at debug level. Retained as a
    /// variant so test harnesses can assert it never leaks.
    #[error("controller produced an invalid intent: {0}")]
    RecoverableController(String),
}

pub type Result<T> = std::result::Result<T, BoxsimError>;
