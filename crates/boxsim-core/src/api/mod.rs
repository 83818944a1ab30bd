//! Thin JSON-facing API: a caller that would rather hand the core a
//! serialized payload than link against its native types gets the same
//! `Fighter`/`FightConfig`/`FightResult` shapes wrapped in a
//! `schema_version`-checked envelope. Every function here is a pure
//! wrapper -- no behavior lives in this module that isn't already on
//! `combat::run_fight_with_tunables` or `Universe`.

use serde::{Deserialize, Serialize};

use crate::combat::{run_fight_with_tunables, Tunables};
use crate::models::events::{EventLog, FightEvent};
use crate::models::fight::{Fight, FightConfig, FightResult};
use crate::models::fighter::Fighter;

const FIGHT_REQUEST_SCHEMA_VERSION: u8 = 1;

/// A single-bout request: two full fighters plus the config to run them
/// under. Deliberately carries complete `Fighter` values rather than ids
/// -- this API has no roster to resolve an id against, unlike the
/// universe-backed CLI paths.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FightRequest {
    pub schema_version: u8,
    pub red: Fighter,
    pub blue: Fighter,
    pub config: FightConfig,
    #[serde(default)]
    pub tunables: Option<Tunables>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FightResponse {
    pub schema_version: u8,
    pub result: FightResult,
    pub events: Vec<FightEvent>,
}

fn err_msg(context: &str, message: impl std::fmt::Display) -> String {
    format!("{context}: {message}")
}

/// Simulate one bout from a JSON `FightRequest`, returning a JSON
/// `FightResponse`. Returns `Result<String, String>` so callers across
/// an FFI or WASM boundary don't need this crate's error types.
pub fn simulate_fight_json(request_json: &str) -> Result<String, String> {
    let request: FightRequest = serde_json::from_str(request_json)
        .map_err(|e| err_msg("invalid JSON request", e))?;

    if request.schema_version != FIGHT_REQUEST_SCHEMA_VERSION {
        return Err(format!(
            "unsupported schema_version {} (expected {})",
            request.schema_version, FIGHT_REQUEST_SCHEMA_VERSION
        ));
    }

    let fight = Fight { red: request.red, blue: request.blue, config: request.config };
    let tunables = request.tunables.unwrap_or_default();

    let mut log = EventLog::default();
    let result = run_fight_with_tunables(&fight, &tunables, &mut log);

    let response = FightResponse {
        schema_version: FIGHT_REQUEST_SCHEMA_VERSION,
        result,
        events: log.events,
    };

    serde_json::to_string(&response).map_err(|e| err_msg("failed to serialize response", e))
}

/// Same as [`simulate_fight_json`] but returns the result and the event
/// log as two separately serialized documents, for callers that want to
/// stream the (usually much larger) event log independently of the
/// headline result.
pub fn simulate_fight_json_with_events(request_json: &str) -> Result<(String, String), String> {
    let request: FightRequest = serde_json::from_str(request_json)
        .map_err(|e| err_msg("invalid JSON request", e))?;

    if request.schema_version != FIGHT_REQUEST_SCHEMA_VERSION {
        return Err(format!(
            "unsupported schema_version {} (expected {})",
            request.schema_version, FIGHT_REQUEST_SCHEMA_VERSION
        ));
    }

    let fight = Fight { red: request.red, blue: request.blue, config: request.config };
    let tunables = request.tunables.unwrap_or_default();

    let mut log = EventLog::default();
    let result = run_fight_with_tunables(&fight, &tunables, &mut log);

    let result_json =
        serde_json::to_string(&result).map_err(|e| err_msg("failed to serialize result", e))?;
    let events_json =
        serde_json::to_string(&log.events).map_err(|e| err_msg("failed to serialize events", e))?;

    Ok((result_json, events_json))
}
