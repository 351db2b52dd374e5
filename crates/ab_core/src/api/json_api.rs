//! String-in / string-out JSON facade
//!
//! Transport-independent entry point for hosts that cannot link the
//! engine types directly. Requests and responses are versioned with
//! `schema_version`; serde failures surface as `InvalidConfig`.

use serde::{Deserialize, Serialize};

use crate::engine::{GameConfig, GameEngine, GamePlan};
use crate::error::{GameError, Result};
use crate::models::{GameEvent, Team};
use crate::SCHEMA_VERSION;

#[derive(Debug, Deserialize)]
pub struct GameRequest {
    pub schema_version: u8,
    pub seed: u64,
    pub home_team: Team,
    pub away_team: Team,
    #[serde(default)]
    pub config: Option<GameConfig>,
}

#[derive(Debug, Serialize)]
pub struct GameResponse {
    pub schema_version: u8,
    pub home_score: u32,
    pub away_score: u32,
    pub innings_played: u32,
    pub tie: bool,
    pub events: Vec<GameEvent>,
}

/// Simulate a full game from a JSON request, returning the JSON result.
pub fn simulate_game_json(request_json: &str) -> Result<String> {
    let request: GameRequest = serde_json::from_str(request_json)
        .map_err(|e| GameError::InvalidConfig(format!("invalid JSON request: {}", e)))?;

    if request.schema_version != SCHEMA_VERSION {
        return Err(GameError::InvalidConfig(format!(
            "unsupported schema version: {}",
            request.schema_version
        )));
    }

    let GameRequest {
        seed,
        home_team,
        away_team,
        config,
        ..
    } = request;

    let mut engine = GameEngine::new(GamePlan {
        home_team,
        away_team,
        seed,
        config: config.unwrap_or_default(),
    })?;
    let result = engine.simulate()?;

    let response = GameResponse {
        schema_version: SCHEMA_VERSION,
        home_score: result.home_score,
        away_score: result.away_score,
        innings_played: result.innings_played,
        tie: result.tie,
        events: result.events,
    };

    serde_json::to_string(&response)
        .map_err(|e| GameError::InvalidConfig(format!("response serialization failed: {}", e)))
}
