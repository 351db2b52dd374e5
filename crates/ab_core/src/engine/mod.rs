//! Game Simulation Engine
//!
//! Core at-bat and inning simulation. The engine exclusively owns all
//! mutable game state and sequences every transition:
//!
//! - Pitch resolution (probability-roll and timing-window modes)
//! - Count bookkeeping and appearance resolution
//! - Baserunner advancement and scoring
//! - Half-inning, inning and game-completion transitions
//! - Event emission (pitch results, half transitions, game end)
//!
//! ## Architecture
//!
//! - `constants.rs` - named tuning constants
//! - `at_bat.rs` - pure pitch resolution (Context + Rolls in, outcome out)
//! - `count.rs` / `bases.rs` - balls-strikes and base occupancy primitives
//! - `baserunning.rs` - the canonical advancer
//! - `innings.rs` - the scheduler (`pitch()` and everything it triggers)
//!
//! All randomness flows from one `ChaCha8Rng` seeded from the plan. The
//! engine pre-draws rolls and hands them to the pure resolvers, so a seed
//! plus a decision sequence replays identically.

pub mod at_bat;
pub mod bases;
pub mod baserunning;
pub mod constants;
pub mod count;
pub mod innings;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};
use crate::models::{
    AppearanceEnd, GameEvent, GamePhase, GameResult, GameSnapshot, Half, PitchOutcome, Team,
};
use bases::BaseState;
use constants::auto_swing;
use count::CountTracker;

/// Safety bound for the internal full-game driver.
const MAX_PITCHES_PER_GAME: u32 = 100_000;

fn default_regulation_innings() -> u32 {
    9
}

fn default_enabled() -> bool {
    true
}

/// Game rules configuration. All fields default to the regulation game.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameConfig {
    #[serde(default = "default_regulation_innings")]
    pub regulation_innings: u32,
    #[serde(default = "default_enabled")]
    pub extra_innings_allowed: bool,
    #[serde(default = "default_enabled")]
    pub walk_off_enabled: bool,
    /// Extra innings beyond regulation before a tied game is called.
    /// `None` plays on until decided.
    #[serde(default)]
    pub max_extra_innings: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            regulation_innings: default_regulation_innings(),
            extra_innings_allowed: true,
            walk_off_enabled: true,
            max_extra_innings: None,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.regulation_innings == 0 {
            return Err("regulation_innings must be at least 1".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct GamePlan {
    pub home_team: Team,
    pub away_team: Team,
    pub seed: u64,
    pub config: GameConfig,
}

/// Host decision for one pitch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum PitchDecision {
    Take,
    /// `timing` switches the resolver to timing-window mode; `None` uses
    /// the probability-roll mode.
    Swing { timing: Option<f32> },
}

/// What one `pitch()` call produced.
#[derive(Debug, Clone, PartialEq)]
pub struct PitchOutcomeEvent {
    pub outcome: PitchOutcome,
    /// Set when the pitch ended the plate appearance
    pub resolution: Option<AppearanceEnd>,
    pub runs_scored: u8,
    /// Events emitted by this pitch, in emission order
    pub events: Vec<GameEvent>,
    /// State after all transitions triggered by this pitch
    pub snapshot: GameSnapshot,
}

pub struct GameEngine {
    rng: ChaCha8Rng,
    /// Original seed, kept for diagnostics
    original_seed: u64,
    pub(crate) home_team: Team,
    pub(crate) away_team: Team,
    pub(crate) config: GameConfig,

    pub(crate) phase: GamePhase,
    pub(crate) inning: u32,
    pub(crate) half: Half,
    pub(crate) outs: u8,
    pub(crate) count: CountTracker,
    pub(crate) bases: BaseState,
    pub(crate) home_score: u32,
    pub(crate) away_score: u32,
    /// Next batter position in each cyclic order
    pub(crate) home_batting_slot: usize,
    pub(crate) away_batting_slot: usize,

    pub(crate) tie: bool,
    pub(crate) innings_played: u32,
    pub(crate) events: Vec<GameEvent>,
}

impl GameEngine {
    pub fn new(plan: GamePlan) -> Result<Self> {
        plan.home_team
            .validate()
            .map_err(GameError::InvalidConfig)?;
        plan.away_team
            .validate()
            .map_err(GameError::InvalidConfig)?;
        plan.config.validate().map_err(GameError::InvalidConfig)?;

        let original_seed = plan.seed;
        let rng = ChaCha8Rng::seed_from_u64(original_seed);

        Ok(Self {
            rng,
            original_seed,
            home_team: plan.home_team,
            away_team: plan.away_team,
            config: plan.config,
            phase: GamePhase::Pregame,
            inning: 1,
            half: Half::Top,
            outs: 0,
            count: CountTracker::new(),
            bases: BaseState::new(),
            home_score: 0,
            away_score: 0,
            home_batting_slot: 0,
            away_batting_slot: 0,
            tie: false,
            innings_played: 0,
            events: Vec::new(),
        })
    }

    pub fn seed(&self) -> u64 {
        self.original_seed
    }

    /// Move from `Pregame` to `Active`. Calling twice is an error.
    pub fn start(&mut self) -> Result<()> {
        if self.phase != GamePhase::Pregame {
            return Err(GameError::InvalidState(format!(
                "start() in phase {:?}",
                self.phase
            )));
        }
        self.phase = GamePhase::Active;
        log::info!(
            "game start: {} @ {} (seed {})",
            self.away_team.name,
            self.home_team.name,
            self.original_seed
        );
        Ok(())
    }

    /// Idempotent immutable read of the current state.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            inning: self.inning,
            half: self.half,
            outs: self.outs,
            balls: self.count.balls(),
            strikes: self.count.strikes(),
            bases: self.bases.occupancy(),
            home_score: self.home_score,
            away_score: self.away_score,
            phase: self.phase,
        }
    }

    /// Drain the accumulated event log.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Drive the whole game with the internal count-aware swing heuristic.
    pub fn simulate(&mut self) -> Result<GameResult> {
        if self.phase == GamePhase::Pregame {
            self.start()?;
        }

        let mut pitches: u32 = 0;
        while self.phase == GamePhase::Active {
            let decision = self.auto_decision();
            self.pitch(decision)?;
            pitches += 1;
            if pitches > MAX_PITCHES_PER_GAME {
                return Err(GameError::InvariantViolation(
                    "game failed to terminate".to_string(),
                ));
            }
        }

        Ok(GameResult {
            home_score: self.home_score,
            away_score: self.away_score,
            innings_played: self.innings_played,
            tie: self.tie,
            events: self.take_events(),
        })
    }

    /// Count-aware swing heuristic: protect with two strikes, take on
    /// three-ball counts. Strategy shading only, never contact physics.
    fn auto_decision(&mut self) -> PitchDecision {
        let swing_rate = (auto_swing::BASE_RATE
            + auto_swing::PER_STRIKE_BONUS * self.count.strikes() as f32
            - auto_swing::PER_BALL_PENALTY * self.count.balls() as f32)
            .clamp(auto_swing::MIN_RATE, auto_swing::MAX_RATE);

        if self.rng.gen::<f32>() < swing_rate {
            PitchDecision::Swing { timing: None }
        } else {
            PitchDecision::Take
        }
    }

    pub(crate) fn roll(&mut self) -> f32 {
        self.rng.gen::<f32>()
    }

    pub(crate) fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub(crate) fn batting_team(&self) -> &Team {
        match self.half {
            Half::Top => &self.away_team,
            Half::Bottom => &self.home_team,
        }
    }

    pub(crate) fn fielding_team(&self) -> &Team {
        match self.half {
            Half::Top => &self.home_team,
            Half::Bottom => &self.away_team,
        }
    }

    pub(crate) fn is_home_batting(&self) -> bool {
        self.half == Half::Bottom
    }
}
