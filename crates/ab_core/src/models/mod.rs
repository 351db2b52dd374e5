pub mod events;
pub mod game_result;
pub mod player;
pub mod team;

pub use events::{
    AppearanceEnd, EventDetails, EventType, GameEvent, HitType, OutType, PitchOutcome,
};
pub use game_result::{GamePhase, GameResult, GameSnapshot, Half};
pub use player::{Player, PlayerAttributes, Role};
pub use team::{default_team, Team};
