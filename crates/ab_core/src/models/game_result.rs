use serde::{Deserialize, Serialize};

use super::events::GameEvent;

/// Which side of the inning is batting. Away bats the top, home the bottom.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Half {
    Top,
    Bottom,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    Pregame,
    Active,
    Complete,
}

/// Immutable read of the full game state. Observable counts are always
/// below their caps: cap-reaching pitches and third outs resolve before
/// any snapshot is taken.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameSnapshot {
    pub inning: u32,
    pub half: Half,
    pub outs: u8,
    pub balls: u8,
    pub strikes: u8,
    /// Lineup index of the occupant of first, second, third
    pub bases: [Option<u8>; 3],
    pub home_score: u32,
    pub away_score: u32,
    pub phase: GamePhase,
}

/// Final line of a completed game.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameResult {
    pub home_score: u32,
    pub away_score: u32,
    /// Innings in which at least one pitch was thrown
    pub innings_played: u32,
    pub tie: bool,
    pub events: Vec<GameEvent>,
}

impl GameResult {
    pub fn winner(&self) -> Option<&'static str> {
        if self.tie || self.home_score == self.away_score {
            None
        } else if self.home_score > self.away_score {
            Some("home")
        } else {
            Some("away")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_serde() {
        assert_eq!(serde_json::to_string(&Half::Top).unwrap(), "\"top\"");
        let h: Half = serde_json::from_str("\"bottom\"").unwrap();
        assert_eq!(h, Half::Bottom);
    }

    #[test]
    fn test_winner() {
        let result = GameResult {
            home_score: 4,
            away_score: 3,
            innings_played: 9,
            tie: false,
            events: vec![],
        };
        assert_eq!(result.winner(), Some("home"));

        let tied = GameResult {
            home_score: 2,
            away_score: 2,
            innings_played: 12,
            tie: true,
            events: vec![],
        };
        assert_eq!(tied.winner(), None);
    }
}
