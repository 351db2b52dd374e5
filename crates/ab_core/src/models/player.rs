use serde::{Deserialize, Serialize};

/// Role a player occupies within a lineup.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Batter,
    Pitcher,
    Fielder,
}

/// Bounded 0-100 ratings, read-only for the duration of a game.
/// Out-of-range values are clamped at normalization time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerAttributes {
    /// Chance to put a swing on the ball
    pub contact: u8,
    /// Quality of contact, drives extra-base escalation
    pub power: u8,
    /// Baserunning speed
    pub speed: u8,
    /// Pitcher's ability to locate in the zone
    pub pitch_command: u8,
    /// Defensive conversion of batted balls
    pub fielding: u8,
}

impl Default for PlayerAttributes {
    fn default() -> Self {
        Self {
            contact: 50,
            power: 50,
            speed: 50,
            pitch_command: 50,
            fielding: 50,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub name: String,
    pub role: Role,
    #[serde(default)]
    pub attributes: PlayerAttributes,
}

impl Player {
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
            attributes: PlayerAttributes::default(),
        }
    }

    pub fn with_attributes(
        name: impl Into<String>,
        role: Role,
        attributes: PlayerAttributes,
    ) -> Self {
        Self {
            name: name.into(),
            role,
            attributes,
        }
    }
}
