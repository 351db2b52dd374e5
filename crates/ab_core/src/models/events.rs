use serde::{Deserialize, Serialize};

use super::game_result::{GameSnapshot, Half};

/// How a batted ball that stayed in play was converted into an out.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum OutType {
    Groundout,
    Flyout,
    Lineout,
}

/// Bases awarded by a clean hit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum HitType {
    Single,
    Double,
    Triple,
    HomeRun,
}

/// Result of a single pitch, before count bookkeeping is applied.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PitchOutcome {
    Ball,
    CalledStrike,
    SwingingStrike,
    Foul,
    InPlayOut(OutType),
    Hit(HitType),
}

impl PitchOutcome {
    /// Whether this pitch ends the plate appearance by itself
    /// (count-cap resolutions are decided by the tracker, not here).
    pub fn ends_appearance(&self) -> bool {
        matches!(self, PitchOutcome::InPlayOut(_) | PitchOutcome::Hit(_))
    }
}

/// Terminal resolution of a plate appearance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AppearanceEnd {
    Walk,
    Strikeout,
    Hit(HitType),
    InPlayOut(OutType),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameEvent {
    pub inning: u32,
    pub half: Half,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub is_home_batting: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<EventDetails>,
    /// State after the event was applied
    pub snapshot: GameSnapshot,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    PitchResult,
    HalfInningEnd,
    InningEnd,
    GameEnd,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct EventDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<PitchOutcome>,
    /// Set when the pitch ended the plate appearance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<AppearanceEnd>,
    /// Lineup index of the batter at the plate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batter: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runs_scored: Option<u8>,
    /// Set on game_end when the game finished level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tie: Option<bool>,
    /// Set on game_end when the home team won mid-inning
    #[serde(skip_serializing_if = "Option::is_none")]
    pub walk_off: Option<bool>,
}

impl GameEvent {
    pub fn pitch_result(
        inning: u32,
        half: Half,
        is_home_batting: bool,
        outcome: PitchOutcome,
        resolution: Option<AppearanceEnd>,
        batter: u8,
        runs_scored: u8,
        snapshot: GameSnapshot,
    ) -> Self {
        Self {
            inning,
            half,
            event_type: EventType::PitchResult,
            is_home_batting,
            details: Some(EventDetails {
                outcome: Some(outcome),
                resolution,
                batter: Some(batter),
                runs_scored: if runs_scored > 0 {
                    Some(runs_scored)
                } else {
                    None
                },
                ..Default::default()
            }),
            snapshot,
        }
    }

    pub fn half_inning_end(
        inning: u32,
        half: Half,
        is_home_batting: bool,
        snapshot: GameSnapshot,
    ) -> Self {
        Self {
            inning,
            half,
            event_type: EventType::HalfInningEnd,
            is_home_batting,
            details: None,
            snapshot,
        }
    }

    pub fn inning_end(inning: u32, is_home_batting: bool, snapshot: GameSnapshot) -> Self {
        Self {
            inning,
            half: Half::Bottom,
            event_type: EventType::InningEnd,
            is_home_batting,
            details: None,
            snapshot,
        }
    }

    pub fn game_end(
        inning: u32,
        half: Half,
        is_home_batting: bool,
        tie: bool,
        walk_off: bool,
        snapshot: GameSnapshot,
    ) -> Self {
        Self {
            inning,
            half,
            event_type: EventType::GameEnd,
            is_home_batting,
            details: Some(EventDetails {
                tie: if tie { Some(true) } else { None },
                walk_off: if walk_off { Some(true) } else { None },
                ..Default::default()
            }),
            snapshot,
        }
    }
}
