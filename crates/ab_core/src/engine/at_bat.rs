//! Plate appearance resolution logic
//!
//! This module provides pure functions for resolving pitches.
//! All randomness is passed in as parameters via Roll structs.

use super::constants::{bands, called_pitch, contact, hit_table, out_table, timing};
use crate::models::{HitType, OutType, PitchOutcome};

// ============================================================================
// Probability-Roll Mode
// ============================================================================

/// Pitch resolution context. Attributes arrive pre-normalized to 0.0-1.0.
#[derive(Debug, Clone)]
pub struct PitchContext {
    pub batter_contact: f32,
    pub batter_power: f32,
    pub pitcher_command: f32,

    /// Current count, strategy shading only
    pub balls: u8,
    pub strikes: u8,

    pub swing: bool,
    /// Situational power modifier (1.0 = neutral, home batters get a bonus)
    pub power_modifier: f32,
}

/// Random values needed for one pitch
#[derive(Debug, Clone)]
pub struct PitchRolls {
    /// Taken pitch: called strike vs ball
    pub zone_roll: f32,
    /// Swing: partitioned into foul / out / hit / whiff bands
    pub swing_roll: f32,
    /// Hit band: quality against the hit table
    pub quality_roll: f32,
    /// Out band: groundout / flyout / lineout split
    pub out_roll: f32,
}

/// Composite contact chance for a swing, clamped.
pub fn contact_chance(batter_contact: f32, pitcher_command: f32) -> f32 {
    (contact::BATTING_WEIGHT * batter_contact - contact::PITCHING_WEIGHT * pitcher_command
        + contact::BASE_OFFSET)
        .clamp(contact::MIN_CHANCE, contact::MAX_CHANCE)
}

/// Called strike probability for a taken pitch.
///
/// The count shades pitcher intent only: behind in the count the pitcher
/// is forced over the plate, ahead he can waste one.
pub fn called_strike_probability(pitcher_command: f32, balls: u8, strikes: u8) -> f32 {
    (called_pitch::ZONE_BASE + called_pitch::COMMAND_WEIGHT * pitcher_command
        + called_pitch::PER_BALL_PRESSURE * balls as f32
        - called_pitch::PER_STRIKE_RELIEF * strikes as f32)
        .clamp(called_pitch::MIN_STRIKE, called_pitch::MAX_STRIKE)
}

/// Resolve one pitch in probability-roll mode (pure function).
pub fn resolve_pitch(ctx: &PitchContext, rolls: &PitchRolls) -> PitchOutcome {
    if !ctx.swing {
        let strike_prob = called_strike_probability(ctx.pitcher_command, ctx.balls, ctx.strikes);
        return if rolls.zone_roll < strike_prob {
            PitchOutcome::CalledStrike
        } else {
            PitchOutcome::Ball
        };
    }

    let chance = contact_chance(ctx.batter_contact, ctx.pitcher_command);

    // Ordered bands over the unit interval: foul, in-play out, hit, then
    // the remainder is a swinging strike. Each band width scales with the
    // composite contact chance.
    let foul_bound = chance * bands::FOUL_SHARE;
    let out_bound = foul_bound + chance * bands::OUT_SHARE;
    let hit_bound = out_bound + chance * bands::HIT_SHARE;

    if rolls.swing_roll < foul_bound {
        PitchOutcome::Foul
    } else if rolls.swing_roll < out_bound {
        PitchOutcome::InPlayOut(resolve_out_type(rolls.out_roll))
    } else if rolls.swing_roll < hit_bound {
        PitchOutcome::Hit(resolve_hit_type(
            rolls.quality_roll,
            ctx.batter_power,
            ctx.power_modifier,
        ))
    } else {
        PitchOutcome::SwingingStrike
    }
}

fn resolve_hit_type(quality_roll: f32, batter_power: f32, power_modifier: f32) -> HitType {
    let powered = (batter_power * power_modifier).min(1.0);
    let quality = quality_roll * (1.0 - hit_table::POWER_MIX) + powered * hit_table::POWER_MIX;

    if quality >= hit_table::HOME_RUN_THRESHOLD {
        HitType::HomeRun
    } else if quality >= hit_table::TRIPLE_THRESHOLD {
        HitType::Triple
    } else if quality >= hit_table::DOUBLE_THRESHOLD {
        HitType::Double
    } else {
        HitType::Single
    }
}

fn resolve_out_type(out_roll: f32) -> OutType {
    if out_roll < out_table::GROUNDOUT_CUM {
        OutType::Groundout
    } else if out_roll < out_table::FLYOUT_CUM {
        OutType::Flyout
    } else {
        OutType::Lineout
    }
}

// ============================================================================
// Timing-Window Mode
// ============================================================================

/// Swing timing context. `timing_delta` is the host-supplied offset from
/// the ideal contact instant; sign does not matter.
#[derive(Debug, Clone)]
pub struct TimingContext {
    pub batter_contact: f32,
    pub batter_power: f32,
    pub timing_delta: f32,
    /// Situational window widening (home batters get a small bonus)
    pub window_bonus: f32,
    pub power_modifier: f32,
}

/// Random values needed for one timed swing
#[derive(Debug, Clone)]
pub struct TimingRolls {
    /// Power-gated escalation within a window
    pub escalation_roll: f32,
    /// Contact-only window: groundout / flyout / lineout split
    pub out_roll: f32,
}

/// Nested half-widths (perfect, solid, contact) for a batter.
pub fn window_half_widths(batter_contact: f32, window_bonus: f32) -> (f32, f32, f32) {
    (
        timing::PERFECT_BASE + timing::PERFECT_RANGE * batter_contact + window_bonus,
        timing::SOLID_BASE + timing::SOLID_RANGE * batter_contact + window_bonus,
        timing::CONTACT_BASE + timing::CONTACT_RANGE * batter_contact + window_bonus,
    )
}

/// Resolve one timed swing (pure function).
///
/// Perfect contact is a double with power-gated escalation to a triple
/// and, more rarely, a home run; solid contact is a single with a smaller
/// escalation to a double; the outer window produces an in-play out.
pub fn resolve_swing_timing(ctx: &TimingContext, rolls: &TimingRolls) -> PitchOutcome {
    let (perfect, solid, contact_w) = window_half_widths(ctx.batter_contact, ctx.window_bonus);
    let delta = ctx.timing_delta.abs();

    let powered = (ctx.batter_power * ctx.power_modifier).min(1.0);
    let escalation =
        rolls.escalation_roll * (1.0 - hit_table::POWER_MIX) + powered * hit_table::POWER_MIX;

    if delta <= perfect {
        if escalation >= timing::PERFECT_HOME_RUN_GATE {
            PitchOutcome::Hit(HitType::HomeRun)
        } else if escalation >= timing::PERFECT_TRIPLE_GATE {
            PitchOutcome::Hit(HitType::Triple)
        } else {
            PitchOutcome::Hit(HitType::Double)
        }
    } else if delta <= solid {
        if escalation >= timing::SOLID_DOUBLE_GATE {
            PitchOutcome::Hit(HitType::Double)
        } else {
            PitchOutcome::Hit(HitType::Single)
        }
    } else if delta <= contact_w {
        PitchOutcome::InPlayOut(resolve_out_type(rolls.out_roll))
    } else {
        PitchOutcome::SwingingStrike
    }
}
