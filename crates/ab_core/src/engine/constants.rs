//! Tuning constants for at-bat and inning simulation
//!
//! All banding thresholds, band shares and window widths live here as
//! named constants. Resolution code never carries inline magic numbers.

// ============================================================
// Attribute Normalization
// ============================================================

/// Attribute normalization (0-100 ratings to 0.0-1.0)
pub mod attribute {
    /// Rating scale maximum
    pub const MAX: f32 = 100.0;

    /// Normalize a 0-100 rating to 0.0-1.0
    #[inline]
    pub fn normalize(value: u8) -> f32 {
        (value as f32 / MAX).clamp(0.0, 1.0)
    }
}

// ============================================================
// League Rules
// ============================================================

/// Fixed rule counts
pub mod rules {
    /// Balls that force a walk
    pub const BALLS_PER_WALK: u8 = 4;
    /// Strikes that complete a strikeout
    pub const STRIKES_PER_OUT: u8 = 3;
    /// Outs that end a half-inning
    pub const OUTS_PER_HALF: u8 = 3;
    /// Occupiable bases (first, second, third)
    pub const BASE_COUNT: usize = 3;
}

// ============================================================
// Contact Model (probability-roll mode)
// ============================================================

/// Composite contact chance on a swing
pub mod contact {
    /// Batter contact attribute weight
    pub const BATTING_WEIGHT: f32 = 0.5;
    /// Pitcher command attribute weight (subtracted)
    pub const PITCHING_WEIGHT: f32 = 0.2;
    /// Baseline added before clamping
    pub const BASE_OFFSET: f32 = 0.45;
    /// Floor so even overmatched batters touch the ball sometimes
    pub const MIN_CHANCE: f32 = 0.10;
    /// Ceiling so elite batters still swing through some pitches
    pub const MAX_CHANCE: f32 = 0.92;
}

/// Swing roll band shares. Each band's width is the composite contact
/// chance times its share; the remainder of the unit interval is a
/// swinging strike. Shares sum to 1.0.
pub mod bands {
    /// Foul ball share of contact
    pub const FOUL_SHARE: f32 = 0.25;
    /// In-play out share of contact
    pub const OUT_SHARE: f32 = 0.40;
    /// Clean hit share of contact
    pub const HIT_SHARE: f32 = 0.35;
}

/// Hit quality thresholds. The quality roll is mixed with the batter's
/// power (and situational modifier) before comparison.
pub mod hit_table {
    /// Quality at or above this is a home run
    pub const HOME_RUN_THRESHOLD: f32 = 0.95;
    /// Quality at or above this is a triple
    pub const TRIPLE_THRESHOLD: f32 = 0.85;
    /// Quality at or above this is a double
    pub const DOUBLE_THRESHOLD: f32 = 0.65;
    /// Power contribution to the quality mix
    pub const POWER_MIX: f32 = 0.35;
}

/// In-play out distribution (groundout / flyout / lineout)
pub mod out_table {
    /// Groundout cumulative bound
    pub const GROUNDOUT_CUM: f32 = 0.40;
    /// Flyout cumulative bound (groundout + flyout)
    pub const FLYOUT_CUM: f32 = 0.80;
    // Lineout takes the remaining 0.20
}

// ============================================================
// Called Pitch (no swing)
// ============================================================

/// Called strike probability for a taken pitch
pub mod called_pitch {
    /// Zone rate for a command-less pitcher
    pub const ZONE_BASE: f32 = 0.35;
    /// Command attribute weight
    pub const COMMAND_WEIGHT: f32 = 0.30;
    /// Zone-pressure shading per ball in the count (pitcher forced over)
    pub const PER_BALL_PRESSURE: f32 = 0.05;
    /// Zone-expansion shading per strike in the count (pitcher can waste)
    pub const PER_STRIKE_RELIEF: f32 = 0.04;
    /// Called strike probability floor
    pub const MIN_STRIKE: f32 = 0.10;
    /// Called strike probability ceiling
    pub const MAX_STRIKE: f32 = 0.85;
}

// ============================================================
// Timing Windows (timing-window mode)
// ============================================================

/// Symmetric swing-timing windows around zero delta. Widths are
/// half-widths; perfect sits inside solid sits inside contact.
pub mod timing {
    /// Perfect window half-width for a contact-less batter
    pub const PERFECT_BASE: f32 = 0.03;
    /// Perfect window growth with contact attribute
    pub const PERFECT_RANGE: f32 = 0.05;
    /// Solid window half-width base
    pub const SOLID_BASE: f32 = 0.10;
    /// Solid window growth with contact attribute
    pub const SOLID_RANGE: f32 = 0.10;
    /// Contact window half-width base
    pub const CONTACT_BASE: f32 = 0.25;
    /// Contact window growth with contact attribute
    pub const CONTACT_RANGE: f32 = 0.15;

    /// Perfect contact escalation: power mix at or above this upgrades
    /// the double to a triple
    pub const PERFECT_TRIPLE_GATE: f32 = 0.60;
    /// Rarer escalation: power mix at or above this upgrades to a home run
    pub const PERFECT_HOME_RUN_GATE: f32 = 0.85;
    /// Solid contact escalation: power mix at or above this upgrades the
    /// single to a double
    pub const SOLID_DOUBLE_GATE: f32 = 0.75;
}

// ============================================================
// Situational Modifiers
// ============================================================

/// Home advantage bonuses
pub mod home_advantage {
    /// Additive power modifier for home batters
    pub const POWER_MODIFIER_BONUS: f32 = 0.05;
    /// Additive timing window bonus for home batters
    pub const WINDOW_BONUS: f32 = 0.01;
}

// ============================================================
// Auto-Swing Heuristic (full-game simulation)
// ============================================================

/// Count-aware swing decision shading used by the internal driver.
/// Count affects strategy weighting only, never contact physics.
pub mod auto_swing {
    /// Baseline swing probability on a neutral count
    pub const BASE_RATE: f32 = 0.47;
    /// Added per strike (protect mode with two strikes)
    pub const PER_STRIKE_BONUS: f32 = 0.16;
    /// Subtracted per ball (take mode ahead in the count)
    pub const PER_BALL_PENALTY: f32 = 0.09;
    /// Swing probability floor
    pub const MIN_RATE: f32 = 0.15;
    /// Swing probability ceiling
    pub const MAX_RATE: f32 = 0.95;
}
