//! Inning Scheduler
//!
//! `pitch()` and everything a pitch can trigger: count bookkeeping,
//! appearance resolution, baserunner advancement, scoring, half-inning
//! and inning flips, and game completion. Split from `mod.rs` so the
//! engine struct stays readable.

use super::at_bat::{
    resolve_pitch, resolve_swing_timing, PitchContext, PitchRolls, TimingContext, TimingRolls,
};
use super::constants::{attribute, home_advantage, rules};
use super::{baserunning, GameEngine, PitchDecision, PitchOutcomeEvent};
use crate::error::{GameError, Result};
use crate::models::{AppearanceEnd, GameEvent, GamePhase, Half, PitchOutcome};

impl GameEngine {
    /// Resolve one pitch and apply every transition it triggers.
    ///
    /// The returned event carries the outcome, any appearance-ending
    /// resolution, the events emitted by this pitch and the
    /// post-transition snapshot.
    pub fn pitch(&mut self, decision: PitchDecision) -> Result<PitchOutcomeEvent> {
        if self.phase != GamePhase::Active {
            return Err(GameError::InvalidState(format!(
                "pitch() in phase {:?}",
                self.phase
            )));
        }

        let (batter_contact, batter_power, pitcher_command) = {
            let batting = self.batting_team();
            let slot = self.batting_slot();
            let batter = batting.batter(slot);
            let pitcher = self.fielding_team().current_pitcher();
            (
                attribute::normalize(batter.attributes.contact),
                attribute::normalize(batter.attributes.power),
                attribute::normalize(pitcher.attributes.pitch_command),
            )
        };

        let is_home_batting = self.is_home_batting();
        let power_modifier = if is_home_batting {
            1.0 + home_advantage::POWER_MODIFIER_BONUS
        } else {
            1.0
        };

        let outcome = match decision {
            PitchDecision::Take | PitchDecision::Swing { timing: None } => {
                let ctx = PitchContext {
                    batter_contact,
                    batter_power,
                    pitcher_command,
                    balls: self.count.balls(),
                    strikes: self.count.strikes(),
                    swing: matches!(decision, PitchDecision::Swing { .. }),
                    power_modifier,
                };
                let rolls = PitchRolls {
                    zone_roll: self.roll(),
                    swing_roll: self.roll(),
                    quality_roll: self.roll(),
                    out_roll: self.roll(),
                };
                resolve_pitch(&ctx, &rolls)
            }
            PitchDecision::Swing {
                timing: Some(delta),
            } => {
                let ctx = TimingContext {
                    batter_contact,
                    batter_power,
                    timing_delta: delta,
                    window_bonus: if is_home_batting {
                        home_advantage::WINDOW_BONUS
                    } else {
                        0.0
                    },
                    power_modifier,
                };
                let rolls = TimingRolls {
                    escalation_roll: self.roll(),
                    out_roll: self.roll(),
                };
                resolve_swing_timing(&ctx, &rolls)
            }
        };

        self.apply_outcome(outcome)
    }

    /// Apply a resolved pitch outcome to the game state. Separated from
    /// the resolution step so transition logic is testable without RNG.
    ///
    /// All state transitions triggered by the pitch run before any event
    /// is emitted, so no emitted snapshot ever shows three outs or a
    /// cap-reaching count.
    pub(crate) fn apply_outcome(&mut self, outcome: PitchOutcome) -> Result<PitchOutcomeEvent> {
        let events_start = self.events.len();
        let batter_idx = (self.batting_slot() % self.batting_team().lineup_size()) as u8;
        let is_home_batting = self.is_home_batting();
        let inning = self.inning;
        let half = self.half;

        // Count bookkeeping dictates the resolution; cap-reaching pitches
        // resolve here so caps are never externally observable.
        let mut resolution: Option<AppearanceEnd> = None;
        match outcome {
            PitchOutcome::Ball => {
                if self.count.record_ball() {
                    resolution = Some(AppearanceEnd::Walk);
                }
            }
            PitchOutcome::CalledStrike | PitchOutcome::SwingingStrike => {
                if self.count.record_strike() {
                    resolution = Some(AppearanceEnd::Strikeout);
                }
            }
            PitchOutcome::Foul => self.count.record_foul(),
            PitchOutcome::InPlayOut(out_type) => {
                resolution = Some(AppearanceEnd::InPlayOut(out_type));
            }
            PitchOutcome::Hit(hit_type) => {
                resolution = Some(AppearanceEnd::Hit(hit_type));
            }
        }

        let mut runs: u8 = 0;
        if let Some(res) = resolution {
            self.count.reset();
            runs = baserunning::advance(&res, &mut self.bases, batter_idx, self.outs)?;
            if runs > 0 {
                if is_home_batting {
                    self.home_score += runs as u32;
                } else {
                    self.away_score += runs as u32;
                }
            }
            if matches!(res, AppearanceEnd::Strikeout | AppearanceEnd::InPlayOut(_)) {
                self.outs += 1;
            }
            self.advance_batting_order();
            log::debug!(
                "appearance resolved: {:?}, {} run(s), {} out(s)",
                res,
                runs,
                self.outs
            );
        }

        // Completion checks run after every run-scoring event and every
        // half transition. A run-scoring pitch can never record the third
        // out (the sacrifice fly is gated below two outs), so walk-off
        // and half-end are mutually exclusive.
        let mut game_end: Option<(bool, bool)> = None;
        if runs > 0 && self.walk_off_pending() {
            log::info!(
                "walk-off: {} lead {}-{} in the bottom of inning {}",
                self.home_team.name,
                self.home_score,
                self.away_score,
                self.inning
            );
            self.complete_game(false);
            game_end = Some((false, true));
        }
        let mut half_ended = false;
        if self.phase == GamePhase::Active && self.outs >= rules::OUTS_PER_HALF {
            half_ended = true;
            game_end = self.end_half_inning();
        }

        // Emission: every event for this pitch carries the post-transition
        // snapshot, in causal order.
        let snapshot = self.snapshot();
        self.emit_event(GameEvent::pitch_result(
            inning,
            half,
            is_home_batting,
            outcome,
            resolution,
            batter_idx,
            runs,
            snapshot,
        ));
        if half_ended {
            self.emit_event(GameEvent::half_inning_end(
                inning,
                half,
                is_home_batting,
                snapshot,
            ));
            if half == Half::Bottom {
                self.emit_event(GameEvent::inning_end(inning, is_home_batting, snapshot));
            }
        }
        if let Some((tie, walk_off)) = game_end {
            self.emit_event(GameEvent::game_end(
                inning,
                half,
                is_home_batting,
                tie,
                walk_off,
                snapshot,
            ));
        }

        Ok(PitchOutcomeEvent {
            outcome,
            resolution,
            runs_scored: runs,
            events: self.events[events_start..].to_vec(),
            snapshot,
        })
    }

    fn batting_slot(&self) -> usize {
        match self.half {
            Half::Top => self.away_batting_slot,
            Half::Bottom => self.home_batting_slot,
        }
    }

    fn advance_batting_order(&mut self) {
        match self.half {
            Half::Top => self.away_batting_slot += 1,
            Half::Bottom => self.home_batting_slot += 1,
        }
    }

    /// Walk-off: the home team takes the lead in the bottom of the
    /// final-or-later inning and the game ends immediately, mid-inning.
    fn walk_off_pending(&self) -> bool {
        self.config.walk_off_enabled
            && self.half == Half::Bottom
            && self.inning >= self.config.regulation_innings
            && self.home_score > self.away_score
    }

    /// Third out recorded: flip the half, clearing bases, outs and count,
    /// then run the completion checks for half and inning boundaries.
    /// Returns `Some((tie, walk_off))` when the game completed here.
    fn end_half_inning(&mut self) -> Option<(bool, bool)> {
        self.outs = 0;
        self.count.reset();
        self.bases.clear();

        match self.half {
            Half::Top => {
                // Home already leads after the away half of the final-or-later
                // inning: the bottom half is never played.
                if self.inning >= self.config.regulation_innings
                    && self.home_score > self.away_score
                {
                    self.complete_game(false);
                    return Some((false, false));
                }
                self.half = Half::Bottom;
                log::info!("middle of inning {}", self.inning);
            }
            Half::Bottom => {
                if self.inning >= self.config.regulation_innings {
                    if self.home_score != self.away_score {
                        self.complete_game(false);
                        return Some((false, false));
                    }
                    if !self.config.extra_innings_allowed {
                        self.complete_game(true);
                        return Some((true, false));
                    }
                    if let Some(cap) = self.config.max_extra_innings {
                        if self.inning >= self.config.regulation_innings + cap {
                            self.complete_game(true);
                            return Some((true, false));
                        }
                    }
                }
                self.inning += 1;
                self.half = Half::Top;
                log::info!("start of inning {}", self.inning);
            }
        }
        None
    }

    fn complete_game(&mut self, tie: bool) {
        self.phase = GamePhase::Complete;
        self.tie = tie;
        self.innings_played = self.inning;
        log::info!(
            "game end: {} {} - {} {} after {} inning(s){}",
            self.away_team.name,
            self.away_score,
            self.home_team.name,
            self.home_score,
            self.innings_played,
            if tie { ", tie" } else { "" }
        );
    }
}
