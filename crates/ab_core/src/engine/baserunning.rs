//! Canonical baserunner advancement
//!
//! One advancer owns every movement rule. Runner positions only increase
//! within a single advancement, and each advancement conserves runners:
//! everyone who was on base either stays, moves up, or scores.

use super::bases::{Base, BaseState};
use crate::error::{GameError, Result};
use crate::models::{AppearanceEnd, HitType, OutType};

/// Apply an appearance-ending outcome to the bases. Returns the runs
/// scored by the batting team. `outs` is the count before this outcome
/// is recorded; it gates the sacrifice fly.
pub fn advance(outcome: &AppearanceEnd, bases: &mut BaseState, batter: u8, outs: u8) -> Result<u8> {
    let before = bases.occupied_count();
    let mut runs: u8 = 0;
    let mut batter_out = false;

    match outcome {
        AppearanceEnd::Walk => {
            // Force chain: only runners pushed by the batter move.
            if bases.is_occupied(Base::First) {
                if bases.is_occupied(Base::Second) {
                    if bases.is_occupied(Base::Third) {
                        bases.take(Base::Third);
                        runs += 1;
                    }
                    if let Some(runner) = bases.take(Base::Second) {
                        bases.place(Base::Third, runner)?;
                    }
                }
                if let Some(runner) = bases.take(Base::First) {
                    bases.place(Base::Second, runner)?;
                }
            }
            bases.place(Base::First, batter)?;
        }
        AppearanceEnd::Strikeout => {
            batter_out = true;
        }
        AppearanceEnd::Hit(HitType::Single) => {
            // Second moves up but never scores on a single.
            if bases.take(Base::Third).is_some() {
                runs += 1;
            }
            if let Some(runner) = bases.take(Base::Second) {
                bases.place(Base::Third, runner)?;
            }
            if let Some(runner) = bases.take(Base::First) {
                bases.place(Base::Second, runner)?;
            }
            bases.place(Base::First, batter)?;
        }
        AppearanceEnd::Hit(HitType::Double) => {
            if bases.take(Base::Third).is_some() {
                runs += 1;
            }
            if bases.take(Base::Second).is_some() {
                runs += 1;
            }
            if let Some(runner) = bases.take(Base::First) {
                bases.place(Base::Third, runner)?;
            }
            bases.place(Base::Second, batter)?;
        }
        AppearanceEnd::Hit(HitType::Triple) => {
            runs += score_all(bases);
            bases.place(Base::Third, batter)?;
        }
        AppearanceEnd::Hit(HitType::HomeRun) => {
            runs += score_all(bases);
            runs += 1;
        }
        AppearanceEnd::InPlayOut(out_type) => {
            batter_out = true;
            // Sacrifice fly: a fly out with fewer than two outs scores the
            // runner from third; everyone else holds.
            if *out_type == OutType::Flyout && outs < 2 && bases.take(Base::Third).is_some() {
                runs += 1;
            }
        }
    }

    // on-base before + batter in = on-base after + runs + batter out
    let after = bases.occupied_count();
    if before + 1 != after + runs + u8::from(batter_out) {
        return Err(GameError::InvariantViolation(format!(
            "runner conservation broken: {} on before, {} on after, {} scored",
            before, after, runs
        )));
    }

    Ok(runs)
}

fn score_all(bases: &mut BaseState) -> u8 {
    let scored = bases.occupied_count();
    bases.clear();
    scored
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bases_with(first: Option<u8>, second: Option<u8>, third: Option<u8>) -> BaseState {
        let mut bases = BaseState::new();
        if let Some(r) = first {
            bases.place(Base::First, r).unwrap();
        }
        if let Some(r) = second {
            bases.place(Base::Second, r).unwrap();
        }
        if let Some(r) = third {
            bases.place(Base::Third, r).unwrap();
        }
        bases
    }

    #[test]
    fn test_walk_with_bases_loaded_forces_in_a_run() {
        let mut bases = bases_with(Some(1), Some(2), Some(3));
        let runs = advance(&AppearanceEnd::Walk, &mut bases, 4, 0).unwrap();
        assert_eq!(runs, 1);
        assert_eq!(bases.occupancy(), [Some(4), Some(1), Some(2)]);
    }

    #[test]
    fn test_walk_moves_only_forced_runners() {
        // Runner on second, first open: nobody is forced.
        let mut bases = bases_with(None, Some(2), None);
        let runs = advance(&AppearanceEnd::Walk, &mut bases, 4, 0).unwrap();
        assert_eq!(runs, 0);
        assert_eq!(bases.occupancy(), [Some(4), Some(2), None]);
    }

    #[test]
    fn test_single_never_scores_runner_from_second() {
        let mut bases = bases_with(Some(1), Some(2), None);
        let runs = advance(&AppearanceEnd::Hit(HitType::Single), &mut bases, 4, 0).unwrap();
        assert_eq!(runs, 0);
        assert_eq!(bases.occupancy(), [Some(4), Some(1), Some(2)]);
    }

    #[test]
    fn test_single_scores_third() {
        let mut bases = bases_with(None, None, Some(3));
        let runs = advance(&AppearanceEnd::Hit(HitType::Single), &mut bases, 4, 0).unwrap();
        assert_eq!(runs, 1);
        assert_eq!(bases.occupancy(), [Some(4), None, None]);
    }

    #[test]
    fn test_double_first_stops_at_third() {
        let mut bases = bases_with(Some(1), Some(2), Some(3));
        let runs = advance(&AppearanceEnd::Hit(HitType::Double), &mut bases, 4, 0).unwrap();
        assert_eq!(runs, 2);
        assert_eq!(bases.occupancy(), [None, Some(4), Some(1)]);
    }

    #[test]
    fn test_triple_clears_the_bases() {
        let mut bases = bases_with(Some(1), None, Some(3));
        let runs = advance(&AppearanceEnd::Hit(HitType::Triple), &mut bases, 4, 0).unwrap();
        assert_eq!(runs, 2);
        assert_eq!(bases.occupancy(), [None, None, Some(4)]);
    }

    #[test]
    fn test_home_run_scores_everyone_plus_batter() {
        let mut bases = bases_with(Some(1), Some(2), Some(3));
        let runs = advance(&AppearanceEnd::Hit(HitType::HomeRun), &mut bases, 4, 0).unwrap();
        assert_eq!(runs, 4);
        assert_eq!(bases.occupied_count(), 0);
    }

    #[test]
    fn test_sacrifice_fly_scores_third_below_two_outs() {
        let mut bases = bases_with(Some(1), None, Some(3));
        let runs = advance(
            &AppearanceEnd::InPlayOut(OutType::Flyout),
            &mut bases,
            4,
            1,
        )
        .unwrap();
        assert_eq!(runs, 1);
        assert_eq!(bases.occupancy(), [Some(1), None, None]);
    }

    #[test]
    fn test_fly_out_with_two_outs_scores_nothing() {
        let mut bases = bases_with(None, None, Some(3));
        let runs = advance(
            &AppearanceEnd::InPlayOut(OutType::Flyout),
            &mut bases,
            4,
            2,
        )
        .unwrap();
        assert_eq!(runs, 0);
        assert_eq!(bases.occupancy(), [None, None, Some(3)]);
    }

    #[test]
    fn test_groundout_moves_nobody() {
        let mut bases = bases_with(Some(1), Some(2), Some(3));
        let runs = advance(
            &AppearanceEnd::InPlayOut(OutType::Groundout),
            &mut bases,
            4,
            0,
        )
        .unwrap();
        assert_eq!(runs, 0);
        assert_eq!(bases.occupancy(), [Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn test_strikeout_moves_nobody() {
        let mut bases = bases_with(Some(1), None, None);
        let runs = advance(&AppearanceEnd::Strikeout, &mut bases, 4, 0).unwrap();
        assert_eq!(runs, 0);
        assert_eq!(bases.occupancy(), [Some(1), None, None]);
    }

    #[cfg(feature = "proptest")]
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_outcome() -> impl Strategy<Value = AppearanceEnd> {
            prop_oneof![
                Just(AppearanceEnd::Walk),
                Just(AppearanceEnd::Strikeout),
                Just(AppearanceEnd::Hit(HitType::Single)),
                Just(AppearanceEnd::Hit(HitType::Double)),
                Just(AppearanceEnd::Hit(HitType::Triple)),
                Just(AppearanceEnd::Hit(HitType::HomeRun)),
                Just(AppearanceEnd::InPlayOut(OutType::Groundout)),
                Just(AppearanceEnd::InPlayOut(OutType::Flyout)),
                Just(AppearanceEnd::InPlayOut(OutType::Lineout)),
            ]
        }

        proptest! {
            #[test]
            fn prop_runners_are_conserved(
                outcome in arb_outcome(),
                first in proptest::option::of(0u8..9),
                second in proptest::option::of(0u8..9),
                third in proptest::option::of(0u8..9),
                outs in 0u8..3,
            ) {
                let mut bases = bases_with(first, second, third);
                let before = bases.occupied_count();
                let batter_out = matches!(
                    outcome,
                    AppearanceEnd::Strikeout | AppearanceEnd::InPlayOut(_)
                );
                let batter_scores = matches!(outcome, AppearanceEnd::Hit(HitType::HomeRun));

                let runs = advance(&outcome, &mut bases, 9, outs).unwrap();
                let after = bases.occupied_count();

                // on-base before + batter in = on-base after + runs + batter out
                prop_assert_eq!(before + 1, after + runs + u8::from(batter_out));
                if !batter_out && !batter_scores {
                    prop_assert!(after >= 1);
                }
            }
        }
    }
}
