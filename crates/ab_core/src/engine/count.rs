//! Balls-strikes count tracking
//!
//! Mutation goes through the record methods only. A cap-reaching pitch is
//! reported through the return value and the tracker is reset by the
//! caller within the same resolution, so observable counts never reach
//! 4 balls or 3 strikes.

use super::constants::rules;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountTracker {
    balls: u8,
    strikes: u8,
}

impl CountTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn balls(&self) -> u8 {
        self.balls
    }

    pub fn strikes(&self) -> u8 {
        self.strikes
    }

    /// Record a ball. Returns true when the walk cap was reached; the
    /// caller resolves the walk and resets the count.
    pub fn record_ball(&mut self) -> bool {
        self.balls += 1;
        self.balls >= rules::BALLS_PER_WALK
    }

    /// Record a strike (called or swinging). Returns true when the
    /// strikeout cap was reached.
    pub fn record_strike(&mut self) -> bool {
        self.strikes += 1;
        self.strikes >= rules::STRIKES_PER_OUT
    }

    /// Record a foul ball. Counts as a strike only below two strikes;
    /// a foul can never complete a strikeout.
    pub fn record_foul(&mut self) {
        if self.strikes < rules::STRIKES_PER_OUT - 1 {
            self.strikes += 1;
        }
    }

    pub fn reset(&mut self) {
        self.balls = 0;
        self.strikes = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fourth_ball_forces_walk() {
        let mut count = CountTracker::new();
        assert!(!count.record_ball());
        assert!(!count.record_ball());
        assert!(!count.record_ball());
        assert!(count.record_ball());
    }

    #[test]
    fn test_third_strike_forces_strikeout() {
        let mut count = CountTracker::new();
        assert!(!count.record_strike());
        assert!(!count.record_strike());
        assert!(count.record_strike());
    }

    #[test]
    fn test_foul_never_completes_strikeout() {
        let mut count = CountTracker::new();
        count.record_strike();
        count.record_strike();
        assert_eq!(count.strikes(), 2);
        for _ in 0..10 {
            count.record_foul();
        }
        assert_eq!(count.strikes(), 2);
    }

    #[test]
    fn test_foul_increments_below_two_strikes() {
        let mut count = CountTracker::new();
        count.record_foul();
        assert_eq!(count.strikes(), 1);
        count.record_foul();
        assert_eq!(count.strikes(), 2);
    }

    #[test]
    fn test_reset_clears_both() {
        let mut count = CountTracker::new();
        count.record_ball();
        count.record_strike();
        count.reset();
        assert_eq!(count.balls(), 0);
        assert_eq!(count.strikes(), 0);
    }

    #[cfg(feature = "proptest")]
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone, Copy)]
        enum Record {
            Ball,
            Strike,
            Foul,
        }

        fn arb_record() -> impl Strategy<Value = Record> {
            prop_oneof![Just(Record::Ball), Just(Record::Strike), Just(Record::Foul)]
        }

        proptest! {
            #[test]
            fn prop_observable_count_stays_below_caps(
                records in proptest::collection::vec(arb_record(), 0..200),
            ) {
                // Resolve-and-reset at the cap, as the scheduler does.
                let mut count = CountTracker::new();
                for record in records {
                    let capped = match record {
                        Record::Ball => count.record_ball(),
                        Record::Strike => count.record_strike(),
                        Record::Foul => {
                            count.record_foul();
                            false
                        }
                    };
                    if capped {
                        count.reset();
                    }
                    prop_assert!(count.balls() <= rules::BALLS_PER_WALK - 1);
                    prop_assert!(count.strikes() <= rules::STRIKES_PER_OUT - 1);
                }
            }
        }
    }
}
