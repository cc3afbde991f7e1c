//! Property-based tests for keystroke delay bounds

use human_writer::typing::delay::{CharClass, DelayPolicy, RandomSource, PAUSE_RANGE_MS};
use proptest::prelude::*;

/// Replays proptest-chosen fractions
struct Fractions(Vec<f64>);

impl RandomSource for Fractions {
    fn next_fraction(&mut self) -> f64 {
        self.0.remove(0)
    }
}

/// Base delays stay within the class range and pauses only ever add time
#[test]
fn test_delays_respect_class_ranges() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(any::<char>(), 0.0..1.0f64, 0.0..1.0f64, 0.0..1.0f64),
            |(c, base, coin, pause)| {
                let mut rng = Fractions(vec![base, coin, pause]);
                let stroke = DelayPolicy.keystroke(c, &mut rng);

                prop_assert_eq!(stroke.class, CharClass::of(c));
                prop_assert!(stroke.class.base_range_ms().contains(&stroke.base_ms));
                match stroke.pause_ms {
                    Some(extra) => {
                        prop_assert!(coin < 0.05);
                        prop_assert!(PAUSE_RANGE_MS.contains(&extra));
                        prop_assert!(stroke.total_ms() > stroke.base_ms);
                    }
                    None => {
                        prop_assert!(coin >= 0.05);
                        prop_assert_eq!(stroke.total_ms(), stroke.base_ms);
                    }
                }
                prop_assert!(stroke.duration().as_nanos() > 0);
                Ok(())
            },
        )
        .unwrap();
}
