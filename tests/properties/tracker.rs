//! Property tests for the change tracker.

use proptest::prelude::*;

use gearplan::domain::services::ChangeTracker;

#[derive(Debug, Clone)]
enum Op {
    Add(i64),
    Subtract(i64),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0i64..1000).prop_map(Op::Add),
        (0i64..1000).prop_map(Op::Subtract),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a read returns the signed sum since the previous read.
    #[test]
    fn property_read_returns_sum_since_last_read(
        before in proptest::collection::vec(op(), 0..10),
        after in proptest::collection::vec(op(), 0..10),
    ) {
        let mut tracker = ChangeTracker::new();
        let apply = |tracker: &mut ChangeTracker, ops: &[Op]| {
            let mut sum = 0;
            for op in ops {
                match op {
                    Op::Add(q) => { tracker.add("Alice", "Rope", *q); sum += q; }
                    Op::Subtract(q) => { tracker.subtract("Alice", "Rope", *q); sum -= q; }
                }
            }
            sum
        };

        let first = apply(&mut tracker, &before);
        prop_assert_eq!(tracker.read_and_reset("Alice", "Rope"), first);

        let second = apply(&mut tracker, &after);
        prop_assert_eq!(tracker.read_and_reset("Alice", "Rope"), second);
        prop_assert_eq!(tracker.read_and_reset("Alice", "Rope"), 0);
    }

    /// PROPERTY: keys are exact; other entities and items are untouched.
    #[test]
    fn property_keys_do_not_bleed(q in 1i64..1000) {
        let mut tracker = ChangeTracker::new();
        tracker.add("Alice", "Rope", q);

        prop_assert_eq!(tracker.read_and_reset("alice", "Rope"), 0);
        prop_assert_eq!(tracker.read_and_reset("Alice", "rope"), 0);
        prop_assert_eq!(tracker.read_and_reset("Bob", "Rope"), 0);
        prop_assert_eq!(tracker.read_and_reset("Alice", "Rope"), q);
    }
}
