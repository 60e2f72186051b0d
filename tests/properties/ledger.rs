//! Property tests for plan evaluation.

use proptest::prelude::*;

use gearplan::domain::entities::{Action, GearTransfer, Plan};
use gearplan::domain::value_objects::{FindingKind, GearItem};
use gearplan::PlanEvaluator;

const STASH: &str = "GearStash";

fn person() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Z][a-z]{1,8}")
        .unwrap()
        .prop_filter("not the stash", |s| !s.eq_ignore_ascii_case(STASH))
}

/// Two distinct people
fn pair() -> impl Strategy<Value = (String, String)> {
    (person(), person()).prop_filter("distinct", |(a, b)| a != b)
}

/// Two locations that differ even ignoring case, neither being the stash
fn distinct_places() -> impl Strategy<Value = (String, String)> {
    let place = || proptest::string::string_regex("Camp[A-Za-z0-9]{1,6}").unwrap();
    (place(), place()).prop_filter("distinct", |(a, b)| !a.eq_ignore_ascii_case(b))
}

fn supply(to: &str, quantity: i64) -> Action {
    Action::new("Supply").with_transfer(GearTransfer::new(STASH, to, "Rope", quantity))
}

/// Move both people to the same camp
fn together(action: Action, a: &str, b: &str) -> Action {
    action
        .with_location_change(a, "Camp")
        .with_location_change(b, "camp")
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a permitted transfer moves exactly Q and keeps A + B constant.
    #[test]
    fn property_transfer_conserves_quantity(
        (a, b) in pair(),
        supplied in 0i64..1000,
        moved in 0i64..1000,
    ) {
        let plan = Plan::new(vec![
            supply(&a, supplied),
            together(Action::new("Hand over"), &a, &b)
                .with_transfer(GearTransfer::new(&a, &b, "Rope", moved)),
        ]);
        let result = PlanEvaluator::default().evaluate(&plan);

        prop_assert_eq!(result.quantity(&a, "Rope"), supplied - moved);
        prop_assert_eq!(result.quantity(&b, "Rope"), moved);
        prop_assert_eq!(
            result.quantity(&a, "Rope") + result.quantity(&b, "Rope"),
            supplied
        );
        prop_assert_eq!(result.findings_of(FindingKind::LocationMismatch).count(), 0);
    }

    /// PROPERTY: an endpoint located at the stash is always reachable.
    #[test]
    fn property_stash_location_is_always_reachable(
        (a, b) in pair(),
        (place, _) in distinct_places(),
        upper in any::<bool>(),
        moved in 0i64..100,
    ) {
        let stash_place = if upper { STASH.to_uppercase() } else { STASH.to_lowercase() };
        let plan = Plan::new(vec![Action::new("Split")
            .with_location_change(&a, stash_place)
            .with_location_change(&b, place)
            .with_transfer(GearTransfer::new(&a, &b, "Rope", moved))]);
        let result = PlanEvaluator::default().evaluate(&plan);

        prop_assert_eq!(result.findings_of(FindingKind::LocationMismatch).count(), 0);
        prop_assert_eq!(result.quantity(&b, "Rope"), moved);
    }

    /// PROPERTY: different non-stash locations reject the transfer and leave both sides alone.
    #[test]
    fn property_separated_people_cannot_pass_gear(
        (a, b) in pair(),
        (here, there) in distinct_places(),
        supplied in 0i64..100,
        moved in 0i64..100,
    ) {
        let plan = Plan::new(vec![
            supply(&a, supplied),
            Action::new("Split")
                .with_location_change(&a, here)
                .with_location_change(&b, there)
                .with_transfer(GearTransfer::new(&a, &b, "Rope", moved)),
        ]);
        let result = PlanEvaluator::default().evaluate(&plan);

        prop_assert!(result.had_errors);
        prop_assert_eq!(result.findings_of(FindingKind::LocationMismatch).count(), 1);
        prop_assert_eq!(result.quantity(&a, "Rope"), supplied);
        prop_assert_eq!(result.quantity(&b, "Rope"), 0);
    }

    /// PROPERTY: emptying a pack is fine, going one below zero is a deficit.
    #[test]
    fn property_deficit_only_below_zero(
        (a, b) in pair(),
        supplied in 0i64..1000,
    ) {
        let exact = Plan::new(vec![
            supply(&a, supplied),
            together(Action::new("All"), &a, &b)
                .with_transfer(GearTransfer::new(&a, &b, "Rope", supplied)),
        ]);
        let result = PlanEvaluator::default().evaluate(&exact);
        prop_assert_eq!(result.quantity(&a, "Rope"), 0);
        prop_assert!(!result.had_errors);

        let over = Plan::new(vec![
            supply(&a, supplied),
            together(Action::new("Too many"), &a, &b)
                .with_transfer(GearTransfer::new(&a, &b, "Rope", supplied + 1)),
        ]);
        let result = PlanEvaluator::default().evaluate(&over);
        prop_assert_eq!(result.quantity(&a, "Rope"), -1);
        prop_assert_eq!(result.findings_of(FindingKind::Deficit).count(), 1);
        prop_assert!(result.had_errors);
    }

    /// PROPERTY: the stash may go arbitrarily negative without a deficit.
    #[test]
    fn property_stash_never_runs_short(
        people in proptest::collection::vec(person(), 1..6),
        moved in 0i64..1000,
    ) {
        let actions = people.iter().map(|p| supply(p, moved)).collect();
        let result = PlanEvaluator::default().evaluate(&Plan::new(actions));

        prop_assert_eq!(result.findings_of(FindingKind::Deficit).count(), 0);
        prop_assert!(!result.had_errors);
    }

    /// PROPERTY: the first read returns the delta, an immediate second read returns 0.
    #[test]
    fn property_cell_read_resets_delta(
        (a, b) in pair(),
        amounts in proptest::collection::vec(0i64..50, 1..8),
    ) {
        let mut action = together(Action::new("Shuffle"), &a, &b);
        for (i, amount) in amounts.iter().enumerate() {
            let (from, to) = if i % 2 == 0 { (STASH, a.as_str()) } else { (a.as_str(), b.as_str()) };
            action = action.with_transfer(GearTransfer::new(from, to, "Rope", *amount));
        }
        let mut result = PlanEvaluator::default().evaluate(&Plan::new(vec![action]));
        let rope = GearItem::new("Rope");

        let first = result.read_cell(&a, &rope);
        prop_assert_eq!(first.delta, first.quantity);
        let second = result.read_cell(&a, &rope);
        prop_assert_eq!(second.delta, 0);
        prop_assert_eq!(second.quantity, first.quantity);
    }

    /// PROPERTY: an assertion passes iff quantity >= N, never mutates, and repeats agree.
    #[test]
    fn property_assertion_is_monotone_and_pure(
        a in person(),
        supplied in 0i64..100,
        required in 0i64..100,
        repeats in 1usize..4,
    ) {
        let mut check = Action::new("Check");
        for _ in 0..repeats {
            check = check.with_assert(&a, "Rope", required);
        }
        let plan = Plan::new(vec![supply(&a, supplied), check]);
        let result = PlanEvaluator::default().evaluate(&plan);

        let failures = result.findings_of(FindingKind::AssertionFailed).count();
        let expected = if supplied >= required { 0 } else { repeats };
        prop_assert_eq!(failures, expected);
        prop_assert_eq!(result.had_errors, supplied < required);
        prop_assert_eq!(result.quantity(&a, "Rope"), supplied);
    }
}
