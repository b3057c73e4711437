//! Property-based tests for operation composition.
//!
//! The per-site operations are folded file- and run-wide, so the
//! counters must behave like a commutative monoid: any grouping and any
//! order of the same sites reports the same totals.

use proptest::prelude::*;

use crate::RevertableOperation;

fn arb_op() -> impl Strategy<Value = RevertableOperation> {
    // Per-site operations only ever carry 0 or 1 in each counter.
    (0usize..=1, 0usize..=1)
        .prop_map(|(changes, anys)| RevertableOperation::from_counts(changes, anys))
}

proptest! {
    #[test]
    fn concat_is_associative(a in arb_op(), b in arb_op(), c in arb_op()) {
        let left = a.clone().concat(b.clone()).concat(c.clone());
        let right = a.concat(b.concat(c));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn noop_is_a_two_sided_identity(op in arb_op()) {
        prop_assert_eq!(RevertableOperation::noop().concat(op.clone()), op.clone());
        prop_assert_eq!(op.clone().concat(RevertableOperation::noop()), op);
    }

    #[test]
    fn counters_commute(a in arb_op(), b in arb_op()) {
        let ab = a.clone().concat(b.clone());
        let ba = b.concat(a);
        prop_assert_eq!(
            (ab.count_changes_done, ab.count_of_anys),
            (ba.count_changes_done, ba.count_of_anys)
        );
    }

    #[test]
    fn folding_sums_the_counters(ops in prop::collection::vec(arb_op(), 0..16)) {
        let expected_changes: usize = ops.iter().map(|op| op.count_changes_done).sum();
        let expected_anys: usize = ops.iter().map(|op| op.count_of_anys).sum();

        let folded: RevertableOperation = ops.into_iter().collect();

        prop_assert_eq!(folded.count_changes_done, expected_changes);
        prop_assert_eq!(folded.count_of_anys, expected_anys);
    }

    #[test]
    fn fold_order_does_not_change_the_totals(ops in prop::collection::vec(arb_op(), 0..16)) {
        let forward: RevertableOperation = ops.clone().into_iter().collect();
        let backward: RevertableOperation = ops.into_iter().rev().collect();

        prop_assert_eq!(
            (forward.count_changes_done, forward.count_of_anys),
            (backward.count_changes_done, backward.count_of_anys)
        );
    }
}
