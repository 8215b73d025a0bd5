//! Property tests for review-status ranking

use proptest::prelude::*;
use vcv_digest::vcv::ReviewStatus;

fn any_status() -> impl Strategy<Value = ReviewStatus> {
    prop::sample::select(ReviewStatus::ALL.to_vec())
}

#[test]
fn test_highest_of_nothing_is_no_assertion() {
    assert_eq!(
        ReviewStatus::highest(std::iter::empty()),
        ReviewStatus::NoAssertion
    );
}

proptest! {
    /// The aggregate does not depend on the order statuses are seen in
    #[test]
    fn test_highest_is_order_independent(mut statuses in prop::collection::vec(any_status(), 0..12)) {
        let forward = ReviewStatus::highest(statuses.iter().copied());
        statuses.reverse();
        let backward = ReviewStatus::highest(statuses.iter().copied());
        prop_assert_eq!(forward, backward);
    }

    /// The aggregate is one of the inputs and ranks at least as high as each
    #[test]
    fn test_highest_dominates(statuses in prop::collection::vec(any_status(), 1..12)) {
        let top = ReviewStatus::highest(statuses.iter().copied());
        prop_assert!(statuses.contains(&top));
        for status in &statuses {
            prop_assert!(top.rank() >= status.rank());
        }
    }

    /// Pairwise maximum agrees with rank comparison
    #[test]
    fn test_higher_matches_rank(a in any_status(), b in any_status()) {
        let winner = a.higher(b);
        prop_assert_eq!(winner, b.higher(a));
        prop_assert_eq!(winner.rank(), a.rank().max(b.rank()));
    }
}
