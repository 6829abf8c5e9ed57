use pretty_assertions::assert_eq;
use rstest::rstest;
use slotbook_core::overlap::{Collision, CollisionKind, find_collision, intervals_overlap};

#[rstest]
#[case(540, 570, true)]
#[case(570, 540, true)]
#[case(540, 589, true)]
#[case(540, 590, false)]
#[case(590, 540, false)]
#[case(540, 540, true)]
#[case(0, 1389, false)]
fn test_intervals_overlap(#[case] a: u32, #[case] b: u32, #[case] expected: bool) {
    assert_eq!(intervals_overlap(a, b), expected);
    assert_eq!(intervals_overlap(b, a), expected);
}

#[test]
fn test_empty_and_single_never_collide() {
    assert_eq!(find_collision(&[]), None);
    assert_eq!(find_collision(&[540]), None);
}

#[test]
fn test_touching_slots_do_not_collide() {
    // 09:00, 09:50, 10:40
    assert_eq!(find_collision(&[540, 590, 640]), None);
}

#[test]
fn test_overlap_is_order_independent() {
    let forward = find_collision(&[540, 570]);
    let reverse = find_collision(&[570, 540]);

    assert_eq!(
        forward,
        Some(Collision { first: 0, second: 1, kind: CollisionKind::Overlap })
    );
    assert_eq!(
        reverse,
        Some(Collision { first: 1, second: 0, kind: CollisionKind::Overlap })
    );
}

#[test]
fn test_reports_earliest_colliding_pair() {
    // 15:00, 09:00, 15:20, 09:40
    let found = find_collision(&[900, 540, 920, 580]);

    assert_eq!(
        found,
        Some(Collision { first: 1, second: 3, kind: CollisionKind::Overlap })
    );
}

#[test]
fn test_equal_starts_are_duplicates_in_list_order() {
    let found = find_collision(&[600, 540, 600]);

    assert_eq!(
        found,
        Some(Collision { first: 0, second: 2, kind: CollisionKind::Duplicate })
    );
}
