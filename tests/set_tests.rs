//! Unit tests for Set.
//!
//! Covers every public operation with the concrete scenarios a set must
//! satisfy, including the degenerate inputs (empty sets, absent elements,
//! self-referential calls).

use rstest::rstest;
use valueset::{Set, set};

fn sorted(set: &Set<i32>) -> Vec<i32> {
    let mut items = set.to_vec();
    items.sort_unstable();
    items
}

// =============================================================================
// Creation
// =============================================================================

#[rstest]
fn test_creation() {
    assert_eq!(Set::<i32>::of(&[]).len(), 0);
    assert_eq!(Set::<i32>::with_capacity(0).len(), 0);
    assert!(Set::<i32>::of(&[]).is_empty());
    assert!(!Set::of(&[1]).is_empty());
}

#[rstest]
fn test_default_creates_empty_set() {
    let set: Set<i32> = Set::default();
    assert!(set.is_empty());
}

#[rstest]
fn test_from_seq_matches_of() {
    let from_seq = Set::from_seq(vec![3, 1, 2, 1].into_iter());
    assert_eq!(from_seq, Set::of(&[1, 2, 3]));
}

#[rstest]
fn test_collect_into_set() {
    let set: Set<char> = "mississippi".chars().collect();
    assert_eq!(set, Set::of(&['m', 'i', 's', 'p']));
}

// =============================================================================
// Membership and Mutation
// =============================================================================

#[rstest]
fn test_contains() {
    assert!(Set::of(&[1]).contains(&1));
    assert!(!Set::<i32>::of(&[]).contains(&1));
}

#[rstest]
fn test_add() {
    let mut values = Set::with_capacity(0);
    values.add([1, 2, 3]);

    assert!(values.contains(&1));
    assert!(values.contains(&2));
    assert!(values.contains(&3));
    assert_eq!(values.len(), 3);
}

#[rstest]
fn test_add_present_item_is_noop() {
    let mut values = Set::of(&[1, 2]);
    values.add([2]);
    assert_eq!(sorted(&values), vec![1, 2]);
}

#[rstest]
fn test_remove() {
    let mut values = Set::of(&[1, 2, 3]);
    values.remove(&[2]);

    assert!(values.contains(&1));
    assert!(!values.contains(&2));
    assert!(values.contains(&3));
    assert_eq!(values.len(), 2);
}

#[rstest]
fn test_remove_from_empty_set() {
    let mut values: Set<i32> = Set::new();
    values.remove(&[1, 2, 3]);
    assert!(values.is_empty());
}

#[rstest]
fn test_clear() {
    let mut values = Set::of(&[1, 2, 3]);
    values.clear();

    assert!(!values.contains(&1));
    assert!(!values.contains(&2));
    assert!(!values.contains(&3));
    assert_eq!(values.len(), 0);
}

#[rstest]
fn test_clear_on_fresh_set() {
    let mut values: Set<i32> = Set::with_capacity(0);
    values.clear();
    assert!(values.is_empty());
    assert_eq!(values.len(), 0);
}

#[rstest]
fn test_mutation_chain() {
    let mut values = Set::new();
    values.add([1, 2, 3, 4]).remove(&[1]).add([5]);
    assert_eq!(sorted(&values), vec![2, 3, 4, 5]);
    values.clear().add([9]);
    assert_eq!(sorted(&values), vec![9]);
}

// =============================================================================
// Materialization
// =============================================================================

#[rstest]
fn test_to_vec() {
    let values = Set::of(&[1, 2, 3, 4, 5]);
    let items = sorted(&values);

    assert_eq!(values.len(), 5);
    assert_eq!(items.len(), 5);
    assert_eq!(items, vec![1, 2, 3, 4, 5]);
}

#[rstest]
fn test_all_reflects_current_state() {
    let mut values = Set::of(&[1, 2]);
    assert_eq!(values.all().count(), 2);
    values.add([3]);
    assert_eq!(values.all().count(), 3);
}

// =============================================================================
// Relations
// =============================================================================

#[rstest]
#[case(&[1, 2, 3], &[3, 2, 1], true)]
#[case(&[1, 2], &[3, 2, 1], false)]
#[case(&[1, 2, 2], &[1, 2, 3], false)]
#[case(&[1, 2, 3], &[1, 2, 4], false)]
#[case(&[], &[], true)]
fn test_equal(#[case] left: &[i32], #[case] right: &[i32], #[case] expected: bool) {
    assert_eq!(Set::of(left) == Set::of(right), expected);
}

#[rstest]
#[case(&[1, 2, 3], &[1, 2, 3, 4, 5], true)]
#[case(&[4, 5, 6], &[1, 2, 3, 4, 5], false)]
#[case(&[], &[1], true)]
#[case(&[], &[], true)]
#[case(&[1], &[], false)]
fn test_is_subset(#[case] left: &[i32], #[case] right: &[i32], #[case] expected: bool) {
    assert_eq!(Set::of(left).is_subset(&Set::of(right)), expected);
}

#[rstest]
#[case(&[1, 2, 3, 4, 5], &[1, 2, 3], true)]
#[case(&[1, 2, 3, 4, 5], &[4, 5, 6], false)]
#[case(&[1], &[], true)]
fn test_is_superset(#[case] left: &[i32], #[case] right: &[i32], #[case] expected: bool) {
    assert_eq!(Set::of(left).is_superset(&Set::of(right)), expected);
}

#[rstest]
fn test_is_disjoint() {
    assert!(Set::of(&[1, 2]).is_disjoint(&Set::of(&[3, 4])));
    assert!(!Set::of(&[1, 2, 3]).is_disjoint(&Set::of(&[3])));
    assert!(Set::<i32>::new().is_disjoint(&Set::new()));
}

// =============================================================================
// Algebra
// =============================================================================

#[rstest]
#[case(&[1, 2, 3], &[1, 2, 3], &[1, 2, 3])]
#[case(&[1, 2, 3], &[2, 3, 4], &[1, 2, 3, 4])]
#[case(&[1, 2, 3], &[4, 5, 6], &[1, 2, 3, 4, 5, 6])]
#[case(&[], &[1], &[1])]
fn test_union(#[case] left: &[i32], #[case] right: &[i32], #[case] expected: &[i32]) {
    assert_eq!(Set::of(left).union(&Set::of(right)), Set::of(expected));
}

#[rstest]
#[case(&[1, 2, 3], &[4, 5, 6], &[])]
#[case(&[1, 2, 3], &[2, 3, 4], &[2, 3])]
#[case(&[1, 2, 3], &[], &[])]
fn test_intersection(#[case] left: &[i32], #[case] right: &[i32], #[case] expected: &[i32]) {
    assert_eq!(Set::of(left).intersection(&Set::of(right)), Set::of(expected));
}

#[rstest]
#[case(&[1, 2, 3], &[4, 5, 6], &[1, 2, 3])]
#[case(&[1, 2, 3], &[2, 3], &[1])]
#[case(&[2, 3], &[1, 2, 3], &[])]
fn test_difference(#[case] left: &[i32], #[case] right: &[i32], #[case] expected: &[i32]) {
    assert_eq!(Set::of(left).difference(&Set::of(right)), Set::of(expected));
}

#[rstest]
#[case(&[1, 2, 3], &[4, 5, 6], &[1, 2, 3, 4, 5, 6])]
#[case(&[1, 2, 3], &[2, 3, 4], &[1, 4])]
#[case(&[1, 2], &[1, 2], &[])]
fn test_symmetric_difference(
    #[case] left: &[i32],
    #[case] right: &[i32],
    #[case] expected: &[i32],
) {
    assert_eq!(
        Set::of(left).symmetric_difference(&Set::of(right)),
        Set::of(expected)
    );
}

#[rstest]
fn test_algebra_with_string_elements() {
    let fruits = set!["apple".to_string(), "pear".to_string()];
    let green = set!["pear".to_string(), "lime".to_string()];

    let both = fruits.intersection(&green);
    assert_eq!(both.len(), 1);
    assert!(both.contains("pear"));
    assert!(fruits.union(&green).contains("lime"));
}

// =============================================================================
// Formatting
// =============================================================================

#[rstest]
fn test_display_empty_set() {
    let set: Set<i32> = Set::new();
    assert_eq!(set.to_string(), "{}");
    assert_eq!(format!("{set:?}"), "{}");
}

#[rstest]
fn test_display_single_element() {
    let set = Set::of(&[42]);
    assert_eq!(set.to_string(), "{42}");
    assert_eq!(format!("{set:?}"), "{42}");
}

#[rstest]
fn test_debug_quotes_string_elements() {
    let set = set!["pear"];
    assert_eq!(format!("{set:?}"), "{\"pear\"}");
    assert_eq!(set.to_string(), "{pear}");
}

#[rstest]
fn test_display_after_clear_is_stable() {
    let mut set = Set::of(&[1, 2, 3]);
    set.clear();
    assert_eq!(set.to_string(), "{}");
}

#[rstest]
fn test_display_multiple_elements() {
    let display = format!("{}", Set::of(&[1, 2, 3]));
    assert!(display.starts_with('{'));
    assert!(display.ends_with('}'));
    assert!(display.contains('1'));
    assert!(display.contains('2'));
    assert!(display.contains('3'));
    assert_eq!(display.matches(", ").count(), 2);
}
