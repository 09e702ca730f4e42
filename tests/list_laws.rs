//! Property-based tests for List, Slice and Set.

use dogs::cmp::{derive_ord, Ord as _};
use dogs::collection::IntoLazyIterator;
use dogs::iterator::LazyIterator;
use dogs::types::list::{self, List};
use dogs::types::set::{self, Set};
use dogs::types::slice::Slice;
use proptest::prelude::*;

fn small_vec() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-100..100_i32, 0..20)
}

proptest! {
    // =========================================================================
    // List
    // =========================================================================

    #[test]
    fn prop_list_len_matches_iter_count(values in small_vec()) {
        let list = List::from_vec(values);
        prop_assert_eq!(list.len(), list.iter().count());
    }

    #[test]
    fn prop_list_preserves_order(values in small_vec()) {
        let list = List::from_vec(values.clone());
        prop_assert_eq!(list.into_lazy_iter().to_vec(), values);
    }

    #[test]
    fn prop_cons_puts_element_at_head(values in small_vec(), element: i32) {
        let list = List::from_vec(values);
        let extended = list.cons(element);
        prop_assert_eq!(extended.head(), Some(&element));
        prop_assert_eq!(extended.tail(), list);
    }

    #[test]
    fn prop_list_map_identity(values in small_vec()) {
        let list = List::from_vec(values);
        prop_assert_eq!(list::map(list.clone(), |x| x), list);
    }

    #[test]
    fn prop_list_and_then_left_identity(value: i32) {
        let function = |x: i32| List::from_vec(vec![x, x.wrapping_neg()]);
        prop_assert_eq!(list::and_then(list::pure(value), function), function(value));
    }

    #[test]
    fn prop_list_and_then_right_identity(values in small_vec()) {
        let list = List::from_vec(values);
        prop_assert_eq!(list::and_then(list.clone(), list::pure), list);
    }

    // =========================================================================
    // Slice
    // =========================================================================

    #[test]
    fn prop_slice_sort_matches_std(values in small_vec()) {
        let mut sorted = Slice::from(values.clone());
        sorted.sort(derive_ord::<i32>());
        let mut expected = values;
        expected.sort_unstable();
        prop_assert_eq!(sorted.into_vec(), expected);
    }

    #[test]
    fn prop_slice_sort_is_ordered(values in small_vec()) {
        let ord = derive_ord::<i32>();
        let mut sorted = Slice::from(values);
        sorted.sort(ord);
        for window in sorted.as_slice().windows(2) {
            prop_assert!(ord.le(&window[0], &window[1]));
        }
    }

    // =========================================================================
    // Set
    // =========================================================================

    #[test]
    fn prop_set_equality_is_order_independent(values in small_vec()) {
        let forward = Set::from_elems(values.clone());
        let backward = Set::from_elems(values.into_iter().rev());
        prop_assert!(set::equal(&forward, &backward));
    }

    #[test]
    fn prop_set_union_contains_both(first in small_vec(), second in small_vec()) {
        let (first, second) = (Set::from_elems(first), Set::from_elems(second));
        let union = first.union(&second);
        prop_assert!(set::subset(&first, &union));
        prop_assert!(set::subset(&second, &union));
    }

    #[test]
    fn prop_set_intersection_is_within_both(first in small_vec(), second in small_vec()) {
        let (first, second) = (Set::from_elems(first), Set::from_elems(second));
        let common = first.intersection(&second);
        prop_assert!(set::subset(&common, &first));
        prop_assert!(set::subset(&common, &second));
    }

    #[test]
    fn prop_set_len_counts_distinct(values in small_vec()) {
        let mut distinct = values.clone();
        distinct.sort_unstable();
        distinct.dedup();
        prop_assert_eq!(Set::from_elems(values).len(), distinct.len());
    }
}
