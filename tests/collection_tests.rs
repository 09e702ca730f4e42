//! Tests for the container bridge and the function-generating macros.

use dogs::algebra::derive_additive_monoid;
use dogs::cmp::derive_eq;
use dogs::collection::IntoLazyIterator;
use dogs::iterator::{LazyIterator, range};
use dogs::types::list::{self, List};
use dogs::types::pair::Pair;
use dogs::types::set::{self, Set};
use dogs::types::slice::{self, Slice};
use rstest::rstest;

/// A container defined outside the crate, wired up through the macros.
mod ring {
    use dogs::collection::{FromLazyIterator, IntoLazyIterator};
    use dogs::iterator::{FromStd, LazyIterator, from_std};
    use std::collections::VecDeque;

    #[derive(Debug, PartialEq)]
    pub struct Ring<T>(pub VecDeque<T>);

    impl<T> IntoLazyIterator for Ring<T> {
        type Item = T;
        type IntoIter = FromStd<std::iter::Fuse<std::collections::vec_deque::IntoIter<T>>>;

        fn into_lazy_iter(self) -> Self::IntoIter {
            from_std(self.0)
        }
    }

    impl<T> FromLazyIterator<T> for Ring<T> {
        fn from_lazy_iter<I>(iter: I) -> Self
        where
            I: IntoLazyIterator<Item = T>,
        {
            Self(iter.into_lazy_iter().into_std().collect())
        }
    }

    dogs::collection_functions!(Ring);
    dogs::ordered_collection_functions!(Ring);
}

#[rstest]
fn macros_work_for_downstream_containers() {
    use ring::Ring;

    let numbers = Ring((1..=4).collect());
    assert_eq!(
        ring::map(Ring(numbers.0.clone()), |x| x * 10),
        Ring([10, 20, 30, 40].into())
    );
    assert_eq!(ring::sum(derive_additive_monoid::<i32>(), numbers), 10);
    assert_eq!(
        ring::zip(Ring([1, 2].into()), Ring(['a'].into())),
        Ring([Pair::new(1, 'a')].into())
    );
}

#[rstest]
fn same_operations_across_containers() {
    let as_list = List::from_iterator(range(1, 6));
    let as_slice = Slice::from_iterator(range(1, 6));
    let as_set = Set::from_iterator(range(1, 6));

    let monoid = derive_additive_monoid::<i32>();
    assert_eq!(list::sum(monoid, as_list.clone()), 21);
    assert_eq!(slice::sum(monoid, as_slice.clone()), 21);
    assert_eq!(set::sum(monoid, as_set.clone()), 21);

    let eq = derive_eq::<i32>();
    assert_eq!(list::find_elem(as_list, &4, eq), Some(4));
    assert_eq!(slice::find_elem(as_slice, &7, eq), None);
    assert_eq!(set::find_elem(as_set, &6, eq), Some(6));
}

#[rstest]
fn containers_convert_between_each_other() {
    let list = List::from_vec(vec![3, 1, 3, 2]);
    let deduplicated: Set<i32> = list.clone().into_lazy_iter().collect();
    assert_eq!(deduplicated, Set::from_elems([1, 2, 3]));

    let slice: Slice<i32> = Slice::from_iterator(list);
    assert_eq!(slice.into_vec(), vec![3, 1, 3, 2]);
}

#[rstest]
fn borrowing_iteration_does_not_consume() {
    let list = List::from_vec(vec!["x", "y"]);
    let lengths = list.iter().map(|s| s.len()).to_vec();
    assert_eq!(lengths, vec![1, 1]);
    assert_eq!(list.len(), 2);

    let collected: Vec<&&str> = (&list).into_iter().collect();
    assert_eq!(collected, vec![&"x", &"y"]);
}
