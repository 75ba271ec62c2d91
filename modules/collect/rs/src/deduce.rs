//! Container kinds whose element type is taken from the source: `to::<deduce::Vec, _>(&list)`.
//!
//! Sequence kinds hold the source `Value`; map kinds expect `(K, V)` values, which is what the
//! std maps and `(key, value)` producing views yield.

use std::collections;
use std::hash::Hash;

use seqview_core_rs::{IntoCursor, ValueOf};

use crate::container::Container;
use crate::convert::Convert;
use crate::target::{rebuild, Strategy, Target};

/// Maps an element type to the concrete container of a kind.
pub trait Deduce<V> {
    type Output: Container;
}

type Deduced<K, S> = <K as Deduce<ValueOf<S>>>::Output;
type ElemOf<K, S> = <Deduced<K, S> as Container>::Elem;
type ArgsOf<K, S> = <Deduced<K, S> as Container>::Args;

macro_rules! kinds {
    ($($(#[$meta:meta])* $kind:ident [$($bounds:tt)*] $value:ty => $output:ty;)*) => {$(
        $(#[$meta])*
        #[derive(Clone, Copy, Debug)]
        pub struct $kind;

        impl<$($bounds)*> Deduce<$value> for $kind {
            type Output = $output;
        }

        impl<S> Target<S> for $kind
        where
            S: IntoCursor,
            $kind: Deduce<ValueOf<S>>,
            S::Item: Convert<ElemOf<$kind, S>>,
        {
            type Output = Deduced<$kind, S>;
            type Args = ArgsOf<$kind, S>;

            const STRATEGY: Strategy = if <S::Item as Convert<ElemOf<$kind, S>>>::NESTED {
                Strategy::Nested
            } else {
                Strategy::Insert
            };

            fn build(source: S, args: Self::Args) -> Self::Output {
                rebuild(source, args)
            }
        }
    )*};
}

kinds!(
    Vec [T] T => std::vec::Vec<T>;
    VecDeque [T] T => collections::VecDeque<T>;
    LinkedList [T] T => collections::LinkedList<T>;
    /// Max-heap of the source values.
    BinaryHeap [T: Ord] T => collections::BinaryHeap<T>;
    BTreeSet [T: Ord] T => collections::BTreeSet<T>;
    HashSet [T: Eq + Hash] T => collections::HashSet<T>;
    BTreeMap [K: Ord, V] (K, V) => collections::BTreeMap<K, V>;
    HashMap [K: Eq + Hash, V] (K, V) => collections::HashMap<K, V>;
);

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap as StdBTreeMap, HashMap as StdHashMap, LinkedList as List};

    use crate::target::to;

    use super::*;

    #[test]
    fn test_sequences() {
        let list = List::from([1, 2, 3]);
        let converted: std::vec::Vec<i32> = to::<Vec, _>(&list);
        assert_eq!(converted, [1, 2, 3]);

        let converted = to::<VecDeque, _>(&converted);
        assert_eq!(converted, [1, 2, 3]);

        let converted = to::<BTreeSet, _>(&[3, 3, 1]);
        assert_eq!(converted.into_iter().collect::<std::vec::Vec<_>>(), [1, 3]);

        let heap = to::<BinaryHeap, _>(&list);
        assert_eq!(heap.peek(), Some(&3));
    }

    #[test]
    fn test_maps() {
        let source = StdHashMap::from([("a".to_owned(), 1), ("b".to_owned(), 2)]);
        let sorted: StdBTreeMap<String, i32> = to::<BTreeMap, _>(&source);
        assert_eq!(sorted.keys().collect::<std::vec::Vec<_>>(), ["a", "b"]);

        let pairs = to::<Vec, _>(&sorted);
        assert_eq!(pairs, [("a".to_owned(), 1), ("b".to_owned(), 2)]);

        let back = to::<HashMap, _>(&pairs);
        assert_eq!(back, source);
    }

    #[test]
    fn test_strategy() {
        fn strategy<T: Target<S>, S>(_: &S) -> Strategy {
            T::STRATEGY
        }

        let nested = vec![vec![1u8]];
        assert_eq!(strategy::<Vec, _>(&&nested), Strategy::Nested);
        assert_eq!(strategy::<HashSet, _>(&&nested[0]), Strategy::Insert);
    }
}
