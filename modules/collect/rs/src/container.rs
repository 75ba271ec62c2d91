use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::hash::{BuildHasher, Hash};

use ahash::{AHashMap, AHashSet};

/// A container that can be built element by element.
///
/// `Args` are the construction arguments forwarded by [`to_with`](crate::to_with), e.g. the
/// hasher of a hash map.
pub trait Container: Sized {
    type Elem;
    type Args;

    fn construct(args: Self::Args) -> Self;

    /// Makes room for `additional` elements. Containers without a notion of capacity ignore it.
    fn reserve(&mut self, _additional: usize) {}

    fn insert(&mut self, elem: Self::Elem);
}

impl<T> Container for Vec<T> {
    type Elem = T;
    type Args = ();

    fn construct(_: ()) -> Self {
        Vec::new()
    }

    fn reserve(&mut self, additional: usize) {
        Vec::reserve(self, additional)
    }

    fn insert(&mut self, elem: T) {
        self.push(elem)
    }
}

impl<T> Container for VecDeque<T> {
    type Elem = T;
    type Args = ();

    fn construct(_: ()) -> Self {
        VecDeque::new()
    }

    fn reserve(&mut self, additional: usize) {
        VecDeque::reserve(self, additional)
    }

    fn insert(&mut self, elem: T) {
        self.push_back(elem)
    }
}

impl<T> Container for LinkedList<T> {
    type Elem = T;
    type Args = ();

    fn construct(_: ()) -> Self {
        LinkedList::new()
    }

    fn insert(&mut self, elem: T) {
        self.push_back(elem)
    }
}

impl<T: Ord> Container for BinaryHeap<T> {
    type Elem = T;
    type Args = ();

    fn construct(_: ()) -> Self {
        BinaryHeap::new()
    }

    fn reserve(&mut self, additional: usize) {
        BinaryHeap::reserve(self, additional)
    }

    fn insert(&mut self, elem: T) {
        self.push(elem)
    }
}

impl<T: Ord> Container for BTreeSet<T> {
    type Elem = T;
    type Args = ();

    fn construct(_: ()) -> Self {
        BTreeSet::new()
    }

    fn insert(&mut self, elem: T) {
        BTreeSet::insert(self, elem);
    }
}

impl<K: Ord, V> Container for BTreeMap<K, V> {
    type Elem = (K, V);
    type Args = ();

    fn construct(_: ()) -> Self {
        BTreeMap::new()
    }

    fn insert(&mut self, (key, value): (K, V)) {
        BTreeMap::insert(self, key, value);
    }
}

impl<T: Eq + Hash, H: BuildHasher> Container for HashSet<T, H> {
    type Elem = T;
    type Args = H;

    fn construct(hasher: H) -> Self {
        HashSet::with_hasher(hasher)
    }

    fn reserve(&mut self, additional: usize) {
        HashSet::reserve(self, additional)
    }

    fn insert(&mut self, elem: T) {
        HashSet::insert(self, elem);
    }
}

impl<K: Eq + Hash, V, H: BuildHasher> Container for HashMap<K, V, H> {
    type Elem = (K, V);
    type Args = H;

    fn construct(hasher: H) -> Self {
        HashMap::with_hasher(hasher)
    }

    fn reserve(&mut self, additional: usize) {
        HashMap::reserve(self, additional)
    }

    fn insert(&mut self, (key, value): (K, V)) {
        HashMap::insert(self, key, value);
    }
}

impl<T: Eq + Hash> Container for AHashSet<T> {
    type Elem = T;
    type Args = ();

    fn construct(_: ()) -> Self {
        AHashSet::new()
    }

    fn reserve(&mut self, additional: usize) {
        (**self).reserve(additional)
    }

    fn insert(&mut self, elem: T) {
        (**self).insert(elem);
    }
}

impl<K: Eq + Hash, V> Container for AHashMap<K, V> {
    type Elem = (K, V);
    type Args = ();

    fn construct(_: ()) -> Self {
        AHashMap::new()
    }

    fn reserve(&mut self, additional: usize) {
        (**self).reserve(additional)
    }

    fn insert(&mut self, (key, value): (K, V)) {
        (**self).insert(key, value);
    }
}

#[cfg(test)]
mod tests {
    use std::hash::BuildHasherDefault;

    use super::*;

    fn fill<C: Container>(args: C::Args, elems: impl IntoIterator<Item = C::Elem>) -> C {
        let mut container = C::construct(args);
        for elem in elems {
            Container::insert(&mut container, elem);
        }
        container
    }

    #[test]
    fn test_sequences() {
        assert_eq!(fill::<Vec<_>>((), [3, 1, 2]), [3, 1, 2]);
        assert_eq!(fill::<VecDeque<_>>((), [3, 1]), [3, 1]);
        assert_eq!(fill::<LinkedList<_>>((), ['a']), LinkedList::from(['a']));
        assert_eq!(fill::<BinaryHeap<_>>((), [3, 7, 1]).into_sorted_vec(), [1, 3, 7]);
    }

    #[test]
    fn test_associative() {
        let set: BTreeSet<_> = fill((), [2, 2, 1]);
        assert_eq!(set, BTreeSet::from([1, 2]));

        let map: BTreeMap<_, _> = fill((), [(1, 'a'), (1, 'b')]);
        assert_eq!(map, BTreeMap::from([(1, 'b')]));

        let hasher = BuildHasherDefault::<std::collections::hash_map::DefaultHasher>::default();
        let map: HashMap<_, _, _> = fill(hasher, [("x", 1), ("y", 2)]);
        assert_eq!(map.len(), 2);
        assert_eq!(map["y"], 2);

        let set: AHashSet<_> = fill((), [5, 5, 6]);
        assert_eq!(set.len(), 2);
        assert!(set.contains(&6));

        let mut map: AHashMap<_, _> = fill((), [(1, 1), (1, 2)]);
        assert_eq!(map[&1], 2);
        Container::reserve(&mut map, 10);
        assert!(map.capacity() >= 11);
    }
}
