use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;

use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;

use seqview_core_rs::{Forward, ForwardTag, IntoCursor, Meet, SinglePass, Subrange};

/// A binary relation deciding whether two neighboring elements belong to the same group.
pub trait Relation<T> {
    /// Determines if `next`, the element right after `previous`, continues the group of `previous`.
    ///
    /// # Arguments
    ///
    /// * `previous` - The last element of the current group.
    /// * `next` - The element following it.
    ///
    /// # Returns
    ///
    /// Returns `true` if both elements are in the same group. The relation is only ever asked
    /// about adjacent elements, it doesn't have to be transitive.
    fn related(&self, previous: &T, next: &T) -> bool;
}

impl<T, F> Relation<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn related(&self, previous: &T, next: &T) -> bool {
        self(previous, next)
    }
}

/// Splits a view into maximal runs of adjacent elements satisfying a relation.
///
/// Every group is a [`Subrange`] of the base view, no elements are copied.
#[derive(Clone, Copy, Debug, Constructor, Getters, Dissolve)]
pub struct ChunkBy<V, F> {
    base: V,
    relation: F,
}

pub fn chunk_by<V, F>(view: V, relation: F) -> ChunkBy<V, F>
where
    V: IntoCursor,
    F: Fn(&V::Item, &V::Item) -> bool,
{
    ChunkBy::new(view, relation)
}

/// Finds the end of the run starting at `start`: the first element that is not related to its
/// predecessor, or the end of the sequence.
fn run_end<C, R>(start: &C, relation: &R) -> C
where
    C: Forward,
    R: Relation<C::Item>,
{
    let mut next = start.clone();
    if next.is_end() {
        return next;
    }
    let mut previous = next.pull();
    while !next.is_end() {
        let item = next.get();
        if !relation.related(&previous, &item) {
            break;
        }
        previous = item;
        next.step();
    }
    next
}

/// Cursor of [`ChunkBy`]: the start of the current group and the precomputed end of it.
pub struct ChunkByCursor<C, R> {
    current: C,
    boundary: C,
    relation: R,
}

impl<C: Forward, R: Relation<C::Item>> ChunkByCursor<C, R> {
    pub fn new(begin: C, relation: R) -> Self {
        let boundary = run_end(&begin, &relation);
        Self {
            current: begin,
            boundary,
            relation,
        }
    }

    fn group(&self) -> Subrange<C> {
        Subrange::new(self.current.clone(), self.boundary.clone())
    }
}

impl<C: Clone, R: Clone> Clone for ChunkByCursor<C, R> {
    fn clone(&self) -> Self {
        Self {
            current: self.current.clone(),
            boundary: self.boundary.clone(),
            relation: self.relation.clone(),
        }
    }
}

impl<C: PartialEq, R> PartialEq for ChunkByCursor<C, R> {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
    }
}

impl<C: Debug, R> Debug for ChunkByCursor<C, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChunkByCursor")
            .field("current", &self.current)
            .field("boundary", &self.boundary)
            .finish()
    }
}

impl<C: Forward, R: Relation<C::Item>> SinglePass for ChunkByCursor<C, R> {
    type Item = Subrange<C>;
    type Value = Subrange<C>;
    type Category = Meet<C::Category, ForwardTag>;

    fn is_end(&self) -> bool {
        self.current.is_end()
    }

    fn pull(&mut self) -> Self::Item {
        let group = self.group();
        self.step();
        group
    }

    fn step(&mut self) {
        debug_assert!(!self.current.is_end());
        self.current = self.boundary.clone();
        self.boundary = run_end(&self.current, &self.relation);
    }
}

impl<C: Forward, R: Relation<C::Item> + Clone> Forward for ChunkByCursor<C, R> {
    fn get(&self) -> Self::Item {
        self.group()
    }
}

impl<V, F> IntoCursor for ChunkBy<V, F>
where
    V: IntoCursor,
    V::Cursor: Forward,
    F: Fn(&V::Item, &V::Item) -> bool,
{
    type Item = Subrange<V::Cursor>;
    type Cursor = ChunkByCursor<V::Cursor, F>;

    fn into_cursor(self) -> Self::Cursor {
        ChunkByCursor::new(self.base.into_cursor(), self.relation)
    }
}

impl<'a, V, F> IntoCursor for &'a ChunkBy<V, F>
where
    &'a V: IntoCursor,
    <&'a V as IntoCursor>::Cursor: Forward,
    F: Fn(&<&'a V as IntoCursor>::Item, &<&'a V as IntoCursor>::Item) -> bool,
{
    type Item = Subrange<<&'a V as IntoCursor>::Cursor>;
    type Cursor = ChunkByCursor<<&'a V as IntoCursor>::Cursor, &'a F>;

    fn into_cursor(self) -> Self::Cursor {
        ChunkByCursor::new((&self.base).into_cursor(), &self.relation)
    }
}

/// Groups adjacent elements with equal keys, yielding `(key, group)` pairs.
#[derive(Clone, Copy, Debug, Getters, Dissolve)]
pub struct ChunkByKey<V, K, Key> {
    base: V,
    key: K,
    #[getter(skip)]
    _key: PhantomData<fn() -> Key>,
}

pub fn chunk_by_key<V, K, Key>(view: V, key: K) -> ChunkByKey<V, K, Key>
where
    V: IntoCursor,
    K: Fn(&V::Item) -> Key,
    Key: PartialEq,
{
    ChunkByKey {
        base: view,
        key,
        _key: PhantomData,
    }
}

/// Elements are related when their keys are equal.
pub struct SameKey<K, Key> {
    key: K,
    _key: PhantomData<fn() -> Key>,
}

impl<K: Clone, Key> Clone for SameKey<K, Key> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            _key: PhantomData,
        }
    }
}

impl<T, K, Key> Relation<T> for SameKey<K, Key>
where
    K: Fn(&T) -> Key,
    Key: PartialEq,
{
    fn related(&self, previous: &T, next: &T) -> bool {
        (self.key)(previous) == (self.key)(next)
    }
}

pub struct ChunkByKeyCursor<C, K, Key> {
    groups: ChunkByCursor<C, SameKey<K, Key>>,
}

impl<C, K, Key> ChunkByKeyCursor<C, K, Key>
where
    C: Forward,
    K: Fn(&C::Item) -> Key,
    Key: PartialEq,
{
    pub fn new(begin: C, key: K) -> Self {
        let relation = SameKey {
            key,
            _key: PhantomData,
        };
        Self {
            groups: ChunkByCursor::new(begin, relation),
        }
    }

    fn keyed(&self, group: Subrange<C>) -> (Key, Subrange<C>) {
        ((self.groups.relation.key)(&group.first()), group)
    }
}

impl<C: Clone, K: Clone, Key> Clone for ChunkByKeyCursor<C, K, Key> {
    fn clone(&self) -> Self {
        Self {
            groups: self.groups.clone(),
        }
    }
}

impl<C: PartialEq, K, Key> PartialEq for ChunkByKeyCursor<C, K, Key> {
    fn eq(&self, other: &Self) -> bool {
        self.groups == other.groups
    }
}

impl<C, K, Key> SinglePass for ChunkByKeyCursor<C, K, Key>
where
    C: Forward,
    K: Fn(&C::Item) -> Key,
    Key: PartialEq,
{
    type Item = (Key, Subrange<C>);
    type Value = (Key, Subrange<C>);
    type Category = Meet<C::Category, ForwardTag>;

    fn is_end(&self) -> bool {
        self.groups.is_end()
    }

    fn pull(&mut self) -> Self::Item {
        let group = self.groups.pull();
        self.keyed(group)
    }

    fn step(&mut self) {
        self.groups.step()
    }
}

impl<C, K, Key> Forward for ChunkByKeyCursor<C, K, Key>
where
    C: Forward,
    K: Fn(&C::Item) -> Key + Clone,
    Key: PartialEq,
{
    fn get(&self) -> Self::Item {
        self.keyed(self.groups.get())
    }
}

impl<V, K, Key> IntoCursor for ChunkByKey<V, K, Key>
where
    V: IntoCursor,
    V::Cursor: Forward,
    K: Fn(&V::Item) -> Key,
    Key: PartialEq,
{
    type Item = (Key, Subrange<V::Cursor>);
    type Cursor = ChunkByKeyCursor<V::Cursor, K, Key>;

    fn into_cursor(self) -> Self::Cursor {
        ChunkByKeyCursor::new(self.base.into_cursor(), self.key)
    }
}

impl<'a, V, K, Key> IntoCursor for &'a ChunkByKey<V, K, Key>
where
    &'a V: IntoCursor,
    <&'a V as IntoCursor>::Cursor: Forward,
    K: Fn(&<&'a V as IntoCursor>::Item) -> Key,
    Key: PartialEq,
{
    type Item = (Key, Subrange<<&'a V as IntoCursor>::Cursor>);
    type Cursor = ChunkByKeyCursor<<&'a V as IntoCursor>::Cursor, &'a K, Key>;

    fn into_cursor(self) -> Self::Cursor {
        ChunkByKeyCursor::new((&self.base).into_cursor(), &self.key)
    }
}

seqview_core_rs::impl_view!([V, F] ChunkBy<V, F>, [V, K, Key] ChunkByKey<V, K, Key>);
