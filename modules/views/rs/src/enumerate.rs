use std::cmp::Ordering;

use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;

use seqview_core_rs::num::{offset, PrimInt};
use seqview_core_rs::{
    Bidirectional, BoundedView, Extent, Forward, Freeze, IntoCursor, RandomAccess, SinglePass,
    SizedView,
};

/// Pairs every element of a view with its index, counting from `start`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Constructor, Getters, Dissolve)]
pub struct Enumerate<V, U = usize> {
    base: V,
    start: U,
}

pub fn enumerate<V>(view: V) -> Enumerate<V> {
    Enumerate::new(view, 0)
}

pub fn enumerate_from<V, U: PrimInt>(view: V, start: U) -> Enumerate<V, U> {
    Enumerate::new(view, start)
}

/// Cursor of [`Enumerate`]: the base cursor and the index of its current element.
///
/// Cursors are compared through their base cursors only.
#[derive(Clone, Copy, Debug, Constructor)]
pub struct EnumerateCursor<C, U> {
    base: C,
    index: U,
}

impl<C, U> EnumerateCursor<C, U> {
    pub fn base(&self) -> &C {
        &self.base
    }

    pub fn index(&self) -> &U {
        &self.index
    }
}

impl<C: PartialEq, U> PartialEq for EnumerateCursor<C, U> {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base
    }
}

impl<C: PartialOrd, U> PartialOrd for EnumerateCursor<C, U> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.base.partial_cmp(&other.base)
    }
}

impl<C: SinglePass, U: PrimInt> SinglePass for EnumerateCursor<C, U> {
    type Item = (U, C::Item);
    type Value = (U, C::Value);
    type Category = C::Category;

    fn is_end(&self) -> bool {
        self.base.is_end()
    }

    fn pull(&mut self) -> Self::Item {
        let item = (self.index, self.base.pull());
        self.index = self.index + U::one();
        item
    }

    fn step(&mut self) {
        self.base.step();
        self.index = self.index + U::one();
    }

    fn remaining(&self) -> Option<usize> {
        self.base.remaining()
    }
}

impl<C: Forward, U: PrimInt> Forward for EnumerateCursor<C, U> {
    fn get(&self) -> Self::Item {
        (self.index, self.base.get())
    }
}

impl<C: Bidirectional, U: PrimInt> Bidirectional for EnumerateCursor<C, U> {
    fn is_begin(&self) -> bool {
        self.base.is_begin()
    }

    fn step_back(&mut self) {
        self.base.step_back();
        self.index = self.index - U::one();
    }
}

impl<C: RandomAccess, U: PrimInt> RandomAccess for EnumerateCursor<C, U> {
    fn jump(&mut self, delta: isize) {
        self.base.jump(delta);
        self.index = offset(self.index, delta);
    }

    fn distance_to(&self, other: &Self) -> isize {
        self.base.distance_to(&other.base)
    }
}

impl<C: Extent, U: PrimInt> Extent for EnumerateCursor<C, U> {
    fn position(&self) -> usize {
        self.base.position()
    }

    fn extent(&self) -> usize {
        self.base.extent()
    }
}

impl<C: Freeze, U: PrimInt> Freeze for EnumerateCursor<C, U> {
    type Frozen = EnumerateCursor<C::Frozen, U>;

    fn freeze(self) -> Self::Frozen {
        EnumerateCursor::new(self.base.freeze(), self.index)
    }
}

impl<V: IntoCursor, U: PrimInt> IntoCursor for Enumerate<V, U> {
    type Item = (U, V::Item);
    type Cursor = EnumerateCursor<V::Cursor, U>;

    fn into_cursor(self) -> Self::Cursor {
        EnumerateCursor::new(self.base.into_cursor(), self.start)
    }
}

impl<'a, V, U: PrimInt> IntoCursor for &'a Enumerate<V, U>
where
    &'a V: IntoCursor,
{
    type Item = (U, <&'a V as IntoCursor>::Item);
    type Cursor = EnumerateCursor<<&'a V as IntoCursor>::Cursor, U>;

    fn into_cursor(self) -> Self::Cursor {
        EnumerateCursor::new(self.base.into_cursor(), self.start)
    }
}

impl<'a, V, U: PrimInt> IntoCursor for &'a mut Enumerate<V, U>
where
    &'a mut V: IntoCursor,
{
    type Item = (U, <&'a mut V as IntoCursor>::Item);
    type Cursor = EnumerateCursor<<&'a mut V as IntoCursor>::Cursor, U>;

    fn into_cursor(self) -> Self::Cursor {
        EnumerateCursor::new((&mut self.base).into_cursor(), self.start)
    }
}

fn end_index<U: PrimInt>(start: U, size: usize) -> U {
    match ::num::cast::<usize, U>(size).and_then(|size| start.checked_add(&size)) {
        Some(index) => index,
        None => panic!("index of the end of an enumeration doesn't fit into {start:?}'s type"),
    }
}

impl<V, U: PrimInt> BoundedView for Enumerate<V, U>
where
    V: BoundedView + SizedView,
{
    fn end(self) -> Self::Cursor {
        let index = end_index(self.start, self.base.size());
        EnumerateCursor::new(self.base.end(), index)
    }
}

impl<'a, V, U: PrimInt> BoundedView for &'a Enumerate<V, U>
where
    &'a V: BoundedView,
    V: SizedView,
{
    fn end(self) -> Self::Cursor {
        let index = end_index(self.start, self.base.size());
        EnumerateCursor::new((&self.base).end(), index)
    }
}

impl<V: SizedView, U> SizedView for Enumerate<V, U> {
    fn size(&self) -> usize {
        self.base.size()
    }
}

seqview_core_rs::impl_view!([V, U] Enumerate<V, U>);
