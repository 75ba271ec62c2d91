use std::cmp::Ordering;
use std::fmt::{Debug, Formatter};

use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;

use seqview_core_rs::{
    Bidirectional, BoundedView, Extent, Forward, IntoCursor, RandomAccess, SinglePass, SizedView,
};

/// Applies a function to every element of a view.
#[derive(Clone, Copy, Debug, Constructor, Getters, Dissolve)]
pub struct Transform<V, F> {
    base: V,
    function: F,
}

pub fn transform<V, F, Out>(view: V, function: F) -> Transform<V, F>
where
    V: IntoCursor,
    F: Fn(V::Item) -> Out,
{
    Transform::new(view, function)
}

#[derive(Clone, Constructor)]
pub struct TransformCursor<C, F> {
    base: C,
    function: F,
}

impl<C: Debug, F> Debug for TransformCursor<C, F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransformCursor")
            .field("base", &self.base)
            .finish()
    }
}

impl<C: PartialEq, F> PartialEq for TransformCursor<C, F> {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base
    }
}

impl<C: PartialOrd, F> PartialOrd for TransformCursor<C, F> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.base.partial_cmp(&other.base)
    }
}

impl<C, F, Out> SinglePass for TransformCursor<C, F>
where
    C: SinglePass,
    F: Fn(C::Item) -> Out,
{
    type Item = Out;
    type Value = Out;
    type Category = C::Category;

    fn is_end(&self) -> bool {
        self.base.is_end()
    }

    fn pull(&mut self) -> Out {
        (self.function)(self.base.pull())
    }

    fn step(&mut self) {
        self.base.step()
    }

    fn remaining(&self) -> Option<usize> {
        self.base.remaining()
    }
}

impl<C, F, Out> Forward for TransformCursor<C, F>
where
    C: Forward,
    F: Fn(C::Item) -> Out + Clone,
{
    fn get(&self) -> Out {
        (self.function)(self.base.get())
    }
}

impl<C, F, Out> Bidirectional for TransformCursor<C, F>
where
    C: Bidirectional,
    F: Fn(C::Item) -> Out + Clone,
{
    fn is_begin(&self) -> bool {
        self.base.is_begin()
    }

    fn step_back(&mut self) {
        self.base.step_back()
    }

    fn seek_end(&mut self) {
        self.base.seek_end()
    }
}

impl<C, F, Out> RandomAccess for TransformCursor<C, F>
where
    C: RandomAccess,
    F: Fn(C::Item) -> Out + Clone,
{
    fn jump(&mut self, delta: isize) {
        self.base.jump(delta)
    }

    fn distance_to(&self, other: &Self) -> isize {
        self.base.distance_to(&other.base)
    }
}

impl<C, F, Out> Extent for TransformCursor<C, F>
where
    C: Extent,
    F: Fn(C::Item) -> Out,
{
    fn position(&self) -> usize {
        self.base.position()
    }

    fn extent(&self) -> usize {
        self.base.extent()
    }
}

impl<V, F, Out> IntoCursor for Transform<V, F>
where
    V: IntoCursor,
    F: Fn(V::Item) -> Out,
{
    type Item = Out;
    type Cursor = TransformCursor<V::Cursor, F>;

    fn into_cursor(self) -> Self::Cursor {
        TransformCursor::new(self.base.into_cursor(), self.function)
    }
}

impl<'a, V, F, Out> IntoCursor for &'a Transform<V, F>
where
    &'a V: IntoCursor,
    F: Fn(<&'a V as IntoCursor>::Item) -> Out,
{
    type Item = Out;
    type Cursor = TransformCursor<<&'a V as IntoCursor>::Cursor, &'a F>;

    fn into_cursor(self) -> Self::Cursor {
        TransformCursor::new((&self.base).into_cursor(), &self.function)
    }
}

impl<V, F, Out> BoundedView for Transform<V, F>
where
    V: BoundedView,
    F: Fn(V::Item) -> Out,
{
    fn end(self) -> Self::Cursor {
        TransformCursor::new(self.base.end(), self.function)
    }
}

impl<V: SizedView, F> SizedView for Transform<V, F> {
    fn size(&self) -> usize {
        self.base.size()
    }
}

seqview_core_rs::impl_view!([V, F] Transform<V, F>);
