//! Adaptor objects for the pipe syntax: `all(&data) | pipe::enumerate() | pipe::take(3)`.
//!
//! Every object here is a [`Closure`](seqview_core_rs::Closure): closures compose with `|` or
//! [`then`](seqview_core_rs::Closure::then) into a reusable adaptor before being applied to a view.

use std::marker::PhantomData;

use seqview_core_rs::num::PrimInt;
use seqview_core_rs::Adaptor;

use crate::chunk_by::{ChunkBy, ChunkByKey};
use crate::cycle::Cycle;
use crate::enumerate::Enumerate;
use crate::product::CartesianProduct;
use crate::stride::Stride;
use crate::take::Take;
use crate::transform::Transform;

#[derive(Clone, Copy, Debug, Default)]
pub struct EnumerateFn<U = usize> {
    start: U,
}

pub fn enumerate() -> EnumerateFn {
    EnumerateFn { start: 0 }
}

pub fn enumerate_from<U: PrimInt>(start: U) -> EnumerateFn<U> {
    EnumerateFn { start }
}

impl<V, U: PrimInt> Adaptor<V> for EnumerateFn<U> {
    type Output = Enumerate<V, U>;

    fn apply(self, view: V) -> Self::Output {
        Enumerate::new(view, self.start)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct CycleFn;

pub fn cycle() -> CycleFn {
    CycleFn
}

impl<V> Adaptor<V> for CycleFn {
    type Output = Cycle<V>;

    fn apply(self, view: V) -> Self::Output {
        Cycle::new(view)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ChunkByFn<F> {
    relation: F,
}

/// Closure parameters can't be inferred before the view is known, annotate them:
/// `pipe::chunk_by(|a: &&i32, b: &&i32| a < b)`.
pub fn chunk_by<F>(relation: F) -> ChunkByFn<F> {
    ChunkByFn { relation }
}

impl<V, F> Adaptor<V> for ChunkByFn<F> {
    type Output = ChunkBy<V, F>;

    fn apply(self, view: V) -> Self::Output {
        ChunkBy::new(view, self.relation)
    }
}

pub struct ChunkByKeyFn<K, Key> {
    key: K,
    _key: PhantomData<fn() -> Key>,
}

pub fn chunk_by_key<K, Key: PartialEq>(key: K) -> ChunkByKeyFn<K, Key> {
    ChunkByKeyFn {
        key,
        _key: PhantomData,
    }
}

impl<V, K, Key> Adaptor<V> for ChunkByKeyFn<K, Key>
where
    V: seqview_core_rs::IntoCursor,
    K: Fn(&V::Item) -> Key,
    Key: PartialEq,
{
    type Output = ChunkByKey<V, K, Key>;

    fn apply(self, view: V) -> Self::Output {
        crate::chunk_by::chunk_by_key(view, self.key)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct TakeFn {
    count: usize,
}

pub fn take(count: usize) -> TakeFn {
    TakeFn { count }
}

impl<V> Adaptor<V> for TakeFn {
    type Output = Take<V>;

    fn apply(self, view: V) -> Self::Output {
        Take::new(view, self.count)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct StrideFn {
    step: usize,
}

/// Panics on a zero step, like the `stride` function.
pub fn stride(step: usize) -> StrideFn {
    assert!(step > 0, "Stride step must be positive");
    StrideFn { step }
}

impl<V> Adaptor<V> for StrideFn {
    type Output = Stride<V>;

    fn apply(self, view: V) -> Self::Output {
        crate::stride::stride(view, self.step)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct TransformFn<F> {
    function: F,
}

pub fn transform<F>(function: F) -> TransformFn<F> {
    TransformFn { function }
}

impl<V, F> Adaptor<V> for TransformFn<F> {
    type Output = Transform<V, F>;

    fn apply(self, view: V) -> Self::Output {
        Transform::new(view, self.function)
    }
}

/// Pairs the piped view with another one: `view | pipe::product_with(&other)` is
/// `cartesian_product((view, &other))`.
#[derive(Clone, Copy, Debug)]
pub struct ProductWithFn<W> {
    other: W,
}

pub fn product_with<W>(other: W) -> ProductWithFn<W> {
    ProductWithFn { other }
}

impl<V, W> Adaptor<V> for ProductWithFn<W> {
    type Output = CartesianProduct<(V, W)>;

    fn apply(self, view: V) -> Self::Output {
        CartesianProduct::new((view, self.other))
    }
}

seqview_core_rs::impl_closure!(
    [U] EnumerateFn<U>,
    [] CycleFn,
    [F] ChunkByFn<F>,
    [K, Key] ChunkByKeyFn<K, Key>,
    [] TakeFn,
    [] StrideFn,
    [F] TransformFn<F>,
    [W] ProductWithFn<W>,
);
