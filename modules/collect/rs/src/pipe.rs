//! Deferred conversions: `view | pipe::to::<Vec<_>>()`.

use std::marker::PhantomData;

use seqview_core_rs::Adaptor;

use crate::target::{self, Target};

/// Conversion into `T` with default construction arguments.
pub struct To<T>(PhantomData<fn() -> T>);

pub fn to<T>() -> To<T> {
    To(PhantomData)
}

impl<T> Clone for To<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for To<T> {}

impl<S, T> Adaptor<S> for To<T>
where
    T: Target<S>,
    T::Args: Default,
{
    type Output = T::Output;

    fn apply(self, source: S) -> Self::Output {
        target::to::<T, S>(source)
    }
}

/// Conversion into `T` with the given construction arguments.
#[derive(Clone, Copy, Debug)]
pub struct ToWith<T, A> {
    args: A,
    _target: PhantomData<fn() -> T>,
}

pub fn to_with<T, A>(args: A) -> ToWith<T, A> {
    ToWith {
        args,
        _target: PhantomData,
    }
}

impl<S, T, A> Adaptor<S> for ToWith<T, A>
where
    T: Target<S, Args = A>,
{
    type Output = T::Output;

    fn apply(self, source: S) -> Self::Output {
        target::to_with::<T, S>(source, self.args)
    }
}

seqview_core_rs::impl_closure!([T] To<T>, [T, A] ToWith<T, A>);
