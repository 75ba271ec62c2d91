use std::marker::PhantomData;

use derive_more::Display;
use seqview_core_rs::{traverse, IntoCursor, SinglePass};

use crate::container::Container;
use crate::convert::Convert;

/// How a [`Target`] builds its output.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Display)]
pub enum Strategy {
    /// `From<Source>` on the target.
    Direct,
    /// Element by element into a [`Container`].
    Insert,
    /// Element by element, each element being a sequence converted into an inner container.
    Nested,
    /// `FromIterator` over the traversed source.
    FromCursors,
}

/// Everything `to` can build from a source `S`.
///
/// Containers are targets on their own. Marker types select other routes: [`Direct`],
/// [`FromCursors`] and the element-deducing kinds in [`deduce`](crate::deduce).
pub trait Target<S> {
    type Output;
    type Args;

    const STRATEGY: Strategy;

    fn build(source: S, args: Self::Args) -> Self::Output;
}

pub(crate) fn rebuild<S, C>(source: S, args: C::Args) -> C
where
    S: IntoCursor,
    C: Container,
    S::Item: Convert<C::Elem>,
{
    let mut cursor = source.into_cursor();
    let mut container = C::construct(args);
    if let Some(remaining) = cursor.remaining() {
        log::trace!("Reserving {remaining} elements");
        container.reserve(remaining);
    }
    while !cursor.is_end() {
        container.insert(cursor.pull().convert());
    }
    container
}

impl<S, C> Target<S> for C
where
    S: IntoCursor,
    C: Container,
    S::Item: Convert<C::Elem>,
{
    type Output = C;
    type Args = C::Args;

    const STRATEGY: Strategy = if <S::Item as Convert<C::Elem>>::NESTED {
        Strategy::Nested
    } else {
        Strategy::Insert
    };

    fn build(source: S, args: C::Args) -> C {
        rebuild(source, args)
    }
}

impl<S> Target<S> for String
where
    S: IntoCursor,
    S::Item: Convert<char>,
{
    type Output = String;
    type Args = ();

    const STRATEGY: Strategy = Strategy::Insert;

    fn build(source: S, _: ()) -> String {
        let mut cursor = source.into_cursor();
        let mut result = String::new();
        if let Some(remaining) = cursor.remaining() {
            result.reserve(remaining);
        }
        while !cursor.is_end() {
            result.push(cursor.pull().convert());
        }
        result
    }
}

/// Builds `C` with its `From<Source>` implementation.
pub struct Direct<C>(PhantomData<fn() -> C>);

impl<S, C: From<S>> Target<S> for Direct<C> {
    type Output = C;
    type Args = ();

    const STRATEGY: Strategy = Strategy::Direct;

    fn build(source: S, _: ()) -> C {
        C::from(source)
    }
}

/// Builds `C` by collecting the traversed source.
pub struct FromCursors<C>(PhantomData<fn() -> C>);

impl<S, C> Target<S> for FromCursors<C>
where
    S: IntoCursor,
    C: FromIterator<S::Item>,
{
    type Output = C;
    type Args = ();

    const STRATEGY: Strategy = Strategy::FromCursors;

    fn build(source: S, _: ()) -> C {
        traverse(source).collect()
    }
}

/// Converts `source` into `T`, constructing the result with default arguments.
///
/// `T` is either a container, `to::<Vec<i32>, _>(&list)`, or a marker selecting another route,
/// `to::<deduce::Vec, _>(&list)`.
///
/// A container is always filled element by element: inserted directly, or converted recursively
/// when its elements are sequences themselves. Construction through `From` or `FromIterator` is
/// never picked on its own, since the impls for every route would overlap and Rust can't rank
/// them. Ask for it with [`Direct<C>`] or [`FromCursors<C>`].
pub fn to<T, S>(source: S) -> T::Output
where
    T: Target<S>,
    T::Args: Default,
{
    to_with::<T, S>(source, T::Args::default())
}

/// Converts `source` into `T` with explicit construction arguments, e.g. a hasher.
pub fn to_with<T, S>(source: S, args: T::Args) -> T::Output
where
    T: Target<S>,
{
    log::trace!(
        "Converting {} into {} ({} strategy)",
        std::any::type_name::<S>(),
        std::any::type_name::<T>(),
        T::STRATEGY
    );
    T::build(source, args)
}
