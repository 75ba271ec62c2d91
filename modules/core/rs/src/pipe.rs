use derive_getters::Dissolve;
use derive_more::Constructor;

use crate::cursor::{BoundedView, IntoCursor, SizedView};

/// A deferred adaptor: something that can be applied to a view with `view | adaptor`.
pub trait Adaptor<V> {
    type Output;

    fn apply(self, view: V) -> Self::Output;
}

/// Adaptor objects that compose with each other before being applied to a view.
///
/// `first.then(second)` and `first | second` both build an adaptor applying `first` and then
/// `second`.
pub trait Closure: Sized {
    fn then<Next>(self, next: Next) -> Then<Self, Next> {
        Then::new(self, next)
    }
}

#[derive(Clone, Copy, Debug, Constructor, Dissolve)]
pub struct Then<A, B> {
    first: A,
    second: B,
}

impl<V, A, B> Adaptor<V> for Then<A, B>
where
    A: Adaptor<V>,
    B: Adaptor<A::Output>,
{
    type Output = B::Output;

    fn apply(self, view: V) -> Self::Output {
        self.second.apply(self.first.apply(view))
    }
}

/// Marks adaptor objects as [`Closure`]s and implements `closure | closure` for them.
#[macro_export]
macro_rules! impl_closure {
    ($([$($g:tt)*] $closure:ty),* $(,)?) => {$(
        impl<$($g)*> $crate::pipe::Closure for $closure {}

        impl<Next, $($g)*> ::std::ops::BitOr<Next> for $closure {
            type Output = $crate::pipe::Then<Self, Next>;

            fn bitor(self, next: Next) -> Self::Output {
                $crate::pipe::Then::new(self, next)
            }
        }
    )*};
}

crate::impl_closure!([A, B] Then<A, B>);

/// Transparent wrapper lifting any view (a std container by reference, for instance) into the
/// pipe syntax.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct All<V>(V);

pub fn all<V>(view: V) -> All<V> {
    All(view)
}

impl<V> All<V> {
    pub fn base(&self) -> &V {
        &self.0
    }

    pub fn into_base(self) -> V {
        self.0
    }
}

impl<V: IntoCursor> IntoCursor for All<V> {
    type Item = V::Item;
    type Cursor = V::Cursor;

    fn into_cursor(self) -> Self::Cursor {
        self.0.into_cursor()
    }
}

impl<'a, V> IntoCursor for &'a All<V>
where
    &'a V: IntoCursor,
{
    type Item = <&'a V as IntoCursor>::Item;
    type Cursor = <&'a V as IntoCursor>::Cursor;

    fn into_cursor(self) -> Self::Cursor {
        (&self.0).into_cursor()
    }
}

impl<'a, V> IntoCursor for &'a mut All<V>
where
    &'a mut V: IntoCursor,
{
    type Item = <&'a mut V as IntoCursor>::Item;
    type Cursor = <&'a mut V as IntoCursor>::Cursor;

    fn into_cursor(self) -> Self::Cursor {
        (&mut self.0).into_cursor()
    }
}

impl<V: BoundedView> BoundedView for All<V> {
    fn end(self) -> Self::Cursor {
        self.0.end()
    }
}

impl<'a, V> BoundedView for &'a All<V>
where
    &'a V: BoundedView,
{
    fn end(self) -> Self::Cursor {
        (&self.0).end()
    }
}

impl<V: SizedView> SizedView for All<V> {
    fn size(&self) -> usize {
        self.0.size()
    }
}

/// Implements the plumbing every view type shares: `IntoIterator` by value and by reference
/// (whenever the corresponding `IntoCursor` exists) and `view | adaptor`.
///
/// Generic parameters are listed in brackets in front of the type: `impl_view!([V, U] Enumerate<V, U>)`.
#[macro_export]
macro_rules! impl_view {
    ($([$($g:tt)*] $view:ty),* $(,)?) => {$(
        impl<$($g)*> ::std::iter::IntoIterator for $view
        where
            $view: $crate::IntoCursor,
        {
            type Item = <$view as $crate::IntoCursor>::Item;
            type IntoIter = $crate::Traverse<<$view as $crate::IntoCursor>::Cursor>;

            fn into_iter(self) -> Self::IntoIter {
                $crate::Traverse::new($crate::IntoCursor::into_cursor(self))
            }
        }

        impl<'view, $($g)*> ::std::iter::IntoIterator for &'view $view
        where
            &'view $view: $crate::IntoCursor,
        {
            type Item = <&'view $view as $crate::IntoCursor>::Item;
            type IntoIter = $crate::Traverse<<&'view $view as $crate::IntoCursor>::Cursor>;

            fn into_iter(self) -> Self::IntoIter {
                $crate::Traverse::new($crate::IntoCursor::into_cursor(self))
            }
        }

        impl<'view, $($g)*> ::std::iter::IntoIterator for &'view mut $view
        where
            &'view mut $view: $crate::IntoCursor,
        {
            type Item = <&'view mut $view as $crate::IntoCursor>::Item;
            type IntoIter = $crate::Traverse<<&'view mut $view as $crate::IntoCursor>::Cursor>;

            fn into_iter(self) -> Self::IntoIter {
                $crate::Traverse::new($crate::IntoCursor::into_cursor(self))
            }
        }

        impl<Adp: $crate::pipe::Adaptor<$view>, $($g)*> ::std::ops::BitOr<Adp> for $view {
            type Output = Adp::Output;

            fn bitor(self, adaptor: Adp) -> Self::Output {
                adaptor.apply(self)
            }
        }
    )*};
}

crate::impl_view!(
    [V] All<V>,
    [T, L] crate::iota::Iota<T, L>,
    [I] crate::generate::Generate<I>,
    [C] crate::subrange::Subrange<C>,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iota::iota_until;

    struct Doubled;

    impl<V> Adaptor<V> for Doubled
    where
        V: IntoIterator<Item = u32>,
    {
        type Output = Vec<u32>;

        fn apply(self, view: V) -> Vec<u32> {
            view.into_iter().map(|x| x * 2).collect()
        }
    }

    #[derive(Clone, Copy)]
    struct Shifted(u32);

    impl<V> Adaptor<V> for Shifted
    where
        V: IntoIterator<Item = u32>,
    {
        type Output = Vec<u32>;

        fn apply(self, view: V) -> Vec<u32> {
            view.into_iter().map(|x| x + self.0).collect()
        }
    }

    crate::impl_closure!([] Shifted);

    #[test]
    fn test_pipe() {
        assert_eq!(iota_until(0u32, 3) | Doubled, [0, 2, 4]);
    }

    #[test]
    fn test_composition() {
        let composed = Shifted(1).then(Doubled);
        assert_eq!(iota_until(0u32, 3) | composed, [2, 4, 6]);
        assert_eq!(iota_until(0u32, 2) | (Shifted(10) | Doubled), [20, 22]);
    }

    #[test]
    fn test_all() {
        let mut data = vec![1, 2, 3];
        let view = all(&data);
        assert_eq!(view.size(), 3);
        assert_eq!((&view).into_iter().count(), 3);
        assert_eq!(view.into_iter().copied().sum::<i32>(), 6);

        let mut view = all(&mut data);
        for x in &mut view {
            *x += 1;
        }
        assert_eq!(view.into_base(), &[2, 3, 4]);
    }
}
