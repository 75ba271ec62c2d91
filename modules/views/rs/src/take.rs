use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;

use seqview_core_rs::{Forward, ForwardTag, Freeze, IntoCursor, Meet, SinglePass, SizedView};

/// The first `count` elements of a view, or all of them if the view is shorter.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Constructor, Getters, Dissolve)]
pub struct Take<V> {
    base: V,
    count: usize,
}

pub fn take<V>(view: V, count: usize) -> Take<V> {
    Take::new(view, count)
}

/// Cursor of [`Take`]. Cursors are compared by the number of elements left.
#[derive(Clone, Copy, Debug, Constructor)]
pub struct TakeCursor<C> {
    base: C,
    left: usize,
}

impl<C> PartialEq for TakeCursor<C> {
    fn eq(&self, other: &Self) -> bool {
        self.left == other.left
    }
}

impl<C: SinglePass> SinglePass for TakeCursor<C> {
    type Item = C::Item;
    type Value = C::Value;
    type Category = Meet<C::Category, ForwardTag>;

    fn is_end(&self) -> bool {
        self.left == 0 || self.base.is_end()
    }

    fn pull(&mut self) -> Self::Item {
        self.left -= 1;
        self.base.pull()
    }

    fn step(&mut self) {
        self.left -= 1;
        self.base.step();
    }

    fn remaining(&self) -> Option<usize> {
        self.base.remaining().map(|remaining| remaining.min(self.left))
    }
}

impl<C: Forward> Forward for TakeCursor<C> {
    fn get(&self) -> Self::Item {
        self.base.get()
    }
}

impl<C: Freeze> Freeze for TakeCursor<C> {
    type Frozen = TakeCursor<C::Frozen>;

    fn freeze(self) -> Self::Frozen {
        TakeCursor::new(self.base.freeze(), self.left)
    }
}

impl<V: IntoCursor> IntoCursor for Take<V> {
    type Item = V::Item;
    type Cursor = TakeCursor<V::Cursor>;

    fn into_cursor(self) -> Self::Cursor {
        TakeCursor::new(self.base.into_cursor(), self.count)
    }
}

impl<'a, V> IntoCursor for &'a Take<V>
where
    &'a V: IntoCursor,
{
    type Item = <&'a V as IntoCursor>::Item;
    type Cursor = TakeCursor<<&'a V as IntoCursor>::Cursor>;

    fn into_cursor(self) -> Self::Cursor {
        TakeCursor::new((&self.base).into_cursor(), self.count)
    }
}

impl<'a, V> IntoCursor for &'a mut Take<V>
where
    &'a mut V: IntoCursor,
{
    type Item = <&'a mut V as IntoCursor>::Item;
    type Cursor = TakeCursor<<&'a mut V as IntoCursor>::Cursor>;

    fn into_cursor(self) -> Self::Cursor {
        TakeCursor::new((&mut self.base).into_cursor(), self.count)
    }
}

impl<V: SizedView> SizedView for Take<V> {
    fn size(&self) -> usize {
        self.base.size().min(self.count)
    }
}

seqview_core_rs::impl_view!([V] Take<V>);

#[cfg(test)]
mod tests {
    use seqview_core_rs::{generate, iota};

    use super::*;
    use crate::cycle::cycle;

    #[test]
    fn test_take() {
        let data = vec![1, 2, 3, 4];
        let items: Vec<_> = take(&data, 2).into_iter().copied().collect();
        assert_eq!(items, [1, 2]);

        let view = take(&data, 10);
        assert_eq!(view.size(), 4);
        assert_eq!((&view).into_iter().count(), 4);
        assert_eq!(view.into_cursor().remaining(), Some(4));
    }

    #[test]
    fn test_unbounded_inputs() {
        let items: Vec<_> = take(iota(3u8), 4).into_iter().collect();
        assert_eq!(items, [3, 4, 5, 6]);

        let data = ['a', 'b'];
        let items: String = take(cycle(&data), 5).into_iter().collect();
        assert_eq!(items, "ababa");

        let view = take(generate(std::iter::repeat(1)), 3);
        assert_eq!(view.into_iter().sum::<i32>(), 3);
    }

    #[test]
    fn test_zero() {
        let data = [1];
        assert!(take(&data, 0).into_cursor().is_end());
    }

    #[test]
    fn test_mutable() {
        let mut data = vec![1, 2, 3];
        for x in take(&mut data, 2) {
            *x = 0;
        }
        assert_eq!(data, [0, 0, 3]);
    }
}
