use std::cmp::Ordering;

use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;
use eyre::{ensure, Result};

use seqview_core_rs::{Bidirectional, Extent, Forward, IntoCursor, RandomAccess, SinglePass};

/// Repeats a view endlessly. The view must be traversable more than once.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Constructor, Getters, Dissolve)]
pub struct Cycle<V> {
    base: V,
}

pub fn cycle<V>(view: V) -> Cycle<V> {
    Cycle::new(view)
}

/// Cursor of [`Cycle`]. It keeps the begin cursor of the base to restart from.
///
/// A cycle never ends. Reading, stepping back or jumping over an empty base is a precondition
/// violation.
#[derive(Clone, Debug)]
pub struct CycleCursor<C> {
    begin: C,
    current: C,
}

impl<C: Forward> CycleCursor<C> {
    pub fn new(begin: C) -> Self {
        Self {
            current: begin.clone(),
            begin,
        }
    }

    /// Position inside the base sequence.
    pub fn current(&self) -> &C {
        &self.current
    }

    fn restart_at_end(&mut self) {
        if self.current.is_end() {
            self.current = self.begin.clone();
        }
    }
}

impl<C: RandomAccess + Extent> CycleCursor<C> {
    /// Checked [`RandomAccess::jump`]: fails instead of dividing by zero for an empty base.
    pub fn try_jump(&mut self, delta: isize) -> Result<()> {
        ensure!(
            self.current.extent() > 0,
            "Cannot move a cycle over an empty sequence by {delta}"
        );
        self.jump(delta);
        Ok(())
    }
}

impl<C: PartialEq> PartialEq for CycleCursor<C> {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
    }
}

impl<C: PartialOrd> PartialOrd for CycleCursor<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.current.partial_cmp(&other.current)
    }
}

impl<C: Forward> SinglePass for CycleCursor<C> {
    type Item = C::Item;
    type Value = C::Value;
    type Category = C::Category;

    fn is_end(&self) -> bool {
        false
    }

    fn pull(&mut self) -> Self::Item {
        let item = self.current.pull();
        self.restart_at_end();
        item
    }

    fn step(&mut self) {
        self.current.step();
        self.restart_at_end();
    }
}

impl<C: Forward> Forward for CycleCursor<C> {
    fn get(&self) -> Self::Item {
        self.current.get()
    }
}

impl<C: Bidirectional> Bidirectional for CycleCursor<C> {
    fn is_begin(&self) -> bool {
        self.current.is_begin()
    }

    fn step_back(&mut self) {
        if self.current.is_begin() {
            self.current.seek_end();
        }
        self.current.step_back();
    }

    fn seek_end(&mut self) {
        panic!("A cycle has no end position")
    }
}

impl<C: RandomAccess + Extent> RandomAccess for CycleCursor<C> {
    fn jump(&mut self, delta: isize) {
        let extent = self.current.extent() as isize;
        let position = self.current.position() as isize;
        let target = (position + delta).rem_euclid(extent);
        self.current.jump(target - position);
    }

    fn distance_to(&self, other: &Self) -> isize {
        self.current.distance_to(&other.current)
    }
}

impl<V> IntoCursor for Cycle<V>
where
    V: IntoCursor,
    V::Cursor: Forward,
{
    type Item = V::Item;
    type Cursor = CycleCursor<V::Cursor>;

    fn into_cursor(self) -> Self::Cursor {
        CycleCursor::new(self.base.into_cursor())
    }
}

impl<'a, V> IntoCursor for &'a Cycle<V>
where
    &'a V: IntoCursor,
    <&'a V as IntoCursor>::Cursor: Forward,
{
    type Item = <&'a V as IntoCursor>::Item;
    type Cursor = CycleCursor<<&'a V as IntoCursor>::Cursor>;

    fn into_cursor(self) -> Self::Cursor {
        CycleCursor::new((&self.base).into_cursor())
    }
}

seqview_core_rs::impl_view!([V] Cycle<V>);

#[cfg(test)]
mod tests {
    use std::collections::LinkedList;

    use seqview_core_rs::{iota_until, Capability, Category, CategoryOf};

    use super::*;

    fn first<C: SinglePass>(mut cursor: C, n: usize) -> Vec<C::Item> {
        (0..n).map(|_| cursor.pull()).collect()
    }

    #[test]
    fn test_cycle() {
        let data = [1, 2, 3];
        let items = first(cycle(&data).into_cursor(), 7);
        assert_eq!(items, [&1, &2, &3, &1, &2, &3, &1]);

        let single = [9];
        assert_eq!(first(cycle(&single).into_cursor(), 3), [&9, &9, &9]);
    }

    #[test]
    fn test_never_ends() {
        let data = [1, 2];
        let mut cursor = cycle(&data).into_cursor();
        for _ in 0..10 {
            assert!(!cursor.is_end());
            cursor.step();
        }
        assert_eq!(cursor.remaining(), None);
    }

    #[test]
    fn test_step_back() {
        let data = vec!['a', 'b', 'c'];
        let mut cursor = cycle(&data).into_cursor();
        assert!(cursor.is_begin());
        cursor.step_back();
        assert_eq!(*cursor.get(), 'c');
        cursor.step_back();
        assert_eq!(*cursor.get(), 'b');
        cursor.step();
        cursor.step();
        assert_eq!(*cursor.get(), 'a');
    }

    #[test]
    fn test_modular_jump() {
        let data = [0, 1, 2, 3, 4];
        let mut cursor = cycle(&data).into_cursor();
        for (delta, expected) in [(7, 2), (-3, 4), (-14, 0), (5, 0), (0, 0), (-1, 4), (11, 0)] {
            cursor.jump(delta);
            assert_eq!(*cursor.get(), expected, "jump by {delta}");
        }
    }

    #[test]
    fn test_jump_matches_stepping() {
        let range = iota_until(0u32, 4);
        let view = cycle(range);
        for delta in -9isize..=9 {
            let mut jumped = view.into_cursor();
            jumped.jump(delta);

            let mut walked = view.into_cursor();
            for _ in 0..delta.unsigned_abs() {
                if delta > 0 {
                    walked.step();
                } else {
                    walked.step_back();
                }
            }
            assert_eq!(jumped.get(), walked.get(), "delta {delta}");
        }
    }

    #[test]
    fn test_try_jump_over_empty() {
        let empty: [u8; 0] = [];
        let mut cursor = cycle(&empty).into_cursor();
        assert!(cursor.try_jump(3).is_err());

        let data = [1u8];
        let mut cursor = cycle(&data).into_cursor();
        assert!(cursor.try_jump(-3).is_ok());
    }

    #[test]
    fn test_capability_follows_base() {
        fn level<S: IntoCursor>(_: &S) -> Capability {
            <CategoryOf<S> as Category>::LEVEL
        }
        let list = LinkedList::from([1]);
        assert_eq!(level(&cycle(&list)), Capability::Forward);
        assert_eq!(level(&cycle(&[1, 2])), Capability::RandomAccess);
    }

    #[test]
    fn test_take_over_cycle() {
        let data = ["x", "y"];
        let view = cycle(&data);
        let items: Vec<_> = (&view).into_iter().take(5).copied().collect();
        assert_eq!(items, ["x", "y", "x", "y", "x"]);
    }
}
