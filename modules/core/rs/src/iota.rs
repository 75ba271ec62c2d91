use derive_getters::{Dissolve, Getters};

use crate::capability::RandomAccessTag;
use crate::cursor::{
    Bidirectional, BoundedView, Extent, Forward, IntoCursor, RandomAccess, SinglePass, SizedView,
};
use crate::num::{distance, offset, span, PrimInt};

/// Where a counting sequence stops.
pub trait Limit<T>: Copy {
    fn reached(&self, value: T) -> bool;

    fn left(&self, value: T) -> Option<usize>;
}

/// The limit of an unbounded sequence: never reached.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Unreachable;

impl<T> Limit<T> for Unreachable {
    fn reached(&self, _: T) -> bool {
        false
    }

    fn left(&self, _: T) -> Option<usize> {
        None
    }
}

/// Bounded sequences stop at their (exclusive) last value.
impl<T: PrimInt> Limit<T> for T {
    fn reached(&self, value: T) -> bool {
        value >= *self
    }

    fn left(&self, value: T) -> Option<usize> {
        Some(span(value, *self))
    }
}

/// A sequence of consecutive integers starting at `start`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Getters, Dissolve)]
pub struct Iota<T, L = Unreachable> {
    start: T,
    limit: L,
}

/// Unbounded counting sequence `start, start + 1, ...`
pub fn iota<T: PrimInt>(start: T) -> Iota<T> {
    Iota {
        start,
        limit: Unreachable,
    }
}

/// Counting sequence over the half-open range `[start, end)`. An `end` below `start` yields an
/// empty sequence.
pub fn iota_until<T: PrimInt>(start: T, end: T) -> Iota<T, T> {
    Iota {
        start,
        limit: end.max(start),
    }
}

#[derive(Clone, Copy, Debug)]
pub struct IotaCursor<T, L> {
    start: T,
    value: T,
    limit: L,
}

impl<T: PartialEq, L> PartialEq for IotaCursor<T, L> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: PartialOrd, L> PartialOrd for IotaCursor<T, L> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<T: PrimInt, L: Limit<T>> SinglePass for IotaCursor<T, L> {
    type Item = T;
    type Value = T;
    type Category = RandomAccessTag;

    fn is_end(&self) -> bool {
        self.limit.reached(self.value)
    }

    fn pull(&mut self) -> T {
        let value = self.value;
        self.step();
        value
    }

    fn step(&mut self) {
        self.value = self.value + T::one();
    }

    fn remaining(&self) -> Option<usize> {
        self.limit.left(self.value)
    }
}

impl<T: PrimInt, L: Limit<T>> Forward for IotaCursor<T, L> {
    fn get(&self) -> T {
        self.value
    }
}

impl<T: PrimInt, L: Limit<T>> Bidirectional for IotaCursor<T, L> {
    fn is_begin(&self) -> bool {
        self.value == self.start
    }

    fn step_back(&mut self) {
        debug_assert!(self.value > self.start);
        self.value = self.value - T::one();
    }
}

impl<T: PrimInt, L: Limit<T>> RandomAccess for IotaCursor<T, L> {
    fn jump(&mut self, delta: isize) {
        self.value = offset(self.value, delta);
    }

    fn distance_to(&self, other: &Self) -> isize {
        distance(self.value, other.value)
    }
}

impl<T: PrimInt> Extent for IotaCursor<T, T> {
    fn position(&self) -> usize {
        span(self.start, self.value)
    }

    fn extent(&self) -> usize {
        span(self.start, self.limit)
    }
}

impl<T: PrimInt, L: Limit<T>> IntoCursor for Iota<T, L> {
    type Item = T;
    type Cursor = IotaCursor<T, L>;

    fn into_cursor(self) -> Self::Cursor {
        IotaCursor {
            start: self.start,
            value: self.start,
            limit: self.limit,
        }
    }
}

impl<T: PrimInt, L: Limit<T>> IntoCursor for &Iota<T, L> {
    type Item = T;
    type Cursor = IotaCursor<T, L>;

    fn into_cursor(self) -> Self::Cursor {
        (*self).into_cursor()
    }
}

impl<T: PrimInt> BoundedView for Iota<T, T> {
    fn end(self) -> Self::Cursor {
        IotaCursor {
            start: self.start,
            value: self.limit,
            limit: self.limit,
        }
    }
}

impl<T: PrimInt> BoundedView for &Iota<T, T> {
    fn end(self) -> Self::Cursor {
        (*self).end()
    }
}

impl<T: PrimInt> SizedView for Iota<T, T> {
    fn size(&self) -> usize {
        span(self.start, self.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbounded() {
        let mut cursor = iota(5u32).into_cursor();
        for expected in 5..1000 {
            assert!(!cursor.is_end());
            assert_eq!(cursor.pull(), expected);
        }
        assert_eq!(cursor.remaining(), None);
    }

    #[test]
    fn test_bounded() {
        let range = iota_until(-2i64, 3);
        assert_eq!(range.size(), 5);

        let mut cursor = range.into_cursor();
        let mut seen = Vec::new();
        while !cursor.is_end() {
            seen.push(cursor.pull());
        }
        assert_eq!(seen, [-2, -1, 0, 1, 2]);
        assert!(cursor == range.end());
        assert_eq!(cursor.position(), 5);

        cursor.jump(-5);
        assert!(cursor.is_begin());
        assert_eq!(cursor.remaining(), Some(5));
    }

    #[test]
    fn test_empty() {
        let range = iota_until(10u8, 3);
        assert_eq!(range.size(), 0);
        assert!(range.into_cursor().is_end());
    }

    #[test]
    fn test_full_width() {
        let range = iota_until(0usize, usize::MAX);
        assert_eq!(range.size(), usize::MAX);
        assert_eq!(range.into_cursor().remaining(), Some(usize::MAX));
        assert_eq!(range.end().extent(), usize::MAX);
        assert_eq!(iota_until(i64::MIN, i64::MAX).size(), usize::MAX);
    }

    #[test]
    fn test_random_access() {
        let range = iota_until(0usize, 100);
        let mut cursor = range.into_cursor();
        cursor.jump(42);
        assert_eq!(cursor.get(), 42);
        assert_eq!(cursor.distance_to(&range.end()), 58);
        cursor.step_back();
        assert_eq!(cursor.get(), 41);
        assert!(cursor < range.end());
    }
}
