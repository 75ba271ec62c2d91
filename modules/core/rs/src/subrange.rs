use std::cmp::Ordering;

use derive_getters::Dissolve;
use derive_more::Constructor;

use crate::cursor::{
    Bidirectional, BoundedView, Extent, Forward, IntoCursor, RandomAccess, SinglePass, SizedView,
};

/// A pair of cursors delimiting a part of a sequence, `[begin, end)`.
///
/// Groups produced by adaptors refer to the storage of the adapted sequence, nothing is copied.
#[derive(Clone, PartialEq, Debug, Constructor, Dissolve)]
pub struct Subrange<C> {
    begin: C,
    end: C,
}

impl<C: Forward> Subrange<C> {
    pub fn begin(&self) -> &C {
        &self.begin
    }

    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }

    /// The first element of the subrange. The subrange must not be empty.
    pub fn first(&self) -> C::Item {
        debug_assert!(!self.is_empty());
        self.begin.get()
    }

    /// Number of elements, found by walking for cursors without random access.
    pub fn count(&self) -> usize {
        let mut cursor = self.begin.clone();
        let mut count = 0;
        while cursor != self.end {
            cursor.step();
            count += 1;
        }
        count
    }

    pub fn iter(&self) -> crate::Traverse<SubrangeCursor<C>> {
        crate::Traverse::new(self.into_cursor())
    }
}

/// Cursor walking a [`Subrange`]: it ends once it compares equal to the end cursor.
#[derive(Clone, Debug)]
pub struct SubrangeCursor<C> {
    begin: C,
    current: C,
    end: C,
}

impl<C: PartialEq> PartialEq for SubrangeCursor<C> {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
    }
}

impl<C: PartialOrd> PartialOrd for SubrangeCursor<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.current.partial_cmp(&other.current)
    }
}

impl<C: Forward> SinglePass for SubrangeCursor<C> {
    type Item = C::Item;
    type Value = C::Value;
    type Category = C::Category;

    fn is_end(&self) -> bool {
        self.current == self.end
    }

    fn pull(&mut self) -> Self::Item {
        debug_assert!(!self.is_end());
        self.current.pull()
    }

    fn step(&mut self) {
        self.current.step()
    }

    fn remaining(&self) -> Option<usize> {
        match (self.current.remaining(), self.end.remaining()) {
            (Some(current), Some(end)) => Some(current - end),
            _ => None,
        }
    }
}

impl<C: Forward> Forward for SubrangeCursor<C> {
    fn get(&self) -> Self::Item {
        self.current.get()
    }
}

impl<C: Bidirectional> Bidirectional for SubrangeCursor<C> {
    fn is_begin(&self) -> bool {
        self.current == self.begin
    }

    fn step_back(&mut self) {
        self.current.step_back()
    }

    fn seek_end(&mut self) {
        self.current = self.end.clone();
    }
}

impl<C: RandomAccess> RandomAccess for SubrangeCursor<C> {
    fn jump(&mut self, delta: isize) {
        self.current.jump(delta)
    }

    fn distance_to(&self, other: &Self) -> isize {
        self.current.distance_to(&other.current)
    }
}

impl<C: RandomAccess> Extent for SubrangeCursor<C> {
    fn position(&self) -> usize {
        self.begin.distance_to(&self.current) as usize
    }

    fn extent(&self) -> usize {
        self.begin.distance_to(&self.end) as usize
    }
}

impl<C: Forward> IntoCursor for Subrange<C> {
    type Item = C::Item;
    type Cursor = SubrangeCursor<C>;

    fn into_cursor(self) -> Self::Cursor {
        SubrangeCursor {
            current: self.begin.clone(),
            begin: self.begin,
            end: self.end,
        }
    }
}

impl<C: Forward> IntoCursor for &Subrange<C> {
    type Item = C::Item;
    type Cursor = SubrangeCursor<C>;

    fn into_cursor(self) -> Self::Cursor {
        self.clone().into_cursor()
    }
}

impl<C: Forward> BoundedView for Subrange<C> {
    fn end(self) -> Self::Cursor {
        SubrangeCursor {
            current: self.end.clone(),
            begin: self.begin,
            end: self.end,
        }
    }
}

impl<C: Forward> BoundedView for &Subrange<C> {
    fn end(self) -> Self::Cursor {
        BoundedView::end(self.clone())
    }
}

impl<C: RandomAccess> SizedView for Subrange<C> {
    fn size(&self) -> usize {
        self.begin.distance_to(&self.end) as usize
    }
}
