use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt::{Debug, Formatter};

use crate::capability::RandomAccessTag;
use crate::cursor::{Bidirectional, Extent, Forward, RandomAccess, SinglePass};

/// Storage with constant-time positional access.
pub trait Indexed {
    type Elem;

    fn len(&self) -> usize;

    fn at(&self, index: usize) -> &Self::Elem;
}

impl<T> Indexed for [T] {
    type Elem = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn at(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T> Indexed for VecDeque<T> {
    type Elem = T;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn at(&self, index: usize) -> &T {
        &self[index]
    }
}

/// Read-only random access cursor over indexed storage.
///
/// Cursors are compared by position only, comparing cursors over different storages is
/// meaningless.
pub struct IndexCursor<'a, S: ?Sized> {
    storage: &'a S,
    pos: usize,
}

/// Cursor over a slice (and by extension a `Vec` or an array).
pub type SliceCursor<'a, T> = IndexCursor<'a, [T]>;

/// Cursor over a `VecDeque`.
pub type DequeCursor<'a, T> = IndexCursor<'a, VecDeque<T>>;

impl<'a, S: ?Sized + Indexed> IndexCursor<'a, S> {
    pub fn begin(storage: &'a S) -> Self {
        Self { storage, pos: 0 }
    }

    pub fn end(storage: &'a S) -> Self {
        Self {
            storage,
            pos: storage.len(),
        }
    }
}

impl<S: ?Sized> Clone for IndexCursor<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized> Copy for IndexCursor<'_, S> {}

impl<S: ?Sized> PartialEq for IndexCursor<'_, S> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl<S: ?Sized> Eq for IndexCursor<'_, S> {}

impl<S: ?Sized> PartialOrd for IndexCursor<'_, S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S: ?Sized> Ord for IndexCursor<'_, S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.pos.cmp(&other.pos)
    }
}

impl<S: ?Sized> Debug for IndexCursor<'_, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndexCursor").field("pos", &self.pos).finish()
    }
}

impl<'a, S: ?Sized + Indexed> SinglePass for IndexCursor<'a, S> {
    type Item = &'a S::Elem;
    type Value = S::Elem;
    type Category = RandomAccessTag;

    fn is_end(&self) -> bool {
        self.pos >= self.storage.len()
    }

    fn pull(&mut self) -> Self::Item {
        let item = self.storage.at(self.pos);
        self.pos += 1;
        item
    }

    fn step(&mut self) {
        debug_assert!(self.pos < self.storage.len());
        self.pos += 1;
    }

    fn remaining(&self) -> Option<usize> {
        Some(self.storage.len() - self.pos)
    }
}

impl<S: ?Sized + Indexed> Forward for IndexCursor<'_, S> {
    fn get(&self) -> Self::Item {
        self.storage.at(self.pos)
    }
}

impl<S: ?Sized + Indexed> Bidirectional for IndexCursor<'_, S> {
    fn is_begin(&self) -> bool {
        self.pos == 0
    }

    fn step_back(&mut self) {
        debug_assert!(self.pos > 0);
        self.pos -= 1;
    }

    fn seek_end(&mut self) {
        self.pos = self.storage.len();
    }
}

impl<S: ?Sized + Indexed> RandomAccess for IndexCursor<'_, S> {
    fn jump(&mut self, delta: isize) {
        let pos = self.pos.checked_add_signed(delta);
        debug_assert!(pos.is_some_and(|pos| pos <= self.storage.len()));
        self.pos = pos.unwrap_or(0);
    }

    fn distance_to(&self, other: &Self) -> isize {
        other.pos as isize - self.pos as isize
    }
}

impl<S: ?Sized + Indexed> Extent for IndexCursor<'_, S> {
    fn position(&self) -> usize {
        self.pos
    }

    fn extent(&self) -> usize {
        self.storage.len()
    }
}
