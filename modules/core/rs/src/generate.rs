use std::cell::Cell;
use std::fmt::{self, Debug, Formatter};

use crate::containers::IterCursor;
use crate::cursor::IntoCursor;

/// Single-pass view over an arbitrary iterator, e.g. an endless generator.
///
/// The iterator is handed to the first cursor taken from the view. Taking a cursor through a
/// shared reference a second time yields an empty sequence.
pub struct Generate<I> {
    iter: Cell<Option<I>>,
}

// The cell can't be read through a shared reference without taking the iterator.
impl<I> Debug for Generate<I> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generate").finish_non_exhaustive()
    }
}

pub fn generate<I: IntoIterator>(iter: I) -> Generate<I::IntoIter> {
    Generate {
        iter: Cell::new(Some(iter.into_iter())),
    }
}

impl<I: Iterator> IntoCursor for Generate<I> {
    type Item = I::Item;
    type Cursor = IterCursor<Exhaustible<I>>;

    fn into_cursor(self) -> Self::Cursor {
        IterCursor::new(Exhaustible(self.iter.into_inner()))
    }
}

impl<I: Iterator> IntoCursor for &Generate<I> {
    type Item = I::Item;
    type Cursor = IterCursor<Exhaustible<I>>;

    fn into_cursor(self) -> Self::Cursor {
        IterCursor::new(Exhaustible(self.iter.take()))
    }
}

/// Iterator that might have been taken away already.
#[derive(Debug)]
pub struct Exhaustible<I>(Option<I>);

impl<I: Iterator> Iterator for Exhaustible<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.0.as_mut()?.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.0 {
            Some(iter) => iter.size_hint(),
            None => (0, Some(0)),
        }
    }
}
