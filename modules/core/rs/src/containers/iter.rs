use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;

use crate::capability::{ForwardTag, SinglePassTag};
use crate::cursor::{Forward, SinglePass};

/// Single-pass cursor over a std iterator.
///
/// The current element is fetched eagerly, `V` is the owned element type reported to the
/// conversion engine.
pub struct IterCursor<I: Iterator, V = <I as Iterator>::Item> {
    iter: I,
    current: Option<I::Item>,
    pos: usize,
    _value: PhantomData<fn() -> V>,
}

impl<I: Iterator, V> IterCursor<I, V> {
    pub fn new(mut iter: I) -> Self {
        let current = iter.next();
        Self {
            iter,
            current,
            pos: 0,
            _value: PhantomData,
        }
    }

    /// Number of elements read so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    fn advance(&mut self) -> Option<I::Item> {
        let item = std::mem::replace(&mut self.current, self.iter.next());
        if item.is_some() {
            self.pos += 1;
        }
        item
    }

    fn left(&self) -> Option<usize> {
        match self.iter.size_hint() {
            (lower, Some(upper)) if lower == upper => {
                Some(lower + usize::from(self.current.is_some()))
            }
            _ => None,
        }
    }
}

impl<I: Iterator, V> SinglePass for IterCursor<I, V> {
    type Item = I::Item;
    type Value = V;
    type Category = SinglePassTag;

    fn is_end(&self) -> bool {
        self.current.is_none()
    }

    fn pull(&mut self) -> Self::Item {
        match self.advance() {
            Some(item) => item,
            None => panic!("reading past the end of an iterator cursor"),
        }
    }

    fn step(&mut self) {
        self.advance();
    }

    fn remaining(&self) -> Option<usize> {
        self.left()
    }
}

impl<I: Iterator, V> Debug for IterCursor<I, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IterCursor").field("pos", &self.pos).finish()
    }
}

/// Forward cursor over a cloneable std iterator, e.g. the borrowing iterators of node based
/// containers. Cursors are compared by the number of elements read.
pub struct CloneCursor<I: Iterator, V = <I as Iterator>::Item>(IterCursor<I, V>);

impl<I: Iterator, V> CloneCursor<I, V> {
    pub fn new(iter: I) -> Self {
        Self(IterCursor::new(iter))
    }

    pub fn position(&self) -> usize {
        self.0.pos
    }
}

impl<I, V> Clone for CloneCursor<I, V>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    fn clone(&self) -> Self {
        Self(IterCursor {
            iter: self.0.iter.clone(),
            current: self.0.current.clone(),
            pos: self.0.pos,
            _value: PhantomData,
        })
    }
}

impl<I: Iterator, V> PartialEq for CloneCursor<I, V> {
    fn eq(&self, other: &Self) -> bool {
        self.0.pos == other.0.pos
    }
}

impl<I: Iterator, V> Debug for CloneCursor<I, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloneCursor").field("pos", &self.0.pos).finish()
    }
}

impl<I, V> SinglePass for CloneCursor<I, V>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    type Item = I::Item;
    type Value = V;
    type Category = ForwardTag;

    fn is_end(&self) -> bool {
        self.0.is_end()
    }

    fn pull(&mut self) -> Self::Item {
        self.0.pull()
    }

    fn step(&mut self) {
        self.0.step()
    }

    fn remaining(&self) -> Option<usize> {
        self.0.left()
    }
}

impl<I, V> Forward for CloneCursor<I, V>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    fn get(&self) -> Self::Item {
        match &self.0.current {
            Some(item) => item.clone(),
            None => panic!("reading past the end of an iterator cursor"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, LinkedList};

    use super::*;

    #[test]
    fn test_iter_cursor() {
        let mut cursor: IterCursor<_> = IterCursor::new(vec![1, 2, 3].into_iter());
        assert_eq!(cursor.remaining(), Some(3));
        assert_eq!(cursor.pull(), 1);
        cursor.step();
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.remaining(), Some(1));
        assert_eq!(cursor.pull(), 3);
        assert!(cursor.is_end());
        assert_eq!(cursor.remaining(), Some(0));
    }

    #[test]
    fn test_unknown_remaining() {
        let cursor: IterCursor<_> = IterCursor::new((0..10).filter(|x| x % 2 == 0));
        assert_eq!(cursor.remaining(), None);
    }

    #[test]
    fn test_clone_cursor() {
        let list = LinkedList::from([1, 2, 3]);
        let mut cursor: CloneCursor<_, i32> = CloneCursor::new(list.iter());
        cursor.step();

        let mut copy = cursor.clone();
        assert!(copy == cursor);
        assert_eq!(*copy.pull(), 2);
        assert!(copy != cursor);
        assert_eq!(*cursor.get(), 2);
        assert_eq!(*copy.get(), 3);
    }

    #[test]
    fn test_map_items() {
        let map = BTreeMap::from([("b", 2), ("a", 1)]);
        let mut cursor: CloneCursor<_, (&str, i32)> = CloneCursor::new(map.iter());
        assert_eq!(cursor.pull(), (&"a", &1));
        assert_eq!(cursor.get(), (&"b", &2));
    }
}
