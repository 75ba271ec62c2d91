use crate::capability::SinglePassTag;
use crate::containers::indexed::SliceCursor;
use crate::cursor::{Extent, Freeze, SinglePass};

/// Single-pass cursor handing out mutable references to the elements of a slice.
///
/// Every element is borrowed at most once, the cursor keeps only the part of the slice that
/// hasn't been read yet.
#[derive(Debug)]
pub struct SliceCursorMut<'a, T> {
    rest: &'a mut [T],
    pos: usize,
}

impl<'a, T> SliceCursorMut<'a, T> {
    pub fn new(slice: &'a mut [T]) -> Self {
        Self {
            rest: slice,
            pos: 0,
        }
    }
}

impl<'a, T> SinglePass for SliceCursorMut<'a, T> {
    type Item = &'a mut T;
    type Value = T;
    type Category = SinglePassTag;

    fn is_end(&self) -> bool {
        self.rest.is_empty()
    }

    fn pull(&mut self) -> Self::Item {
        let rest = std::mem::take(&mut self.rest);
        match rest.split_first_mut() {
            Some((head, tail)) => {
                self.rest = tail;
                self.pos += 1;
                head
            }
            None => panic!("reading past the end of a mutable slice cursor"),
        }
    }

    fn step(&mut self) {
        self.pull();
    }

    fn remaining(&self) -> Option<usize> {
        Some(self.rest.len())
    }
}

impl<T> Extent for SliceCursorMut<'_, T> {
    fn position(&self) -> usize {
        self.pos
    }

    fn extent(&self) -> usize {
        self.pos + self.rest.len()
    }
}

/// The frozen cursor observes the elements that haven't been read yet, its begin is the
/// position of the mutable cursor.
impl<'a, T> Freeze for SliceCursorMut<'a, T> {
    type Frozen = SliceCursor<'a, T>;

    fn freeze(self) -> Self::Frozen {
        let rest: &'a [T] = self.rest;
        SliceCursor::begin(rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Forward;

    #[test]
    fn test_mutation_through() {
        let mut data = vec![1, 2, 3];
        let mut cursor = SliceCursorMut::new(&mut data);
        while !cursor.is_end() {
            *cursor.pull() *= 10;
        }
        assert_eq!(cursor.position(), 3);
        assert_eq!(data, [10, 20, 30]);
    }

    #[test]
    fn test_references_outlive_cursor() {
        let mut data = [1, 2];
        let (first, second) = {
            let mut cursor = SliceCursorMut::new(&mut data);
            (cursor.pull(), cursor.pull())
        };
        std::mem::swap(first, second);
        assert_eq!(data, [2, 1]);
    }

    #[test]
    fn test_freeze() {
        let mut data = [5, 6, 7];
        let mut cursor = SliceCursorMut::new(&mut data);
        *cursor.pull() = 0;
        assert_eq!(cursor.extent(), 3);

        let frozen = cursor.freeze();
        assert_eq!(frozen.remaining(), Some(2));
        assert_eq!(*frozen.get(), 6);
    }

    #[test]
    #[should_panic]
    fn test_pull_at_end() {
        let mut data: [i32; 0] = [];
        SliceCursorMut::new(&mut data).pull();
    }
}
