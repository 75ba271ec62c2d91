use derive_more::Constructor;

use crate::cursor::{IntoCursor, SinglePass};

/// Bridge from cursors to `std::iter::Iterator`: every `next` pulls one element.
#[derive(Clone, Debug, Constructor)]
pub struct Traverse<C> {
    cursor: C,
}

impl<C> Traverse<C> {
    pub fn cursor(&self) -> &C {
        &self.cursor
    }

    pub fn into_cursor(self) -> C {
        self.cursor
    }
}

impl<C: SinglePass> Iterator for Traverse<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor.is_end() {
            None
        } else {
            Some(self.cursor.pull())
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.cursor.remaining() {
            Some(remaining) => (remaining, Some(remaining)),
            None => (0, None),
        }
    }
}

pub fn traverse<S: IntoCursor>(source: S) -> Traverse<S::Cursor> {
    Traverse::new(source.into_cursor())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_traverse() {
        let data = vec![3, 1, 2];
        let items: Vec<_> = traverse(&data).copied().collect();
        assert_eq!(items, data);

        let mut iter = traverse(&data);
        assert_eq!(iter.size_hint(), (3, Some(3)));
        iter.next();
        assert_eq!(iter.size_hint(), (2, Some(2)));
    }

    #[test]
    fn test_resume_cursor() {
        let data = [1, 2, 3, 4];
        let mut cursor = (&data).into_cursor();
        let head: Vec<_> = Traverse::new(&mut cursor).take(2).collect();
        assert_eq!(head, [&1, &2]);

        let tail: Vec<_> = Traverse::new(Box::new(cursor)).collect();
        assert_eq!(tail, [&3, &4]);
    }

    #[test]
    fn test_mutable() {
        let mut data = vec![1, 2];
        traverse(&mut data).for_each(|x| *x *= 3);
        assert_eq!(data, [3, 6]);
    }
}
