use std::collections::{
    btree_map, btree_set, hash_map, hash_set, linked_list, vec_deque, BTreeMap, BTreeSet,
    HashMap, HashSet, LinkedList, VecDeque,
};

pub use indexed::{DequeCursor, IndexCursor, Indexed, SliceCursor};
pub use iter::{CloneCursor, IterCursor};
pub use slice_mut::SliceCursorMut;

use crate::cursor::{BoundedView, IntoCursor, SinglePass, SizedView};

mod indexed;
mod iter;
mod slice_mut;

impl<'a, T> IntoCursor for &'a [T] {
    type Item = &'a T;
    type Cursor = SliceCursor<'a, T>;

    fn into_cursor(self) -> Self::Cursor {
        SliceCursor::begin(self)
    }
}

impl<'a, T, const N: usize> IntoCursor for &'a [T; N] {
    type Item = &'a T;
    type Cursor = SliceCursor<'a, T>;

    fn into_cursor(self) -> Self::Cursor {
        SliceCursor::begin(self.as_slice())
    }
}

impl<'a, T> IntoCursor for &'a Vec<T> {
    type Item = &'a T;
    type Cursor = SliceCursor<'a, T>;

    fn into_cursor(self) -> Self::Cursor {
        SliceCursor::begin(self.as_slice())
    }
}

impl<'a, T> IntoCursor for &'a VecDeque<T> {
    type Item = &'a T;
    type Cursor = DequeCursor<'a, T>;

    fn into_cursor(self) -> Self::Cursor {
        DequeCursor::begin(self)
    }
}

impl<'a, T> BoundedView for &'a [T] {
    fn end(self) -> Self::Cursor {
        SliceCursor::end(self)
    }
}

impl<'a, T, const N: usize> BoundedView for &'a [T; N] {
    fn end(self) -> Self::Cursor {
        SliceCursor::end(self.as_slice())
    }
}

impl<'a, T> BoundedView for &'a Vec<T> {
    fn end(self) -> Self::Cursor {
        SliceCursor::end(self.as_slice())
    }
}

impl<'a, T> BoundedView for &'a VecDeque<T> {
    fn end(self) -> Self::Cursor {
        DequeCursor::end(self)
    }
}

impl<'a, T> IntoCursor for &'a mut [T] {
    type Item = &'a mut T;
    type Cursor = SliceCursorMut<'a, T>;

    fn into_cursor(self) -> Self::Cursor {
        SliceCursorMut::new(self)
    }
}

impl<'a, T, const N: usize> IntoCursor for &'a mut [T; N] {
    type Item = &'a mut T;
    type Cursor = SliceCursorMut<'a, T>;

    fn into_cursor(self) -> Self::Cursor {
        SliceCursorMut::new(self.as_mut_slice())
    }
}

impl<'a, T> IntoCursor for &'a mut Vec<T> {
    type Item = &'a mut T;
    type Cursor = SliceCursorMut<'a, T>;

    fn into_cursor(self) -> Self::Cursor {
        SliceCursorMut::new(self.as_mut_slice())
    }
}

// Node based containers are forward only, their end cursor is found by walking.
macro_rules! impl_node_container {
    ($([$($g:tt)*] $container:ty => $iter:ty, $value:ty;)*) => {$(
        impl<'a, $($g)*> IntoCursor for &'a $container {
            type Item = <$iter as Iterator>::Item;
            type Cursor = CloneCursor<$iter, $value>;

            fn into_cursor(self) -> Self::Cursor {
                CloneCursor::new(self.iter())
            }
        }

        impl<'a, $($g)*> BoundedView for &'a $container {
            fn end(self) -> Self::Cursor {
                let mut cursor = self.into_cursor();
                while !cursor.is_end() {
                    cursor.step();
                }
                cursor
            }
        }

        impl<$($g)*> SizedView for $container {
            fn size(&self) -> usize {
                self.len()
            }
        }
    )*};
}

impl_node_container! {
    [T] LinkedList<T> => linked_list::Iter<'a, T>, T;
    [T] BTreeSet<T> => btree_set::Iter<'a, T>, T;
    [T, S] HashSet<T, S> => hash_set::Iter<'a, T>, T;
    [K, V] BTreeMap<K, V> => btree_map::Iter<'a, K, V>, (K, V);
    [K, V, S] HashMap<K, V, S> => hash_map::Iter<'a, K, V>, (K, V);
}

// Mutable cursors over node based containers hand out `&mut` elements (values for maps).
macro_rules! impl_node_container_mut {
    ($([$($g:tt)*] $container:ty => $iter:ty, $value:ty;)*) => {$(
        impl<'a, $($g)*> IntoCursor for &'a mut $container {
            type Item = <$iter as Iterator>::Item;
            type Cursor = IterCursor<$iter, $value>;

            fn into_cursor(self) -> Self::Cursor {
                IterCursor::new(self.iter_mut())
            }
        }
    )*};
}

impl_node_container_mut! {
    [T] VecDeque<T> => vec_deque::IterMut<'a, T>, T;
    [T] LinkedList<T> => linked_list::IterMut<'a, T>, T;
    [K, V] BTreeMap<K, V> => btree_map::IterMut<'a, K, V>, (K, V);
    [K, V, S] HashMap<K, V, S> => hash_map::IterMut<'a, K, V>, (K, V);
}

// Owned containers are consumed element by element.
macro_rules! impl_owned_container {
    ($([$($g:tt)*] $container:ty => $iter:ty;)*) => {$(
        impl<$($g)*> IntoCursor for $container {
            type Item = <$iter as Iterator>::Item;
            type Cursor = IterCursor<$iter>;

            fn into_cursor(self) -> Self::Cursor {
                IterCursor::new(self.into_iter())
            }
        }
    )*};
}

impl_owned_container! {
    [T] Vec<T> => std::vec::IntoIter<T>;
    [T] VecDeque<T> => vec_deque::IntoIter<T>;
    [T] LinkedList<T> => linked_list::IntoIter<T>;
}

impl<T> SizedView for [T] {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> SizedView for [T; N] {
    fn size(&self) -> usize {
        N
    }
}

impl<T> SizedView for Vec<T> {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T> SizedView for VecDeque<T> {
    fn size(&self) -> usize {
        self.len()
    }
}
