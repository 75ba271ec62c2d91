use ::impl_tools::autoimpl;

use crate::capability::Category;

/// A position inside a sequence that can be read once and moved forward.
///
/// `pull` reads the current element and moves past it, which is the only way to read from a
/// cursor that is not [`Forward`]. Reading or stepping a cursor for which `is_end` holds is a
/// precondition violation.
#[autoimpl(for <C: trait + ?Sized> &mut C, Box <C>)]
pub trait SinglePass {
    /// What a read yields: a reference into the observed storage, a computed value or a tuple.
    type Item;
    /// Owned element type used when a container's element type is deduced from a sequence.
    type Value;
    type Category: Category;

    fn is_end(&self) -> bool;

    fn pull(&mut self) -> Self::Item;

    fn step(&mut self);

    /// Exact number of elements left before the end, when known without walking.
    fn remaining(&self) -> Option<usize> {
        None
    }
}

/// A copyable and comparable cursor: the sequence can be traversed more than once.
pub trait Forward: SinglePass + Clone + PartialEq {
    /// Reads the current element without moving.
    fn get(&self) -> Self::Item;
}

pub trait Bidirectional: Forward {
    fn is_begin(&self) -> bool;

    /// Moves one element back. Stepping back from the beginning is a precondition violation.
    fn step_back(&mut self);

    /// Moves to the end position. Random access cursors override the default walk.
    fn seek_end(&mut self) {
        while !self.is_end() {
            self.step();
        }
    }
}

pub trait RandomAccess: Bidirectional + PartialOrd {
    fn jump(&mut self, delta: isize);

    /// Signed number of steps from `self` to `other`. Both cursors must observe the same sequence.
    fn distance_to(&self, other: &Self) -> isize;
}

/// A cursor that knows where it stands inside a sequence of known length.
pub trait Extent: SinglePass {
    fn position(&self) -> usize;

    fn extent(&self) -> usize;
}

/// Conversion of a mutable cursor into its read-only counterpart at the same position.
pub trait Freeze: SinglePass {
    type Frozen: SinglePass;

    fn freeze(self) -> Self::Frozen;
}

/// Everything that can produce a cursor: containers by reference, views and adaptors.
pub trait IntoCursor {
    type Item;
    type Cursor: SinglePass<Item = Self::Item>;

    fn into_cursor(self) -> Self::Cursor;
}

/// Owned element type of the sequence produced by `S`.
pub type ValueOf<S> = <<S as IntoCursor>::Cursor as SinglePass>::Value;

/// Capability tag of the sequence produced by `S`.
pub type CategoryOf<S> = <<S as IntoCursor>::Cursor as SinglePass>::Category;

// Views held by reference inside adaptors are traversed through one more level of indirection.
impl<'b, 'a, V: ?Sized> IntoCursor for &'b &'a V
where
    &'a V: IntoCursor,
{
    type Item = <&'a V as IntoCursor>::Item;
    type Cursor = <&'a V as IntoCursor>::Cursor;

    fn into_cursor(self) -> Self::Cursor {
        (*self).into_cursor()
    }
}

impl<'b, 'a, V: ?Sized> IntoCursor for &'b &'a mut V
where
    &'b V: IntoCursor,
{
    type Item = <&'b V as IntoCursor>::Item;
    type Cursor = <&'b V as IntoCursor>::Cursor;

    fn into_cursor(self) -> Self::Cursor {
        (&**self).into_cursor()
    }
}

impl<'b, 'a, V: ?Sized> IntoCursor for &'b mut &'a mut V
where
    &'b mut V: IntoCursor,
{
    type Item = <&'b mut V as IntoCursor>::Item;
    type Cursor = <&'b mut V as IntoCursor>::Cursor;

    fn into_cursor(self) -> Self::Cursor {
        (&mut **self).into_cursor()
    }
}

/// A view with a known number of elements.
#[autoimpl(for <V: trait + ?Sized> &V, &mut V)]
pub trait SizedView {
    fn size(&self) -> usize;
}

/// A view whose end is a concrete cursor of the same type as its begin.
pub trait BoundedView: IntoCursor {
    fn end(self) -> Self::Cursor;
}

impl<'b, 'a, V: ?Sized> BoundedView for &'b &'a V
where
    &'a V: BoundedView,
{
    fn end(self) -> Self::Cursor {
        (*self).end()
    }
}
