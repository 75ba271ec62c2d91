use seqview_core_rs::{
    Bidirectional, BoundedView, Category, Extent, Forward, IntoCursor, Meet, RandomAccess,
    SinglePass, SizedView,
};

/// Operations on a tuple of forward cursors addressed by the dimension index.
///
/// Dimension 0 is the outermost (most significant) one. Indices at or above `COUNT` are a bug.
pub trait Dimensions: Clone + PartialEq {
    const COUNT: usize;

    type Item;
    type Value;
    type Category: Category;

    fn get(&self) -> Self::Item;

    fn is_end_at(&self, dim: usize) -> bool;

    fn step_at(&mut self, dim: usize);

    /// Resets dimension `dim` to its position in `begins`.
    fn rewind_at(&mut self, begins: &Self, dim: usize);

    fn remaining_at(&self, dim: usize) -> Option<usize>;
}

pub trait BidirectionalDimensions: Dimensions {
    fn is_begin_at(&self, dim: usize) -> bool;

    fn step_back_at(&mut self, dim: usize);

    fn seek_end_at(&mut self, dim: usize);
}

pub trait RandomAccessDimensions: BidirectionalDimensions + PartialOrd {
    fn position_at(&self, dim: usize) -> usize;

    fn extent_at(&self, dim: usize) -> usize;

    fn jump_at(&mut self, dim: usize, delta: isize);
}

/// Tuples of views (by value or by reference) producing a tuple of cursors.
pub trait IntoDimensions {
    type Dims: Dimensions;

    fn into_dimensions(self) -> Self::Dims;
}

/// Tuples of views whose first view has a concrete end cursor.
pub trait BoundedDimensions: IntoDimensions {
    /// Begin cursors and the canonical end state: dimension 0 at its end, the rest at begin.
    fn into_bounds(self) -> (Self::Dims, Self::Dims);
}

pub trait SizedDimensions {
    fn sizes(&self) -> Vec<usize>;
}

macro_rules! meet {
    ($C:ident) => { <$C as SinglePass>::Category };
    ($C:ident, $($rest:ident),+) => { Meet<<$C as SinglePass>::Category, meet!($($rest),+)> };
}

macro_rules! impl_dimensions {
    ($count:literal; $idx0:tt $C0:ident $V0:ident $(, $idx:tt $C:ident $V:ident)*) => {
        impl<$C0: Forward, $($C: Forward),*> Dimensions for ($C0, $($C,)*) {
            const COUNT: usize = $count;

            type Item = ($C0::Item, $($C::Item,)*);
            type Value = ($C0::Value, $($C::Value,)*);
            type Category = meet!($C0 $(, $C)*);

            fn get(&self) -> Self::Item {
                (self.$idx0.get(), $(self.$idx.get(),)*)
            }

            fn is_end_at(&self, dim: usize) -> bool {
                match dim {
                    $idx0 => self.$idx0.is_end(),
                    $($idx => self.$idx.is_end(),)*
                    _ => unreachable!("dimension {dim} is out of {}", $count),
                }
            }

            fn step_at(&mut self, dim: usize) {
                match dim {
                    $idx0 => self.$idx0.step(),
                    $($idx => self.$idx.step(),)*
                    _ => unreachable!("dimension {dim} is out of {}", $count),
                }
            }

            fn rewind_at(&mut self, begins: &Self, dim: usize) {
                match dim {
                    $idx0 => self.$idx0 = begins.$idx0.clone(),
                    $($idx => self.$idx = begins.$idx.clone(),)*
                    _ => unreachable!("dimension {dim} is out of {}", $count),
                }
            }

            fn remaining_at(&self, dim: usize) -> Option<usize> {
                match dim {
                    $idx0 => self.$idx0.remaining(),
                    $($idx => self.$idx.remaining(),)*
                    _ => unreachable!("dimension {dim} is out of {}", $count),
                }
            }
        }

        impl<$C0: Bidirectional, $($C: Bidirectional),*> BidirectionalDimensions for ($C0, $($C,)*) {
            fn is_begin_at(&self, dim: usize) -> bool {
                match dim {
                    $idx0 => self.$idx0.is_begin(),
                    $($idx => self.$idx.is_begin(),)*
                    _ => unreachable!("dimension {dim} is out of {}", $count),
                }
            }

            fn step_back_at(&mut self, dim: usize) {
                match dim {
                    $idx0 => self.$idx0.step_back(),
                    $($idx => self.$idx.step_back(),)*
                    _ => unreachable!("dimension {dim} is out of {}", $count),
                }
            }

            fn seek_end_at(&mut self, dim: usize) {
                match dim {
                    $idx0 => self.$idx0.seek_end(),
                    $($idx => self.$idx.seek_end(),)*
                    _ => unreachable!("dimension {dim} is out of {}", $count),
                }
            }
        }

        impl<$C0: RandomAccess + Extent, $($C: RandomAccess + Extent),*> RandomAccessDimensions
            for ($C0, $($C,)*)
        {
            fn position_at(&self, dim: usize) -> usize {
                match dim {
                    $idx0 => self.$idx0.position(),
                    $($idx => self.$idx.position(),)*
                    _ => unreachable!("dimension {dim} is out of {}", $count),
                }
            }

            fn extent_at(&self, dim: usize) -> usize {
                match dim {
                    $idx0 => self.$idx0.extent(),
                    $($idx => self.$idx.extent(),)*
                    _ => unreachable!("dimension {dim} is out of {}", $count),
                }
            }

            fn jump_at(&mut self, dim: usize, delta: isize) {
                match dim {
                    $idx0 => self.$idx0.jump(delta),
                    $($idx => self.$idx.jump(delta),)*
                    _ => unreachable!("dimension {dim} is out of {}", $count),
                }
            }
        }

        impl<$V0, $($V),*> IntoDimensions for ($V0, $($V,)*)
        where
            $V0: IntoCursor,
            $V0::Cursor: Forward,
            $($V: IntoCursor, $V::Cursor: Forward,)*
        {
            type Dims = ($V0::Cursor, $($V::Cursor,)*);

            fn into_dimensions(self) -> Self::Dims {
                (self.$idx0.into_cursor(), $(self.$idx.into_cursor(),)*)
            }
        }

        impl<'a, $V0, $($V),*> IntoDimensions for &'a ($V0, $($V,)*)
        where
            &'a $V0: IntoCursor,
            <&'a $V0 as IntoCursor>::Cursor: Forward,
            $(&'a $V: IntoCursor, <&'a $V as IntoCursor>::Cursor: Forward,)*
        {
            type Dims = (
                <&'a $V0 as IntoCursor>::Cursor,
                $(<&'a $V as IntoCursor>::Cursor,)*
            );

            fn into_dimensions(self) -> Self::Dims {
                ((&self.$idx0).into_cursor(), $((&self.$idx).into_cursor(),)*)
            }
        }

        impl<$V0, $($V),*> BoundedDimensions for ($V0, $($V,)*)
        where
            $V0: BoundedView + Clone,
            $V0::Cursor: Forward,
            $($V: IntoCursor, $V::Cursor: Forward,)*
        {
            fn into_bounds(self) -> (Self::Dims, Self::Dims) {
                let end = self.$idx0.clone().end();
                let begins = self.into_dimensions();
                let mut ends = begins.clone();
                ends.$idx0 = end;
                (begins, ends)
            }
        }

        impl<'a, $V0, $($V),*> BoundedDimensions for &'a ($V0, $($V,)*)
        where
            &'a $V0: BoundedView,
            <&'a $V0 as IntoCursor>::Cursor: Forward,
            $(&'a $V: IntoCursor, <&'a $V as IntoCursor>::Cursor: Forward,)*
        {
            fn into_bounds(self) -> (Self::Dims, Self::Dims) {
                let end = (&self.$idx0).end();
                let begins = self.into_dimensions();
                let mut ends = begins.clone();
                ends.$idx0 = end;
                (begins, ends)
            }
        }

        impl<$V0: SizedView, $($V: SizedView),*> SizedDimensions for ($V0, $($V,)*) {
            fn sizes(&self) -> Vec<usize> {
                vec![self.$idx0.size(), $(self.$idx.size(),)*]
            }
        }
    };
}

impl_dimensions!(1; 0 C0 V0);
impl_dimensions!(2; 0 C0 V0, 1 C1 V1);
impl_dimensions!(3; 0 C0 V0, 1 C1 V1, 2 C2 V2);
impl_dimensions!(4; 0 C0 V0, 1 C1 V1, 2 C2 V2, 3 C3 V3);
impl_dimensions!(5; 0 C0 V0, 1 C1 V1, 2 C2 V2, 3 C3 V3, 4 C4 V4);
impl_dimensions!(6; 0 C0 V0, 1 C1 V1, 2 C2 V2, 3 C3 V3, 4 C4 V4, 5 C5 V5);
impl_dimensions!(7; 0 C0 V0, 1 C1 V1, 2 C2 V2, 3 C3 V3, 4 C4 V4, 5 C5 V5, 6 C6 V6);
impl_dimensions!(8; 0 C0 V0, 1 C1 V1, 2 C2 V2, 3 C3 V3, 4 C4 V4, 5 C5 V5, 6 C6 V6, 7 C7 V7);
