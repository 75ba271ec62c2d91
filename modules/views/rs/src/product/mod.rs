use std::cmp::Ordering;

use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;
use eyre::{ensure, eyre, Result};

use seqview_core_rs::{
    Bidirectional, BoundedView, Extent, Forward, IntoCursor, RandomAccess, SinglePass, SizedView,
};

pub use dims::{
    BidirectionalDimensions, BoundedDimensions, Dimensions, IntoDimensions,
    RandomAccessDimensions, SizedDimensions,
};

mod dims;

/// Cartesian product of 1 to 8 views, given as a tuple.
///
/// Elements are tuples of the elements of every view, visited in lexicographic order: the last
/// view varies fastest. Every view must be traversable more than once.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Constructor, Getters, Dissolve)]
pub struct CartesianProduct<B> {
    bases: B,
}

pub fn cartesian_product<B>(bases: B) -> CartesianProduct<B> {
    CartesianProduct::new(bases)
}

impl<B: SizedDimensions> CartesianProduct<B> {
    /// Number of elements in the product or an error if it overflows `usize`.
    pub fn try_size(&self) -> Result<usize> {
        let sizes = self.bases.sizes();
        sizes
            .iter()
            .try_fold(1usize, |total, size| total.checked_mul(*size))
            .ok_or_else(|| eyre!("Size of the cartesian product {sizes:?} overflows usize"))
    }
}

impl<B: SizedDimensions> SizedView for CartesianProduct<B> {
    fn size(&self) -> usize {
        self.bases.sizes().into_iter().product()
    }
}

impl<B> CartesianProduct<B> {
    /// End cursor computed from the extents of random access views. Unlike
    /// [`BoundedView::end`] it doesn't need a concrete end cursor of the first view.
    pub fn end_by_extent<'a>(&'a self) -> ProductCursor<<&'a B as IntoDimensions>::Dims>
    where
        &'a B: IntoDimensions,
        <&'a B as IntoDimensions>::Dims: RandomAccessDimensions,
    {
        let mut cursor = self.into_cursor();
        cursor.seek_end_by_extent();
        cursor
    }
}

/// Odometer over a tuple of cursors.
///
/// The end state is unique: dimension 0 at its end and every other dimension at its begin.
/// Cursors keep the begin cursors of all dimensions to rewind them on carry.
#[derive(Clone, Debug)]
pub struct ProductCursor<D> {
    begins: D,
    current: D,
}

impl<D: Dimensions> ProductCursor<D> {
    /// Cursor at the first element.
    ///
    /// If an inner dimension is empty, the product is empty. The cursor is moved to the canonical
    /// end state when the first dimension reports how many elements it has left. Otherwise it
    /// stays at begin, where [`SinglePass::is_end`] still holds. Reading it is a precondition
    /// violation either way.
    pub fn new(begins: D) -> Self {
        let mut current = begins.clone();
        if !current.is_end_at(0) && (1..D::COUNT).any(|dim| current.is_end_at(dim)) {
            match current.remaining_at(0) {
                Some(left) => {
                    log::debug!(
                        "Cartesian product over {} dimensions has an empty dimension, starting at its end",
                        D::COUNT
                    );
                    for _ in 0..left {
                        current.step_at(0);
                    }
                }
                None => log::debug!(
                    "Cartesian product over {} dimensions has an empty dimension and a first \
                     dimension of unknown length, starting at its begin",
                    D::COUNT
                ),
            }
        }
        Self { begins, current }
    }

    fn at(begins: D, current: D) -> Self {
        Self { begins, current }
    }

    pub fn current(&self) -> &D {
        &self.current
    }

    fn increment(&mut self) {
        let mut dim = D::COUNT - 1;
        loop {
            self.current.step_at(dim);
            if dim == 0 || !self.current.is_end_at(dim) {
                break;
            }
            self.current.rewind_at(&self.begins, dim);
            dim -= 1;
        }
    }
}

impl<D: BidirectionalDimensions> ProductCursor<D> {
    fn decrement(&mut self) {
        let mut dim = D::COUNT - 1;
        loop {
            let wrap = self.current.is_begin_at(dim);
            if wrap {
                self.current.seek_end_at(dim);
            }
            self.current.step_back_at(dim);
            if !wrap || dim == 0 {
                break;
            }
            dim -= 1;
        }
    }
}

impl<D: RandomAccessDimensions> ProductCursor<D> {
    fn linear_index(&self) -> isize {
        let mut index = 0;
        let mut stride = 1;
        for dim in (0..D::COUNT).rev() {
            index += self.current.position_at(dim) as isize * stride;
            stride *= self.current.extent_at(dim) as isize;
        }
        index
    }

    fn total(&self) -> usize {
        (0..D::COUNT).map(|dim| self.current.extent_at(dim)).product()
    }

    fn seek_end_by_extent(&mut self) {
        self.current = self.begins.clone();
        let extent = self.current.extent_at(0) as isize;
        let position = self.current.position_at(0) as isize;
        self.current.jump_at(0, extent - position);
    }

    /// Checked [`RandomAccess::jump`]: fails if any dimension is empty instead of dividing by
    /// zero, or if the target lies outside of the product.
    pub fn try_jump(&mut self, delta: isize) -> Result<()> {
        if let Some(dim) = (0..D::COUNT).find(|dim| self.current.extent_at(*dim) == 0) {
            return Err(eyre!(
                "Cannot jump by {delta} in a cartesian product with an empty dimension {dim}"
            ));
        }
        let target = self.linear_index() + delta;
        ensure!(
            (0..=self.total() as isize).contains(&target),
            "Jump by {delta} leaves the cartesian product of {} elements",
            self.total()
        );
        self.jump(delta);
        Ok(())
    }
}

/// All end cursors of a product are equal, including those of an empty product left at begin.
impl<D: Dimensions> PartialEq for ProductCursor<D> {
    fn eq(&self, other: &Self) -> bool {
        match (self.is_end(), other.is_end()) {
            (true, true) => true,
            (false, false) => self.current == other.current,
            _ => false,
        }
    }
}

/// Lexicographic order, dimension 0 is the most significant.
impl<D: Dimensions + PartialOrd> PartialOrd for ProductCursor<D> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.is_end(), other.is_end()) {
            (true, true) => Some(Ordering::Equal),
            (true, false) => Some(Ordering::Greater),
            (false, true) => Some(Ordering::Less),
            (false, false) => self.current.partial_cmp(&other.current),
        }
    }
}

impl<D: Dimensions> SinglePass for ProductCursor<D> {
    type Item = D::Item;
    type Value = D::Value;
    type Category = D::Category;

    /// Inner dimensions are rewound as soon as they reach their end, so at rest only an empty
    /// product has one of them there.
    fn is_end(&self) -> bool {
        (0..D::COUNT).any(|dim| self.current.is_end_at(dim))
    }

    fn pull(&mut self) -> Self::Item {
        let item = self.current.get();
        self.increment();
        item
    }

    fn step(&mut self) {
        self.increment()
    }

    fn remaining(&self) -> Option<usize> {
        let mut index = 0usize;
        let mut total = 1usize;
        for dim in (0..D::COUNT).rev() {
            let size = self.begins.remaining_at(dim)?;
            let left = self.current.remaining_at(dim)?;
            index = index.checked_add((size - left).checked_mul(total)?)?;
            total = total.checked_mul(size)?;
        }
        total.checked_sub(index)
    }
}

impl<D: Dimensions> Forward for ProductCursor<D> {
    fn get(&self) -> Self::Item {
        self.current.get()
    }
}

impl<D: BidirectionalDimensions> Bidirectional for ProductCursor<D> {
    fn is_begin(&self) -> bool {
        (0..D::COUNT).all(|dim| self.current.is_begin_at(dim))
    }

    fn step_back(&mut self) {
        self.decrement()
    }

    fn seek_end(&mut self) {
        self.current = self.begins.clone();
        self.current.seek_end_at(0);
    }
}

impl<D: RandomAccessDimensions> RandomAccess for ProductCursor<D> {
    fn jump(&mut self, delta: isize) {
        let mut carry = delta;
        for dim in (1..D::COUNT).rev() {
            if carry == 0 {
                return;
            }
            let extent = self.current.extent_at(dim) as isize;
            let position = self.current.position_at(dim) as isize;
            let total = position + carry;
            self.current.jump_at(dim, total.rem_euclid(extent) - position);
            carry = total.div_euclid(extent);
        }
        if carry == 0 {
            return;
        }

        let extent = self.current.extent_at(0) as isize;
        let position = self.current.position_at(0) as isize;
        let total = position + carry;
        debug_assert!(total >= 0, "jump before the beginning of a cartesian product");
        if total >= extent {
            debug_assert!(total == extent, "jump past the end of a cartesian product");
            self.seek_end_by_extent();
        } else {
            self.current.jump_at(0, carry);
        }
    }

    fn distance_to(&self, other: &Self) -> isize {
        other.linear_index() - self.linear_index()
    }
}

impl<D: RandomAccessDimensions> Extent for ProductCursor<D> {
    fn position(&self) -> usize {
        self.linear_index() as usize
    }

    fn extent(&self) -> usize {
        self.total()
    }
}

impl<B: IntoDimensions> IntoCursor for CartesianProduct<B> {
    type Item = <B::Dims as Dimensions>::Item;
    type Cursor = ProductCursor<B::Dims>;

    fn into_cursor(self) -> Self::Cursor {
        ProductCursor::new(self.bases.into_dimensions())
    }
}

impl<'a, B> IntoCursor for &'a CartesianProduct<B>
where
    &'a B: IntoDimensions,
{
    type Item = <<&'a B as IntoDimensions>::Dims as Dimensions>::Item;
    type Cursor = ProductCursor<<&'a B as IntoDimensions>::Dims>;

    fn into_cursor(self) -> Self::Cursor {
        ProductCursor::new((&self.bases).into_dimensions())
    }
}

impl<B: BoundedDimensions> BoundedView for CartesianProduct<B> {
    fn end(self) -> Self::Cursor {
        let (begins, ends) = self.bases.into_bounds();
        ProductCursor::at(begins, ends)
    }
}

impl<'a, B> BoundedView for &'a CartesianProduct<B>
where
    &'a B: BoundedDimensions,
{
    fn end(self) -> Self::Cursor {
        let (begins, ends) = (&self.bases).into_bounds();
        ProductCursor::at(begins, ends)
    }
}

seqview_core_rs::impl_view!([B] CartesianProduct<B>);

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, LinkedList};

    use itertools::{iproduct, Itertools};
    use seqview_core_rs::{iota, iota_until, Capability, Category, CategoryOf};

    use super::*;
    use crate::cycle::cycle;

    fn level<S: IntoCursor>(_: &S) -> Capability {
        <CategoryOf<S> as Category>::LEVEL
    }

    #[test]
    fn test_two_dimensions() {
        let numbers = vec![1, 2, 3];
        let letters = LinkedList::from(['a', 'b']);
        let items: Vec<_> = cartesian_product((&numbers, &letters)).into_iter().collect();
        let expected: Vec<_> = iproduct!(&numbers, &letters).collect();
        assert_eq!(items, expected);
        assert_eq!(items.len(), 6);
    }

    #[test]
    fn test_agrees_with_itertools() {
        let dims = [vec![0, 1], vec![2, 3, 4], vec![5], vec![6, 7]];
        let view = cartesian_product((&dims[0], &dims[1], &dims[2], &dims[3]));
        let items: Vec<Vec<i32>> = (&view)
            .into_iter()
            .map(|(a, b, c, d)| vec![*a, *b, *c, *d])
            .collect();
        let expected: Vec<Vec<i32>> = dims
            .iter()
            .map(|dim| dim.iter().copied())
            .multi_cartesian_product()
            .collect();
        assert_eq!(items, expected);
        assert_eq!(view.size(), 12);
        assert_eq!(view.into_cursor().remaining(), Some(12));
    }

    #[test]
    fn test_single_dimension() {
        let data = [1, 2, 3];
        let items: Vec<_> = cartesian_product((&data,)).into_iter().collect();
        assert_eq!(items, [(&1,), (&2,), (&3,)]);
    }

    #[test]
    fn test_eight_dimensions() {
        let bit = [0u8, 1];
        let view = cartesian_product((&bit, &bit, &bit, &bit, &bit, &bit, &bit, &bit));
        assert_eq!(view.size(), 256);
        let last = (&view).into_iter().last();
        assert_eq!(last, Some((&1, &1, &1, &1, &1, &1, &1, &1)));
        assert_eq!((&view).into_iter().count(), 256);
    }

    #[test]
    fn test_empty_dimension() {
        let data = vec![1, 2];
        let empty: Vec<i32> = Vec::new();
        for view in [
            cartesian_product((&data, &empty, &data)),
            cartesian_product((&empty, &data, &data)),
            cartesian_product((&data, &data, &empty)),
        ] {
            assert_eq!(view.size(), 0);
            let cursor = view.into_cursor();
            assert!(cursor.is_end());
            assert!(cursor == view.end());
            assert_eq!(cursor.remaining(), Some(0));
            assert_eq!(view.into_iter().count(), 0);
        }
    }

    #[test]
    fn test_traversal_reaches_end() {
        let x = vec![1, 2];
        let y = BTreeSet::from(["p", "q", "r"]);
        let view = cartesian_product((&x, &y));
        let mut cursor = view.into_cursor();
        let mut steps = 0;
        while !cursor.is_end() {
            assert_eq!(cursor.remaining(), Some(6 - steps));
            cursor.step();
            steps += 1;
        }
        assert_eq!(steps, 6);
        assert!(cursor == view.end());
    }

    #[test]
    fn test_step_back_from_end() {
        let x = [1, 2];
        let y = [10, 20, 30];
        let view = cartesian_product((&x, &y));

        let mut cursor = view.end();
        let mut backwards = Vec::new();
        while !cursor.is_begin() {
            cursor.step_back();
            backwards.push(cursor.get());
        }
        backwards.reverse();
        assert_eq!(backwards, view.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_jump_matches_stepping() {
        let view = cartesian_product((iota_until(0, 3), iota_until(0, 4), iota_until(0, 2)));
        let total = view.size() as isize;
        for from in 0..=total {
            for to in 0..=total {
                let mut jumped = view.into_cursor();
                jumped.jump(from);
                assert_eq!(jumped.position() as isize, from);
                jumped.jump(to - from);

                let mut walked = view.into_cursor();
                for _ in 0..to {
                    walked.step();
                }
                assert!(jumped == walked, "{from} -> {to}");
                assert_eq!(jumped.distance_to(&view.into_cursor()), -to);
            }
        }
    }

    #[test]
    fn test_jump_to_end() {
        let x = [1, 2, 3];
        let y = [4, 5];
        let view = cartesian_product((&x, &y));
        let mut cursor = view.into_cursor();
        cursor.jump(6);
        assert!(cursor.is_end());
        assert!(cursor == view.end());
        assert!(cursor == view.end_by_extent());

        cursor.jump(-1);
        assert_eq!(cursor.get(), (&3, &5));
        cursor.jump(-4);
        assert_eq!(cursor.get(), (&1, &5));
    }

    #[test]
    fn test_try_jump() -> Result<()> {
        let x = [1, 2];
        let empty: [i32; 0] = [];
        let mut cursor = cartesian_product((&x, &empty)).into_cursor();
        assert!(cursor.try_jump(1).is_err());

        let mut cursor = cartesian_product((&x, &x)).into_cursor();
        cursor.try_jump(3)?;
        assert_eq!(cursor.get(), (&2, &2));
        assert!(cursor.try_jump(2).is_err());
        assert!(cursor.try_jump(-4).is_err());
        cursor.try_jump(-3)?;
        assert!(cursor.is_begin());
        Ok(())
    }

    #[test]
    fn test_lexicographic_order() {
        let x = [1, 2];
        let y = [1, 2, 3];
        let view = cartesian_product((&x, &y));
        let cursors: Vec<_> = (0..=6)
            .map(|offset| {
                let mut cursor = view.into_cursor();
                cursor.jump(offset);
                cursor
            })
            .collect();
        for (a, b) in cursors.iter().tuple_windows() {
            assert!(a < b);
        }
    }

    #[test]
    fn test_capability_meet() {
        let vec = vec![1];
        let list = LinkedList::from([1]);
        assert_eq!(level(&cartesian_product((&vec, &vec))), Capability::RandomAccess);
        assert_eq!(level(&cartesian_product((&vec, &list))), Capability::Forward);
        assert_eq!(level(&cartesian_product((&list, &vec, &vec))), Capability::Forward);
    }

    #[test]
    fn test_size_overflow() {
        let big = iota_until(0usize, usize::MAX);
        let view = cartesian_product((big, big));
        assert!(view.try_size().is_err());

        let small = cartesian_product((iota_until(0usize, 1 << 10), iota_until(0usize, 1 << 10)));
        assert_eq!(small.try_size().unwrap(), 1 << 20);
    }

    #[test]
    fn test_unbounded_outer_dimension_with_empty_inner() {
        let empty: Vec<u8> = Vec::new();
        let view = cartesian_product((iota(0u32), &empty));
        let cursor = (&view).into_cursor();
        assert!(cursor.is_end());
        assert_eq!(cursor.remaining(), None);
        assert_eq!((&view).into_iter().count(), 0);

        let looped = cartesian_product((cycle(&[1, 2]), &empty, iota_until(0, 3)));
        assert!(looped.into_cursor().is_end());
        assert!(looped.into_cursor() == looped.into_cursor());
    }

    #[test]
    fn test_unbounded_inner_dimension() {
        let x = [1, 2];
        let y = [7, 8];
        let mut cursor = cartesian_product((&x, cycle(&y))).into_cursor();
        // The inner dimension never ends, so the outer one never advances.
        let items: Vec<_> = (0..5).map(|_| cursor.pull()).collect();
        assert_eq!(items, [(&1, &7), (&1, &8), (&1, &7), (&1, &8), (&1, &7)]);
    }
}
