use derive_getters::{Dissolve, Getters};
use eyre::{ensure, Result};

use seqview_core_rs::{Forward, ForwardTag, IntoCursor, Meet, SinglePass, SizedView};

/// Every `step`-th element of a view, starting with the first one.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Getters, Dissolve)]
pub struct Stride<V> {
    base: V,
    step: usize,
}

impl<V> Stride<V> {
    pub fn new(base: V, step: usize) -> Result<Self> {
        ensure!(step > 0, "Stride step must be positive");
        Ok(Self { base, step })
    }
}

/// Every `step`-th element of a view. A zero step is a precondition violation, use
/// [`Stride::new`] for a checked construction.
pub fn stride<V>(view: V, step: usize) -> Stride<V> {
    assert!(step > 0, "Stride step must be positive");
    Stride { base: view, step }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct StrideCursor<C> {
    base: C,
    step: usize,
}

impl<C: SinglePass> StrideCursor<C> {
    fn skip_rest(&mut self) {
        for _ in 1..self.step {
            if self.base.is_end() {
                break;
            }
            self.base.step();
        }
    }
}

impl<C: SinglePass> SinglePass for StrideCursor<C> {
    type Item = C::Item;
    type Value = C::Value;
    type Category = Meet<C::Category, ForwardTag>;

    fn is_end(&self) -> bool {
        self.base.is_end()
    }

    fn pull(&mut self) -> Self::Item {
        let item = self.base.pull();
        self.skip_rest();
        item
    }

    fn step(&mut self) {
        self.base.step();
        self.skip_rest();
    }

    fn remaining(&self) -> Option<usize> {
        self.base
            .remaining()
            .map(|remaining| remaining.div_ceil(self.step))
    }
}

impl<C: Forward> Forward for StrideCursor<C> {
    fn get(&self) -> Self::Item {
        self.base.get()
    }
}

impl<V: IntoCursor> IntoCursor for Stride<V> {
    type Item = V::Item;
    type Cursor = StrideCursor<V::Cursor>;

    fn into_cursor(self) -> Self::Cursor {
        StrideCursor {
            base: self.base.into_cursor(),
            step: self.step,
        }
    }
}

impl<'a, V> IntoCursor for &'a Stride<V>
where
    &'a V: IntoCursor,
{
    type Item = <&'a V as IntoCursor>::Item;
    type Cursor = StrideCursor<<&'a V as IntoCursor>::Cursor>;

    fn into_cursor(self) -> Self::Cursor {
        StrideCursor {
            base: (&self.base).into_cursor(),
            step: self.step,
        }
    }
}

impl<V: SizedView> SizedView for Stride<V> {
    fn size(&self) -> usize {
        self.base.size().div_ceil(self.step)
    }
}

seqview_core_rs::impl_view!([V] Stride<V>);
