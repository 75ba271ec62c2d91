use seqview_core_rs::{IntoCursor, Subrange};

use crate::container::Container;
use crate::target::rebuild;

/// Element-level conversion used while filling a container.
///
/// Elementary types convert to themselves (by value or by cloning a reference), numbers widen
/// along lossless `From` pairs, tuples convert elementwise and any sequence converts into any
/// [`Container`] whose elements its items convert to. The latter is the nested route, flagged
/// with `NESTED`.
pub trait Convert<T> {
    const NESTED: bool = false;

    fn convert(self) -> T;
}

/// Declares types as elementary: they convert into themselves by value and by reference.
///
/// ```
/// #[derive(Clone, PartialEq, Debug)]
/// struct Cat(&'static str);
/// seqview_collect_rs::convertible!(Cat);
///
/// let cats = vec![Cat("Tom")];
/// let copy: Vec<Cat> = seqview_collect_rs::to::<Vec<Cat>, _>(&cats);
/// assert_eq!(copy, cats);
/// ```
#[macro_export]
macro_rules! convertible {
    ($($ty:ty),* $(,)?) => {$(
        impl $crate::Convert<$ty> for $ty {
            fn convert(self) -> $ty {
                self
            }
        }

        impl<'convert> $crate::Convert<$ty> for &'convert $ty {
            fn convert(self) -> $ty {
                ::std::clone::Clone::clone(self)
            }
        }
    )*};
}

crate::convertible!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, String,
    ()
);

macro_rules! widen {
    ($($from:ty => $($to:ty),+;)*) => {$($(
        impl Convert<$to> for $from {
            fn convert(self) -> $to {
                <$to>::from(self)
            }
        }

        impl<'a> Convert<$to> for &'a $from {
            fn convert(self) -> $to {
                <$to>::from(*self)
            }
        }
    )+)*};
}

widen!(
    u8 => u16, u32, u64, u128, usize, i16, i32, i64, i128, f32, f64, char;
    u16 => u32, u64, u128, usize, i32, i64, i128, f32, f64;
    u32 => u64, u128, i64, i128, f64;
    u64 => u128, i128;
    i8 => i16, i32, i64, i128, isize, f32, f64;
    i16 => i32, i64, i128, isize, f32, f64;
    i32 => i64, i128, f64;
    i64 => i128;
    f32 => f64;
);

impl<'a> Convert<String> for &'a str {
    fn convert(self) -> String {
        self.to_owned()
    }
}

impl<'a, 'b> Convert<String> for &'b &'a str {
    fn convert(self) -> String {
        (*self).to_owned()
    }
}

impl<'a> Convert<&'a str> for &'a str {
    fn convert(self) -> &'a str {
        self
    }
}

impl<'a, 'b> Convert<&'a str> for &'b &'a str {
    fn convert(self) -> &'a str {
        self
    }
}

macro_rules! convert_tuple {
    ($($idx:tt $A:ident $T:ident),+) => {
        impl<$($A, $T),+> Convert<($($T,)+)> for ($($A,)+)
        where
            $($A: Convert<$T>),+
        {
            fn convert(self) -> ($($T,)+) {
                ($(self.$idx.convert(),)+)
            }
        }

        impl<'a, $($A, $T),+> Convert<($($T,)+)> for &'a ($($A,)+)
        where
            $(&'a $A: Convert<$T>),+
        {
            fn convert(self) -> ($($T,)+) {
                ($((&self.$idx).convert(),)+)
            }
        }
    };
}

convert_tuple!(0 A0 T0);
convert_tuple!(0 A0 T0, 1 A1 T1);
convert_tuple!(0 A0 T0, 1 A1 T1, 2 A2 T2);
convert_tuple!(0 A0 T0, 1 A1 T1, 2 A2 T2, 3 A3 T3);

impl<C> Convert<Subrange<C>> for Subrange<C> {
    fn convert(self) -> Subrange<C> {
        self
    }
}

impl<'a, C: Clone> Convert<Subrange<C>> for &'a Subrange<C> {
    fn convert(self) -> Subrange<C> {
        self.clone()
    }
}

/// Nested route: a sequence converts into a whole container, built with default arguments.
impl<S, C> Convert<C> for S
where
    S: IntoCursor,
    C: Container,
    C::Args: Default,
    S::Item: Convert<C::Elem>,
{
    const NESTED: bool = true;

    fn convert(self) -> C {
        rebuild(self, C::Args::default())
    }
}
