use std::fmt::Debug;
use ::num::ToPrimitive;

/// T values are primitive integers
pub trait PrimInt: ::num::PrimInt + Debug + Default {}
impl<T: ::num::PrimInt + Debug + Default> PrimInt for T {}

/// Moves `value` by a signed number of steps. Panics if the result is not representable in `T`.
pub fn offset<T: PrimInt>(value: T, delta: isize) -> T {
    let shifted = if delta >= 0 {
        ::num::cast::<isize, T>(delta).and_then(|delta| value.checked_add(&delta))
    } else {
        ::num::cast::<usize, T>(delta.unsigned_abs()).and_then(|delta| value.checked_sub(&delta))
    };
    match shifted {
        Some(shifted) => shifted,
        None => panic!("offsetting {value:?} by {delta} leaves the range of the type"),
    }
}

/// Number of steps from `from` up to `to`, zero when `to` lies below `from`. Panics if the span
/// doesn't fit into usize.
pub fn span<T: PrimInt>(from: T, to: T) -> usize {
    if to <= from {
        return 0;
    }
    // Signed spans wider than the type itself are measured in i128.
    let span = match to.checked_sub(&from) {
        Some(delta) => delta.to_usize(),
        None => to
            .to_i128()
            .zip(from.to_i128())
            .and_then(|(to, from)| to.checked_sub(from))
            .and_then(|delta| delta.to_usize()),
    };
    match span {
        Some(span) => span,
        None => panic!("span between {from:?} and {to:?} doesn't fit into usize"),
    }
}

/// Signed number of steps from `from` to `to`.
pub fn distance<T: PrimInt>(from: T, to: T) -> isize {
    let span = if to >= from {
        (to - from).to_isize()
    } else {
        (from - to).to_isize().map(|span| -span)
    };
    match span {
        Some(span) => span,
        None => panic!("distance between {from:?} and {to:?} doesn't fit into isize"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset() {
        assert_eq!(offset(5u8, -5), 0);
        assert_eq!(offset(5u8, 250), 255);
        assert_eq!(offset(-3i64, 10), 7);
        assert_eq!(offset(0usize, 0), 0);
    }

    #[test]
    #[should_panic]
    fn test_offset_underflow() {
        offset(0u32, -1);
    }

    #[test]
    fn test_span() {
        assert_eq!(span(3u8, 10), 7);
        assert_eq!(span(10u8, 3), 0);
        assert_eq!(span(0usize, usize::MAX), usize::MAX);
        assert_eq!(span(-1i8, i8::MAX), 128);
    }

    #[test]
    fn test_distance() {
        assert_eq!(distance(3u16, 10), 7);
        assert_eq!(distance(10u16, 3), -7);
        assert_eq!(distance(-5i32, 5), 10);
        assert_eq!(distance(u8::MAX, 0), -255);
    }
}
