use std::fmt::{Display, Formatter};

/// Traversal capability of a cursor, ordered from the weakest to the strongest.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Capability {
    /// Elements can be read once, in order.
    SinglePass,
    /// The sequence can be traversed repeatedly and cursors can be copied and compared.
    Forward,
    /// Cursors can also move backwards.
    Bidirectional,
    /// Cursors can jump by arbitrary offsets and measure distances in constant time.
    RandomAccess,
}

impl Capability {
    pub const fn meet(self, other: Capability) -> Capability {
        if (self as u8) < (other as u8) {
            self
        } else {
            other
        }
    }

    pub const fn symbol(&self) -> &'static str {
        match self {
            Capability::SinglePass => "single-pass",
            Capability::Forward => "forward",
            Capability::Bidirectional => "bidirectional",
            Capability::RandomAccess => "random-access",
        }
    }
}

impl Display for Capability {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Type-level capability tag.
///
/// Every cursor names its tag in [`SinglePass::Category`](crate::SinglePass::Category). Adaptors
/// over several cursors derive their own tag with [`Meet`], the weaker of two tags. The
/// `AtMost*` projections cap a tag from above and keep `Meet` total for generic tags.
pub trait Category: Copy + Default + 'static {
    const LEVEL: Capability;

    type Meet<Other: Category>: Category;
    type AtMostForward: Category;
    type AtMostBidirectional: Category;
}

/// The weaker of two capability tags.
pub type Meet<A, B> = <A as Category>::Meet<B>;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct SinglePassTag;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct ForwardTag;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct BidirectionalTag;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct RandomAccessTag;

impl Category for SinglePassTag {
    const LEVEL: Capability = Capability::SinglePass;

    type Meet<Other: Category> = SinglePassTag;
    type AtMostForward = SinglePassTag;
    type AtMostBidirectional = SinglePassTag;
}

impl Category for ForwardTag {
    const LEVEL: Capability = Capability::Forward;

    type Meet<Other: Category> = Other::AtMostForward;
    type AtMostForward = ForwardTag;
    type AtMostBidirectional = ForwardTag;
}

impl Category for BidirectionalTag {
    const LEVEL: Capability = Capability::Bidirectional;

    type Meet<Other: Category> = Other::AtMostBidirectional;
    type AtMostForward = ForwardTag;
    type AtMostBidirectional = BidirectionalTag;
}

impl Category for RandomAccessTag {
    const LEVEL: Capability = Capability::RandomAccess;

    type Meet<Other: Category> = Other;
    type AtMostForward = ForwardTag;
    type AtMostBidirectional = BidirectionalTag;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level<C: Category>() -> Capability {
        C::LEVEL
    }

    #[test]
    fn test_meet_levels() {
        let levels = [
            Capability::SinglePass,
            Capability::Forward,
            Capability::Bidirectional,
            Capability::RandomAccess,
        ];
        for a in levels {
            for b in levels {
                assert_eq!(a.meet(b), a.min(b));
                assert_eq!(a.meet(b), b.meet(a));
            }
        }
    }

    #[test]
    fn test_meet_tags() {
        assert_eq!(level::<Meet<RandomAccessTag, ForwardTag>>(), Capability::Forward);
        assert_eq!(level::<Meet<ForwardTag, RandomAccessTag>>(), Capability::Forward);
        assert_eq!(level::<Meet<BidirectionalTag, BidirectionalTag>>(), Capability::Bidirectional);
        assert_eq!(level::<Meet<BidirectionalTag, RandomAccessTag>>(), Capability::Bidirectional);
        assert_eq!(level::<Meet<ForwardTag, SinglePassTag>>(), Capability::SinglePass);
        assert_eq!(level::<Meet<SinglePassTag, RandomAccessTag>>(), Capability::SinglePass);
        assert_eq!(
            level::<Meet<Meet<RandomAccessTag, BidirectionalTag>, RandomAccessTag>>(),
            Capability::Bidirectional
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Capability::RandomAccess.to_string(), "random-access");
        assert_eq!(Capability::SinglePass.to_string(), "single-pass");
    }
}
