pub use capability::{
    BidirectionalTag, Capability, Category, ForwardTag, Meet, RandomAccessTag, SinglePassTag,
};
pub use cursor::{
    Bidirectional, BoundedView, CategoryOf, Extent, Forward, Freeze, IntoCursor, RandomAccess,
    SinglePass, SizedView, ValueOf,
};
pub use generate::{generate, Generate};
pub use iota::{iota, iota_until, Iota, IotaCursor, Limit, Unreachable};
pub use pipe::{all, Adaptor, All, Closure, Then};
pub use subrange::{Subrange, SubrangeCursor};
pub use traverse::{traverse, Traverse};

pub mod capability;
pub mod containers;
mod cursor;
mod generate;
mod iota;
pub mod num;
pub mod pipe;
mod subrange;
mod traverse;
