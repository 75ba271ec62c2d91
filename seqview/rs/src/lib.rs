//! Lazy sequence views over std containers and adaptors composing them, plus `to`, the
//! conversion of any sequence into a container.
//!
//! ```
//! use seqview::{all, pipe, to};
//!
//! let letters = vec!['a', 'b', 'c'];
//! let view = all(&letters) | pipe::enumerate() | pipe::cycle() | pipe::take(4);
//! let pairs = to::<Vec<(usize, char)>, _>(view);
//! assert_eq!(pairs, [(0, 'a'), (1, 'b'), (2, 'c'), (0, 'a')]);
//! ```

pub use seqview_collect_rs::{
    convertible, deduce, to, to_with, Container, Convert, Direct, FromCursors, Strategy, Target,
};
pub use seqview_core_rs::{
    all, capability, containers, generate, iota, iota_until, traverse, Adaptor, All,
    Bidirectional, BoundedView, Capability, Category, CategoryOf, Closure, Extent, Forward,
    Freeze, Generate, IntoCursor, Iota, RandomAccess, SinglePass, SizedView, Subrange, Traverse,
    ValueOf,
};
pub use seqview_views_rs::{
    cartesian_product, chunk_by, chunk_by_key, cycle, enumerate, enumerate_from, product, stride,
    take, transform, CartesianProduct, ChunkBy, ChunkByKey, Cycle, Enumerate, Relation, Stride,
    Take, Transform,
};

/// Adaptor objects for the `view | adaptor` syntax, conversions included.
pub mod pipe {
    pub use seqview_collect_rs::pipe::{to, to_with, To, ToWith};
    pub use seqview_views_rs::pipe::*;
}
