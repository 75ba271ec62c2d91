pub use chunk_by::{
    chunk_by, chunk_by_key, ChunkBy, ChunkByCursor, ChunkByKey, ChunkByKeyCursor, Relation,
    SameKey,
};
pub use cycle::{cycle, Cycle, CycleCursor};
pub use enumerate::{enumerate, enumerate_from, Enumerate, EnumerateCursor};
pub use product::{cartesian_product, CartesianProduct, ProductCursor};
pub use stride::{stride, Stride, StrideCursor};
pub use take::{take, Take, TakeCursor};
pub use transform::{transform, Transform, TransformCursor};

mod chunk_by;
mod cycle;
mod enumerate;
pub mod pipe;
pub mod product;
mod stride;
mod take;
mod transform;
