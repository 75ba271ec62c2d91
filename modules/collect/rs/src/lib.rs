pub use container::Container;
pub use convert::Convert;
pub use target::{to, to_with, Direct, FromCursors, Strategy, Target};

mod container;
mod convert;
pub mod deduce;
pub mod pipe;
mod target;
