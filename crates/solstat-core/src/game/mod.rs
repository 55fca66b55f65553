mod counter;
mod registry;
mod snapshot;
mod sort;

pub use counter::*;
pub use registry::*;
pub use snapshot::*;
pub use sort::*;
