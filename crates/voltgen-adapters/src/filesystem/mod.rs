//! File writer adapters.

mod local;
mod memory;

pub use local::LocalFileWriter;
pub use memory::MemoryFileWriter;

pub(crate) use local::map_io_error;
