/// I/O operations for reading FSD and writing FDI files

/// Reader implementation for FSD files
pub mod reader;
/// Writer implementation for FDI files
pub mod writer;

pub use reader::{parse_fsd, read_fsd};
pub use writer::write_fdi;
