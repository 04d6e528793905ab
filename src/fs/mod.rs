//! FileSystem abstraction for testable file operations

mod gitignore;
mod mock;
mod real;
mod r#trait;

pub use mock::{MockEntry, MockFileSystem};
pub use r#trait::{DirEntry, FileMetadata, FileSystem, FileType, VCS_DIRS};
pub use real::RealFileSystem;
