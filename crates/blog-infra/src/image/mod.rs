//! Image storage - filesystem-backed binary blobs keyed by post id.

mod fs;

pub use fs::FsImageStore;
