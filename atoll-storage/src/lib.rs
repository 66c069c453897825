//! Storage extent catalog.
//!
//! Maps a dataset's logical elements to the physical byte ranges backing
//! them, and optionally annotates each range with a content digest.

pub mod catalog;
pub mod checksum;
pub mod error;
pub mod extent;

pub use catalog::list_extents;
pub use checksum::{Checksum, ChecksumAlgorithm, ChecksumAnnotator};
pub use error::{StorageError, StorageResult};
pub use extent::Extent;
