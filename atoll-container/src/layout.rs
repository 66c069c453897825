//! Physical storage layout metadata.
//!
//! A dataset's elements live in the container's backing byte arena either as
//! one contiguous slice or as a series of independently addressed chunks.
//! Layout records are written once at commit time and never mutated.

/// Byte location of one chunk within the backing arena.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ChunkLocation {
    /// Element coordinates of the chunk origin within the dataset.
    pub logical_offset: Vec<u64>,
    /// Absolute byte offset within the arena.
    pub offset: u64,
    /// Chunk length in bytes.
    pub size: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum StorageLayout {
    /// No storage allocated (dataset created without data).
    Empty,
    /// One contiguous slice of the arena.
    Contiguous { offset: u64, size: u64 },
    /// Row-major grid of chunks, each with its own arena slice.
    Chunked {
        chunk_shape: Vec<u64>,
        chunks: Vec<ChunkLocation>,
    },
    /// Layout class this reader does not understand (e.g. written by a newer
    /// version). Listing extents for it fails rather than guessing.
    Opaque { class: u8 },
}

impl StorageLayout {
    /// Total allocated bytes, if the layout is readable.
    pub fn allocated_bytes(&self) -> Option<u64> {
        match self {
            StorageLayout::Empty => Some(0),
            StorageLayout::Contiguous { size, .. } => Some(*size),
            StorageLayout::Chunked { chunks, .. } => Some(chunks.iter().map(|c| c.size).sum()),
            StorageLayout::Opaque { .. } => None,
        }
    }
}
