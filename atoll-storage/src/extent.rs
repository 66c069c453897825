use crate::checksum::Checksum;

/// One physical byte range backing part (or all) of a dataset.
///
/// Extents are derived read-only from committed layout metadata: the extents
/// of one dataset carry dense `order` values `0..N-1` and never overlap in
/// file address space.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Extent {
    /// Sequence index among the dataset's extents (always 0 for contiguous
    /// storage).
    pub order: usize,
    /// Coordinates of the chunk this extent stores; empty for contiguous
    /// storage.
    pub logical_addr: Vec<u64>,
    /// Absolute byte offset within the backing byte stream.
    pub file_addr: u64,
    /// Extent length in bytes.
    pub size: u64,
    /// Content digest, present only after annotation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum: Option<Checksum>,
}

impl Extent {
    /// Render the logical address the way reports print it: `(1, 2)`, or
    /// `()` for contiguous storage.
    pub fn logical_addr_display(&self) -> String {
        let coords: Vec<String> = self.logical_addr.iter().map(|c| c.to_string()).collect();
        format!("({})", coords.join(", "))
    }
}
