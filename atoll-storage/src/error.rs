pub type StorageResult<T> = std::result::Result<T, StorageError>;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Storage metadata exists but this reader cannot interpret it. The
    /// report layer recovers per dataset; this never aborts a whole run.
    #[error("Storage layout (class {class}) is unavailable for this reader")]
    LayoutUnavailable { class: u8 },
    /// Fewer bytes came back than the extent declares. Signals truncation or
    /// corruption; fatal for the current checksum only.
    #[error("Read {got} bytes instead of {wanted} bytes at byte {offset}")]
    ShortRead { offset: u64, wanted: u64, got: u64 },
    #[error("Byte source error: {0}")]
    Io(#[from] std::io::Error),
}
