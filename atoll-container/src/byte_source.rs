use std::fs::File;
use std::io::{Read, Seek, SeekFrom};

/// Seekable, exact-read access to a backing byte stream.
///
/// Reads are positioned; a source is exclusively owned per caller (seek+read
/// on one handle is not safe to interleave across threads).
pub trait ByteSource {
    /// Total length of the stream in bytes.
    fn len(&mut self) -> std::io::Result<u64>;

    /// Read exactly `size` bytes starting at `offset`.
    ///
    /// Returns the bytes actually available; callers that require exactly
    /// `size` bytes must check the returned length (a short return signals
    /// truncation, not an I/O error).
    fn read_at(&mut self, offset: u64, size: u64) -> std::io::Result<Vec<u8>>;
}

/// In-memory byte stream, used by the container arena.
#[derive(Debug, Clone, Default)]
pub struct MemoryByteSource {
    bytes: Vec<u8>,
}

impl MemoryByteSource {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

impl ByteSource for MemoryByteSource {
    fn len(&mut self) -> std::io::Result<u64> {
        Ok(self.bytes.len() as u64)
    }

    fn read_at(&mut self, offset: u64, size: u64) -> std::io::Result<Vec<u8>> {
        let start = (offset as usize).min(self.bytes.len());
        let end = (offset.saturating_add(size) as usize).min(self.bytes.len());
        Ok(self.bytes[start..end].to_vec())
    }
}

/// File-backed byte stream.
pub struct FileByteSource {
    file: File,
}

impl FileByteSource {
    pub fn open(path: impl AsRef<std::path::Path>) -> std::io::Result<Self> {
        Ok(Self {
            file: File::open(path)?,
        })
    }
}

impl ByteSource for FileByteSource {
    fn len(&mut self) -> std::io::Result<u64> {
        Ok(self.file.metadata()?.len())
    }

    fn read_at(&mut self, offset: u64, size: u64) -> std::io::Result<Vec<u8>> {
        self.file.seek(SeekFrom::Start(offset))?;
        let mut buf = vec![0u8; size as usize];
        let mut filled = 0;
        while filled < buf.len() {
            let n = self.file.read(&mut buf[filled..])?;
            if n == 0 {
                break;
            }
            filled += n;
        }
        buf.truncate(filled);
        Ok(buf)
    }
}
