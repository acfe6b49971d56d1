//! WAR archive reader and entry extractor

use crate::config::FormatsConfig;
use crate::war::error::{WarError, WarResult};
use crate::war::header::{WAR_HEADER_SIZE, WarHeader};
use memmap2::{Mmap, MmapOptions};
use std::fs::File;
use std::io::Read;
use std::ops::Deref;
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

/// Backing storage of an open archive
#[derive(Debug)]
enum ArchiveBuffer {
    Mapped(Mmap),
    Owned(Vec<u8>),
}

impl Deref for ArchiveBuffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            Self::Mapped(mmap) => mmap,
            Self::Owned(data) => data,
        }
    }
}

/// An open WAR archive
///
/// The archive owns its file buffer. Entries whose offset lies at or past
/// the end of file are recorded as absent at load time; extracting them
/// later is a bounds error.
#[derive(Debug)]
pub struct WarArchive {
    path: Option<PathBuf>,
    buffer: ArchiveBuffer,
    magic: u32,
    file_id: u16,
    entries: Vec<Option<u32>>,
    /// Sorted, deduplicated valid offsets used to find entry ends
    boundaries: Vec<u32>,
}

impl WarArchive {
    /// Open an archive with the default configuration
    pub fn open<P: AsRef<Path>>(path: P) -> WarResult<Self> {
        Self::open_with_config(path, FormatsConfig::default())
    }

    /// Open an archive
    pub fn open_with_config<P: AsRef<Path>>(path: P, config: FormatsConfig) -> WarResult<Self> {
        let path = path.as_ref();
        let mut file = File::open(path)?;
        let size = file.metadata()?.len() as usize;

        if size < WAR_HEADER_SIZE {
            return Err(WarError::TruncatedHeader {
                needed: WAR_HEADER_SIZE,
                size,
            });
        }

        let buffer = if config.enable_mmap {
            // Safety: the map is read-only and owned by the archive for its lifetime
            #[allow(unsafe_code)]
            let mmap = unsafe { MmapOptions::new().map(&file)? };
            ArchiveBuffer::Mapped(mmap)
        } else {
            let mut data = Vec::with_capacity(size);
            file.read_to_end(&mut data)?;
            ArchiveBuffer::Owned(data)
        };
        debug!("File {} mapped, size is {} bytes", path.display(), buffer.len());

        let mut archive = Self::load(buffer)?;
        archive.path = Some(path.to_path_buf());
        Ok(archive)
    }

    /// Load an archive from an in-memory buffer
    pub fn from_bytes(data: Vec<u8>) -> WarResult<Self> {
        Self::load(ArchiveBuffer::Owned(data))
    }

    fn load(buffer: ArchiveBuffer) -> WarResult<Self> {
        let size = buffer.len();
        let header = WarHeader::parse(&buffer)?;

        debug!(
            "Archive has magic {:#010x}, {} entries, file id {:#06x}",
            header.magic, header.entry_count, header.file_id
        );

        let entries: Vec<Option<u32>> = header
            .offsets
            .iter()
            .enumerate()
            .map(|(index, &offset)| {
                if offset as usize >= size {
                    warn!(
                        "Entry {} has offset {} larger than file size {}, skipping",
                        index, offset, size
                    );
                    None
                } else {
                    trace!("Entry {} has offset {}", index, offset);
                    Some(offset)
                }
            })
            .collect();

        let mut boundaries: Vec<u32> = entries.iter().flatten().copied().collect();
        boundaries.sort_unstable();
        boundaries.dedup();

        Ok(Self {
            path: None,
            buffer,
            magic: header.magic,
            file_id: header.file_id,
            entries,
            boundaries,
        })
    }

    /// Path the archive was opened from, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Archive magic
    pub fn magic(&self) -> u32 {
        self.magic
    }

    /// File identifier
    pub fn file_id(&self) -> u16 {
        self.file_id
    }

    /// Number of entries declared by the header
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Size of the underlying file
    pub fn file_size(&self) -> usize {
        self.buffer.len()
    }

    /// Entry offset table; `None` marks an absent entry
    pub fn offsets(&self) -> &[Option<u32>] {
        &self.entries
    }

    /// Whether the archive is memory-mapped
    pub fn is_mapped(&self) -> bool {
        matches!(self.buffer, ArchiveBuffer::Mapped(_))
    }

    /// Borrow the bytes of an entry without copying
    ///
    /// An entry runs from its offset to the next greater offset of any
    /// valid entry, or to the end of file.
    pub fn entry(&self, index: usize) -> WarResult<&[u8]> {
        let offset = match self.entries.get(index) {
            None => {
                return Err(WarError::EntryOutOfRange {
                    index,
                    count: self.entries.len(),
                });
            }
            Some(None) => return Err(WarError::EntryAbsent(index)),
            Some(Some(offset)) => *offset,
        };

        let next = self.boundaries.partition_point(|&b| b <= offset);
        let end = self
            .boundaries
            .get(next)
            .map_or(self.buffer.len(), |&b| b as usize);

        Ok(&self.buffer[offset as usize..end])
    }

    /// Size in bytes of an entry
    pub fn entry_size(&self, index: usize) -> WarResult<usize> {
        self.entry(index).map(<[u8]>::len)
    }

    /// Extract an owned copy of an entry's raw bytes
    pub fn extract(&self, index: usize) -> WarResult<Vec<u8>> {
        let data = self.entry(index)?.to_vec();
        trace!("Extracted entry {} ({} bytes)", index, data.len());
        Ok(data)
    }

    /// Release the file buffer and entry table
    pub fn close(self) {
        debug!("Closing archive with {} entries", self.entries.len());
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::war::header::WAR_MAGIC;

    fn build(offsets: &[u32], body: &[u8]) -> Vec<u8> {
        let mut data = Vec::new();
        data.extend_from_slice(&WAR_MAGIC.to_le_bytes());
        data.extend_from_slice(&(offsets.len() as u16).to_le_bytes());
        data.extend_from_slice(&0u16.to_le_bytes());
        for offset in offsets {
            data.extend_from_slice(&offset.to_le_bytes());
        }
        data.extend_from_slice(body);
        data
    }

    #[test]
    fn test_entry_bounds_follow_next_offset() {
        // header 8 + 3 offsets = 20
        let archive = WarArchive::from_bytes(build(&[20, 24, 30], b"aaaabbbbbbcc"))
            .expect("valid archive");

        assert_eq!(archive.entry_count(), 3);
        assert_eq!(archive.extract(0).unwrap(), b"aaaa");
        assert_eq!(archive.extract(1).unwrap(), b"bbbbbb");
        assert_eq!(archive.extract(2).unwrap(), b"cc");
    }

    #[test]
    fn test_unordered_offsets() {
        let archive =
            WarArchive::from_bytes(build(&[22, 16], b"xxxxxxyy")).expect("valid archive");
        assert_eq!(archive.extract(0).unwrap(), b"yy");
        assert_eq!(archive.extract(1).unwrap(), b"xxxxxx");
    }

    #[test]
    fn test_absent_entry() {
        let archive =
            WarArchive::from_bytes(build(&[16, 9999], b"abcd")).expect("valid archive");

        assert_eq!(archive.offsets(), &[Some(16), None]);
        assert_eq!(archive.extract(0).unwrap(), b"abcd");
        assert!(matches!(archive.extract(1), Err(WarError::EntryAbsent(1))));
        assert!(matches!(
            archive.extract(2),
            Err(WarError::EntryOutOfRange { index: 2, count: 2 })
        ));
    }

    #[test]
    fn test_offset_equal_to_size_is_absent() {
        let data = build(&[12], b"");
        let size = data.len() as u32;
        let archive = WarArchive::from_bytes(build(&[size], b"")).expect("valid archive");
        assert_eq!(archive.offsets(), &[None]);
    }

    #[test]
    fn test_bad_magic() {
        let mut data = build(&[], b"");
        data[0] = 0x1a;
        let err = WarArchive::from_bytes(data).unwrap_err();
        assert!(err.is_format_error());
    }

    #[test]
    fn test_truncated_table() {
        let mut data = build(&[], b"");
        data[4] = 4;
        assert!(matches!(
            WarArchive::from_bytes(data),
            Err(WarError::TruncatedHeader { needed: 24, .. })
        ));
    }

    #[test]
    fn test_too_short() {
        assert!(matches!(
            WarArchive::from_bytes(vec![0x19, 0, 0]),
            Err(WarError::TruncatedHeader { .. })
        ));
    }
}
