//! WAR archive header
//!
//! The header is little-endian:
//! - 4-byte magic (`0x00000019`)
//! - 2-byte entry count
//! - 2-byte file identifier
//! - one 4-byte absolute offset per entry

use crate::war::error::{WarError, WarResult};
use binrw::{BinRead, BinReaderExt, BinWrite, VecArgs};
use std::io::Cursor;

/// The only archive magic in use
pub const WAR_MAGIC: u32 = 0x0000_0019;

/// Size of the fixed part of the header (magic, count, file id)
pub const WAR_HEADER_SIZE: usize = 8;

/// Archive header including the raw entry offset table
#[derive(Debug, Clone, PartialEq, Eq, BinRead, BinWrite)]
#[brw(little)]
pub struct WarHeader {
    /// Archive magic, must be [`WAR_MAGIC`]
    pub magic: u32,

    /// Number of entries
    pub entry_count: u16,

    /// File identifier
    pub file_id: u16,

    /// Raw entry offsets, unchecked
    #[br(count = entry_count)]
    pub offsets: Vec<u32>,
}

impl WarHeader {
    /// Parse and validate the header at the start of an archive buffer
    ///
    /// The magic is checked before the offset table is read, so a foreign
    /// file is reported as such rather than as a truncated table.
    pub fn parse(data: &[u8]) -> WarResult<Self> {
        if data.len() < WAR_HEADER_SIZE {
            return Err(WarError::TruncatedHeader {
                needed: WAR_HEADER_SIZE,
                size: data.len(),
            });
        }

        let mut cursor = Cursor::new(data);
        let mut header = Self {
            magic: cursor.read_le()?,
            entry_count: cursor.read_le()?,
            file_id: cursor.read_le()?,
            offsets: Vec::new(),
        };
        header.validate()?;

        let needed = header.encoded_size();
        if data.len() < needed {
            return Err(WarError::TruncatedHeader {
                needed,
                size: data.len(),
            });
        }

        header.offsets = cursor.read_le_args(VecArgs {
            count: usize::from(header.entry_count),
            inner: (),
        })?;
        Ok(header)
    }

    /// Total header size including the offset table
    pub fn encoded_size(&self) -> usize {
        WAR_HEADER_SIZE + usize::from(self.entry_count) * 4
    }

    /// Validate the magic value
    pub fn validate(&self) -> WarResult<()> {
        if self.magic != WAR_MAGIC {
            return Err(WarError::InvalidMagic {
                expected: WAR_MAGIC,
                actual: self.magic,
            });
        }
        Ok(())
    }
}
