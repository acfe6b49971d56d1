//! Error types for WAR archive and tileset operations

use crate::error::ErrorKind;
use thiserror::Error;

/// WAR archive operation result type
pub type WarResult<T> = Result<T, WarError>;

/// Errors raised while reading archives or decoding tilesets
#[derive(Debug, Error)]
pub enum WarError {
    /// Archive magic is not the single supported value
    #[error("Unsupported archive magic: expected {expected:#010x}, got {actual:#010x}")]
    InvalidMagic {
        /// Supported magic value
        expected: u32,
        /// Magic value found in the file
        actual: u32,
    },

    /// File is too short to hold the archive header
    #[error("Archive header truncated: need {needed} bytes, file has {size}")]
    TruncatedHeader {
        /// Bytes required by the header and offset table
        needed: usize,
        /// Actual file size
        size: usize,
    },

    /// Entry index beyond the declared entry count
    #[error("Entry index {index} out of range (archive has {count} entries)")]
    EntryOutOfRange {
        /// Requested index
        index: usize,
        /// Declared entry count
        count: usize,
    },

    /// Entry was rejected at load time because its offset lies past the end of file
    #[error("Entry {0} is absent (offset beyond end of file)")]
    EntryAbsent(usize),

    /// Palette entry holds fewer than 768 bytes
    #[error("Palette entry {entry} too short: {size} bytes")]
    InvalidPalette {
        /// Entry index
        entry: usize,
        /// Entry size
        size: usize,
    },

    /// Minitile reference points outside the minitile pixel data
    #[error("Minitile at offset {offset} exceeds pixel data of {len} bytes")]
    MinitileOutOfBounds {
        /// Base byte offset of the minitile
        offset: usize,
        /// Length of the pixel data entry
        len: usize,
    },

    /// Sprite record size disagrees with its geometry header
    #[error("Sprite record size mismatch: expected {expected} bytes, got {actual}")]
    SpriteSizeMismatch {
        /// Size implied by the geometry header
        expected: usize,
        /// Actual buffer size
        actual: usize,
    },

    /// Binary read/write error
    #[error("Binary format error: {0}")]
    BinRead(#[from] binrw::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl WarError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io(_) => ErrorKind::Io,
            Self::InvalidMagic { .. }
            | Self::TruncatedHeader { .. }
            | Self::InvalidPalette { .. }
            | Self::SpriteSizeMismatch { .. }
            | Self::BinRead(_) => ErrorKind::Format,
            Self::EntryOutOfRange { .. }
            | Self::EntryAbsent(_)
            | Self::MinitileOutOfBounds { .. } => ErrorKind::Bounds,
        }
    }

    /// Check if this is a bounds error
    pub fn is_bounds_error(&self) -> bool {
        self.kind() == ErrorKind::Bounds
    }

    /// Check if this is a format error
    pub fn is_format_error(&self) -> bool {
        self.kind() == ErrorKind::Format
    }
}
