//! Error types for PUD map parsing

use crate::error::ErrorKind;
use crate::pud::section::Section;
use thiserror::Error;

/// PUD operation result type
pub type PudResult<T> = Result<T, PudError>;

/// Errors raised while scanning or parsing a PUD map
#[derive(Debug, Error)]
pub enum PudError {
    /// A required section is absent
    #[error("Section {0} not found")]
    MissingSection(Section),

    /// TYPE section does not carry the map signature
    #[error("TYPE section has a wrong signature: {0:02x?}")]
    InvalidSignature([u8; 10]),

    /// DIM section holds an unsupported size
    #[error("Invalid map dimensions {width}x{height}")]
    InvalidDimensions {
        /// Declared width
        width: u16,
        /// Declared height
        height: u16,
    },

    /// ERA/ERAX section holds an unknown era code
    #[error("Invalid era code {0}")]
    InvalidEra(u16),

    /// Section payload is shorter than its fields require
    #[error("Section {section} truncated: need {needed} bytes, have {available}")]
    TruncatedSection {
        /// Offending section
        section: Section,
        /// Bytes required
        needed: usize,
        /// Bytes declared or present
        available: usize,
    },

    /// Allow-flag violates its reserved-bit invariant
    #[error("Invalid {catalog} allow flag {flag:#010x}")]
    InvalidFlag {
        /// Catalog name ("unit", "spell", "upgrade")
        catalog: &'static str,
        /// Offending mask
        flag: u32,
    },

    /// Map coordinate outside the declared dimensions
    #[error("Coordinate ({x}, {y}) outside {width}x{height} map")]
    OutOfBounds {
        /// Requested column
        x: usize,
        /// Requested row
        y: usize,
        /// Map width
        width: usize,
        /// Map height
        height: usize,
    },

    /// Binary read error
    #[error("Binary format error: {0}")]
    BinRead(#[from] binrw::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PudError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io(_) => ErrorKind::Io,
            Self::MissingSection(_) => ErrorKind::MissingSection,
            Self::InvalidSignature(_)
            | Self::InvalidDimensions { .. }
            | Self::InvalidEra(_)
            | Self::TruncatedSection { .. }
            | Self::BinRead(_) => ErrorKind::Format,
            Self::InvalidFlag { .. } => ErrorKind::InvalidFlag,
            Self::OutOfBounds { .. } => ErrorKind::Bounds,
        }
    }

    /// Check if this is a missing-section error
    pub fn is_missing_section(&self) -> bool {
        self.kind() == ErrorKind::MissingSection
    }

    /// Check if this is a format error
    pub fn is_format_error(&self) -> bool {
        self.kind() == ErrorKind::Format
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert!(PudError::MissingSection(Section::Dim).is_missing_section());
        assert!(
            PudError::InvalidDimensions {
                width: 32,
                height: 64
            }
            .is_format_error()
        );
        assert_eq!(
            PudError::InvalidFlag {
                catalog: "unit",
                flag: 0
            }
            .kind(),
            ErrorKind::InvalidFlag
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            PudError::MissingSection(Section::Ver).to_string(),
            "Section VER not found"
        );
        assert_eq!(
            PudError::InvalidFlag {
                catalog: "spell",
                flag: 4
            }
            .to_string(),
            "Invalid spell allow flag 0x00000004"
        );
    }
}
