//! Error classification shared by every format module

use std::fmt;

/// Broad category of a failure, independent of the format that raised it
///
/// Every module error (`WarError`, `PudError`) maps onto one of these through
/// its `kind()` method so that callers can branch on the category without
/// matching on format-specific variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Opening or reading the underlying file failed
    Io,
    /// Bad magic, bad signature bytes, invalid dimensions or truncated data
    Format,
    /// A required section is absent and no fallback applies
    MissingSection,
    /// An allow-flag violates its catalog's reserved-bit invariant
    InvalidFlag,
    /// An index or offset lies outside its valid range
    Bounds,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Io => "I/O error",
            Self::Format => "format error",
            Self::MissingSection => "missing section",
            Self::InvalidFlag => "invalid flag",
            Self::Bounds => "out of bounds",
        };
        f.write_str(name)
    }
}
