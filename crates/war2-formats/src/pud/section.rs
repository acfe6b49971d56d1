//! Section tag catalog

use std::fmt;

/// One of the 20 PUD section tags, in on-disk order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    /// `TYPE`: file signature and id tag
    Type,
    /// `VER `: format version
    Ver,
    /// `DESC`: description
    Desc,
    /// `OWNR`: player owners
    Ownr,
    /// `ERA `: era
    Era,
    /// `ERAX`: extended era, optional
    Erax,
    /// `DIM `: dimensions
    Dim,
    /// `UDTA`: unit data
    Udta,
    /// `ALOW`: allowances, optional
    Alow,
    /// `UGRD`: upgrades
    Ugrd,
    /// `SIDE`: player races
    Side,
    /// `SGLD`: starting gold
    Sgld,
    /// `SLBR`: starting lumber
    Slbr,
    /// `SOIL`: starting oil
    Soil,
    /// `AIPL`: AI behavior
    Aipl,
    /// `MTXM`: tiles map
    Mtxm,
    /// `SQM `: movement map
    Sqm,
    /// `OILM`: obsolete oil map
    Oilm,
    /// `REGM`: action map
    Regm,
    /// `UNIT`: unit placements
    Unit,
}

impl Section {
    /// All sections in catalog order
    pub const ALL: [Self; 20] = [
        Self::Type,
        Self::Ver,
        Self::Desc,
        Self::Ownr,
        Self::Era,
        Self::Erax,
        Self::Dim,
        Self::Udta,
        Self::Alow,
        Self::Ugrd,
        Self::Side,
        Self::Sgld,
        Self::Slbr,
        Self::Soil,
        Self::Aipl,
        Self::Mtxm,
        Self::Sqm,
        Self::Oilm,
        Self::Regm,
        Self::Unit,
    ];

    /// Four-byte tag
    pub const fn tag(self) -> &'static [u8; 4] {
        match self {
            Self::Type => b"TYPE",
            Self::Ver => b"VER ",
            Self::Desc => b"DESC",
            Self::Ownr => b"OWNR",
            Self::Era => b"ERA ",
            Self::Erax => b"ERAX",
            Self::Dim => b"DIM ",
            Self::Udta => b"UDTA",
            Self::Alow => b"ALOW",
            Self::Ugrd => b"UGRD",
            Self::Side => b"SIDE",
            Self::Sgld => b"SGLD",
            Self::Slbr => b"SLBR",
            Self::Soil => b"SOIL",
            Self::Aipl => b"AIPL",
            Self::Mtxm => b"MTXM",
            Self::Sqm => b"SQM ",
            Self::Oilm => b"OILM",
            Self::Regm => b"REGM",
            Self::Unit => b"UNIT",
        }
    }

    /// Position in the catalog
    pub const fn position(self) -> usize {
        self as usize
    }

    /// Whether absence of this section is tolerated
    pub const fn is_optional(self) -> bool {
        matches!(self, Self::Erax | Self::Alow)
    }

    /// Find the section carrying a tag
    pub fn from_tag(tag: &[u8; 4]) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.tag() == tag)
    }

    /// The last section of the catalog
    pub const fn last() -> Self {
        Self::Unit
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(String::from_utf8_lossy(self.tag()).trim_end())
    }
}
