//! Allow-flag validation
//!
//! An allow-flag is a 32-bit mask granting units, spells or upgrades to a
//! player. Each catalog reserves a set of bits that must stay clear, and a
//! zero mask is never valid.

use crate::catalog::{self, SpellEntry, TwinEntry};
use crate::pud::error::{PudError, PudResult};
use std::fmt;

/// Reserved bits of a unit allow-flag
pub const UNIT_RESERVED: u32 = (1 << 13) | (1 << 31);

/// Reserved bits of a spell allow-flag
pub const SPELL_RESERVED: u32 = 0xfff0_0000 | (1 << 2) | (1 << 12);

/// Reserved bits of an upgrade allow-flag
pub const UPGRADE_RESERVED: u32 = 0xfff0_0000 | (1 << 10) | (1 << 11) | (1 << 14) | (1 << 15);

/// Allow-flag family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AllowCatalog {
    /// Units and buildings
    Unit,
    /// Spells
    Spell,
    /// Upgrades
    Upgrade,
}

impl AllowCatalog {
    /// Bits that must be zero
    pub const fn reserved(self) -> u32 {
        match self {
            Self::Unit => UNIT_RESERVED,
            Self::Spell => SPELL_RESERVED,
            Self::Upgrade => UPGRADE_RESERVED,
        }
    }

    /// Mask with every grantable bit set
    pub const fn full_mask(self) -> u32 {
        !self.reserved()
    }

    /// Lowercase catalog name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Unit => "unit",
            Self::Spell => "spell",
            Self::Upgrade => "upgrade",
        }
    }

    /// Whether `flag` is non-zero with every reserved bit clear
    pub const fn is_valid(self, flag: u32) -> bool {
        flag != 0 && flag & self.reserved() == 0
    }

    /// Return `flag` unchanged if valid
    pub fn validate(self, flag: u32) -> PudResult<u32> {
        if self.is_valid(flag) {
            Ok(flag)
        } else {
            Err(PudError::InvalidFlag {
                catalog: self.name(),
                flag,
            })
        }
    }
}

impl fmt::Display for AllowCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether a unit allow-flag is valid
pub const fn unit_allow_valid(flag: u32) -> bool {
    AllowCatalog::Unit.is_valid(flag)
}

/// Whether a spell allow-flag is valid
pub const fn spell_allow_valid(flag: u32) -> bool {
    AllowCatalog::Spell.is_valid(flag)
}

/// Whether an upgrade allow-flag is valid
pub const fn upgrade_allow_valid(flag: u32) -> bool {
    AllowCatalog::Upgrade.is_valid(flag)
}

/// Zero-based position of the single bit set in `flag`
///
/// Zero and multi-bit masks are rejected.
pub fn flag_to_index(flag: u32) -> PudResult<usize> {
    if flag.is_power_of_two() {
        Ok(flag.trailing_zeros() as usize)
    } else {
        Err(PudError::InvalidFlag {
            catalog: "single-bit",
            flag,
        })
    }
}

/// Unit pair granted by a single-bit unit flag
pub fn unit_allow_entry(flag: u32) -> PudResult<Option<&'static TwinEntry>> {
    Ok(catalog::unit_twin(flag_to_index(flag)?))
}

/// Spell granted by a single-bit spell flag
pub fn spell_allow_entry(flag: u32) -> PudResult<Option<&'static SpellEntry>> {
    Ok(catalog::spell_twin(flag_to_index(flag)?))
}

/// Upgrade pair granted by a single-bit upgrade flag
pub fn upgrade_allow_entry(flag: u32) -> PudResult<Option<&'static TwinEntry>> {
    Ok(catalog::upgrade_twin(flag_to_index(flag)?))
}

/// Render a mask as 32 binary digits, most significant first
pub fn flag_to_binary(flag: u32) -> String {
    format!("{flag:032b}")
}
